//! Example: Check a key and look up a person and a company.
//!
//! Reads the key from `TUESDAY_API_KEY`.
//!
//! Run with: cargo run --example basic_usage -- ada@example.com acme.com

use tuesday_core::schema::validate;
use tuesday_core::{ToolArgs, ToolName};
use tuesday_sdk::{TuesdayClient, TuesdayError, TuesdayResult};

#[tokio::main]
async fn main() -> TuesdayResult<()> {
    tracing_subscriber::fmt::init();

    let api_key = std::env::var("TUESDAY_API_KEY").unwrap_or_default();
    let client = TuesdayClient::builder().api_key(api_key).build()?;

    let mut args = std::env::args().skip(1);
    let email = args.next().unwrap_or_else(|| "ada@example.com".to_string());
    let domain = args.next().unwrap_or_else(|| "acme.com".to_string());

    // Check the key first
    let workspace = client.auth().check().await?;
    println!("Workspace: {} ({})", workspace.data.name, workspace.data.id);

    // Person by email
    match validate(ToolName::LookupPersonByEmail, &serde_json::json!({ "email": email })) {
        Ok(ToolArgs::LookupPersonByEmail(lookup)) => {
            let person = client.people().lookup_by_email(&lookup).await?;
            println!("\nPerson:\n{:#}", serde_json::Value::Object(person.data));
        }
        Ok(_) => unreachable!("validated as an email lookup"),
        Err(err) => println!("\nSkipping email lookup: {}", err),
    }

    // Company employee count, tolerating unknown domains
    let count_args = serde_json::json!({ "domain": domain });
    if let Ok(ToolArgs::GetEmployeeCount(lookup)) = validate(ToolName::GetEmployeeCount, &count_args) {
        match client.companies().employee_count(&lookup).await {
            Ok(count) => println!("\nEmployee count:\n{:#}", serde_json::Value::Object(count.data)),
            Err(TuesdayError::Api { status: 404, message }) => {
                println!("\nNo company found for {}: {}", domain, message)
            }
            Err(err) => return Err(err),
        }
    }

    Ok(())
}

//! # Tuesday SDK
//!
//! Rust client for the Tuesday people and company data API.
//!
//! Every operation takes an argument record that has already been validated
//! by `tuesday-core` and returns the API's response envelope. Single-entity
//! endpoints decode into an object payload, search endpoints into a list.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tuesday_core::schema::validate;
//! use tuesday_core::{ToolArgs, ToolName};
//! use tuesday_sdk::{TuesdayClient, TuesdayResult};
//!
//! # async fn example() -> TuesdayResult<()> {
//! let client = TuesdayClient::builder()
//!     .api_key("tk_your_api_key")
//!     .build()?;
//!
//! let workspace = client.auth().check().await?;
//! println!("Workspace: {:?}", workspace.data.name);
//!
//! let args = serde_json::json!({"email": "ada@example.com"});
//! if let Ok(ToolArgs::LookupPersonByEmail(lookup)) = validate(ToolName::LookupPersonByEmail, &args) {
//!     let person = client.people().lookup_by_email(&lookup).await?;
//!     println!("{}", serde_json::to_string_pretty(&person.data).unwrap_or_default());
//! }
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod transport;

pub use api::{Envelope, Workspace};
pub use client::{TuesdayClient, TuesdayClientBuilder};
pub use config::{default_base_url, ClientConfig, DEFAULT_BASE_URL};
pub use error::{TuesdayError, TuesdayResult};

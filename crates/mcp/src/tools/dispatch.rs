// Tool dispatch: credential, validation, remote call, formatting

use super::error::DispatchError;
use super::format::{self, Subject};
use crate::protocol::ToolSchema;
use serde_json::Value;
use std::time::Duration;
use tracing::{info, warn};
use tuesday_core::catalog::API_KEY_ARG;
use tuesday_core::{list_tools, validate, ApiKey, ToolArgs, ToolName};
use tuesday_sdk::{default_base_url, ClientConfig, TuesdayClient};
use url::Url;

/// Settings shared by every call the dispatcher makes.
#[derive(Debug, Clone)]
pub struct DispatcherConfig {
    pub base_url: Url,
    /// Key used when a call carries no `api_key` of its own.
    pub fallback_api_key: Option<ApiKey>,
    pub timeout: Option<Duration>,
}

impl Default for DispatcherConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            fallback_api_key: None,
            timeout: None,
        }
    }
}

/// Routes `tools/call` requests to the Tuesday API.
///
/// Holds no per-call state. A fresh client is bound to the resolved key on
/// every invocation, so concurrent calls with different keys never share one.
#[derive(Debug, Clone)]
pub struct Dispatcher {
    config: DispatcherConfig,
}

impl Dispatcher {
    pub fn new(config: DispatcherConfig) -> Self {
        Self { config }
    }

    /// Catalog entries in protocol form.
    pub fn list_tools(&self) -> Vec<ToolSchema> {
        list_tools().iter().map(ToolSchema::from).collect()
    }

    /// Run one tool call and render its text result.
    pub async fn invoke(&self, name: &str, arguments: &Value) -> Result<String, DispatchError> {
        let result = self.try_invoke(name, arguments).await;
        if let Err(err) = &result {
            warn!(tool = %name, error = %err, "Tool call failed");
        }
        result
    }

    async fn try_invoke(&self, name: &str, arguments: &Value) -> Result<String, DispatchError> {
        let api_key = self.resolve_credential(arguments)?;
        let tool: ToolName = name.parse()?;
        let args = validate(tool, arguments)?;

        let client = TuesdayClient::from_config(ClientConfig {
            base_url: self.config.base_url.clone(),
            api_key,
            timeout: self.config.timeout,
        })?;

        info!(tool = %tool, "Calling Tuesday API");
        call(&client, &args).await
    }

    /// Per-call key first, then the configured fallback. A blank per-call
    /// key counts as absent.
    fn resolve_credential(&self, arguments: &Value) -> Result<ApiKey, DispatchError> {
        match arguments.get(API_KEY_ARG) {
            None | Some(Value::Null) => {}
            Some(Value::String(key)) => {
                if let Some(key) = ApiKey::new(key.as_str()) {
                    return Ok(key);
                }
            }
            Some(_) => return Err(DispatchError::InvalidCredential),
        }

        self.config
            .fallback_api_key
            .clone()
            .ok_or(DispatchError::MissingCredential)
    }
}

async fn call(client: &TuesdayClient, args: &ToolArgs) -> Result<String, DispatchError> {
    let people = client.people();
    let companies = client.companies();

    let text = match args {
        ToolArgs::CheckApiKey => format::workspace(&client.auth().check().await?.data),
        ToolArgs::SearchPeople(search) => format::search(
            Subject::People,
            search.pagination.page,
            &people.search(search).await?.data,
        )?,
        ToolArgs::LookupPerson(lookup) => {
            format::entity(format::PERSON_FOUND, &people.lookup(lookup).await?.data)?
        }
        ToolArgs::LookupPersonByEmail(lookup) => format::entity(
            format::PERSON_FOUND_BY_EMAIL,
            &people.lookup_by_email(lookup).await?.data,
        )?,
        ToolArgs::LookupPersonByPhone(lookup) => format::entity(
            format::PERSON_FOUND_BY_PHONE,
            &people.lookup_by_phone(lookup).await?.data,
        )?,
        ToolArgs::GetPersonProfile(lookup) => {
            format::entity(format::PERSON_PROFILE, &people.profile(lookup).await?.data)?
        }
        ToolArgs::SearchCompanies(search) => format::search(
            Subject::Companies,
            search.pagination.page,
            &companies.search(search).await?.data,
        )?,
        ToolArgs::GetCompanyProfile(lookup) => {
            format::entity(format::COMPANY_PROFILE, &companies.profile(lookup).await?.data)?
        }
        ToolArgs::GetEmployeeCount(lookup) => format::entity(
            format::EMPLOYEE_COUNT,
            &companies.employee_count(lookup).await?.data,
        )?,
        ToolArgs::SearchEmployees(search) => format::search(
            Subject::Employees,
            search.pagination.page,
            &companies.search_employees(search).await?.data,
        )?,
    };

    Ok(text)
}

// Argument schemas: raw JSON in, typed and defaulted records out

pub mod args;
pub mod fragments;
mod reader;

pub use reader::{ArgReader, FieldDecl, FieldKind, FieldSpec, SchemaShape};

use crate::tool::{ToolArgs, ToolName};
use args::{
    CompanyProfileLookup, CompanySearch, EmailLookup, EmployeeCountLookup, EmployeeSearch,
    PeopleSearch, PersonLookup, PersonProfileLookup, PhoneLookup,
};
use serde_json::{Map, Value};
use tracing::debug;

/// A record (or fragment of one) that can be read from raw arguments
pub trait Schema: Sized {
    fn read(reader: &mut ArgReader<'_>) -> Self;
}

/// One violated constraint
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Offending field, `None` for constraints spanning several fields
    pub field: Option<String>,
    pub message: String,
}

impl Violation {
    pub fn field(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: Some(field.into()),
            message: message.into(),
        }
    }

    pub fn general(message: impl Into<String>) -> Self {
        Self {
            field: None,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.field {
            Some(field) => write!(f, "{} {}", field, self.message),
            None => f.write_str(&self.message),
        }
    }
}

/// Arguments for a tool did not satisfy its schema
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Invalid arguments for {tool}: {}", join_violations(.violations))]
pub struct ValidationError {
    pub tool: ToolName,
    pub violations: Vec<Violation>,
}

fn join_violations(violations: &[Violation]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn read_args(tool: ToolName, reader: &mut ArgReader<'_>) -> ToolArgs {
    match tool {
        ToolName::CheckApiKey => ToolArgs::CheckApiKey,
        ToolName::SearchPeople => ToolArgs::SearchPeople(PeopleSearch::read(reader)),
        ToolName::LookupPerson => ToolArgs::LookupPerson(PersonLookup::read(reader)),
        ToolName::LookupPersonByEmail => ToolArgs::LookupPersonByEmail(EmailLookup::read(reader)),
        ToolName::LookupPersonByPhone => ToolArgs::LookupPersonByPhone(PhoneLookup::read(reader)),
        ToolName::GetPersonProfile => {
            ToolArgs::GetPersonProfile(PersonProfileLookup::read(reader))
        }
        ToolName::SearchCompanies => ToolArgs::SearchCompanies(CompanySearch::read(reader)),
        ToolName::GetCompanyProfile => {
            ToolArgs::GetCompanyProfile(CompanyProfileLookup::read(reader))
        }
        ToolName::GetEmployeeCount => {
            ToolArgs::GetEmployeeCount(EmployeeCountLookup::read(reader))
        }
        ToolName::SearchEmployees => ToolArgs::SearchEmployees(EmployeeSearch::read(reader)),
    }
}

/// Validate and normalize raw arguments for `tool`.
///
/// A missing or `null` argument value is read as an empty object. Keys the
/// schema does not declare (including `api_key`) are dropped. Every violation
/// found is reported; no partial record is ever returned.
pub fn validate(tool: ToolName, raw: &Value) -> Result<ToolArgs, ValidationError> {
    let empty = Map::new();
    let args = match raw {
        Value::Object(args) => args,
        Value::Null => &empty,
        _ => {
            return Err(ValidationError {
                tool,
                violations: vec![Violation::general("arguments must be a JSON object")],
            })
        }
    };

    let mut reader = ArgReader::new(args);
    let parsed = read_args(tool, &mut reader);
    reader.finish(parsed).map_err(|violations| {
        debug!(tool = %tool, violations = violations.len(), "Argument validation failed");
        ValidationError { tool, violations }
    })
}

/// Declared fields of `tool`, in the order its schema reads them
pub fn shape(tool: ToolName) -> SchemaShape {
    let empty = Map::new();
    let mut reader = ArgReader::new(&empty);
    let _ = read_args(tool, &mut reader);
    reader.into_shape()
}

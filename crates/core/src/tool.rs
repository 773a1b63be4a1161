// Tool names and their normalized argument records

use crate::schema::args::{
    CompanyProfileLookup, CompanySearch, EmailLookup, EmployeeCountLookup, EmployeeSearch,
    PeopleSearch, PersonLookup, PersonProfileLookup, PhoneLookup,
};
use std::str::FromStr;

/// Every tool the server exposes.
///
/// Dispatch, validation and the catalog all match on this enum, so adding a
/// variant fails to compile until each of them handles it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToolName {
    CheckApiKey,
    SearchPeople,
    LookupPerson,
    LookupPersonByEmail,
    LookupPersonByPhone,
    GetPersonProfile,
    SearchCompanies,
    GetCompanyProfile,
    GetEmployeeCount,
    SearchEmployees,
}

impl ToolName {
    /// All tools, in catalog order
    pub const ALL: [ToolName; 10] = [
        ToolName::CheckApiKey,
        ToolName::SearchPeople,
        ToolName::LookupPerson,
        ToolName::LookupPersonByEmail,
        ToolName::LookupPersonByPhone,
        ToolName::GetPersonProfile,
        ToolName::SearchCompanies,
        ToolName::GetCompanyProfile,
        ToolName::GetEmployeeCount,
        ToolName::SearchEmployees,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ToolName::CheckApiKey => "check_api_key",
            ToolName::SearchPeople => "search_people",
            ToolName::LookupPerson => "lookup_person",
            ToolName::LookupPersonByEmail => "lookup_person_by_email",
            ToolName::LookupPersonByPhone => "lookup_person_by_phone",
            ToolName::GetPersonProfile => "get_person_profile",
            ToolName::SearchCompanies => "search_companies",
            ToolName::GetCompanyProfile => "get_company_profile",
            ToolName::GetEmployeeCount => "get_employee_count",
            ToolName::SearchEmployees => "search_employees",
        }
    }

    /// Human-readable description surfaced through `tools/list`
    pub fn description(&self) -> &'static str {
        match self {
            ToolName::CheckApiKey => {
                "Validate your Tuesday API key and retrieve workspace information"
            }
            ToolName::SearchPeople => "Search for people using advanced filters and criteria",
            ToolName::LookupPerson => {
                "Find a person using name, company, and other identifying information"
            }
            ToolName::LookupPersonByEmail => "Find a person using their email address",
            ToolName::LookupPersonByPhone => "Find a person using their phone number",
            ToolName::GetPersonProfile => {
                "Get comprehensive profile information for a person using their LinkedIn URL"
            }
            ToolName::SearchCompanies => {
                "Search for companies using advanced filters including industry, size, location, and more"
            }
            ToolName::GetCompanyProfile => {
                "Get comprehensive company information using LinkedIn URL or domain"
            }
            ToolName::GetEmployeeCount => {
                "Get employee count and headcount information for a company"
            }
            ToolName::SearchEmployees => "Search for employees within a specific company",
        }
    }
}

impl std::fmt::Display for ToolName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned when a tool name matches nothing in [`ToolName::ALL`]
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown tool: {0}")]
pub struct UnknownTool(pub String);

impl FromStr for ToolName {
    type Err = UnknownTool;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ToolName::ALL
            .iter()
            .copied()
            .find(|tool| tool.as_str() == s)
            .ok_or_else(|| UnknownTool(s.to_string()))
    }
}

/// Validated, normalized arguments for one tool call
#[derive(Debug, Clone, PartialEq)]
pub enum ToolArgs {
    CheckApiKey,
    SearchPeople(PeopleSearch),
    LookupPerson(PersonLookup),
    LookupPersonByEmail(EmailLookup),
    LookupPersonByPhone(PhoneLookup),
    GetPersonProfile(PersonProfileLookup),
    SearchCompanies(CompanySearch),
    GetCompanyProfile(CompanyProfileLookup),
    GetEmployeeCount(EmployeeCountLookup),
    SearchEmployees(EmployeeSearch),
}

impl ToolArgs {
    pub fn tool(&self) -> ToolName {
        match self {
            ToolArgs::CheckApiKey => ToolName::CheckApiKey,
            ToolArgs::SearchPeople(_) => ToolName::SearchPeople,
            ToolArgs::LookupPerson(_) => ToolName::LookupPerson,
            ToolArgs::LookupPersonByEmail(_) => ToolName::LookupPersonByEmail,
            ToolArgs::LookupPersonByPhone(_) => ToolName::LookupPersonByPhone,
            ToolArgs::GetPersonProfile(_) => ToolName::GetPersonProfile,
            ToolArgs::SearchCompanies(_) => ToolName::SearchCompanies,
            ToolArgs::GetCompanyProfile(_) => ToolName::GetCompanyProfile,
            ToolArgs::GetEmployeeCount(_) => ToolName::GetEmployeeCount,
            ToolArgs::SearchEmployees(_) => ToolName::SearchEmployees,
        }
    }

    /// Serialize the normalized arguments as they are sent to the remote API
    pub fn to_json(&self) -> serde_json::Result<serde_json::Value> {
        match self {
            ToolArgs::CheckApiKey => Ok(serde_json::Value::Object(Default::default())),
            ToolArgs::SearchPeople(args) => serde_json::to_value(args),
            ToolArgs::LookupPerson(args) => serde_json::to_value(args),
            ToolArgs::LookupPersonByEmail(args) => serde_json::to_value(args),
            ToolArgs::LookupPersonByPhone(args) => serde_json::to_value(args),
            ToolArgs::GetPersonProfile(args) => serde_json::to_value(args),
            ToolArgs::SearchCompanies(args) => serde_json::to_value(args),
            ToolArgs::GetCompanyProfile(args) => serde_json::to_value(args),
            ToolArgs::GetEmployeeCount(args) => serde_json::to_value(args),
            ToolArgs::SearchEmployees(args) => serde_json::to_value(args),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_tool_names_are_unique() {
        let names: HashSet<_> = ToolName::ALL.iter().map(|t| t.as_str()).collect();
        assert_eq!(names.len(), ToolName::ALL.len());
    }

    #[test]
    fn test_tool_name_parse() {
        for tool in ToolName::ALL {
            assert_eq!(tool.as_str().parse::<ToolName>().unwrap(), tool);
        }

        let err = "delete_everything".parse::<ToolName>().unwrap_err();
        assert_eq!(err.to_string(), "Unknown tool: delete_everything");
    }
}

// Text rendering of Tuesday API responses

use serde::Serialize;
use serde_json::Value;
use tuesday_sdk::Workspace;

pub const PERSON_FOUND: &str = "Person found";
pub const PERSON_FOUND_BY_EMAIL: &str = "Person found by email";
pub const PERSON_FOUND_BY_PHONE: &str = "Person found by phone";
pub const PERSON_PROFILE: &str = "Person profile";
pub const COMPANY_PROFILE: &str = "Company profile";
pub const EMPLOYEE_COUNT: &str = "Employee count";

/// What a search result list contains
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Subject {
    People,
    Companies,
    Employees,
}

impl Subject {
    pub fn noun(&self) -> &'static str {
        match self {
            Self::People => "people",
            Self::Companies => "companies",
            Self::Employees => "employees",
        }
    }
}

/// Summary of a successful key check
pub fn workspace(workspace: &Workspace) -> String {
    format!(
        "API Key validated successfully!\n\nWorkspace: {}\nID: {}\nUser ID: {}",
        scalar(&workspace.name),
        scalar(&workspace.id),
        scalar(&workspace.user_id),
    )
}

/// Labeled dump of one entity
pub fn entity<T: Serialize + ?Sized>(label: &str, data: &T) -> serde_json::Result<String> {
    Ok(format!("{}:\n\n{}", label, serde_json::to_string_pretty(data)?))
}

/// Count and page header followed by the result list
pub fn search(subject: Subject, page: u32, items: &[Value]) -> serde_json::Result<String> {
    Ok(format!(
        "Found {} {} (Page {}):\n\n{}",
        items.len(),
        subject.noun(),
        page,
        serde_json::to_string_pretty(items)?
    ))
}

// Strings print bare, absent fields as "unknown"
fn scalar(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        Value::Null => "unknown".to_string(),
        other => other.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_workspace_summary() {
        let workspace = Workspace {
            id: json!("ws_1"),
            name: json!("Acme"),
            user_id: json!(42),
        };

        assert_eq!(
            super::workspace(&workspace),
            "API Key validated successfully!\n\nWorkspace: Acme\nID: ws_1\nUser ID: 42"
        );
    }

    #[test]
    fn test_workspace_missing_fields() {
        let text = super::workspace(&Workspace::default());
        assert!(text.ends_with("Workspace: unknown\nID: unknown\nUser ID: unknown"));
    }

    #[test]
    fn test_entity_uses_two_space_indent() {
        let text = entity(PERSON_FOUND_BY_EMAIL, &json!({"id": "1"})).unwrap();
        assert_eq!(text, "Person found by email:\n\n{\n  \"id\": \"1\"\n}");
    }

    #[test]
    fn test_search_header() {
        let items = vec![json!({"name": "A"}), json!({"name": "B"})];
        let text = search(Subject::Companies, 3, &items).unwrap();

        assert!(text.starts_with("Found 2 companies (Page 3):\n\n["));
    }

    #[test]
    fn test_empty_search() {
        let text = search(Subject::Employees, 1, &[]).unwrap();
        assert_eq!(text, "Found 0 employees (Page 1):\n\n[]");
    }
}

use serde::{Deserialize, Serialize};

/// A JSON object as returned by single-entity endpoints
pub type JsonObject = serde_json::Map<String, serde_json::Value>;

/// Opt-in switch for a data category that costs extra credits.
///
/// The remote API bills some categories (emails, phone numbers, funding data,
/// ...) per result, so every toggle starts out as `Exclude`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Inclusion {
    Include,
    #[default]
    Exclude,
}

impl Inclusion {
    pub fn as_str(&self) -> &'static str {
        match self {
            Inclusion::Include => "include",
            Inclusion::Exclude => "exclude",
        }
    }

    /// Parse the wire value, `None` for anything other than "include"/"exclude"
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "include" => Some(Inclusion::Include),
            "exclude" => Some(Inclusion::Exclude),
            _ => None,
        }
    }
}

impl std::fmt::Display for Inclusion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Numeric filter with independently optional bounds.
///
/// `min <= max` is not enforced here; the remote API decides what an
/// inverted range means.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct NumericRange {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max: Option<f64>,
}

impl NumericRange {
    pub fn new(min: Option<f64>, max: Option<f64>) -> Self {
        Self { min, max }
    }
}

/// Head count filter for one department
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoleCount {
    pub department: String,
    pub range: NumericRange,
}

/// Tuesday API key.
///
/// Debug output is redacted so the key never ends up in logs.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiKey(String);

impl ApiKey {
    /// Wrap a key, `None` if it is empty or whitespace only
    pub fn new(key: impl Into<String>) -> Option<Self> {
        let key = key.into();
        if key.trim().is_empty() {
            None
        } else {
            Some(Self(key))
        }
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for ApiKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("ApiKey(***)")
    }
}

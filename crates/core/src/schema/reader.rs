// Field-by-field reader over raw tool arguments

use super::Violation;
use crate::types::{Inclusion, NumericRange, RoleCount};
use once_cell::sync::Lazy;
use regex::Regex;
use serde_json::{Map, Value};
use url::Url;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*\.[A-Za-z]{2,}$",
    )
    .expect("email pattern compiles")
});

/// Name and description of one argument field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub description: &'static str,
}

impl FieldSpec {
    pub const fn new(name: &'static str, description: &'static str) -> Self {
        Self { name, description }
    }
}

/// Semantic type of a field, as declared by the reader method that consumed it
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FieldKind {
    Text,
    Email,
    Url,
    TextList,
    Flag,
    Toggle,
    Integer {
        min: u32,
        max: Option<u32>,
        default: u32,
    },
    Range {
        lower: Option<f64>,
        upper: Option<f64>,
    },
    RoleCounts,
}

/// One field a schema accepts
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FieldDecl {
    pub spec: &'static FieldSpec,
    pub kind: FieldKind,
    pub required: bool,
}

/// Everything a schema declares while reading: its fields, in order, and the
/// pair of alternative identifiers it needs at least one of
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SchemaShape {
    pub fields: Vec<FieldDecl>,
    pub any_of: Option<[&'static str; 2]>,
}

/// Reads typed values out of a raw argument object.
///
/// Every read declares its field, so running a schema over an empty object
/// yields the schema's shape. Violations are collected, never thrown; the
/// caller decides at [`ArgReader::finish`] whether the record is usable.
pub struct ArgReader<'a> {
    args: &'a Map<String, Value>,
    violations: Vec<Violation>,
    shape: SchemaShape,
}

impl<'a> ArgReader<'a> {
    pub fn new(args: &'a Map<String, Value>) -> Self {
        Self {
            args,
            violations: Vec::new(),
            shape: SchemaShape::default(),
        }
    }

    fn declare(&mut self, spec: &'static FieldSpec, kind: FieldKind, required: bool) {
        self.shape.fields.push(FieldDecl {
            spec,
            kind,
            required,
        });
    }

    // null is treated the same as an absent key
    fn get(&self, spec: &FieldSpec) -> Option<&'a Value> {
        self.args.get(spec.name).filter(|value| !value.is_null())
    }

    fn reject(&mut self, field: impl Into<String>, message: impl Into<String>) {
        self.violations.push(Violation::field(field, message));
    }

    fn string_value(&mut self, spec: &FieldSpec) -> Option<String> {
        match self.get(spec)? {
            Value::String(value) => Some(value.clone()),
            _ => {
                self.reject(spec.name, "must be a string");
                None
            }
        }
    }

    fn required_string(&mut self, spec: &FieldSpec) -> Option<String> {
        if self.get(spec).is_none() {
            self.reject(spec.name, "is required");
            return None;
        }
        let value = self.string_value(spec)?;
        if value.trim().is_empty() {
            self.reject(spec.name, "must not be empty");
            return None;
        }
        Some(value)
    }

    fn checked_url(&mut self, spec: &FieldSpec, value: String) -> Option<String> {
        match Url::parse(&value) {
            Ok(url) if url.has_host() => Some(value),
            _ => {
                self.reject(spec.name, "must be a valid URL");
                None
            }
        }
    }

    /// Optional free-form string
    pub fn text(&mut self, spec: &'static FieldSpec) -> Option<String> {
        self.declare(spec, FieldKind::Text, false);
        self.string_value(spec)
    }

    /// Required, non-empty string
    pub fn required_text(&mut self, spec: &'static FieldSpec) -> String {
        self.declare(spec, FieldKind::Text, true);
        self.required_string(spec).unwrap_or_default()
    }

    /// Required email address
    pub fn email(&mut self, spec: &'static FieldSpec) -> String {
        self.declare(spec, FieldKind::Email, true);
        match self.required_string(spec) {
            Some(value) if EMAIL_PATTERN.is_match(value.trim()) => value,
            Some(_) => {
                self.reject(spec.name, "must be a valid email address");
                String::new()
            }
            None => String::new(),
        }
    }

    /// Optional absolute URL
    pub fn url(&mut self, spec: &'static FieldSpec) -> Option<String> {
        self.declare(spec, FieldKind::Url, false);
        let value = self.string_value(spec)?;
        self.checked_url(spec, value)
    }

    /// Required absolute URL
    pub fn required_url(&mut self, spec: &'static FieldSpec) -> String {
        self.declare(spec, FieldKind::Url, true);
        self.required_string(spec)
            .and_then(|value| self.checked_url(spec, value))
            .unwrap_or_default()
    }

    /// Optional list of strings
    pub fn text_list(&mut self, spec: &'static FieldSpec) -> Option<Vec<String>> {
        self.declare(spec, FieldKind::TextList, false);
        let items = match self.get(spec)? {
            Value::Array(items) => items,
            _ => {
                self.reject(spec.name, "must be a list of strings");
                return None;
            }
        };

        let mut values = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            match item {
                Value::String(value) => values.push(value.clone()),
                _ => self.reject(format!("{}[{}]", spec.name, index), "must be a string"),
            }
        }
        Some(values)
    }

    /// Optional boolean
    pub fn flag(&mut self, spec: &'static FieldSpec) -> Option<bool> {
        self.declare(spec, FieldKind::Flag, false);
        match self.get(spec)? {
            Value::Bool(value) => Some(*value),
            _ => {
                self.reject(spec.name, "must be a boolean");
                None
            }
        }
    }

    /// Inclusion toggle, `exclude` when absent
    pub fn toggle(&mut self, spec: &'static FieldSpec) -> Inclusion {
        self.declare(spec, FieldKind::Toggle, false);
        let Some(value) = self.get(spec) else {
            return Inclusion::default();
        };

        match value.as_str().and_then(Inclusion::parse) {
            Some(inclusion) => inclusion,
            None => {
                self.reject(spec.name, "must be one of \"include\", \"exclude\"");
                Inclusion::default()
            }
        }
    }

    /// Whole number in `[min, max]`, `default` when absent.
    ///
    /// Out-of-range values are rejected rather than clamped.
    pub fn integer(
        &mut self,
        spec: &'static FieldSpec,
        min: u32,
        max: Option<u32>,
        default: u32,
    ) -> u32 {
        self.declare(spec, FieldKind::Integer { min, max, default }, false);
        let Some(value) = self.get(spec) else {
            return default;
        };

        let Some(number) = value.as_f64() else {
            self.reject(spec.name, "must be a number");
            return default;
        };
        if number.fract() != 0.0 {
            self.reject(spec.name, "must be a whole number");
            return default;
        }
        if number < f64::from(min) {
            self.reject(spec.name, format!("must be at least {}", min));
            return default;
        }
        let upper = max.unwrap_or(u32::MAX);
        if number > f64::from(upper) {
            self.reject(spec.name, format!("must be at most {}", upper));
            return default;
        }
        number as u32
    }

    /// Optional `{min, max}` filter with unbounded ends
    pub fn range(&mut self, spec: &'static FieldSpec) -> Option<NumericRange> {
        self.bounded_range(spec, None, None)
    }

    /// Optional `{min, max}` filter whose ends must each lie in `[lower, upper]`
    pub fn bounded_range(
        &mut self,
        spec: &'static FieldSpec,
        lower: Option<f64>,
        upper: Option<f64>,
    ) -> Option<NumericRange> {
        self.declare(spec, FieldKind::Range { lower, upper }, false);
        let value = self.get(spec)?;
        self.parse_range(spec.name, value, lower, upper)
    }

    fn parse_range(
        &mut self,
        field: &str,
        value: &Value,
        lower: Option<f64>,
        upper: Option<f64>,
    ) -> Option<NumericRange> {
        let Value::Object(object) = value else {
            self.reject(field, "must be an object with optional min and max");
            return None;
        };

        let mut bound = |name: &str| -> Option<f64> {
            let value = object.get(name).filter(|v| !v.is_null())?;
            let path = format!("{}.{}", field, name);
            let Some(number) = value.as_f64() else {
                self.reject(path, "must be a number");
                return None;
            };
            if lower.is_some_and(|lower| number < lower) || upper.is_some_and(|upper| number > upper)
            {
                self.reject(
                    path,
                    format!(
                        "must be between {} and {}",
                        lower.unwrap_or(f64::MIN),
                        upper.unwrap_or(f64::MAX)
                    ),
                );
                return None;
            }
            Some(number)
        };

        let min = bound("min");
        let max = bound("max");
        Some(NumericRange::new(min, max))
    }

    /// Optional list of `{department, range}` head count filters
    pub fn role_counts(&mut self, spec: &'static FieldSpec) -> Option<Vec<RoleCount>> {
        self.declare(spec, FieldKind::RoleCounts, false);
        let Value::Array(items) = self.get(spec)? else {
            self.reject(spec.name, "must be a list of {department, range} objects");
            return None;
        };

        let mut counts = Vec::with_capacity(items.len());
        for (index, item) in items.iter().enumerate() {
            let path = format!("{}[{}]", spec.name, index);
            let Value::Object(entry) = item else {
                self.reject(path, "must be an object");
                continue;
            };

            let department = match entry.get("department") {
                Some(Value::String(department)) => Some(department.clone()),
                Some(Value::Null) | None => {
                    self.reject(format!("{}.department", path), "is required");
                    None
                }
                Some(_) => {
                    self.reject(format!("{}.department", path), "must be a string");
                    None
                }
            };
            let range = match entry.get("range").filter(|v| !v.is_null()) {
                Some(range) => self.parse_range(&format!("{}.range", path), range, None, None),
                None => {
                    self.reject(format!("{}.range", path), "is required");
                    None
                }
            };

            if let (Some(department), Some(range)) = (department, range) {
                counts.push(RoleCount { department, range });
            }
        }
        Some(counts)
    }

    /// Require at least one of two alternative identifiers to be a non-empty
    /// string. Both may be given.
    pub fn any_of(&mut self, first: &'static FieldSpec, second: &'static FieldSpec) {
        self.shape.any_of = Some([first.name, second.name]);

        let present = |spec: &FieldSpec| {
            self.get(spec)
                .and_then(Value::as_str)
                .is_some_and(|value| !value.trim().is_empty())
        };
        if !present(first) && !present(second) {
            self.violations.push(Violation::general(format!(
                "Either {} or {} is required",
                first.name, second.name
            )));
        }
    }

    /// Hand back the record, or every violation found while building it
    pub fn finish<T>(self, value: T) -> Result<T, Vec<Violation>> {
        if self.violations.is_empty() {
            Ok(value)
        } else {
            Err(self.violations)
        }
    }

    pub fn into_shape(self) -> SchemaShape {
        self.shape
    }
}

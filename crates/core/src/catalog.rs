// Static tool catalog answering discovery queries

use crate::schema::{self, FieldDecl, FieldKind};
use crate::tool::ToolName;
use once_cell::sync::Lazy;
use serde::Serialize;
use serde_json::{json, Map, Value};

/// Name of the per-call credential argument every tool accepts
pub const API_KEY_ARG: &str = "api_key";

const API_KEY_DESCRIPTION: &str =
    "Tuesday API key (optional if TUESDAY_API_KEY environment variable is set)";

/// Discovery entry for one tool
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolDescriptor {
    pub name: &'static str,
    pub description: &'static str,
    #[serde(rename = "inputSchema")]
    pub input_schema: Value,
}

static CATALOG: Lazy<Vec<ToolDescriptor>> =
    Lazy::new(|| ToolName::ALL.iter().map(|tool| describe(*tool)).collect());

/// Every tool descriptor, in [`ToolName::ALL`] order.
///
/// Built once; repeated calls return the same slice.
pub fn list_tools() -> &'static [ToolDescriptor] {
    &CATALOG
}

/// Build the descriptor for one tool from its argument schema
pub fn describe(tool: ToolName) -> ToolDescriptor {
    let shape = schema::shape(tool);

    let mut properties = Map::new();
    properties.insert(
        API_KEY_ARG.to_string(),
        json!({"type": "string", "description": API_KEY_DESCRIPTION}),
    );
    for decl in &shape.fields {
        properties.insert(decl.spec.name.to_string(), property(decl));
    }

    let required: Vec<&str> = shape
        .fields
        .iter()
        .filter(|decl| decl.required)
        .map(|decl| decl.spec.name)
        .collect();

    let mut input_schema = json!({
        "type": "object",
        "properties": properties,
        "required": required,
    });
    if let Some([first, second]) = shape.any_of {
        input_schema["anyOf"] = json!([
            {"required": [first]},
            {"required": [second]},
        ]);
    }

    ToolDescriptor {
        name: tool.as_str(),
        description: tool.description(),
        input_schema,
    }
}

fn range_schema(lower: Option<f64>, upper: Option<f64>) -> Value {
    let mut bound = json!({"type": "number"});
    if let Some(lower) = lower {
        bound["minimum"] = json!(lower);
    }
    if let Some(upper) = upper {
        bound["maximum"] = json!(upper);
    }
    json!({
        "type": "object",
        "properties": {"min": bound, "max": bound},
    })
}

fn property(decl: &FieldDecl) -> Value {
    let mut schema = match decl.kind {
        FieldKind::Text => json!({"type": "string"}),
        FieldKind::Email => json!({"type": "string", "format": "email"}),
        FieldKind::Url => json!({"type": "string", "format": "uri"}),
        FieldKind::TextList => json!({"type": "array", "items": {"type": "string"}}),
        FieldKind::Flag => json!({"type": "boolean"}),
        FieldKind::Toggle => json!({
            "type": "string",
            "enum": ["include", "exclude"],
            "default": "exclude",
        }),
        FieldKind::Integer { min, max, default } => {
            let mut schema = json!({"type": "number", "minimum": min, "default": default});
            if let Some(max) = max {
                schema["maximum"] = json!(max);
            }
            schema
        }
        FieldKind::Range { lower, upper } => range_schema(lower, upper),
        FieldKind::RoleCounts => json!({
            "type": "array",
            "items": {
                "type": "object",
                "properties": {
                    "department": {"type": "string"},
                    "range": range_schema(None, None),
                },
                "required": ["department", "range"],
            },
        }),
    };
    schema["description"] = json!(decl.spec.description);
    schema
}

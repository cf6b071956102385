use serde::{Deserialize, Serialize};

/// Standard GraphQL response envelope.
#[derive(Debug, Deserialize)]
pub struct GraphqlResponse<D> {
    pub data: Option<D>,
    #[serde(default)]
    pub errors: Option<Vec<GraphqlErrorEntry>>,
}

/// A single entry of a GraphQL response's `errors` list.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorEntry {
    pub message: String,
    #[serde(default)]
    pub locations: Option<Vec<GraphqlErrorLocation>>,
    #[serde(default)]
    pub path: Option<Vec<serde_json::Value>>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphqlErrorLocation {
    pub line: u32,
    pub column: u32,
}

impl GraphqlErrorEntry {
    /// Locations formatted as `line:column` pairs, e.g. `2:9, 4:3`.
    pub fn format_locations(&self) -> String {
        self.locations
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|l| format!("{}:{}", l.line, l.column))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Path formatted with dots, e.g. `getTours.0.title`.
    pub fn format_path(&self) -> String {
        self.path
            .as_deref()
            .unwrap_or_default()
            .iter()
            .map(|segment| match segment {
                serde_json::Value::String(s) => s.clone(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join(".")
    }
}

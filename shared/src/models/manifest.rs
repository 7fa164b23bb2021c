use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Canonical description of an agent and the tools it exposes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Manifest {
    pub agent_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    /// Declaration order is kept for display.
    #[serde(default)]
    pub tools: Vec<Tool>,
}

impl Manifest {
    pub fn tool(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|t| t.name == name)
    }

    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    pub fn from_json(content: &str) -> serde_json::Result<Self> {
        serde_json::from_str(content)
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: IndexMap<String, ParameterSchema>,
    /// Every entry is a key of `parameters`.
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub returns: Option<ParameterSchema>,
}

impl Tool {
    pub fn is_required(&self, parameter: &str) -> bool {
        self.required.iter().any(|r| r == parameter)
    }
}

/// A schema fragment: a parameter, a return shape, or a nested property.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ParameterSchema {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub properties: Option<IndexMap<String, ParameterSchema>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub required: Vec<String>,
    #[serde(rename = "anyOf", default, skip_serializing_if = "Vec::is_empty")]
    pub any_of: Vec<ParameterSchema>,
}

impl ParameterSchema {
    pub fn of_type(kind: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            kind: Some(kind.into()),
            description: description.into(),
            ..Self::default()
        }
    }

    /// Human readable type: `type`, else the `anyOf` alternatives, else `any`.
    pub fn display_type(&self) -> String {
        if let Some(kind) = &self.kind {
            return kind.clone();
        }
        if self.any_of.is_empty() {
            return "any".to_string();
        }
        self.any_of
            .iter()
            .map(|s| s.display_type())
            .collect::<Vec<_>>()
            .join(" | ")
    }

    pub fn has_properties(&self) -> bool {
        self.properties.as_ref().is_some_and(|p| !p.is_empty())
    }
}

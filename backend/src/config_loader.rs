//! Reading agent configuration documents from disk.

use crate::error::{DocsError, DocsResult};
use async_trait::async_trait;
use indexmap::IndexMap;
use serde::Deserialize;
use shared::models::ParameterSchema;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// An agent configuration as declared on disk, before normalization.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct AgentConfig {
    #[serde(alias = "name")]
    pub agent_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub version: String,
    pub tools: Vec<ToolDecl>,
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ToolDecl {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub parameters: ParametersDecl,
    #[serde(default)]
    pub required: Vec<String>,
    #[serde(default)]
    pub returns: Option<ParameterSchema>,
}

/// Parameters come either as a flat `{name: schema}` map or as a JSON-Schema object.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum ParametersDecl {
    Object(ObjectSchemaDecl),
    Flat(IndexMap<String, ParameterSchema>),
}

impl Default for ParametersDecl {
    fn default() -> Self {
        ParametersDecl::Flat(IndexMap::new())
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct ObjectSchemaDecl {
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub properties: IndexMap<String, ParameterSchema>,
    #[serde(default)]
    pub required: Vec<String>,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigFormat {
    Json,
    Yaml,
}

impl ConfigFormat {
    /// Picks the format by extension. Anything that is not YAML is read as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
                ConfigFormat::Yaml
            }
            _ => ConfigFormat::Json,
        }
    }
}

pub async fn load(path: &Path) -> DocsResult<AgentConfig> {
    let contents = match tokio::fs::read_to_string(path).await {
        Ok(c) => c,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            return Err(DocsError::NotFound(path.display().to_string()));
        }
        Err(e) => return Err(DocsError::Io(e)),
    };
    parse(&contents, ConfigFormat::from_path(path))
}

pub fn parse(contents: &str, format: ConfigFormat) -> DocsResult<AgentConfig> {
    let value: serde_json::Value = match format {
        ConfigFormat::Json => {
            serde_json::from_str(contents).map_err(|e| DocsError::Parse(e.to_string()))?
        }
        ConfigFormat::Yaml => {
            serde_yaml::from_str(contents).map_err(|e| DocsError::Parse(e.to_string()))?
        }
    };
    if !value.is_object() {
        return Err(DocsError::Schema(
            "agent configuration must be a mapping".to_string(),
        ));
    }
    serde_json::from_value(value).map_err(|e| DocsError::Schema(e.to_string()))
}

/// Where the manifest store gets its configuration from.
#[async_trait]
pub trait ConfigSource: Send + Sync {
    async fn load(&self) -> DocsResult<AgentConfig>;
}

pub struct FileConfigSource {
    path: PathBuf,
}

impl FileConfigSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl ConfigSource for FileConfigSource {
    async fn load(&self) -> DocsResult<AgentConfig> {
        load(&self.path).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_parameters() {
        let config = parse(
            r#"{
                "agent_name": "sql_agent",
                "tools": [{
                    "name": "list_columns",
                    "parameters": {"table": {"type": "string", "description": "Table"}},
                    "required": ["table"]
                }]
            }"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(config.agent_name, "sql_agent");
        assert_eq!(config.version, "");
        let tool = &config.tools[0];
        assert!(matches!(&tool.parameters, ParametersDecl::Flat(p) if p.contains_key("table")));
        assert!(tool.returns.is_none());
    }

    #[test]
    fn parses_json_schema_parameters() {
        let config = parse(
            r#"{
                "agent_name": "dice",
                "tools": [{
                    "name": "roll_dice",
                    "parameters": {
                        "type": "object",
                        "properties": {"notation": {"type": "string"}},
                        "required": ["notation"]
                    }
                }]
            }"#,
            ConfigFormat::Json,
        )
        .unwrap();

        match &config.tools[0].parameters {
            ParametersDecl::Object(schema) => {
                assert_eq!(schema.kind, "object");
                assert_eq!(schema.required, vec!["notation".to_string()]);
            }
            other => panic!("expected object schema, got {other:?}"),
        }
    }

    #[test]
    fn object_schema_without_properties_declares_no_parameters() {
        let config = parse(
            r#"{"agent_name": "a", "tools": [{"name": "noargs", "parameters": {"type": "object"}}]}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        match &config.tools[0].parameters {
            ParametersDecl::Object(schema) => assert!(schema.properties.is_empty()),
            other => panic!("expected object schema, got {other:?}"),
        }
    }

    #[test]
    fn flat_parameter_named_type_stays_flat() {
        let config = parse(
            r#"{"agent_name": "a", "tools": [{"name": "t", "parameters": {
                "type": {"type": "string", "description": "Kind of thing"}
            }}]}"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert!(matches!(&config.tools[0].parameters, ParametersDecl::Flat(p) if p.contains_key("type")));
    }

    #[test]
    fn parses_yaml_with_name_alias() {
        let config = parse(
            "name: planner\nversion: 0.3.1\ntools:\n  - name: plan\n    description: Make a plan\n",
            ConfigFormat::Yaml,
        )
        .unwrap();
        assert_eq!(config.agent_name, "planner");
        assert_eq!(config.version, "0.3.1");
        assert_eq!(config.tools[0].description, "Make a plan");
    }

    #[test]
    fn malformed_content_is_a_parse_error() {
        let err = parse("{ not json", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, DocsError::Parse(_)));
    }

    #[test]
    fn missing_tools_is_a_schema_error() {
        let err = parse(r#"{"agent_name": "a"}"#, ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, DocsError::Schema(_)));

        let err = parse("[1, 2]", ConfigFormat::Json).unwrap_err();
        assert!(matches!(err, DocsError::Schema(_)));
    }

    #[test]
    fn format_follows_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/agent.YML")),
            ConfigFormat::Yaml
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("agent_manifest.json")),
            ConfigFormat::Json
        );
        assert_eq!(ConfigFormat::from_path(Path::new("noext")), ConfigFormat::Json);
    }

    #[tokio::test]
    async fn missing_file_is_not_found() {
        let tmp = tempfile::TempDir::new().unwrap();
        let err = load(&tmp.path().join("absent.json")).await.unwrap_err();
        assert!(matches!(err, DocsError::NotFound(_)));
    }

    #[tokio::test]
    async fn file_source_reads_from_disk() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("agent.yaml");
        std::fs::write(&path, "agent_name: a\ntools: []\n").unwrap();

        let source = FileConfigSource::new(&path);
        assert_eq!(source.path(), path.as_path());
        let config = source.load().await.unwrap();
        assert!(config.tools.is_empty());
    }
}

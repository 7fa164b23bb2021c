//! Normalizing an [`AgentConfig`] into a [`Manifest`].

use crate::config_loader::{AgentConfig, ParametersDecl, ToolDecl};
use crate::error::{DocsError, DocsResult};
use shared::models::{Manifest, Tool};
use std::collections::HashSet;

/// Builds the manifest for `config`. Tools keep their declaration order.
pub fn build(config: &AgentConfig) -> DocsResult<Manifest> {
    let agent_name = config.agent_name.trim();
    if agent_name.is_empty() {
        return Err(DocsError::Schema("agent_name must not be empty".to_string()));
    }

    let mut seen = HashSet::new();
    let mut tools = Vec::with_capacity(config.tools.len());
    for decl in &config.tools {
        if !seen.insert(decl.name.as_str()) {
            return Err(DocsError::Schema(format!(
                "tool '{}' is declared more than once",
                decl.name
            )));
        }
        tools.push(build_tool(decl)?);
    }

    Ok(Manifest {
        agent_name: agent_name.to_string(),
        description: config.description.clone(),
        version: config.version.clone(),
        tools,
    })
}

fn build_tool(decl: &ToolDecl) -> DocsResult<Tool> {
    if decl.name.trim().is_empty() {
        return Err(DocsError::Schema("tool name must not be empty".to_string()));
    }

    let (parameters, schema_required) = match &decl.parameters {
        ParametersDecl::Object(schema) => (schema.properties.clone(), schema.required.as_slice()),
        ParametersDecl::Flat(parameters) => (parameters.clone(), &[][..]),
    };

    let mut required: Vec<String> = Vec::new();
    for name in schema_required.iter().chain(&decl.required) {
        if !parameters.contains_key(name) {
            return Err(DocsError::Schema(format!(
                "tool '{}' requires undeclared parameter '{}'",
                decl.name, name
            )));
        }
        if !required.contains(name) {
            required.push(name.clone());
        }
    }

    Ok(Tool {
        name: decl.name.clone(),
        description: decl.description.clone(),
        parameters,
        required,
        returns: decl.returns.clone(),
    })
}

use crate::AppState;
use crate::error::DocsError;
use crate::render::escape_html;
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};
use indexmap::IndexMap;
use shared::models::{Manifest, ParameterSchema};
use std::fmt::Write;

pub async fn view_manifest(State(state): State<AppState>) -> Response {
    match state.manifest.get().await {
        Ok(manifest) => Html(render_manifest(&manifest)).into_response(),
        Err(e) => (StatusCode::NOT_FOUND, Html(render_unavailable(&e))).into_response(),
    }
}

pub async fn manifest_json(State(state): State<AppState>) -> Result<Json<Manifest>, StatusCode> {
    let manifest = state.manifest.get().await.map_err(|e| {
        tracing::warn!("Manifest requested but unavailable: {}", e);
        match e.as_ref() {
            DocsError::NotFound(_) => StatusCode::NOT_FOUND,
            _ => StatusCode::SERVICE_UNAVAILABLE,
        }
    })?;
    Ok(Json(manifest.as_ref().clone()))
}

fn render_unavailable(error: &DocsError) -> String {
    let reason = match error {
        DocsError::NotFound(_) => "Agent manifest not found. Please generate one first.".to_string(),
        other => format!("Agent manifest could not be built: {}", escape_html(&other.to_string())),
    };
    format!("<h1>Error</h1><p>{reason}</p>")
}

const STYLE: &str = "
    body { font-family: system-ui, -apple-system, Segoe UI, Roboto, sans-serif; margin: 32px; }
    .tool { border: 1px solid #ddd; border-radius: 6px; margin: 16px 0; }
    .tool-header { background-color: #f7f7f7; padding: 12px 16px; font-weight: 600; cursor: pointer; }
    .tool-details { display: none; padding: 12px 16px; }
    .param { margin-left: 16px; }
    .required { color: #c00; font-weight: 700; margin-left: 4px; }
";

const SCRIPT: &str = "
    function toggleDetails(toolId) {
        var el = document.getElementById(toolId);
        el.style.display = el.style.display === 'block' ? 'none' : 'block';
    }
";

pub fn render_manifest(manifest: &Manifest) -> String {
    let agent = escape_html(&manifest.agent_name);
    let mut html = String::new();
    let _ = write!(
        html,
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\" />\n\
         <title>Agent: {agent}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n\
         <h1>Agent: {agent}</h1>\n<p>{}</p>\n<p><em>Version: {}</em></p>\n<hr />\n\
         <nav><a href=\"/\">Manifest</a> | <a href=\"/pages\">Docs Pages</a> | \
         <a href=\"/reference/\">API Reference</a> | <a href=\"/examples\">Examples</a></nav>\n\
         <hr />\n<h2>Available Tools</h2>\n",
        escape_html(&manifest.description),
        escape_html(&manifest.version),
    );

    for (index, tool) in manifest.tools.iter().enumerate() {
        let name = escape_html(&tool.name);
        let _ = write!(
            html,
            "<div class=\"tool\">\n\
             <div class=\"tool-header\" onclick=\"toggleDetails('tool-{index}')\">{name}</div>\n\
             <div id=\"tool-{index}\" class=\"tool-details\">\n\
             <p><strong>Description:</strong> {}</p>\n<h4>Parameters:</h4>\n",
            escape_html(&tool.description),
        );
        if tool.parameters.is_empty() {
            html.push_str("<p>None</p>\n");
        } else {
            render_properties(&mut html, &tool.parameters, &tool.required);
        }

        html.push_str("<h4>Returns:</h4>\n");
        match &tool.returns {
            Some(returns) if returns.has_properties() => {
                if let Some(properties) = &returns.properties {
                    render_properties(&mut html, properties, &returns.required);
                }
            }
            Some(returns) => {
                let _ = writeln!(
                    html,
                    "<div class=\"param\">{}</div>",
                    escape_html(returns.kind.as_deref().unwrap_or("string"))
                );
            }
            None => html.push_str("<div class=\"param\">string</div>\n"),
        }
        html.push_str("</div>\n</div>\n");
    }

    let _ = write!(html, "<script>{SCRIPT}</script>\n</body>\n</html>\n");
    html
}

fn render_properties(
    html: &mut String,
    properties: &IndexMap<String, ParameterSchema>,
    required: &[String],
) {
    for (name, schema) in properties {
        let marker = if required.contains(name) {
            "<span class=\"required\">*</span>"
        } else {
            ""
        };
        let _ = writeln!(
            html,
            "<div class=\"param\"><strong>{}{marker}</strong> <em>({})</em><div>{}</div></div>",
            escape_html(name),
            escape_html(&schema.display_type()),
            escape_html(&schema.description),
        );
    }
}

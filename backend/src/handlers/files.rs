use crate::AppState;
use crate::error::{DocsError, DocsResult};
use crate::listing::{self, CONFIG_EXTENSIONS, FileReference, SCRIPT_EXTENSIONS};
use crate::paths::{Base, read_text};
use crate::render::escape_html;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct RawQuery {
    pub base: String,
    pub path: String,
}

pub async fn list_examples(State(state): State<AppState>) -> DocsResult<Html<String>> {
    let bases = state.bases.clone();
    let (scripts, configs) = tokio::task::spawn_blocking(move || {
        (
            listing::list_files(bases.root(Base::Examples), Base::Examples, SCRIPT_EXTENSIONS),
            listing::list_files(bases.root(Base::Configs), Base::Configs, CONFIG_EXTENSIONS),
        )
    })
    .await
    .map_err(|e| DocsError::Io(std::io::Error::other(e)))?;

    let mut html = vec!["<h1>Examples</h1>".to_string()];
    push_section(&mut html, "Example Scripts", &scripts);
    push_section(&mut html, "Agent Configs", &configs);
    Ok(Html(html.join("\n")))
}

fn push_section(html: &mut Vec<String>, title: &str, files: &[FileReference]) {
    html.push(format!("<h2>{title}</h2>"));
    html.push("<ul>".to_string());
    for file in files {
        html.push(format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&file.raw_href()),
            escape_html(&file.path)
        ));
    }
    html.push("</ul>".to_string());
}

pub async fn raw_file(
    State(state): State<AppState>,
    Query(query): Query<RawQuery>,
) -> DocsResult<String> {
    let path = state.bases.resolve(&query.base, &query.path).await?;
    read_text(&path).await
}

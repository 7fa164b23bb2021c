use crate::AppState;
use crate::error::DocsResult;
use crate::listing;
use crate::paths::{Base, read_text};
use crate::render::escape_html;
use axum::{
    extract::{Query, State},
    response::Html,
};
use serde::Deserialize;

#[derive(Deserialize)]
pub struct PageQuery {
    pub name: String,
}

pub async fn list_pages(State(state): State<AppState>) -> DocsResult<Html<String>> {
    let pages = listing::list_pages(state.bases.root(Base::Docs)).await?;

    let mut html = vec![
        "<h1>Project Docs</h1>".to_string(),
        "<p>Markdown files under the documentation directory</p>".to_string(),
        "<ul>".to_string(),
    ];
    for page in &pages {
        html.push(format!(
            "<li><a href=\"{}\">{}</a></li>",
            escape_html(&page.page_href()),
            escape_html(&page.path)
        ));
    }
    html.push("</ul>".to_string());
    if pages.is_empty() {
        html.push("<p>No Markdown files found</p>".to_string());
    }
    Ok(Html(html.join("\n")))
}

pub async fn view_page(
    State(state): State<AppState>,
    Query(query): Query<PageQuery>,
) -> DocsResult<Html<String>> {
    let path = state.bases.resolve_in(Base::Docs, &query.name).await?;
    let text = read_text(&path).await?;
    Ok(Html(format!(
        "<h1>{}</h1>{}",
        escape_html(&query.name),
        state.renderer.render(&text)
    )))
}

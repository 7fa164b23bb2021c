/// Turns page source into displayable HTML.
pub trait Renderer: Send + Sync {
    fn render(&self, text: &str) -> String;
}

/// Shows the markdown source as-is inside a `<pre>` block.
#[derive(Clone, Copy, Debug, Default)]
pub struct PlainTextRenderer;

impl Renderer for PlainTextRenderer {
    fn render(&self, text: &str) -> String {
        format!("<pre>{}</pre>", escape_html(text))
    }
}

pub fn escape_html(text: &str) -> String {
    let mut escaped = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

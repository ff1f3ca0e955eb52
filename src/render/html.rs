//! HTML output through a minijinja template.

use minijinja::{context, AutoEscape, Environment};
use once_cell::sync::Lazy;

use super::element::ButtonElement;
use crate::error::RenderError;

/// Name under which the button template is registered.
pub const BUTTON_TEMPLATE_NAME: &str = "button.html";

/// Built-in button markup.
///
/// The template receives `css` (the inline style string) and `content` (the
/// serialized nodes). Text nodes are escaped; markup nodes are marked safe.
pub const BUTTON_TEMPLATE: &str = concat!(
    r#"<button type="button" style="{{ css }}">"#,
    r#"{% for node in content recursive %}"#,
    r#"{% if node.kind == "element" %}<{{ node.tag }}>{{ loop(node.children) }}</{{ node.tag }}>"#,
    r#"{% elif node.kind == "fragment" %}{{ loop(node.children) }}"#,
    r#"{% elif node.kind == "markup" %}{{ node.value | safe }}"#,
    r#"{% else %}{{ node.value }}{% endif %}"#,
    r#"{% endfor %}</button>"#,
);

static SHARED: Lazy<HtmlRenderer> = Lazy::new(|| {
    HtmlRenderer::new().expect("built-in button template compiles")
});

/// Renders button elements to HTML.
///
/// # Example
///
/// ```rust
/// use styled_button::{ButtonProps, HtmlRenderer};
///
/// let renderer = HtmlRenderer::with_template(
///     r#"<a role="button" style="{{ css }}">{{ content | map(attribute="value") | join }}</a>"#,
/// )
/// .unwrap();
///
/// let html = renderer.render(&ButtonProps::new("Open").render()).unwrap();
/// assert!(html.starts_with("<a role=\"button\""));
/// assert!(html.ends_with(">Open</a>"));
/// ```
pub struct HtmlRenderer {
    env: Environment<'static>,
}

impl HtmlRenderer {
    /// Creates a renderer using the built-in `<button>` template.
    pub fn new() -> Result<Self, RenderError> {
        Self::with_template(BUTTON_TEMPLATE)
    }

    /// Creates a renderer with a custom template.
    ///
    /// The template is compiled immediately; syntax errors are returned here.
    pub fn with_template(source: &str) -> Result<Self, RenderError> {
        let mut env = Environment::new();
        env.set_auto_escape_callback(|_| AutoEscape::Html);
        env.add_template_owned(BUTTON_TEMPLATE_NAME, source.to_string())?;
        Ok(Self { env })
    }

    /// Renders an element with this renderer's template.
    pub fn render(&self, element: &ButtonElement) -> Result<String, RenderError> {
        let tmpl = self.env.get_template(BUTTON_TEMPLATE_NAME)?;
        let html = tmpl.render(context! {
            css => element.style().to_css(),
            content => element.content(),
        })?;
        tracing::debug!(bytes = html.len(), "rendered button markup");
        Ok(html)
    }
}

/// The process-wide renderer with the built-in template.
pub(crate) fn shared() -> &'static HtmlRenderer {
    &SHARED
}

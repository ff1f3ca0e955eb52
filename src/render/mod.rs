//! Rendering button props into an element.
//!
//! [`render`] is a pure function of the props: it resolves the style and the
//! visible content and attaches the click handler. [`HtmlRenderer`] turns the
//! resulting [`ButtonElement`] into markup.

mod content;
mod element;
mod html;
pub(crate) mod node;

pub use content::{resolve_content, LOADING_FALLBACK};
pub use element::ButtonElement;
pub use html::{HtmlRenderer, BUTTON_TEMPLATE, BUTTON_TEMPLATE_NAME};
pub use node::{InvalidTagName, Node, TagName};

use crate::props::ButtonProps;
use crate::style::resolve_style;

/// Resolves props into a button element.
///
/// # Example
///
/// ```rust
/// use styled_button::{render, ButtonProps};
///
/// let button = render(&ButtonProps::new("Save").start_icon("+"));
/// assert_eq!(button.content().len(), 2);
/// assert_eq!(button.style().get("cursor"), Some("pointer"));
/// ```
pub fn render(props: &ButtonProps) -> ButtonElement {
    tracing::debug!(
        variant = ?props.variant,
        color = ?props.color,
        size = ?props.size,
        disabled = props.disabled,
        loading = props.loading,
        "rendering button"
    );
    ButtonElement {
        style: resolve_style(props),
        content: resolve_content(props),
        on_click: props.on_click.clone(),
    }
}

//! The rendered button element.

use std::fmt;

use super::html;
use super::node::Node;
use crate::error::RenderError;
use crate::props::ClickHandler;
use crate::style::StyleMap;

/// A resolved button: final style, visible content and the click handler.
///
/// Elements are produced by [`render`](crate::render()) and carry no state
/// between renders.
#[derive(Clone)]
pub struct ButtonElement {
    pub(crate) style: StyleMap,
    pub(crate) content: Vec<Node>,
    pub(crate) on_click: Option<ClickHandler>,
}

impl ButtonElement {
    pub fn style(&self) -> &StyleMap {
        &self.style
    }

    pub fn content(&self) -> &[Node] {
        &self.content
    }

    /// Whether activating the element will invoke a callback.
    pub fn has_handler(&self) -> bool {
        self.on_click.is_some()
    }

    /// Activates the control, invoking the click callback if one was supplied.
    ///
    /// Returns `true` when a callback ran. Disabled and loading buttons still
    /// invoke their callback; both states are visual only.
    pub fn activate(&self) -> bool {
        match &self.on_click {
            Some(handler) => {
                tracing::trace!("button activated");
                handler();
                true
            }
            None => false,
        }
    }

    /// Renders the element with the built-in `<button>` template.
    pub fn to_html(&self) -> Result<String, RenderError> {
        html::shared().render(self)
    }
}

impl fmt::Debug for ButtonElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonElement")
            .field("style", &self.style)
            .field("content", &self.content)
            .field("has_handler", &self.has_handler())
            .finish()
    }
}

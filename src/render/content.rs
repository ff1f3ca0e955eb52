//! Content selection for button props.

use crate::props::{ButtonProps, Props};

use super::node::Node;

/// Text shown while loading when no indicator is supplied.
pub const LOADING_FALLBACK: &str = "Loading...";

/// Selects the nodes rendered inside the button.
///
/// While loading only the indicator is shown (or a `<span>Loading...</span>`
/// fallback). Otherwise the start icon, children and end icon appear in that
/// order, skipping absent icons.
pub fn resolve_content(props: &ButtonProps) -> Vec<Node> {
    if props.loading {
        let indicator = props
            .loading_indicator
            .clone()
            .unwrap_or_else(|| Node::span(vec![Node::text(LOADING_FALLBACK)]));
        return vec![indicator];
    }

    let mut content = Vec::with_capacity(3);
    content.extend(props.start_icon.clone());
    content.push(props.children().clone());
    content.extend(props.end_icon.clone());
    content
}

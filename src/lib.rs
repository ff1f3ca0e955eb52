//! # styled-button
//!
//! Declarative button props resolved into inline styles and HTML markup.
//!
//! A caller describes a button with [`ButtonProps`] (variant, color, size,
//! disabled and loading flags, icons, caller style). [`render`] resolves the
//! props into a [`ButtonElement`] holding the final [`StyleMap`], the visible
//! content and the click handler. The element renders to HTML via
//! [`ButtonElement::to_html`] or a custom [`HtmlRenderer`] template.
//!
//! ## Style layers
//!
//! Styles are computed in fixed order, later layers winning per key:
//! base style, variant, size, disabled, loading, and finally the caller's
//! `style`.
//!
//! ## Example
//!
//! ```rust
//! use styled_button::{ButtonColor, ButtonProps, ButtonVariant, StyleMap};
//!
//! let button = ButtonProps::new("Delete")
//!     .variant(ButtonVariant::Outlined)
//!     .color(ButtonColor::Error)
//!     .style(StyleMap::parse_inline("margin: 4px").unwrap())
//!     .on_click(|| println!("deleted"))
//!     .render();
//!
//! assert_eq!(button.style().get("color"), Some("#d32f2f"));
//! assert_eq!(button.style().get("margin"), Some("4px"));
//!
//! let html = button.to_html().unwrap();
//! assert!(html.starts_with("<button"));
//! ```

pub mod error;
mod palette;
mod props;
pub mod render;
pub mod style;

pub use error::{ConfigError, RenderError};
pub use palette::{color_code, ButtonColor, UnknownName, DEFAULT_COLOR_CODE};
pub use props::{ButtonProps, ButtonSize, ButtonVariant, ClickHandler, Props, PropsFormat};
pub use render::{
    render, resolve_content, ButtonElement, HtmlRenderer, InvalidTagName, Node, TagName,
};
pub use style::{resolve_style, StyleMap, StyleParseError};

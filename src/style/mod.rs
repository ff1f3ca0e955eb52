//! Style mappings and button style resolution.
//!
//! - [`StyleMap`]: ordered property mapping with shallow merge
//! - [`resolve_style`]: props to final style, layer by layer
//! - [`StyleParseError`]: errors from inline CSS parsing

mod error;
mod map;
mod parse;
mod resolve;

pub use error::StyleParseError;
pub use map::StyleMap;
pub use resolve::{resolve_style, BASE_BOX_SHADOW, BASE_FONT_SIZE};

//! Fixed color table for button colors.

use std::fmt;
use std::str::FromStr;

/// Hex code used when no color is given or the given one is unknown.
pub const DEFAULT_COLOR_CODE: &str = "#1976d2";

/// Background and border color applied to disabled buttons.
pub const DISABLED_BACKGROUND: &str = "#e0e0e0";

/// Text color applied to disabled buttons.
pub const DISABLED_TEXT: &str = "#000";

/// Text color of the base style.
pub const BASE_TEXT: &str = "#fff";

/// Semantic button color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ButtonColor {
    #[default]
    Primary,
    Secondary,
    Success,
    Error,
    Warning,
    Info,
}

impl ButtonColor {
    /// All colors, in declaration order.
    pub const ALL: [ButtonColor; 6] = [
        ButtonColor::Primary,
        ButtonColor::Secondary,
        ButtonColor::Success,
        ButtonColor::Error,
        ButtonColor::Warning,
        ButtonColor::Info,
    ];

    /// Returns the hex code for this color.
    ///
    /// `Info` deliberately shares the primary blue.
    pub fn hex(self) -> &'static str {
        match self {
            ButtonColor::Primary => DEFAULT_COLOR_CODE,
            ButtonColor::Secondary => "#424242",
            ButtonColor::Success => "#388e3c",
            ButtonColor::Error => "#d32f2f",
            ButtonColor::Warning => "#ffa000",
            ButtonColor::Info => DEFAULT_COLOR_CODE,
        }
    }

    /// Lowercase name as used in props files.
    pub fn name(self) -> &'static str {
        match self {
            ButtonColor::Primary => "primary",
            ButtonColor::Secondary => "secondary",
            ButtonColor::Success => "success",
            ButtonColor::Error => "error",
            ButtonColor::Warning => "warning",
            ButtonColor::Info => "info",
        }
    }

    /// Parses a color name, ignoring case and surrounding whitespace.
    ///
    /// Unknown names return `None`, which later resolves to the default color.
    ///
    /// # Example
    ///
    /// ```rust
    /// use styled_button::ButtonColor;
    ///
    /// assert_eq!(ButtonColor::parse_lenient(" Error "), Some(ButtonColor::Error));
    /// assert_eq!(ButtonColor::parse_lenient("fuchsia"), None);
    /// ```
    pub fn parse_lenient(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|color| color.name().eq_ignore_ascii_case(name))
    }
}

impl fmt::Display for ButtonColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ButtonColor {
    type Err = UnknownName;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_lenient(s).ok_or_else(|| UnknownName::new("color", s))
    }
}

/// Resolves an optional color to its hex code.
///
/// ```rust
/// use styled_button::{color_code, ButtonColor};
///
/// assert_eq!(color_code(Some(ButtonColor::Success)), "#388e3c");
/// assert_eq!(color_code(None), "#1976d2");
/// ```
pub fn color_code(color: Option<ButtonColor>) -> &'static str {
    color.map_or(DEFAULT_COLOR_CODE, ButtonColor::hex)
}

/// Returned by the strict `FromStr` impls of the prop enums.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown {kind} '{value}'")]
pub struct UnknownName {
    kind: &'static str,
    value: String,
}

impl UnknownName {
    pub(crate) fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_color_table() {
        assert_eq!(ButtonColor::Primary.hex(), "#1976d2");
        assert_eq!(ButtonColor::Secondary.hex(), "#424242");
        assert_eq!(ButtonColor::Success.hex(), "#388e3c");
        assert_eq!(ButtonColor::Error.hex(), "#d32f2f");
        assert_eq!(ButtonColor::Warning.hex(), "#ffa000");
        assert_eq!(ButtonColor::Info.hex(), "#1976d2");
    }

    #[test]
    fn test_absent_color_is_primary_blue() {
        assert_eq!(color_code(None), "#1976d2");
        assert_eq!(color_code(None), ButtonColor::default().hex());
    }

    #[test]
    fn test_parse_lenient_is_case_insensitive() {
        assert_eq!(ButtonColor::parse_lenient("WARNING"), Some(ButtonColor::Warning));
        assert_eq!(ButtonColor::parse_lenient("info"), Some(ButtonColor::Info));
    }

    #[test]
    fn test_from_str_rejects_unknown() {
        let err = "magenta".parse::<ButtonColor>().unwrap_err();
        assert_eq!(err.to_string(), "unknown color 'magenta'");
    }

    #[test]
    fn test_display_round_trips_names() {
        for color in ButtonColor::ALL {
            assert_eq!(color.to_string().parse::<ButtonColor>(), Ok(color));
        }
    }

    proptest! {
        #[test]
        fn unknown_names_resolve_to_default(name in "[a-z]{1,12}") {
            let parsed = ButtonColor::parse_lenient(&name);
            prop_assume!(parsed.is_none());
            prop_assert_eq!(color_code(parsed), DEFAULT_COLOR_CODE);
        }
    }
}

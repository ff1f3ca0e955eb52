//! Style resolution for button props.
//!
//! The final style is built in layers. Each layer only assigns keys, so a
//! later layer wins over an earlier one for the same key:
//!
//! 1. base style (always)
//! 2. variant overlay
//! 3. size overlay
//! 4. disabled overlay
//! 5. loading overlay
//! 6. caller style (shallow merge)

use crate::palette::{color_code, BASE_TEXT, DISABLED_BACKGROUND, DISABLED_TEXT};
use crate::props::{ButtonProps, ButtonSize, ButtonVariant};

use super::map::StyleMap;

/// Three-layer drop shadow of the base style.
pub const BASE_BOX_SHADOW: &str = "0px 2px 4px -1px rgba(0,0,0,0.2), \
    0px 4px 5px 0px rgba(0,0,0,0.14), 0px 1px 10px 0px rgba(0,0,0,0.12)";

/// Font size when no size is given.
pub const BASE_FONT_SIZE: &str = "14px";

/// Resolves the final style for a button.
///
/// # Example
///
/// ```rust
/// use styled_button::{resolve_style, ButtonProps, ButtonSize};
///
/// let style = resolve_style(&ButtonProps::new("Ok").size(ButtonSize::Small));
/// assert_eq!(style.get("fontSize"), Some("12px"));
/// assert_eq!(style.get("cursor"), Some("pointer"));
/// ```
pub fn resolve_style(props: &ButtonProps) -> StyleMap {
    let color = color_code(props.color);
    let mut style = base_style(color);

    apply_variant(&mut style, props.variant, color);
    apply_size(&mut style, props.size);

    if props.disabled {
        style.set("backgroundColor", DISABLED_BACKGROUND);
        style.set("color", DISABLED_TEXT);
        style.set("borderColor", DISABLED_BACKGROUND);
        style.set("cursor", "not-allowed");
    }

    if props.loading {
        style.set("cursor", "not-allowed");
    }

    if let Some(caller) = &props.style {
        style.merge(caller);
    }

    tracing::trace!(css = %style, "resolved button style");
    style
}

fn base_style(color: &str) -> StyleMap {
    StyleMap::new()
        .with("borderRadius", "4px")
        .with("border", "none")
        .with("padding", "8px")
        .with("textTransform", "none")
        .with("fontSize", BASE_FONT_SIZE)
        .with("fontWeight", "500")
        .with("color", BASE_TEXT)
        .with("backgroundColor", color)
        .with("boxShadow", BASE_BOX_SHADOW)
        .with("transition", "all 0.3s ease-in-out")
        .with("cursor", "pointer")
}

fn apply_variant(style: &mut StyleMap, variant: Option<ButtonVariant>, color: &str) {
    match variant {
        Some(ButtonVariant::Contained) => {
            style.set("backgroundColor", color);
        }
        Some(ButtonVariant::Outlined) => {
            style.set("borderColor", color);
            style.set("backgroundColor", "transparent");
            style.set("color", color);
        }
        Some(ButtonVariant::Text) => {
            style.set("color", color);
            style.set("backgroundColor", "transparent");
            style.set("border", "none");
        }
        None => {}
    }
}

fn apply_size(style: &mut StyleMap, size: Option<ButtonSize>) {
    let font_size = match size {
        Some(ButtonSize::Small) => "12px",
        Some(ButtonSize::Medium) => "14px",
        Some(ButtonSize::Large) => "16px",
        None => return,
    };
    style.set("fontSize", font_size);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::palette::ButtonColor;

    #[test]
    fn test_base_style_defaults() {
        let style = resolve_style(&ButtonProps::new("x"));
        assert_eq!(style.get("borderRadius"), Some("4px"));
        assert_eq!(style.get("border"), Some("none"));
        assert_eq!(style.get("padding"), Some("8px"));
        assert_eq!(style.get("textTransform"), Some("none"));
        assert_eq!(style.get("fontSize"), Some("14px"));
        assert_eq!(style.get("fontWeight"), Some("500"));
        assert_eq!(style.get("color"), Some("#fff"));
        assert_eq!(style.get("backgroundColor"), Some("#1976d2"));
        assert_eq!(style.get("boxShadow"), Some(BASE_BOX_SHADOW));
        assert_eq!(style.get("transition"), Some("all 0.3s ease-in-out"));
        assert_eq!(style.get("cursor"), Some("pointer"));
        assert!(!style.contains("borderColor"));
    }

    #[test]
    fn test_background_follows_color() {
        for color in ButtonColor::ALL {
            let style = resolve_style(&ButtonProps::new("x").color(color));
            assert_eq!(style.get("backgroundColor"), Some(color.hex()));
        }
    }

    #[test]
    fn test_contained_matches_absent_variant() {
        let plain = resolve_style(&ButtonProps::new("x").color(ButtonColor::Success));
        let contained = resolve_style(
            &ButtonProps::new("x")
                .color(ButtonColor::Success)
                .variant(ButtonVariant::Contained),
        );
        assert_eq!(plain, contained);
    }

    #[test]
    fn test_outlined_error() {
        let style = resolve_style(
            &ButtonProps::new("x")
                .variant(ButtonVariant::Outlined)
                .color(ButtonColor::Error),
        );
        assert_eq!(style.get("borderColor"), Some("#d32f2f"));
        assert_eq!(style.get("color"), Some("#d32f2f"));
        assert_eq!(style.get("backgroundColor"), Some("transparent"));
    }

    #[test]
    fn test_text_variant_has_no_border() {
        for color in ButtonColor::ALL {
            let props = ButtonProps::new("x")
                .variant(ButtonVariant::Text)
                .color(color);
            let style = resolve_style(&props);
            assert_eq!(style.get("backgroundColor"), Some("transparent"));
            assert_eq!(style.get("border"), Some("none"));
            assert_eq!(style.get("color"), Some(color.hex()));
            assert!(!style.contains("borderColor"));
        }
    }

    #[test]
    fn test_sizes() {
        let font = |size| {
            resolve_style(&ButtonProps::new("x").size(size))
                .get("fontSize")
                .map(str::to_string)
        };
        assert_eq!(font(ButtonSize::Small).as_deref(), Some("12px"));
        assert_eq!(font(ButtonSize::Medium).as_deref(), Some("14px"));
        assert_eq!(font(ButtonSize::Large).as_deref(), Some("16px"));
    }

    #[test]
    fn test_disabled_overrides_variant_color_and_size() {
        let style = resolve_style(
            &ButtonProps::new("x")
                .variant(ButtonVariant::Outlined)
                .color(ButtonColor::Warning)
                .size(ButtonSize::Large)
                .disabled(true),
        );
        assert_eq!(style.get("backgroundColor"), Some("#e0e0e0"));
        assert_eq!(style.get("color"), Some("#000"));
        assert_eq!(style.get("borderColor"), Some("#e0e0e0"));
        assert_eq!(style.get("cursor"), Some("not-allowed"));
        assert_eq!(style.get("fontSize"), Some("16px"));
    }

    #[test]
    fn test_loading_only_changes_cursor() {
        let idle = resolve_style(&ButtonProps::new("x").color(ButtonColor::Secondary));
        let mut loading = resolve_style(
            &ButtonProps::new("x")
                .color(ButtonColor::Secondary)
                .loading(true),
        );
        assert_eq!(loading.get("cursor"), Some("not-allowed"));
        loading.set("cursor", "pointer");
        assert_eq!(idle, loading);
    }

    #[test]
    fn test_caller_style_wins() {
        let style = resolve_style(
            &ButtonProps::new("x")
                .color(ButtonColor::Primary)
                .disabled(true)
                .style(
                    StyleMap::new()
                        .with("backgroundColor", "#123456")
                        .with("cursor", "wait"),
                ),
        );
        assert_eq!(style.get("backgroundColor"), Some("#123456"));
        assert_eq!(style.get("cursor"), Some("wait"));
        assert_eq!(style.get("color"), Some("#000"));
    }

    #[test]
    fn test_caller_style_keys_are_case_insensitive() {
        let style = resolve_style(
            &ButtonProps::new("x").style(StyleMap::new().with("Background-Color", "#123456")),
        );
        assert_eq!(style.get("backgroundColor"), Some("#123456"));
        let backgrounds = style
            .iter()
            .filter(|(k, _)| k.eq_ignore_ascii_case("backgroundColor"))
            .count();
        assert_eq!(backgrounds, 1);
        assert!(style.to_css().contains(" background-color: #123456;"));
        assert!(!style.to_css().contains("-background-color"));
    }
}

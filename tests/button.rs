//! End-to-end checks of the props to element contract.

use std::cell::Cell;
use std::rc::Rc;

use styled_button::{
    color_code, render, ButtonColor, ButtonProps, ButtonSize, ButtonVariant, Node, StyleMap,
};

#[test]
fn test_color_table_through_render() {
    let expected = [
        (Some(ButtonColor::Primary), "#1976d2"),
        (Some(ButtonColor::Secondary), "#424242"),
        (Some(ButtonColor::Success), "#388e3c"),
        (Some(ButtonColor::Error), "#d32f2f"),
        (Some(ButtonColor::Warning), "#ffa000"),
        (Some(ButtonColor::Info), "#1976d2"),
        (None, "#1976d2"),
    ];
    for (color, hex) in expected {
        assert_eq!(color_code(color), hex);
        let mut props = ButtonProps::new("x");
        props.color = color;
        assert_eq!(render(&props).style().get("backgroundColor"), Some(hex));
    }
}

#[test]
fn test_unknown_color_name_resolves_to_default() {
    let mut props = ButtonProps::new("x");
    props.color = ButtonColor::parse_lenient("chartreuse");
    assert_eq!(render(&props).style().get("backgroundColor"), Some("#1976d2"));
}

#[test]
fn test_outlined_error_button() {
    let button = ButtonProps::new("Delete")
        .variant(ButtonVariant::Outlined)
        .color(ButtonColor::Error)
        .render();
    let style = button.style();
    assert_eq!(style.get("borderColor"), Some("#d32f2f"));
    assert_eq!(style.get("color"), Some("#d32f2f"));
    assert_eq!(style.get("backgroundColor"), Some("transparent"));
}

#[test]
fn test_small_and_default_font_size() {
    let small = ButtonProps::new("x").size(ButtonSize::Small).render();
    let plain = ButtonProps::new("x").render();
    assert_eq!(small.style().get("fontSize"), Some("12px"));
    assert_eq!(plain.style().get("fontSize"), Some("14px"));
}

#[test]
fn test_disabled_wins_over_everything_computed() {
    let variants = [
        None,
        Some(ButtonVariant::Text),
        Some(ButtonVariant::Contained),
        Some(ButtonVariant::Outlined),
    ];
    for variant in variants {
        for color in ButtonColor::ALL {
            let mut props = ButtonProps::new("x")
                .color(color)
                .size(ButtonSize::Large)
                .disabled(true);
            props.variant = variant;
            let button = props.render();
            assert_eq!(button.style().get("backgroundColor"), Some("#e0e0e0"));
            assert_eq!(button.style().get("color"), Some("#000"));
            assert_eq!(button.style().get("cursor"), Some("not-allowed"));
        }
    }
}

#[test]
fn test_loading_without_indicator() {
    let button = ButtonProps::new("Submit")
        .start_icon("<")
        .end_icon(">")
        .loading(true)
        .render();
    assert_eq!(
        button.content(),
        &[Node::span(vec![Node::text("Loading...")])]
    );
}

#[test]
fn test_content_order() {
    let button = ButtonProps::new("B").start_icon("A").end_icon("C").render();
    let texts: Vec<String> = button.content().iter().map(Node::text_content).collect();
    assert_eq!(texts, vec!["A", "B", "C"]);
}

#[test]
fn test_caller_background_override() {
    let button = ButtonProps::new("x")
        .color(ButtonColor::Primary)
        .style(StyleMap::new().with("backgroundColor", "#123456"))
        .render();
    assert_eq!(button.style().get("backgroundColor"), Some("#123456"));
}

#[test]
fn test_activation_counts() {
    let calls = Rc::new(Cell::new(0u32));
    let seen = Rc::clone(&calls);
    let button = ButtonProps::new("x")
        .on_click(move || seen.set(seen.get() + 1))
        .render();

    for _ in 0..3 {
        button.activate();
    }
    assert_eq!(calls.get(), 3);

    let silent = ButtonProps::new("x").render();
    assert!(!silent.activate());
}

#[test]
fn test_render_is_stateless() {
    let props = ButtonProps::new("x").variant(ButtonVariant::Text).color(ButtonColor::Success);
    let first = props.render();
    let second = props.render();
    assert_eq!(first.style(), second.style());
    assert_eq!(first.content(), second.content());
}

#[test]
fn test_html_output() {
    let html = ButtonProps::new("Go & see")
        .color(ButtonColor::Success)
        .render()
        .to_html()
        .unwrap();
    assert!(html.starts_with("<button type=\"button\" style=\""));
    assert!(html.contains("background-color: #388e3c;"));
    assert!(html.ends_with(">Go &amp; see</button>"));
}

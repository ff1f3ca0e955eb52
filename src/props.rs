//! Button props: the declarative input of a render.

use std::fmt;
use std::path::Path;
use std::rc::Rc;
use std::str::FromStr;

use serde::{Deserialize, Deserializer};

use crate::error::ConfigError;
use crate::palette::{ButtonColor, UnknownName};
use crate::render::node::{deserialize_node, deserialize_opt_node};
use crate::render::{self, ButtonElement, Node};
use crate::style::StyleMap;

/// Callback invoked when the control is activated.
pub type ClickHandler = Rc<dyn Fn()>;

/// Contract shared by sibling components: every component has children.
pub trait Props {
    fn children(&self) -> &Node;
}

/// Visual treatment of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonVariant {
    Text,
    Contained,
    Outlined,
}

/// Font size step of the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonSize {
    Small,
    Medium,
    Large,
}

/// Prop enums that can be read from free-form names.
pub(crate) trait NamedProp: Sized + Copy + 'static {
    const KIND: &'static str;
    const ALL: &'static [Self];

    fn name(self) -> &'static str;

    /// Case-insensitive lookup; unknown names yield `None`.
    fn parse_lenient(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|v| v.name().eq_ignore_ascii_case(name))
    }
}

impl NamedProp for ButtonVariant {
    const KIND: &'static str = "variant";
    const ALL: &'static [Self] = &[
        ButtonVariant::Text,
        ButtonVariant::Contained,
        ButtonVariant::Outlined,
    ];

    fn name(self) -> &'static str {
        match self {
            ButtonVariant::Text => "text",
            ButtonVariant::Contained => "contained",
            ButtonVariant::Outlined => "outlined",
        }
    }
}

impl NamedProp for ButtonSize {
    const KIND: &'static str = "size";
    const ALL: &'static [Self] = &[ButtonSize::Small, ButtonSize::Medium, ButtonSize::Large];

    fn name(self) -> &'static str {
        match self {
            ButtonSize::Small => "small",
            ButtonSize::Medium => "medium",
            ButtonSize::Large => "large",
        }
    }
}

impl NamedProp for ButtonColor {
    const KIND: &'static str = "color";
    const ALL: &'static [Self] = &ButtonColor::ALL;

    fn name(self) -> &'static str {
        ButtonColor::name(self)
    }

    fn parse_lenient(name: &str) -> Option<Self> {
        ButtonColor::parse_lenient(name)
    }
}

macro_rules! named_prop_impls {
    ($($ty:ty),*) => {$(
        impl $ty {
            /// Parses a name, ignoring case. Unknown names yield `None`.
            pub fn parse_lenient(name: &str) -> Option<Self> {
                <Self as NamedProp>::parse_lenient(name)
            }

            /// Lowercase name as used in props files.
            pub fn name(self) -> &'static str {
                <Self as NamedProp>::name(self)
            }
        }

        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.name())
            }
        }

        impl FromStr for $ty {
            type Err = UnknownName;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::parse_lenient(s)
                    .ok_or_else(|| UnknownName::new(<Self as NamedProp>::KIND, s))
            }
        }
    )*};
}

named_prop_impls!(ButtonVariant, ButtonSize);

/// Reads an optional enum prop; unrecognized names become `None`.
fn deserialize_lenient<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: NamedProp,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };
    let parsed = T::parse_lenient(&raw);
    if parsed.is_none() {
        tracing::debug!(kind = T::KIND, value = %raw, "ignoring unrecognized prop value");
    }
    Ok(parsed)
}

/// Everything a caller supplies to render one button.
///
/// Construct with the fluent builder:
///
/// ```rust
/// use styled_button::{ButtonColor, ButtonProps, ButtonSize, ButtonVariant};
///
/// let props = ButtonProps::new("Delete")
///     .variant(ButtonVariant::Outlined)
///     .color(ButtonColor::Error)
///     .size(ButtonSize::Small);
///
/// let button = props.render();
/// assert_eq!(button.style().get("borderColor"), Some("#d32f2f"));
/// ```
///
/// Or load from a props file; `on_click` is never read from files:
///
/// ```rust
/// use styled_button::ButtonProps;
///
/// let props = ButtonProps::from_json(r#"{"children": "Save", "color": "success"}"#).unwrap();
/// assert_eq!(props.render().style().get("backgroundColor"), Some("#388e3c"));
/// ```
#[derive(Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ButtonProps {
    #[serde(deserialize_with = "deserialize_node")]
    pub children: Node,
    #[serde(skip)]
    pub on_click: Option<ClickHandler>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub variant: Option<ButtonVariant>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub loading: bool,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub color: Option<ButtonColor>,
    #[serde(default, deserialize_with = "deserialize_lenient")]
    pub size: Option<ButtonSize>,
    #[serde(default, deserialize_with = "deserialize_opt_node")]
    pub start_icon: Option<Node>,
    #[serde(default, deserialize_with = "deserialize_opt_node")]
    pub end_icon: Option<Node>,
    #[serde(default, deserialize_with = "deserialize_opt_node")]
    pub loading_indicator: Option<Node>,
    #[serde(default)]
    pub style: Option<StyleMap>,
}

impl ButtonProps {
    /// Creates props with the given children and every optional field absent.
    pub fn new(children: impl Into<Node>) -> Self {
        Self {
            children: children.into(),
            on_click: None,
            variant: None,
            disabled: false,
            loading: false,
            color: None,
            size: None,
            start_icon: None,
            end_icon: None,
            loading_indicator: None,
            style: None,
        }
    }

    pub fn on_click(mut self, handler: impl Fn() + 'static) -> Self {
        self.on_click = Some(Rc::new(handler));
        self
    }

    pub fn variant(mut self, variant: ButtonVariant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn color(mut self, color: ButtonColor) -> Self {
        self.color = Some(color);
        self
    }

    pub fn size(mut self, size: ButtonSize) -> Self {
        self.size = Some(size);
        self
    }

    pub fn start_icon(mut self, icon: impl Into<Node>) -> Self {
        self.start_icon = Some(icon.into());
        self
    }

    pub fn end_icon(mut self, icon: impl Into<Node>) -> Self {
        self.end_icon = Some(icon.into());
        self
    }

    pub fn loading_indicator(mut self, indicator: impl Into<Node>) -> Self {
        self.loading_indicator = Some(indicator.into());
        self
    }

    /// Caller style, merged over every computed property.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Resolves these props into a button element.
    pub fn render(&self) -> ButtonElement {
        render::render(self)
    }

    pub fn from_json(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(source)?)
    }

    pub fn from_yaml(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    /// Loads props from a `.json`, `.yaml` or `.yml` file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let format = PropsFormat::from_path(path)?;
        let source = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        format.parse(&source)
    }
}

impl Props for ButtonProps {
    fn children(&self) -> &Node {
        &self.children
    }
}

impl fmt::Debug for ButtonProps {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ButtonProps")
            .field("children", &self.children)
            .field("on_click", &self.on_click.as_ref().map(|_| "<handler>"))
            .field("variant", &self.variant)
            .field("disabled", &self.disabled)
            .field("loading", &self.loading)
            .field("color", &self.color)
            .field("size", &self.size)
            .field("start_icon", &self.start_icon)
            .field("end_icon", &self.end_icon)
            .field("loading_indicator", &self.loading_indicator)
            .field("style", &self.style)
            .finish()
    }
}

/// Serialization format of a props file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PropsFormat {
    Json,
    Yaml,
}

impl PropsFormat {
    /// Infers the format from a file extension.
    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase);
        match ext.as_deref() {
            Some("json") => Ok(PropsFormat::Json),
            Some("yaml") | Some("yml") => Ok(PropsFormat::Yaml),
            _ => Err(ConfigError::UnknownFormat {
                path: path.to_path_buf(),
            }),
        }
    }

    pub fn parse(self, source: &str) -> Result<ButtonProps, ConfigError> {
        match self {
            PropsFormat::Json => ButtonProps::from_json(source),
            PropsFormat::Yaml => ButtonProps::from_yaml(source),
        }
    }
}

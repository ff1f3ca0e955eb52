//! Renderable content nodes.

use std::fmt;
use std::ops::Deref;

use serde::{Deserialize, Serialize};

/// Error returned for element tag names outside `[A-Za-z][A-Za-z0-9-]*`.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid element tag name '{0}'")]
pub struct InvalidTagName(String);

/// A validated HTML element name.
///
/// Tags are written into markup unescaped, so only letters, digits and
/// dashes are allowed, starting with a letter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TagName(String);

impl TagName {
    pub fn new(name: impl Into<String>) -> Result<Self, InvalidTagName> {
        let name = name.into();
        let mut chars = name.chars();
        let valid = chars.next().is_some_and(|c| c.is_ascii_alphabetic())
            && chars.all(|c| c.is_ascii_alphanumeric() || c == '-');
        if valid {
            Ok(TagName(name))
        } else {
            Err(InvalidTagName(name))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Deref for TagName {
    type Target = str;

    fn deref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TagName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for TagName {
    type Error = InvalidTagName;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TagName::new(value)
    }
}

impl From<TagName> for String {
    fn from(tag: TagName) -> Self {
        tag.0
    }
}

/// Content placed inside a button: children, icons and loading indicators.
///
/// In props files a bare string deserializes as [`Node::Text`], both at the
/// top level and inside `children` lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    /// Plain text, HTML-escaped on output.
    Text { value: String },
    /// Trusted markup (e.g. an inline SVG icon), emitted verbatim.
    Markup { value: String },
    /// A wrapping element such as `<span>`.
    Element {
        tag: TagName,
        #[serde(default, deserialize_with = "deserialize_nodes")]
        children: Vec<Node>,
    },
    /// A group of nodes without a wrapper.
    Fragment {
        #[serde(default, deserialize_with = "deserialize_nodes")]
        children: Vec<Node>,
    },
}

impl Node {
    pub fn text(value: impl Into<String>) -> Self {
        Node::Text {
            value: value.into(),
        }
    }

    pub fn markup(value: impl Into<String>) -> Self {
        Node::Markup {
            value: value.into(),
        }
    }

    /// Wraps children in an element.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidTagName`] unless the tag matches `[A-Za-z][A-Za-z0-9-]*`.
    pub fn element(tag: impl Into<String>, children: Vec<Node>) -> Result<Self, InvalidTagName> {
        Ok(Node::Element {
            tag: TagName::new(tag)?,
            children,
        })
    }

    /// Wraps children in a `<span>`.
    pub fn span(children: Vec<Node>) -> Self {
        Node::Element {
            tag: TagName("span".to_string()),
            children,
        }
    }

    pub fn fragment(children: Vec<Node>) -> Self {
        Node::Fragment { children }
    }

    /// Concatenated text content, ignoring markup.
    pub fn text_content(&self) -> String {
        match self {
            Node::Text { value } => value.clone(),
            Node::Markup { .. } => String::new(),
            Node::Element { children, .. } | Node::Fragment { children } => {
                children.iter().map(Node::text_content).collect()
            }
        }
    }
}

impl From<&str> for Node {
    fn from(value: &str) -> Self {
        Node::text(value)
    }
}

impl From<String> for Node {
    fn from(value: String) -> Self {
        Node::text(value)
    }
}

/// Accepts either a tagged node or a bare string.
#[derive(Deserialize)]
#[serde(untagged)]
enum NodeRepr {
    Plain(String),
    Tagged(Node),
}

impl From<NodeRepr> for Node {
    fn from(repr: NodeRepr) -> Self {
        match repr {
            NodeRepr::Plain(s) => Node::text(s),
            NodeRepr::Tagged(node) => node,
        }
    }
}

fn deserialize_nodes<'de, D>(deserializer: D) -> Result<Vec<Node>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let nodes = Vec::<NodeRepr>::deserialize(deserializer)?;
    Ok(nodes.into_iter().map(Node::from).collect())
}

pub(crate) fn deserialize_node<'de, D>(deserializer: D) -> Result<Node, D::Error>
where
    D: serde::Deserializer<'de>,
{
    NodeRepr::deserialize(deserializer).map(Node::from)
}

pub(crate) fn deserialize_opt_node<'de, D>(deserializer: D) -> Result<Option<Node>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<NodeRepr>::deserialize(deserializer)?.map(Node::from))
}

use std::fmt::{self, Formatter};

use crate::error::RenderError;
use crate::html::attributes::Attributes;

// Tags rendered self-closing, with no body and no value check.
static VOID_TAGS: [&str; 1] = ["img"];

/// Anything that can serialize itself to markup.
pub trait ToHtml {
    fn attributes(&self) -> Option<&Attributes>;

    fn to_html(&self) -> Result<String, RenderError>;

    /// Shared attribute serialization: `""` when there are no attributes,
    /// otherwise a leading space plus `key="value"` pairs in insertion order.
    fn attributes_html(&self) -> String {
        self.attributes()
            .map(Attributes::to_fragment)
            .unwrap_or_default()
    }
}

/// The unspecialized node record. Every field is optional; which of them
/// actually mean something is up to the concrete variants, and rendering
/// one of these directly is an error.
#[derive(Clone, PartialEq, Eq, Default)]
pub struct HtmlNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub children: Option<Vec<Node>>,
    pub attributes: Option<Attributes>,
}

impl HtmlNode {
    pub fn new(
        tag: Option<&str>,
        value: Option<&str>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: value.map(str::to_owned),
            children,
            attributes,
        }
    }
}

impl ToHtml for HtmlNode {
    fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    fn to_html(&self) -> Result<String, RenderError> {
        Err(RenderError::NotImplemented)
    }
}

impl fmt::Debug for HtmlNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "HtmlNode(tag={:?}, value={:?}, children={:?}, attributes={:?})",
            self.tag, self.value, self.children, self.attributes
        )
    }
}

/// A terminal node: renders from its value, or self-closing for void tags.
#[derive(Clone, PartialEq, Eq)]
pub struct LeafNode {
    pub tag: Option<String>,
    pub value: Option<String>,
    pub attributes: Option<Attributes>,
}

impl LeafNode {
    pub fn new(tag: Option<&str>, value: Option<&str>, attributes: Option<Attributes>) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            value: value.map(str::to_owned),
            attributes,
        }
    }

    /// A leaf never has children.
    pub fn children(&self) -> &[Node] {
        &[]
    }
}

impl ToHtml for LeafNode {
    fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    fn to_html(&self) -> Result<String, RenderError> {
        // Void elements carry no text content, so the value check is skipped.
        if let Some(tag) = self.tag.as_deref() {
            if VOID_TAGS.contains(&tag) {
                return Ok(format!("<{}{} />", tag, self.attributes_html()));
            }
        }
        let value = match self.value.as_deref() {
            None | Some("") => return Err(RenderError::MissingValue),
            Some(value) => value,
        };
        match self.tag.as_deref() {
            None => Ok(value.to_owned()),
            Some(tag) => Ok(format!(
                "<{}{}>{}</{}>",
                tag,
                self.attributes_html(),
                value,
                tag
            )),
        }
    }
}

impl fmt::Debug for LeafNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "LeafNode(tag={:?}, value={:?}, attributes={:?})",
            self.tag, self.value, self.attributes
        )
    }
}

/// An inner node: renders its children back to back inside its own tag.
#[derive(Clone, PartialEq, Eq)]
pub struct ParentNode {
    pub tag: Option<String>,
    pub children: Option<Vec<Node>>,
    pub attributes: Option<Attributes>,
}

impl ParentNode {
    pub fn new(
        tag: Option<&str>,
        children: Option<Vec<Node>>,
        attributes: Option<Attributes>,
    ) -> Self {
        Self {
            tag: tag.map(str::to_owned),
            children,
            attributes,
        }
    }

    /// A parent never carries a value of its own.
    pub fn value(&self) -> Option<&str> {
        None
    }
}

impl ToHtml for ParentNode {
    fn attributes(&self) -> Option<&Attributes> {
        self.attributes.as_ref()
    }

    fn to_html(&self) -> Result<String, RenderError> {
        let tag = match self.tag.as_deref() {
            None | Some("") => return Err(RenderError::MissingTag),
            Some(tag) => tag,
        };
        // None means the caller never supplied children; an empty vec is a
        // valid, empty body.
        let children = self
            .children
            .as_ref()
            .ok_or(RenderError::MissingChildren)?;
        let mut body = String::new();
        for child in children {
            body.push_str(&child.to_html()?);
        }
        Ok(format!(
            "<{}{}>{}</{}>",
            tag,
            self.attributes_html(),
            body,
            tag
        ))
    }
}

impl fmt::Debug for ParentNode {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "ParentNode(tag={:?}, children={:?}, attributes={:?})",
            self.tag, self.children, self.attributes
        )
    }
}

/// A node of any kind. Children are stored as `Node` so leaves and parents
/// mix freely in one tree.
#[derive(Clone, PartialEq, Eq)]
pub enum Node {
    Html(HtmlNode),
    Leaf(LeafNode),
    Parent(ParentNode),
}

impl Node {
    /// A bare text leaf, rendered verbatim with no wrapping element.
    pub fn text(value: &str) -> Node {
        Node::Leaf(LeafNode::new(None, Some(value), None))
    }

    pub fn leaf(tag: &str, value: &str) -> Node {
        Node::Leaf(LeafNode::new(Some(tag), Some(value), None))
    }

    pub fn parent(tag: &str, children: Vec<Node>) -> Node {
        Node::Parent(ParentNode::new(Some(tag), Some(children), None))
    }
}

impl ToHtml for Node {
    fn attributes(&self) -> Option<&Attributes> {
        match self {
            Node::Html(node) => node.attributes(),
            Node::Leaf(node) => node.attributes(),
            Node::Parent(node) => node.attributes(),
        }
    }

    fn to_html(&self) -> Result<String, RenderError> {
        match self {
            Node::Html(node) => node.to_html(),
            Node::Leaf(node) => node.to_html(),
            Node::Parent(node) => node.to_html(),
        }
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Node::Html(node) => fmt::Debug::fmt(node, f),
            Node::Leaf(node) => fmt::Debug::fmt(node, f),
            Node::Parent(node) => fmt::Debug::fmt(node, f),
        }
    }
}

impl From<HtmlNode> for Node {
    fn from(node: HtmlNode) -> Node {
        Node::Html(node)
    }
}

impl From<LeafNode> for Node {
    fn from(node: LeafNode) -> Node {
        Node::Leaf(node)
    }
}

impl From<ParentNode> for Node {
    fn from(node: ParentNode) -> Node {
        Node::Parent(node)
    }
}

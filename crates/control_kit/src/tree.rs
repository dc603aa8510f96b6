//! Host-agnostic presentation tree.
//!
//! The shell builders in [`crate::shell`] emit [`PresentationNode`] trees; a
//! [`RenderHost`] materializes them. [`MarkupHost`] serializes to HTML, which
//! is what the unit tests and static previews use.

use std::fmt::Write as _;

#[derive(Debug, Clone, PartialEq, Eq)]
/// One node of a presentation tree.
pub enum PresentationNode {
    /// Element with ordered attributes and children.
    Element(Element),
    /// Text content.
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Element node.
pub struct Element {
    /// Tag name.
    pub tag: &'static str,
    /// Attributes in emission order. Names are unique.
    pub attributes: Vec<(String, String)>,
    /// Child nodes in render order.
    pub children: Vec<PresentationNode>,
}

impl Element {
    /// Element without attributes or children.
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Sets an attribute. A repeated name replaces the earlier value in place.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    /// Sets an attribute only when `value` is present.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Sets the `class` attribute.
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Appends a child node.
    pub fn child(mut self, child: impl Into<PresentationNode>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Appends a child node when present.
    pub fn child_opt(self, child: Option<impl Into<PresentationNode>>) -> Self {
        match child {
            Some(child) => self.child(child),
            None => self,
        }
    }

    /// Appends a text child.
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(PresentationNode::Text(text.into()))
    }

    /// Sets or replaces an attribute.
    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(existing, _)| *existing == name) {
            Some(slot) => slot.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    /// Attribute value by name.
    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, value)| value.as_str())
    }

    /// Whether the class attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .is_some_and(|classes| classes.split_whitespace().any(|token| token == class))
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(&self.children, &mut out);
        out
    }

    /// Depth-first search, including `self`, for the first element with `class`.
    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter().find_map(|child| match child {
            PresentationNode::Element(element) => element.find_by_class(class),
            PresentationNode::Text(_) => None,
        })
    }
}

fn collect_text(children: &[PresentationNode], out: &mut String) {
    for child in children {
        match child {
            PresentationNode::Element(element) => collect_text(&element.children, out),
            PresentationNode::Text(text) => out.push_str(text),
        }
    }
}

impl From<Element> for PresentationNode {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for PresentationNode {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for PresentationNode {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// Turns a presentation tree into host output.
pub trait RenderHost {
    /// Materialized form of a tree.
    type Output;

    /// Materializes `node`.
    fn materialize(&mut self, node: &PresentationNode) -> Self::Output;
}

/// Serializes presentation trees to HTML markup.
///
/// Attributes with an empty value render as bare boolean attributes.
#[derive(Debug, Default, Clone, Copy)]
pub struct MarkupHost;

impl RenderHost for MarkupHost {
    type Output = String;

    fn materialize(&mut self, node: &PresentationNode) -> String {
        let mut out = String::new();
        write_node(node, &mut out);
        out
    }
}

/// Serializes `node` with a [`MarkupHost`].
pub fn to_markup(node: &PresentationNode) -> String {
    MarkupHost.materialize(node)
}

fn write_node(node: &PresentationNode, out: &mut String) {
    match node {
        PresentationNode::Text(text) => escape_into(text, out),
        PresentationNode::Element(element) => {
            let _ = write!(out, "<{}", element.tag);
            for (name, value) in &element.attributes {
                out.push(' ');
                out.push_str(name);
                if !value.is_empty() {
                    out.push_str("=\"");
                    escape_into(value, out);
                    out.push('"');
                }
            }
            out.push('>');
            for child in &element.children {
                write_node(child, out);
            }
            let _ = write!(out, "</{}>", element.tag);
        }
    }
}

fn escape_into(raw: &str, out: &mut String) {
    for ch in raw.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn repeated_attribute_replaces_in_place() {
        let element = Element::new("div")
            .attr("role", "checkbox")
            .attr("tabindex", "0")
            .attr("role", "switch");
        assert_eq!(
            element.attributes,
            vec![
                ("role".to_string(), "switch".to_string()),
                ("tabindex".to_string(), "0".to_string()),
            ]
        );
    }

    #[test]
    fn markup_escapes_text_and_attributes() {
        let node: PresentationNode = Element::new("span")
            .attr("title", "\"quoted\" & more")
            .attr("disabled", "")
            .text("<b>")
            .into();
        assert_eq!(
            to_markup(&node),
            r#"<span title="&quot;quoted&quot; &amp; more" disabled>&lt;b&gt;</span>"#
        );
    }

    #[test]
    fn find_by_class_matches_whole_tokens() {
        let element = Element::new("div")
            .class("outer")
            .child(Element::new("span").class("outer__inner").text("hi"));
        assert_eq!(element.find_by_class("outer").map(|e| e.tag), Some("div"));
        assert_eq!(
            element.find_by_class("outer__inner").map(Element::text_content),
            Some("hi".to_string())
        );
        assert!(element.find_by_class("inner").is_none());
    }
}

//! Renderer-neutral output tree.
//!
//! A rendered [`NavLink`](crate::NavLink) is described as a small DOM-like
//! tree: an [`Element`] with a tag, HTML attributes, an optional inline
//! [`StyleMap`], component properties and child [`Node`]s. The GPUI adapter
//! in [`widgets`](crate::widgets) turns it into real elements;
//! [`Node::to_html`] serialises it for server-side output and assertions.
//!
//! Attributes are kept in a `BTreeMap`, so serialisation order is stable.

use std::collections::BTreeMap;
use std::fmt::Write as _;

/// One node of content.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Node {
    /// Renders nothing.
    #[default]
    Empty,
    /// A text run.
    Text(String),
    /// A tagged element.
    Element(Element),
    /// Several siblings without a wrapper.
    Fragment(Vec<Node>),
}

impl Node {
    /// Create a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// Concatenated text of this node and all descendants.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(text) => out.push_str(text),
            Node::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
            Node::Fragment(children) => {
                for child in children {
                    child.collect_text(out);
                }
            }
        }
    }

    /// The element, if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Serialise to HTML. Text and attribute values are escaped.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        match self {
            Node::Empty => {}
            Node::Text(text) => out.push_str(&escape_html(text)),
            Node::Element(element) => element.write_html(out),
            Node::Fragment(children) => {
                for child in children {
                    child.write_html(out);
                }
            }
        }
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Node::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Node::Text(text)
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// A component property carried on an [`Element`].
///
/// Properties are read by the element's renderer; unlike attributes they are
/// not serialised to HTML.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropValue {
    Bool(bool),
    Str(String),
}

impl From<bool> for PropValue {
    fn from(value: bool) -> Self {
        PropValue::Bool(value)
    }
}

impl From<&str> for PropValue {
    fn from(value: &str) -> Self {
        PropValue::Str(value.to_string())
    }
}

impl From<String> for PropValue {
    fn from(value: String) -> Self {
        PropValue::Str(value)
    }
}

/// Ordered inline style declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StyleMap {
    declarations: Vec<(String, String)>,
}

impl StyleMap {
    /// Create an empty style map.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration, replacing an existing value for the same property.
    pub fn set(mut self, property: impl Into<String>, value: impl Into<String>) -> Self {
        let property = property.into();
        let value = value.into();
        match self
            .declarations
            .iter_mut()
            .find(|(existing, _)| *existing == property)
        {
            Some(slot) => slot.1 = value,
            None => self.declarations.push((property, value)),
        }
        self
    }

    /// Value of `property`, if declared.
    pub fn get(&self, property: &str) -> Option<&str> {
        self.declarations
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.as_str())
    }

    /// Declarations in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.declarations
            .iter()
            .map(|(name, value)| (name.as_str(), value.as_str()))
    }

    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// CSS text, e.g. `color: red; font-weight: bold;`.
    pub fn to_css(&self) -> String {
        let mut css = String::new();
        for (name, value) in &self.declarations {
            if !css.is_empty() {
                css.push(' ');
            }
            let _ = write!(css, "{}: {};", name, value);
        }
        css
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for StyleMap {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(StyleMap::new(), |map, (name, value)| map.set(name, value))
    }
}

/// A tagged element with attributes, style, properties and children.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Element {
    tag: String,
    attrs: BTreeMap<String, String>,
    style: Option<StyleMap>,
    props: BTreeMap<String, PropValue>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with no attributes or children.
    pub fn new(tag: impl Into<String>) -> Self {
        Self {
            tag: tag.into(),
            ..Self::default()
        }
    }

    /// Set an HTML attribute.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    /// Set an HTML attribute when `value` is `Some`.
    pub fn attr_opt(self, name: impl Into<String>, value: Option<impl Into<String>>) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set the inline style.
    pub fn style(mut self, style: StyleMap) -> Self {
        self.style = Some(style);
        self
    }

    /// Set a component property.
    pub fn prop(mut self, name: impl Into<String>, value: impl Into<PropValue>) -> Self {
        self.props.insert(name.into(), value.into());
        self
    }

    /// Append a child.
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn tag_name(&self) -> &str {
        &self.tag
    }

    /// Value of attribute `name`.
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// All attributes, sorted by name.
    pub fn attrs(&self) -> &BTreeMap<String, String> {
        &self.attrs
    }

    pub fn inline_style(&self) -> Option<&StyleMap> {
        self.style.as_ref()
    }

    /// Value of property `name`.
    pub fn get_prop(&self, name: &str) -> Option<&PropValue> {
        self.props.get(name)
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Whether the `class` attribute contains `class` as a whole token.
    pub fn has_class(&self, class: &str) -> bool {
        self.get_attr("class")
            .is_some_and(|classes| classes.split_whitespace().any(|c| c == class))
    }

    /// Serialise to HTML.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.write_html(&mut out);
        out
    }

    fn write_html(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.tag);
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        if let Some(style) = self.style.as_ref().filter(|style| !style.is_empty()) {
            let _ = write!(out, " style=\"{}\"", escape_html(&style.to_css()));
        }
        out.push('>');
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag);
    }
}

fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#x27;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_content_walks_children() {
        let node: Node = Element::new("span")
            .child("Hello, ")
            .child(Element::new("b").child("world"))
            .into();
        assert_eq!(node.text_content(), "Hello, world");
    }

    #[test]
    fn test_to_html_escapes() {
        let element = Element::new("a")
            .attr("href", "/search?q=\"x\"&y")
            .child("<Tom & Jerry>");
        assert_eq!(
            element.to_html(),
            "<a href=\"/search?q=&quot;x&quot;&amp;y\">&lt;Tom &amp; Jerry&gt;</a>"
        );
    }

    #[test]
    fn test_props_are_not_serialised() {
        let element = Element::new("span").prop("isActive", true).child("x");
        assert_eq!(element.to_html(), "<span>x</span>");
        assert_eq!(element.get_prop("isActive"), Some(&PropValue::Bool(true)));
    }

    #[test]
    fn test_style_map() {
        let style = StyleMap::new()
            .set("color", "red")
            .set("font-weight", "bold")
            .set("color", "blue");
        assert_eq!(style.get("color"), Some("blue"));
        assert_eq!(style.to_css(), "color: blue; font-weight: bold;");

        let html = Element::new("span").style(style).to_html();
        assert_eq!(html, "<span style=\"color: blue; font-weight: bold;\"></span>");
    }

    #[test]
    fn test_style_from_iter() {
        let style: StyleMap = [("color", "red")].into_iter().collect();
        assert_eq!(style.to_css(), "color: red;");
    }

    #[test]
    fn test_has_class_matches_whole_tokens() {
        let element = Element::new("a").attr("class", "nav active nav_links");
        assert!(element.has_class("active"));
        assert!(!element.has_class("act"));
        assert!(!Element::new("a").has_class("active"));
    }

    #[test]
    fn test_attr_opt() {
        let element = Element::new("a")
            .attr_opt("id", Some("home"))
            .attr_opt("data-testid", None::<String>);
        assert_eq!(element.get_attr("id"), Some("home"));
        assert!(element.get_attr("data-testid").is_none());
    }
}

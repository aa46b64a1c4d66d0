//! Mutable markup nodes.
//!
//! Form styles need to adjust widgets after they are built (append a class,
//! wrap them in grid columns), so widgets are produced as a small node tree
//! and only turned into a string once the whole form is assembled.

/// Elements rendered without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source", "track",
    "wbr",
];

/// A piece of markup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with attributes and children.
    Tag(Tag),
    /// Text content, escaped on render.
    Text(String),
    /// Pre-rendered markup, emitted verbatim.
    Raw(String),
}

impl Node {
    /// Creates a text node.
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    /// Creates a raw markup node.
    pub fn raw(markup: impl Into<String>) -> Self {
        Self::Raw(markup.into())
    }

    /// Returns the element if this node is one.
    pub fn as_tag(&self) -> Option<&Tag> {
        match self {
            Self::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Returns the element mutably if this node is one.
    pub fn as_tag_mut(&mut self) -> Option<&mut Tag> {
        match self {
            Self::Tag(tag) => Some(tag),
            _ => None,
        }
    }

    /// Renders the node as HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        match self {
            Self::Tag(tag) => tag.write_into(out),
            Self::Text(text) => out.push_str(&html_escape(text)),
            Self::Raw(raw) => out.push_str(raw),
        }
    }
}

impl From<Tag> for Node {
    fn from(tag: Tag) -> Self {
        Self::Tag(tag)
    }
}

/// An HTML element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tag {
    name: String,
    attrs: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Tag {
    /// Creates an empty element.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Returns the element name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sets an attribute.
    #[must_use]
    pub fn attr(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attr(key, value);
        self
    }

    /// Sets the `class` attribute.
    #[must_use]
    pub fn class(self, class: impl Into<String>) -> Self {
        self.attr("class", class)
    }

    /// Sets the `id` attribute.
    #[must_use]
    pub fn id(self, id: impl Into<String>) -> Self {
        self.attr("id", id)
    }

    /// Appends a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.push(node);
        self
    }

    /// Appends a text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// Sets an attribute, replacing any previous value in place.
    pub fn set_attr(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.attrs.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = value,
            None => self.attrs.push((key, value)),
        }
    }

    /// Gets an attribute.
    pub fn get_attr(&self, key: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Appends a class token.
    pub fn add_class(&mut self, class: &str) {
        let merged = match self.get_attr("class") {
            Some(current) if !current.is_empty() => format!("{current} {class}"),
            _ => class.to_string(),
        };
        self.set_attr("class", merged);
    }

    /// Iterates over the class tokens.
    pub fn classes(&self) -> impl Iterator<Item = &str> {
        self.get_attr("class").unwrap_or("").split_whitespace()
    }

    /// Returns the first class token, which identifies the widget type.
    pub fn primary_class(&self) -> Option<&str> {
        self.classes().next()
    }

    /// Returns whether the element carries a class token.
    pub fn has_class(&self, class: &str) -> bool {
        self.classes().any(|c| c == class)
    }

    /// Appends a child node.
    pub fn push(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    /// Returns the child nodes.
    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Finds the first descendant element (or self) with the given id.
    pub fn find_by_id(&self, id: &str) -> Option<&Self> {
        if self.get_attr("id") == Some(id) {
            return Some(self);
        }
        self.children
            .iter()
            .filter_map(Node::as_tag)
            .find_map(|child| child.find_by_id(id))
    }

    /// Renders the element as HTML.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.write_into(&mut out);
        out
    }

    fn write_into(&self, out: &mut String) {
        out.push('<');
        out.push_str(&self.name);
        for (key, value) in &self.attrs {
            out.push_str(&format!(r#" {key}="{}""#, html_escape(value)));
        }
        out.push('>');
        if VOID_ELEMENTS.contains(&self.name.as_str()) {
            return;
        }
        for child in &self.children {
            child.write_into(out);
        }
        out.push_str(&format!("</{}>", self.name));
    }
}

/// Escapes HTML special characters.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_nested() {
        let tag = Tag::new("div")
            .class("input-group")
            .child(Tag::new("span").class("addon"))
            .text("a < b");
        assert_eq!(
            tag.render(),
            r#"<div class="input-group"><span class="addon"></span>a &lt; b</div>"#
        );
    }

    #[test]
    fn test_void_element() {
        let tag = Tag::new("input").attr("type", "text").attr("value", "x\"y");
        assert_eq!(tag.render(), r#"<input type="text" value="x&quot;y">"#);
    }

    #[test]
    fn test_raw_is_verbatim() {
        let node = Node::raw("<script>a && b</script>");
        assert_eq!(node.render(), "<script>a && b</script>");
    }

    #[test]
    fn test_add_class() {
        let mut tag = Tag::new("input");
        tag.add_class("string");
        tag.add_class("form-control");
        assert_eq!(tag.get_attr("class"), Some("string form-control"));
        assert_eq!(tag.primary_class(), Some("string"));
        assert!(tag.has_class("form-control"));
    }

    #[test]
    fn test_set_attr_keeps_position() {
        let tag = Tag::new("a").attr("href", "/").attr("id", "x").attr("href", "/y");
        assert_eq!(tag.render(), r#"<a href="/y" id="x"></a>"#);
    }

    #[test]
    fn test_find_by_id() {
        let tag = Tag::new("div")
            .id("outer")
            .child(Tag::new("input").id("inner"));
        assert_eq!(tag.find_by_id("inner").map(Tag::name), Some("input"));
        assert!(tag.find_by_id("missing").is_none());
    }

    #[test]
    fn test_html_escape() {
        assert_eq!(html_escape("<script>"), "&lt;script&gt;");
        assert_eq!(html_escape("\"test\""), "&quot;test&quot;");
        assert_eq!(html_escape("a & b"), "a &amp; b");
    }
}

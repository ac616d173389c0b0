//! Dialect-neutral markup tree produced by the section catalog

/// A markup node
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    /// Text content, escaped by the writer
    Text(String),
    /// A comment; `{/* */}` in JSX, `<!-- -->` in HTML
    Comment(String),
    /// Emitted verbatim
    Raw(String),
}

/// An element with ordered attributes and children
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    pub tag: &'static str,
    /// Class list; written as `class` or `className` depending on dialect
    pub class: Option<String>,
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Elements that never have children or a closing tag
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "source"];

impl Element {
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            class: None,
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn is_void(&self) -> bool {
        VOID_TAGS.contains(&self.tag)
    }

    /// Set the class list; empty strings leave it unset
    pub fn class(mut self, class: impl Into<String>) -> Self {
        let class = class.into();
        self.class = if class.trim().is_empty() { None } else { Some(class) };
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    pub fn children<I, N>(mut self, children: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(children.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// True when every child is text, so the element fits on one line
    pub(crate) fn is_inline(&self) -> bool {
        self.children.iter().all(|c| matches!(c, Node::Text(_)))
    }
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

/// Shorthand for [`Element::new`]
pub fn el(tag: &'static str) -> Element {
    Element::new(tag)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_class_is_dropped() {
        let div = el("div").class("  ");
        assert_eq!(div.class, None);
    }

    #[test]
    fn test_builder_keeps_child_order() {
        let list = el("ul").children(["a", "b"].map(|t| el("li").text(t)));
        assert_eq!(list.children.len(), 2);
        assert!(!list.is_inline());
        assert!(el("p").text("x").is_inline());
    }

    #[test]
    fn test_void_tags() {
        assert!(el("img").is_void());
        assert!(!el("div").is_void());
    }
}

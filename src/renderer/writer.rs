//! Serialize a markup tree as JSX or HTML

use super::markup::{Element, Node};

/// Output dialect
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    Jsx,
    Html,
}

/// Writes markup incrementally, one element per line
pub struct MarkupWriter {
    dialect: Dialect,
    indent_width: usize,
    depth: usize,
    out: String,
}

impl MarkupWriter {
    pub fn new(dialect: Dialect, indent_width: usize) -> Self {
        Self {
            dialect,
            indent_width,
            depth: 0,
            out: String::new(),
        }
    }

    /// Start nested output `depth` levels in
    pub fn with_depth(mut self, depth: usize) -> Self {
        self.depth = depth;
        self
    }

    fn indent_str(&self) -> String {
        " ".repeat(self.indent_width * self.depth)
    }

    fn line(&mut self, text: &str) {
        let indent = self.indent_str();
        self.out.push_str(&indent);
        self.out.push_str(text);
        self.out.push('\n');
    }

    pub fn write(&mut self, node: &Node) {
        match node {
            Node::Element(element) => self.write_element(element),
            Node::Text(text) => {
                let escaped = self.escape_text(text);
                self.line(&escaped);
            }
            Node::Comment(text) => {
                let comment = match self.dialect {
                    Dialect::Jsx => format!("{{/* {} */}}", text.replace("*/", "* /")),
                    Dialect::Html => format!("<!-- {} -->", text.replace("--", "- -")),
                };
                self.line(&comment);
            }
            Node::Raw(raw) => self.line(raw),
        }
    }

    fn write_element(&mut self, element: &Element) {
        let open = self.open_tag(element);
        if element.is_void() {
            let close = match self.dialect {
                Dialect::Jsx => " />",
                Dialect::Html => ">",
            };
            self.line(&format!("{open}{close}"));
            return;
        }
        if element.is_inline() {
            let text: String = element
                .children
                .iter()
                .filter_map(|c| match c {
                    Node::Text(t) => Some(self.escape_text(t)),
                    _ => None,
                })
                .collect();
            self.line(&format!("{open}>{text}</{}>", element.tag));
            return;
        }
        self.line(&format!("{open}>"));
        self.depth += 1;
        for child in &element.children {
            self.write(child);
        }
        self.depth -= 1;
        self.line(&format!("</{}>", element.tag));
    }

    fn open_tag(&self, element: &Element) -> String {
        let mut tag = format!("<{}", element.tag);
        if let Some(class) = &element.class {
            let name = match self.dialect {
                Dialect::Jsx => "className",
                Dialect::Html => "class",
            };
            tag.push_str(&format!(r#" {name}="{}""#, escape_attr(class)));
        }
        for (name, value) in &element.attrs {
            tag.push_str(&format!(r#" {}="{}""#, self.attr_name(name), escape_attr(value)));
        }
        tag
    }

    fn attr_name<'a>(&self, name: &'a str) -> &'a str {
        match (self.dialect, name) {
            (Dialect::Jsx, "for") => "htmlFor",
            (Dialect::Jsx, "tabindex") => "tabIndex",
            _ => name,
        }
    }

    fn escape_text(&self, text: &str) -> String {
        let escaped = text
            .replace('&', "&amp;")
            .replace('<', "&lt;")
            .replace('>', "&gt;");
        match self.dialect {
            Dialect::Jsx => escaped.replace('{', "&#123;").replace('}', "&#125;"),
            Dialect::Html => escaped,
        }
    }

    /// The text written so far
    pub fn finish(self) -> String {
        self.out
    }
}

fn escape_attr(value: &str) -> String {
    value.replace('&', "&amp;").replace('"', "&quot;")
}

/// Write a single node tree
pub fn write_markup(node: &Node, dialect: Dialect, indent_width: usize, depth: usize) -> String {
    let mut writer = MarkupWriter::new(dialect, indent_width).with_depth(depth);
    writer.write(node);
    writer.finish()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::markup::el;
    use pretty_assertions::assert_eq;

    fn sample() -> Node {
        el("div")
            .class("flex gap-2")
            .child(el("label").attr("for", "email").text("Email"))
            .child(el("input").attr("type", "email"))
            .into()
    }

    #[test]
    fn test_jsx_output() {
        let out = write_markup(&sample(), Dialect::Jsx, 2, 0);
        assert_eq!(
            out,
            "<div className=\"flex gap-2\">\n  <label htmlFor=\"email\">Email</label>\n  <input type=\"email\" />\n</div>\n"
        );
    }

    #[test]
    fn test_html_output() {
        let out = write_markup(&sample(), Dialect::Html, 2, 1);
        assert_eq!(
            out,
            "  <div class=\"flex gap-2\">\n    <label for=\"email\">Email</label>\n    <input type=\"email\">\n  </div>\n"
        );
    }

    #[test]
    fn test_jsx_escapes_braces() {
        let node: Node = el("p").text("a {b} <c> & d").into();
        assert_eq!(
            write_markup(&node, Dialect::Jsx, 2, 0),
            "<p>a &#123;b&#125; &lt;c&gt; &amp; d</p>\n"
        );
    }

    #[test]
    fn test_attr_quotes_escaped() {
        let node: Node = el("img").attr("alt", "say \"hi\"").into();
        assert_eq!(
            write_markup(&node, Dialect::Html, 2, 0),
            "<img alt=\"say &quot;hi&quot;\">\n"
        );
    }

    #[test]
    fn test_comments() {
        let comment = Node::Comment("Hero Section: glow".to_string());
        assert_eq!(write_markup(&comment, Dialect::Jsx, 2, 0), "{/* Hero Section: glow */}\n");
        assert_eq!(write_markup(&comment, Dialect::Html, 2, 0), "<!-- Hero Section: glow -->\n");
    }
}

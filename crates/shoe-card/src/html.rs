//! HTML serialization of the render tree.

use crate::node::{Element, Node};

/// Elements that never have a closing tag.
const VOID_ELEMENTS: &[&str] = &["img", "br", "hr", "meta", "link", "input"];

impl Node {
    /// Serialize this node to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_node(self, &mut out);
        out
    }
}

impl Element {
    /// Serialize this element to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn write_node(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&html_escape(text)),
        Node::Element(element) => write_element(element, out),
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(element.tag);

    if !element.classes.is_empty() {
        write_attr(out, "class", &element.classes.join(" "));
    }

    for (name, value) in &element.attrs {
        write_attr(out, name, value);
    }

    if !element.style.is_empty() {
        let declarations: Vec<String> = element
            .style
            .iter()
            .map(|(property, value)| format!("{}: {}", property, value))
            .collect();
        write_attr(out, "style", &declarations.join("; "));
    }

    if VOID_ELEMENTS.contains(&element.tag) {
        out.push_str(" />");
        return;
    }

    out.push('>');
    for child in &element.children {
        write_node(child, out);
    }
    out.push_str("</");
    out.push_str(element.tag);
    out.push('>');
}

fn write_attr(out: &mut String, name: &str, value: &str) {
    out.push(' ');
    out.push_str(name);
    out.push_str("=\"");
    out.push_str(&html_escape(value));
    out.push('"');
}

/// Escape text for use in HTML content and double-quoted attributes.
pub fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

use serde::Serialize;

/// A node of composed display text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Node {
    Text {
        text: String,
    },
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
}

/// Element shape to instantiate for an interpolated tag, e.g. `a` with an `href`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementTemplate {
    pub tag: String,
    pub attrs: Vec<(String, String)>,
}

impl ElementTemplate {
    pub fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_string(),
            attrs: Vec::new(),
        }
    }

    pub fn with_attr(mut self, name: &str, value: impl Into<String>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    pub fn instantiate(&self, children: Vec<Node>) -> Node {
        Node::Element {
            tag: self.tag.clone(),
            attrs: self.attrs.clone(),
            children,
        }
    }
}

/// Rich display text: a flat list of text and element nodes.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct RichText {
    pub nodes: Vec<Node>,
}

impl RichText {
    pub fn plain(text: impl Into<String>) -> Self {
        let mut rt = RichText::default();
        rt.push_text(text);
        rt
    }

    pub fn from_nodes(nodes: Vec<Node>) -> Self {
        let mut rt = RichText::default();
        for node in nodes {
            rt.push_node(node);
        }
        rt
    }

    /// Append text, merging with a trailing text node.
    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        if text.is_empty() {
            return;
        }
        if let Some(Node::Text { text: last }) = self.nodes.last_mut() {
            last.push_str(&text);
        } else {
            self.nodes.push(Node::Text { text });
        }
    }

    pub fn push_node(&mut self, node: Node) {
        match node {
            Node::Text { text } => self.push_text(text),
            element => self.nodes.push(element),
        }
    }

    pub fn append(&mut self, other: RichText) {
        for node in other.nodes {
            self.push_node(node);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn to_plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            plain_into(node, &mut out);
        }
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        for node in &self.nodes {
            html_into(node, &mut out);
        }
        out
    }
}

fn plain_into(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(text),
        Node::Element { children, .. } => {
            for child in children {
                plain_into(child, out);
            }
        }
    }
}

fn html_into(node: &Node, out: &mut String) {
    match node {
        Node::Text { text } => out.push_str(&escape_html(text)),
        Node::Element {
            tag,
            attrs,
            children,
        } => {
            out.push('<');
            out.push_str(tag);
            for (name, value) in attrs {
                out.push_str(&format!(" {}=\"{}\"", name, escape_html(value)));
            }
            out.push('>');
            for child in children {
                html_into(child, out);
            }
            out.push_str(&format!("</{}>", tag));
        }
    }
}

/// Escape HTML special characters.
pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}

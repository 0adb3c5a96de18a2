use crate::error::{Error, Result};

/// An HTML element tree.
///
/// Nodes are validated when constructed: a leaf always has a text value and
/// a container always has a non-empty tag, so rendering cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// A childless node. With no tag its text is emitted as-is.
    Leaf {
        tag: Option<String>,
        text: String,
        attributes: Vec<(String, String)>,
    },
    Container {
        tag: String,
        children: Vec<Node>,
        attributes: Vec<(String, String)>,
    },
}

impl Node {
    /// Build a leaf node. Fails with [`Error::MissingValue`] when `text` is `None`.
    pub fn leaf(tag: Option<&str>, text: Option<String>) -> Result<Self> {
        let text = text.ok_or(Error::MissingValue)?;
        Ok(Node::Leaf {
            tag: tag.map(str::to_string),
            text,
            attributes: Vec::new(),
        })
    }

    /// Build a container node. Fails with [`Error::MissingTag`] when `tag` is empty.
    pub fn container(tag: &str, children: Vec<Node>) -> Result<Self> {
        if tag.is_empty() {
            return Err(Error::MissingTag);
        }
        Ok(Node::Container {
            tag: tag.to_string(),
            children,
            attributes: Vec::new(),
        })
    }

    /// Append an attribute, keeping insertion order.
    pub fn with_attribute(mut self, name: &str, value: &str) -> Self {
        match &mut self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => {
                attributes.push((name.to_string(), value.to_string()));
            }
        }
        self
    }

    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Leaf { tag, .. } => tag.as_deref(),
            Node::Container { tag, .. } => Some(tag.as_str()),
        }
    }

    pub fn children(&self) -> &[Node] {
        match self {
            Node::Leaf { .. } => &[],
            Node::Container { children, .. } => children,
        }
    }

    pub fn attributes(&self) -> &[(String, String)] {
        match self {
            Node::Leaf { attributes, .. } | Node::Container { attributes, .. } => attributes,
        }
    }

    /// Attributes as ` name="value"` pairs in stored order.
    ///
    /// Values are written without escaping, so a `"` inside a value ends
    /// up verbatim in the output.
    pub fn attributes_to_html(&self) -> String {
        let mut out = String::new();
        push_attributes(self.attributes(), &mut out);
        out
    }

    /// Render this node and its descendants to an HTML string.
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Leaf {
                tag: None, text, ..
            } => out.push_str(text),
            Node::Leaf {
                tag: Some(tag),
                text,
                attributes,
            } => {
                open_tag(tag, attributes, out);
                out.push_str(text);
                close_tag(tag, out);
            }
            // Container attributes are kept on the node but never rendered.
            Node::Container { tag, children, .. } => {
                open_tag(tag, &[], out);
                for child in children {
                    child.render_into(out);
                }
                close_tag(tag, out);
            }
        }
    }
}

fn open_tag(tag: &str, attributes: &[(String, String)], out: &mut String) {
    out.push('<');
    out.push_str(tag);
    push_attributes(attributes, out);
    out.push('>');
}

fn close_tag(tag: &str, out: &mut String) {
    out.push_str("</");
    out.push_str(tag);
    out.push('>');
}

fn push_attributes(attributes: &[(String, String)], out: &mut String) {
    for (name, value) in attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(value);
        out.push('"');
    }
}

mod block;
mod config;
mod error;
mod html;
mod inline;
mod node;
mod parser;
mod span;

pub use block::BlockKind;
pub use config::{Config, ConfigError, LoggingConfig, OutputConfig};
pub use error::{Error, Result};
pub use html::{extract_title, markdown_to_html, markdown_to_html_node, span_to_node};
pub use inline::{DELIMITERS, tokenize};
pub use node::Node;
pub use parser::{classify, split_blocks};
pub use span::{Span, SpanKind};

/// Render a node tree to an HTML string.
pub fn render(node: &Node) -> String {
    node.to_html()
}

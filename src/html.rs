use log::debug;

use crate::block::BlockKind;
use crate::error::{Error, Result};
use crate::inline::tokenize;
use crate::node::Node;
use crate::parser::{self, classify, split_blocks};
use crate::span::{Span, SpanKind};

/// Build the node tree for a whole document: a `div` holding one node per block.
pub fn markdown_to_html_node(markdown: &str) -> Result<Node> {
    let blocks = split_blocks(markdown);
    debug!("building tree from {} blocks", blocks.len());

    let children = blocks
        .into_iter()
        .map(block_to_node)
        .collect::<Result<Vec<_>>>()?;
    Node::container("div", children)
}

fn block_to_node(block: &str) -> Result<Node> {
    let kind = classify(block);
    match kind {
        BlockKind::Heading(_) => text_to_container(kind.tag(), parser::heading_text(block)),
        BlockKind::Code => {
            let code = Node::leaf(Some("code"), Some(parser::code_content(block).to_string()))?;
            Node::container(kind.tag(), vec![code])
        }
        BlockKind::Quote => text_to_container(kind.tag(), &parser::quote_text(block)),
        BlockKind::UnorderedList => list_to_node(kind, parser::unordered_items(block)),
        BlockKind::OrderedList => list_to_node(kind, parser::ordered_items(block)),
        BlockKind::Paragraph => text_to_container(kind.tag(), block),
    }
}

fn list_to_node(kind: BlockKind, items: Vec<&str>) -> Result<Node> {
    let items = items
        .into_iter()
        .map(|item| text_to_container("li", item))
        .collect::<Result<Vec<_>>>()?;
    Node::container(kind.tag(), items)
}

/// A container whose children are the tokenized leaves of `text`.
fn text_to_container(tag: &str, text: &str) -> Result<Node> {
    Node::container(tag, text_to_children(text)?)
}

fn text_to_children(text: &str) -> Result<Vec<Node>> {
    tokenize(text)?.iter().map(span_to_node).collect()
}

/// Map a span to the leaf node that renders it.
pub fn span_to_node(span: &Span) -> Result<Node> {
    let text = Some(span.content().to_string());
    match span.kind() {
        SpanKind::Plain => Node::leaf(None, text),
        SpanKind::Bold => Node::leaf(Some("b"), text),
        SpanKind::Italic => Node::leaf(Some("i"), text),
        SpanKind::Code => Node::leaf(Some("code"), text),
        SpanKind::Link => {
            Ok(Node::leaf(Some("a"), text)?.with_attribute("href", span.target().unwrap_or_default()))
        }
        SpanKind::Image => Ok(Node::leaf(Some("img"), Some(String::new()))?
            .with_attribute("src", span.target().unwrap_or_default())
            .with_attribute("alt", span.content())),
    }
}

/// Render a document straight to an HTML fragment.
pub fn markdown_to_html(markdown: &str) -> Result<String> {
    Ok(markdown_to_html_node(markdown)?.to_html())
}

/// Text of the first level-1 heading in the document.
pub fn extract_title(markdown: &str) -> Result<String> {
    let title = split_blocks(markdown)
        .into_iter()
        .find(|block| classify(block) == BlockKind::Heading(1))
        .map(|block| block.trim_start_matches('#').trim().to_string())
        .ok_or(Error::NoTitleFound)?;
    debug!("found title {title:?}");
    Ok(title)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn html(markdown: &str) -> String {
        markdown_to_html(markdown).unwrap()
    }

    #[test]
    fn heading() {
        assert_eq!(html("# Title"), "<div><h1>Title</h1></div>");
    }

    #[test]
    fn heading_with_inline_markup() {
        assert_eq!(
            html("### A *small* `heading`"),
            "<div><h3>A <i>small</i> <code>heading</code></h3></div>"
        );
    }

    #[test]
    fn paragraph() {
        assert_eq!(
            html("This is **bold**"),
            "<div><p>This is <b>bold</b></p></div>"
        );
    }

    #[test]
    fn paragraph_keeps_newlines() {
        assert_eq!(html("one\ntwo"), "<div><p>one\ntwo</p></div>");
    }

    #[test]
    fn unordered_list() {
        assert_eq!(html("* a\n* b"), "<div><ul><li>a</li><li>b</li></ul></div>");
    }

    #[test]
    fn ordered_list() {
        assert_eq!(
            html("1. first\n2. **second**"),
            "<div><ol><li>first</li><li><b>second</b></li></ol></div>"
        );
    }

    #[test]
    fn ordered_list_must_start_at_one() {
        assert_eq!(html("2. a\n3. b"), "<div><p>2. a\n3. b</p></div>");
    }

    #[test]
    fn code_block() {
        assert_eq!(
            html("```\ncode\n```"),
            "<div><pre><code>code</code></pre></div>"
        );
    }

    #[test]
    fn code_block_is_not_tokenized() {
        assert_eq!(
            html("```\nlet x = *p;\n```"),
            "<div><pre><code>let x = *p;</code></pre></div>"
        );
    }

    #[test]
    fn quote_lines_are_joined() {
        assert_eq!(
            html("> the *best*\n> quote"),
            "<div><blockquote>the <i>best</i> quote</blockquote></div>"
        );
    }

    #[test]
    fn nested_quote_inside_list_is_flattened() {
        assert_eq!(
            html("- > not a quote"),
            "<div><ul><li>> not a quote</li></ul></div>"
        );
    }

    #[test]
    fn links_and_images() {
        assert_eq!(
            html("[home](/) ![logo](/logo.png)"),
            "<div><p><a href=\"/\">home</a> <img src=\"/logo.png\" alt=\"logo\"></img></p></div>"
        );
    }

    #[test]
    fn several_blocks() {
        let md = "# Doc\n\nIntro with `code`.\n\n- one\n- two\n\n> said";
        assert_eq!(
            html(md),
            "<div><h1>Doc</h1><p>Intro with <code>code</code>.</p>\
             <ul><li>one</li><li>two</li></ul><blockquote>said</blockquote></div>"
        );
    }

    #[test]
    fn empty_document() {
        assert_eq!(html(""), "<div></div>");
    }

    #[test]
    fn malformed_inline_aborts_conversion() {
        assert_eq!(
            markdown_to_html("# Fine\n\nbroken *italic"),
            Err(Error::MalformedMarkdown { delimiter: "*" })
        );
    }

    #[rstest]
    #[case(Span::plain("hello world"), "hello world")]
    #[case(Span::styled(SpanKind::Bold, "hello world"), "<b>hello world</b>")]
    #[case(Span::styled(SpanKind::Italic, "hello world"), "<i>hello world</i>")]
    #[case(Span::styled(SpanKind::Code, "hello world"), "<code>hello world</code>")]
    #[case(
        Span::link("hello world", "https://www.google.com"),
        "<a href=\"https://www.google.com\">hello world</a>"
    )]
    #[case(
        Span::image("hello world", "https://www.google.com"),
        "<img src=\"https://www.google.com\" alt=\"hello world\"></img>"
    )]
    fn span_leaves(#[case] span: Span, #[case] expected: &str) {
        assert_eq!(span_to_node(&span).unwrap().to_html(), expected);
    }

    #[rstest]
    #[case("# Title", "Title")]
    #[case("## sub\n\n# Main", "Main")]
    #[case("intro\n\n#   Padded title  \n\n# Second", "Padded title")]
    fn extracts_title(#[case] markdown: &str, #[case] expected: &str) {
        assert_eq!(extract_title(markdown).unwrap(), expected);
    }

    #[rstest]
    #[case("## only sub")]
    #[case("")]
    #[case("#NoSpace")]
    fn missing_title(#[case] markdown: &str) {
        assert_eq!(extract_title(markdown), Err(Error::NoTitleFound));
    }
}

use mdsite::{
    BlockKind, Error, Span, classify, extract_title, markdown_to_html, markdown_to_html_node,
    render, tokenize,
};
use pretty_assertions::assert_eq;
use rstest::rstest;

const DOCUMENT: &str = "\
# Tolkien Fan Club

![JRR Tolkien sitting](/images/tolkien.png)

Here's the deal, **I like Tolkien**.

> \"I am in fact a Hobbit in all but size.\"
>
> -- J.R.R. Tolkien

## Blog posts

- [Why Glorfindel is More Impressive than Legolas](/blog/glorfindel)
- [Why Tom Bombadil Was a Mistake](/blog/tom)

1. Fellowship
2. Two Towers
3. *Return* of the King

```
func main() {
    fmt.Println(\"Hello, World!\")
}
```
";

#[rstest]
#[case("# Title", "<div><h1>Title</h1></div>")]
#[case("This is **bold**", "<div><p>This is <b>bold</b></p></div>")]
#[case("* a\n* b", "<div><ul><li>a</li><li>b</li></ul></div>")]
#[case("```\ncode\n```", "<div><pre><code>code</code></pre></div>")]
#[case("2. a\n3. b", "<div><p>2. a\n3. b</p></div>")]
fn scenarios(#[case] markdown: &str, #[case] expected: &str) {
    assert_eq!(markdown_to_html(markdown).unwrap(), expected);
}

#[test]
fn image_scenario() {
    let spans = tokenize("![alt](u.png)").unwrap();
    assert_eq!(spans, vec![Span::image("alt", "u.png")]);

    let leaf = mdsite::span_to_node(&spans[0]).unwrap();
    assert_eq!(render(&leaf), "<img src=\"u.png\" alt=\"alt\"></img>");
}

#[test]
fn title_scenarios() {
    assert_eq!(extract_title("## sub\n\n# Main").unwrap(), "Main");
    assert_eq!(extract_title("## only sub"), Err(Error::NoTitleFound));
}

#[test]
fn full_document() {
    let tree = markdown_to_html_node(DOCUMENT).unwrap();
    let tags: Vec<_> = tree.children().iter().map(|child| child.tag()).collect();
    assert_eq!(
        tags,
        vec![
            Some("h1"),
            Some("p"),
            Some("p"),
            Some("blockquote"),
            Some("h2"),
            Some("ul"),
            Some("ol"),
            Some("pre"),
        ]
    );
    assert_eq!(extract_title(DOCUMENT).unwrap(), "Tolkien Fan Club");
}

#[test]
fn bare_quote_marker_keeps_quote_together() {
    let quote = "> \"I am in fact a Hobbit in all but size.\"\n>\n> -- J.R.R. Tolkien";
    assert_eq!(classify(quote), BlockKind::Quote);
    assert_eq!(
        markdown_to_html(quote).unwrap(),
        "<div><blockquote>\"I am in fact a Hobbit in all but size.\"  -- J.R.R. Tolkien</blockquote></div>"
    );
}

#[test]
fn rendering_is_deterministic() {
    let first = render(&markdown_to_html_node(DOCUMENT).unwrap());
    let second = render(&markdown_to_html_node(DOCUMENT).unwrap());
    assert_eq!(first, second);
}

#[test]
fn converts_concurrently() {
    let expected = markdown_to_html(DOCUMENT).unwrap();
    std::thread::scope(|scope| {
        let handles: Vec<_> = (0..4)
            .map(|_| scope.spawn(|| markdown_to_html(DOCUMENT).unwrap()))
            .collect();
        for handle in handles {
            assert_eq!(handle.join().unwrap(), expected);
        }
    });
}

#[test]
fn malformed_document_produces_no_output() {
    let md = "# Fine\n\nStill fine\n\nBroken `code";
    assert_eq!(
        markdown_to_html(md),
        Err(Error::MalformedMarkdown { delimiter: "`" })
    );
}

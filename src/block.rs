/// Structural kind of a top-level block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockKind {
    /// ATX heading, level 1..=6
    Heading(u8),
    /// Fenced with triple backticks. Content is never tokenized.
    Code,
    Quote,
    UnorderedList,
    /// Items numbered `1. `, `2. `, ... with no gaps
    OrderedList,
    Paragraph,
}

impl BlockKind {
    /// HTML tag of the element a block of this kind becomes.
    pub fn tag(self) -> &'static str {
        match self {
            BlockKind::Heading(1) => "h1",
            BlockKind::Heading(2) => "h2",
            BlockKind::Heading(3) => "h3",
            BlockKind::Heading(4) => "h4",
            BlockKind::Heading(5) => "h5",
            BlockKind::Heading(_) => "h6",
            BlockKind::Code => "pre",
            BlockKind::Quote => "blockquote",
            BlockKind::UnorderedList => "ul",
            BlockKind::OrderedList => "ol",
            BlockKind::Paragraph => "p",
        }
    }
}

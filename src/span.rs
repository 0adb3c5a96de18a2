use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// Style of an inline text run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SpanKind {
    Plain,
    Bold,
    Italic,
    Code,
    Link,
    Image,
}

impl SpanKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SpanKind::Plain => "plain",
            SpanKind::Bold => "bold",
            SpanKind::Italic => "italic",
            SpanKind::Code => "code",
            SpanKind::Link => "link",
            SpanKind::Image => "image",
        }
    }

    /// Whether spans of this kind carry a link or image target.
    pub fn has_target(self) -> bool {
        matches!(self, SpanKind::Link | SpanKind::Image)
    }
}

impl fmt::Display for SpanKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SpanKind {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "plain" | "text" => Ok(SpanKind::Plain),
            "bold" => Ok(SpanKind::Bold),
            "italic" => Ok(SpanKind::Italic),
            "code" => Ok(SpanKind::Code),
            "link" => Ok(SpanKind::Link),
            "image" => Ok(SpanKind::Image),
            other => Err(Error::UnknownSpanKind(other.to_string())),
        }
    }
}

/// A contiguous run of inline text with a single style.
///
/// Only [`SpanKind::Link`] and [`SpanKind::Image`] spans have a target.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    content: String,
    kind: SpanKind,
    target: Option<String>,
}

impl Span {
    pub fn plain(content: impl Into<String>) -> Self {
        Self::styled(SpanKind::Plain, content)
    }

    /// A span without a target. Link and image kinds must go through
    /// [`Span::link`] / [`Span::image`].
    pub(crate) fn styled(kind: SpanKind, content: impl Into<String>) -> Self {
        debug_assert!(!kind.has_target());
        Self {
            content: content.into(),
            kind,
            target: None,
        }
    }

    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: text.into(),
            kind: SpanKind::Link,
            target: Some(url.into()),
        }
    }

    pub fn image(alt: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            content: alt.into(),
            kind: SpanKind::Image,
            target: Some(url.into()),
        }
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn kind(&self) -> SpanKind {
        self.kind
    }

    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }

    pub fn is_plain(&self) -> bool {
        self.kind == SpanKind::Plain
    }
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Span({}, {}, {})",
            self.content,
            self.kind,
            self.target.as_deref().unwrap_or("None")
        )
    }
}

//! Inline tokenizer: turns the text of a block into a flat sequence of [`Span`]s.
//!
//! Tokenizing runs in fixed passes over the still-plain runs:
//! images, then links, then the `**`, `*` and `` ` `` delimiters in that
//! order. Images must be pulled out before links, since the link pattern
//! also matches the tail of an image. Emphasis is not nested: each
//! delimiter pass only splits runs no earlier pass has claimed.

use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use crate::error::{Error, Result};
use crate::span::{Span, SpanKind};

/// Delimiters in the order they are split out of plain runs.
pub const DELIMITERS: [(&str, SpanKind); 3] = [
    ("**", SpanKind::Bold),
    ("*", SpanKind::Italic),
    ("`", SpanKind::Code),
];

fn image_regex() -> &'static Regex {
    static IMAGE_REGEX: OnceLock<Regex> = OnceLock::new();
    IMAGE_REGEX.get_or_init(|| {
        Regex::new(r"!\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid image regex")
    })
}

fn link_regex() -> &'static Regex {
    static LINK_REGEX: OnceLock<Regex> = OnceLock::new();
    LINK_REGEX
        .get_or_init(|| Regex::new(r"\[([^\[\]]*)\]\(([^\(\)]*)\)").expect("Invalid link regex"))
}

/// Tokenize inline markdown into spans covering `text` left to right.
///
/// Empty plain segments are dropped, so an empty input yields no spans.
/// Fails with [`Error::MalformedMarkdown`] when a plain run holds an odd
/// number of one delimiter.
pub fn tokenize(text: &str) -> Result<Vec<Span>> {
    let spans = vec![Span::plain(text)];
    let spans = split_pattern(spans, image_regex(), |alt, url| Span::image(alt, url));
    let mut spans = split_pattern(spans, link_regex(), |text, url| Span::link(text, url));

    for (delimiter, kind) in DELIMITERS {
        spans = split_delimiter(spans, delimiter, kind)?;
    }

    Ok(spans)
}

/// Replace every match of `pattern` inside plain spans with the span built
/// from its two capture groups.
fn split_pattern(spans: Vec<Span>, pattern: &Regex, make: fn(&str, &str) -> Span) -> Vec<Span> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content();
        let mut last = 0;
        for caps in pattern.captures_iter(text) {
            let (Some(whole), Some(label), Some(target)) = (caps.get(0), caps.get(1), caps.get(2))
            else {
                continue;
            };
            push_plain(&mut out, &text[last..whole.start()]);
            out.push(make(label.as_str(), target.as_str()));
            last = whole.end();
        }
        push_plain(&mut out, &text[last..]);
    }

    out
}

/// Split plain spans on a literal delimiter, alternating plain and `kind`
/// segments starting with plain.
fn split_delimiter(spans: Vec<Span>, delimiter: &'static str, kind: SpanKind) -> Result<Vec<Span>> {
    let mut out = Vec::with_capacity(spans.len());

    for span in spans {
        if !span.is_plain() {
            out.push(span);
            continue;
        }

        let text = span.content();
        if text.matches(delimiter).count() % 2 != 0 {
            trace!("unbalanced {delimiter:?} in {text:?}");
            return Err(Error::MalformedMarkdown { delimiter });
        }

        for (i, segment) in text.split(delimiter).enumerate() {
            if segment.is_empty() {
                continue;
            }
            if i % 2 == 0 {
                out.push(Span::plain(segment));
            } else {
                out.push(Span::styled(kind, segment));
            }
        }
    }

    Ok(out)
}

fn push_plain(out: &mut Vec<Span>, text: &str) {
    if !text.is_empty() {
        out.push(Span::plain(text));
    }
}

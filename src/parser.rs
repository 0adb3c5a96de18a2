use std::sync::OnceLock;

use log::trace;
use regex::Regex;

use crate::block::BlockKind;

const FENCE: &str = "```";

fn blank_line_regex() -> &'static Regex {
    static BLANK_LINE_REGEX: OnceLock<Regex> = OnceLock::new();
    BLANK_LINE_REGEX.get_or_init(|| Regex::new(r"\n{2,}").expect("Invalid blank line regex"))
}

fn heading_regex() -> &'static Regex {
    static HEADING_REGEX: OnceLock<Regex> = OnceLock::new();
    HEADING_REGEX.get_or_init(|| Regex::new(r"^(#{1,6}) (.+)$").expect("Invalid heading regex"))
}

/// Split a document into trimmed, non-empty blocks on runs of blank lines.
///
/// Single newlines inside a block are kept.
pub fn split_blocks(markdown: &str) -> Vec<&str> {
    blank_line_regex()
        .split(markdown)
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classify a block. Checks run in a fixed order and the first match wins,
/// falling back to [`BlockKind::Paragraph`].
pub fn classify(block: &str) -> BlockKind {
    let kind = if let Some(level) = heading_level(block) {
        BlockKind::Heading(level)
    } else if is_code(block) {
        BlockKind::Code
    } else if is_quote(block) {
        BlockKind::Quote
    } else if unordered_bullet(block).is_some() {
        BlockKind::UnorderedList
    } else if is_ordered_list(block) {
        BlockKind::OrderedList
    } else {
        BlockKind::Paragraph
    };
    trace!("classified {block:?} as {kind:?}");
    kind
}

fn heading_level(block: &str) -> Option<u8> {
    let caps = heading_regex().captures(block)?;
    Some(caps.get(1)?.len() as u8)
}

fn is_code(block: &str) -> bool {
    block.len() >= 2 * FENCE.len() && block.starts_with(FENCE) && block.ends_with(FENCE)
}

fn is_quote(block: &str) -> bool {
    block.lines().all(|line| line.starts_with('>'))
}

/// The bullet shared by every line of an unordered list block.
fn unordered_bullet(block: &str) -> Option<char> {
    let bullet = block.chars().next().filter(|c| matches!(c, '*' | '-'))?;
    let prefix = format!("{bullet} ");
    block
        .lines()
        .all(|line| line.starts_with(&prefix))
        .then_some(bullet)
}

fn is_ordered_list(block: &str) -> bool {
    block
        .lines()
        .enumerate()
        .all(|(i, line)| line.starts_with(&ordered_prefix(i)))
}

fn ordered_prefix(index: usize) -> String {
    format!("{}. ", index + 1)
}

/// Text of a heading block after the `#` markers and the following space.
pub fn heading_text(block: &str) -> &str {
    heading_regex()
        .captures(block)
        .and_then(|caps| caps.get(2))
        .map_or(block, |text| text.as_str())
}

/// Literal content between the fences of a code block, trimmed.
pub fn code_content(block: &str) -> &str {
    let inner = block
        .strip_prefix(FENCE)
        .and_then(|rest| rest.strip_suffix(FENCE))
        .unwrap_or(block);
    inner.trim()
}

/// Quote lines with their `>` markers removed, joined by single spaces.
pub fn quote_text(block: &str) -> String {
    block
        .lines()
        .map(|line| {
            let line = line.strip_prefix('>').unwrap_or(line);
            line.strip_prefix(' ').unwrap_or(line)
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Item texts of an unordered list block, bullets removed.
pub fn unordered_items(block: &str) -> Vec<&str> {
    block
        .lines()
        .map(|line| line.get(2..).unwrap_or_default())
        .collect()
}

/// Item texts of an ordered list block, numbers removed.
pub fn ordered_items(block: &str) -> Vec<&str> {
    block
        .lines()
        .enumerate()
        .map(|(i, line)| line.get(ordered_prefix(i).len()..).unwrap_or_default())
        .collect()
}

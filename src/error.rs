use thiserror::Error;

/// Errors that abort the conversion of a single document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// A plain run contains an odd number of an inline delimiter.
    #[error("invalid markdown: missing a closing delimiter ({delimiter})")]
    MalformedMarkdown { delimiter: &'static str },

    #[error("unknown span kind: {0}")]
    UnknownSpanKind(String),

    /// A container node was constructed without a tag.
    #[error("container node requires a tag")]
    MissingTag,

    /// A leaf node was constructed without a text value.
    #[error("leaf node requires a value")]
    MissingValue,

    #[error("no level-1 heading found in document")]
    NoTitleFound,
}

pub type Result<T> = std::result::Result<T, Error>;

//! Rejection reasons for incoming URL arguments.

/// Longest slice of the offending input kept in the error message.
const MAX_ECHOED_INPUT: usize = 200;

/// A raw argument that could not be turned into a routable URL.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid URL {input:?}")]
pub struct InvalidUrl {
    pub input: String,
    #[source]
    pub reason: InvalidUrlReason,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvalidUrlReason {
    #[error("empty URL")]
    Empty,
    #[error("URL too long ({0} bytes)")]
    TooLong(usize),
    #[error("{0}")]
    Parse(url::ParseError),
    #[error("unsupported URL scheme {0:?}")]
    UnsupportedScheme(String),
    /// No host, or nothing left after trimming the trailing dot.
    #[error("missing or empty host")]
    EmptyHost,
}

impl InvalidUrl {
    pub(crate) fn new(input: &str, reason: InvalidUrlReason) -> Self {
        let input = match input.char_indices().nth(MAX_ECHOED_INPUT) {
            Some((cut, _)) => format!("{}...", &input[..cut]),
            None => input.to_string(),
        };
        Self { input, reason }
    }
}

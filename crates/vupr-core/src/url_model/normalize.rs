//! Validation and cleanup of raw URL arguments.

use url::Url;

use super::error::{InvalidUrl, InvalidUrlReason};
use super::host::CanonicalHost;

/// Upper bound on accepted input, in bytes.
pub const MAX_URL_LEN: usize = 64 * 1024;

/// A URL that passed validation.
///
/// `launch_url` is handed to the browser untouched; `host` is only ever used
/// for routing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NormalizedUrl {
    pub launch_url: String,
    pub host: CanonicalHost,
}

/// Validates a raw argument and derives its routing key.
///
/// Surrounding whitespace and one layer of matching `"` or `'` quotes are
/// removed first. Only absolute `http`/`https` URLs with a non-empty host are
/// accepted.
pub fn normalize(raw: &str) -> Result<NormalizedUrl, InvalidUrl> {
    let clean = strip_matching_quotes(raw.trim()).trim();
    if clean.is_empty() {
        return Err(InvalidUrl::new(raw, InvalidUrlReason::Empty));
    }
    if clean.len() > MAX_URL_LEN {
        return Err(InvalidUrl::new(raw, InvalidUrlReason::TooLong(clean.len())));
    }

    let parsed = Url::parse(clean).map_err(|e| InvalidUrl::new(raw, InvalidUrlReason::Parse(e)))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(InvalidUrl::new(
                raw,
                InvalidUrlReason::UnsupportedScheme(other.to_string()),
            ))
        }
    }

    let host = CanonicalHost::from_url(&parsed)
        .ok_or_else(|| InvalidUrl::new(raw, InvalidUrlReason::EmptyHost))?;

    Ok(NormalizedUrl {
        launch_url: clean.to_string(),
        host,
    })
}

fn strip_matching_quotes(s: &str) -> &str {
    for quote in ['"', '\''] {
        if s.len() >= 2 && s.starts_with(quote) && s.ends_with(quote) {
            return &s[1..s.len() - 1];
        }
    }
    s
}

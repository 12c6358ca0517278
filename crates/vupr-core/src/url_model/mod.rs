//! URL modeling for routing.
//!
//! Turns raw command-line arguments into a cleaned URL for the browser plus a
//! canonical host for rule matching.

mod error;
mod host;
mod normalize;

pub use error::{InvalidUrl, InvalidUrlReason};
pub use host::CanonicalHost;
pub use normalize::{normalize, NormalizedUrl, MAX_URL_LEN};

use crate::error::RouterError;

/// Returns the first argument that normalizes successfully.
///
/// The OS may pass extra flags alongside the URL, so unusable arguments are
/// skipped. If none qualify the last rejection is returned; with no arguments
/// at all the result is [`RouterError::NoUrl`].
pub fn normalize_first<I, S>(args: I) -> Result<NormalizedUrl, RouterError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut last_err = None;
    for arg in args {
        match normalize(arg.as_ref()) {
            Ok(url) => return Ok(url),
            Err(err) => {
                tracing::warn!(reason = %err.reason, "skipping argument {:?}", err.input);
                last_err = Some(err);
            }
        }
    }
    Err(last_err.map_or(RouterError::NoUrl, RouterError::InvalidUrl))
}

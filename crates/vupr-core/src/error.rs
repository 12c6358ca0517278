//! Error type for a single routing invocation.

use std::io;
use std::path::PathBuf;

use crate::routing::DuplicateRouteError;
use crate::url_model::InvalidUrl;

/// Every failure is terminal for the current invocation; nothing here is retried.
#[derive(Debug, thiserror::Error)]
pub enum RouterError {
    /// No argument was supplied at all.
    #[error("no URL provided")]
    NoUrl,
    /// None of the supplied arguments is a usable http/https URL.
    #[error(transparent)]
    InvalidUrl(#[from] InvalidUrl),
    /// The configured rules list the same URL more than once.
    #[error(transparent)]
    DuplicateRoute(#[from] DuplicateRouteError),
    /// The profile picker could not be shown or read from.
    #[error("profile selection failed")]
    Picker(#[source] io::Error),
    /// The browser process could not be started.
    #[error("error opening browser {}", executable.display())]
    Launch {
        executable: PathBuf,
        #[source]
        source: io::Error,
    },
}

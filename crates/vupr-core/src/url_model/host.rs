//! Canonical host: the routing key derived from a URL.

use std::fmt;
use url::{Host, Url};

/// Lower-cased host with userinfo, port and a single trailing dot removed.
///
/// Two URLs with equal canonical hosts always route the same way; paths,
/// queries and fragments never take part in matching. IPv6 literals keep
/// their brackets (`[::1]`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CanonicalHost(String);

impl CanonicalHost {
    /// Derives the canonical host of an already parsed URL.
    ///
    /// Returns `None` when the URL has no host or the host is empty after
    /// trimming the trailing dot.
    pub fn from_url(url: &Url) -> Option<Self> {
        let host = match url.host()? {
            Host::Domain(domain) => domain.to_ascii_lowercase(),
            Host::Ipv4(addr) => addr.to_string(),
            Host::Ipv6(addr) => format!("[{addr}]"),
        };
        let host = match host.strip_suffix('.') {
            Some(stripped) => stripped.to_string(),
            None => host,
        };
        if host.is_empty() {
            None
        } else {
            Some(Self(host))
        }
    }

    /// Canonical host of a URL taken from configuration.
    ///
    /// Config entries are not scheme-restricted; anything that parses with a
    /// host contributes a key.
    pub fn from_config_url(raw: &str) -> Option<Self> {
        let parsed = Url::parse(raw.trim()).ok()?;
        Self::from_url(&parsed)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CanonicalHost {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Host to profile matching.

use super::table::RoutingTable;
use crate::url_model::CanonicalHost;

/// Outcome of matching a host against the routing table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteDecision<'a> {
    /// The host is listed under `select_profile`; the user picks the profile.
    AskUser,
    /// A rule claims the host; open it in this profile folder.
    UseProfile(&'a str),
    /// Nothing matched; use the browser's default profile.
    UseDefault,
}

/// Matches a canonical host against the table.
///
/// Precedence: any "always ask" URL with the same host wins, then the first
/// rule (in configured order) with a target on that host, then the default.
/// Only exact host equality counts.
pub fn match_host<'a>(host: &CanonicalHost, table: &'a RoutingTable) -> RouteDecision<'a> {
    if table.trigger_hosts().iter().any(|t| t == host) {
        tracing::debug!(%host, "host requires profile selection");
        return RouteDecision::AskUser;
    }

    for rule in table.rules() {
        if rule.target_hosts().iter().any(|t| t == host) {
            tracing::debug!(%host, rule = %rule.name, folder = %rule.folder, "rule matched");
            return RouteDecision::UseProfile(&rule.folder);
        }
    }

    tracing::debug!(%host, "no rule matched, using default profile");
    RouteDecision::UseDefault
}

//! Routing rules: the table, host matching, and the load-time duplicate check.
//!
//! The table is built once from config, validated once, and then only read.
//! Matching is purely by canonical host; "always ask" URLs take priority over
//! every rule.

mod matcher;
mod table;
mod validate;

pub use matcher::{match_host, RouteDecision};
pub use table::{RoutingRule, RoutingTable};
pub use validate::{validate, DuplicateRouteError, DuplicateUrl};

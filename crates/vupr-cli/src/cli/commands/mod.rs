//! CLI command handlers.

mod route;

pub use route::{run_dry_run, run_route};

//! `vupr <url>...` – route a URL and launch the browser.

use anyhow::Result;
use vupr_core::config::RouterConfig;
use vupr_core::launch::DetachedLauncher;
use vupr_core::picker::{CommandPicker, ProfilePicker, TerminalPicker};
use vupr_core::router::{Outcome, Router};
use vupr_core::routing::RoutingTable;

fn picker_for(cfg: &RouterConfig) -> Box<dyn ProfilePicker> {
    match cfg.picker.as_ref().and_then(CommandPicker::from_config) {
        Some(picker) => Box::new(picker),
        None => Box::new(TerminalPicker),
    }
}

pub fn run_route(cfg: &RouterConfig, table: &RoutingTable, urls: &[String]) -> Result<()> {
    let picker = picker_for(cfg);
    let launcher = DetachedLauncher;
    let router = Router::new(table, &cfg.browser.path, picker.as_ref(), &launcher);

    match router.handle(urls)? {
        Outcome::Launched { folder, url } => {
            tracing::debug!("opened {} in profile {:?}", url, folder);
        }
        Outcome::Cancelled => {}
    }
    Ok(())
}

/// Same decision path as [`run_route`], but prints the command.
pub fn run_dry_run(cfg: &RouterConfig, table: &RoutingTable, urls: &[String]) -> Result<()> {
    let picker = picker_for(cfg);
    let launcher = DetachedLauncher;
    let router = Router::new(table, &cfg.browser.path, picker.as_ref(), &launcher);

    if let Some(plan) = router.plan(urls)? {
        println!("{plan}");
    }
    Ok(())
}

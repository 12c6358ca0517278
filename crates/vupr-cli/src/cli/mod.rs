//! CLI for the vupr URL profile router.

mod commands;

use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;
use vupr_core::config::{self, RouterConfig};
use vupr_core::routing::RoutingTable;

use commands::{run_dry_run, run_route};

/// Opens URLs in the browser profile chosen by the configured rules.
#[derive(Debug, Parser)]
#[command(name = "vupr")]
#[command(about = "vupr: rule-based opening of URLs in browser profiles", long_about = None)]
pub struct Cli {
    /// Config file to use instead of ~/.config/vupr/config.toml.
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Print the browser command instead of launching it.
    #[arg(long)]
    pub dry_run: bool,

    /// URL to open. Extra arguments are tried in order; the first valid http/https URL wins.
    #[arg(value_name = "URL", trailing_var_arg = true, allow_hyphen_values = true)]
    pub urls: Vec<String>,
}

pub fn run_from_args() -> Result<()> {
    Cli::parse().run()
}

impl Cli {
    pub fn run(self) -> Result<()> {
        let cfg = match &self.config {
            Some(path) => config::load_from_path(path)?,
            None => config::load_or_init()?,
        };
        let table = load_table(&cfg)?;

        if self.dry_run {
            run_dry_run(&cfg, &table, &self.urls)
        } else {
            run_route(&cfg, &table, &self.urls)
        }
    }
}

/// Schema check, table construction and the duplicate check, once per process.
fn load_table(cfg: &RouterConfig) -> Result<RoutingTable> {
    cfg.check()?;
    let table = RoutingTable::load(cfg)?;
    tracing::debug!(
        rules = table.rules().len(),
        select_profile = table.select_profile().len(),
        "routing table ready"
    );
    Ok(table)
}

#[cfg(test)]
mod tests;

//! One routing invocation: normalize, match, optionally ask, launch.

use std::fmt;
use std::path::{Path, PathBuf};

use crate::error::RouterError;
use crate::launch::{browser_args, Launcher};
use crate::picker::{PickOutcome, ProfileChoices, ProfilePicker};
use crate::routing::{match_host, RouteDecision, RoutingTable};
use crate::url_model::normalize_first;

/// Result of a successful invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Launched { folder: String, url: String },
    /// The user cancelled profile selection; nothing was launched.
    Cancelled,
}

/// The browser command that would be run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LaunchPlan {
    pub executable: PathBuf,
    pub folder: String,
    pub url: String,
}

impl LaunchPlan {
    pub fn args(&self) -> Vec<String> {
        browser_args(&self.folder, &self.url)
    }
}

impl fmt::Display for LaunchPlan {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.executable.display().to_string())?;
        for arg in self.args() {
            write!(f, " {:?}", arg)?;
        }
        Ok(())
    }
}

/// Routes URL arguments against a validated table.
///
/// Picker and launcher are injected so the routing logic runs without a UI
/// or real processes.
pub struct Router<'a> {
    table: &'a RoutingTable,
    browser: &'a Path,
    picker: &'a dyn ProfilePicker,
    launcher: &'a dyn Launcher,
}

impl<'a> Router<'a> {
    pub fn new(
        table: &'a RoutingTable,
        browser: &'a Path,
        picker: &'a dyn ProfilePicker,
        launcher: &'a dyn Launcher,
    ) -> Self {
        Self {
            table,
            browser,
            picker,
            launcher,
        }
    }

    /// Decides what to launch without launching it.
    ///
    /// Returns `Ok(None)` when the user cancelled profile selection.
    pub fn plan<I, S>(&self, args: I) -> Result<Option<LaunchPlan>, RouterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let target = normalize_first(args)?;
        let default = self.table.default_folder();

        let folder = match match_host(&target.host, self.table) {
            RouteDecision::UseProfile(folder) => folder.to_string(),
            RouteDecision::UseDefault => default.to_string(),
            RouteDecision::AskUser => {
                let choices = ProfileChoices::from_table(self.table);
                let picked = self
                    .picker
                    .choose(&target.launch_url, default, &choices)
                    .map_err(RouterError::Picker)?;
                match picked {
                    PickOutcome::Cancelled => {
                        tracing::info!("profile selection cancelled");
                        return Ok(None);
                    }
                    PickOutcome::Chosen(folder) if folder.is_empty() => default.to_string(),
                    PickOutcome::Chosen(folder) => folder,
                }
            }
        };

        Ok(Some(LaunchPlan {
            executable: self.browser.to_path_buf(),
            folder,
            url: target.launch_url,
        }))
    }

    /// Routes `args` and launches the browser.
    pub fn handle<I, S>(&self, args: I) -> Result<Outcome, RouterError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let Some(plan) = self.plan(args)? else {
            return Ok(Outcome::Cancelled);
        };

        if let Err(source) = self.launcher.launch_detached(&plan.executable, &plan.args()) {
            return Err(RouterError::Launch {
                executable: plan.executable,
                source,
            });
        }

        tracing::info!(folder = %plan.folder, url = %plan.url, "browser launched");
        Ok(Outcome::Launched {
            folder: plan.folder,
            url: plan.url,
        })
    }
}

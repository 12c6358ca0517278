//! Picker backed by an external dmenu-style program (rofi, wofi, dmenu, fzf...).

use std::io::{self, Write};
use std::process::{Command, Stdio};

use super::{truncate_text, PickOutcome, ProfileChoices, ProfilePicker};
use crate::config::PickerConfig;

/// Argument placeholder replaced by the URL, truncated for display.
pub const URL_PLACEHOLDER: &str = "{url}";
/// Environment variable carrying the full URL to the picker program.
pub const URL_ENV: &str = "VUPR_URL";
const URL_DISPLAY_MAX: usize = 80;

/// Writes profile names to the program's stdin, one per line, and reads the
/// chosen name from its stdout.
///
/// Any `{url}` inside an argument is replaced by the URL (cut to 80
/// characters); the untruncated URL is also exported as `VUPR_URL`.
/// A non-zero exit status or empty output means the user cancelled.
#[derive(Debug, Clone)]
pub struct CommandPicker {
    program: String,
    args: Vec<String>,
}

impl CommandPicker {
    pub fn new(program: impl Into<String>, args: Vec<String>) -> Self {
        Self {
            program: program.into(),
            args,
        }
    }

    /// `None` if the configured command is empty.
    pub fn from_config(cfg: &PickerConfig) -> Option<Self> {
        let (program, args) = cfg.command.split_first()?;
        Some(Self::new(program.clone(), args.to_vec()))
    }

    fn args_for(&self, url: &str) -> Vec<String> {
        let shown = truncate_text(url, URL_DISPLAY_MAX);
        self.args
            .iter()
            .map(|a| a.replace(URL_PLACEHOLDER, &shown))
            .collect()
    }
}

impl ProfilePicker for CommandPicker {
    fn choose(
        &self,
        url: &str,
        current_default: &str,
        choices: &ProfileChoices,
    ) -> io::Result<PickOutcome> {
        tracing::debug!(program = %self.program, %url, "running external profile picker");
        let mut child = Command::new(&self.program)
            .args(self.args_for(url))
            .env(URL_ENV, url)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::inherit())
            .spawn()?;

        if let Some(mut stdin) = child.stdin.take() {
            let mut menu = String::new();
            for (name, _) in choices.ordered(current_default) {
                menu.push_str(name);
                menu.push('\n');
            }
            match stdin.write_all(menu.as_bytes()) {
                // The picker may exit without reading its whole menu.
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {}
                other => other?,
            }
        }

        let output = child.wait_with_output()?;
        if !output.status.success() {
            tracing::debug!(status = %output.status, "picker exited unsuccessfully");
            return Ok(PickOutcome::Cancelled);
        }

        let stdout = String::from_utf8_lossy(&output.stdout);
        let picked = stdout.lines().next().unwrap_or("").trim();
        if picked.is_empty() {
            return Ok(PickOutcome::Cancelled);
        }
        if let Some(folder) = choices.folder_for(picked) {
            return Ok(PickOutcome::Chosen(folder.to_string()));
        }
        if choices.contains_folder(picked) {
            return Ok(PickOutcome::Chosen(picked.to_string()));
        }
        tracing::warn!("picker returned unknown profile {picked:?}");
        Ok(PickOutcome::Cancelled)
    }
}

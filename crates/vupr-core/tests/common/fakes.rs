//! In-memory picker and launcher for routing tests.
//!
//! The launcher records every call instead of spawning; the picker replays a
//! fixed answer and records what it was shown.

use std::cell::RefCell;
use std::io;
use std::path::{Path, PathBuf};

use vupr_core::launch::Launcher;
use vupr_core::picker::{PickOutcome, ProfileChoices, ProfilePicker};

#[derive(Debug, Default)]
pub struct RecordingLauncher {
    pub calls: RefCell<Vec<(PathBuf, Vec<String>)>>,
    pub fail: bool,
}

impl RecordingLauncher {
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }
}

impl Launcher for RecordingLauncher {
    fn launch_detached(&self, executable: &Path, args: &[String]) -> io::Result<()> {
        if self.fail {
            return Err(io::Error::new(io::ErrorKind::NotFound, "no such browser"));
        }
        self.calls
            .borrow_mut()
            .push((executable.to_path_buf(), args.to_vec()));
        Ok(())
    }
}

#[derive(Debug)]
pub struct ScriptedPicker {
    answer: PickOutcome,
    /// `(url, current_default, ordered names)` for each call.
    pub shown: RefCell<Vec<(String, String, Vec<String>)>>,
}

impl ScriptedPicker {
    pub fn answering(answer: PickOutcome) -> Self {
        Self {
            answer,
            shown: RefCell::new(Vec::new()),
        }
    }
}

impl ProfilePicker for ScriptedPicker {
    fn choose(
        &self,
        url: &str,
        current_default: &str,
        choices: &ProfileChoices,
    ) -> io::Result<PickOutcome> {
        let names = choices
            .ordered(current_default)
            .into_iter()
            .map(|(name, _)| name.to_string())
            .collect();
        self.shown
            .borrow_mut()
            .push((url.to_string(), current_default.to_string(), names));
        Ok(self.answer.clone())
    }
}

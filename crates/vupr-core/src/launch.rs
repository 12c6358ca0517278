//! Detached browser launch.

use std::io;
use std::path::Path;
use std::process::{Command, Stdio};

/// Browser flag selecting the profile directory.
pub const PROFILE_FLAG: &str = "--profile-directory";

/// Argument list for opening `url` in profile `folder`, in that order.
pub fn browser_args(folder: &str, url: &str) -> Vec<String> {
    vec![format!("{PROFILE_FLAG}={folder}"), url.to_string()]
}

/// Starts an external program without waiting for it.
pub trait Launcher {
    fn launch_detached(&self, executable: &Path, args: &[String]) -> io::Result<()>;
}

/// Spawns the program in its own process group with stdio on the null device.
///
/// The child is never waited on; its lifetime is independent of ours.
#[derive(Debug, Default, Clone, Copy)]
pub struct DetachedLauncher;

impl Launcher for DetachedLauncher {
    fn launch_detached(&self, executable: &Path, args: &[String]) -> io::Result<()> {
        let mut cmd = Command::new(executable);
        cmd.args(args)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null());
        detach(&mut cmd);

        let child = cmd.spawn()?;
        tracing::debug!(pid = child.id(), "spawned {}", executable.display());
        Ok(())
    }
}

#[cfg(unix)]
fn detach(cmd: &mut Command) {
    use std::os::unix::process::CommandExt;
    cmd.process_group(0);
}

#[cfg(windows)]
fn detach(cmd: &mut Command) {
    use std::os::windows::process::CommandExt;
    const DETACHED_PROCESS: u32 = 0x0000_0008;
    const CREATE_NEW_PROCESS_GROUP: u32 = 0x0000_0200;
    cmd.creation_flags(CREATE_NEW_PROCESS_GROUP | DETACHED_PROCESS);
}

#[cfg(not(any(unix, windows)))]
fn detach(_cmd: &mut Command) {}

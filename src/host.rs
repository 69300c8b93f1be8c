//! Process and viewer collaborator.
//!
//! The builder never touches `std::process` directly. Everything it needs
//! from the operating system goes through [`Host`], so tests can substitute a
//! recording implementation and inspect the generated markup without a LaTeX
//! installation.

use std::io;
use std::path::Path;
use std::process::Command;

/// Operating-system services used when rendering.
pub trait Host {
    /// Run `program` with `args`, block until it exits, and return its exit
    /// code. A process terminated without an exit code reports `-1`.
    fn run(&self, program: &Path, args: &[String]) -> io::Result<i32>;

    /// Ask the desktop environment to open `path` in its default viewer.
    fn open_for_viewing(&self, path: &Path) -> io::Result<()>;
}

/// [`Host`] backed by real child processes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemHost;

impl SystemHost {
    /// Create a new system host.
    pub fn new() -> Self {
        Self
    }
}

impl Host for SystemHost {
    fn run(&self, program: &Path, args: &[String]) -> io::Result<i32> {
        log::debug!("Running {} {}", program.display(), args.join(" "));
        let status = Command::new(program).args(args).status()?;
        Ok(status.code().unwrap_or(-1))
    }

    fn open_for_viewing(&self, path: &Path) -> io::Result<()> {
        viewer_command(path).spawn()?;
        Ok(())
    }
}

#[cfg(target_os = "windows")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("cmd");
    cmd.args(["/C", "start", ""]).arg(path);
    cmd
}

#[cfg(target_os = "macos")]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("open");
    cmd.arg(path);
    cmd
}

#[cfg(not(any(target_os = "windows", target_os = "macos")))]
fn viewer_command(path: &Path) -> Command {
    let mut cmd = Command::new("xdg-open");
    cmd.arg(path);
    cmd
}

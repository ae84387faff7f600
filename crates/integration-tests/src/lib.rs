//! Shared fixtures for end-to-end smoke checks: throwaway greeting programs

use std::path::PathBuf;
use tempfile::TempDir;

/// A greeting program living in its own temp directory
///
/// The directory (and the program) is removed on drop.
pub struct GreetingProgram {
    _dir: TempDir,
    path: PathBuf,
}

impl GreetingProgram {
    /// Write an executable `/bin/sh` script that prints `stdout` verbatim
    #[cfg(unix)]
    pub fn printing(stdout: &str) -> std::io::Result<Self> {
        Self::script(&format!("printf '%s' '{}'", stdout.replace('\'', r"'\''")))
    }

    /// Write an executable `/bin/sh` script with the given body
    #[cfg(unix)]
    pub fn script(body: &str) -> std::io::Result<Self> {
        use std::os::unix::fs::PermissionsExt;

        let dir = TempDir::new()?;
        let path = dir.path().join("greeting");
        std::fs::write(&path, format!("#!/bin/sh\n{}\n", body))?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;

        Ok(Self { _dir: dir, path })
    }

    pub fn path(&self) -> &std::path::Path {
        &self.path
    }
}

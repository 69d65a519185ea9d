//! External process invocation shared by all tool adapters.

use std::path::PathBuf;
use std::process::Command;

use log::debug;

use crate::error::{Error, Result};

/// Runs a prepared command, treating a spawn failure or a non-zero exit
/// status as an [`Error::ExternalTool`] for `tool`.
pub fn run(
    tool: &str,
    command: &mut Command,
) -> Result<()> {
    debug!("running {}: {:?}", tool, command);
    let output = command
        .output()
        .map_err(|e| Error::tool(tool, format!("failed to spawn: {}", e)))?;

    if !output.status.success() {
        let stderr = String::from_utf8_lossy(&output.stderr);
        return Err(Error::tool(
            tool,
            format!("exit status {}: {}", output.status, stderr.trim()),
        ));
    }
    Ok(())
}

/// Looks an executable up in `PATH`.
pub fn find_in_path(binary: &str) -> Option<PathBuf> {
    let paths = std::env::var_os("PATH")?;
    std::env::split_paths(&paths)
        .map(|dir| dir.join(binary))
        .find(|candidate| candidate.is_file())
}

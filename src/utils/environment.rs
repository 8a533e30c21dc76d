use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Get the Claude configuration directory
///
/// Honors the `CLAUDE_CONFIG_DIR` override the external tool itself supports,
/// falling back to `~/.claude`.
pub fn claude_dir() -> Result<PathBuf> {
    if let Some(dir) = env::var_os("CLAUDE_CONFIG_DIR") {
        return Ok(PathBuf::from(dir));
    }
    let home = dirs::home_dir().context("home directory not found")?;
    Ok(home.join(".claude"))
}

/// Get the projects root holding one log directory per project
pub fn projects_root() -> Result<PathBuf> {
    Ok(claude_dir()?.join("projects"))
}

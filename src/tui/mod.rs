// TUI module for the interactive conversation browser
mod app;
mod events;
mod layout;
mod rendering;
mod terminal;
mod timestamps;

use std::path::Path;

use anyhow::Result;
pub use app::App;
use terminal::TerminalGuard;

use crate::config::Config;
use crate::resume::ResumeRequest;

/// Run the interactive browser
///
/// Returns the conversation the user chose to resume, if any. The terminal
/// is restored before returning so the caller can print or spawn freely.
pub fn run_interactive(
    root: &Path,
    dir_filter: Option<&Path>,
    config: &Config,
) -> Result<Option<ResumeRequest>> {
    let mut app = App::new(
        root.to_path_buf(),
        dir_filter.map(Path::to_path_buf),
        config.keybindings.clone(),
    )?;

    let mut guard = TerminalGuard::new()?;
    let outcome = app.run(guard.terminal_mut());
    guard.restore()?;
    outcome
}

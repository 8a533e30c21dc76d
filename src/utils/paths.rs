use std::env;
use std::path::{MAIN_SEPARATOR, Path};

/// Maps a file system path to Claude's log directory naming convention
///
/// Every path separator and literal dot becomes a hyphen, so the directory
/// name can be compared against `~/.claude/projects/` entries without any
/// file system access.
///
/// # Examples
///
/// ```
/// use std::path::Path;
/// use cc_session_browser::to_log_dir_name;
///
/// assert_eq!(to_log_dir_name(Path::new("/home/user/app")), "-home-user-app");
/// ```
pub fn to_log_dir_name(path: &Path) -> String {
    path.to_string_lossy()
        .chars()
        .map(|c| match c {
            '/' | '\\' | '.' => '-',
            other => other,
        })
        .collect()
}

/// Derives a display name for a project from its log directory name
///
/// Strips a single leading hyphen (the encoded root separator) and turns the
/// remaining hyphens back into path separators. Lossy by construction: the
/// encoding does not distinguish hyphens from separators, so this is a
/// display value, not a usable path.
///
/// # Examples
///
/// ```
/// use cc_session_browser::project_name_from_dir;
///
/// assert_eq!(project_name_from_dir("-home-user-app"), "home/user/app");
/// ```
pub fn project_name_from_dir(dir_name: &str) -> String {
    dir_name
        .strip_prefix('-')
        .unwrap_or(dir_name)
        .chars()
        .map(|c| if c == '-' { MAIN_SEPARATOR } else { c })
        .collect()
}

/// Formats a path with ~ substitution for the home directory
pub fn format_path_with_tilde(path: &str) -> String {
    format_path_with_tilde_internal(path, None)
}

/// Internal helper for path formatting with optional home override (for testing)
pub(crate) fn format_path_with_tilde_internal(path: &str, home_override: Option<&str>) -> String {
    let home_from_env = env::var("HOME").ok();
    let home = home_override.or(home_from_env.as_deref());

    if let Some(home) = home
        && !home.is_empty()
        && path.starts_with(home)
    {
        return path.replacen(home, "~", 1);
    }

    path.to_string()
}

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use uuid::Uuid;

use crate::models::LogFileDescriptor;

/// Enumerates candidate session logs under the projects root
///
/// Visits first-level project directories only. When `filter_dir_name` is
/// given, the single matching directory is joined directly instead of
/// scanning, so the filter costs nothing regardless of corpus size. Files
/// qualify when their name is a UUID stem with the `.jsonl` extension; each
/// is stat'ed for its mtime and the result comes back sorted newest first:
/// recency ordering without opening a single file.
///
/// # Errors
///
/// A missing root is not an error (empty result). A root that exists but
/// cannot be read is. Unreadable project directories and unstattable files
/// are warned about and skipped.
pub fn list_candidates(
    root: &Path,
    filter_dir_name: Option<&str>,
) -> Result<Vec<LogFileDescriptor>> {
    if !root.exists() {
        return Ok(Vec::new());
    }

    let mut candidates = Vec::new();

    match filter_dir_name {
        Some(name) => {
            let dir = root.join(name);
            if dir.is_dir() {
                collect_session_files(&dir, name, &mut candidates);
            }
        }
        None => {
            let entries = fs::read_dir(root)
                .with_context(|| format!("Failed to read projects root: {}", root.display()))?;
            for entry in entries {
                let entry = entry.context("Failed to read projects root entry")?;
                let path = entry.path();
                if !path.is_dir() {
                    continue;
                }
                let Some(name) = path.file_name().and_then(|n| n.to_str()).map(str::to_string)
                else {
                    continue;
                };
                collect_session_files(&path, &name, &mut candidates);
            }
        }
    }

    candidates.sort_by(|a, b| b.modified.cmp(&a.modified));
    Ok(candidates)
}

fn collect_session_files(dir: &Path, project_dir_name: &str, out: &mut Vec<LogFileDescriptor>) {
    let entries = match fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(error) => {
            eprintln!("Warning: failed to read project directory {}: {}", dir.display(), error);
            return;
        }
    };

    for entry in entries.flatten() {
        let path = entry.path();
        if !is_session_log(&path) {
            continue;
        }
        let modified = match entry.metadata().and_then(|m| m.modified()) {
            Ok(modified) => modified,
            Err(error) => {
                eprintln!("Warning: failed to stat {}: {}", path.display(), error);
                continue;
            }
        };
        out.push(LogFileDescriptor {
            path,
            project_dir_name: project_dir_name.to_string(),
            modified,
        });
    }
}

/// A session log is `<uuid>.jsonl`; anything else in a project directory is
/// the external tool's bookkeeping.
fn is_session_log(path: &Path) -> bool {
    if path.extension().and_then(|ext| ext.to_str()) != Some("jsonl") {
        return false;
    }
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| Uuid::parse_str(stem).is_ok())
}

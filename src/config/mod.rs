//! Key-binding configuration.
//!
//! Defaults live in code; a TOML file at
//! `$XDG_CONFIG_HOME/cc-session-browser/config.toml` may override any subset
//! of actions. Field-level serde defaults give per-action merging for free,
//! so a file that only rebinds `quit` keeps every other default. The TUI only
//! ever sees the fully-resolved mapping; nothing below this module knows a
//! config file exists.

use std::env;
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub keybindings: KeyBindings,
}

/// Key specs per action, e.g. `["q"]` or `["d", "ctrl+d", "pagedown"]`.
/// Unknown action names are rejected so typos surface instead of silently
/// leaving the default binding in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct KeyBindings {
    pub quit: Vec<String>,
    pub select_previous: Vec<String>,
    pub select_next: Vec<String>,
    pub confirm: Vec<String>,
    pub copy_session_id: Vec<String>,
    pub scroll_up: Vec<String>,
    pub scroll_down: Vec<String>,
    pub scroll_page_up: Vec<String>,
    pub scroll_page_down: Vec<String>,
    pub scroll_top: Vec<String>,
    pub scroll_bottom: Vec<String>,
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self {
            quit: vec!["q".into()],
            select_previous: vec!["up".into()],
            select_next: vec!["down".into()],
            confirm: vec!["enter".into()],
            copy_session_id: vec!["c".into()],
            scroll_up: vec!["k".into(), "ctrl+p".into()],
            scroll_down: vec!["j".into(), "ctrl+n".into()],
            scroll_page_up: vec!["u".into(), "ctrl+u".into(), "pageup".into()],
            scroll_page_down: vec!["d".into(), "ctrl+d".into(), "pagedown".into()],
            scroll_top: vec!["g".into()],
            scroll_bottom: vec!["G".into()],
        }
    }
}

impl KeyBindings {
    /// One-line shortcut help for the status bar, derived from the resolved
    /// bindings so rebound keys show up correctly.
    pub fn help_text(&self) -> String {
        let groups = [
            format!("Select: {}/{}", keys_label(&self.select_previous), keys_label(&self.select_next)),
            format!("Scroll: {}/{}", keys_label(&self.scroll_up), keys_label(&self.scroll_down)),
            format!("Resume: {}", keys_label(&self.confirm)),
            format!("Copy ID: {}", keys_label(&self.copy_session_id)),
            format!("Quit: {}", keys_label(&self.quit)),
        ];
        groups.join(" | ")
    }
}

fn keys_label(keys: &[String]) -> String {
    if keys.is_empty() {
        return "unbound".to_string();
    }
    keys.iter().map(|k| key_label(k)).collect::<Vec<_>>().join("/")
}

fn key_label(key: &str) -> String {
    match key {
        "up" => "↑".to_string(),
        "down" => "↓".to_string(),
        "enter" | "return" => "Enter".to_string(),
        "pageup" => "PgUp".to_string(),
        "pagedown" => "PgDn".to_string(),
        spec if spec.contains('+') => spec
            .split('+')
            .map(|part| match part {
                "ctrl" => "Ctrl".to_string(),
                "shift" => "Shift".to_string(),
                "alt" => "Alt".to_string(),
                other => other.to_string(),
            })
            .collect::<Vec<_>>()
            .join("+"),
        other => other.to_string(),
    }
}

/// Path of the user config file: `$XDG_CONFIG_HOME/cc-session-browser/
/// config.toml`, defaulting XDG to `~/.config`.
pub fn config_path() -> Result<PathBuf> {
    let base = match env::var_os("XDG_CONFIG_HOME") {
        Some(dir) if !dir.is_empty() => PathBuf::from(dir),
        _ => dirs::home_dir().context("home directory not found")?.join(".config"),
    };
    Ok(base.join("cc-session-browser").join("config.toml"))
}

/// Loads the resolved configuration
///
/// A missing file yields the defaults. A file that exists but cannot be read
/// or parsed is reported as a warning and also yields the defaults, so a typo
/// in the config must not make the browser unusable.
pub fn load_config() -> Config {
    let path = match config_path() {
        Ok(path) => path,
        Err(_) => return Config::default(),
    };
    if !path.exists() {
        return Config::default();
    }
    match fs::read_to_string(&path) {
        Ok(content) => match toml::from_str(&content) {
            Ok(config) => config,
            Err(error) => {
                eprintln!("Warning: invalid config {}: {}", path.display(), error);
                Config::default()
            }
        },
        Err(error) => {
            eprintln!("Warning: failed to read config {}: {}", path.display(), error);
            Config::default()
        }
    }
}

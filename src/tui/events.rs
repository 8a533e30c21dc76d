use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::config::KeyBindings;

/// User actions, resolved from keyboard events through the key bindings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Quit,
    SelectPrevious,
    SelectNext,
    Confirm,
    CopySessionId,
    ScrollUp,
    ScrollDown,
    ScrollPageUp,
    ScrollPageDown,
    ScrollTop,
    ScrollBottom,
    None,
}

/// Poll for keyboard events and resolve them against the bindings
pub fn poll_event(timeout: Duration, bindings: &KeyBindings) -> anyhow::Result<Action> {
    if event::poll(timeout)?
        && let Event::Key(key) = event::read()?
        && key.kind != KeyEventKind::Release
    {
        return Ok(key_to_action(key, bindings));
    }
    Ok(Action::None)
}

pub(crate) fn key_to_action(key: KeyEvent, bindings: &KeyBindings) -> Action {
    // Ctrl+C always quits, whatever the config says.
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return Action::Quit;
    }

    let table: [(&[String], Action); 11] = [
        (&bindings.quit, Action::Quit),
        (&bindings.select_previous, Action::SelectPrevious),
        (&bindings.select_next, Action::SelectNext),
        (&bindings.confirm, Action::Confirm),
        (&bindings.copy_session_id, Action::CopySessionId),
        (&bindings.scroll_up, Action::ScrollUp),
        (&bindings.scroll_down, Action::ScrollDown),
        (&bindings.scroll_page_up, Action::ScrollPageUp),
        (&bindings.scroll_page_down, Action::ScrollPageDown),
        (&bindings.scroll_top, Action::ScrollTop),
        (&bindings.scroll_bottom, Action::ScrollBottom),
    ];

    for (keys, action) in table {
        if keys.iter().any(|spec| matches_spec(key, spec)) {
            return action;
        }
    }
    Action::None
}

fn matches_spec(key: KeyEvent, spec: &str) -> bool {
    let Some((code, mods)) = parse_key_spec(spec) else {
        return false;
    };
    if key.code != code {
        return false;
    }
    match code {
        // Character keys already encode case; SHIFT is incidental there, so
        // only control/alt have to agree.
        KeyCode::Char(_) => {
            let relevant = KeyModifiers::CONTROL | KeyModifiers::ALT;
            key.modifiers.intersection(relevant) == mods.intersection(relevant)
        }
        _ => mods.is_empty() || key.modifiers.contains(mods),
    }
}

/// Parses a key spec like `"q"`, `"G"`, `"ctrl+d"` or `"pageup"`.
pub(crate) fn parse_key_spec(spec: &str) -> Option<(KeyCode, KeyModifiers)> {
    let mut parts: Vec<&str> = spec.split('+').collect();
    let last = parts.pop()?;
    if last.is_empty() {
        return None;
    }

    let mut mods = KeyModifiers::NONE;
    for part in parts {
        match part.to_ascii_lowercase().as_str() {
            "ctrl" | "control" => mods |= KeyModifiers::CONTROL,
            "shift" => mods |= KeyModifiers::SHIFT,
            "alt" | "opt" => mods |= KeyModifiers::ALT,
            _ => return None,
        }
    }

    let code = match last.to_ascii_lowercase().as_str() {
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        _ => {
            let mut chars = last.chars();
            let c = chars.next()?;
            if chars.next().is_some() {
                return None;
            }
            if mods.contains(KeyModifiers::SHIFT) {
                KeyCode::Char(c.to_ascii_uppercase())
            } else {
                KeyCode::Char(c)
            }
        }
    };

    Some((code, mods))
}

//! Key bindings loaded from configuration
//!
//! Keys are written in angle-bracket notation (`<q>`, `<ctrl-c>`, `<shift-r>`,
//! `<left>`) and map to [`Action`] names.

use std::collections::HashMap;
use std::ops::{Deref, DerefMut};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{de::Deserializer, Deserialize, Serialize};
use strum::{Display, EnumString};

/// User-facing actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString)]
pub enum Action {
    Quit,
    PreviousSlide,
    NextSlide,
    SelectLeft,
    SelectRight,
    SelectUp,
    SelectDown,
    NextPage,
    PreviousPage,
    CycleCategory,
    CycleSort,
    ToggleOrder,
    EditSearch,
    ApplyFilters,
    ResetFilters,
    Back,
    Reload,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct KeyBindings(pub HashMap<KeyEvent, Action>);

impl KeyBindings {
    /// Looks up the action for an incoming key event
    pub fn action_for(&self, key: &KeyEvent) -> Option<Action> {
        self.0.get(&normalize(key.code, key.modifiers)).copied()
    }
}

impl Deref for KeyBindings {
    type Target = HashMap<KeyEvent, Action>;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl DerefMut for KeyBindings {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.0
    }
}

impl<'de> Deserialize<'de> for KeyBindings {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let parsed_map = HashMap::<String, Action>::deserialize(deserializer)?;

        let keybindings = parsed_map
            .into_iter()
            .map(|(key_str, action)| {
                parse_key_event(&key_str)
                    .map(|key| (key, action))
                    .map_err(serde::de::Error::custom)
            })
            .collect::<Result<_, _>>()?;

        Ok(KeyBindings(keybindings))
    }
}

/// Shifted letters arrive as uppercase chars; the SHIFT flag is dropped so that
/// `<shift-r>` and a typed `R` compare equal.
fn normalize(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
    match code {
        KeyCode::Char(c) if modifiers.contains(KeyModifiers::SHIFT) => KeyEvent::new(
            KeyCode::Char(c.to_ascii_uppercase()),
            modifiers - KeyModifiers::SHIFT,
        ),
        _ => KeyEvent::new(code, modifiers),
    }
}

pub fn parse_key_event(raw: &str) -> Result<KeyEvent, String> {
    let inner = raw
        .strip_prefix('<')
        .and_then(|s| s.strip_suffix('>'))
        .ok_or_else(|| format!("Key must be wrapped in <>: {raw}"))?;
    if inner.is_empty() {
        return Err(format!("Empty key: {raw}"));
    }

    let lowered = inner.to_ascii_lowercase();
    let mut modifiers = KeyModifiers::NONE;
    let mut rest = lowered.as_str();
    loop {
        if let Some(r) = rest.strip_prefix("ctrl-") {
            modifiers.insert(KeyModifiers::CONTROL);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("alt-") {
            modifiers.insert(KeyModifiers::ALT);
            rest = r;
        } else if let Some(r) = rest.strip_prefix("shift-") {
            modifiers.insert(KeyModifiers::SHIFT);
            rest = r;
        } else {
            break;
        }
    }

    let code = match rest {
        "esc" => KeyCode::Esc,
        "enter" => KeyCode::Enter,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "backspace" => KeyCode::Backspace,
        "delete" => KeyCode::Delete,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        c if c.chars().count() == 1 => {
            // Keep the original case of single characters such as `<R>`
            let original = &inner[inner.len() - c.len()..];
            KeyCode::Char(original.chars().next().unwrap_or(' '))
        }
        other => return Err(format!("Unable to parse key: {other}")),
    };

    Ok(normalize(code, modifiers))
}

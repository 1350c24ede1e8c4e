//! Key mapping and action dispatch system for jekyll-publisher
//!
//! Turns crossterm key events into [Action]s using the bindings from the config.
//! The confirmation modal has its own fixed keys, see [modal_action].

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;

/// Represents any action in the dashboard: browser navigation, dashboard or system.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Nav(NavAction),
    Dash(DashAction),
    System(SystemAction),
}

/// Browser navigation (move, select)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum NavAction {
    GoUp,
    GoDown,
    Select,
}

/// Dashboard actions (focus ring, publish)
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum DashAction {
    CycleFocus,
    Publish,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SystemAction {
    Quit,
}

/// What a key does while the publish modal is open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ModalAction {
    /// Move focus to the other button.
    Toggle,
    /// Press the focused button.
    Activate,
    Publish,
    Cancel,
}

/// Key + modifiers as used in keybind/keymap
#[derive(Hash, Eq, PartialEq, Copy, Clone, Debug)]
pub struct Key {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

/// Stores the mapping from Key to action, which is built in the config
pub struct Keymap {
    map: HashMap<Key, Action>,
}

impl Keymap {
    /// Builds the keymap from the config
    #[rustfmt::skip]
    pub fn from_config(config: &crate::config::Config) -> Self {
        let mut map = HashMap::new();
        let keys = config.keys();

        macro_rules! bind {
            ($keys:expr, $action:expr) => {
                bind($keys, $action, &mut map);
            };
        }

        use NavAction as N;
        use DashAction as D;
        use SystemAction as S;

        bind!(keys.go_up(),         Action::Nav(N::GoUp));
        bind!(keys.go_down(),       Action::Nav(N::GoDown));
        bind!(keys.select(),        Action::Nav(N::Select));

        bind!(keys.cycle_focus(),   Action::Dash(D::CycleFocus));
        bind!(keys.publish(),       Action::Dash(D::Publish));

        bind!(keys.quit(),          Action::System(S::Quit));

        Keymap { map }
    }

    /// Looks up the action for a given key event
    pub fn lookup(&self, key: KeyEvent) -> Option<Action> {
        let k = Key {
            code: key.code,
            modifiers: key.modifiers,
        };

        if let Some(action) = self.map.get(&k).copied() {
            return Some(action);
        }

        if matches!(key.code, KeyCode::Char(_)) && key.modifiers.contains(KeyModifiers::SHIFT) {
            let k2 = Key {
                code: key.code,
                modifiers: key.modifiers - KeyModifiers::SHIFT,
            };
            return self.map.get(&k2).copied();
        }
        None
    }
}

/// Fixed keys of the publish modal.
pub fn modal_action(key: &KeyEvent) -> Option<ModalAction> {
    match key.code {
        KeyCode::Left | KeyCode::Right | KeyCode::Tab | KeyCode::BackTab => {
            Some(ModalAction::Toggle)
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(ModalAction::Activate),
        KeyCode::Char('y') | KeyCode::Char('Y') => Some(ModalAction::Publish),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => Some(ModalAction::Cancel),
        _ => None,
    }
}

fn parse_key(s: &str) -> Option<Key> {
    let mut modifiers = KeyModifiers::NONE;
    let mut code: Option<KeyCode> = None;

    let is_bracketed = s.starts_with('<') && s.ends_with('>');
    let mut input = s.trim_start_matches('<').trim_end_matches('>').to_string();

    if is_bracketed && input.contains('-') {
        let parts: Vec<&str> = input.split('-').collect();

        for &prefix in parts.iter().take(parts.len().saturating_sub(1)) {
            match prefix.to_lowercase().as_str() {
                "c" | "ctrl" => modifiers |= KeyModifiers::CONTROL,
                "a" | "m" | "alt" => modifiers |= KeyModifiers::ALT,
                "s" | "shift" => modifiers |= KeyModifiers::SHIFT,
                _ => return None,
            }
        }
        input = parts.last()?.to_string();
    }

    let normalized = input.replace('-', "+");
    for part in normalized.split('+') {
        let p_low = part.to_lowercase();
        match p_low.as_str() {
            "ctrl" | "control" => modifiers |= KeyModifiers::CONTROL,
            "alt" | "meta" => modifiers |= KeyModifiers::ALT,
            "shift" => modifiers |= KeyModifiers::SHIFT,

            "up" => code = Some(KeyCode::Up),
            "down" => code = Some(KeyCode::Down),
            "left" => code = Some(KeyCode::Left),
            "right" => code = Some(KeyCode::Right),
            "enter" => code = Some(KeyCode::Enter),
            "esc" => code = Some(KeyCode::Esc),
            "backspace" | "back" => code = Some(KeyCode::Backspace),
            "tab" => code = Some(KeyCode::Tab),
            "space" | "spc" => code = Some(KeyCode::Char(' ')),

            _ => {
                if part.chars().count() == 1 {
                    let mut c = part.chars().next()?;
                    if modifiers.contains(KeyModifiers::SHIFT) {
                        c = c.to_ascii_uppercase();
                    }
                    code = Some(KeyCode::Char(c));
                } else if p_low.starts_with('f')
                    && p_low.len() > 1
                    && p_low[1..].chars().all(|c| c.is_ascii_digit())
                {
                    let n = p_low[1..].parse().ok()?;
                    code = Some(KeyCode::F(n));
                } else if part.is_empty() {
                    continue;
                } else {
                    return None;
                }
            }
        }
    }

    Some(Key {
        code: code?,
        modifiers,
    })
}

fn bind(key_list: &[String], action: Action, map: &mut HashMap<Key, Action>) {
    for k in key_list {
        if let Some(key) = parse_key(k) {
            map.insert(key, action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn parse_key_handles_names_and_modifiers() {
        assert_eq!(
            parse_key("tab"),
            Some(Key {
                code: KeyCode::Tab,
                modifiers: KeyModifiers::NONE
            })
        );
        assert_eq!(
            parse_key("<c-p>"),
            Some(Key {
                code: KeyCode::Char('p'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(
            parse_key("ctrl+q"),
            Some(Key {
                code: KeyCode::Char('q'),
                modifiers: KeyModifiers::CONTROL
            })
        );
        assert_eq!(parse_key("<x-p>"), None);
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn default_bindings() {
        let keymap = Keymap::from_config(&Config::default());
        assert_eq!(
            keymap.lookup(press(KeyCode::Tab)),
            Some(Action::Dash(DashAction::CycleFocus))
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Char('p'))),
            Some(Action::Dash(DashAction::Publish))
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Enter)),
            Some(Action::Nav(NavAction::Select))
        );
        assert_eq!(
            keymap.lookup(press(KeyCode::Down)),
            Some(Action::Nav(NavAction::GoDown))
        );
        assert_eq!(keymap.lookup(press(KeyCode::Char('x'))), None);
    }

    #[test]
    fn modal_keys_are_fixed() {
        assert_eq!(modal_action(&press(KeyCode::Tab)), Some(ModalAction::Toggle));
        assert_eq!(modal_action(&press(KeyCode::Enter)), Some(ModalAction::Activate));
        assert_eq!(modal_action(&press(KeyCode::Char('y'))), Some(ModalAction::Publish));
        assert_eq!(modal_action(&press(KeyCode::Esc)), Some(ModalAction::Cancel));
        assert_eq!(modal_action(&press(KeyCode::Char('p'))), None);
    }
}

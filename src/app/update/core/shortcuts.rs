use super::super::super::messages::Message;
use super::super::super::state::App;
use crate::config::ViewMode;
use iced::keyboard::{Key, Modifiers, key};

/// A configured shortcut such as `g` or `ctrl+shift+t`.
///
/// Modifiers must match exactly: `g` does not fire on `ctrl+g`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(super) struct KeyBinding {
    key: String,
    modifiers: Modifiers,
}

impl KeyBinding {
    /// Bindings are already trimmed and lowercased by config clamping.
    pub(super) fn parse(raw: &str) -> Option<Self> {
        let mut modifiers = Modifiers::empty();
        let mut key = None;
        for part in raw.split('+').map(str::trim).filter(|part| !part.is_empty()) {
            match part {
                "ctrl" | "control" => modifiers |= Modifiers::CTRL,
                "alt" => modifiers |= Modifiers::ALT,
                "shift" => modifiers |= Modifiers::SHIFT,
                "logo" | "meta" | "super" | "cmd" => modifiers |= Modifiers::LOGO,
                other if key.is_none() => key = Some(other.to_string()),
                _ => return None,
            }
        }
        key.map(|key| KeyBinding { key, modifiers })
    }

    pub(super) fn matches(&self, pressed: &str, modifiers: Modifiers) -> bool {
        self.key == pressed && self.modifiers == modifiers
    }
}

impl App {
    pub(super) fn shortcut_message_for_key(
        &self,
        key: Key,
        modifiers: Modifiers,
    ) -> Option<Message> {
        let pressed = match key.as_ref() {
            Key::Named(key::Named::Escape) => {
                return self.detail.visible.then_some(Message::CloseDetail);
            }
            Key::Character(ch) => ch.to_ascii_lowercase(),
            _ => return None,
        };

        let bound = |raw: &str| {
            KeyBinding::parse(raw).is_some_and(|binding| binding.matches(&pressed, modifiers))
        };
        if bound(&self.config.key_list_view) {
            Some(Message::SetViewMode(ViewMode::List))
        } else if bound(&self.config.key_grid_view) {
            Some(Message::SetViewMode(ViewMode::Grid))
        } else if bound(&self.config.key_toggle_theme) {
            Some(Message::ToggleTheme)
        } else {
            None
        }
    }
}

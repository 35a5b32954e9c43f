use egui::{Key, Modifiers};

/// Kortkommandon i appen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortcutAction {
    FocusSearch,
    NewWord,
    ToggleDarkMode,
    CloseModal,
}

/// En tangent med eller utan Ctrl/Cmd
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shortcut {
    pub key: Key,
    pub command: bool,
}

impl Shortcut {
    pub const fn new(key: Key, command: bool) -> Self {
        Self { key, command }
    }

    pub fn matches(&self, modifiers: &Modifiers) -> bool {
        modifiers.command == self.command && !modifiers.alt && !modifiers.shift
    }

    pub fn display(&self) -> String {
        if self.command {
            format!("Ctrl+{}", self.key.name())
        } else {
            self.key.name().to_string()
        }
    }
}

const SHORTCUTS: &[(ShortcutAction, Shortcut)] = &[
    (ShortcutAction::FocusSearch, Shortcut::new(Key::F, true)),
    (ShortcutAction::NewWord, Shortcut::new(Key::N, true)),
    (ShortcutAction::ToggleDarkMode, Shortcut::new(Key::D, true)),
    (ShortcutAction::CloseModal, Shortcut::new(Key::Escape, false)),
];

/// Matchar tangentinmatning mot de fasta genvägarna
pub struct ShortcutManager;

impl ShortcutManager {
    /// Returnerar None om ingen matchar. Med fokus i ett textfält gäller bara Escape.
    pub fn check(ctx: &egui::Context) -> Option<ShortcutAction> {
        let text_focused = ctx.wants_keyboard_input();

        ctx.input(|input| {
            SHORTCUTS
                .iter()
                .filter(|(action, _)| !text_focused || *action == ShortcutAction::CloseModal)
                .find(|(_, shortcut)| {
                    input.key_pressed(shortcut.key) && shortcut.matches(&input.modifiers)
                })
                .map(|(action, _)| *action)
        })
    }

    /// Visningssträng för en åtgärds genväg (för tooltips)
    pub fn hint(action: ShortcutAction) -> Option<String> {
        SHORTCUTS
            .iter()
            .find(|(a, _)| *a == action)
            .map(|(_, s)| s.display())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hint() {
        assert_eq!(ShortcutManager::hint(ShortcutAction::FocusSearch).as_deref(), Some("Ctrl+F"));
        assert_eq!(ShortcutManager::hint(ShortcutAction::CloseModal).as_deref(), Some("Escape"));
    }

    #[test]
    fn test_matches_requires_exact_modifiers() {
        let shortcut = Shortcut::new(Key::F, true);
        let ctrl = Modifiers { command: true, ctrl: true, ..Default::default() };
        let ctrl_shift = Modifiers { shift: true, ..ctrl };

        assert!(shortcut.matches(&ctrl));
        assert!(!shortcut.matches(&ctrl_shift));
        assert!(!shortcut.matches(&Modifiers::default()));
    }
}

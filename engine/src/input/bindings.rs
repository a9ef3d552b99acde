//! Input Bindings Module
//!
//! Maps physical keys to logical actions through a static, ordered table.
//! The poller walks the table once per frame.

use super::KeyCode;
use super::action::{Action, Actions};

/// One entry of a binding table: holding `key` asserts `action`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyBinding {
    pub key: KeyCode,
    pub action: Action,
}

impl KeyBinding {
    pub const fn new(key: KeyCode, action: Action) -> Self {
        Self { key, action }
    }
}

/// Default bindings, checked in this order every frame.
pub static DEFAULT_BINDINGS: [KeyBinding; 7] = [
    KeyBinding::new(KeyCode::ControlLeft, Action::Attack),
    KeyBinding::new(KeyCode::Space, Action::Jump),
    KeyBinding::new(KeyCode::ShiftLeft, Action::Duck),
    KeyBinding::new(KeyCode::ArrowUp, Action::Forward),
    KeyBinding::new(KeyCode::ArrowDown, Action::Back),
    KeyBinding::new(KeyCode::E, Action::Use),
    KeyBinding::new(KeyCode::Backspace, Action::Cancel),
];

/// A compile-time binding table.
///
/// Several keys may assert the same action, but a key should appear at most
/// once; [`KeyBindings::first_duplicate_key`] finds violations.
#[derive(Debug, Clone, Copy)]
pub struct KeyBindings {
    table: &'static [KeyBinding],
}

impl Default for KeyBindings {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyBindings {
    /// Create bindings backed by [`DEFAULT_BINDINGS`].
    ///
    /// Default bindings:
    /// - Ctrl (Left) = Attack
    /// - Space = Jump
    /// - Shift (Left) = Duck
    /// - Arrow Up = Forward
    /// - Arrow Down = Back
    /// - E = Use
    /// - Backspace = Cancel
    pub fn new() -> Self {
        Self::from_table(&DEFAULT_BINDINGS)
    }

    /// Use a different static table.
    pub const fn from_table(table: &'static [KeyBinding]) -> Self {
        Self { table }
    }

    /// Get the action bound to a physical key, if any.
    pub fn get_action(&self, key: KeyCode) -> Option<Action> {
        self.table
            .iter()
            .find(|binding| binding.key == key)
            .map(|binding| binding.action)
    }

    /// Keys bound to a logical action, in table order.
    pub fn keys_for(&self, action: Action) -> impl Iterator<Item = KeyCode> + '_ {
        self.table
            .iter()
            .filter(move |binding| binding.action == action)
            .map(|binding| binding.key)
    }

    /// Every action at least one key is bound to.
    pub fn bound_actions(&self) -> Actions {
        self.table.iter().map(|binding| binding.action).collect()
    }

    /// All bindings in the order they are polled.
    pub fn all_bindings(&self) -> &'static [KeyBinding] {
        self.table
    }

    /// First key that appears more than once in the table.
    pub fn first_duplicate_key(&self) -> Option<KeyCode> {
        self.table.iter().enumerate().find_map(|(i, binding)| {
            self.table[i + 1..]
                .iter()
                .any(|later| later.key == binding.key)
                .then_some(binding.key)
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_bindings() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::ControlLeft), Some(Action::Attack));
        assert_eq!(bindings.get_action(KeyCode::Space), Some(Action::Jump));
        assert_eq!(bindings.get_action(KeyCode::ShiftLeft), Some(Action::Duck));
        assert_eq!(bindings.get_action(KeyCode::ArrowUp), Some(Action::Forward));
        assert_eq!(bindings.get_action(KeyCode::ArrowDown), Some(Action::Back));
        assert_eq!(bindings.get_action(KeyCode::E), Some(Action::Use));
        assert_eq!(bindings.get_action(KeyCode::Backspace), Some(Action::Cancel));
    }

    #[test]
    fn test_unbound_key() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.get_action(KeyCode::W), None);
        assert_eq!(bindings.get_action(KeyCode::ControlRight), None);
    }

    #[test]
    fn test_reverse_lookup() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.keys_for(Action::Attack).collect::<Vec<_>>(), vec![KeyCode::ControlLeft]);
        assert_eq!(bindings.keys_for(Action::Use).collect::<Vec<_>>(), vec![KeyCode::E]);
    }

    #[test]
    fn test_default_covers_every_action_once() {
        let bindings = KeyBindings::new();

        assert_eq!(bindings.bound_actions(), Actions::all());
        assert_eq!(bindings.first_duplicate_key(), None);
        for action in Action::ALL {
            assert_eq!(bindings.keys_for(action).count(), 1, "{action:?}");
        }
    }

    static SHARED_ACTION: [KeyBinding; 3] = [
        KeyBinding::new(KeyCode::ArrowUp, Action::Forward),
        KeyBinding::new(KeyCode::W, Action::Forward),
        KeyBinding::new(KeyCode::ArrowUp, Action::Jump),
    ];

    #[test]
    fn test_several_keys_one_action() {
        let bindings = KeyBindings::from_table(&SHARED_ACTION);

        assert_eq!(
            bindings.keys_for(Action::Forward).collect::<Vec<_>>(),
            vec![KeyCode::ArrowUp, KeyCode::W]
        );
        assert_eq!(bindings.bound_actions(), Actions::FORWARD | Actions::JUMP);
    }

    #[test]
    fn test_duplicate_key_detected() {
        let bindings = KeyBindings::from_table(&SHARED_ACTION);

        assert_eq!(bindings.first_duplicate_key(), Some(KeyCode::ArrowUp));
    }
}

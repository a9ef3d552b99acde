//! Input Poller
//!
//! Turns one poll of a key-state source into one [`ActionState`] per frame.

use super::action::Actions;
use super::bindings::{KeyBinding, KeyBindings};
use super::keyboard::{KeyCode, KeyStateSource};
use super::shared::SharedActionState;
use super::state::ActionState;

/// Owns the current frame's [`ActionState`] and is its only writer.
///
/// Call [`update`](Self::update) once per frame tick, then read the result
/// through [`state`](Self::state).
#[derive(Debug, Clone, Default)]
pub struct InputPoller {
    bindings: KeyBindings,
    state: ActionState,
    polled: bool,
}

impl InputPoller {
    /// Create a poller using the default bindings. Nothing is held until the
    /// first update.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a poller over a different binding table.
    pub fn with_bindings(table: &'static [KeyBinding]) -> Self {
        Self {
            bindings: KeyBindings::from_table(table),
            state: ActionState::new(),
            polled: false,
        }
    }

    /// Poll every bound key and replace the action state.
    ///
    /// A source with no data leaves every action released for this frame.
    pub fn update<S>(&mut self, source: &S)
    where
        S: KeyStateSource + ?Sized,
    {
        let mut actions = Actions::empty();

        for binding in self.bindings.all_bindings() {
            if self.is_key_held(source, binding.key) {
                actions |= binding.action.flag();
                log::debug!("{} ({:?})", binding.action, binding.key);
            }
        }

        self.state.replace(actions);
        self.polled = true;
    }

    /// Whether `key` is held according to the source's current data.
    ///
    /// Returns `false` when the source reports nothing or the key lies past
    /// the number of keys it reports.
    pub fn is_key_held<S>(&self, source: &S, key: KeyCode) -> bool
    where
        S: KeyStateSource + ?Sized,
    {
        let states = source.key_states();
        match states.get(key.scancode()) {
            Some(&held) => held,
            None => {
                log::trace!(
                    "{key:?} (scancode {}) outside the {} keys reported",
                    key.scancode(),
                    states.len()
                );
                false
            }
        }
    }

    /// Read-only view of the current frame's actions.
    pub fn state(&self) -> &ActionState {
        &self.state
    }

    /// The binding table walked on every update.
    pub fn bindings(&self) -> &KeyBindings {
        &self.bindings
    }

    /// Whether `update` has run at least once.
    pub fn is_polled(&self) -> bool {
        self.polled
    }

    /// Publish the current mask for readers on other threads.
    pub fn publish(&self, shared: &SharedActionState) {
        shared.store(self.state);
    }
}

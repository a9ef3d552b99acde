//! Action State
//!
//! The per-frame snapshot of which actions are held.

use static_assertions::assert_eq_size;

use super::action::{Action, Actions};

/// Which actions were held during the most recent poll.
///
/// Only [`InputPoller`](super::InputPoller) writes it, and every write
/// replaces the whole mask. A fresh state has nothing held.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct ActionState {
    actions: Actions,
}

assert_eq_size!(ActionState, u32);

impl ActionState {
    /// Create a state with no actions held.
    pub const fn new() -> Self {
        Self {
            actions: Actions::empty(),
        }
    }

    pub(crate) const fn from_actions(actions: Actions) -> Self {
        Self { actions }
    }

    /// Overwrite the mask with this frame's actions.
    pub(crate) fn replace(&mut self, actions: Actions) {
        self.actions = actions;
    }

    pub fn is_attack(&self) -> bool {
        self.is(Action::Attack)
    }

    pub fn is_jump(&self) -> bool {
        self.is(Action::Jump)
    }

    pub fn is_duck(&self) -> bool {
        self.is(Action::Duck)
    }

    pub fn is_forward(&self) -> bool {
        self.is(Action::Forward)
    }

    pub fn is_back(&self) -> bool {
        self.is(Action::Back)
    }

    pub fn is_use(&self) -> bool {
        self.is(Action::Use)
    }

    pub fn is_cancel(&self) -> bool {
        self.is(Action::Cancel)
    }

    /// Check whether `action` is held.
    pub fn is(&self, action: Action) -> bool {
        self.actions.contains(action.flag())
    }

    /// The held actions as flags.
    pub fn actions(&self) -> Actions {
        self.actions
    }

    /// The raw bitmask.
    pub fn bits(&self) -> u32 {
        self.actions.bits()
    }

    /// Check if no action is held.
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Held actions in bit order.
    pub fn held(&self) -> impl Iterator<Item = Action> + '_ {
        Action::ALL.into_iter().filter(move |&action| self.is(action))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_nothing_held() {
        let state = ActionState::new();
        assert!(state.is_empty());
        assert!(!state.is_attack());
        assert!(!state.is_jump());
        assert!(!state.is_duck());
        assert!(!state.is_forward());
        assert!(!state.is_back());
        assert!(!state.is_use());
        assert!(!state.is_cancel());
        assert_eq!(state.bits(), 0);
    }

    #[test]
    fn test_accessors_match_bits() {
        let state = ActionState::from_actions(Actions::DUCK | Actions::CANCEL);
        assert!(state.is_duck());
        assert!(state.is_cancel());
        assert!(!state.is_attack());
        assert!(!state.is_use());
        assert_eq!(state.held().collect::<Vec<_>>(), vec![Action::Duck, Action::Cancel]);
    }

    #[test]
    fn test_replace_overwrites() {
        let mut state = ActionState::from_actions(Actions::ATTACK);
        state.replace(Actions::JUMP);
        assert!(!state.is_attack());
        assert!(state.is_jump());
        assert_eq!(state.bits(), 1 << 2);
    }
}

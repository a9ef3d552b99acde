//! Shared Action State
//!
//! Hands the current action mask to readers on other threads.

use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

use super::action::Actions;
use super::state::ActionState;

/// Cloneable handle to an action mask published by an
/// [`InputPoller`](super::InputPoller).
///
/// The whole mask is written with a single atomic store, so a reader sees
/// either the previous frame or the current one.
#[derive(Debug, Clone, Default)]
pub struct SharedActionState {
    bits: Arc<AtomicU32>,
}

impl SharedActionState {
    /// Create a handle with no actions held.
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn store(&self, state: ActionState) {
        self.bits.store(state.bits(), Ordering::Release);
    }

    /// Latest published state.
    pub fn load(&self) -> ActionState {
        ActionState::from_actions(Actions::from_bits_truncate(
            self.bits.load(Ordering::Acquire),
        ))
    }
}

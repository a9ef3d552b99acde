//! Input Actions
//!
//! Logical actions the game loop reacts to, and the bitmask that packs a set
//! of them into one integer.

use std::fmt;

use bitflags::bitflags;
use static_assertions::const_assert_eq;

bitflags! {
    /// Set of held actions, one bit per [`Action`]. Bit 0 is unused.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
    pub struct Actions: u32 {
        const ATTACK  = 1 << 1;
        const JUMP    = 1 << 2;
        const DUCK    = 1 << 3;
        const FORWARD = 1 << 4;
        const BACK    = 1 << 5;
        const USE     = 1 << 6;
        const CANCEL  = 1 << 7;
    }
}

// Seven disjoint bits, 1 through 7.
const_assert_eq!(Actions::all().bits(), 0b1111_1110);
const_assert_eq!(Actions::all().bits().count_ones(), 7);

/// A logical input category, independent of which physical key triggers it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Action {
    Attack,
    Jump,
    Duck,
    Forward,
    Back,
    Use,
    Cancel,
}

impl Action {
    /// Every action, in bit order.
    pub const ALL: [Action; 7] = [
        Action::Attack,
        Action::Jump,
        Action::Duck,
        Action::Forward,
        Action::Back,
        Action::Use,
        Action::Cancel,
    ];

    /// The single bit this action occupies in an [`Actions`] mask.
    pub const fn flag(self) -> Actions {
        match self {
            Action::Attack => Actions::ATTACK,
            Action::Jump => Actions::JUMP,
            Action::Duck => Actions::DUCK,
            Action::Forward => Actions::FORWARD,
            Action::Back => Actions::BACK,
            Action::Use => Actions::USE,
            Action::Cancel => Actions::CANCEL,
        }
    }

    /// Short human-readable line used in diagnostics.
    pub fn describe(self) -> &'static str {
        match self {
            Action::Attack => "attack",
            Action::Jump => "jump",
            Action::Duck => "duck",
            Action::Forward => "moving forward",
            Action::Back => "moving back",
            Action::Use => "use something",
            Action::Cancel => "cancel action",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

impl From<Action> for Actions {
    fn from(action: Action) -> Self {
        action.flag()
    }
}

impl FromIterator<Action> for Actions {
    fn from_iter<T: IntoIterator<Item = Action>>(iter: T) -> Self {
        iter.into_iter()
            .fold(Actions::empty(), |mask, action| mask | action.flag())
    }
}

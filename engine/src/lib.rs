//! Bitwise Input Library
//!
//! Per-frame keyboard polling packed into a bitmask of player actions
//! (attack, jump, duck, move forward/back, use, cancel).
//!
//! # Modules
//!
//! - [`input`] - Key codes, key-state sources, bindings, the poller and its action state
//! - [`clock`] - Fixed-interval frame ticks
//! - [`config`] - Demo window and loop settings
//!
//! # Example
//!
//! ```
//! use bitwise_input::{InputPoller, KeyCode, KeyboardSnapshot};
//!
//! let mut keyboard = KeyboardSnapshot::new();
//! let mut poller = InputPoller::new();
//!
//! keyboard.handle_key(KeyCode::Space, true);
//! poller.update(&keyboard);
//!
//! let state = poller.state();
//! assert!(state.is_jump());
//! assert!(!state.is_duck());
//! ```

pub mod clock;
pub mod config;
pub mod input;

pub use clock::FrameClock;
pub use config::{ConfigError, DemoConfig};
// Re-export commonly used input types
pub use input::{
    Action, ActionState, Actions, InputPoller, KeyCode, KeyStateSource, KeyboardSnapshot,
    SharedActionState,
};

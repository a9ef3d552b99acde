//! Input Module
//!
//! Bitmask action input for a game loop. Once per frame an [`InputPoller`]
//! asks a [`KeyStateSource`] about each bound physical key and packs the held
//! ones into an [`ActionState`].
//! This module is decoupled from any specific windowing system (like winit)
//! apart from the key code bridge.
//!
//! # Example
//!
//! ```rust
//! use bitwise_input::input::{InputPoller, KeyCode, KeyboardSnapshot};
//!
//! let mut keyboard = KeyboardSnapshot::new();
//! let mut poller = InputPoller::new();
//!
//! // Window events fill in the keyboard...
//! keyboard.handle_key(KeyCode::ControlLeft, true);
//! keyboard.handle_key(KeyCode::ArrowUp, true);
//!
//! // ...and each frame tick polls it.
//! poller.update(&keyboard);
//! assert!(poller.state().is_attack());
//! assert!(poller.state().is_forward());
//! assert!(!poller.state().is_jump());
//! ```

pub mod action;
pub mod bindings;
pub mod keyboard;
pub mod poller;
pub mod shared;
pub mod state;

// Re-export commonly used types at module level
pub use action::{Action, Actions};
pub use bindings::{DEFAULT_BINDINGS, KeyBinding, KeyBindings};
pub use keyboard::{KeyCode, KeyStateSource, KeyboardSnapshot};
pub use poller::InputPoller;
pub use shared::SharedActionState;
pub use state::ActionState;

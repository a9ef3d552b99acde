//! Keyboard Input Module
//!
//! Physical key codes, the key-state source the poller reads from, and a
//! held-key table fed by window events.
//! Decoupled from winit except for the `from_winit` bridge.

use static_assertions::const_assert_eq;

/// Generic physical key codes, independent of windowing system.
///
/// Discriminants are dense scancodes: a [`KeyStateSource`] reports the key
/// `k` at index `k.scancode()`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[repr(u8)]
pub enum KeyCode {
    // Letter keys
    A = 0,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
    I,
    J,
    K,
    L,
    M,
    N,
    O,
    P,
    Q,
    R,
    S,
    T,
    U,
    V,
    W,
    X,
    Y,
    Z,

    // Number keys
    Digit0,
    Digit1,
    Digit2,
    Digit3,
    Digit4,
    Digit5,
    Digit6,
    Digit7,
    Digit8,
    Digit9,

    // Control keys
    Space,
    Enter,
    Escape,
    Backspace,
    Tab,

    // Arrow keys
    ArrowUp,
    ArrowDown,
    ArrowLeft,
    ArrowRight,

    // Modifiers
    ShiftLeft,
    ShiftRight,
    ControlLeft,
    ControlRight,
    AltLeft,
    AltRight,

    // Function keys
    F1,
    F2,
    F3,
    F4,
    F5,
    F6,
    F7,
    F8,
    F9,
    F10,
    F11,
    F12,
}

impl KeyCode {
    /// Number of physical keys this crate knows about.
    pub const COUNT: usize = 63;

    /// Every key, indexed by scancode.
    pub const ALL: [KeyCode; KeyCode::COUNT] = [
        KeyCode::A,
        KeyCode::B,
        KeyCode::C,
        KeyCode::D,
        KeyCode::E,
        KeyCode::F,
        KeyCode::G,
        KeyCode::H,
        KeyCode::I,
        KeyCode::J,
        KeyCode::K,
        KeyCode::L,
        KeyCode::M,
        KeyCode::N,
        KeyCode::O,
        KeyCode::P,
        KeyCode::Q,
        KeyCode::R,
        KeyCode::S,
        KeyCode::T,
        KeyCode::U,
        KeyCode::V,
        KeyCode::W,
        KeyCode::X,
        KeyCode::Y,
        KeyCode::Z,
        KeyCode::Digit0,
        KeyCode::Digit1,
        KeyCode::Digit2,
        KeyCode::Digit3,
        KeyCode::Digit4,
        KeyCode::Digit5,
        KeyCode::Digit6,
        KeyCode::Digit7,
        KeyCode::Digit8,
        KeyCode::Digit9,
        KeyCode::Space,
        KeyCode::Enter,
        KeyCode::Escape,
        KeyCode::Backspace,
        KeyCode::Tab,
        KeyCode::ArrowUp,
        KeyCode::ArrowDown,
        KeyCode::ArrowLeft,
        KeyCode::ArrowRight,
        KeyCode::ShiftLeft,
        KeyCode::ShiftRight,
        KeyCode::ControlLeft,
        KeyCode::ControlRight,
        KeyCode::AltLeft,
        KeyCode::AltRight,
        KeyCode::F1,
        KeyCode::F2,
        KeyCode::F3,
        KeyCode::F4,
        KeyCode::F5,
        KeyCode::F6,
        KeyCode::F7,
        KeyCode::F8,
        KeyCode::F9,
        KeyCode::F10,
        KeyCode::F11,
        KeyCode::F12,
    ];

    /// Index of this key in a key-state table.
    pub const fn scancode(self) -> usize {
        self as usize
    }

    /// Look up the key for a scancode, `None` if out of range.
    pub fn from_scancode(scancode: usize) -> Option<KeyCode> {
        Self::ALL.get(scancode).copied()
    }

    /// Translate a winit physical key code.
    ///
    /// Returns `None` for keys this crate does not track.
    pub fn from_winit(key: winit::keyboard::KeyCode) -> Option<KeyCode> {
        use winit::keyboard::KeyCode as Winit;

        let key = match key {
            Winit::KeyA => KeyCode::A,
            Winit::KeyB => KeyCode::B,
            Winit::KeyC => KeyCode::C,
            Winit::KeyD => KeyCode::D,
            Winit::KeyE => KeyCode::E,
            Winit::KeyF => KeyCode::F,
            Winit::KeyG => KeyCode::G,
            Winit::KeyH => KeyCode::H,
            Winit::KeyI => KeyCode::I,
            Winit::KeyJ => KeyCode::J,
            Winit::KeyK => KeyCode::K,
            Winit::KeyL => KeyCode::L,
            Winit::KeyM => KeyCode::M,
            Winit::KeyN => KeyCode::N,
            Winit::KeyO => KeyCode::O,
            Winit::KeyP => KeyCode::P,
            Winit::KeyQ => KeyCode::Q,
            Winit::KeyR => KeyCode::R,
            Winit::KeyS => KeyCode::S,
            Winit::KeyT => KeyCode::T,
            Winit::KeyU => KeyCode::U,
            Winit::KeyV => KeyCode::V,
            Winit::KeyW => KeyCode::W,
            Winit::KeyX => KeyCode::X,
            Winit::KeyY => KeyCode::Y,
            Winit::KeyZ => KeyCode::Z,
            Winit::Digit0 => KeyCode::Digit0,
            Winit::Digit1 => KeyCode::Digit1,
            Winit::Digit2 => KeyCode::Digit2,
            Winit::Digit3 => KeyCode::Digit3,
            Winit::Digit4 => KeyCode::Digit4,
            Winit::Digit5 => KeyCode::Digit5,
            Winit::Digit6 => KeyCode::Digit6,
            Winit::Digit7 => KeyCode::Digit7,
            Winit::Digit8 => KeyCode::Digit8,
            Winit::Digit9 => KeyCode::Digit9,
            Winit::Space => KeyCode::Space,
            Winit::Enter => KeyCode::Enter,
            Winit::Escape => KeyCode::Escape,
            Winit::Backspace => KeyCode::Backspace,
            Winit::Tab => KeyCode::Tab,
            Winit::ArrowUp => KeyCode::ArrowUp,
            Winit::ArrowDown => KeyCode::ArrowDown,
            Winit::ArrowLeft => KeyCode::ArrowLeft,
            Winit::ArrowRight => KeyCode::ArrowRight,
            Winit::ShiftLeft => KeyCode::ShiftLeft,
            Winit::ShiftRight => KeyCode::ShiftRight,
            Winit::ControlLeft => KeyCode::ControlLeft,
            Winit::ControlRight => KeyCode::ControlRight,
            Winit::AltLeft => KeyCode::AltLeft,
            Winit::AltRight => KeyCode::AltRight,
            Winit::F1 => KeyCode::F1,
            Winit::F2 => KeyCode::F2,
            Winit::F3 => KeyCode::F3,
            Winit::F4 => KeyCode::F4,
            Winit::F5 => KeyCode::F5,
            Winit::F6 => KeyCode::F6,
            Winit::F7 => KeyCode::F7,
            Winit::F8 => KeyCode::F8,
            Winit::F9 => KeyCode::F9,
            Winit::F10 => KeyCode::F10,
            Winit::F11 => KeyCode::F11,
            Winit::F12 => KeyCode::F12,
            _ => return None,
        };
        Some(key)
    }
}

const_assert_eq!(KeyCode::F12 as usize + 1, KeyCode::COUNT);

/// Anything that can report which physical keys are currently held.
///
/// `key_states()` is indexed by scancode; its length is the number of keys
/// the source tracks. An empty slice means the source has no data, and every
/// key reads as released.
pub trait KeyStateSource {
    /// Held flags for every tracked key, indexed by scancode.
    fn key_states(&self) -> &[bool];

    /// Whether `key` is held. Keys at or beyond the reported count are not.
    fn is_key_held(&self, key: KeyCode) -> bool {
        self.key_states()
            .get(key.scancode())
            .copied()
            .unwrap_or(false)
    }
}

impl KeyStateSource for [bool] {
    fn key_states(&self) -> &[bool] {
        self
    }
}

impl<const N: usize> KeyStateSource for [bool; N] {
    fn key_states(&self) -> &[bool] {
        self
    }
}

impl KeyStateSource for Vec<bool> {
    fn key_states(&self) -> &[bool] {
        self
    }
}

/// Held-key table for every [`KeyCode`], maintained from press/release
/// events.
///
/// Window systems deliver key changes as events; this folds them into the
/// per-key table a [`KeyStateSource`] has to report.
#[derive(Debug, Clone)]
pub struct KeyboardSnapshot {
    held: [bool; KeyCode::COUNT],
}

impl Default for KeyboardSnapshot {
    fn default() -> Self {
        Self::new()
    }
}

impl KeyboardSnapshot {
    /// Create a snapshot with all keys released.
    pub fn new() -> Self {
        Self {
            held: [false; KeyCode::COUNT],
        }
    }

    /// Handle a key press or release event.
    ///
    /// Returns `true` if the held state of the key changed.
    pub fn handle_key(&mut self, key: KeyCode, pressed: bool) -> bool {
        let slot = &mut self.held[key.scancode()];
        let changed = *slot != pressed;
        *slot = pressed;
        changed
    }

    /// Handle a winit key event. Untracked keys are ignored.
    pub fn handle_winit_key(&mut self, key: winit::keyboard::KeyCode, pressed: bool) -> bool {
        match KeyCode::from_winit(key) {
            Some(key) => self.handle_key(key, pressed),
            None => {
                log::trace!("ignoring untracked key {key:?}");
                false
            }
        }
    }

    /// Release every key, e.g. when the window loses focus.
    pub fn release_all(&mut self) {
        self.held = [false; KeyCode::COUNT];
    }

    /// Keys currently held, in scancode order.
    pub fn held_keys(&self) -> impl Iterator<Item = KeyCode> + '_ {
        KeyCode::ALL
            .iter()
            .zip(self.held.iter())
            .filter(|&(_, &held)| held)
            .map(|(&key, _)| key)
    }

    /// Check if any key is held.
    pub fn any_held(&self) -> bool {
        self.held.iter().any(|&held| held)
    }
}

impl KeyStateSource for KeyboardSnapshot {
    fn key_states(&self) -> &[bool] {
        &self.held
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scancodes_are_dense() {
        for (index, key) in KeyCode::ALL.iter().enumerate() {
            assert_eq!(key.scancode(), index, "{key:?} out of place");
            assert_eq!(KeyCode::from_scancode(index), Some(*key));
        }
        assert_eq!(KeyCode::from_scancode(KeyCode::COUNT), None);
    }

    #[test]
    fn test_winit_bridge() {
        use winit::keyboard::KeyCode as Winit;

        assert_eq!(KeyCode::from_winit(Winit::ControlLeft), Some(KeyCode::ControlLeft));
        assert_eq!(KeyCode::from_winit(Winit::Space), Some(KeyCode::Space));
        assert_eq!(KeyCode::from_winit(Winit::KeyE), Some(KeyCode::E));
        assert_eq!(KeyCode::from_winit(Winit::Backspace), Some(KeyCode::Backspace));
        assert_eq!(KeyCode::from_winit(Winit::NumpadEnter), None);
    }

    #[test]
    fn test_snapshot_default_released() {
        let keyboard = KeyboardSnapshot::new();
        assert!(!keyboard.any_held());
        assert_eq!(keyboard.key_states().len(), KeyCode::COUNT);
        assert!(!keyboard.is_key_held(KeyCode::Space));
    }

    #[test]
    fn test_snapshot_press_release() {
        let mut keyboard = KeyboardSnapshot::new();
        assert!(keyboard.handle_key(KeyCode::Space, true));
        assert!(keyboard.is_key_held(KeyCode::Space));

        // Key repeat does not change anything
        assert!(!keyboard.handle_key(KeyCode::Space, true));

        assert!(keyboard.handle_key(KeyCode::Space, false));
        assert!(!keyboard.is_key_held(KeyCode::Space));
    }

    #[test]
    fn test_snapshot_release_all() {
        let mut keyboard = KeyboardSnapshot::new();
        keyboard.handle_key(KeyCode::ControlLeft, true);
        keyboard.handle_key(KeyCode::ArrowUp, true);
        assert_eq!(
            keyboard.held_keys().collect::<Vec<_>>(),
            vec![KeyCode::ArrowUp, KeyCode::ControlLeft]
        );

        keyboard.release_all();
        assert!(!keyboard.any_held());
    }

    #[test]
    fn test_snapshot_untracked_winit_key() {
        let mut keyboard = KeyboardSnapshot::new();
        assert!(!keyboard.handle_winit_key(winit::keyboard::KeyCode::NumpadAdd, true));
        assert!(!keyboard.any_held());
    }

    #[test]
    fn test_slice_source_out_of_range() {
        let states = vec![true; 10];
        assert!(states.is_key_held(KeyCode::A));
        // Space sits past the tenth scancode
        assert!(!states.is_key_held(KeyCode::Space));
    }

    #[test]
    fn test_empty_source_reads_released() {
        let states: [bool; 0] = [];
        for key in KeyCode::ALL {
            assert!(!states.is_key_held(key));
        }
    }
}

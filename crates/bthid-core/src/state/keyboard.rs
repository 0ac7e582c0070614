//! Pressed-key buffer and modifier mask.
//!
//! # The six-key limit (for beginners)
//!
//! A boot-protocol keyboard report has room for exactly six non-modifier
//! keys.  Real keyboards either report an error ("phantom" state) or simply
//! stop reporting extra keys when more are held.  This buffer keeps the six
//! most recently pressed keys: pressing a seventh pushes the oldest one out
//! of the report.  Once pushed out, the key is forgotten; releasing it later
//! is a harmless no-op.
//!
//! Modifiers (Ctrl, Shift, Alt, Meta, left and right) do not count against
//! the limit; they live in their own byte, one bit each.

use tracing::debug;

use crate::keymap::HidKeyCode;
use crate::protocol::report::{KeyboardReport, MAX_KEYS};

/// Currently pressed keys, most recent first, plus the modifier mask.
///
/// Invariants: unused slots hold 0 and only trail the used ones; no non-zero
/// code appears twice.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyState {
    keys: [u8; MAX_KEYS],
    modifiers: u8,
}

impl KeyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets or clears modifier bit `bit` (0–7).  Out-of-range bits are ignored.
    pub fn set_modifier(&mut self, bit: u8, pressed: bool) {
        if bit >= 8 {
            return;
        }
        if pressed {
            self.modifiers |= 1 << bit;
        } else {
            self.modifiers &= !(1 << bit);
        }
    }

    /// Records `key` as the most recently pressed key.
    ///
    /// Pressing a key that is already down, or [`HidKeyCode::Unknown`], does
    /// nothing.  With six keys already down the oldest is dropped.
    pub fn press(&mut self, key: HidKeyCode) {
        let code = key.as_u8();
        if code == 0 || self.keys.contains(&code) {
            return;
        }
        let dropped = self.keys[MAX_KEYS - 1];
        if dropped != 0 {
            debug!(dropped, "key buffer full, dropping oldest key");
        }
        self.keys.copy_within(0..MAX_KEYS - 1, 1);
        self.keys[0] = code;
    }

    /// Removes `key` from the pressed set.  Releasing a key that is not
    /// pressed does nothing.
    pub fn release(&mut self, key: HidKeyCode) {
        let code = key.as_u8();
        if code == 0 {
            return;
        }
        if let Some(pos) = self.keys.iter().position(|&k| k == code) {
            self.keys.copy_within(pos + 1.., pos);
            self.keys[MAX_KEYS - 1] = 0;
        }
    }

    /// Releases every key and modifier.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// `true` when no key and no modifier is held.
    pub fn is_idle(&self) -> bool {
        self.modifiers == 0 && self.keys[0] == 0
    }

    pub fn modifiers(&self) -> u8 {
        self.modifiers
    }

    /// Pressed usage codes, most recent first, without padding.
    pub fn pressed(&self) -> impl Iterator<Item = u8> + '_ {
        self.keys.iter().copied().take_while(|&k| k != 0)
    }

    pub fn report(&self) -> KeyboardReport {
        KeyboardReport::new(self.modifiers, self.keys)
    }
}

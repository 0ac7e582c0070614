//! Key symbol translation tables.
//!
//! The canonical key representation is the USB HID Usage ID (page 0x07).
//! Input sources produce *key symbols* (see [`symbols`]); [`KeyMap`] resolves
//! them to usage codes and to the modifier bit they imply.
//!
//! # Shifted and control symbols (for beginners)
//!
//! A terminal hands us the *character* a key combination produced, not the
//! keys that were held.  Typing Shift+1 arrives as `"!"`, Ctrl+A arrives as
//! byte 0x01.  By the time we see the symbol the Shift or Ctrl keypress has
//! already been consumed, so the key map re-derives it:
//!
//! | Symbol     | Base key | Implied modifier |
//! |------------|----------|------------------|
//! | `"!"`      | `"1"`    | Shift            |
//! | `"A"`      | `"a"`    | Shift            |
//! | `"\u{1}"`  | `"a"`    | Ctrl             |
//! | `"a"`      | `"a"`    | none             |

pub mod evdev_codes;
pub mod hid;
pub mod symbols;

pub use hid::HidKeyCode;

/// Modifier bit index of Left Shift in the report modifier byte.
pub const SHIFT_BIT: u8 = 1;

/// Modifier bit index of Left Ctrl in the report modifier byte.
pub const CTRL_BIT: u8 = 0;

/// Everything the event loop needs to know about one key symbol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resolution {
    /// Usage code of the physical key to press, [`HidKeyCode::Unknown`] if the
    /// symbol is not mapped.
    pub usage: HidKeyCode,
    /// Modifier bit the symbol sets: its own bit for a dedicated modifier key,
    /// or the modifier implied by a shifted/control symbol.
    pub modifier: Option<u8>,
    /// `true` if the symbol names a modifier key itself (`LEFTSHIFT`, ...).
    pub is_modifier_key: bool,
}

/// Key symbol resolver.  All lookups are static tables; the struct carries no
/// state.
pub struct KeyMap;

impl KeyMap {
    /// Returns the usage code for `symbol`, or 0 if it is not mapped.
    ///
    /// Shifted symbols and control characters resolve to their base key.
    /// Upper-case letters are *not* folded here; use [`KeyMap::resolve`].
    pub fn usage_code(symbol: &str) -> u8 {
        Self::lookup(symbol).as_u8()
    }

    /// Typed form of [`KeyMap::usage_code`].
    pub fn lookup(symbol: &str) -> HidKeyCode {
        if let Some(base) = symbols::shift_base(symbol) {
            return symbols::symbol_to_hid(base);
        }
        if let Some(base) = symbols::ctrl_base(symbol) {
            return symbols::symbol_to_hid(base);
        }
        symbols::symbol_to_hid(strip_key_prefix(symbol))
    }

    /// Returns the modifier bit `symbol` sets, or `None` if it sets none.
    ///
    /// Dedicated modifier keys return their own bit.  Upper-case letters and
    /// shifted symbols return [`SHIFT_BIT`]; control characters return
    /// [`CTRL_BIT`].
    pub fn modifier_bit(symbol: &str) -> Option<u8> {
        if let Some(bit) = dedicated_modifier_bit(symbol) {
            return Some(bit);
        }
        if is_upper_letter(symbol) || symbols::shift_base(symbol).is_some() {
            return Some(SHIFT_BIT);
        }
        if symbols::ctrl_base(symbol).is_some() {
            return Some(CTRL_BIT);
        }
        None
    }

    /// Returns `true` if `symbol` names a modifier key (`LEFTCTRL`,
    /// `KEY_RIGHTMETA`, ...).
    pub fn is_modifier_key(symbol: &str) -> bool {
        dedicated_modifier_bit(symbol).is_some()
    }

    /// Resolves a symbol into the key to press and the modifier it implies.
    ///
    /// # Examples
    ///
    /// ```
    /// use bthid_core::keymap::{KeyMap, HidKeyCode, SHIFT_BIT};
    ///
    /// let r = KeyMap::resolve("A");
    /// assert_eq!(r.usage, HidKeyCode::KeyA);
    /// assert_eq!(r.modifier, Some(SHIFT_BIT));
    /// assert!(!r.is_modifier_key);
    /// ```
    pub fn resolve(symbol: &str) -> Resolution {
        let usage = if is_upper_letter(symbol) {
            Self::lookup(&symbol.to_ascii_lowercase())
        } else {
            Self::lookup(symbol)
        };
        Resolution {
            usage,
            modifier: Self::modifier_bit(symbol),
            is_modifier_key: Self::is_modifier_key(symbol),
        }
    }

    /// Translates a Linux input key code to a key symbol.
    ///
    /// Returns `None` if the code has no symbol.
    pub fn linux_keycode_to_symbol(code: u16) -> Option<&'static str> {
        evdev_codes::keycode_to_symbol(code)
    }
}

/// Named keys may carry the Linux `KEY_` prefix; single characters never do.
fn strip_key_prefix(symbol: &str) -> &str {
    symbol.strip_prefix("KEY_").unwrap_or(symbol)
}

fn dedicated_modifier_bit(symbol: &str) -> Option<u8> {
    symbols::symbol_to_hid(strip_key_prefix(symbol)).modifier_bit()
}

fn is_upper_letter(symbol: &str) -> bool {
    let mut chars = symbol.chars();
    matches!((chars.next(), chars.next()), (Some(c), None) if c.is_ascii_uppercase())
}

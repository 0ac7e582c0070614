//! The [`InputEvent`] type.

use std::fmt;

/// A mouse button carried in the report button mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

impl MouseButton {
    /// Bit of this button in the mouse report button byte.
    pub fn mask(self) -> u8 {
        match self {
            MouseButton::Left => 1 << 0,
            MouseButton::Right => 1 << 1,
            MouseButton::Middle => 1 << 2,
        }
    }
}

/// Axis of a relative motion event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    X,
    Y,
}

/// One logical input event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    /// A key went down or up.  `symbol` is a key symbol as understood by
    /// [`KeyMap`](crate::keymap::KeyMap).
    ///
    /// Terminal sources only ever report `pressed: true`.
    Key { symbol: String, pressed: bool },

    /// A mouse button went down or up.
    Button { button: MouseButton, pressed: bool },

    /// Relative motion along one axis.  `raw` is a 10-bit two's-complement
    /// delta in `[0, 1023]` (values ≥ 512 are negative).
    Motion { axis: Axis, raw: u16 },

    /// Absolute pointer position in terminal cells.  `button_raw` is the
    /// source's raw button state code, interpreted through
    /// [`PointerCodes`](crate::state::PointerCodes).
    Pointer { x: i32, y: i32, button_raw: u32 },

    /// The user asked to switch the transport to the next paired host.
    SwitchHost,
}

impl InputEvent {
    pub fn key_down(symbol: impl Into<String>) -> Self {
        InputEvent::Key {
            symbol: symbol.into(),
            pressed: true,
        }
    }

    pub fn key_up(symbol: impl Into<String>) -> Self {
        InputEvent::Key {
            symbol: symbol.into(),
            pressed: false,
        }
    }
}

impl fmt::Display for InputEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputEvent::Key { symbol, pressed } => {
                let dir = if *pressed { "down" } else { "up" };
                write!(f, "key {symbol:?} {dir}")
            }
            InputEvent::Button { button, pressed } => {
                let dir = if *pressed { "down" } else { "up" };
                write!(f, "button {button:?} {dir}")
            }
            InputEvent::Motion { axis, raw } => write!(f, "motion {axis:?} raw={raw}"),
            InputEvent::Pointer { x, y, button_raw } => {
                write!(f, "pointer ({x}, {y}) button_raw={button_raw:#x}")
            }
            InputEvent::SwitchHost => f.write_str("switch host"),
        }
    }
}

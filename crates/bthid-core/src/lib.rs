//! # bthid-core
//!
//! Input-to-HID translation engine for a Bluetooth keyboard/mouse emulator.
//!
//! This crate turns key symbols, button presses and pointer motion into HID
//! boot-protocol reports.  It performs no I/O: input sources and the report
//! transport live in `bthid-client`.
//!
//! # Architecture overview (for beginners)
//!
//! A Bluetooth HID device does not send "the user typed `!`".  It sends a
//! small fixed-size *report* describing which keys are currently held, over
//! and over as that set changes.  Turning one into the other takes four
//! pieces:
//!
//! - **`keymap`** – Resolves a key symbol (`"a"`, `"!"`, `"LEFTSHIFT"`,
//!   `"\u{1}"`) to a USB HID Usage ID and the modifier it implies.  Also
//!   translates Linux input key codes to symbols.
//!
//! - **`state`** – [`KeyState`] remembers which keys are held (at most six)
//!   and which modifiers are down; [`MouseState`] turns absolute or relative
//!   pointer input into clamped deltas plus a button mask.
//!
//! - **`protocol`** – The byte layout of keyboard and mouse reports.
//!
//! - **`domain`** – The [`InputEvent`] every source produces, and the
//!   classifier for raw Linux `input_event` triples.

pub mod domain;
pub mod keymap;
pub mod protocol;
pub mod state;

pub use domain::{Axis, InputEvent, MouseButton};
pub use keymap::{HidKeyCode, KeyMap, Resolution, CTRL_BIT, SHIFT_BIT};
pub use protocol::{HidReport, KeyboardReport, MouseReport};
pub use state::{AbsoluteScale, KeyState, MouseState, PointerCodes};

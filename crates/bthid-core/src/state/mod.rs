//! Mutable per-session input state.
//!
//! [`KeyState`] and [`MouseState`] are owned by the event loop, mutated in
//! place as events arrive and read back as reports.  Neither outlives the
//! session.

pub mod keyboard;
pub mod mouse;

pub use keyboard::KeyState;
pub use mouse::{clamp_signed8, decode_relative, AbsoluteScale, MouseState, PointerCodes};

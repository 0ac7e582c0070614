//! Mouse delta and button state.
//!
//! Two input shapes feed the same boot-protocol mouse report:
//!
//! - **Absolute** pointer positions (terminal mouse capture, in character
//!   cells).  The delta is the scaled difference to the previous position.
//! - **Relative** motion from a raw mouse, one axis per event, pre-encoded
//!   as a 10-bit two's-complement value.
//!
//! Report deltas are limited to `[-127, 127]`.  `-128` is never produced so
//! that every delta can be negated without overflow.

use crate::domain::{Axis, MouseButton};
use crate::protocol::report::MouseReport;

/// Largest magnitude of a report delta.
const DELTA_LIMIT: i64 = 127;

/// Clamps `v` to the report delta range `[-127, 127]`.
pub fn clamp_signed8(v: i64) -> i8 {
    v.clamp(-DELTA_LIMIT, DELTA_LIMIT) as i8
}

/// Decodes a 10-bit two's-complement raw delta.  Only the low 10 bits of
/// `raw` are considered.
pub fn decode_relative(raw: u16) -> i32 {
    let raw = i32::from(raw & 0x3FF);
    if raw < 512 {
        raw
    } else {
        raw - 1024
    }
}

/// Rescales a decoded 10-bit delta onto the 8-bit report range.
fn rescale_relative(decoded: i32) -> i64 {
    (f64::from(decoded) / 512.0 * 256.0).round() as i64
}

/// Raw button codes reported alongside absolute pointer positions.
///
/// Terminal mouse capture reports a button *state code* rather than
/// press/release pairs.  `press` holds the left button, `motion` is a
/// "nothing changed" signal that keeps the previous button state, and every
/// other code releases the button.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PointerCodes {
    /// Left button held.
    pub press: u32,
    /// The code a terminal translator emits for a release.
    ///
    /// [`MouseState::update_absolute`] never compares against it: any code
    /// other than `press` or `motion` releases the button.
    pub release: u32,
    /// Moved without a button change.
    pub motion: u32,
}

impl Default for PointerCodes {
    fn default() -> Self {
        Self {
            press: 0x2,
            release: 0x1,
            motion: 0x1000_0000,
        }
    }
}

/// Multipliers applied to absolute position differences.
///
/// Terminal cells are roughly 2.5 times taller than wide, so the vertical
/// factor is larger.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AbsoluteScale {
    pub x: i32,
    pub y: i32,
}

impl Default for AbsoluteScale {
    fn default() -> Self {
        Self { x: 10, y: 25 }
    }
}

/// Current mouse report contents plus the last absolute position.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MouseState {
    buttons: u8,
    dx: i8,
    dy: i8,
    last_x: i32,
    last_y: i32,
    scale: AbsoluteScale,
    codes: PointerCodes,
}

impl MouseState {
    pub fn new(scale: AbsoluteScale, codes: PointerCodes) -> Self {
        Self {
            scale,
            codes,
            ..Self::default()
        }
    }

    /// Applies an absolute pointer sample and returns `(dx, dy, buttons)`.
    ///
    /// The first sample is measured against `(0, 0)`.
    pub fn update_absolute(&mut self, x: i32, y: i32, button_raw: u32) -> (i8, i8, u8) {
        let dx = (i64::from(x) - i64::from(self.last_x)) * i64::from(self.scale.x);
        let dy = (i64::from(y) - i64::from(self.last_y)) * i64::from(self.scale.y);
        self.dx = clamp_signed8(dx);
        self.dy = clamp_signed8(dy);
        self.last_x = x;
        self.last_y = y;

        let left = MouseButton::Left.mask();
        if button_raw == self.codes.press {
            self.buttons |= left;
        } else if button_raw != self.codes.motion {
            self.buttons &= !left;
        }

        (self.dx, self.dy, self.buttons)
    }

    /// Applies a relative motion sample along `axis` and returns the report
    /// delta.  The other axis is zeroed.
    ///
    /// # Examples
    ///
    /// ```
    /// use bthid_core::domain::Axis;
    /// use bthid_core::state::MouseState;
    ///
    /// let mut mouse = MouseState::default();
    /// // 600 decodes to -424, rescales to -212, clamps to -127.
    /// assert_eq!(mouse.update_relative(Axis::X, 600), -127);
    /// assert_eq!(mouse.report().as_bytes()[3], 129);
    /// ```
    pub fn update_relative(&mut self, axis: Axis, raw: u16) -> i8 {
        let delta = clamp_signed8(rescale_relative(decode_relative(raw)));
        match axis {
            Axis::X => {
                self.dx = delta;
                self.dy = 0;
            }
            Axis::Y => {
                self.dx = 0;
                self.dy = delta;
            }
        }
        delta
    }

    /// Sets or clears `button`.  Both deltas are zeroed so the resulting
    /// report carries no motion.
    pub fn set_button(&mut self, button: MouseButton, pressed: bool) {
        if pressed {
            self.buttons |= button.mask();
        } else {
            self.buttons &= !button.mask();
        }
        self.dx = 0;
        self.dy = 0;
    }

    pub fn buttons(&self) -> u8 {
        self.buttons
    }

    pub fn report(&self) -> MouseReport {
        MouseReport::new(self.buttons, self.dx, self.dy)
    }
}

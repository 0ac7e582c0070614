//! Classification of raw Linux input events (`struct input_event`).
//!
//! A raw keyboard or mouse delivers a stream of `(type, code, value)`
//! triples.  Only three kinds matter here:
//!
//! | type     | code                     | value                            |
//! |----------|--------------------------|----------------------------------|
//! | `EV_KEY` | `KEY_*`                  | 0 release, 1 press, 2 repeat     |
//! | `EV_KEY` | `BTN_LEFT/RIGHT/MIDDLE`  | 0 release, 1 press               |
//! | `EV_REL` | `REL_X` / `REL_Y`        | signed delta                     |
//!
//! Everything else (`EV_SYN` frame markers, `EV_MSC` scan codes, wheels,
//! LEDs) is dropped.  Key repeats are dropped as well: the host generates its
//! own repeats from a held key.

use super::event::{Axis, InputEvent, MouseButton};
use crate::keymap::KeyMap;

pub const EV_KEY: u16 = 0x01;
pub const EV_REL: u16 = 0x02;

pub const REL_X: u16 = 0x00;
pub const REL_Y: u16 = 0x01;

pub const BTN_LEFT: u16 = 0x110;
pub const BTN_RIGHT: u16 = 0x111;
pub const BTN_MIDDLE: u16 = 0x112;

const KEY_RELEASE: i32 = 0;
const KEY_PRESS: i32 = 1;

/// Range of a 10-bit signed delta.
const REL_MIN: i32 = -512;
const REL_MAX: i32 = 511;

/// Converts one raw Linux input event into an [`InputEvent`].
///
/// Returns `None` for events that carry nothing for the report: key repeats,
/// synchronisation frames, unmapped key codes and every other event type.
pub fn from_linux_event(ev_type: u16, code: u16, value: i32) -> Option<InputEvent> {
    match ev_type {
        EV_KEY => {
            let pressed = match value {
                KEY_PRESS => true,
                KEY_RELEASE => false,
                _ => return None,
            };
            if let Some(button) = button_for_code(code) {
                return Some(InputEvent::Button { button, pressed });
            }
            let symbol = KeyMap::linux_keycode_to_symbol(code)?;
            Some(InputEvent::Key {
                symbol: symbol.to_string(),
                pressed,
            })
        }
        EV_REL => {
            let axis = match code {
                REL_X => Axis::X,
                REL_Y => Axis::Y,
                _ => return None,
            };
            Some(InputEvent::Motion {
                axis,
                raw: encode_relative(value),
            })
        }
        _ => None,
    }
}

fn button_for_code(code: u16) -> Option<MouseButton> {
    match code {
        BTN_LEFT => Some(MouseButton::Left),
        BTN_RIGHT => Some(MouseButton::Right),
        BTN_MIDDLE => Some(MouseButton::Middle),
        _ => None,
    }
}

/// Packs a signed delta into the 10-bit two's-complement form carried by
/// [`InputEvent::Motion`].  Deltas beyond the 10-bit range saturate so a fast
/// flick never flips direction.
pub fn encode_relative(value: i32) -> u16 {
    value.clamp(REL_MIN, REL_MAX).rem_euclid(1024) as u16
}

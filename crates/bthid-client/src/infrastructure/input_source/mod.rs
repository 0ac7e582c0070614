//! Input source implementations.
//!
//! - [`terminal::TerminalSource`] – keys and mouse clicks captured from the
//!   controlling terminal.
//! - [`device::DeviceSource`] – fan-in over raw input devices.  The Linux
//!   evdev handle lives in `evdev` and is compiled on Linux only.
//! - [`mock::ScriptedSource`] – replays a fixed list of events in tests.

pub mod device;
pub mod mock;
pub mod terminal;

#[cfg(target_os = "linux")]
pub mod evdev;

use std::io;

/// One raw `(type, code, value)` input event as read from a device node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawEvent {
    pub ev_type: u16,
    pub code: u16,
    pub value: i32,
}

impl RawEvent {
    pub fn new(ev_type: u16, code: u16, value: i32) -> Self {
        Self {
            ev_type,
            code,
            value,
        }
    }
}

/// A non-blocking handle to one input device.
pub trait DeviceHandle: Send {
    /// Returns the next pending raw event, or `None` if the device has
    /// nothing to report right now.  Never blocks.
    ///
    /// # Errors
    ///
    /// Returns the OS error if reading failed (device unplugged, permission
    /// revoked).
    fn read_one(&mut self) -> io::Result<Option<RawEvent>>;
}

//! Keyboard and mouse input reports as handed to the report transport.
//!
//! Layout:
//! ```text
//! keyboard: [0xA1][0x01][modifiers][0x00][k0][k1][k2][k3][k4][k5]   10 bytes
//! mouse:    [0xA1][0x03][buttons][dx][dy]                             5 bytes
//! ```
//! `0xA1` is the Bluetooth HIDP header for a DATA/INPUT transaction; the
//! second byte is the report ID.  Everything after it is the boot-protocol
//! payload.  `dx`/`dy` are signed bytes in two's complement.

use std::fmt;

/// Bluetooth HIDP header: transaction DATA, report type INPUT.
pub const HIDP_INPUT_HEADER: u8 = 0xA1;

/// Report ID of the keyboard report.
pub const KEYBOARD_REPORT_ID: u8 = 0x01;

/// Report ID of the mouse report.
pub const MOUSE_REPORT_ID: u8 = 0x03;

/// Total length of an encoded keyboard report.
pub const KEYBOARD_REPORT_LEN: usize = 10;

/// Total length of an encoded mouse report.
pub const MOUSE_REPORT_LEN: usize = 5;

/// Maximum number of simultaneously reported non-modifier keys.
pub const MAX_KEYS: usize = 6;

/// Encodes a signed delta as the unsigned byte carried in a report
/// (`-1` → `255`, `1` → `1`).
pub fn encode_signed(value: i8) -> u8 {
    value as u8
}

// ── Keyboard ──────────────────────────────────────────────────────────────────

/// An encoded keyboard input report.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct KeyboardReport([u8; KEYBOARD_REPORT_LEN]);

impl KeyboardReport {
    /// Builds a report from a modifier mask and up to six usage codes, most
    /// recently pressed first.  Unused slots must be 0.
    pub fn new(modifiers: u8, keys: [u8; MAX_KEYS]) -> Self {
        let mut bytes = [0u8; KEYBOARD_REPORT_LEN];
        bytes[0] = HIDP_INPUT_HEADER;
        bytes[1] = KEYBOARD_REPORT_ID;
        bytes[2] = modifiers;
        // bytes[3] is reserved
        bytes[4..].copy_from_slice(&keys);
        Self(bytes)
    }

    /// The all-released report.
    pub fn empty() -> Self {
        Self::new(0, [0; MAX_KEYS])
    }

    pub fn modifiers(&self) -> u8 {
        self.0[2]
    }

    pub fn keys(&self) -> &[u8] {
        &self.0[4..]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// ── Mouse ─────────────────────────────────────────────────────────────────────

/// An encoded mouse input report.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct MouseReport([u8; MOUSE_REPORT_LEN]);

impl MouseReport {
    pub fn new(buttons: u8, dx: i8, dy: i8) -> Self {
        Self([
            HIDP_INPUT_HEADER,
            MOUSE_REPORT_ID,
            buttons,
            encode_signed(dx),
            encode_signed(dy),
        ])
    }

    pub fn buttons(&self) -> u8 {
        self.0[2]
    }

    pub fn dx(&self) -> i8 {
        self.0[3] as i8
    }

    pub fn dy(&self) -> i8 {
        self.0[4] as i8
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.0
    }
}

// ── Either report ─────────────────────────────────────────────────────────────

/// A report ready for the transport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HidReport {
    Keyboard(KeyboardReport),
    Mouse(MouseReport),
}

impl HidReport {
    pub fn as_bytes(&self) -> &[u8] {
        match self {
            HidReport::Keyboard(r) => r.as_bytes(),
            HidReport::Mouse(r) => r.as_bytes(),
        }
    }
}

impl From<KeyboardReport> for HidReport {
    fn from(r: KeyboardReport) -> Self {
        HidReport::Keyboard(r)
    }
}

impl From<MouseReport> for HidReport {
    fn from(r: MouseReport) -> Self {
        HidReport::Mouse(r)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

fn write_hex(f: &mut fmt::Formatter<'_>, bytes: &[u8]) -> fmt::Result {
    for (i, b) in bytes.iter().enumerate() {
        if i > 0 {
            f.write_str(" ")?;
        }
        write!(f, "{b:02x}")?;
    }
    Ok(())
}

impl fmt::Display for KeyboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_bytes())
    }
}

impl fmt::Display for MouseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_bytes())
    }
}

impl fmt::Display for HidReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_hex(f, self.as_bytes())
    }
}

impl fmt::Debug for KeyboardReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyboardReport")
            .field("modifiers", &format_args!("{:#010b}", self.modifiers()))
            .field("keys", &self.keys())
            .finish()
    }
}

impl fmt::Debug for MouseReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MouseReport")
            .field("buttons", &self.buttons())
            .field("dx", &self.dx())
            .field("dy", &self.dy())
            .finish()
    }
}

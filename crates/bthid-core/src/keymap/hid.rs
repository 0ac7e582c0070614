//! USB HID Usage IDs (page 0x07, Keyboard/Keypad page).
//!
//! Every key symbol the emulator understands resolves to one of these codes
//! before it is placed in a boot-protocol keyboard report.
//!
//! Reference: USB HID Usage Tables 1.3, Section 10 (Keyboard/Keypad page 0x07).
//!
//! # What is a HID Usage ID? (for beginners)
//!
//! The **USB Human Interface Device (HID)** standard assigns a unique number to
//! every key on a keyboard.  These numbers are called *Usage IDs*.  A boot
//! keyboard report carries up to six of them, one byte each:
//!
//! | Key          | HID Usage ID |
//! |--------------|-------------|
//! | Letter A     | 0x04        |
//! | Letter B     | 0x05        |
//! | Enter        | 0x28        |
//! | Left Ctrl    | 0xE0        |
//!
//! HID codes represent **physical key positions**, not characters.  `a` and
//! `A` are the same key (0x04); the host derives the character from the
//! modifier byte that travels alongside the key codes.
//!
//! # The media range 0xE8–0xFB
//!
//! The HID standard reserves 0xE8–0xFF.  The Linux boot-keyboard driver
//! (`hid-input.c`) assigns the media and browser keys to that range and
//! Bluetooth HID hosts built on it understand them, so they are listed here
//! as well.
//!
//! # The `Unknown` sentinel
//!
//! [`HidKeyCode::Unknown`] (value 0x00) means "no key".  Unused report slots
//! carry it, and every unrecognised symbol resolves to it.

/// USB HID Usage ID for keyboard keys (page 0x07).
///
/// The numeric value of each variant is its HID Usage ID on the keyboard/keypad page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum HidKeyCode {
    /// Sentinel for "no key".
    Unknown = 0x00,

    // Letters (HID 0x04–0x1D)
    KeyA = 0x04,
    KeyB = 0x05,
    KeyC = 0x06,
    KeyD = 0x07,
    KeyE = 0x08,
    KeyF = 0x09,
    KeyG = 0x0A,
    KeyH = 0x0B,
    KeyI = 0x0C,
    KeyJ = 0x0D,
    KeyK = 0x0E,
    KeyL = 0x0F,
    KeyM = 0x10,
    KeyN = 0x11,
    KeyO = 0x12,
    KeyP = 0x13,
    KeyQ = 0x14,
    KeyR = 0x15,
    KeyS = 0x16,
    KeyT = 0x17,
    KeyU = 0x18,
    KeyV = 0x19,
    KeyW = 0x1A,
    KeyX = 0x1B,
    KeyY = 0x1C,
    KeyZ = 0x1D,

    // Digits (HID 0x1E–0x27)
    Digit1 = 0x1E,
    Digit2 = 0x1F,
    Digit3 = 0x20,
    Digit4 = 0x21,
    Digit5 = 0x22,
    Digit6 = 0x23,
    Digit7 = 0x24,
    Digit8 = 0x25,
    Digit9 = 0x26,
    Digit0 = 0x27,

    // Control keys (HID 0x28–0x38)
    Enter = 0x28,
    Escape = 0x29,
    Backspace = 0x2A,
    Tab = 0x2B,
    Space = 0x2C,
    Minus = 0x2D,
    Equal = 0x2E,
    BracketLeft = 0x2F,
    BracketRight = 0x30,
    Backslash = 0x31,
    Semicolon = 0x33,
    Quote = 0x34,
    Backquote = 0x35,
    Comma = 0x36,
    Period = 0x37,
    Slash = 0x38,

    // Lock keys
    CapsLock = 0x39,

    // Function keys (HID 0x3A–0x45)
    F1 = 0x3A,
    F2 = 0x3B,
    F3 = 0x3C,
    F4 = 0x3D,
    F5 = 0x3E,
    F6 = 0x3F,
    F7 = 0x40,
    F8 = 0x41,
    F9 = 0x42,
    F10 = 0x43,
    F11 = 0x44,
    F12 = 0x45,

    // Navigation cluster (HID 0x46–0x52)
    PrintScreen = 0x46,
    ScrollLock = 0x47,
    Pause = 0x48,
    Insert = 0x49,
    Home = 0x4A,
    PageUp = 0x4B,
    Delete = 0x4C,
    End = 0x4D,
    PageDown = 0x4E,
    ArrowRight = 0x4F,
    ArrowLeft = 0x50,
    ArrowDown = 0x51,
    ArrowUp = 0x52,

    // Numpad (HID 0x53–0x63)
    NumLock = 0x53,
    NumpadDivide = 0x54,
    NumpadMultiply = 0x55,
    NumpadSubtract = 0x56,
    NumpadAdd = 0x57,
    NumpadEnter = 0x58,
    Numpad1 = 0x59,
    Numpad2 = 0x5A,
    Numpad3 = 0x5B,
    Numpad4 = 0x5C,
    Numpad5 = 0x5D,
    Numpad6 = 0x5E,
    Numpad7 = 0x5F,
    Numpad8 = 0x60,
    Numpad9 = 0x61,
    Numpad0 = 0x62,
    NumpadDecimal = 0x63,

    // ISO / application / power (HID 0x64–0x67)
    IntlBackslash = 0x64,
    ContextMenu = 0x65,
    Power = 0x66,
    NumpadEqual = 0x67,

    // Extended function keys (HID 0x68–0x73)
    F13 = 0x68,
    F14 = 0x69,
    F15 = 0x6A,
    F16 = 0x6B,
    F17 = 0x6C,
    F18 = 0x6D,
    F19 = 0x6E,
    F20 = 0x6F,
    F21 = 0x70,
    F22 = 0x71,
    F23 = 0x72,
    F24 = 0x73,

    // Editing / application keys (HID 0x74–0x7D)
    Open = 0x74,
    Help = 0x75,
    Props = 0x76,
    Front = 0x77,
    Again = 0x79,
    Undo = 0x7A,
    Cut = 0x7B,
    Copy = 0x7C,
    Paste = 0x7D,

    // International keys (HID 0x85–0x94)
    NumpadComma = 0x85,
    IntlRo = 0x87,
    KanaMode = 0x88,
    IntlYen = 0x89,
    Convert = 0x8A,
    NonConvert = 0x8B,
    NumpadJpComma = 0x8C,
    Lang1 = 0x90,
    Lang2 = 0x91,
    Lang3 = 0x92,
    Lang4 = 0x93,
    Lang5 = 0x94,

    // Modifier keys (HID 0xE0–0xE7)
    ControlLeft = 0xE0,
    ShiftLeft = 0xE1,
    AltLeft = 0xE2,
    MetaLeft = 0xE3,
    ControlRight = 0xE4,
    ShiftRight = 0xE5,
    AltRight = 0xE6,
    MetaRight = 0xE7,

    // Media range used by the Linux boot-keyboard mapping (0xE8–0xFB)
    MediaPlayPause = 0xE8,
    MediaStopCd = 0xE9,
    MediaPrevious = 0xEA,
    MediaNext = 0xEB,
    MediaEjectCd = 0xEC,
    MediaVolumeUp = 0xED,
    MediaVolumeDown = 0xEE,
    MediaMute = 0xEF,
    MediaWww = 0xF0,
    MediaBack = 0xF1,
    MediaForward = 0xF2,
    MediaStop = 0xF3,
    MediaFind = 0xF4,
    MediaScrollUp = 0xF5,
    MediaScrollDown = 0xF6,
    MediaEdit = 0xF7,
    MediaSleep = 0xF8,
    MediaCoffee = 0xF9,
    MediaRefresh = 0xFA,
    MediaCalc = 0xFB,
}

impl HidKeyCode {
    /// Returns the raw USB HID Usage ID value for this key code.
    pub fn as_u8(self) -> u8 {
        self as u8
    }

    /// Returns `true` if this is a modifier key.
    ///
    /// Modifier keys never occupy a key slot in a boot report; they are
    /// carried by the modifier byte instead.
    pub fn is_modifier(self) -> bool {
        matches!(
            self,
            HidKeyCode::ControlLeft
                | HidKeyCode::ControlRight
                | HidKeyCode::ShiftLeft
                | HidKeyCode::ShiftRight
                | HidKeyCode::AltLeft
                | HidKeyCode::AltRight
                | HidKeyCode::MetaLeft
                | HidKeyCode::MetaRight
        )
    }

    /// Returns the bit this key occupies in the report modifier byte, if it
    /// is a modifier key.
    ///
    /// HID orders the modifier byte exactly like the usage IDs 0xE0–0xE7, so
    /// the bit index is the distance from `ControlLeft`.
    pub fn modifier_bit(self) -> Option<u8> {
        if self.is_modifier() {
            Some(self.as_u8() - HidKeyCode::ControlLeft.as_u8())
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STANDARD_KEYS: &[(u8, HidKeyCode)] = &[
        (0x04, HidKeyCode::KeyA),
        (0x1E, HidKeyCode::Digit1),
        (0x27, HidKeyCode::Digit0),
        (0x28, HidKeyCode::Enter),
        (0x29, HidKeyCode::Escape),
        (0x2A, HidKeyCode::Backspace),
        (0x2C, HidKeyCode::Space),
        (0x3A, HidKeyCode::F1),
        (0x45, HidKeyCode::F12),
        (0x68, HidKeyCode::F13),
        (0x73, HidKeyCode::F24),
        (0x87, HidKeyCode::IntlRo),
        (0xE0, HidKeyCode::ControlLeft),
        (0xE7, HidKeyCode::MetaRight),
        (0xEF, HidKeyCode::MediaMute),
        (0xFB, HidKeyCode::MediaCalc),
    ];

    #[test]
    fn test_as_u8_returns_correct_hid_value_for_standard_keys() {
        for &(expected, code) in STANDARD_KEYS {
            assert_eq!(
                code.as_u8(),
                expected,
                "{code:?}.as_u8() should return 0x{expected:02X}"
            );
        }
    }

    #[test]
    fn test_unknown_code_is_zero() {
        assert_eq!(HidKeyCode::Unknown.as_u8(), 0x00);
    }

    #[test]
    fn test_modifier_bits_follow_boot_protocol_order() {
        // Arrange
        let expected = [
            (HidKeyCode::ControlLeft, 0),
            (HidKeyCode::ShiftLeft, 1),
            (HidKeyCode::AltLeft, 2),
            (HidKeyCode::MetaLeft, 3),
            (HidKeyCode::ControlRight, 4),
            (HidKeyCode::ShiftRight, 5),
            (HidKeyCode::AltRight, 6),
            (HidKeyCode::MetaRight, 7),
        ];

        for (key, bit) in expected {
            // Act / Assert
            assert!(key.is_modifier(), "{key:?} should be a modifier key");
            assert_eq!(key.modifier_bit(), Some(bit), "{key:?} bit");
        }
    }

    #[test]
    fn test_non_modifier_keys_have_no_modifier_bit() {
        for k in [
            HidKeyCode::KeyA,
            HidKeyCode::Enter,
            HidKeyCode::F1,
            HidKeyCode::MediaPlayPause,
            HidKeyCode::Unknown,
        ] {
            assert!(!k.is_modifier(), "{k:?} should NOT be a modifier key");
            assert_eq!(k.modifier_bit(), None);
        }
    }

    #[test]
    fn test_all_letter_keys_are_contiguous() {
        let letters = [
            HidKeyCode::KeyA, HidKeyCode::KeyB, HidKeyCode::KeyC, HidKeyCode::KeyD,
            HidKeyCode::KeyE, HidKeyCode::KeyF, HidKeyCode::KeyG, HidKeyCode::KeyH,
            HidKeyCode::KeyI, HidKeyCode::KeyJ, HidKeyCode::KeyK, HidKeyCode::KeyL,
            HidKeyCode::KeyM, HidKeyCode::KeyN, HidKeyCode::KeyO, HidKeyCode::KeyP,
            HidKeyCode::KeyQ, HidKeyCode::KeyR, HidKeyCode::KeyS, HidKeyCode::KeyT,
            HidKeyCode::KeyU, HidKeyCode::KeyV, HidKeyCode::KeyW, HidKeyCode::KeyX,
            HidKeyCode::KeyY, HidKeyCode::KeyZ,
        ];
        for (i, &letter) in letters.iter().enumerate() {
            assert_eq!(letter.as_u8(), 0x04 + i as u8, "{letter:?}");
        }
    }
}

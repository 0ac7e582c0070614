//! Key symbol to HID Usage ID translation table.
//!
//! A *symbol* is the string an input source produces for a key:
//!
//! - a single character for everything a terminal can type (`"a"`, `"!"`,
//!   `"\u{1}"` for Ctrl+A, `"\u{1b}"` for Escape);
//! - an upper-case name for keys that have no character (`"LEFTSHIFT"`,
//!   `"F1"`, `"BACKSPACE"`).  The names follow the Linux input naming
//!   without its `KEY_` prefix.
//!
//! This table maps *base* symbols only.  Shifted characters (`"!"`) and
//! control characters (`"\u{1}"`) are first normalised to their base symbol
//! by [`shift_base`] and [`ctrl_base`].

use super::hid::HidKeyCode;

/// Translates a base key symbol to a [`HidKeyCode`].
///
/// Returns [`HidKeyCode::Unknown`] if no mapping exists for `symbol`.
pub fn symbol_to_hid(symbol: &str) -> HidKeyCode {
    match symbol {
        // Letters
        "a" => HidKeyCode::KeyA,
        "b" => HidKeyCode::KeyB,
        "c" => HidKeyCode::KeyC,
        "d" => HidKeyCode::KeyD,
        "e" => HidKeyCode::KeyE,
        "f" => HidKeyCode::KeyF,
        "g" => HidKeyCode::KeyG,
        "h" => HidKeyCode::KeyH,
        "i" => HidKeyCode::KeyI,
        "j" => HidKeyCode::KeyJ,
        "k" => HidKeyCode::KeyK,
        "l" => HidKeyCode::KeyL,
        "m" => HidKeyCode::KeyM,
        "n" => HidKeyCode::KeyN,
        "o" => HidKeyCode::KeyO,
        "p" => HidKeyCode::KeyP,
        "q" => HidKeyCode::KeyQ,
        "r" => HidKeyCode::KeyR,
        "s" => HidKeyCode::KeyS,
        "t" => HidKeyCode::KeyT,
        "u" => HidKeyCode::KeyU,
        "v" => HidKeyCode::KeyV,
        "w" => HidKeyCode::KeyW,
        "x" => HidKeyCode::KeyX,
        "y" => HidKeyCode::KeyY,
        "z" => HidKeyCode::KeyZ,

        // Digits
        "1" => HidKeyCode::Digit1,
        "2" => HidKeyCode::Digit2,
        "3" => HidKeyCode::Digit3,
        "4" => HidKeyCode::Digit4,
        "5" => HidKeyCode::Digit5,
        "6" => HidKeyCode::Digit6,
        "7" => HidKeyCode::Digit7,
        "8" => HidKeyCode::Digit8,
        "9" => HidKeyCode::Digit9,
        "0" => HidKeyCode::Digit0,

        // Punctuation (unshifted forms)
        "-" | "MINUS" => HidKeyCode::Minus,
        "=" | "EQUAL" => HidKeyCode::Equal,
        "[" | "LEFTBRACE" => HidKeyCode::BracketLeft,
        "]" | "RIGHTBRACE" => HidKeyCode::BracketRight,
        "\\" | "BACKSLASH" => HidKeyCode::Backslash,
        ";" | "SEMICOLON" => HidKeyCode::Semicolon,
        "'" | "APOSTROPHE" => HidKeyCode::Quote,
        "`" | "GRAVE" => HidKeyCode::Backquote,
        "," | "COMMA" => HidKeyCode::Comma,
        "." | "DOT" => HidKeyCode::Period,
        "/" | "SLASH" => HidKeyCode::Slash,

        // Whitespace and editing
        " " | "SPACE" => HidKeyCode::Space,
        "\t" | "TAB" => HidKeyCode::Tab,
        "\n" | "\r" | "ENTER" => HidKeyCode::Enter,
        "\u{1b}" | "ESC" => HidKeyCode::Escape,
        "\u{7f}" | "BACKSPACE" => HidKeyCode::Backspace,
        "CAPSLOCK" => HidKeyCode::CapsLock,

        // Function keys
        "F1" => HidKeyCode::F1,
        "F2" => HidKeyCode::F2,
        "F3" => HidKeyCode::F3,
        "F4" => HidKeyCode::F4,
        "F5" => HidKeyCode::F5,
        "F6" => HidKeyCode::F6,
        "F7" => HidKeyCode::F7,
        "F8" => HidKeyCode::F8,
        "F9" => HidKeyCode::F9,
        "F10" => HidKeyCode::F10,
        "F11" => HidKeyCode::F11,
        "F12" => HidKeyCode::F12,
        "F13" => HidKeyCode::F13,
        "F14" => HidKeyCode::F14,
        "F15" => HidKeyCode::F15,
        "F16" => HidKeyCode::F16,
        "F17" => HidKeyCode::F17,
        "F18" => HidKeyCode::F18,
        "F19" => HidKeyCode::F19,
        "F20" => HidKeyCode::F20,
        "F21" => HidKeyCode::F21,
        "F22" => HidKeyCode::F22,
        "F23" => HidKeyCode::F23,
        "F24" => HidKeyCode::F24,

        // Navigation cluster
        "SYSRQ" => HidKeyCode::PrintScreen,
        "SCROLLLOCK" => HidKeyCode::ScrollLock,
        "PAUSE" => HidKeyCode::Pause,
        "INSERT" => HidKeyCode::Insert,
        "HOME" => HidKeyCode::Home,
        "PAGEUP" => HidKeyCode::PageUp,
        "DELETE" => HidKeyCode::Delete,
        "END" => HidKeyCode::End,
        "PAGEDOWN" => HidKeyCode::PageDown,
        "RIGHT" => HidKeyCode::ArrowRight,
        "LEFT" => HidKeyCode::ArrowLeft,
        "DOWN" => HidKeyCode::ArrowDown,
        "UP" => HidKeyCode::ArrowUp,

        // Numpad
        "NUMLOCK" => HidKeyCode::NumLock,
        "KPSLASH" => HidKeyCode::NumpadDivide,
        "KPASTERISK" => HidKeyCode::NumpadMultiply,
        "KPMINUS" => HidKeyCode::NumpadSubtract,
        "KPPLUS" => HidKeyCode::NumpadAdd,
        "KPENTER" => HidKeyCode::NumpadEnter,
        "KP1" => HidKeyCode::Numpad1,
        "KP2" => HidKeyCode::Numpad2,
        "KP3" => HidKeyCode::Numpad3,
        "KP4" => HidKeyCode::Numpad4,
        "KP5" => HidKeyCode::Numpad5,
        "KP6" => HidKeyCode::Numpad6,
        "KP7" => HidKeyCode::Numpad7,
        "KP8" => HidKeyCode::Numpad8,
        "KP9" => HidKeyCode::Numpad9,
        "KP0" => HidKeyCode::Numpad0,
        "KPDOT" => HidKeyCode::NumpadDecimal,
        "KPEQUAL" => HidKeyCode::NumpadEqual,
        "KPCOMMA" => HidKeyCode::NumpadComma,
        "KPJPCOMMA" => HidKeyCode::NumpadJpComma,

        // ISO, application and power
        "102ND" => HidKeyCode::IntlBackslash,
        "COMPOSE" | "MENU" => HidKeyCode::ContextMenu,
        "POWER" => HidKeyCode::Power,
        "OPEN" => HidKeyCode::Open,
        "HELP" => HidKeyCode::Help,
        "PROPS" => HidKeyCode::Props,
        "FRONT" => HidKeyCode::Front,
        "AGAIN" => HidKeyCode::Again,
        "UNDO" => HidKeyCode::Undo,
        "CUT" => HidKeyCode::Cut,
        "COPY" => HidKeyCode::Copy,
        "PASTE" => HidKeyCode::Paste,

        // International
        "RO" => HidKeyCode::IntlRo,
        "KATAKANAHIRAGANA" => HidKeyCode::KanaMode,
        "YEN" => HidKeyCode::IntlYen,
        "HENKAN" => HidKeyCode::Convert,
        "MUHENKAN" => HidKeyCode::NonConvert,
        "HANGEUL" => HidKeyCode::Lang1,
        "HANJA" => HidKeyCode::Lang2,
        "KATAKANA" => HidKeyCode::Lang3,
        "HIRAGANA" => HidKeyCode::Lang4,
        "ZENKAKUHANKAKU" => HidKeyCode::Lang5,

        // Modifiers
        "LEFTCTRL" => HidKeyCode::ControlLeft,
        "LEFTSHIFT" => HidKeyCode::ShiftLeft,
        "LEFTALT" => HidKeyCode::AltLeft,
        "LEFTMETA" => HidKeyCode::MetaLeft,
        "RIGHTCTRL" => HidKeyCode::ControlRight,
        "RIGHTSHIFT" => HidKeyCode::ShiftRight,
        "RIGHTALT" => HidKeyCode::AltRight,
        "RIGHTMETA" => HidKeyCode::MetaRight,

        // Media and browser keys
        "PLAYPAUSE" => HidKeyCode::MediaPlayPause,
        "STOPCD" => HidKeyCode::MediaStopCd,
        "PREVIOUSSONG" => HidKeyCode::MediaPrevious,
        "NEXTSONG" => HidKeyCode::MediaNext,
        "EJECTCD" => HidKeyCode::MediaEjectCd,
        "VOLUMEUP" => HidKeyCode::MediaVolumeUp,
        "VOLUMEDOWN" => HidKeyCode::MediaVolumeDown,
        "MUTE" => HidKeyCode::MediaMute,
        "WWW" => HidKeyCode::MediaWww,
        "BACK" => HidKeyCode::MediaBack,
        "FORWARD" => HidKeyCode::MediaForward,
        "STOP" => HidKeyCode::MediaStop,
        "FIND" => HidKeyCode::MediaFind,
        "SCROLLUP" => HidKeyCode::MediaScrollUp,
        "SCROLLDOWN" => HidKeyCode::MediaScrollDown,
        "EDIT" => HidKeyCode::MediaEdit,
        "SLEEP" => HidKeyCode::MediaSleep,
        "COFFEE" => HidKeyCode::MediaCoffee,
        "REFRESH" => HidKeyCode::MediaRefresh,
        "CALC" => HidKeyCode::MediaCalc,

        _ => HidKeyCode::Unknown,
    }
}

/// Returns the unshifted base symbol for a symbol that can only be typed
/// with Shift held (`"!"` → `"1"`), or `None`.
///
/// Upper-case letters are not listed; callers lower-case them directly.
pub fn shift_base(symbol: &str) -> Option<&'static str> {
    let base = match symbol {
        "!" => "1",
        "@" => "2",
        "#" => "3",
        "$" => "4",
        "%" => "5",
        "^" => "6",
        "&" => "7",
        "*" => "8",
        "(" => "9",
        ")" => "0",
        "_" => "-",
        "+" => "=",
        "{" => "[",
        "}" => "]",
        "|" => "\\",
        ":" => ";",
        "\"" => "'",
        "~" => "`",
        "<" => ",",
        ">" => ".",
        "?" => "/",
        "BACKTAB" => "\t",
        _ => return None,
    };
    Some(base)
}

const LETTERS: [&str; 26] = [
    "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l", "m", "n", "o", "p", "q", "r",
    "s", "t", "u", "v", "w", "x", "y", "z",
];

/// Returns the letter a control character was typed with (`"\u{1}"` → `"a"`),
/// or `None`.
///
/// Tab (0x09), line feed (0x0A) and carriage return (0x0D) are keys in their
/// own right and are not normalised.
pub fn ctrl_base(symbol: &str) -> Option<&'static str> {
    let mut chars = symbol.chars();
    let (Some(c), None) = (chars.next(), chars.next()) else {
        return None;
    };
    match c as u32 {
        0x09 | 0x0A | 0x0D => None,
        code @ 0x01..=0x1A => Some(LETTERS[(code - 1) as usize]),
        _ => None,
    }
}

//! Linux input key code (`KEY_*`, `linux/input-event-codes.h`) to key symbol
//! translation table.
//!
//! Raw keyboards report physical keys as Linux key codes.  The event loop
//! works in key symbols, so device events are translated here before they
//! reach [`KeyMap`](super::KeyMap).
//!
//! Letters and digits translate to their lower-case character so they share
//! a path with terminal input; every other key translates to its `KEY_*`
//! name without the prefix.
//!
//! # How this table works
//!
//! `KEYCODE_TABLE` is a compile-time array of 256 symbols indexed by key code,
//! with `""` marking codes that have no symbol.  Lookup is a single index.

/// Translates a Linux key code to a key symbol.
///
/// Returns `None` for codes with no symbol, including every code above 255
/// (mouse buttons live at 0x110 and up and are handled separately).
pub fn keycode_to_symbol(code: u16) -> Option<&'static str> {
    let symbol = *KEYCODE_TABLE.get(code as usize)?;
    if symbol.is_empty() {
        None
    } else {
        Some(symbol)
    }
}

/// Linux key code → symbol table indexed by key code (0x00–0xFF).
const KEYCODE_TABLE: [&str; 256] = {
    let mut t = [""; 256];

    // ── Top row ──────────────────────────────────────────────────────────────
    t[1] = "ESC";
    t[2] = "1";
    t[3] = "2";
    t[4] = "3";
    t[5] = "4";
    t[6] = "5";
    t[7] = "6";
    t[8] = "7";
    t[9] = "8";
    t[10] = "9";
    t[11] = "0";
    t[12] = "MINUS";
    t[13] = "EQUAL";
    t[14] = "BACKSPACE";
    t[15] = "TAB";

    // ── Letters (QWERTY rows) ────────────────────────────────────────────────
    t[16] = "q";
    t[17] = "w";
    t[18] = "e";
    t[19] = "r";
    t[20] = "t";
    t[21] = "y";
    t[22] = "u";
    t[23] = "i";
    t[24] = "o";
    t[25] = "p";
    t[26] = "LEFTBRACE";
    t[27] = "RIGHTBRACE";
    t[28] = "ENTER";
    t[29] = "LEFTCTRL";
    t[30] = "a";
    t[31] = "s";
    t[32] = "d";
    t[33] = "f";
    t[34] = "g";
    t[35] = "h";
    t[36] = "j";
    t[37] = "k";
    t[38] = "l";
    t[39] = "SEMICOLON";
    t[40] = "APOSTROPHE";
    t[41] = "GRAVE";
    t[42] = "LEFTSHIFT";
    t[43] = "BACKSLASH";
    t[44] = "z";
    t[45] = "x";
    t[46] = "c";
    t[47] = "v";
    t[48] = "b";
    t[49] = "n";
    t[50] = "m";
    t[51] = "COMMA";
    t[52] = "DOT";
    t[53] = "SLASH";
    t[54] = "RIGHTSHIFT";
    t[55] = "KPASTERISK";
    t[56] = "LEFTALT";
    t[57] = "SPACE";
    t[58] = "CAPSLOCK";

    // ── Function keys F1–F10 ─────────────────────────────────────────────────
    t[59] = "F1";
    t[60] = "F2";
    t[61] = "F3";
    t[62] = "F4";
    t[63] = "F5";
    t[64] = "F6";
    t[65] = "F7";
    t[66] = "F8";
    t[67] = "F9";
    t[68] = "F10";

    // ── Numpad ───────────────────────────────────────────────────────────────
    t[69] = "NUMLOCK";
    t[70] = "SCROLLLOCK";
    t[71] = "KP7";
    t[72] = "KP8";
    t[73] = "KP9";
    t[74] = "KPMINUS";
    t[75] = "KP4";
    t[76] = "KP5";
    t[77] = "KP6";
    t[78] = "KPPLUS";
    t[79] = "KP1";
    t[80] = "KP2";
    t[81] = "KP3";
    t[82] = "KP0";
    t[83] = "KPDOT";

    // ── ISO / international / F11–F12 ────────────────────────────────────────
    t[85] = "ZENKAKUHANKAKU";
    t[86] = "102ND";
    t[87] = "F11";
    t[88] = "F12";
    t[89] = "RO";
    t[90] = "KATAKANA";
    t[91] = "HIRAGANA";
    t[92] = "HENKAN";
    t[93] = "KATAKANAHIRAGANA";
    t[94] = "MUHENKAN";
    t[95] = "KPJPCOMMA";
    t[96] = "KPENTER";
    t[97] = "RIGHTCTRL";
    t[98] = "KPSLASH";
    t[99] = "SYSRQ";
    t[100] = "RIGHTALT";

    // ── Navigation cluster ───────────────────────────────────────────────────
    t[102] = "HOME";
    t[103] = "UP";
    t[104] = "PAGEUP";
    t[105] = "LEFT";
    t[106] = "RIGHT";
    t[107] = "END";
    t[108] = "DOWN";
    t[109] = "PAGEDOWN";
    t[110] = "INSERT";
    t[111] = "DELETE";

    // ── Volume, power, misc ──────────────────────────────────────────────────
    t[113] = "MUTE";
    t[114] = "VOLUMEDOWN";
    t[115] = "VOLUMEUP";
    t[116] = "POWER";
    t[117] = "KPEQUAL";
    t[119] = "PAUSE";
    t[121] = "KPCOMMA";
    t[122] = "HANGEUL";
    t[123] = "HANJA";
    t[124] = "YEN";
    t[125] = "LEFTMETA";
    t[126] = "RIGHTMETA";
    t[127] = "COMPOSE";

    // ── Editing / application keys ───────────────────────────────────────────
    t[128] = "STOP";
    t[129] = "AGAIN";
    t[130] = "PROPS";
    t[131] = "UNDO";
    t[132] = "FRONT";
    t[133] = "COPY";
    t[134] = "OPEN";
    t[135] = "PASTE";
    t[136] = "FIND";
    t[137] = "CUT";
    t[138] = "HELP";
    t[140] = "CALC";
    t[142] = "SLEEP";
    t[150] = "WWW";
    t[152] = "COFFEE";
    t[158] = "BACK";
    t[159] = "FORWARD";

    // ── Media ────────────────────────────────────────────────────────────────
    t[161] = "EJECTCD";
    t[163] = "NEXTSONG";
    t[164] = "PLAYPAUSE";
    t[165] = "PREVIOUSSONG";
    t[166] = "STOPCD";
    t[173] = "REFRESH";
    t[176] = "EDIT";
    t[177] = "SCROLLUP";
    t[178] = "SCROLLDOWN";

    // ── Function keys F13–F24 ────────────────────────────────────────────────
    t[183] = "F13";
    t[184] = "F14";
    t[185] = "F15";
    t[186] = "F16";
    t[187] = "F17";
    t[188] = "F18";
    t[189] = "F19";
    t[190] = "F20";
    t[191] = "F21";
    t[192] = "F22";
    t[193] = "F23";
    t[194] = "F24";

    t
};

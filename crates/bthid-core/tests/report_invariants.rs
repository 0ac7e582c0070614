//! Integration tests for the bthid-core public API.
//!
//! These tests exercise the key map, key state and report encoding together,
//! checking the properties every report must satisfy regardless of input.

use std::collections::HashSet;

use bthid_core::{
    domain::linux_input::from_linux_event, HidKeyCode, InputEvent, KeyMap, KeyState,
    KeyboardReport, CTRL_BIT, SHIFT_BIT,
};

/// Linear congruential generator with a fixed seed per test.
struct Lcg(u64);

impl Lcg {
    fn next(&mut self) -> u64 {
        self.0 = self
            .0
            .wrapping_mul(6364136223846793005)
            .wrapping_add(1442695040888963407);
        self.0 >> 33
    }
}

fn assert_report_shape(report: &KeyboardReport) {
    let bytes = report.as_bytes();
    assert_eq!(bytes.len(), 10);
    assert_eq!(bytes[0], 0xA1);
    assert_eq!(bytes[1], 0x01);
    assert_eq!(bytes[3], 0x00);

    let keys = &bytes[4..];
    let nonzero: Vec<u8> = keys.iter().copied().filter(|&k| k != 0).collect();
    let unique: HashSet<u8> = nonzero.iter().copied().collect();
    assert_eq!(nonzero.len(), unique.len(), "duplicate key in {keys:?}");

    // Padding only trails the pressed keys.
    let used = nonzero.len();
    assert!(keys[used..].iter().all(|&k| k == 0), "gap in {keys:?}");
}

#[test]
fn test_usage_code_is_total_over_single_characters() {
    for cp in 0u32..0x3000 {
        if let Some(c) = char::from_u32(cp) {
            // Must not panic; any u8 is a valid answer.
            let _ = KeyMap::usage_code(&c.to_string());
        }
    }
}

#[test]
fn test_shift_round_trip() {
    assert_eq!(KeyMap::usage_code("!"), KeyMap::usage_code("1"));
    assert_eq!(KeyMap::modifier_bit("!"), Some(SHIFT_BIT));
    assert_eq!(KeyMap::modifier_bit("A"), Some(SHIFT_BIT));
}

#[test]
fn test_ctrl_round_trip() {
    assert_eq!(KeyMap::usage_code("\u{1}"), KeyMap::usage_code("a"));
    assert_eq!(KeyMap::modifier_bit("\u{1}"), Some(CTRL_BIT));
}

#[test]
fn test_report_shape_holds_for_random_press_release_sequences() {
    // Arrange
    let mut rng = Lcg(0x5EED);
    let keys: Vec<HidKeyCode> = "abcdefghij"
        .chars()
        .map(|c| KeyMap::lookup(&c.to_string()))
        .collect();
    let mut state = KeyState::new();

    // Act / Assert
    for _ in 0..5_000 {
        let key = keys[(rng.next() % keys.len() as u64) as usize];
        match rng.next() % 3 {
            0 => state.release(key),
            1 => state.set_modifier((rng.next() % 8) as u8, rng.next() % 2 == 0),
            _ => state.press(key),
        }
        assert_report_shape(&state.report());
    }
}

#[test]
fn test_seven_keys_keep_the_six_most_recent() {
    let mut state = KeyState::new();
    let keys: Vec<HidKeyCode> = "abcdefg"
        .chars()
        .map(|c| KeyMap::lookup(&c.to_string()))
        .collect();

    for &key in &keys {
        state.press(key);
    }

    let report = state.report();
    let reported: Vec<u8> = report.keys().to_vec();
    assert!(reported.contains(&HidKeyCode::KeyG.as_u8()));
    assert!(!reported.contains(&HidKeyCode::KeyA.as_u8()));
    assert_eq!(reported.iter().filter(|&&k| k != 0).count(), 6);
}

#[test]
fn test_linux_key_stream_produces_expected_report() {
    // KEY_A down, KEY_LEFTSHIFT down, KEY_B down, KEY_A up
    let raw = [(1u16, 30u16, 1i32), (1, 42, 1), (1, 48, 1), (1, 30, 0)];
    let mut state = KeyState::new();

    for (ev_type, code, value) in raw {
        let Some(InputEvent::Key { symbol, pressed }) = from_linux_event(ev_type, code, value)
        else {
            panic!("expected a key event for code {code}");
        };
        let r = KeyMap::resolve(&symbol);
        if r.is_modifier_key {
            if let Some(bit) = r.modifier {
                state.set_modifier(bit, pressed);
            }
        } else if pressed {
            state.press(r.usage);
        } else {
            state.release(r.usage);
        }
    }

    let report = state.report();
    assert_eq!(report.modifiers(), 1 << SHIFT_BIT);
    assert_eq!(report.keys(), &[HidKeyCode::KeyB.as_u8(), 0, 0, 0, 0, 0]);
}

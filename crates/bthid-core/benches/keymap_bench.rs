//! Criterion benchmarks for key symbol resolution.
//!
//! Every captured key event goes through [`KeyMap::resolve`] and every raw
//! device key through the Linux key code table, so both sit on the hot path.
//!
//! Run with:
//! ```bash
//! cargo bench --package bthid-core --bench keymap_bench
//! ```

use bthid_core::keymap::KeyMap;
use bthid_core::state::KeyState;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

// ── Representative symbols ────────────────────────────────────────────────────

/// Plain, shifted, control and named symbols, plus one miss.
const BENCH_SYMBOLS: &[&str] = &[
    "a", "z", "A", "1", "!", "?", "\u{1}", "\u{1b}", "\t", "\n", " ", "LEFTSHIFT",
    "KEY_RIGHTMETA", "F12", "BACKSPACE", "PAGEDOWN", "KP7", "VOLUMEUP", "NOSUCHKEY",
];

/// Linux key codes for common keys, plus one unassigned code.
const BENCH_KEYCODES: &[u16] = &[
    30, 44, 2, 11, 28, 14, 15, 57, 42, 29, 56, 125, 59, 88, 103, 108, 113, 84,
];

// ── Benchmarks: symbol resolution ─────────────────────────────────────────────

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_resolve");

    for symbol in ["a", "!", "LEFTSHIFT", "NOSUCHKEY"] {
        group.bench_with_input(BenchmarkId::new("resolve", symbol), symbol, |b, s| {
            b.iter(|| KeyMap::resolve(black_box(s)))
        });
    }

    group.bench_function("resolve_batch_19", |b| {
        b.iter(|| {
            BENCH_SYMBOLS
                .iter()
                .map(|s| KeyMap::resolve(black_box(s)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

// ── Benchmarks: Linux key code table ──────────────────────────────────────────

fn bench_linux_keycode(c: &mut Criterion) {
    let mut group = c.benchmark_group("keymap_linux");

    group.bench_function("keycode_to_symbol_single", |b| {
        b.iter(|| KeyMap::linux_keycode_to_symbol(black_box(30)))
    });

    group.bench_function("keycode_to_symbol_batch_18", |b| {
        b.iter(|| {
            BENCH_KEYCODES
                .iter()
                .map(|&code| KeyMap::linux_keycode_to_symbol(black_box(code)))
                .collect::<Vec<_>>()
        })
    });

    group.finish();
}

// ── Benchmarks: full key press → report ───────────────────────────────────────

fn bench_press_to_report(c: &mut Criterion) {
    c.bench_function("press_release_report", |b| {
        b.iter(|| {
            let mut state = KeyState::new();
            for symbol in ["a", "s", "d", "f"] {
                state.press(KeyMap::resolve(black_box(symbol)).usage);
            }
            state.release(KeyMap::resolve(black_box("s")).usage);
            state.report()
        })
    });
}

criterion_group!(benches, bench_resolve, bench_linux_keycode, bench_press_to_report);
criterion_main!(benches);

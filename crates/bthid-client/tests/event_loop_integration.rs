//! Integration tests for the input-to-report pipeline.
//!
//! These tests drive `EventLoop` end-to-end through the public API: raw
//! device events or terminal key events in, recorded HID report bytes out.

use std::collections::VecDeque;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use bthid_client::application::device_waiter::DeviceOpener;
use bthid_client::application::event_loop::{EventLoop, EventLoopConfig, LoopState};
use bthid_client::application::report_sink::ReportSink;
use bthid_client::infrastructure::input_source::device::DeviceSource;
use bthid_client::infrastructure::input_source::mock::ScriptedSource;
use bthid_client::infrastructure::input_source::terminal::{
    translate, TerminalConfig, TerminalInput,
};
use bthid_client::infrastructure::input_source::{DeviceHandle, RawEvent};
use bthid_client::infrastructure::report_sink::mock::RecordingSink;
use bthid_core::{InputEvent, SHIFT_BIT};
use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio_test::assert_ok;

// ── Helpers ───────────────────────────────────────────────────────────────────

const EV_SYN: u16 = 0x00;
const EV_KEY: u16 = 0x01;
const EV_REL: u16 = 0x02;
const REL_X: u16 = 0x00;

const KEY_A: u16 = 30;
const KEY_B: u16 = 48;
const KEY_LEFTSHIFT: u16 = 42;

/// A device node replaying a fixed queue of raw events.
struct ReplayDevice {
    queue: VecDeque<RawEvent>,
    unplugged: bool,
}

impl ReplayDevice {
    fn new(events: &[(u16, u16, i32)]) -> Self {
        Self {
            queue: events
                .iter()
                .map(|&(t, c, v)| RawEvent::new(t, c, v))
                .collect(),
            unplugged: false,
        }
    }

    /// A device whose node has gone away: every read fails with ENODEV.
    fn unplugged() -> Self {
        Self {
            queue: VecDeque::new(),
            unplugged: true,
        }
    }
}

impl DeviceHandle for ReplayDevice {
    fn read_one(&mut self) -> io::Result<Option<RawEvent>> {
        if self.unplugged {
            return Err(io::Error::from_raw_os_error(19));
        }
        Ok(self.queue.pop_front())
    }
}

/// An opener for nodes that never come back.
struct GoneForGood;

impl DeviceOpener for GoneForGood {
    type Device = ReplayDevice;

    fn open(&self, _path: &Path) -> io::Result<ReplayDevice> {
        Err(io::Error::from(io::ErrorKind::NotFound))
    }
}

fn device_source(devices: Vec<ReplayDevice>) -> Box<DeviceSource<GoneForGood>> {
    let devices = devices
        .into_iter()
        .enumerate()
        .map(|(i, d)| (PathBuf::from(format!("/dev/input/event{i}")), d))
        .collect();
    let source = DeviceSource::new(GoneForGood, Duration::from_secs(3), devices)
        .expect("at least one device");
    Box::new(source)
}

fn event_loop_with(
    source: Box<dyn bthid_client::application::input_source::InputSource>,
) -> (EventLoop, Arc<RecordingSink>) {
    let sink = Arc::new(RecordingSink::new());
    let shared: Arc<dyn ReportSink> = sink.clone();
    (
        EventLoop::new(source, shared, EventLoopConfig::default()),
        sink,
    )
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn test_device_keys_with_shift_produce_most_recent_first_report() {
    // Arrange: a, LEFTSHIFT, b pressed; a released.  Sync frames in between.
    let device = ReplayDevice::new(&[
        (EV_KEY, KEY_A, 1),
        (EV_SYN, 0, 0),
        (EV_KEY, KEY_LEFTSHIFT, 1),
        (EV_SYN, 0, 0),
        (EV_KEY, KEY_B, 1),
        (EV_KEY, KEY_B, 2), // auto-repeat, ignored
        (EV_SYN, 0, 0),
        (EV_KEY, KEY_A, 0),
        (EV_SYN, 0, 0),
    ]);
    let (mut event_loop, sink) = event_loop_with(device_source(vec![device]));

    // Act
    for _ in 0..4 {
        assert!(assert_ok!(event_loop.step().await));
    }

    // Assert
    let reports = sink.keyboard_reports();
    assert_eq!(reports.len(), 4);
    assert_eq!(
        reports[2],
        vec![0xA1, 0x01, 1 << SHIFT_BIT, 0x00, 0x05, 0x04, 0, 0, 0, 0]
    );
    assert_eq!(
        reports[3],
        vec![0xA1, 0x01, 1 << SHIFT_BIT, 0x00, 0x05, 0, 0, 0, 0, 0]
    );
    assert_eq!(event_loop.state(), LoopState::Active);
}

#[tokio::test]
async fn test_terminal_uppercase_letter_sends_shift_plus_base_key() {
    // Arrange: Shift+A as crossterm delivers it.
    let key = Event::Key(KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT));
    let event = match translate(&key, &TerminalConfig::default()) {
        Some(TerminalInput::Event(event)) => event,
        other => panic!("expected a key event, got {other:?}"),
    };
    assert_eq!(event, InputEvent::key_down("A"));
    let (mut event_loop, sink) = event_loop_with(Box::new(ScriptedSource::terminal([event])));

    // Act
    assert_ok!(event_loop.run().await);

    // Assert: startup reset, the key, then the reset before the next read.
    let empty = vec![0xA1, 0x01, 0, 0, 0, 0, 0, 0, 0, 0];
    assert_eq!(
        sink.keyboard_reports(),
        vec![
            empty.clone(),
            vec![0xA1, 0x01, 1 << SHIFT_BIT, 0x00, 0x04, 0, 0, 0, 0, 0],
            empty,
        ]
    );
    assert_eq!(event_loop.state(), LoopState::Idle);
}

#[tokio::test]
async fn test_fast_relative_motion_is_clamped_to_one_byte() {
    // Arrange: REL_X of -424 is the raw 10-bit delta 600.
    let device = ReplayDevice::new(&[(EV_REL, REL_X, -424), (EV_SYN, 0, 0)]);
    let (mut event_loop, sink) = event_loop_with(device_source(vec![device]));

    // Act
    assert!(assert_ok!(event_loop.step().await));

    // Assert
    assert_eq!(sink.mouse_reports(), vec![vec![0xA1, 0x03, 0x00, 129, 0x00]]);
}

#[tokio::test]
async fn test_unplugged_device_does_not_end_the_session() {
    // Arrange: the first device is gone, the keyboard still has a key.
    let kbd = ReplayDevice::new(&[(EV_KEY, KEY_A, 1), (EV_SYN, 0, 0)]);
    let (mut event_loop, sink) =
        event_loop_with(device_source(vec![ReplayDevice::unplugged(), kbd]));

    // Act
    let kept_running = assert_ok!(event_loop.step().await);
    let still_running = assert_ok!(event_loop.step().await);

    // Assert
    assert!(kept_running);
    assert!(still_running);
    assert_eq!(
        sink.keyboard_reports(),
        vec![vec![0xA1, 0x01, 0x00, 0x00, 0x04, 0, 0, 0, 0, 0]]
    );
}

#[tokio::test]
async fn test_shutdown_releases_everything_on_the_host() {
    // Arrange
    let source = ScriptedSource::device([
        InputEvent::key_down("LEFTCTRL"),
        InputEvent::key_down("c"),
        InputEvent::Button {
            button: bthid_core::MouseButton::Left,
            pressed: true,
        },
    ]);
    let (mut event_loop, sink) = event_loop_with(Box::new(source));
    assert_ok!(event_loop.run().await);
    assert_eq!(event_loop.state(), LoopState::Active);

    // Act
    event_loop.shutdown().await;

    // Assert
    let keyboard = sink.keyboard_reports();
    let mouse = sink.mouse_reports();
    assert_eq!(
        keyboard.last(),
        Some(&vec![0xA1, 0x01, 0, 0, 0, 0, 0, 0, 0, 0])
    );
    assert_eq!(mouse.last(), Some(&vec![0xA1, 0x03, 0, 0, 0]));
    assert_eq!(event_loop.state(), LoopState::Idle);
}

#[tokio::test]
async fn test_switch_hotkey_reaches_the_sink() {
    // Arrange
    let f12 = Event::Key(KeyEvent::new(KeyCode::F(12), KeyModifiers::NONE));
    let event = match translate(&f12, &TerminalConfig::default()) {
        Some(TerminalInput::Event(event)) => event,
        other => panic!("expected a switch event, got {other:?}"),
    };
    let (mut event_loop, sink) = event_loop_with(Box::new(ScriptedSource::terminal([event])));

    // Act
    assert_ok!(event_loop.run().await);

    // Assert
    assert_eq!(sink.host_switches(), 1);
}

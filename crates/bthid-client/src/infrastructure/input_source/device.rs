//! Fan-in over one or more raw input devices.
//!
//! Devices are polled round-robin, starting with the device after the one
//! that produced the previous event, so a busy mouse cannot starve a
//! keyboard.  Raw events that carry nothing for a report (sync frames, scan
//! codes, key repeats) are skipped while draining a device.
//!
//! # Unplugged devices
//!
//! A read error takes only that device out of the rotation; the others keep
//! being polled.  The lost device is reopened through its [`DeviceOpener`]
//! every `retry_interval` until its node comes back, so unplugging and
//! replugging a keyboard mid-session needs no restart.

use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;
use bthid_core::domain::linux_input::from_linux_event;
use bthid_core::InputEvent;
use tokio::time::Instant;
use tracing::{debug, info, trace, warn};

use super::DeviceHandle;
use crate::application::device_waiter::DeviceOpener;
use crate::application::input_source::{InputSource, SourceError};

/// One device node and its handle, if currently open.
struct Slot<H> {
    path: PathBuf,
    handle: Option<H>,
    /// Earliest time to try reopening a lost device.
    retry_at: Instant,
}

/// [`InputSource`] reading from a set of device handles.
pub struct DeviceSource<O: DeviceOpener> {
    opener: O,
    slots: Vec<Slot<O::Device>>,
    /// Index of the device to poll first.
    next: usize,
    retry_interval: Duration,
}

impl<O> DeviceSource<O>
where
    O: DeviceOpener,
    O::Device: DeviceHandle,
{
    /// Wraps already-open `devices`, each paired with the node it came from.
    ///
    /// Returns `None` when `devices` is empty: a device source always has
    /// at least one device.
    pub fn new(
        opener: O,
        retry_interval: Duration,
        devices: Vec<(PathBuf, O::Device)>,
    ) -> Option<Self> {
        if devices.is_empty() {
            return None;
        }
        let now = Instant::now();
        let slots = devices
            .into_iter()
            .map(|(path, handle)| Slot {
                path,
                handle: Some(handle),
                retry_at: now,
            })
            .collect();
        Some(Self {
            opener,
            slots,
            next: 0,
            retry_interval,
        })
    }

    pub fn device_count(&self) -> usize {
        self.slots.len()
    }

    /// Number of devices currently open.
    pub fn open_count(&self) -> usize {
        self.slots.iter().filter(|s| s.handle.is_some()).count()
    }

    /// Polls every device once, starting at `self.next`.
    fn poll(&mut self) -> Option<InputEvent> {
        let now = Instant::now();
        let count = self.slots.len();
        for offset in 0..count {
            let index = (self.next + offset) % count;
            let slot = &mut self.slots[index];

            if slot.handle.is_none() && now >= slot.retry_at {
                match self.opener.open(&slot.path) {
                    Ok(handle) => {
                        info!("input device {} is back", slot.path.display());
                        slot.handle = Some(handle);
                    }
                    Err(e) => {
                        debug!("still waiting for {}: {e}", slot.path.display());
                        slot.retry_at = now + self.retry_interval;
                    }
                }
            }

            let Some(handle) = slot.handle.as_mut() else {
                continue;
            };
            loop {
                match handle.read_one() {
                    Ok(Some(raw)) => {
                        if let Some(event) = from_linux_event(raw.ev_type, raw.code, raw.value) {
                            self.next = (index + 1) % count;
                            return Some(event);
                        }
                        trace!(device = index, ?raw, "skipping raw event");
                    }
                    Ok(None) => break,
                    Err(e) => {
                        warn!(
                            "lost input device {}: {e}; retrying every {:?}",
                            slot.path.display(),
                            self.retry_interval
                        );
                        slot.handle = None;
                        slot.retry_at = now + self.retry_interval;
                        break;
                    }
                }
            }
        }
        None
    }
}

#[async_trait]
impl<O> InputSource for DeviceSource<O>
where
    O: DeviceOpener + Send,
    O::Device: DeviceHandle,
{
    async fn next_event(&mut self) -> Result<Option<InputEvent>, SourceError> {
        Ok(self.poll())
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::input_source::RawEvent;
    use bthid_core::{Axis, MouseButton};
    use std::collections::VecDeque;
    use std::io;
    use std::path::Path;
    use std::sync::Mutex;

    const EV_SYN: u16 = 0x00;
    const EV_KEY: u16 = 0x01;
    const EV_REL: u16 = 0x02;

    /// A device with a fixed queue of raw events.
    struct FakeDevice {
        queue: VecDeque<RawEvent>,
        fail: bool,
    }

    impl FakeDevice {
        fn with(events: &[(u16, u16, i32)]) -> Self {
            Self {
                queue: events
                    .iter()
                    .map(|&(t, c, v)| RawEvent::new(t, c, v))
                    .collect(),
                fail: false,
            }
        }

        fn unplugged() -> Self {
            Self {
                queue: VecDeque::new(),
                fail: true,
            }
        }
    }

    impl DeviceHandle for FakeDevice {
        fn read_one(&mut self) -> io::Result<Option<RawEvent>> {
            if self.fail {
                return Err(io::Error::from_raw_os_error(19)); // ENODEV
            }
            Ok(self.queue.pop_front())
        }
    }

    /// Hands out queued replacement devices; `NotFound` once they run out.
    #[derive(Default)]
    struct FakeOpener {
        spares: Mutex<VecDeque<FakeDevice>>,
    }

    impl FakeOpener {
        fn with_spare(device: FakeDevice) -> Self {
            Self {
                spares: Mutex::new(VecDeque::from([device])),
            }
        }
    }

    impl DeviceOpener for FakeOpener {
        type Device = FakeDevice;

        fn open(&self, _path: &Path) -> io::Result<FakeDevice> {
            self.spares
                .lock()
                .expect("lock poisoned")
                .pop_front()
                .ok_or_else(|| io::Error::from(io::ErrorKind::NotFound))
        }
    }

    fn source_of(devices: Vec<FakeDevice>) -> DeviceSource<FakeOpener> {
        source_with(FakeOpener::default(), Duration::from_secs(3600), devices)
    }

    fn source_with(
        opener: FakeOpener,
        retry_interval: Duration,
        devices: Vec<FakeDevice>,
    ) -> DeviceSource<FakeOpener> {
        let devices = devices
            .into_iter()
            .enumerate()
            .map(|(i, d)| (PathBuf::from(format!("/dev/input/event{i}")), d))
            .collect();
        DeviceSource::new(opener, retry_interval, devices).expect("non-empty device list")
    }

    #[tokio::test]
    async fn test_translates_key_events_and_skips_sync_frames() {
        // Arrange
        let kbd = FakeDevice::with(&[(EV_KEY, 30, 1), (EV_SYN, 0, 0), (EV_KEY, 30, 0)]);
        let mut source = source_of(vec![kbd]);

        // Act / Assert
        assert_eq!(
            source.next_event().await.unwrap(),
            Some(InputEvent::key_down("a"))
        );
        assert_eq!(
            source.next_event().await.unwrap(),
            Some(InputEvent::key_up("a"))
        );
        assert_eq!(source.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_key_repeat_is_skipped() {
        let kbd = FakeDevice::with(&[(EV_KEY, 30, 2), (EV_KEY, 30, 2)]);
        let mut source = source_of(vec![kbd]);

        assert_eq!(source.next_event().await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_round_robin_alternates_between_devices() {
        // Arrange: both devices have two pending events
        let kbd = FakeDevice::with(&[(EV_KEY, 30, 1), (EV_KEY, 48, 1)]);
        let mouse = FakeDevice::with(&[(EV_REL, 0, 3), (EV_KEY, 0x110, 1)]);
        let mut source = source_of(vec![kbd, mouse]);

        // Act
        let mut events = Vec::new();
        while let Some(event) = source.next_event().await.unwrap() {
            events.push(event);
        }

        // Assert
        assert_eq!(
            events,
            vec![
                InputEvent::key_down("a"),
                InputEvent::Motion {
                    axis: Axis::X,
                    raw: 3
                },
                InputEvent::key_down("b"),
                InputEvent::Button {
                    button: MouseButton::Left,
                    pressed: true
                },
            ]
        );
    }

    #[tokio::test]
    async fn test_unplugged_device_does_not_stop_the_others() {
        // Arrange: the first device fails on read, the second has a key.
        let kbd = FakeDevice::with(&[(EV_KEY, 30, 1)]);
        let mut source = source_of(vec![FakeDevice::unplugged(), kbd]);

        // Act
        let first = source.next_event().await;
        let second = source.next_event().await;

        // Assert
        assert_eq!(first.unwrap(), Some(InputEvent::key_down("a")));
        assert_eq!(second.unwrap(), None);
        assert_eq!(source.device_count(), 2);
        assert_eq!(source.open_count(), 1);
    }

    #[tokio::test]
    async fn test_lost_device_is_reopened_when_it_returns() {
        // Arrange: the replugged keyboard has one key pending.
        let opener = FakeOpener::with_spare(FakeDevice::with(&[(EV_KEY, 48, 1)]));
        let mut source = source_with(opener, Duration::ZERO, vec![FakeDevice::unplugged()]);

        // Act
        let while_lost = source.next_event().await.unwrap();
        let after_replug = source.next_event().await.unwrap();

        // Assert
        assert_eq!(while_lost, None);
        assert_eq!(after_replug, Some(InputEvent::key_down("b")));
        assert_eq!(source.open_count(), 1);
    }

    #[tokio::test]
    async fn test_missing_node_keeps_device_closed() {
        let mut source = source_with(
            FakeOpener::default(),
            Duration::ZERO,
            vec![FakeDevice::unplugged()],
        );

        for _ in 0..3 {
            assert_eq!(source.next_event().await.unwrap(), None);
        }
        assert_eq!(source.open_count(), 0);
    }

    #[test]
    fn test_empty_device_list_is_not_constructible() {
        let source = DeviceSource::new(FakeOpener::default(), Duration::ZERO, Vec::new());

        assert!(source.is_none());
    }
}

//! DeviceWaiter: opens the requested input devices, retrying until all of
//! them are present.
//!
//! The emulator is usually started at boot, before the keyboard has been
//! plugged in or before udev has created its device node.  Rather than
//! failing, the waiter tries every `retry_interval` until **all** listed
//! devices open in the same attempt.  Handles opened during a failed attempt
//! are dropped before the next one.
//!
//! By default the waiter never gives up; `max_attempts` caps the number of
//! attempts for unattended setups that would rather exit and be restarted.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use thiserror::Error;
use tokio::time;
use tracing::{info, warn};

/// Error type for device acquisition.
#[derive(Debug, Error)]
pub enum WaitError {
    /// No device identifiers were supplied.
    #[error("no input devices requested")]
    NoDevices,

    /// `max_attempts` was reached without opening every device.
    #[error("gave up after {attempts} attempts; last failure on {path}: {source}")]
    GaveUp {
        attempts: u32,
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// Opens one device node.
#[cfg_attr(test, mockall::automock(type Device = String;))]
pub trait DeviceOpener {
    type Device;

    /// # Errors
    ///
    /// Returns the OS error if the node does not exist or cannot be opened.
    fn open(&self, path: &Path) -> io::Result<Self::Device>;
}

/// Tunables for [`DeviceWaiter`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaiterConfig {
    /// Device path with `{}` standing for the identifier.
    pub path_template: String,
    /// Pause between attempts.
    pub retry_interval: Duration,
    /// Stop after this many attempts.  `None` retries forever.
    pub max_attempts: Option<u32>,
}

impl Default for WaiterConfig {
    fn default() -> Self {
        Self {
            path_template: "/dev/input/event{}".to_string(),
            retry_interval: Duration::from_secs(3),
            max_attempts: None,
        }
    }
}

impl WaiterConfig {
    /// Expands the path template for one device identifier.
    pub fn device_path(&self, id: u32) -> PathBuf {
        PathBuf::from(self.path_template.replace("{}", &id.to_string()))
    }
}

/// Blocking-with-retry device acquisition.
pub struct DeviceWaiter<O> {
    opener: O,
    config: WaiterConfig,
}

impl<O: DeviceOpener> DeviceWaiter<O> {
    pub fn new(opener: O, config: WaiterConfig) -> Self {
        Self { opener, config }
    }

    /// Opens every device in `ids`, in order, waiting until all are present.
    ///
    /// # Errors
    ///
    /// Returns [`WaitError::NoDevices`] if `ids` is empty, or
    /// [`WaitError::GaveUp`] when `max_attempts` is exhausted.
    pub async fn acquire(&self, ids: &[u32]) -> Result<Vec<O::Device>, WaitError> {
        if ids.is_empty() {
            return Err(WaitError::NoDevices);
        }

        let mut attempts = 0u32;
        loop {
            attempts += 1;
            let (path, source) = match self.try_open_all(ids) {
                Ok(devices) => return Ok(devices),
                Err(failure) => failure,
            };

            if self
                .config
                .max_attempts
                .is_some_and(|max| attempts >= max)
            {
                return Err(WaitError::GaveUp {
                    attempts,
                    path,
                    source,
                });
            }

            warn!(
                "waiting for {}: {source}; retrying in {:?}",
                path.display(),
                self.config.retry_interval
            );
            time::sleep(self.config.retry_interval).await;
        }
    }

    /// One all-or-nothing attempt.  Returns the first failing path on error.
    fn try_open_all(&self, ids: &[u32]) -> Result<Vec<O::Device>, (PathBuf, io::Error)> {
        let mut devices = Vec::with_capacity(ids.len());
        for &id in ids {
            let path = self.config.device_path(id);
            match self.opener.open(&path) {
                Ok(device) => devices.push(device),
                Err(e) => return Err((path, e)),
            }
        }
        for &id in ids {
            info!("opened input device {}", self.config.device_path(id).display());
        }
        Ok(devices)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;
    use mockall::Sequence;

    fn fast_config(max_attempts: Option<u32>) -> WaiterConfig {
        WaiterConfig {
            retry_interval: Duration::from_millis(1),
            max_attempts,
            ..WaiterConfig::default()
        }
    }

    fn not_found() -> io::Error {
        io::Error::new(io::ErrorKind::NotFound, "no such device")
    }

    #[test]
    fn test_device_path_expands_template() {
        let cfg = WaiterConfig::default();
        assert_eq!(cfg.device_path(3), PathBuf::from("/dev/input/event3"));
    }

    #[test]
    fn test_default_retry_interval_is_three_seconds() {
        let cfg = WaiterConfig::default();
        assert_eq!(cfg.retry_interval, Duration::from_secs(3));
        assert_eq!(cfg.max_attempts, None);
    }

    #[tokio::test]
    async fn test_acquire_opens_all_devices_in_order() {
        // Arrange
        let mut opener = MockDeviceOpener::new();
        opener
            .expect_open()
            .returning(|p| Ok(p.display().to_string()));
        let waiter = DeviceWaiter::new(opener, fast_config(None));

        // Act
        let devices = waiter.acquire(&[2, 0]).await.expect("acquire");

        // Assert
        assert_eq!(devices, vec!["/dev/input/event2", "/dev/input/event0"]);
    }

    #[tokio::test]
    async fn test_acquire_with_no_ids_fails_immediately() {
        let opener = MockDeviceOpener::new();
        let waiter = DeviceWaiter::new(opener, fast_config(None));

        let result = waiter.acquire(&[]).await;

        assert!(matches!(result, Err(WaitError::NoDevices)));
    }

    #[tokio::test]
    async fn test_acquire_retries_until_every_device_opens() {
        // Arrange: event1 is missing on the first attempt only
        let mut seq = Sequence::new();
        let mut opener = MockDeviceOpener::new();
        opener
            .expect_open()
            .with(eq(PathBuf::from("/dev/input/event0")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("kbd".to_string()));
        opener
            .expect_open()
            .with(eq(PathBuf::from("/dev/input/event1")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(not_found()));
        opener
            .expect_open()
            .with(eq(PathBuf::from("/dev/input/event0")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("kbd".to_string()));
        opener
            .expect_open()
            .with(eq(PathBuf::from("/dev/input/event1")))
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok("mouse".to_string()));
        let waiter = DeviceWaiter::new(opener, fast_config(None));

        // Act
        let devices = waiter.acquire(&[0, 1]).await.expect("acquire");

        // Assert
        assert_eq!(devices, vec!["kbd", "mouse"]);
    }

    #[tokio::test]
    async fn test_acquire_gives_up_after_max_attempts() {
        // Arrange
        let mut opener = MockDeviceOpener::new();
        opener
            .expect_open()
            .times(3)
            .returning(|_| Err(not_found()));
        let waiter = DeviceWaiter::new(opener, fast_config(Some(3)));

        // Act
        let result = waiter.acquire(&[7]).await;

        // Assert
        match result {
            Err(WaitError::GaveUp { attempts, path, .. }) => {
                assert_eq!(attempts, 3);
                assert_eq!(path, PathBuf::from("/dev/input/event7"));
            }
            other => panic!("expected GaveUp, got {other:?}"),
        }
    }
}

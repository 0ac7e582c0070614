//! Linux evdev device handles.
//!
//! Each `/dev/input/eventN` node is opened with the `evdev` crate and
//! switched to non-blocking mode, so [`DeviceSource`](super::device::DeviceSource)
//! can poll several devices from one task without a read on an idle keyboard
//! holding up the mouse.
//!
//! Opening a node needs read access to it (root, or membership in the
//! `input` group).

use std::collections::VecDeque;
use std::io;
use std::os::fd::{AsRawFd, RawFd};
use std::path::Path;

use evdev::Device;
use nix::fcntl::{fcntl, FcntlArg, OFlag};
use tracing::debug;

use super::{DeviceHandle, RawEvent};
use crate::application::device_waiter::DeviceOpener;

/// One open evdev device.
pub struct EvdevHandle {
    device: Device,
    /// Events already fetched from the kernel but not yet handed out.
    pending: VecDeque<RawEvent>,
}

impl EvdevHandle {
    /// Opens `path` in non-blocking mode.
    ///
    /// # Errors
    ///
    /// Returns the OS error if the node cannot be opened or configured.
    pub fn open(path: &Path) -> io::Result<Self> {
        let device = Device::open(path)?;
        set_nonblocking(device.as_raw_fd())?;
        debug!(
            "opened {} ({})",
            path.display(),
            device.name().unwrap_or("unnamed device")
        );
        Ok(Self {
            device,
            pending: VecDeque::new(),
        })
    }
}

impl DeviceHandle for EvdevHandle {
    fn read_one(&mut self) -> io::Result<Option<RawEvent>> {
        if let Some(event) = self.pending.pop_front() {
            return Ok(Some(event));
        }
        match self.device.fetch_events() {
            Ok(events) => {
                self.pending.extend(
                    events.map(|e| RawEvent::new(e.event_type().0, e.code(), e.value())),
                );
            }
            Err(e) if e.kind() == io::ErrorKind::WouldBlock => return Ok(None),
            Err(e) => return Err(e),
        }
        Ok(self.pending.pop_front())
    }
}

/// [`DeviceOpener`] producing [`EvdevHandle`]s.
#[derive(Debug, Clone, Copy, Default)]
pub struct EvdevOpener;

impl DeviceOpener for EvdevOpener {
    type Device = EvdevHandle;

    fn open(&self, path: &Path) -> io::Result<EvdevHandle> {
        EvdevHandle::open(path)
    }
}

fn set_nonblocking(fd: RawFd) -> io::Result<()> {
    let mut flags = OFlag::from_bits_truncate(fcntl(fd, FcntlArg::F_GETFL)?);
    flags.insert(OFlag::O_NONBLOCK);
    fcntl(fd, FcntlArg::F_SETFL(flags))?;
    Ok(())
}

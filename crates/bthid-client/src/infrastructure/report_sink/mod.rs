//! Report sink implementations.
//!
//! - [`dbus::DbusReportSink`] – forwards reports to the Bluetooth HID
//!   transport service over the D-Bus system bus.
//! - [`mock::RecordingSink`] – records reports in memory for tests.

pub mod dbus;
pub mod mock;

//! bthid-client library entry point.
//!
//! Re-exports all public modules so that integration tests in `tests/`
//! and the binary entry point in `main.rs` share the same module tree.
//!
//! # What does bthid-client do? (for beginners)
//!
//! The client makes this machine's keyboard and mouse (or a terminal window)
//! act as a Bluetooth keyboard and mouse for another device.  It does not
//! talk Bluetooth itself: a separate transport service owns the Bluetooth
//! HID connection and accepts finished reports over D-Bus.
//!
//! The client:
//!
//! 1. Reads its configuration file and command line.
//! 2. Opens an input source: either the terminal it runs in, or one or more
//!    `/dev/input/event*` devices (waiting for them to appear if needed).
//! 3. Runs the event loop, which turns each input event into a keyboard or
//!    mouse report via `bthid-core`.
//! 4. Hands every report to the transport service.

/// Application layer: the event loop and its seams.
pub mod application;

/// Infrastructure layer: input sources, report sinks and configuration.
pub mod infrastructure;

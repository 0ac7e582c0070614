//! Infrastructure layer for the client.
//!
//! Contains the OS- and service-facing adapters behind the application
//! layer's seams.
//!
//! **Dependency rule**: this layer may depend on `application` and
//! `bthid_core`, but MUST NOT be imported by the `application` layer.
//!
//! # Sub-modules
//!
//! - **`input_source`** – Terminal capture (crossterm), raw evdev devices
//!   (Linux only) and a scripted source for tests.
//!
//! - **`report_sink`** – The D-Bus client for the report-transport service
//!   and a recording sink for tests.
//!
//! - **`storage`** – TOML configuration file.

pub mod input_source;
pub mod report_sink;
pub mod storage;

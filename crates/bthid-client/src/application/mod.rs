//! Application layer for the client.
//!
//! # What lives here?
//!
//! - **`event_loop`** – Pulls events from an [`InputSource`], folds them into
//!   key and mouse state and pushes the resulting reports to a [`ReportSink`].
//!
//! - **`device_waiter`** – Opens the raw input devices named on the command
//!   line, retrying until all of them exist.
//!
//! - **`input_source`** / **`report_sink`** – The two seams the event loop
//!   is written against.  Implementations live in the infrastructure layer.
//!
//! [`InputSource`]: input_source::InputSource
//! [`ReportSink`]: report_sink::ReportSink

pub mod device_waiter;
pub mod event_loop;
pub mod input_source;
pub mod report_sink;

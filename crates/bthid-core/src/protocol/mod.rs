//! HID boot-protocol report encoding.

pub mod report;

pub use report::{encode_signed, HidReport, KeyboardReport, MouseReport};

//! Recording report sink for tests.

use std::sync::Mutex;

use async_trait::async_trait;
use bthid_core::HidReport;

use crate::application::report_sink::{ReportSink, TransportError};

/// A [`ReportSink`] that keeps every report in memory.
#[derive(Default)]
pub struct RecordingSink {
    reports: Mutex<Vec<HidReport>>,
    host_switches: Mutex<u32>,
    should_fail: bool,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// A sink whose every call fails, for exercising error paths.
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    /// All reports received so far, oldest first.
    pub fn reports(&self) -> Vec<HidReport> {
        self.reports.lock().expect("lock poisoned").clone()
    }

    /// Keyboard reports only, as raw bytes.
    pub fn keyboard_reports(&self) -> Vec<Vec<u8>> {
        self.reports()
            .iter()
            .filter(|r| matches!(r, HidReport::Keyboard(_)))
            .map(|r| r.as_bytes().to_vec())
            .collect()
    }

    /// Mouse reports only, as raw bytes.
    pub fn mouse_reports(&self) -> Vec<Vec<u8>> {
        self.reports()
            .iter()
            .filter(|r| matches!(r, HidReport::Mouse(_)))
            .map(|r| r.as_bytes().to_vec())
            .collect()
    }

    pub fn host_switches(&self) -> u32 {
        *self.host_switches.lock().expect("lock poisoned")
    }
}

#[async_trait]
impl ReportSink for RecordingSink {
    async fn send_report(&self, report: &HidReport) -> Result<(), TransportError> {
        if self.should_fail {
            return Err(TransportError::Unavailable("injected failure".to_string()));
        }
        self.reports.lock().expect("lock poisoned").push(*report);
        Ok(())
    }

    async fn switch_host(&self) -> Result<(), TransportError> {
        if self.should_fail {
            return Err(TransportError::CallFailed {
                method: "switch_device",
                message: "injected failure".to_string(),
            });
        }
        *self.host_switches.lock().expect("lock poisoned") += 1;
        Ok(())
    }
}

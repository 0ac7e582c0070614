//! The [`ReportSink`] contract: where finished HID reports go.

use async_trait::async_trait;
use bthid_core::HidReport;
use thiserror::Error;

/// Error type for report delivery.
#[derive(Debug, Error)]
pub enum TransportError {
    /// The transport service could not be reached.
    #[error("transport unavailable: {0}")]
    Unavailable(String),

    /// The transport service was reached but the call failed.
    #[error("transport call {method} failed: {message}")]
    CallFailed { method: &'static str, message: String },
}

/// Receiver of keyboard and mouse reports.
///
/// Delivery is fire-and-forget from the event loop's point of view: a failed
/// send is logged and the report dropped.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Delivers one report.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the report could not be handed over.
    async fn send_report(&self, report: &HidReport) -> Result<(), TransportError>;

    /// Asks the transport to switch to the next paired host.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if the request could not be handed over.
    async fn switch_host(&self) -> Result<(), TransportError>;
}

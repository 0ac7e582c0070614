//! The [`InputSource`] contract.

use async_trait::async_trait;
use bthid_core::InputEvent;
use thiserror::Error;

/// Error type for input sources.
#[derive(Debug, Error)]
pub enum SourceError {
    /// The source has no more events and never will (terminal closed,
    /// scripted events used up).
    #[error("input source exhausted")]
    Exhausted,

    /// Reading from the underlying terminal or device failed.
    #[error("input I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// A producer of [`InputEvent`]s.
///
/// Implementations: the terminal capture, the evdev device fan-in, and a
/// scripted mock for tests.
#[async_trait]
pub trait InputSource: Send {
    /// Returns the next event.
    ///
    /// `Ok(None)` means nothing is pending right now; the caller should wait
    /// briefly and poll again.  Sources that can wait for input themselves
    /// never return `Ok(None)`.
    ///
    /// # Errors
    ///
    /// [`SourceError::Exhausted`] when the source has ended, or
    /// [`SourceError::Io`] when reading failed.
    async fn next_event(&mut self) -> Result<Option<InputEvent>, SourceError>;

    /// `true` if this source reports key presses without matching releases,
    /// so the event loop must release everything before applying each event.
    fn resets_before_apply(&self) -> bool {
        false
    }
}

//! EventLoop: turns input events into HID reports.
//!
//! ```text
//! InputSource ──▶ classify ──▶ KeyState / MouseState ──▶ report ──▶ ReportSink
//! ```
//!
//! # Key classification (for beginners)
//!
//! Every key event is resolved through [`KeyMap::resolve`]:
//!
//! - A **dedicated modifier key** (`LEFTSHIFT`, `RIGHTALT`, ...) only flips
//!   its bit in the modifier byte.
//! - Any **other key** sets the modifier its symbol implies (`"!"` implies
//!   Shift) and is pressed or released in the six-key buffer.
//!
//! A keyboard report follows every key event; a mouse report follows every
//! button or motion event.
//!
//! # Terminal sources
//!
//! A terminal only says "`a` was typed", never "`a` was released".  For such
//! sources ([`InputSource::resets_before_apply`]) the loop releases all keys
//! and sends an empty keyboard report before reading the next event whenever
//! something is still held.  Each typed key therefore reaches the host as a
//! press immediately followed by a release.

use std::sync::Arc;
use std::time::Duration;

use bthid_core::{
    AbsoluteScale, HidKeyCode, HidReport, InputEvent, KeyMap, KeyState, MouseButton, MouseState,
    PointerCodes,
};
use thiserror::Error;
use tokio::time;
use tracing::{debug, info, trace, warn};

use super::input_source::{InputSource, SourceError};
use super::report_sink::ReportSink;

/// Error type for the event loop.  Transport failures are not errors here;
/// they are logged and the report is dropped.
#[derive(Debug, Error)]
pub enum LoopError {
    #[error("input source failed: {0}")]
    Source(#[from] SourceError),
}

/// Tunables for [`EventLoop`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EventLoopConfig {
    /// Multipliers for absolute pointer movement.
    pub scale: AbsoluteScale,
    /// Raw button codes for absolute pointer events.
    pub pointer_codes: PointerCodes,
    /// How long to wait before polling again when the source has nothing.
    pub idle_poll: Duration,
}

impl Default for EventLoopConfig {
    fn default() -> Self {
        Self {
            scale: AbsoluteScale::default(),
            pointer_codes: PointerCodes::default(),
            idle_poll: Duration::from_millis(5),
        }
    }
}

/// Whether anything is currently held on the host side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// No key, modifier or button held.
    Idle,
    /// At least one key, modifier or button held.
    Active,
}

/// The input-to-report loop.
pub struct EventLoop {
    source: Box<dyn InputSource>,
    sink: Arc<dyn ReportSink>,
    keys: KeyState,
    mouse: MouseState,
    state: LoopState,
    idle_poll: Duration,
    /// Set once the first iteration has run.
    started: bool,
}

impl EventLoop {
    pub fn new(
        source: Box<dyn InputSource>,
        sink: Arc<dyn ReportSink>,
        config: EventLoopConfig,
    ) -> Self {
        Self {
            source,
            sink,
            keys: KeyState::new(),
            mouse: MouseState::new(config.scale, config.pointer_codes),
            state: LoopState::Idle,
            idle_poll: config.idle_poll,
            started: false,
        }
    }

    /// Runs until the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::Source`] if the input source fails.
    pub async fn run(&mut self) -> Result<(), LoopError> {
        info!("event loop started");
        while self.step().await? {}
        info!("input source exhausted; event loop finished");
        Ok(())
    }

    /// Runs one iteration: optional terminal reset, then one read.
    ///
    /// Returns `false` once the source is exhausted.
    ///
    /// # Errors
    ///
    /// Returns [`LoopError::Source`] if the input source fails.
    pub async fn step(&mut self) -> Result<bool, LoopError> {
        if self.source.resets_before_apply() && (!self.started || self.state == LoopState::Active)
        {
            self.release_keys().await;
        }
        self.started = true;

        match self.source.next_event().await {
            Ok(Some(event)) => {
                self.handle_event(event).await;
                Ok(true)
            }
            Ok(None) => {
                time::sleep(self.idle_poll).await;
                Ok(true)
            }
            Err(SourceError::Exhausted) => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Applies one event and emits the resulting report.
    pub async fn handle_event(&mut self, event: InputEvent) {
        debug!(%event, "input event");
        match event {
            InputEvent::Key { symbol, pressed } => {
                self.apply_key(&symbol, pressed);
                self.emit(self.keys.report().into()).await;
            }
            InputEvent::Button { button, pressed } => {
                self.mouse.set_button(button, pressed);
                self.emit(self.mouse.report().into()).await;
            }
            InputEvent::Motion { axis, raw } => {
                self.mouse.update_relative(axis, raw);
                self.emit(self.mouse.report().into()).await;
            }
            InputEvent::Pointer { x, y, button_raw } => {
                self.mouse.update_absolute(x, y, button_raw);
                self.emit(self.mouse.report().into()).await;
            }
            InputEvent::SwitchHost => {
                info!("switching to next host");
                if let Err(e) = self.sink.switch_host().await {
                    warn!("host switch request failed: {e}");
                }
            }
        }
        self.refresh_state();
    }

    /// Releases every key and button and tells the host so.  Called once on
    /// shutdown so nothing stays stuck down on the host.
    pub async fn shutdown(&mut self) {
        info!("releasing all keys and buttons");
        self.keys.reset();
        for button in [MouseButton::Left, MouseButton::Right, MouseButton::Middle] {
            self.mouse.set_button(button, false);
        }
        self.emit(self.keys.report().into()).await;
        self.emit(self.mouse.report().into()).await;
        self.refresh_state();
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn key_state(&self) -> &KeyState {
        &self.keys
    }

    // ── Internals ─────────────────────────────────────────────────────────────

    fn apply_key(&mut self, symbol: &str, pressed: bool) {
        let resolved = KeyMap::resolve(symbol);

        if resolved.is_modifier_key {
            if let Some(bit) = resolved.modifier {
                self.keys.set_modifier(bit, pressed);
            }
            return;
        }

        if let Some(bit) = resolved.modifier {
            self.keys.set_modifier(bit, pressed);
        }
        if resolved.usage == HidKeyCode::Unknown {
            debug!(symbol, "unmapped key symbol");
        } else if pressed {
            self.keys.press(resolved.usage);
        } else {
            self.keys.release(resolved.usage);
        }
    }

    async fn release_keys(&mut self) {
        trace!("releasing keys before next terminal event");
        self.keys.reset();
        self.emit(self.keys.report().into()).await;
        self.refresh_state();
    }

    fn refresh_state(&mut self) {
        self.state = if self.keys.is_idle() && self.mouse.buttons() == 0 {
            LoopState::Idle
        } else {
            LoopState::Active
        };
    }

    async fn emit(&self, report: HidReport) {
        trace!(%report, "sending report");
        if let Err(e) = self.sink.send_report(&report).await {
            warn!("dropping report {report}: {e}");
        }
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Terminal capture: keys and mouse clicks from the controlling terminal.
//!
//! The terminal is switched to raw mode with mouse capture enabled, then
//! read through crossterm's async [`EventStream`].  Raw mode and mouse
//! capture are restored when the source is dropped.
//!
//! # What a terminal can and cannot tell us (for beginners)
//!
//! A terminal reports *characters*, not keys.  Shift+1 arrives as `'!'`,
//! Ctrl+A as byte 0x01, and there is no "key released" event at all.  The
//! source therefore emits one key-down per character and declares
//! [`InputSource::resets_before_apply`], so the event loop releases the key
//! again before the next one.  The modifier a character implies (`'!'` →
//! Shift) is recovered later by the key map.
//!
//! Mouse input arrives as absolute cell positions with a button state, which
//! [`MouseState::update_absolute`](bthid_core::MouseState::update_absolute)
//! turns into deltas.
//!
//! # Hotkeys
//!
//! Two key symbols are intercepted instead of forwarded: the *switch* hotkey
//! (default `F12`) asks the transport to move to the next paired host, and
//! the *quit* hotkey (default Ctrl+], symbol `"\u{1d}"`) ends the session.
//! Ctrl+C is forwarded to the host like any other key.

use std::io::{self, stdout};

use async_trait::async_trait;
use bthid_core::{InputEvent, PointerCodes};
use crossterm::event::{
    DisableMouseCapture, EnableMouseCapture, Event, EventStream, KeyCode, KeyEvent, KeyEventKind,
    KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use crossterm::ExecutableCommand;
use futures_util::StreamExt;
use tracing::{debug, info};

use crate::application::input_source::{InputSource, SourceError};

/// Default symbol of the host-switch hotkey.
pub const DEFAULT_SWITCH_HOTKEY: &str = "F12";

/// Default symbol of the quit hotkey (Ctrl+]).
pub const DEFAULT_QUIT_HOTKEY: &str = "\u{1d}";

/// Settings for [`TerminalSource`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TerminalConfig {
    pub pointer_codes: PointerCodes,
    pub switch_hotkey: String,
    pub quit_hotkey: String,
}

impl Default for TerminalConfig {
    fn default() -> Self {
        Self {
            pointer_codes: PointerCodes::default(),
            switch_hotkey: DEFAULT_SWITCH_HOTKEY.to_string(),
            quit_hotkey: DEFAULT_QUIT_HOTKEY.to_string(),
        }
    }
}

/// Result of translating one terminal event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminalInput {
    Event(InputEvent),
    Quit,
}

/// Restores the terminal on drop.
struct RawModeGuard;

impl RawModeGuard {
    fn enable() -> io::Result<Self> {
        enable_raw_mode()?;
        let guard = RawModeGuard;
        stdout().execute(EnableMouseCapture)?;
        Ok(guard)
    }
}

impl Drop for RawModeGuard {
    fn drop(&mut self) {
        if let Err(e) = stdout().execute(DisableMouseCapture) {
            debug!("failed to disable mouse capture: {e}");
        }
        if let Err(e) = disable_raw_mode() {
            debug!("failed to leave raw mode: {e}");
        }
    }
}

/// [`InputSource`] reading the controlling terminal.
pub struct TerminalSource {
    events: EventStream,
    config: TerminalConfig,
    _guard: RawModeGuard,
}

impl TerminalSource {
    /// Puts the terminal into raw mode with mouse capture.
    ///
    /// # Errors
    ///
    /// Returns the I/O error if stdin/stdout is not a terminal or cannot be
    /// configured.
    pub fn open(config: TerminalConfig) -> io::Result<Self> {
        let guard = RawModeGuard::enable()?;
        info!(
            "terminal capture active; {} switches host, {:?} quits",
            config.switch_hotkey, config.quit_hotkey
        );
        Ok(Self {
            events: EventStream::new(),
            config,
            _guard: guard,
        })
    }
}

#[async_trait]
impl InputSource for TerminalSource {
    async fn next_event(&mut self) -> Result<Option<InputEvent>, SourceError> {
        loop {
            let event = match self.events.next().await {
                Some(event) => event?,
                None => return Err(SourceError::Exhausted),
            };
            match translate(&event, &self.config) {
                Some(TerminalInput::Event(input)) => return Ok(Some(input)),
                Some(TerminalInput::Quit) => {
                    info!("quit hotkey pressed");
                    return Err(SourceError::Exhausted);
                }
                None => {}
            }
        }
    }

    fn resets_before_apply(&self) -> bool {
        true
    }
}

// ── Translation ───────────────────────────────────────────────────────────────

/// Translates one crossterm event.  Returns `None` for events with no
/// counterpart (key releases, scrolling, resize, focus, paste).
pub fn translate(event: &Event, config: &TerminalConfig) -> Option<TerminalInput> {
    match event {
        Event::Key(key) => {
            let symbol = key_symbol(key)?;
            if symbol == config.quit_hotkey {
                Some(TerminalInput::Quit)
            } else if symbol == config.switch_hotkey {
                Some(TerminalInput::Event(InputEvent::SwitchHost))
            } else {
                Some(TerminalInput::Event(InputEvent::key_down(symbol)))
            }
        }
        Event::Mouse(mouse) => {
            pointer_event(mouse, &config.pointer_codes).map(TerminalInput::Event)
        }
        _ => None,
    }
}

/// The symbol a key press produced, as the terminal would have delivered it.
fn key_symbol(key: &KeyEvent) -> Option<String> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    let symbol = match key.code {
        KeyCode::Char(c) if key.modifiers.contains(KeyModifiers::CONTROL) => {
            control_char(c).unwrap_or(c).to_string()
        }
        KeyCode::Char(c) => c.to_string(),
        KeyCode::Enter => "\n".to_string(),
        KeyCode::Tab => "\t".to_string(),
        KeyCode::Esc => "\u{1b}".to_string(),
        KeyCode::BackTab => "BACKTAB".to_string(),
        KeyCode::Backspace => "BACKSPACE".to_string(),
        KeyCode::Left => "LEFT".to_string(),
        KeyCode::Right => "RIGHT".to_string(),
        KeyCode::Up => "UP".to_string(),
        KeyCode::Down => "DOWN".to_string(),
        KeyCode::Home => "HOME".to_string(),
        KeyCode::End => "END".to_string(),
        KeyCode::PageUp => "PAGEUP".to_string(),
        KeyCode::PageDown => "PAGEDOWN".to_string(),
        KeyCode::Insert => "INSERT".to_string(),
        KeyCode::Delete => "DELETE".to_string(),
        KeyCode::CapsLock => "CAPSLOCK".to_string(),
        KeyCode::ScrollLock => "SCROLLLOCK".to_string(),
        KeyCode::NumLock => "NUMLOCK".to_string(),
        KeyCode::PrintScreen => "SYSRQ".to_string(),
        KeyCode::Pause => "PAUSE".to_string(),
        KeyCode::Menu => "COMPOSE".to_string(),
        KeyCode::F(n) => format!("F{n}"),
        _ => return None,
    };
    Some(symbol)
}

/// The C0 control character Ctrl+`c` produces on a terminal, if any
/// (`'a'` → 0x01, `']'` → 0x1D).
fn control_char(c: char) -> Option<char> {
    let upper = c.to_ascii_uppercase();
    if ('@'..='_').contains(&upper) {
        Some(char::from(upper as u8 & 0x1F))
    } else {
        None
    }
}

fn pointer_event(mouse: &MouseEvent, codes: &PointerCodes) -> Option<InputEvent> {
    let button_raw = match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => codes.press,
        MouseEventKind::Up(MouseButton::Left) => codes.release,
        MouseEventKind::Drag(MouseButton::Left) | MouseEventKind::Moved => codes.motion,
        MouseEventKind::Down(_) | MouseEventKind::Up(_) | MouseEventKind::Drag(_) => {
            codes.release
        }
        _ => return None,
    };
    Some(InputEvent::Pointer {
        x: i32::from(mouse.column),
        y: i32::from(mouse.row),
        button_raw,
    })
}

// ── Tests ─────────────────────────────────────────────────────────────────────

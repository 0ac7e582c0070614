//! TOML-based configuration for the client.
//!
//! Reads `AppConfig` from `$XDG_CONFIG_HOME/bthid/config.toml`
//! (`~/.config/bthid/config.toml` when `XDG_CONFIG_HOME` is unset), or from
//! an explicit path given on the command line.
//!
//! Every section and every field is optional.  A missing file, or an empty
//! one, yields the defaults:
//!
//! ```toml
//! [general]
//! log_level = "info"
//!
//! [transport]
//! service = "org.yaptb.btkbservice"
//! object_path = "/org/yaptb/btkbservice"
//! interface = "org.yaptb.btkbservice"
//!
//! [devices]
//! path_template = "/dev/input/event{}"
//! retry_interval_secs = 3
//! # max_attempts = 20          # unset: retry forever
//! idle_poll_ms = 5
//!
//! [mouse]
//! x_scale = 10
//! y_scale = 25
//! press_code = 2
//! release_code = 1
//! motion_code = 268435456     # 0x1000_0000
//!
//! [terminal]
//! switch_hotkey = "F12"
//! quit_hotkey = "\u001D"      # Ctrl+]
//! ```
//!
//! # Serde default values
//!
//! Fields annotated with `#[serde(default = "some_fn")]` use the return value
//! of `some_fn()` when the field is absent from the TOML file, so partial
//! files only need to mention what they change.

use std::path::{Path, PathBuf};
use std::time::Duration;

use bthid_core::{AbsoluteScale, PointerCodes};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::application::device_waiter::WaiterConfig;
use crate::application::event_loop::EventLoopConfig;
use crate::infrastructure::input_source::terminal::{
    TerminalConfig, DEFAULT_QUIT_HOTKEY, DEFAULT_SWITCH_HOTKEY,
};
use crate::infrastructure::report_sink::dbus::{
    DbusTarget, DEFAULT_INTERFACE, DEFAULT_OBJECT_PATH, DEFAULT_SERVICE,
};

/// Error type for configuration file operations.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Neither `XDG_CONFIG_HOME` nor `HOME` is set.
    #[error("could not determine config directory")]
    NoConfigDir,

    /// A file system I/O error occurred.
    #[error("I/O error accessing config at {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The TOML content could not be parsed.
    #[error("failed to parse config TOML: {0}")]
    Parse(#[from] toml::de::Error),

    /// The config could not be serialized to TOML.
    #[error("failed to serialize config: {0}")]
    Serialize(#[from] toml::ser::Error),
}

// ── Config schema types ───────────────────────────────────────────────────────

/// Top-level client configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub transport: TransportConfig,
    #[serde(default)]
    pub devices: DevicesConfig,
    #[serde(default)]
    pub mouse: MouseConfig,
    #[serde(default)]
    pub terminal: TerminalSection,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// `tracing` log level: `"error"`, `"warn"`, `"info"`, `"debug"`, `"trace"`.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

/// Location of the report-transport service on the D-Bus system bus.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransportConfig {
    #[serde(default = "default_service")]
    pub service: String,
    #[serde(default = "default_object_path")]
    pub object_path: String,
    #[serde(default = "default_interface")]
    pub interface: String,
}

/// Raw input device acquisition and polling.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DevicesConfig {
    /// Device node path; `{}` is replaced by the device id.
    #[serde(default = "default_path_template")]
    pub path_template: String,
    #[serde(default = "default_retry_interval_secs")]
    pub retry_interval_secs: u64,
    /// Give up after this many attempts.  Absent: retry forever.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_attempts: Option<u32>,
    /// Sleep between polls when no device has an event.
    #[serde(default = "default_idle_poll_ms")]
    pub idle_poll_ms: u64,
}

/// Absolute pointer scaling and raw button codes.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MouseConfig {
    #[serde(default = "default_x_scale")]
    pub x_scale: i32,
    #[serde(default = "default_y_scale")]
    pub y_scale: i32,
    #[serde(default = "default_press_code")]
    pub press_code: u32,
    /// Code the terminal emits on release.  Absolute updates treat every code
    /// other than `press_code` and `motion_code` as a release.
    #[serde(default = "default_release_code")]
    pub release_code: u32,
    /// "Moved without a button change" sentinel.
    #[serde(default = "default_motion_code")]
    pub motion_code: u32,
}

/// Terminal capture hotkeys, given as key symbols.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TerminalSection {
    #[serde(default = "default_switch_hotkey")]
    pub switch_hotkey: String,
    #[serde(default = "default_quit_hotkey")]
    pub quit_hotkey: String,
}

// ── Default helpers ───────────────────────────────────────────────────────────

fn default_log_level() -> String {
    "info".to_string()
}
fn default_service() -> String {
    DEFAULT_SERVICE.to_string()
}
fn default_object_path() -> String {
    DEFAULT_OBJECT_PATH.to_string()
}
fn default_interface() -> String {
    DEFAULT_INTERFACE.to_string()
}
fn default_path_template() -> String {
    "/dev/input/event{}".to_string()
}
fn default_retry_interval_secs() -> u64 {
    3
}
fn default_idle_poll_ms() -> u64 {
    5
}
fn default_x_scale() -> i32 {
    AbsoluteScale::default().x
}
fn default_y_scale() -> i32 {
    AbsoluteScale::default().y
}
fn default_press_code() -> u32 {
    PointerCodes::default().press
}
fn default_release_code() -> u32 {
    PointerCodes::default().release
}
fn default_motion_code() -> u32 {
    PointerCodes::default().motion
}
fn default_switch_hotkey() -> String {
    DEFAULT_SWITCH_HOTKEY.to_string()
}
fn default_quit_hotkey() -> String {
    DEFAULT_QUIT_HOTKEY.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

impl Default for TransportConfig {
    fn default() -> Self {
        Self {
            service: default_service(),
            object_path: default_object_path(),
            interface: default_interface(),
        }
    }
}

impl Default for DevicesConfig {
    fn default() -> Self {
        Self {
            path_template: default_path_template(),
            retry_interval_secs: default_retry_interval_secs(),
            max_attempts: None,
            idle_poll_ms: default_idle_poll_ms(),
        }
    }
}

impl Default for MouseConfig {
    fn default() -> Self {
        Self {
            x_scale: default_x_scale(),
            y_scale: default_y_scale(),
            press_code: default_press_code(),
            release_code: default_release_code(),
            motion_code: default_motion_code(),
        }
    }
}

impl Default for TerminalSection {
    fn default() -> Self {
        Self {
            switch_hotkey: default_switch_hotkey(),
            quit_hotkey: default_quit_hotkey(),
        }
    }
}

// ── Conversions into component settings ───────────────────────────────────────

impl TransportConfig {
    pub fn target(&self) -> DbusTarget {
        DbusTarget {
            service: self.service.clone(),
            object_path: self.object_path.clone(),
            interface: self.interface.clone(),
        }
    }
}

impl DevicesConfig {
    pub fn waiter_config(&self) -> WaiterConfig {
        WaiterConfig {
            path_template: self.path_template.clone(),
            retry_interval: Duration::from_secs(self.retry_interval_secs),
            max_attempts: self.max_attempts,
        }
    }
}

impl MouseConfig {
    pub fn pointer_codes(&self) -> PointerCodes {
        PointerCodes {
            press: self.press_code,
            release: self.release_code,
            motion: self.motion_code,
        }
    }

    pub fn scale(&self) -> AbsoluteScale {
        AbsoluteScale {
            x: self.x_scale,
            y: self.y_scale,
        }
    }
}

impl AppConfig {
    pub fn event_loop_config(&self) -> EventLoopConfig {
        EventLoopConfig {
            scale: self.mouse.scale(),
            pointer_codes: self.mouse.pointer_codes(),
            idle_poll: Duration::from_millis(self.devices.idle_poll_ms),
        }
    }

    pub fn terminal_config(&self) -> TerminalConfig {
        TerminalConfig {
            pointer_codes: self.mouse.pointer_codes(),
            switch_hotkey: self.terminal.switch_hotkey.clone(),
            quit_hotkey: self.terminal.quit_hotkey.clone(),
        }
    }
}

// ── Config repository ─────────────────────────────────────────────────────────

/// Resolves the default path of the config file.
///
/// # Errors
///
/// Returns [`ConfigError::NoConfigDir`] if neither `XDG_CONFIG_HOME` nor
/// `HOME` is set.
pub fn config_file_path() -> Result<PathBuf, ConfigError> {
    Ok(config_dir()
        .ok_or(ConfigError::NoConfigDir)?
        .join("config.toml"))
}

/// Loads the config from `path`, or from [`config_file_path`] when `path` is
/// `None`.  A missing file yields `AppConfig::default()`.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system errors other than "not found",
/// and [`ConfigError::Parse`] if the TOML is malformed.
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    let path = match path {
        Some(p) => p.to_path_buf(),
        None => config_file_path()?,
    };

    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(toml::from_str(&content)?),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(AppConfig::default()),
        Err(e) => Err(ConfigError::Io { path, source: e }),
    }
}

/// Writes `config` to `path`, creating parent directories as needed.
///
/// # Errors
///
/// Returns [`ConfigError::Io`] for file-system failures or
/// [`ConfigError::Serialize`] if serialization fails.
pub fn save_config(config: &AppConfig, path: &Path) -> Result<(), ConfigError> {
    if let Some(dir) = path.parent() {
        std::fs::create_dir_all(dir).map_err(|source| ConfigError::Io {
            path: dir.to_path_buf(),
            source,
        })?;
    }

    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// `$XDG_CONFIG_HOME/bthid`, falling back to `~/.config/bthid`.
fn config_dir() -> Option<PathBuf> {
    let base = std::env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| std::env::var_os("HOME").map(|h| PathBuf::from(h).join(".config")))?;
    Some(base.join("bthid"))
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! Bluetooth HID emulator client – binary entry point.
//!
//! Reads keyboard and mouse input either from the controlling terminal or
//! from raw Linux input devices, turns it into HID reports and hands them to
//! the Bluetooth transport service over D-Bus.
//!
//! # Usage
//!
//! ```text
//! bthid-client terminal              # capture this terminal (Ctrl+] quits)
//! bthid-client devices 3 5           # read /dev/input/event3 and event5
//! bthid-client config                # print the effective configuration
//! bthid-client config --write        # write it to the config file
//! ```
//!
//! Settings come from `~/.config/bthid/config.toml` (or `--config`); see
//! [`bthid_client::infrastructure::storage::config`] for the format.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use bthid_client::application::event_loop::EventLoop;
use bthid_client::application::input_source::InputSource;
use bthid_client::application::report_sink::ReportSink;
use bthid_client::infrastructure::input_source::terminal::TerminalSource;
use bthid_client::infrastructure::report_sink::dbus::DbusReportSink;
use bthid_client::infrastructure::storage::config::{
    config_file_path, load_config, save_config, AppConfig,
};

// ── CLI argument definitions ──────────────────────────────────────────────────

/// Bluetooth HID keyboard/mouse emulator client.
#[derive(Debug, Parser)]
#[command(
    name = "bthid-client",
    about = "Forwards terminal or evdev input to a Bluetooth HID transport service",
    version
)]
struct Cli {
    /// Path of the TOML configuration file.
    #[arg(long, env = "BTHID_CONFIG")]
    config: Option<PathBuf>,

    /// Log level, overriding the configuration file.  `RUST_LOG` wins over
    /// both.
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Capture keys and mouse events from this terminal.
    Terminal,

    /// Read raw input devices `/dev/input/event<ID>`.
    Devices {
        /// Device ids, e.g. `3 5` for event3 and event5.
        #[arg(required = true, num_args = 1..)]
        ids: Vec<u32>,
    },

    /// Print the effective configuration as TOML.
    Config {
        /// Write it to the configuration file instead of printing.
        #[arg(long)]
        write: bool,
    },
}

impl Cli {
    /// Log level used when `RUST_LOG` is unset.
    ///
    /// Terminal capture defaults to `warn` so log lines do not interleave
    /// with the raw-mode screen.
    fn effective_log_level(&self, config: &AppConfig) -> String {
        match (&self.log_level, &self.command) {
            (Some(level), _) => level.clone(),
            (None, Command::Terminal) if config.general.log_level == "info" => "warn".to_string(),
            (None, _) => config.general.log_level.clone(),
        }
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let config = load_config(cli.config.as_deref()).context("failed to load configuration")?;

    // Logs go to stderr; `RUST_LOG` overrides the configured level.
    let level = cli.effective_log_level(&config);
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    match cli.command {
        Command::Config { write } => show_or_write_config(&config, cli.config, write),
        Command::Terminal => {
            let sink = connect_sink(&config).await?;
            let source = TerminalSource::open(config.terminal_config())
                .context("failed to put the terminal into raw mode")?;
            run_session(Box::new(source), sink, &config).await
        }
        Command::Devices { ids } => {
            let sink = connect_sink(&config).await?;
            let source = open_devices(&ids, &config).await?;
            run_session(source, sink, &config).await
        }
    }
}

async fn connect_sink(config: &AppConfig) -> anyhow::Result<Arc<dyn ReportSink>> {
    let sink = DbusReportSink::connect(&config.transport.target())
        .await
        .context("failed to reach the Bluetooth transport service")?;
    Ok(Arc::new(sink))
}

#[cfg(target_os = "linux")]
async fn open_devices(ids: &[u32], config: &AppConfig) -> anyhow::Result<Box<dyn InputSource>> {
    use bthid_client::application::device_waiter::DeviceWaiter;
    use bthid_client::infrastructure::input_source::device::DeviceSource;
    use bthid_client::infrastructure::input_source::evdev::EvdevOpener;

    let waiter_config = config.devices.waiter_config();
    let retry_interval = waiter_config.retry_interval;
    let paths: Vec<_> = ids.iter().map(|&id| waiter_config.device_path(id)).collect();

    let waiter = DeviceWaiter::new(EvdevOpener, waiter_config);
    let devices = waiter
        .acquire(ids)
        .await
        .context("failed to open input devices")?;
    let devices = paths.into_iter().zip(devices).collect();
    let source = DeviceSource::new(EvdevOpener, retry_interval, devices)
        .context("no input devices to read")?;
    Ok(Box::new(source))
}

#[cfg(not(target_os = "linux"))]
async fn open_devices(_ids: &[u32], _config: &AppConfig) -> anyhow::Result<Box<dyn InputSource>> {
    anyhow::bail!("raw device input is only available on Linux")
}

/// Runs the event loop until the source ends or a shutdown signal arrives,
/// then releases everything on the host.
async fn run_session(
    source: Box<dyn InputSource>,
    sink: Arc<dyn ReportSink>,
    config: &AppConfig,
) -> anyhow::Result<()> {
    let mut event_loop = EventLoop::new(source, sink, config.event_loop_config());

    let outcome = tokio::select! {
        result = event_loop.run() => result.context("input source failed"),
        () = shutdown_signal() => {
            info!("shutdown signal received");
            Ok(())
        }
    };

    event_loop.shutdown().await;
    outcome
}

/// Resolves on Ctrl+C, or SIGTERM on Unix.
async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            error!("failed to listen for Ctrl+C: {e}");
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        use tokio::signal::unix::{signal, SignalKind};
        match signal(SignalKind::terminate()) {
            Ok(mut term) => {
                term.recv().await;
            }
            Err(e) => {
                warn!("failed to listen for SIGTERM: {e}");
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {}
        () = terminate => {}
    }
}

fn show_or_write_config(
    config: &AppConfig,
    path: Option<PathBuf>,
    write: bool,
) -> anyhow::Result<()> {
    if !write {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    let path = match path {
        Some(p) => p,
        None => config_file_path()?,
    };
    save_config(config, &path)?;
    info!("configuration written to {}", path.display());
    Ok(())
}

// ── Tests ─────────────────────────────────────────────────────────────────────

//! ucam-sync
//!
//! Opens the serial device a uCAM-III is attached to and runs the
//! synchronization handshake against it.

use std::process::ExitCode;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use ucam3::common::serial_port::{SerialPortInterface, DEFAULT_BAUD_RATE, DEFAULT_DEVICE};
use ucam3::common::timing;
use ucam3::{SyncConfig, SyncHost};

#[derive(Parser, Debug)]
#[command(name = "ucam-sync", version, about = "Synchronize with a uCAM-III serial camera")]
struct Cli {
    /// Serial device the camera is attached to
    #[arg(default_value = DEFAULT_DEVICE)]
    device: String,

    /// Baud rate to open the device with
    #[arg(long, default_value_t = DEFAULT_BAUD_RATE)]
    baud: u32,

    /// SYNC frames to send before giving up
    #[arg(long, default_value_t = timing::SYNC_MAX_ATTEMPTS)]
    attempts: u32,

    /// Settle time after sync, in milliseconds
    #[arg(long, default_value_t = timing::SETTLE_TIME.as_millis() as u64)]
    settle_ms: u64,

    /// Reads allowed for the echoed SYNC frame
    #[arg(long, default_value_t = timing::ECHO_READ_POLLS)]
    echo_polls: u32,

    /// Do not send the final ACK back to the camera
    #[arg(long)]
    no_final_ack: bool,

    /// Enable debug output
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(&cli) {
        eprintln!("error: {:#}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();
}

/// Only a device that cannot be opened is an error here. A failed
/// handshake is reported and still exits cleanly.
fn run(cli: &Cli) -> Result<()> {
    let port = SerialPortInterface::open(&cli.device, cli.baud)?;

    let config = SyncConfig::default()
        .with_max_attempts(cli.attempts)
        .with_settle_time(Duration::from_millis(cli.settle_ms))
        .with_echo_read_polls(cli.echo_polls, timing::ECHO_POLL_DELAY)
        .with_final_ack(!cli.no_final_ack);

    let mut host = SyncHost::with_config(port, config);
    match host.synchronize() {
        Ok(report) => info!(
            attempts = report.attempts,
            ack = %report.ack,
            echo = %report.echo,
            "Synchronised!"
        ),
        Err(e) if e.is_handshake_failure() => error!("{}", e),
        Err(e) => error!(error = %e, "Serial link failed during handshake"),
    }

    host.into_inner().close();
    info!("Exiting...");
    Ok(())
}

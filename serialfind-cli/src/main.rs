//! serialfind CLI - Find USB serial devices and connect to them.
//!
//! ## Features
//!
//! - List openable serial ports
//! - List USB serial ports with description and hardware id
//! - Search USB serial ports by vendor/product/serial text
//! - Connect to the first match, optionally streaming its output
//! - Shell completion generation
//! - Environment variable and config file support

use anyhow::Result;
use clap::{Parser, Subcommand};
use clap_complete::Shell;
use env_logger::Env;
use log::debug;
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::atomic::{AtomicBool, Ordering};

mod commands;
mod config;

use commands::{
    completions::cmd_completions,
    connect::cmd_connect,
    list::{cmd_find, cmd_list, cmd_list_usb},
};
use config::Config;

/// Whether stderr is a terminal (set once at startup).
static STDERR_IS_TTY: AtomicBool = AtomicBool::new(true);

/// Set by the Ctrl-C handler.
static INTERRUPTED: AtomicBool = AtomicBool::new(false);

/// Check if spinners and symbols should be used (TTY and colors enabled).
pub(crate) fn use_fancy_output() -> bool {
    STDERR_IS_TTY.load(Ordering::Relaxed) && console::colors_enabled_stderr()
}

/// Whether Ctrl-C was pressed.
pub(crate) fn was_interrupted() -> bool {
    INTERRUPTED.load(Ordering::SeqCst)
}

/// Install the Ctrl-C handler that sets the interrupt flag.
pub(crate) fn install_interrupt_handler() -> Result<()> {
    ctrlc::set_handler(|| INTERRUPTED.store(true, Ordering::SeqCst))?;
    Ok(())
}

/// CLI-level failures with their own exit codes.
#[derive(Debug, thiserror::Error)]
pub(crate) enum CliError {
    /// Invalid or missing arguments (exit code 2).
    #[error("{0}")]
    Usage(String),
}

/// Map an error to the process exit code.
fn exit_code_for(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<CliError>() {
        Some(CliError::Usage(_)) => 2,
        None => 1,
    }
}

/// serialfind - Find USB serial devices by metadata and connect to them.
///
/// Environment variables:
///   SERIALFIND_BAUD   - Default baud rate for `connect`
///   RUST_LOG          - Log filter (overrides -v/-q)
#[derive(Parser)]
#[command(name = "serialfind")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output level (-v, -vv for increasing detail).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (suppress non-essential output).
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to a configuration file.
    #[arg(long = "config", global = true, value_name = "PATH")]
    config_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Available commands.
#[derive(Subcommand)]
enum Commands {
    /// List serial ports that can be opened (opens each candidate once).
    List {
        /// Output port list as JSON to stdout.
        #[arg(long)]
        json: bool,
    },

    /// List USB serial ports with description and hardware id.
    ListUsb {
        /// Output port list as JSON to stdout.
        #[arg(long)]
        json: bool,
    },

    /// Find USB serial ports whose metadata contains every token.
    Find {
        /// Search tokens (e.g. VID:PID, serial number, product name).
        tokens: Vec<String>,

        /// Output matching ports as JSON to stdout.
        #[arg(long)]
        json: bool,
    },

    /// Open the first USB serial port whose metadata contains every token.
    Connect {
        /// Search tokens (e.g. VID:PID, serial number, product name).
        tokens: Vec<String>,

        /// Baud rate for the connection.
        #[arg(short, long, env = "SERIALFIND_BAUD")]
        baud: Option<u32>,

        /// Stream received data to stdout until Ctrl-C.
        #[arg(long)]
        monitor: bool,
    },

    /// Generate shell completion scripts.
    Completions {
        /// Shell type for completions.
        #[arg(value_enum)]
        shell: Shell,
    },
}

fn init_logging(cli: &Cli) {
    let log_level = if cli.quiet {
        "warn"
    } else {
        match cli.verbose {
            0 => "info",
            1 => "debug",
            _ => "trace",
        }
    };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level))
        .format_target(cli.verbose >= 2)
        .format_timestamp(if cli.verbose >= 2 {
            Some(env_logger::TimestampPrecision::Millis)
        } else {
            None
        })
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let config = if let Some(ref path) = cli.config_path {
        Config::load_from_path(path)
    } else {
        Config::load()
    };

    match &cli.command {
        Commands::List { json } => cmd_list(cli, *json),
        Commands::ListUsb { json } => cmd_list_usb(cli, *json),
        Commands::Find { tokens, json } => cmd_find(cli, tokens, *json),
        Commands::Connect {
            tokens,
            baud,
            monitor,
        } => cmd_connect(cli, &config, tokens, *baud, *monitor),
        Commands::Completions { shell } => {
            cmd_completions(*shell);
            Ok(())
        },
    }
}

fn main() -> ExitCode {
    let stderr_is_tty = console::Term::stderr().is_term();
    STDERR_IS_TTY.store(stderr_is_tty, Ordering::Relaxed);

    if env::var("NO_COLOR").is_ok() || !stderr_is_tty {
        console::set_colors_enabled(false);
        console::set_colors_enabled_stderr(false);
    }

    let cli = Cli::parse();
    init_logging(&cli);

    debug!(
        "serialfind v{} (verbose level: {})",
        env!("CARGO_PKG_VERSION"),
        cli.verbose
    );

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("{} {err:#}", console::style("Error:").red().bold());
            ExitCode::from(exit_code_for(&err))
        },
    }
}

//! `connect` command implementation.

use anyhow::Result;
use console::style;
use serialfind::{NativePort, Port};
use std::io::{self, Read as _, Write as _};

use crate::config::Config;
use crate::{Cli, CliError, install_interrupt_handler, was_interrupted};

/// Pick the baud rate: CLI flag or `SERIALFIND_BAUD` first, then config.
pub(crate) fn resolve_baud(cli_baud: Option<u32>, config: &Config) -> Result<u32> {
    match cli_baud.or(config.connection.baud) {
        Some(0) => Err(CliError::Usage("Baud rate must be greater than zero".to_string()).into()),
        Some(baud) => Ok(baud),
        None => Err(CliError::Usage(
            "No baud rate given. Use --baud, SERIALFIND_BAUD or [connection] baud in serialfind.toml"
                .to_string(),
        )
        .into()),
    }
}

/// Connect command implementation.
pub(crate) fn cmd_connect(
    cli: &Cli,
    config: &Config,
    tokens: &[String],
    baud: Option<u32>,
    monitor: bool,
) -> Result<()> {
    let baud = resolve_baud(baud, config)?;

    if monitor {
        install_interrupt_handler()?;
        return serialfind::with_usb_serial(tokens, baud, |port| {
            report_connected(cli, port);
            if !cli.quiet {
                eprintln!("{}", style("Monitoring, press Ctrl-C to exit").dim());
            }
            monitor_port(port, &mut io::stdout().lock(), was_interrupted)
        })
        .map_err(Into::into);
    }

    let mut port = serialfind::connect_usb_serial_find(tokens, baud)?;
    report_connected(cli, &port);
    println!("{}", port.name());
    port.close()?;

    Ok(())
}

fn report_connected(cli: &Cli, port: &NativePort) {
    if cli.quiet {
        return;
    }
    eprintln!(
        "{} Connected to {} at {} baud (timeout {}s)",
        style("✓").green(),
        style(port.name()).cyan().bold(),
        port.baud_rate(),
        port.timeout().as_secs()
    );
}

/// Copy bytes from `port` to `out` until `stop` returns true.
///
/// Read timeouts only mean the device was quiet.
pub(crate) fn monitor_port<P, W, S>(port: &mut P, out: &mut W, stop: S) -> serialfind::Result<()>
where
    P: Port + ?Sized,
    W: io::Write,
    S: Fn() -> bool,
{
    let mut buf = [0u8; 1024];

    while !stop() {
        match port.read(&mut buf) {
            Ok(0) => {},
            Ok(n) => {
                out.write_all(&buf[..n])?;
                out.flush()?;
            },
            Err(e) if matches!(e.kind(), io::ErrorKind::TimedOut | io::ErrorKind::Interrupted) => {},
            Err(e) => return Err(e.into()),
        }
    }

    Ok(())
}

//! `list`, `list-usb` and `find` commands.
//!
//! Port names go to stdout, one per line, so they can be piped; headers and
//! hints go to stderr.

use anyhow::Result;
use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use serialfind::{PortDescriptor, format_descriptor_list};
use std::time::Duration;

use crate::{Cli, use_fancy_output};

fn probe_spinner() -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} [{elapsed_precise}] {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_draw_target(indicatif::ProgressDrawTarget::stderr());
    pb.set_message("Probing serial ports...");
    pb.enable_steady_tick(Duration::from_millis(100));
    pb
}

/// List command implementation.
pub(crate) fn cmd_list(cli: &Cli, json: bool) -> Result<()> {
    let spinner = (!cli.quiet && !json && use_fancy_output()).then(probe_spinner);
    let result = serialfind::list_serial_ports();
    if let Some(pb) = spinner {
        pb.finish_and_clear();
    }
    let ports = result?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ports)?);
        return Ok(());
    }

    if !cli.quiet {
        eprintln!("{}", style("Openable serial ports:").bold().underlined());
        eprintln!(
            "  {}",
            style("(each port was opened once; boards with auto-reset may have restarted)").dim()
        );
    }

    if ports.is_empty() {
        if !cli.quiet {
            eprintln!("  {}", style("No serial ports found").dim());
        }
        return Ok(());
    }

    for port in &ports {
        println!("{port}");
    }

    Ok(())
}

/// List-USB command implementation.
pub(crate) fn cmd_list_usb(cli: &Cli, json: bool) -> Result<()> {
    let ports = serialfind::list_usb_serial_ports()?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ports)?);
        return Ok(());
    }

    if !cli.quiet {
        eprintln!("{}", style("USB serial ports:").bold().underlined());
    }

    if ports.is_empty() {
        if !cli.quiet {
            eprintln!("  {}", style("No USB serial device detected").dim());
        }
        return Ok(());
    }

    if use_fancy_output() {
        for port in &ports {
            println!("{}", styled_descriptor(port));
        }
    } else {
        for line in format_descriptor_list(&ports) {
            println!("{line}");
        }
    }

    Ok(())
}

/// Find command implementation.
pub(crate) fn cmd_find(cli: &Cli, tokens: &[String], json: bool) -> Result<()> {
    let ports = serialfind::usb_serial_find(tokens)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&ports)?);
        return Ok(());
    }

    if !cli.quiet && ports.len() > 1 {
        eprintln!(
            "{} {} devices match, `connect` uses the first",
            style("→").green().bold(),
            ports.len()
        );
    }

    for port in &ports {
        println!("{port}");
    }

    Ok(())
}

fn styled_descriptor(port: &PortDescriptor) -> String {
    format!(
        "{}  {}  {}",
        style(&port.port).cyan(),
        port.description,
        style(&port.hwid).dim()
    )
}

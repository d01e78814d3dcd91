//! # serialfind
//!
//! Find serial devices on the host and connect to them.
//!
//! This crate wraps the `serialport` crate's enumeration and open primitives
//! with four operations:
//!
//! - [`list_serial_ports`]: platform candidates that can actually be opened
//! - [`list_usb_serial_ports`]: USB-attached ports with description and hardware id
//! - [`usb_serial_find`]: USB ports whose metadata contains every search token
//! - [`connect_usb_serial_find`]: open the first matching USB port
//!
//! ## Supported Platforms
//!
//! - **Windows**: `COM1` .. `COM256`
//! - **Linux**: `/dev/tty[A-Za-z]*`
//! - **Darwin**: `/dev/tty.*`
//!
//! Anything else fails with [`Error::UnsupportedPlatform`].
//!
//! ## Features
//!
//! - `serde`: Serialization support for [`PortDescriptor`] and [`Platform`]
//!
//! ## Example
//!
//! ```rust,no_run
//! use serialfind::Port;
//! use std::io::Write;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Arduino Uno: VID 2341, PID 0043
//!     let mut port = serialfind::connect_usb_serial_find(&["2341:0043"], 9600)?;
//!     println!("Connected to {}", port.name());
//!
//!     port.write_all(b"hello\n")?;
//!     port.close()?;
//!
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod backend;
pub mod device;
pub mod error;
pub mod finder;
pub mod host;
pub mod platform;
pub mod port;

// Re-exports for convenience
pub use {
    backend::{NativeBackend, PROBE_BAUD_RATE, PortBackend},
    device::{PortDescriptor, format_descriptor_list, usb_hwid},
    error::{Error, Result},
    finder::{CONNECT_TIMEOUT, Finder},
    host::{
        connect_usb_serial_find, list_serial_ports, list_usb_serial_ports, usb_serial_find,
        with_usb_serial,
    },
    platform::Platform,
    port::{NativePort, Port, SerialConfig},
};

//! Serial connection handles.
//!
//! [`Port`] is the handle returned by a successful connect. The production
//! implementation is [`NativePort`], backed by the `serialport` crate; any
//! [`PortBackend`](crate::backend::PortBackend) can supply its own type.
//!
//! ## Example
//!
//! ```rust,no_run
//! use serialfind::port::{NativePort, Port, SerialConfig};
//! use std::io::Read;
//! use std::time::Duration;
//!
//! fn main() -> serialfind::Result<()> {
//!     let config = SerialConfig::new("/dev/ttyUSB0", 115200).with_timeout(Duration::from_secs(2));
//!     let mut port = NativePort::open(&config)?;
//!
//!     let mut buf = [0u8; 64];
//!     let n = port.read(&mut buf)?;
//!     println!("{}: {:?}", port.name(), &buf[..n]);
//!
//!     port.close()
//! }
//! ```

pub mod native;

use std::io::{Read, Write};
use std::time::Duration;

use crate::error::Result;

pub use native::NativePort;

/// Parameters for opening a port.
///
/// Framing is always 8N1 without flow control.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SerialConfig {
    /// Port name/path (e.g., "/dev/ttyUSB0", "COM3").
    pub port_name: String,
    /// Baud rate.
    pub baud_rate: u32,
    /// Read/write timeout.
    pub timeout: Duration,
}

impl SerialConfig {
    /// Default read/write timeout.
    pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(1000);

    /// Create a new configuration with port name and baud rate.
    pub fn new(port_name: impl Into<String>, baud_rate: u32) -> Self {
        Self {
            port_name: port_name.into(),
            baud_rate,
            timeout: Self::DEFAULT_TIMEOUT,
        }
    }

    /// Set the timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

/// An open serial connection.
///
/// The handle belongs to whoever opened it. Dropping it releases the device;
/// [`close`](Port::close) does the same eagerly.
pub trait Port: Read + Write + Send {
    /// Get the port name/path.
    fn name(&self) -> &str;

    /// Get the baud rate the port was opened at.
    fn baud_rate(&self) -> u32;

    /// Get the read/write timeout.
    fn timeout(&self) -> Duration;

    /// Check whether the port is still open.
    fn is_open(&self) -> bool;

    /// Close the port and release the device.
    ///
    /// Further I/O fails with `NotConnected`. Closing twice is a no-op.
    fn close(&mut self) -> Result<()>;
}

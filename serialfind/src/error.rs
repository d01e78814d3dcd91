//! Error types for serialfind.

use std::io;
use thiserror::Error;

/// Result type for serialfind operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for serialfind operations.
#[derive(Debug, Error)]
pub enum Error {
    /// I/O error (device directory scan, port I/O).
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Serial port enumeration failed.
    #[error("Serial port error: {0}")]
    Serial(#[from] serialport::Error),

    /// The host operating system is not one of the supported families.
    #[error("Unsupported platform: {0}")]
    UnsupportedPlatform(String),

    /// No USB serial device is attached at all.
    #[error("No USB serial device detected")]
    NoDeviceDetected,

    /// USB serial devices exist, but none contains every search token.
    #[error("No USB serial device matches {tokens:?}")]
    NoDeviceMatches {
        /// The search tokens that failed to match.
        tokens: Vec<String>,
    },

    /// Opening an identified port failed.
    #[error("Failed to open {port}: {source}")]
    Open {
        /// Port that could not be opened.
        port: String,
        /// Underlying serial port error.
        #[source]
        source: serialport::Error,
    },
}

impl Error {
    /// Whether this error means the search found nothing to connect to.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NoDeviceDetected | Self::NoDeviceMatches { .. })
    }
}

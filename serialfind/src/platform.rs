//! Host platform detection and serial device naming conventions.
//!
//! Each supported platform exposes serial ports under its own naming scheme:
//!
//! | Platform | Candidates                  |
//! |----------|-----------------------------|
//! | Windows  | `COM1` .. `COM256`          |
//! | Linux    | `/dev/tty[A-Za-z]*`         |
//! | Darwin   | `/dev/tty.*`                |

use crate::error::{Error, Result};
use std::ffi::OsString;
use std::path::Path;
use std::{fs, io};

/// Highest COM port number probed on Windows.
pub const MAX_COM_PORT: u16 = 256;

/// Directory holding device nodes on Unix-like platforms.
pub const DEV_DIR: &str = "/dev";

/// Supported platform families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Platform {
    /// Windows (`COMn` port names).
    Windows,
    /// Linux and other Linux-like systems (`/dev/ttyXXX` nodes).
    Linux,
    /// macOS and other Darwin systems (`/dev/tty.XXX` nodes).
    Darwin,
}

impl Platform {
    /// Detect the platform this process runs on.
    pub fn current() -> Result<Self> {
        Self::from_os(std::env::consts::OS)
    }

    /// Map an OS identifier to a platform family.
    ///
    /// Accepts the values of `std::env::consts::OS` as well as the
    /// `darwin` / `cygwin` spellings used by other runtimes.
    pub fn from_os(os: &str) -> Result<Self> {
        match os {
            "windows" => Ok(Self::Windows),
            "linux" | "android" | "cygwin" => Ok(Self::Linux),
            "macos" | "darwin" | "ios" => Ok(Self::Darwin),
            other => Err(Error::UnsupportedPlatform(other.to_string())),
        }
    }

    /// Get a human-readable name for the platform.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Windows => "Windows",
            Self::Linux => "Linux",
            Self::Darwin => "Darwin",
        }
    }

    /// Check whether a device node file name matches this platform's
    /// serial candidate pattern.
    ///
    /// Windows has no device directory, so nothing matches there.
    pub fn is_candidate_name(&self, file_name: &str) -> bool {
        match self {
            Self::Windows => false,
            Self::Linux => file_name
                .strip_prefix("tty")
                .and_then(|rest| rest.chars().next())
                .is_some_and(|c| c.is_ascii_alphabetic()),
            Self::Darwin => file_name.starts_with("tty."),
        }
    }

    /// Produce the candidate serial port names for this platform.
    pub fn candidates(&self) -> Result<Vec<String>> {
        match self {
            Self::Windows => Ok(com_port_names()),
            Self::Linux | Self::Darwin => self.scan_dir(Path::new(DEV_DIR)),
        }
    }

    /// Collect entries of `dir` whose names match the candidate pattern,
    /// sorted by path.
    ///
    /// Only an unreadable `dir` is an error; entries that cannot be read are
    /// skipped.
    pub fn scan_dir(&self, dir: &Path) -> Result<Vec<String>> {
        let names = fs::read_dir(dir)?.map(|entry| entry.map(|e| e.file_name()));
        Ok(self.matching_paths(dir, names))
    }

    fn matching_paths<I>(&self, dir: &Path, names: I) -> Vec<String>
    where
        I: IntoIterator<Item = io::Result<OsString>>,
    {
        let mut found: Vec<String> = names
            .into_iter()
            .flatten()
            .filter_map(|name| {
                let name = name.to_str()?;
                self.is_candidate_name(name)
                    .then(|| dir.join(name).to_string_lossy().into_owned())
            })
            .collect();

        found.sort();
        found
    }
}

/// `COM1` through `COM256`, in numeric order.
fn com_port_names() -> Vec<String> {
    (1..=MAX_COM_PORT).map(|n| format!("COM{n}")).collect()
}

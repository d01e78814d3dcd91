//! Host backend built on the `serialport` crate.

use {
    crate::{
        backend::PortBackend,
        device::PortDescriptor,
        error::{Error, Result},
        platform::Platform,
        port::{NativePort, SerialConfig},
    },
    log::{debug, trace},
};

/// Backend talking to the real operating system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NativeBackend {
    platform: Platform,
}

impl NativeBackend {
    /// Create a backend for the platform this process runs on.
    ///
    /// Fails with [`Error::UnsupportedPlatform`] on unknown systems.
    pub fn new() -> Result<Self> {
        Platform::current().map(Self::for_platform)
    }

    /// Create a backend for a specific platform.
    pub fn for_platform(platform: Platform) -> Self {
        Self { platform }
    }

    /// Create a backend from an OS identifier such as `"linux"`.
    pub fn for_os(os: &str) -> Result<Self> {
        Platform::from_os(os).map(Self::for_platform)
    }

    /// The platform this backend enumerates for.
    pub fn platform(&self) -> Platform {
        self.platform
    }
}

impl PortBackend for NativeBackend {
    type Port = NativePort;

    fn list_candidates(&self) -> Result<Vec<String>> {
        let candidates = self.platform.candidates()?;
        debug!(
            "{} candidate serial ports on {}",
            candidates.len(),
            self.platform.name()
        );
        Ok(candidates)
    }

    fn list_descriptors(&self) -> Result<Vec<PortDescriptor>> {
        let ports = serialport::available_ports().map_err(Error::Serial)?;

        let descriptors: Vec<PortDescriptor> = ports
            .into_iter()
            .map(PortDescriptor::from)
            .inspect(|d| trace!("Found port: {d}"))
            .collect();

        debug!(
            "Enumerated {} serial ports on {}",
            descriptors.len(),
            self.platform.name()
        );
        Ok(descriptors)
    }

    fn open(&self, config: &SerialConfig) -> Result<Self::Port> {
        NativePort::open(config)
    }
}

//! Enumeration and open primitives.
//!
//! A [`PortBackend`] supplies everything the finder needs from the host:
//! candidate port names, port descriptors and an open call. The backend is
//! chosen once; [`NativeBackend`] binds it to the current [`Platform`].
//!
//! [`Platform`]: crate::platform::Platform

pub mod native;

#[cfg(test)]
pub(crate) mod fixture;

use crate::{
    device::PortDescriptor,
    error::Result,
    port::{Port, SerialConfig},
};

pub use native::NativeBackend;

/// Baud rate used when probing whether a candidate can be opened.
pub const PROBE_BAUD_RATE: u32 = 9600;

/// Host capabilities used by the finder.
pub trait PortBackend {
    /// Handle type returned by [`open`](Self::open).
    type Port: Port;

    /// List candidate serial port names for the platform, before probing.
    fn list_candidates(&self) -> Result<Vec<String>>;

    /// Enumerate serial ports with their description and hardware id.
    fn list_descriptors(&self) -> Result<Vec<PortDescriptor>>;

    /// Open a port.
    fn open(&self, config: &SerialConfig) -> Result<Self::Port>;

    /// Check whether `port_name` can be opened right now.
    ///
    /// Opens and immediately closes the device. Any failure simply yields
    /// `false`.
    fn probe(&self, port_name: &str) -> bool {
        match self.open(&SerialConfig::new(port_name, PROBE_BAUD_RATE)) {
            Ok(mut port) => {
                let _ = port.close();
                true
            },
            Err(_) => false,
        }
    }
}

impl<B: PortBackend + ?Sized> PortBackend for &B {
    type Port = B::Port;

    fn list_candidates(&self) -> Result<Vec<String>> {
        (**self).list_candidates()
    }

    fn list_descriptors(&self) -> Result<Vec<PortDescriptor>> {
        (**self).list_descriptors()
    }

    fn open(&self, config: &SerialConfig) -> Result<Self::Port> {
        (**self).open(config)
    }

    fn probe(&self, port_name: &str) -> bool {
        (**self).probe(port_name)
    }
}

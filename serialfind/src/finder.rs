//! Port listing, USB search and connection.
//!
//! [`Finder`] is stateless apart from its backend: every call re-enumerates,
//! so successive results follow hot-plug events.

use {
    crate::{
        backend::PortBackend,
        device::PortDescriptor,
        error::{Error, Result},
        port::{Port, SerialConfig},
    },
    log::{debug, info},
    std::time::Duration,
};

/// Read timeout applied to connections opened by the finder.
pub const CONNECT_TIMEOUT: Duration = Duration::from_secs(2);

/// Searches and opens serial ports through a [`PortBackend`].
#[derive(Debug, Clone)]
pub struct Finder<B> {
    backend: B,
}

impl<B: PortBackend> Finder<B> {
    /// Create a finder over `backend`.
    pub fn new(backend: B) -> Self {
        Self { backend }
    }

    /// Get the backend.
    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// List serial ports that can be opened right now.
    ///
    /// Every platform candidate is opened and immediately closed; the ones
    /// that fail are dropped without error. The result keeps candidate order.
    ///
    /// **Caveat:** probing really opens the device. Boards that reset on
    /// connection (e.g. Arduino auto-reset on DTR) will reset.
    pub fn list_serial_ports(&self) -> Result<Vec<String>> {
        let candidates = self.backend.list_candidates()?;
        let total = candidates.len();

        let ports: Vec<String> = candidates
            .into_iter()
            .filter(|name| self.backend.probe(name))
            .collect();

        debug!("{} of {} candidate ports opened", ports.len(), total);
        Ok(ports)
    }

    /// List USB-attached serial ports.
    pub fn list_usb_serial_ports(&self) -> Result<Vec<PortDescriptor>> {
        Ok(self
            .backend
            .list_descriptors()?
            .into_iter()
            .filter(PortDescriptor::is_usb)
            .collect())
    }

    /// Find USB serial ports whose description and hardware id contain every
    /// token.
    ///
    /// Returns the matching port names in enumeration order. Fails with
    /// [`Error::NoDeviceDetected`] when no USB serial port exists, and with
    /// [`Error::NoDeviceMatches`] when ports exist but none matches. An empty
    /// token list matches every USB serial port.
    pub fn usb_serial_find<S: AsRef<str>>(&self, tokens: &[S]) -> Result<Vec<String>> {
        let ports = self.list_usb_serial_ports()?;
        if ports.is_empty() {
            return Err(Error::NoDeviceDetected);
        }

        if tokens.is_empty() {
            debug!("No search tokens given, every USB serial port matches");
        }

        let found: Vec<String> = ports
            .into_iter()
            .filter(|p| p.matches(tokens))
            .map(|p| p.port)
            .collect();

        if found.is_empty() {
            return Err(Error::NoDeviceMatches {
                tokens: tokens.iter().map(|t| t.as_ref().to_string()).collect(),
            });
        }

        debug!("USB serial ports matching search: {found:?}");
        Ok(found)
    }

    /// Open the first USB serial port matching every token.
    ///
    /// The port is opened at `baud_rate` with [`CONNECT_TIMEOUT`]. The caller
    /// owns the returned handle; nothing closes it on the caller's behalf.
    pub fn connect_usb_serial_find<S: AsRef<str>>(
        &self,
        tokens: &[S],
        baud_rate: u32,
    ) -> Result<B::Port> {
        // usb_serial_find never returns an empty list.
        let port_name = self.usb_serial_find(tokens)?.swap_remove(0);

        let config = SerialConfig::new(port_name, baud_rate).with_timeout(CONNECT_TIMEOUT);
        let port = self.backend.open(&config)?;
        info!("Open USB serial port: {}", port.name());

        Ok(port)
    }

    /// Connect like [`connect_usb_serial_find`](Self::connect_usb_serial_find),
    /// run `f` on the open port, then close it.
    ///
    /// The port is closed whether `f` succeeds or fails; `f`'s error wins
    /// over a close error.
    pub fn with_usb_serial<S, T, F>(&self, tokens: &[S], baud_rate: u32, f: F) -> Result<T>
    where
        S: AsRef<str>,
        F: FnOnce(&mut B::Port) -> Result<T>,
    {
        let mut port = self.connect_usb_serial_find(tokens, baud_rate)?;
        let result = f(&mut port);
        let closed = port.close();

        let value = result?;
        closed?;
        Ok(value)
    }
}

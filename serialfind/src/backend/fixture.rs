//! In-memory backend for tests.

use {
    crate::{
        backend::PortBackend,
        device::PortDescriptor,
        error::{Error, Result},
        port::{Port, SerialConfig},
    },
    std::{
        cell::RefCell,
        collections::HashSet,
        io::{self, Read, Write},
        sync::{Arc, Mutex},
        time::Duration,
    },
};

/// Backend with a fixed set of candidates, descriptors and openable ports.
#[derive(Debug, Default)]
pub(crate) struct FixtureBackend {
    pub candidates: Vec<String>,
    pub descriptors: Vec<PortDescriptor>,
    pub openable: HashSet<String>,
    /// Every port name passed to `open`, in call order.
    pub opened: RefCell<Vec<String>>,
    /// Port names closed through `Port::close`, in call order.
    pub closed: Arc<Mutex<Vec<String>>>,
}

impl FixtureBackend {
    pub fn with_descriptors(descriptors: Vec<PortDescriptor>) -> Self {
        let openable = descriptors.iter().map(|d| d.port.clone()).collect();
        Self {
            descriptors,
            openable,
            ..Default::default()
        }
    }

    /// The two-device fixture: an Arduino Uno on COM3 and an FTDI adapter on COM5.
    pub fn arduino_and_ftdi() -> Self {
        Self::with_descriptors(vec![
            PortDescriptor::new("COM3", "Arduino Uno", "USB VID:PID=2341:0043 SER=55:0001"),
            PortDescriptor::new("COM5", "Generic", "USB VID:PID=0403:6001"),
        ])
    }
}

impl PortBackend for FixtureBackend {
    type Port = FixturePort;

    fn list_candidates(&self) -> Result<Vec<String>> {
        Ok(self.candidates.clone())
    }

    fn list_descriptors(&self) -> Result<Vec<PortDescriptor>> {
        Ok(self.descriptors.clone())
    }

    fn open(&self, config: &SerialConfig) -> Result<Self::Port> {
        self.opened.borrow_mut().push(config.port_name.clone());

        if !self.openable.contains(&config.port_name) {
            return Err(Error::Open {
                port: config.port_name.clone(),
                source: serialport::Error::new(serialport::ErrorKind::NoDevice, "no such device"),
            });
        }

        Ok(FixturePort {
            config: config.clone(),
            open: true,
            rx: Vec::new(),
            tx: Vec::new(),
            closed: Arc::clone(&self.closed),
        })
    }
}

/// Port handle that serves `rx` to reads and records writes in `tx`.
#[derive(Debug)]
pub(crate) struct FixturePort {
    pub config: SerialConfig,
    pub open: bool,
    pub rx: Vec<u8>,
    pub tx: Vec<u8>,
    closed: Arc<Mutex<Vec<String>>>,
}

impl Port for FixturePort {
    fn name(&self) -> &str {
        &self.config.port_name
    }

    fn baud_rate(&self) -> u32 {
        self.config.baud_rate
    }

    fn timeout(&self) -> Duration {
        self.config.timeout
    }

    fn is_open(&self) -> bool {
        self.open
    }

    fn close(&mut self) -> Result<()> {
        if self.open {
            self.open = false;
            if let Ok(mut closed) = self.closed.lock() {
                closed.push(self.config.port_name.clone());
            }
        }
        Ok(())
    }
}

impl Read for FixturePort {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        let n = buf.len().min(self.rx.len());
        buf[..n].copy_from_slice(&self.rx[..n]);
        self.rx.drain(..n);
        Ok(n)
    }
}

impl Write for FixturePort {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if !self.open {
            return Err(io::Error::new(io::ErrorKind::NotConnected, "port closed"));
        }
        self.tx.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

//! Port descriptors and metadata search.
//!
//! A [`PortDescriptor`] is the `(port, description, hwid)` triple produced by
//! enumeration. USB ports carry a hardware id of the form
//! `USB VID:PID=2341:0043 SER=55:0001`, which is what makes vendor, product and
//! serial number searchable as plain text.

use std::fmt;

/// Marker every USB hardware id contains.
pub const USB_MARKER: &str = "USB";

/// Placeholder used when a port has no description or hardware id.
pub const NOT_AVAILABLE: &str = "n/a";

/// One enumerated serial port.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PortDescriptor {
    /// Platform-assigned identifier (e.g., "/dev/ttyUSB0" or "COM3").
    pub port: String,
    /// Human-readable description.
    pub description: String,
    /// Hardware address string.
    pub hwid: String,
}

impl PortDescriptor {
    /// Create a descriptor from its three parts.
    pub fn new(
        port: impl Into<String>,
        description: impl Into<String>,
        hwid: impl Into<String>,
    ) -> Self {
        Self {
            port: port.into(),
            description: description.into(),
            hwid: hwid.into(),
        }
    }

    /// Check if the hardware id marks this as a USB-attached port.
    pub fn is_usb(&self) -> bool {
        self.hwid.contains(USB_MARKER)
    }

    /// Text searched by [`matches`](Self::matches): description then hwid.
    pub fn search_text(&self) -> String {
        format!("{}{}", self.description, self.hwid)
    }

    /// Check that every token occurs in the search text.
    ///
    /// Matching is plain, case-sensitive substring containment. An empty
    /// token list matches every descriptor.
    pub fn matches<S: AsRef<str>>(&self, tokens: &[S]) -> bool {
        let text = self.search_text();
        tokens.iter().all(|token| text.contains(token.as_ref()))
    }
}

impl fmt::Display for PortDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} - {} [{}]", self.port, self.description, self.hwid)
    }
}

impl From<serialport::SerialPortInfo> for PortDescriptor {
    fn from(info: serialport::SerialPortInfo) -> Self {
        let (description, hwid) = match &info.port_type {
            serialport::SerialPortType::UsbPort(usb) => (
                usb_description(usb.product.as_deref(), usb.manufacturer.as_deref()),
                usb_hwid(usb.vid, usb.pid, usb.serial_number.as_deref()),
            ),
            serialport::SerialPortType::PciPort => (NOT_AVAILABLE.to_string(), "PCI".to_string()),
            serialport::SerialPortType::BluetoothPort => {
                (NOT_AVAILABLE.to_string(), "BLUETOOTH".to_string())
            },
            serialport::SerialPortType::Unknown => {
                (NOT_AVAILABLE.to_string(), NOT_AVAILABLE.to_string())
            },
        };

        Self {
            port: info.port_name,
            description,
            hwid,
        }
    }
}

/// Build a USB hardware id string: `USB VID:PID=XXXX:XXXX[ SER=...]`.
pub fn usb_hwid(vid: u16, pid: u16, serial: Option<&str>) -> String {
    let mut hwid = format!("{USB_MARKER} VID:PID={vid:04X}:{pid:04X}");
    if let Some(serial) = serial.filter(|s| !s.is_empty()) {
        hwid.push_str(" SER=");
        hwid.push_str(serial);
    }
    hwid
}

fn usb_description(product: Option<&str>, manufacturer: Option<&str>) -> String {
    product
        .filter(|p| !p.is_empty())
        .or(manufacturer.filter(|m| !m.is_empty()))
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Format a list of descriptors for display.
pub fn format_descriptor_list(ports: &[PortDescriptor]) -> Vec<String> {
    ports.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serialport::{SerialPortInfo, SerialPortType, UsbPortInfo};

    fn arduino() -> PortDescriptor {
        PortDescriptor::new("COM3", "Arduino Uno", "USB VID:PID=2341:0043 SER=55:0001")
    }

    #[test]
    fn test_is_usb_is_case_sensitive() {
        assert!(arduino().is_usb());
        assert!(!PortDescriptor::new("/dev/ttyS0", "n/a", "n/a").is_usb());
        assert!(!PortDescriptor::new("COM9", "adapter", "usb vid:pid=1234:5678").is_usb());
    }

    #[test]
    fn test_matches_all_tokens() {
        let port = arduino();
        assert!(port.matches(&["2341"]));
        assert!(port.matches(&["Arduino", "0043", "SER=55"]));
        assert!(!port.matches(&["2341", "9999"]));
        assert!(!port.matches(&["arduino"]));
    }

    #[test]
    fn test_matches_across_description_and_hwid_boundary() {
        // Search text is the plain concatenation of both fields.
        let port = PortDescriptor::new("COM4", "Board", "USB VID:PID=0403:6001");
        assert!(port.matches(&["BoardUSB"]));
    }

    #[test]
    fn test_empty_tokens_match_everything() {
        let none: [&str; 0] = [];
        assert!(arduino().matches(&none));
    }

    #[test]
    fn test_usb_hwid_format() {
        assert_eq!(usb_hwid(0x2341, 0x0043, Some("55:0001")), "USB VID:PID=2341:0043 SER=55:0001");
        assert_eq!(usb_hwid(0x0403, 0x6001, None), "USB VID:PID=0403:6001");
        assert_eq!(usb_hwid(0x10C4, 0xEA60, Some("")), "USB VID:PID=10C4:EA60");
    }

    #[test]
    fn test_from_serialport_usb_info() {
        let info = SerialPortInfo {
            port_name: "/dev/ttyACM0".to_string(),
            port_type: SerialPortType::UsbPort(UsbPortInfo {
                vid: 0x2341,
                pid: 0x0043,
                serial_number: Some("55:0001".to_string()),
                manufacturer: Some("Arduino (www.arduino.cc)".to_string()),
                product: None,
            }),
        };

        let port = PortDescriptor::from(info);
        assert_eq!(port.port, "/dev/ttyACM0");
        assert_eq!(port.description, "Arduino (www.arduino.cc)");
        assert_eq!(port.hwid, "USB VID:PID=2341:0043 SER=55:0001");
        assert!(port.is_usb());
    }

    #[test]
    fn test_from_serialport_non_usb() {
        let info = SerialPortInfo {
            port_name: "/dev/ttyS0".to_string(),
            port_type: SerialPortType::Unknown,
        };
        let port = PortDescriptor::from(info);
        assert_eq!(port.description, NOT_AVAILABLE);
        assert!(!port.is_usb());

        let pci = PortDescriptor::from(SerialPortInfo {
            port_name: "/dev/ttyS4".to_string(),
            port_type: SerialPortType::PciPort,
        });
        assert_eq!(pci.hwid, "PCI");
        assert!(!pci.is_usb());
    }

    #[test]
    fn test_display_and_format_list() {
        let ports = vec![arduino(), PortDescriptor::new("COM5", "Generic", "USB VID:PID=0403:6001")];
        let formatted = format_descriptor_list(&ports);
        assert_eq!(formatted.len(), 2);
        assert_eq!(formatted[0], "COM3 - Arduino Uno [USB VID:PID=2341:0043 SER=55:0001]");
        assert!(formatted[1].starts_with("COM5"));
    }
}

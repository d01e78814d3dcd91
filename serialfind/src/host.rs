//! Host-side entry points bound to the native backend.
//!
//! Each call detects the current platform, so on unsupported systems every
//! function fails with [`Error::UnsupportedPlatform`](crate::Error::UnsupportedPlatform).

use crate::{
    backend::NativeBackend,
    device::PortDescriptor,
    error::Result,
    finder::Finder,
    port::NativePort,
};

fn native_finder() -> Result<Finder<NativeBackend>> {
    NativeBackend::new().map(Finder::new)
}

/// List serial ports on this host that can be opened right now.
///
/// **Caveat:** every candidate is really opened and closed, which resets
/// boards with auto-reset on connection.
pub fn list_serial_ports() -> Result<Vec<String>> {
    native_finder()?.list_serial_ports()
}

/// List USB-attached serial ports on this host.
pub fn list_usb_serial_ports() -> Result<Vec<PortDescriptor>> {
    native_finder()?.list_usb_serial_ports()
}

/// Find USB serial ports whose metadata contains every token.
pub fn usb_serial_find<S: AsRef<str>>(tokens: &[S]) -> Result<Vec<String>> {
    native_finder()?.usb_serial_find(tokens)
}

/// Open the first USB serial port whose metadata contains every token.
pub fn connect_usb_serial_find<S: AsRef<str>>(tokens: &[S], baud_rate: u32) -> Result<NativePort> {
    native_finder()?.connect_usb_serial_find(tokens, baud_rate)
}

/// Connect, run `f` on the open port, then close it.
pub fn with_usb_serial<S, T, F>(tokens: &[S], baud_rate: u32, f: F) -> Result<T>
where
    S: AsRef<str>,
    F: FnOnce(&mut NativePort) -> Result<T>,
{
    native_finder()?.with_usb_serial(tokens, baud_rate, f)
}

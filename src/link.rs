//! Byte-output seam towards the host transport.

/// Sink for response bytes heading back to the host.
///
/// The transport behind this is free to buffer; a byte with `last` set is
/// the final byte of a response and the moment to flush. How bytes
/// physically reach the host (USB, UART, anything else) is entirely the
/// implementation's business.
pub trait HostLink {
    fn put_byte(&mut self, byte: u8, last: bool);
}

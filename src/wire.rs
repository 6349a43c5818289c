//! Wire vocabulary of the remote protocol and the response encoders.
//!
//! Every response is framed the same way: the response marker, a one-byte
//! status, the payload, the end-of-message marker. The three `respond*`
//! functions here are the only way a command handler talks back to the
//! host, and each handler path goes through exactly one of them.

use crate::hex;
use crate::link::HostLink;

/// Start-of-message marker on incoming commands.
pub const SOM: u8 = b'!';
/// End-of-message marker closing every command and response.
pub const EOM: u8 = b'#';
/// First byte of every response.
pub const RESP: u8 = b'&';

/// Commands and responses never exceed this many bytes on the wire.
pub const MAX_MSG_SIZE: usize = 1024;

/// One-byte response status.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Status {
    /// Command executed.
    Ok,
    /// Generic failure; some commands attach an [`ErrorCode`] payload.
    Err,
    /// SWD read completed but the parity bit did not match.
    ParityError,
    /// This platform does not have the requested feature.
    NotSupported,
}

impl Status {
    pub const fn byte(self) -> u8 {
        match self {
            Status::Ok => b'K',
            Status::Err => b'E',
            Status::ParityError => b'P',
            Status::NotSupported => b'N',
        }
    }
}

/// Secondary detail carried as the integer payload of an [`Status::Err`]
/// response, where the failure class is known.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ErrorCode {
    /// Unknown packet class or sub-command byte.
    Unrecognised = 1,
    /// Command buffer length does not fit the sub-command.
    WrongLength = 2,
}

impl ErrorCode {
    pub const fn value(self) -> u64 {
        self as u64
    }
}

/// Sends a status plus integer response.
///
/// The value goes out least-significant nibble first and stops once the
/// remainder is zero, so zero still produces a single `0` digit.
pub fn respond(link: &mut impl HostLink, status: Status, mut value: u64) {
    link.put_byte(RESP, false);
    link.put_byte(status.byte(), false);
    loop {
        link.put_byte(hex::nibble_to_hex(value as u8), false);
        value >>= 4;
        if value == 0 {
            break;
        }
    }
    link.put_byte(EOM, true);
}

/// Sends a status plus raw bytes, each byte as a big-endian hex pair in
/// buffer order.
pub fn respond_buf(link: &mut impl HostLink, status: Status, bytes: &[u8]) {
    link.put_byte(RESP, false);
    link.put_byte(status.byte(), false);
    for &byte in bytes {
        let [hi, lo] = hex::byte_to_hex(byte);
        link.put_byte(hi, false);
        link.put_byte(lo, false);
    }
    link.put_byte(EOM, true);
}

/// Sends a status plus text.
///
/// The three framing bytes are clobbered with a blank so payload text can
/// never masquerade as protocol structure.
pub fn respond_str(link: &mut impl HostLink, status: Status, text: &str) {
    link.put_byte(RESP, false);
    link.put_byte(status.byte(), false);
    for byte in text.bytes() {
        match byte {
            RESP | SOM | EOM => link.put_byte(b' ', false),
            _ => link.put_byte(byte, false),
        }
    }
    link.put_byte(EOM, true);
}

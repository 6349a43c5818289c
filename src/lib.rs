//! Remote-protocol bridge for a debug probe.
//!
//! Decodes the ASCII/hex command protocol a host drives over the probe's
//! byte channel and turns each command into raw SWD/JTAG tap sequences or
//! memory/register transactions against an attached target. The byte
//! transport, the tap drivers, the board and the target layer all sit
//! behind traits; this crate only speaks the protocol.
//!
//! One command in, exactly one framed response out: hostile lengths,
//! truncated fields and unknown commands all terminate in an error
//! response rather than a firmware fault.

#![deny(unused_must_use)]

pub mod hex;
pub mod link;
pub mod platform;
pub mod remote;
pub mod scratch;
pub mod tap;
pub mod target;
pub mod wire;

pub use remote::Remote;

//! Decoding and dispatch of host commands.
//!
//! A command arrives as one complete, pre-framed byte slice: byte 0 selects
//! the packet class, byte 1 the sub-command, and the rest is hex-encoded
//! parameters. Exactly one framed response leaves through the
//! [`HostLink`], whatever the command contained.

mod general;
mod high_level;
mod jtag;
mod swd;

use crate::link::HostLink;
use crate::platform::Platform;
use crate::tap::{JtagTap, SwdTap};
use crate::target::{TargetBus, TargetSlot};
use crate::wire::{self, ErrorCode, Status};

/// Packet class selected by the first byte of a command.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum PacketClass {
    Swd,
    Jtag,
    General,
    HighLevel,
}

impl PacketClass {
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'S' => Some(Self::Swd),
            b'J' => Some(Self::Jtag),
            b'G' => Some(Self::General),
            b'H' => Some(Self::HighLevel),
            _ => None,
        }
    }
}

/// Parameter bytes of `packet` from offset `at`, empty when the packet is
/// shorter than that.
fn args(packet: &[u8], at: usize) -> &[u8] {
    packet.get(at..).unwrap_or_default()
}

/// The protocol bridge.
///
/// Owns the transport seam, the two tap drivers, the platform, the target
/// layer and the slot for the attached target, and turns each incoming
/// command into exactly one response. Processing is synchronous and
/// run-to-completion; nothing is retained from a packet once its response
/// is out.
pub struct Remote<L, S, J, P, B>
where
    L: HostLink,
    S: SwdTap,
    J: JtagTap,
    P: Platform,
    B: TargetBus,
{
    link: L,
    swd: S,
    jtag: J,
    platform: P,
    bus: B,
    target: TargetSlot<B::Target>,
}

impl<L, S, J, P, B> Remote<L, S, J, P, B>
where
    L: HostLink,
    S: SwdTap,
    J: JtagTap,
    P: Platform,
    B: TargetBus,
{
    pub fn new(link: L, swd: S, jtag: J, platform: P, bus: B) -> Self {
        Self {
            link,
            swd,
            jtag,
            platform,
            bus,
            target: TargetSlot::new(),
        }
    }

    /// The transport seam, mainly so the embedding firmware can reach it.
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Whether a scan/attach has stored a target.
    pub fn is_attached(&self) -> bool {
        self.target.is_attached()
    }

    /// Processes one pre-framed command and emits its response.
    pub fn process(&mut self, packet: &[u8]) {
        let class = packet.first().copied().and_then(PacketClass::from_byte);
        tracing::trace!(?class, len = packet.len(), "processing command");
        match class {
            Some(PacketClass::Swd) => swd::process(&mut self.link, &mut self.swd, packet),
            Some(PacketClass::Jtag) => jtag::process(&mut self.link, &mut self.jtag, packet),
            Some(PacketClass::General) => {
                general::process(&mut self.link, &mut self.platform, packet)
            }
            Some(PacketClass::HighLevel) => high_level::process(
                &mut self.link,
                &mut self.swd,
                &mut self.platform,
                &mut self.bus,
                &mut self.target,
                packet,
            ),
            None => wire::respond(&mut self.link, Status::Err, ErrorCode::Unrecognised.value()),
        }
    }
}

//! Low-level JTAG state-machine commands.

use super::args;
use crate::hex::parse_hex;
use crate::link::HostLink;
use crate::tap::JtagTap;
use crate::wire::{respond, ErrorCode, Status};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Init,
    Reset,
    TmsSequence,
    ShiftFinalTms,
    Shift,
    Clock,
}

impl Command {
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'S' => Some(Self::Init),
            b'R' => Some(Self::Reset),
            b'T' => Some(Self::TmsSequence),
            b'D' => Some(Self::ShiftFinalTms),
            b'd' => Some(Self::Shift),
            b'N' => Some(Self::Clock),
            _ => None,
        }
    }
}

pub(super) fn process<L: HostLink, J: JtagTap>(link: &mut L, tap: &mut J, packet: &[u8]) {
    let Some(cmd) = packet.get(1).copied().and_then(Command::from_byte) else {
        respond(link, Status::Err, ErrorCode::Unrecognised.value());
        return;
    };

    match cmd {
        Command::Init => {
            tap.init();
            respond(link, Status::Ok, 0);
        }
        Command::Reset => {
            tap.reset();
            respond(link, Status::Ok, 0);
        }
        Command::TmsSequence => {
            if packet.len() < 4 {
                respond(link, Status::Err, ErrorCode::WrongLength.value());
                return;
            }
            let (ticks, _) = parse_hex(Some(2), args(packet, 2));
            let (states, _) = parse_hex(Some(2), args(packet, 4));
            tap.tms_seq(states as u32, ticks as u8);
            respond(link, Status::Ok, 0);
        }
        Command::ShiftFinalTms | Command::Shift => {
            if packet.len() < 5 {
                respond(link, Status::Err, ErrorCode::WrongLength.value());
                return;
            }
            let (ticks, _) = parse_hex(Some(2), args(packet, 2));
            let ticks = ticks as u8;
            let (data_in, _) = parse_hex(None, args(packet, 4));
            let data_out = tap.tdi_tdo_seq(data_in, cmd == Command::ShiftFinalTms, ticks);

            // The host expects ticks + 1 bits back; drop whatever else the
            // shift register carried.
            let bits = u32::from(ticks) + 1;
            let masked = if bits >= u64::BITS {
                data_out
            } else {
                data_out & ((1u64 << bits) - 1)
            };
            tracing::trace!("jtag shift {ticks} ticks, tdi {data_in:#x}, tdo {masked:#x}");
            respond(link, Status::Ok, masked);
        }
        Command::Clock => {
            if packet.len() != 4 {
                respond(link, Status::Err, ErrorCode::WrongLength.value());
                return;
            }
            let tdo = tap.next(packet[2] == b'1', packet[3] == b'1');
            respond(link, Status::Ok, u64::from(tdo));
        }
    }
}

//! Low-level SWD sequence commands.

use super::args;
use crate::hex::parse_hex;
use crate::link::HostLink;
use crate::tap::SwdTap;
use crate::wire::{respond, ErrorCode, Status};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Init,
    SeqInParity,
    SeqIn,
    SeqOut,
    SeqOutParity,
}

impl Command {
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'S' => Some(Self::Init),
            b'I' => Some(Self::SeqInParity),
            b'i' => Some(Self::SeqIn),
            b'o' => Some(Self::SeqOut),
            b'O' => Some(Self::SeqOutParity),
            _ => None,
        }
    }
}

pub(super) fn process<L: HostLink, S: SwdTap>(link: &mut L, tap: &mut S, packet: &[u8]) {
    let Some(cmd) = packet.get(1).copied().and_then(Command::from_byte) else {
        respond(link, Status::Err, ErrorCode::Unrecognised.value());
        return;
    };

    match cmd {
        Command::Init => {
            if packet.len() != 2 {
                respond(link, Status::Err, ErrorCode::WrongLength.value());
            } else {
                tap.init();
                respond(link, Status::Ok, 0);
            }
        }
        Command::SeqInParity => {
            let (ticks, _) = parse_hex(Some(2), args(packet, 2));
            let (value, parity_ok) = tap.seq_in_parity(ticks as u8);
            let status = if parity_ok {
                Status::Ok
            } else {
                Status::ParityError
            };
            respond(link, status, u64::from(value));
        }
        Command::SeqIn => {
            let (ticks, _) = parse_hex(Some(2), args(packet, 2));
            let value = tap.seq_in(ticks as u8);
            respond(link, Status::Ok, u64::from(value));
        }
        Command::SeqOut => {
            let (ticks, _) = parse_hex(Some(2), args(packet, 2));
            let (value, _) = parse_hex(None, args(packet, 4));
            tracing::trace!("swd out {value:#x} over {ticks} ticks");
            tap.seq_out(value as u32, ticks as u8);
            respond(link, Status::Ok, 0);
        }
        Command::SeqOutParity => {
            let (ticks, _) = parse_hex(Some(2), args(packet, 2));
            let (value, _) = parse_hex(None, args(packet, 4));
            tap.seq_out_parity(value as u32, ticks as u8);
            respond(link, Status::Ok, 0);
        }
    }
}

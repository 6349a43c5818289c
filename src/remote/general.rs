//! Board-level commands: supply voltage, reset line, power switch,
//! identification.

use crate::link::HostLink;
use crate::platform::Platform;
use crate::wire::{respond, respond_str, ErrorCode, Status};

/// Reported to the host as part of the identification string.
const FIRMWARE_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Voltage,
    NrstSet,
    NrstGet,
    PowerSet,
    PowerGet,
    Identify,
}

impl Command {
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'V' => Some(Self::Voltage),
            b'Z' => Some(Self::NrstSet),
            b'z' => Some(Self::NrstGet),
            b'P' => Some(Self::PowerSet),
            b'p' => Some(Self::PowerGet),
            b'A' => Some(Self::Identify),
            _ => None,
        }
    }
}

pub(super) fn process<L: HostLink, P: Platform>(link: &mut L, platform: &mut P, packet: &[u8]) {
    let Some(cmd) = packet.get(1).copied().and_then(Command::from_byte) else {
        respond(link, Status::Err, ErrorCode::Unrecognised.value());
        return;
    };

    match cmd {
        Command::Voltage => {
            let voltage = platform.target_voltage();
            respond_str(link, Status::Ok, &voltage);
        }
        Command::NrstSet => {
            platform.nrst_set(packet.get(2) == Some(&b'1'));
            respond(link, Status::Ok, 0);
        }
        Command::NrstGet => {
            respond(link, Status::Ok, u64::from(platform.nrst_get()));
        }
        Command::PowerSet => {
            let on = packet.get(2) == Some(&b'1');
            match platform.power_set(on) {
                Some(()) => respond(link, Status::Ok, 0),
                None => respond(link, Status::NotSupported, 0),
            }
        }
        Command::PowerGet => match platform.power_get() {
            Some(on) => respond(link, Status::Ok, u64::from(on)),
            None => respond(link, Status::NotSupported, 0),
        },
        Command::Identify => {
            let ident = format!("{} {FIRMWARE_VERSION}", platform.ident());
            respond_str(link, Status::Ok, &ident);
        }
    }
}

//! High-level target commands: scan/attach, memory, registers, reset.
//!
//! Every command here runs inside a busy scope on the platform's activity
//! indicator, and everything except scan/attach requires a target in the
//! slot.

use tracing::debug;

use super::args;
use crate::hex::{parse_hex, unhexify};
use crate::link::HostLink;
use crate::platform::{BusyGuard, Platform};
use crate::scratch::Scratch;
use crate::tap::SwdTap;
use crate::target::{Target, TargetBus, TargetSlot};
use crate::wire::{respond, respond_buf, ErrorCode, Status};

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Command {
    Attach,
    MemRead,
    MemWrite,
    RegRead,
    RegWrite,
    Reset,
}

impl Command {
    const fn from_byte(byte: u8) -> Option<Self> {
        match byte {
            b'S' => Some(Self::Attach),
            b'M' => Some(Self::MemRead),
            b'm' => Some(Self::MemWrite),
            b'g' => Some(Self::RegRead),
            b'G' => Some(Self::RegWrite),
            b'R' => Some(Self::Reset),
            _ => None,
        }
    }
}

pub(super) fn process<L, S, P, B>(
    link: &mut L,
    swd: &mut S,
    platform: &mut P,
    bus: &mut B,
    slot: &mut TargetSlot<B::Target>,
    packet: &[u8],
) where
    L: HostLink,
    S: SwdTap,
    P: Platform,
    B: TargetBus,
{
    let _busy = BusyGuard::enter(platform);

    let Some(cmd) = packet.get(1).copied().and_then(Command::from_byte) else {
        respond(link, Status::Err, ErrorCode::Unrecognised.value());
        return;
    };

    match cmd {
        Command::Attach => attach(link, swd, bus, slot),
        Command::MemRead => mem_read(link, slot, packet),
        Command::MemWrite => mem_write(link, slot, packet),
        Command::RegRead => reg_read(link, slot, packet),
        Command::RegWrite => reg_write(link, slot, packet),
        Command::Reset => reset(link, slot),
    }
}

fn attach<L: HostLink, S: SwdTap, B: TargetBus>(
    link: &mut L,
    swd: &mut S,
    bus: &mut B,
    slot: &mut TargetSlot<B::Target>,
) {
    swd.init();

    // The scan is the one call that can be aborted by a hung target; it
    // must never take the firmware down with it.
    let devices = match bus.scan() {
        Ok(devices) => devices,
        Err(fault) => {
            debug!("device scan failed: {fault}");
            respond(link, Status::Err, 0);
            return;
        }
    };
    if devices == 0 {
        respond(link, Status::Err, 0);
        return;
    }
    debug!("scan found {devices} device(s)");

    match bus.attach(0) {
        Ok(target) => {
            slot.replace(target);
            respond(link, Status::Ok, 0);
        }
        Err(fault) => {
            debug!("attach failed: {fault}");
            respond(link, Status::Err, 0);
        }
    }
}

fn mem_read<L: HostLink, T: Target>(link: &mut L, slot: &mut TargetSlot<T>, packet: &[u8]) {
    let (address, _) = parse_hex(Some(8), args(packet, 2));
    let (count, _) = parse_hex(Some(8), args(packet, 10));

    let Some(target) = slot.get_mut() else {
        respond(link, Status::Err, 0);
        return;
    };
    let mut buf = match Scratch::with_len(count as usize) {
        Ok(buf) => buf,
        Err(fault) => {
            debug!("{fault}");
            respond(link, Status::Err, 0);
            return;
        }
    };
    match target.mem_read(address as u32, buf.as_mut_slice()) {
        Ok(()) => respond_buf(link, Status::Ok, buf.as_slice()),
        Err(fault) => {
            debug!("memory read failed: {fault}");
            respond(link, Status::Err, 0);
        }
    }
}

fn mem_write<L: HostLink, T: Target>(link: &mut L, slot: &mut TargetSlot<T>, packet: &[u8]) {
    let Some(target) = slot.get_mut() else {
        respond(link, Status::Err, 0);
        return;
    };
    let (address, _) = parse_hex(Some(8), args(packet, 2));
    let (count, _) = parse_hex(Some(8), args(packet, 10));

    let mut data = match Scratch::with_len(count as usize) {
        Ok(data) => data,
        Err(fault) => {
            debug!("{fault}");
            respond(link, Status::Err, 0);
            return;
        }
    };
    // A short payload leaves zero bytes behind; the write still runs at
    // the advertised count.
    unhexify(data.as_mut_slice(), args(packet, 18));

    match target.mem_write(address as u32, data.as_slice()) {
        Ok(()) => respond(link, Status::Ok, 0),
        Err(fault) => {
            debug!("memory write failed: {fault}");
            respond(link, Status::Err, 0);
        }
    }
}

fn reg_read<L: HostLink, T: Target>(link: &mut L, slot: &mut TargetSlot<T>, packet: &[u8]) {
    let Some(target) = slot.get_mut() else {
        respond(link, Status::Err, 0);
        return;
    };
    let (reg, _) = parse_hex(Some(2), args(packet, 2));

    match target.reg_read(reg as u8) {
        // The register value travels as its little-endian byte image.
        Ok(value) => respond_buf(link, Status::Ok, &value.to_le_bytes()),
        Err(fault) => {
            debug!("register read failed: {fault}");
            respond(link, Status::Err, 0);
        }
    }
}

fn reg_write<L: HostLink, T: Target>(link: &mut L, slot: &mut TargetSlot<T>, packet: &[u8]) {
    let Some(target) = slot.get_mut() else {
        respond(link, Status::Err, 0);
        return;
    };
    let (reg, _) = parse_hex(Some(2), args(packet, 2));
    let (value, _) = parse_hex(Some(8), args(packet, 4));

    match target.reg_write(reg as u8, value as u32) {
        Ok(()) => respond(link, Status::Ok, 0),
        Err(fault) => {
            debug!("register write failed: {fault}");
            respond(link, Status::Err, 0);
        }
    }
}

fn reset<L: HostLink, T: Target>(link: &mut L, slot: &mut TargetSlot<T>) {
    let Some(target) = slot.get_mut() else {
        respond(link, Status::Err, 0);
        return;
    };
    match target.reset() {
        Ok(()) => respond(link, Status::Ok, 0),
        Err(fault) => {
            debug!("target reset failed: {fault}");
            respond(link, Status::Err, 0);
        }
    }
}

//! Driver seams for the two low-level wire protocols.
//!
//! Implementations clock the actual pins. Values travel least-significant
//! bit first in both directions, matching the on-wire bit order of SWD and
//! JTAG. Nothing at this seam can fail in a protocol-visible way except an
//! SWD parity mismatch, which is reported in-band.

/// Serial Wire Debug bit-sequence driver.
pub trait SwdTap {
    /// Readies the SWD pins for use.
    fn init(&mut self);

    /// Clocks `ticks` bits in from the target.
    fn seq_in(&mut self, ticks: u8) -> u32;

    /// Clocks `ticks` bits in, followed by the target's parity bit.
    ///
    /// Returns the captured value and whether parity matched. The value is
    /// reported to the host even when parity failed.
    fn seq_in_parity(&mut self, ticks: u8) -> (u32, bool);

    /// Clocks the low `ticks` bits of `value` out.
    fn seq_out(&mut self, value: u32, ticks: u8);

    /// Like [`SwdTap::seq_out`], with an even parity bit appended.
    fn seq_out_parity(&mut self, value: u32, ticks: u8);
}

/// JTAG state-machine driver.
pub trait JtagTap {
    /// Readies the JTAG pins for use.
    fn init(&mut self);

    /// Pulses the tap reset.
    fn reset(&mut self);

    /// Clocks `ticks` TMS transitions from the low bits of `states`.
    fn tms_seq(&mut self, states: u32, ticks: u8);

    /// Shifts `ticks` bits of `data_in` through TDI while capturing TDO,
    /// optionally raising TMS on the final clock to leave the shift state.
    fn tdi_tdo_seq(&mut self, data_in: u64, final_tms: bool, ticks: u8) -> u64;

    /// One clock with the given TMS/TDI levels. Returns the sampled TDO.
    fn next(&mut self, tms: bool, tdi: bool) -> bool;
}

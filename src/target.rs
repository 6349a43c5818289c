//! Seams towards the attached chip, and the slot holding it.

use thiserror::Error;

/// Failure raised by the device scan.
///
/// The scan is the one operation that can be aborted mid-flight by a hung
/// or protocol-violating target; both outcomes surface here instead of
/// propagating past the protocol bridge.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScanError {
    /// The target stopped responding and the scan was aborted.
    #[error("device scan timed out")]
    Timeout,
    /// The debug port violated the protocol during the scan.
    #[error("debug port fault during scan")]
    Fault,
}

/// Failure of a memory, register or reset transaction.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum TargetError {
    /// The access was refused or faulted on the target side.
    #[error("target access faulted")]
    Fault,
    /// The target did not answer within the driver's deadline.
    #[error("target did not respond")]
    Timeout,
    /// No device with the requested scan index.
    #[error("no device {0} on the scan chain")]
    NoDevice(usize),
}

/// Transactions against one attached device.
pub trait Target {
    /// Reads `dest.len()` bytes starting at `address`.
    fn mem_read(&mut self, address: u32, dest: &mut [u8]) -> Result<(), TargetError>;

    /// Writes `src` starting at `address`.
    fn mem_write(&mut self, address: u32, src: &[u8]) -> Result<(), TargetError>;

    /// Reads one core register.
    fn reg_read(&mut self, reg: u8) -> Result<u32, TargetError>;

    /// Writes one core register.
    fn reg_write(&mut self, reg: u8, value: u32) -> Result<(), TargetError>;

    /// Resets the device.
    fn reset(&mut self) -> Result<(), TargetError>;
}

/// Scan/attach side of the target layer.
pub trait TargetBus {
    type Target: Target;

    /// Enumerates devices behind the debug port. Returns how many were
    /// found.
    fn scan(&mut self) -> Result<usize, ScanError>;

    /// Attaches to one device; `0` is the first found by
    /// [`TargetBus::scan`].
    fn attach(&mut self, device: usize) -> Result<Self::Target, TargetError>;
}

/// Holder for the single attached target.
///
/// Only a successful attach stores a target, a later attach silently
/// replaces it, and nothing ever releases it explicitly. Operations that
/// need a target treat an empty slot as a precondition failure.
#[derive(Debug)]
pub struct TargetSlot<T> {
    attached: Option<T>,
}

impl<T> TargetSlot<T> {
    pub fn new() -> Self {
        Self { attached: None }
    }

    /// Stores `target`, dropping whatever was attached before.
    pub fn replace(&mut self, target: T) {
        self.attached = Some(target);
    }

    pub fn get_mut(&mut self) -> Option<&mut T> {
        self.attached.as_mut()
    }

    pub fn is_attached(&self) -> bool {
        self.attached.is_some()
    }
}

impl<T> Default for TargetSlot<T> {
    fn default() -> Self {
        Self::new()
    }
}

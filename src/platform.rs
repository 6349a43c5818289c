//! Board-level controls surrounding the debug connector.

/// Board services the protocol needs: supply sensing, the reset line, an
/// optional power switch and an activity indicator.
pub trait Platform {
    /// Human-readable target supply voltage, e.g. `"3.3V"`.
    fn target_voltage(&mut self) -> String;

    /// Drives the target's nRST line.
    fn nrst_set(&mut self, assert: bool);

    /// Current level of the nRST line.
    fn nrst_get(&mut self) -> bool;

    /// Switches target power. `None` on boards without a power switch.
    fn power_set(&mut self, _on: bool) -> Option<()> {
        None
    }

    /// Power switch state. `None` on boards without a power switch.
    fn power_get(&mut self) -> Option<bool> {
        None
    }

    /// Board identification string.
    fn ident(&self) -> &str;

    /// Activity indicator, typically an LED. `idle` is false while a
    /// command is being processed. Defaults to doing nothing.
    fn set_idle(&mut self, _idle: bool) {}
}

/// Marks the platform busy for as long as the guard lives.
///
/// Dropping the guard returns the indicator to idle, so the enter/leave
/// pairing holds on every exit path out of a command.
pub struct BusyGuard<'a, P: Platform> {
    platform: &'a mut P,
}

impl<'a, P: Platform> BusyGuard<'a, P> {
    pub fn enter(platform: &'a mut P) -> Self {
        platform.set_idle(false);
        Self { platform }
    }
}

impl<P: Platform> Drop for BusyGuard<'_, P> {
    fn drop(&mut self) {
        self.platform.set_idle(true);
    }
}

// (c) 2023 John A. Breaux
// This code is licensed under MIT license (see LICENSE for details)

//! Represents flags that control the emulator, but aren't a part of the CPU

/// Represents flags that aid in operation, but aren't inherent to the CPU
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ControlFlags {
    /// Set when the interactive debugger should observe every cycle
    pub debug: bool,
    /// Set when each executed instruction should be printed
    pub trace: bool,
    /// Set when the boot ROM should shadow the start of the cartridge
    pub boot: bool,
}

impl Default for ControlFlags {
    fn default() -> Self {
        ControlFlags {
            debug: false,
            trace: false,
            boot: true,
        }
    }
}

impl ControlFlags {
    /// Toggles debug mode
    ///
    /// # Examples
    /// ```rust
    /// # use gbemu::*;
    /// let mut flags = ControlFlags::default();
    /// assert_eq!(false, flags.debug);
    /// flags.debug();
    /// assert_eq!(true, flags.debug);
    /// ```
    pub fn debug(&mut self) {
        self.debug = !self.debug
    }

    /// Toggles trace mode
    pub fn trace(&mut self) {
        self.trace = !self.trace
    }
}

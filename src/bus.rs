//! Ordered access to the device register window.
//!
//! The accelerator's behavior is defined by the sequence of bus transactions
//! it observes, so every register access goes through [`RegisterBus`] and
//! each call is one transaction, issued in program order. The hardware
//! implementation is [`AxiLite`]; tests substitute a scripted bus.

use core::ptr;

/// One 32 bit register read or write per call, never reordered, cached or
/// combined.
pub trait RegisterBus {
    /// Reads the register at `offset` bytes from the window base.
    fn read_register(&mut self, offset: usize) -> u32;

    /// Writes the register at `offset` bytes from the window base.
    fn write_register(&mut self, offset: usize, value: u32);
}

/// Register window of an AXI4-Lite slave mapped at a fixed base address.
pub struct AxiLite {
    base: *mut u8,
}

impl AxiLite {
    /// Creates the window from the slave's base address.
    ///
    /// # Safety
    ///
    /// `base` must be the 4-byte-aligned base address of the device's
    /// register window, mapped uncached, and not accessed through any other
    /// path for the lifetime of this value.
    pub const unsafe fn new(base: usize) -> Self {
        Self {
            base: base as *mut u8,
        }
    }
}

// The window is exclusively owned; the raw pointer is just an address.
unsafe impl Send for AxiLite {}

impl RegisterBus for AxiLite {
    fn read_register(&mut self, offset: usize) -> u32 {
        unsafe { ptr::read_volatile(self.base.add(offset) as *const u32) }
    }

    fn write_register(&mut self, offset: usize, value: u32) {
        unsafe { ptr::write_volatile(self.base.add(offset) as *mut u32, value) }
    }
}

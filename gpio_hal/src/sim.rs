//! Simulated register backing for host-side tests and demos.

use core::cell::UnsafeCell;

use crate::port::Port;
use crate::reg::{Reg, RegisterWidth};

/// Three caller-owned register cells standing in for a memory-mapped
/// DDR/PORT/PIN group.
///
/// On a target the registers are fixed peripheral addresses; on a host they
/// are these cells. The accessors hand out [`Reg`] views tied to the borrow
/// of `self`, so the storage cannot be dropped out from under a port built
/// on top. Not `Sync`: the register model is single-threaded.
pub struct SimRegisters<R: RegisterWidth> {
    direction: UnsafeCell<R>,
    output: UnsafeCell<R>,
    input: UnsafeCell<R>,
}

impl<R: RegisterWidth> SimRegisters<R> {
    /// All three registers zeroed, the post-reset state.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            direction: UnsafeCell::new(R::ZERO),
            output: UnsafeCell::new(R::ZERO),
            input: UnsafeCell::new(R::ZERO),
        }
    }

    /// Register view onto the direction cell (DDRx).
    #[must_use]
    pub const fn direction_reg(&self) -> Reg<'_, R> {
        Reg::from_cell(&self.direction)
    }

    /// Register view onto the output/pull cell (PORTx).
    #[must_use]
    pub const fn output_reg(&self) -> Reg<'_, R> {
        Reg::from_cell(&self.output)
    }

    /// Register view onto the input cell (PINx).
    #[must_use]
    pub const fn input_reg(&self) -> Reg<'_, R> {
        Reg::from_cell(&self.input)
    }

    /// A port over all three cells.
    #[must_use]
    pub const fn port(&self) -> Port<'_, R> {
        Port::new(self.direction_reg(), self.output_reg(), self.input_reg())
    }
}

impl<R: RegisterWidth> Default for SimRegisters<R> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_zeroed() {
        let regs = SimRegisters::<u32>::new();
        assert_eq!(regs.direction_reg().read(), 0);
        assert_eq!(regs.output_reg().read(), 0);
        assert_eq!(regs.input_reg().read(), 0);
    }

    #[test]
    fn views_and_port_share_storage() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();

        regs.input_reg().write(0b0000_0001);
        assert_eq!(port.read_level(0), Ok(true));

        port.set_level(7, true).unwrap();
        assert!(regs.output_reg().is_set(u8::mask(7)));
    }
}

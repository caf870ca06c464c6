//! Port: a fixed-width group of GPIO pins over three shared registers.
//!
//! Models the classic AVR three-register layout:
//!
//! | Register    | Role                                                          |
//! |-------------|---------------------------------------------------------------|
//! | `direction` | 1 = pin drives output, 0 = pin reads input (DDRx)             |
//! | `output`    | driven level in output mode, pull enable in input mode (PORTx)|
//! | `input`     | observed electrical level (PINx)                              |
//!
//! There is no external electrical driver in this model, so every mutation
//! keeps `output` and `input` synchronized.
//!
//! Every operation validates its bit index first; a rejected operation
//! leaves all three registers unmodified.

use core::fmt;

use log::trace;

use crate::error::GpioError;
use crate::reg::{Reg, RegisterWidth};

/// A group of `R::BITS` GPIO pins sharing one direction, one output/pull and
/// one input register.
///
/// The port does not own its registers: it holds [`Reg`] views onto
/// caller-supplied storage, which must outlive the port. Construct one port
/// per physical register group; pins are bounded views handed out on top
/// (see [`Pin`](crate::Pin)).
#[derive(Debug)]
pub struct Port<'r, R: RegisterWidth> {
    direction: Reg<'r, R>,
    output: Reg<'r, R>,
    input: Reg<'r, R>,
}

impl<'r, R: RegisterWidth> Port<'r, R> {
    /// Number of pins in the port.
    pub const WIDTH: u8 = R::BITS;

    /// Create a port over a direction/output/input register triple.
    #[must_use]
    pub const fn new(direction: Reg<'r, R>, output: Reg<'r, R>, input: Reg<'r, R>) -> Self {
        Self {
            direction,
            output,
            input,
        }
    }

    /// Check that `bit` addresses a pin of this port.
    ///
    /// # Errors
    /// Returns [`GpioError::OutOfRange`] unless `bit < R::BITS`. The index
    /// type is unsigned, so the lower bound holds by representation.
    pub fn validate_bit(&self, bit: u8) -> Result<(), GpioError> {
        if bit < Self::WIDTH {
            Ok(())
        } else {
            Err(GpioError::OutOfRange {
                bit,
                width: Self::WIDTH,
            })
        }
    }

    /// Select output (`true`) or input (`false`) for one pin.
    ///
    /// Entering output mode always drives the pin low and clears the input
    /// mirror. Entering input mode defaults to the pull-enabled mirror
    /// state; disable the pull explicitly via [`Port::set_pull_up`] if a
    /// floating input is wanted.
    pub fn set_direction(&self, bit: u8, output: bool) -> Result<(), GpioError> {
        self.validate_bit(bit)?;
        let mask = R::mask(bit);
        if output {
            self.direction.set_bits(mask);
            self.output.clear_bits(mask);
            self.input.clear_bits(mask);
        } else {
            self.direction.clear_bits(mask);
            self.output.set_bits(mask);
            self.input.set_bits(mask);
        }
        trace!(
            "port: bit {bit} direction <- {}",
            if output { "output" } else { "input" }
        );
        Ok(())
    }

    /// Drive one pin high (`true`) or low (`false`).
    ///
    /// Sets or clears the `output` and `input` bits together: with no
    /// external driver, the observed level follows the driven one.
    pub fn set_level(&self, bit: u8, high: bool) -> Result<(), GpioError> {
        self.validate_bit(bit)?;
        let mask = R::mask(bit);
        if high {
            self.output.set_bits(mask);
            self.input.set_bits(mask);
        } else {
            self.output.clear_bits(mask);
            self.input.clear_bits(mask);
        }
        trace!("port: bit {bit} level <- {}", u8::from(high));
        Ok(())
    }

    /// Observed level of one pin: `true` when the `input` bit is set.
    pub fn read_level(&self, bit: u8) -> Result<bool, GpioError> {
        self.validate_bit(bit)?;
        Ok(self.input.is_set(R::mask(bit)))
    }

    /// Enable or disable the pull-up on one pin.
    ///
    /// Enabling forces the pin to input first, then reasserts the mirror
    /// bits. Disabling clears the mirror bits and leaves the direction
    /// untouched. Both branches validate the bit and fail uniformly.
    pub fn set_pull_up(&self, bit: u8, enable: bool) -> Result<(), GpioError> {
        self.validate_bit(bit)?;
        let mask = R::mask(bit);
        if enable {
            self.set_direction(bit, false)?;
            self.output.set_bits(mask);
            self.input.set_bits(mask);
        } else {
            self.output.clear_bits(mask);
            self.input.clear_bits(mask);
        }
        trace!(
            "port: bit {bit} pull-up <- {}",
            if enable { "enabled" } else { "disabled" }
        );
        Ok(())
    }

    /// Point-in-time copy of the three register values, for inspection.
    #[must_use]
    pub fn snapshot(&self) -> RegisterSnapshot<R> {
        RegisterSnapshot {
            direction: self.direction.read(),
            output: self.output.read(),
            input: self.input.read(),
        }
    }
}

/// Diagnostic copy of a port's registers.
///
/// `Display` renders each register as a fixed-width binary string, most
/// significant bit first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RegisterSnapshot<R: RegisterWidth> {
    /// Direction register value (DDRx).
    pub direction: R,
    /// Output/pull register value (PORTx).
    pub output: R,
    /// Input register value (PINx).
    pub input: R,
}

impl<R: RegisterWidth> fmt::Display for RegisterSnapshot<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "direction={:0width$b} output={:0width$b} input={:0width$b}",
            self.direction,
            self.output,
            self.input,
            width = R::BITS as usize
        )
    }
}

//! Error taxonomy for port and pin operations.

use thiserror::Error;

/// Errors raised by [`Port`](crate::Port) and [`Pin`](crate::Pin) operations.
///
/// Every fallible operation validates its bit index before touching any
/// register, so a returned error means all three registers are unmodified.
/// An unsupported register width is not represented here: the sealed
/// [`RegisterWidth`](crate::RegisterWidth) bound rejects it at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GpioError {
    /// Bit index outside `[0, width - 1]` for the port's register width.
    #[error("bit {bit} out of range for {width}-bit port")]
    OutOfRange {
        /// The rejected bit index.
        bit: u8,
        /// The port's register width in bits.
        width: u8,
    },
}

//! GPIO Register HAL
//!
//! A hardware-abstraction layer for digital GPIO pins over the classic
//! AVR-style three-register layout (DDR/PORT/PIN), for 8-bit and 32-bit
//! register groups.
//!
//! # Model
//!
//! - [`Port`] — a fixed-width group of pins over three shared registers:
//!   direction, output/pull, input. Validates bit indices and performs the
//!   mask-based read-modify-write operations.
//! - [`Pin`] — one validated bit of a port, exposed as logical
//!   direction/state/mode/pull/read operations. Holds no state of its own.
//! - [`RegisterWidth`] — sealed capability trait selecting the register
//!   width at compile time. Implemented for exactly `u8` and `u32`; a port
//!   over any other integer type does not compile.
//!
//! There is no external electrical driver in this model, so the output and
//! input registers are kept synchronized by every mutation.
//!
//! # Quick Start
//!
//! ```
//! use gpio_hal::{Direction, Pin, PinState, SimRegisters};
//!
//! let regs = SimRegisters::<u8>::new();
//! let port = regs.port();
//!
//! let pin3 = Pin::new(&port, 3)?;
//! pin3.init()?;
//! pin3.set_direction(Direction::Output)?;
//! pin3.set_state(PinState::High)?;
//! assert!(pin3.read()?);
//! # Ok::<(), gpio_hal::GpioError>(())
//! ```
//!
//! On a target, the [`Reg`] views are built from the peripheral's register
//! addresses instead of [`SimRegisters`] cells; everything above `Reg` is
//! identical on hardware and host.
//!
//! # Concurrency
//!
//! Single-threaded by design. Read-modify-write on a shared register is not
//! atomic; callers sharing a port with an interrupt handler must bracket
//! operations with their own interrupt discipline. The register types opt
//! out of `Send`/`Sync` rather than pretend otherwise.

#![no_std]

mod error;
mod pin;
mod port;
mod reg;
mod sim;

pub use error::GpioError;
pub use pin::{Direction, Pin, PinMode, PinState, Pull};
pub use port::{Port, RegisterSnapshot};
pub use reg::{Arm, Avr, Reg, RegisterWidth};
pub use sim::SimRegisters;

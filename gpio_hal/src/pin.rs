//! Pin: a single validated bit of a [`Port`], with the logical GPIO
//! operations layered on top.

use crate::error::GpioError;
use crate::port::Port;
use crate::reg::RegisterWidth;

/// Signal direction of a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// The pin reads its input register.
    Input,
    /// The pin drives its output register onto the line.
    Output,
}

/// Logic level driven onto or observed at a pin.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum PinState {
    /// Logic low.
    Low = 0,
    /// Logic high.
    High = 1,
}

/// Combined direction/pull configuration of a pin.
///
/// Mode is write-only: there is no register encoding to read a mode back
/// from, and the pin caches nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PinMode {
    /// Input, pull state untouched.
    Input,
    /// Input with the pull-up enabled.
    InputPullUp,
    /// Output.
    Output,
}

/// Pull-resistor configuration. Pull-down is not modeled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pull {
    /// No pull resistor; an undriven input floats.
    None,
    /// Pull-up enabled; an undriven input reads high.
    Up,
}

/// One bit of a [`Port`], addressed as a logical GPIO pin.
///
/// The `(port, bit)` binding is validated at construction and immutable
/// afterwards. All state lives in the port's registers; the pin itself is
/// only the bounded view. The borrow makes "the port outlives its pins" a
/// compile-time fact.
///
/// Multiple pins may bind to distinct bits of one port. Two pins on the
/// same bit are not prevented; their interleaved writes are unspecified.
#[derive(Debug)]
pub struct Pin<'p, R: RegisterWidth> {
    port: &'p Port<'p, R>,
    bit: u8,
}

impl<'p, R: RegisterWidth> Pin<'p, R> {
    /// Bind to `bit` of `port`.
    ///
    /// # Errors
    /// Returns [`GpioError::OutOfRange`] if `bit` does not address a pin of
    /// the port; no pin value exists in that case.
    pub fn new(port: &'p Port<'p, R>, bit: u8) -> Result<Self, GpioError> {
        port.validate_bit(bit)?;
        Ok(Self { port, bit })
    }

    /// The bound bit index.
    #[inline]
    #[must_use]
    pub const fn bit(&self) -> u8 {
        self.bit
    }

    /// Put the pin into its safe default state: input, pull disabled.
    ///
    /// Call once after construction, before other use.
    pub fn init(&self) -> Result<(), GpioError> {
        self.set_direction(Direction::Input)?;
        self.set_pull(Pull::None)
    }

    /// Configure the pin as input or output.
    pub fn set_direction(&self, direction: Direction) -> Result<(), GpioError> {
        self.port
            .set_direction(self.bit, direction == Direction::Output)
    }

    /// Drive the pin high or low.
    pub fn set_state(&self, state: PinState) -> Result<(), GpioError> {
        match state {
            PinState::High => self.port.set_level(self.bit, true),
            PinState::Low => self.port.set_level(self.bit, false),
        }
    }

    /// Configure direction and pull in one step.
    ///
    /// `InputPullUp` delegates to the pull-up path, which itself forces the
    /// input direction.
    pub fn set_mode(&self, mode: PinMode) -> Result<(), GpioError> {
        match mode {
            PinMode::Input => self.port.set_direction(self.bit, false),
            PinMode::Output => self.port.set_direction(self.bit, true),
            PinMode::InputPullUp => self.port.set_pull_up(self.bit, true),
        }
    }

    /// Enable or disable the pull-up.
    pub fn set_pull(&self, pull: Pull) -> Result<(), GpioError> {
        match pull {
            Pull::Up => self.port.set_pull_up(self.bit, true),
            Pull::None => self.port.set_pull_up(self.bit, false),
        }
    }

    /// Observed level: `true` when high.
    pub fn read(&self) -> Result<bool, GpioError> {
        self.port.read_level(self.bit)
    }

    /// Drive the opposite of the currently observed level.
    pub fn toggle(&self) -> Result<(), GpioError> {
        if self.read()? {
            self.set_state(PinState::Low)
        } else {
            self.set_state(PinState::High)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sim::SimRegisters;

    #[test]
    fn construction_validates_the_bit() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();

        assert!(Pin::new(&port, 7).is_ok());
        assert_eq!(
            Pin::new(&port, 8).unwrap_err(),
            GpioError::OutOfRange { bit: 8, width: 8 }
        );
    }

    #[test]
    fn wide_port_accepts_bit_31() {
        let regs = SimRegisters::<u32>::new();
        let port = regs.port();

        assert_eq!(Pin::new(&port, 31).unwrap().bit(), 31);
        assert!(Pin::new(&port, 32).is_err());
    }

    #[test]
    fn init_is_input_with_pull_disabled() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();
        let pin = Pin::new(&port, 3).unwrap();

        pin.init().unwrap();

        let snap = port.snapshot();
        assert_eq!(snap.direction, 0);
        assert_eq!(snap.output, 0);
        assert_eq!(snap.input, 0);
    }

    #[test]
    fn state_maps_onto_levels() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();
        let pin = Pin::new(&port, 4).unwrap();
        pin.set_direction(Direction::Output).unwrap();

        pin.set_state(PinState::High).unwrap();
        assert_eq!(pin.read(), Ok(true));

        pin.set_state(PinState::Low).unwrap();
        assert_eq!(pin.read(), Ok(false));
    }

    #[test]
    fn mode_dispatch() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();
        let pin = Pin::new(&port, 2).unwrap();

        pin.set_mode(PinMode::Output).unwrap();
        assert_eq!(port.snapshot().direction, 0b0000_0100);

        pin.set_mode(PinMode::Input).unwrap();
        assert_eq!(port.snapshot().direction, 0);

        pin.set_mode(PinMode::Output).unwrap();
        pin.set_mode(PinMode::InputPullUp).unwrap();
        let snap = port.snapshot();
        assert_eq!(snap.direction, 0);
        assert_eq!(snap.output, 0b0000_0100);
        assert_eq!(snap.input, 0b0000_0100);
    }

    #[test]
    fn pull_dispatch() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();
        let pin = Pin::new(&port, 5).unwrap();

        pin.set_pull(Pull::Up).unwrap();
        assert_eq!(pin.read(), Ok(true));

        pin.set_pull(Pull::None).unwrap();
        assert_eq!(pin.read(), Ok(false));
    }

    #[test]
    fn toggle_flips_the_level() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();
        let pin = Pin::new(&port, 0).unwrap();
        pin.set_direction(Direction::Output).unwrap();

        pin.toggle().unwrap();
        assert_eq!(pin.read(), Ok(true));
        pin.toggle().unwrap();
        assert_eq!(pin.read(), Ok(false));
    }

    #[test]
    fn pins_on_distinct_bits_share_a_port() {
        let regs = SimRegisters::<u8>::new();
        let port = regs.port();
        let led = Pin::new(&port, 1).unwrap();
        let button = Pin::new(&port, 6).unwrap();

        led.set_direction(Direction::Output).unwrap();
        led.set_state(PinState::High).unwrap();
        button.set_direction(Direction::Input).unwrap();

        assert_eq!(led.read(), Ok(true));
        assert_eq!(button.read(), Ok(true));
        assert_eq!(port.snapshot().direction, 0b0000_0010);
    }
}

//! Drives one pin of a simulated 8-bit port through the init/output/blink
//! sequence and dumps the register group after each step.
//!
//! Set `RUST_LOG=trace` to also see the per-operation register traces from
//! the HAL itself.

use gpio_hal::{Avr, Direction, GpioError, Pin, PinState, SimRegisters};
use log::debug;

fn main() -> Result<(), GpioError> {
    env_logger::init();

    let regs = SimRegisters::<Avr>::new();
    let port = regs.port();
    let pin3 = Pin::new(&port, 3)?;
    debug!("bound pin {} on an 8-bit port", pin3.bit());

    pin3.init()?;
    println!("after init:          {}", port.snapshot());

    pin3.set_direction(Direction::Output)?;
    println!("after output:        {}", port.snapshot());

    pin3.set_state(PinState::High)?;
    println!("after state high:    {}", port.snapshot());

    pin3.set_state(PinState::Low)?;
    println!("after state low:     {}", port.snapshot());

    pin3.toggle()?;
    println!("after toggle:        {}", port.snapshot());

    println!("pin 3 reads {}", if pin3.read()? { "high" } else { "low" });
    Ok(())
}

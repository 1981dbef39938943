//! Diagnostic blink. Resolves its pin by the name `TESZT`, which the pin
//! table does not define, so it exits with an error before touching a pin.

use robotika_gpio::app::runner;
use robotika_gpio::programs::Program;

fn main() -> anyhow::Result<()> {
    runner::execute(Program::Diagnostic)
}

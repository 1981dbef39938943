//! Motor: both H-bridge channels forward for one second, reverse for one
//! second, 25 % PWM on the enables, then released.

use robotika_gpio::app::runner;
use robotika_gpio::programs::Program;

fn main() -> anyhow::Result<()> {
    runner::execute(Program::Motor)
}

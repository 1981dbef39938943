//! Servo: 50 Hz PWM held at 7.5 % (neutral) for one second, then released.

use robotika_gpio::app::runner;
use robotika_gpio::programs::Program;

fn main() -> anyhow::Result<()> {
    runner::execute(Program::Servo)
}

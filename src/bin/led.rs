//! RGB LED: all three colours on for one second, then released.

use robotika_gpio::app::runner;
use robotika_gpio::programs::Program;

fn main() -> anyhow::Result<()> {
    runner::execute(Program::Led)
}

use std::error::Error;

use healthpi_cli::{bmi_prompt, config::Config, console};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    config.init_logging()?;

    info!("Starting BMI calculator");
    let mut console = console::std_console();
    let bmi = bmi_prompt::run(&mut console)?;
    info!("Reported BMI {:.2}", bmi);

    Ok(())
}

use std::error::Error;

use healthpi_cli::{config::Config, console, form};
use log::info;

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config::from_env();
    config.init_logging()?;

    info!("Starting personal healthcare calculator");
    let mut console = console::std_console();
    let report = form::run(&mut console)?;
    info!("Reported {:?}", report);

    Ok(())
}

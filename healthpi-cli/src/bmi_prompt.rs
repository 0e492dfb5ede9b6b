use healthpi_calc::{
    bmi::{bmi_status, calculate_bmi},
    parse_number, parse_unit_system,
};
use healthpi_model::units::UnitSystem;
use log::{error, info};

use crate::{
    console::{prompt, Console},
    Result,
};

const UNIT_QUESTION: &str = "Would you like to use metric or imperial units? (metric/imperial): ";

fn weight_question(unit_system: UnitSystem) -> &'static str {
    match unit_system {
        UnitSystem::Metric => "Enter your weight in kilograms (kg): ",
        UnitSystem::Imperial => "Enter your weight in pounds (lb): ",
    }
}

fn height_question(unit_system: UnitSystem) -> &'static str {
    match unit_system {
        UnitSystem::Metric => "Enter your height in meters (m): ",
        UnitSystem::Imperial => "Enter your height in inches (in): ",
    }
}

/// Asks for unit system, weight and height, then prints the BMI and its
/// category. Returns the unrounded BMI.
pub fn run(console: &mut dyn Console) -> Result<f64> {
    console.write("Welcome to the BMI Calculator!\n")?;

    let answer = prompt(console, UNIT_QUESTION)?;
    let unit_system = match parse_unit_system(&answer) {
        Ok(unit_system) => unit_system,
        Err(e) => {
            error!("Rejected unit choice: {}", e);
            console.write("Invalid unit choice. Exiting program.\n")?;
            return Err(e.into());
        }
    };
    info!("Using {} units", unit_system);

    let weight: f64 = parse_number("weight", &prompt(console, weight_question(unit_system))?)?;
    let height: f64 = parse_number("height", &prompt(console, height_question(unit_system))?)?;

    let bmi = calculate_bmi(weight, height, unit_system);
    console.write(&format!("\nYour BMI is: {:.2}\n", bmi))?;
    console.write(&format!("Health status: {}\n", bmi_status(bmi)))?;

    Ok(bmi)
}

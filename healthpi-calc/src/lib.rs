pub mod advice;
pub mod bmi;
pub mod intake;
pub mod report;

use healthpi_model::units::UnitSystem;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("invalid unit \"{0}\", choose either 'metric' or 'imperial'")]
    InvalidUnit(String),
    #[error("invalid numeric value \"{value}\" for {field}")]
    InvalidNumber { field: &'static str, value: String },
}

pub type Result<T> = std::result::Result<T, Error>;

pub fn parse_unit_system(label: &str) -> Result<UnitSystem> {
    UnitSystem::from_label(label).map_err(|_| Error::InvalidUnit(label.trim().to_owned()))
}

pub fn parse_number<T: std::str::FromStr>(field: &'static str, value: &str) -> Result<T> {
    value.trim().parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.trim().to_owned(),
    })
}

/// Rounds to two decimal places, the precision results are reported with.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

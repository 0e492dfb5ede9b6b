pub mod bmi_prompt;
pub mod config;
pub mod console;
pub mod form;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Calculation(#[from] healthpi_calc::Error),
    #[error("console unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("input ended before all values were entered")]
    EndOfInput,
}

pub type Result<T> = std::result::Result<T, Error>;

pub mod units;
pub mod user;

#[derive(Debug, PartialEq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown unit system \"{0}\"")]
    UnitSystem(String),
    #[error("unknown gender \"{0}\"")]
    Gender(String),
}

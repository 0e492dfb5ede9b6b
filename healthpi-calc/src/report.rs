use std::fmt;

use healthpi_model::user::User;
use itertools::Itertools;
use log::debug;

use crate::{
    advice::give_suggestions,
    bmi::calculate_bmi,
    intake::{calculate_protein_intake, calorie_intake_for},
    round2,
};

/// Everything the healthcare form reports for one user, rounded to two
/// decimal places.
#[derive(Clone, Debug, PartialEq)]
pub struct HealthReport {
    pub bmi: f64,
    pub protein_intake: f64,
    pub calorie_intake: f64,
    pub suggestions: &'static str,
}

impl HealthReport {
    pub fn for_user(user: &User) -> Self {
        let report = Self {
            bmi: round2(calculate_bmi(
                user.weight(),
                user.height(),
                user.unit_system(),
            )),
            protein_intake: round2(calculate_protein_intake(user.weight(), user.gender())),
            calorie_intake: round2(calorie_intake_for(user)),
            suggestions: give_suggestions(user.age(), user.gender()),
        };
        debug!("Report for {:?}: {:?}", user, report);
        report
    }
}

/// Shortest text that reads back as `value`, always with a fractional part
/// (`96.0`, `1686.4`).
fn format_amount(value: f64) -> String {
    let text = value.to_string();
    if value.is_finite() && !text.contains('.') {
        format!("{}.0", text)
    } else {
        text
    }
}

impl fmt::Display for HealthReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines = [
            format!("BMI: {}", format_amount(self.bmi)),
            format!(
                "Recommended daily protein intake: {} grams",
                format_amount(self.protein_intake)
            ),
            format!(
                "Recommended daily calorie intake: {} calories",
                format_amount(self.calorie_intake)
            ),
            format!("Health Suggestions: {}", self.suggestions),
        ];
        write!(f, "{}", lines.iter().join("\n"))
    }
}

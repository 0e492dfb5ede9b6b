use std::fmt;

use healthpi_model::units::{UnitSystem, IMPERIAL_BMI_FACTOR};
use log::debug;

/// Body mass index from weight and height given in `unit_system` units
/// (kg and m, or lb and in). Height is not checked, so a zero height yields
/// an infinite or NaN index.
pub fn calculate_bmi(weight: f64, height: f64, unit_system: UnitSystem) -> f64 {
    let bmi = match unit_system {
        UnitSystem::Metric => weight / height.powi(2),
        UnitSystem::Imperial => weight / height.powi(2) * IMPERIAL_BMI_FACTOR,
    };
    debug!(
        "BMI for {} {}, {} {}: {}",
        weight,
        unit_system.weight_unit(),
        height,
        unit_system.height_unit(),
        bmi
    );
    bmi
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum BmiCategory {
    Underweight,
    Normal,
    Overweight,
    Obesity,
}

impl BmiCategory {
    /// Values in `[24.9, 25)` and `[29.9, 30)` belong to no bracket and are
    /// reported as obesity.
    pub fn from_bmi(bmi: f64) -> Self {
        if bmi < 18.5 {
            BmiCategory::Underweight
        } else if (18.5..24.9).contains(&bmi) {
            BmiCategory::Normal
        } else if (25.0..29.9).contains(&bmi) {
            BmiCategory::Overweight
        } else {
            BmiCategory::Obesity
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => "Underweight",
            BmiCategory::Normal => "Normal weight",
            BmiCategory::Overweight => "Overweight",
            BmiCategory::Obesity => "Obesity",
        }
    }

    pub fn advice(&self) -> &'static str {
        match self {
            BmiCategory::Underweight => {
                "Tip: Increase calorie intake with nutrient-dense foods like nuts, while doing \
                 strength training exercises like weightlifting or bodyweight workouts to build \
                 muscle and support healthy weight gain."
            }
            BmiCategory::Normal => "Great! Please maintain your healthy lifestyle as it should be.",
            BmiCategory::Overweight => {
                "Tip: Focus on a balanced diet rich in fruits, vegetables, lean proteins, and \
                 whole grains, with regular moderate physical activities like walking, swimming, \
                 or cycling to improve fitness."
            }
            BmiCategory::Obesity => {
                "Tip: Make a complete lifestyle shift with a portion-controlled, rich in \
                 nutrients diet, performing regular physical activity such as walking, swimming, \
                 or cycling, strength training, and stress-reduction methods like yoga or \
                 mindfulness."
            }
        }
    }
}

impl fmt::Display for BmiCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} \n{}", self.label(), self.advice())
    }
}

/// Category label followed by its advice on the next line.
pub fn bmi_status(bmi: f64) -> String {
    BmiCategory::from_bmi(bmi).to_string()
}

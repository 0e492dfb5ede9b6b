use healthpi_model::{
    units::UnitSystem,
    user::{ActivityLevel, Gender, User},
};
use log::debug;

/// Recommended daily protein intake in grams. Weight is taken as entered,
/// without unit conversion.
pub fn calculate_protein_intake(weight: f64, gender: Gender) -> f64 {
    let grams_per_unit = match gender {
        Gender::Male => 1.2,
        Gender::Female => 1.0,
    };
    weight * grams_per_unit
}

/// Harris-Benedict basal metabolic rate in kcal/day, from metric inputs.
pub fn calculate_bmr(weight_kg: f64, height_cm: f64, age: u32, gender: Gender) -> f64 {
    match gender {
        Gender::Female => {
            447.593 + 9.247 * weight_kg + 3.098 * height_cm - 4.330 * age as f64
        }
        Gender::Male => 88.362 + 13.397 * weight_kg + 4.799 * height_cm - 5.677 * age as f64,
    }
}

/// Daily calorie needs in kcal. Imperial inputs are converted to metric
/// before evaluating the basal metabolic rate.
pub fn calculate_calorie_intake(
    weight: f64,
    height: f64,
    age: u32,
    gender: Gender,
    activity_level: ActivityLevel,
    unit_system: UnitSystem,
) -> f64 {
    calorie_intake_for(&User::new(
        age,
        gender,
        weight,
        height,
        unit_system,
        activity_level,
    ))
}

pub fn calorie_intake_for(user: &User) -> f64 {
    let bmr = calculate_bmr(user.weight_kg(), user.height_cm(), user.age(), user.gender());
    let activity_level = user.activity_level();
    let calories = bmr * activity_level.multiplier();
    debug!(
        "BMR {} kcal, activity level {} ({}), calorie needs {} kcal",
        bmr,
        activity_level,
        activity_level.multiplier(),
        calories
    );
    calories
}

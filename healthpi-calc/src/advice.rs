use healthpi_model::user::Gender;

/// A short health suggestion for the given age bracket and gender.
pub fn give_suggestions(age: u32, gender: Gender) -> &'static str {
    match (age, gender) {
        (0..=17, _) => "Focus on balanced nutrition and regular physical activity.",
        (18..=34, Gender::Male) => "Focus on building muscle mass and cardiovascular health.",
        (18..=34, Gender::Female) => "Maintain a healthy body composition and hormonal balance.",
        (35..=49, Gender::Male) => "Maintain muscle mass and ensure adequate protein intake.",
        (35..=49, Gender::Female) => "Strength training and adequate calcium intake are essential.",
        (_, Gender::Male) => "Focus on joint health, regular physical activity, and heart health.",
        (_, Gender::Female) => "Bone health, joint flexibility, and nutrient-rich diet are key.",
    }
}

use std::fmt;

use healthpi_calc::{parse_number, report::HealthReport};
use healthpi_model::{
    units::UnitSystem,
    user::{ActivityLevel, Gender, User},
};
use log::{info, warn};
use strum::IntoEnumIterator;

use crate::{
    console::{prompt, Console},
    Result,
};

pub const RESULTS_TITLE: &str = "Personal Healthcare Results";
pub const INPUT_ERROR_TITLE: &str = "Input Error";
pub const INPUT_ERROR_MESSAGE: &str =
    "Please enter valid numerical values for age, weight, and height.";

/// Raw contents of the healthcare form. Text fields are kept as typed so an
/// invalid submission can be shown again unchanged.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FormInput {
    pub age: String,
    pub weight: String,
    pub height: String,
    pub unit_system: UnitSystem,
    pub gender: Gender,
    pub activity_level: ActivityLevel,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DialogKind {
    Info,
    Error,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Dialog {
    pub kind: DialogKind,
    pub title: &'static str,
    pub message: String,
    /// Set only on the results dialog.
    pub report: Option<HealthReport>,
}

impl FormInput {
    pub fn to_user(&self) -> healthpi_calc::Result<User> {
        Ok(User::new(
            parse_number("age", &self.age)?,
            self.gender,
            parse_number("weight", &self.weight)?,
            parse_number("height", &self.height)?,
            self.unit_system,
            self.activity_level,
        ))
    }

    pub fn submit(&self) -> Dialog {
        match self.to_user() {
            Ok(user) => {
                info!("Showing results for {:?}", user);
                Dialog::results(HealthReport::for_user(&user))
            }
            Err(e) => {
                warn!("Form rejected: {}", e);
                Dialog::input_error()
            }
        }
    }
}

impl Dialog {
    pub fn results(report: HealthReport) -> Self {
        Self {
            kind: DialogKind::Info,
            title: RESULTS_TITLE,
            message: report.to_string(),
            report: Some(report),
        }
    }

    pub fn input_error() -> Self {
        Self {
            kind: DialogKind::Error,
            title: INPUT_ERROR_TITLE,
            message: INPUT_ERROR_MESSAGE.to_owned(),
            report: None,
        }
    }
}

impl fmt::Display for Dialog {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let lines: Vec<&str> = self.message.lines().collect();
        let width = lines
            .iter()
            .map(|l| l.chars().count())
            .chain([self.title.chars().count()])
            .max()
            .unwrap_or(0);
        let border = format!("+{}+", "-".repeat(width + 2));

        writeln!(f, "{}", border)?;
        writeln!(f, "| {:<width$} |", self.title, width = width)?;
        writeln!(f, "{}", border)?;
        for line in lines {
            writeln!(f, "| {:<width$} |", line, width = width)?;
        }
        writeln!(f, "{}", border)
    }
}

/// A form field with a fixed set of options, shown as a numbered list.
trait Choice: Copy + PartialEq + IntoEnumIterator + fmt::Display {
    fn describe(&self) -> String {
        self.to_string()
    }

    /// Option by its 1-based position in the list.
    fn from_number(number: usize) -> Option<Self> {
        number.checked_sub(1).and_then(|i| Self::iter().nth(i))
    }

    fn from_answer(answer: &str) -> Option<Self>;
}

impl Choice for UnitSystem {
    fn describe(&self) -> String {
        match self {
            UnitSystem::Metric => "Metric (kg, m)".to_owned(),
            UnitSystem::Imperial => "Imperial (lbs, inches)".to_owned(),
        }
    }

    fn from_answer(answer: &str) -> Option<Self> {
        UnitSystem::from_label(answer).ok()
    }
}

impl Choice for Gender {
    fn from_answer(answer: &str) -> Option<Self> {
        Gender::from_label(answer).ok()
    }
}

impl Choice for ActivityLevel {
    fn from_number(number: usize) -> Option<Self> {
        u8::try_from(number).ok().and_then(ActivityLevel::from_index)
    }

    fn from_answer(answer: &str) -> Option<Self> {
        let level = ActivityLevel::from_label(answer);
        if level.to_string() != answer {
            warn!(
                "Unknown activity level \"{}\", assuming {}",
                answer, level
            );
        }
        Some(level)
    }
}

fn ask_text(console: &mut dyn Console, label: &str, current: &str) -> Result<String> {
    let question = if current.is_empty() {
        format!("{}: ", label)
    } else {
        format!("{} [{}]: ", label, current)
    };
    let answer = prompt(console, &question)?;
    if answer.trim().is_empty() {
        Ok(current.to_owned())
    } else {
        Ok(answer.trim().to_owned())
    }
}

fn ask_choice<T: Choice>(console: &mut dyn Console, label: &str, current: T) -> Result<T> {
    let options: Vec<T> = T::iter().collect();
    loop {
        console.write(&format!("{}\n", label))?;
        for (i, option) in options.iter().enumerate() {
            let marker = if *option == current { '*' } else { ' ' };
            console.write(&format!(" {} {}) {}\n", marker, i + 1, option.describe()))?;
        }

        let answer = prompt(console, &format!("Choose 1-{} [{}]: ", options.len(), current))?;
        let answer = answer.trim();
        if answer.is_empty() {
            return Ok(current);
        }
        let chosen = match answer.parse::<usize>() {
            Ok(number) => T::from_number(number),
            Err(_) => T::from_answer(answer),
        };
        match chosen {
            Some(choice) => return Ok(choice),
            None => console.write("Please pick one of the listed options.\n")?,
        }
    }
}

/// Walks through every field in form order, keeping `previous` values for
/// blank answers.
pub fn fill(console: &mut dyn Console, previous: &FormInput) -> Result<FormInput> {
    Ok(FormInput {
        age: ask_text(console, "Age (years)", &previous.age)?,
        weight: ask_text(console, "Weight", &previous.weight)?,
        height: ask_text(console, "Height", &previous.height)?,
        unit_system: ask_choice(console, "Unit System", previous.unit_system)?,
        gender: ask_choice(console, "Gender", previous.gender)?,
        activity_level: ask_choice(console, "Activity Level", previous.activity_level)?,
    })
}

/// Shows the form until it is submitted with valid values, then displays
/// the results dialog.
pub fn run(console: &mut dyn Console) -> Result<HealthReport> {
    console.write("Personal Healthcare Calculator\n\n")?;

    let mut input = FormInput::default();
    loop {
        input = fill(console, &input)?;
        let dialog = input.submit();
        console.write(&format!("\n{}\n", dialog))?;
        if let Some(report) = dialog.report {
            return Ok(report);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use crate::{console::MockConsole, Error};

    use super::*;

    fn scripted_console(answers: &[&str]) -> MockConsole {
        let mut answers: VecDeque<String> = answers.iter().map(|a| a.to_string()).collect();
        let mut console = MockConsole::new();
        console
            .expect_read_line()
            .returning(move || Ok(answers.pop_front()));
        console.expect_write().returning(|_| Ok(()));
        console
    }

    fn form(age: &str, weight: &str, height: &str) -> FormInput {
        FormInput {
            age: age.to_owned(),
            weight: weight.to_owned(),
            height: height.to_owned(),
            ..Default::default()
        }
    }

    #[test]
    fn defaults_match_initial_selections() {
        let input = FormInput::default();
        assert_eq!(input.unit_system, UnitSystem::Metric);
        assert_eq!(input.gender, Gender::Male);
        assert_eq!(input.activity_level, ActivityLevel::Sedentary);
    }

    #[test]
    fn valid_submission_shows_results() {
        let dialog = form("30", "80", "1.8").submit();

        assert_eq!(dialog.kind, DialogKind::Info);
        assert_eq!(dialog.title, RESULTS_TITLE);
        assert_eq!(
            dialog.message,
            "BMI: 24.69\n\
             Recommended daily protein intake: 96.0 grams\n\
             Recommended daily calorie intake: 2224.36 calories\n\
             Health Suggestions: Focus on building muscle mass and cardiovascular health."
        );
        let report = dialog.report.unwrap();
        assert_eq!(report.bmi, 24.69);
        assert_eq!(report.calorie_intake, 2224.36);
    }

    #[test]
    fn invalid_submissions_show_input_error() {
        let test_data = [
            form("thirty", "80", "1.8"),
            form("30", "", "1.8"),
            form("30", "80", "tall"),
            form("-1", "80", "1.8"),
            form("30.5", "80", "1.8"),
        ];

        for (i, input) in test_data.into_iter().enumerate() {
            let dialog = input.submit();
            assert_eq!(dialog.kind, DialogKind::Error, "Test case #{}", i);
            assert_eq!(dialog.title, INPUT_ERROR_TITLE, "Test case #{}", i);
            assert_eq!(dialog.message, INPUT_ERROR_MESSAGE, "Test case #{}", i);
            assert_eq!(dialog.report, None, "Test case #{}", i);
        }
    }

    #[test]
    fn dialog_is_rendered_in_a_box() {
        let dialog = Dialog {
            kind: DialogKind::Error,
            title: "Input Error",
            message: "Bad\nvalues here".to_owned(),
            report: None,
        };

        assert_eq!(
            dialog.to_string(),
            "+-------------+\n\
             | Input Error |\n\
             +-------------+\n\
             | Bad         |\n\
             | values here |\n\
             +-------------+\n"
        );
    }

    #[test]
    fn fill_reads_fields_in_form_order() {
        let mut console =
            scripted_console(&["25", "154", "69", "2", "female", "Very Active"]);

        let input = fill(&mut console, &FormInput::default()).unwrap();

        assert_eq!(
            input,
            FormInput {
                age: "25".to_owned(),
                weight: "154".to_owned(),
                height: "69".to_owned(),
                unit_system: UnitSystem::Imperial,
                gender: Gender::Female,
                activity_level: ActivityLevel::VeryActive,
            }
        );
    }

    #[test]
    fn blank_answers_keep_previous_values() {
        let previous = FormInput {
            unit_system: UnitSystem::Imperial,
            activity_level: ActivityLevel::ModeratelyActive,
            ..form("40", "180", "70")
        };
        let mut console = scripted_console(&["", "", "72", "", "", ""]);

        let input = fill(&mut console, &previous).unwrap();

        assert_eq!(
            input,
            FormInput {
                height: "72".to_owned(),
                ..previous
            }
        );
    }

    #[test]
    fn invalid_choice_is_asked_again() {
        let mut console = scripted_console(&["9", "0", "imperial"]);

        let unit_system = ask_choice(&mut console, "Unit System", UnitSystem::Metric).unwrap();

        assert_eq!(unit_system, UnitSystem::Imperial);
    }

    #[test]
    fn activity_level_menu_numbers() {
        let test_data = [
            (vec!["1"], ActivityLevel::Sedentary),
            (vec!["3"], ActivityLevel::ModeratelyActive),
            (vec!["0", "6", "5"], ActivityLevel::ExtremelyActive),
            (vec!["300", "4"], ActivityLevel::VeryActive),
        ];

        for (i, (answers, expected_output)) in test_data.into_iter().enumerate() {
            let mut console = scripted_console(&answers);
            assert_eq!(
                ask_choice(&mut console, "Activity Level", ActivityLevel::Sedentary).unwrap(),
                expected_output,
                "Test case #{}",
                i
            );
        }
    }

    #[test]
    fn unknown_activity_label_selects_most_active_level() {
        let mut console = scripted_console(&["Weekend Warrior"]);

        let level =
            ask_choice(&mut console, "Activity Level", ActivityLevel::Sedentary).unwrap();

        assert_eq!(level, ActivityLevel::ExtremelyActive);
    }

    #[test]
    fn form_is_shown_again_after_input_error() {
        let mut console = scripted_console(&[
            "thirty", "80", "1.8", "", "", "", // rejected
            "30", "", "", "", "", "",
        ]);

        let report = run(&mut console).unwrap();

        assert_eq!(report.bmi, 24.69);
        assert_eq!(report.protein_intake, 96.0);
    }

    #[test]
    fn form_fails_when_input_ends() {
        let mut console = scripted_console(&["30", "80"]);

        assert!(matches!(run(&mut console), Err(Error::EndOfInput)));
    }
}

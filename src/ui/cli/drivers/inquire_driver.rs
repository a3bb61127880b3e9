use crate::ui::cli::drivers::PromptDriver;
use anyhow::Result;
use inquire::validator::Validation;
use inquire::{Confirm, CustomType, Text};

pub struct InquireDriver;

fn out_of_range(x: f64, min: Option<f64>, max: Option<f64>) -> Option<String> {
    match (min, max) {
        (Some(lo), Some(hi)) if x < lo || x > hi => Some(format!("Must be between {lo} and {hi}")),
        (Some(lo), _) if x < lo => Some(format!("Must be ≥ {lo}")),
        (_, Some(hi)) if x > hi => Some(format!("Must be ≤ {hi}")),
        _ => None,
    }
}

impl PromptDriver for InquireDriver {
    fn ask_bool(&self, title: &str, help: &str, default: bool) -> Result<bool> {
        Ok(Confirm::new(title)
            .with_default(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_string(&self, title: &str, help: &str, default: &str) -> Result<String> {
        Ok(Text::new(title)
            .with_initial_value(default)
            .with_help_message(help)
            .prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        Ok(CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help)
            .with_validator(move |x: &f64| {
                Ok(match out_of_range(*x, min, max) {
                    Some(msg) => Validation::Invalid(msg.into()),
                    None => Validation::Valid,
                })
            })
            .prompt()?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_messages() {
        assert_eq!(out_of_range(0.5, Some(0.0), Some(1.0)), None);
        assert_eq!(
            out_of_range(2.0, Some(0.0), Some(1.0)).as_deref(),
            Some("Must be between 0 and 1")
        );
        assert_eq!(out_of_range(-1.0, Some(0.0), None).as_deref(), Some("Must be ≥ 0"));
        assert_eq!(out_of_range(5.0, None, Some(3.0)).as_deref(), Some("Must be ≤ 3"));
        assert_eq!(out_of_range(5.0, None, None), None);
    }
}

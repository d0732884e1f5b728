use anyhow::Result;
use inquire::{CustomType, validator::Validation};

use crate::ui::drivers::PromptDriver;

pub struct InquireDriver;

fn bounds_text<T: std::fmt::Display>(min: Option<T>, max: Option<T>) -> String {
    match (min, max) {
        (Some(lo), Some(hi)) => format!("Must be between {lo} and {hi}"),
        (Some(lo), None) => format!("Must be ≥ {lo}"),
        (None, Some(hi)) => format!("Must be ≤ {hi}"),
        (None, None) => String::new(),
    }
}

impl PromptDriver for InquireDriver {
    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64> {
        let mut q = CustomType::<u64>::new(title)
            .with_default(default)
            .with_help_message(help);

        if min.is_some() || max.is_some() {
            let message = bounds_text(min, max);
            q = q.with_validator(move |x: &u64| {
                if min.is_none_or(|lo| *x >= lo) && max.is_none_or(|hi| *x <= hi) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(message.clone().into()))
                }
            });
        }

        Ok(q.prompt()?)
    }

    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64> {
        let mut q = CustomType::<f64>::new(title)
            .with_default(default)
            .with_help_message(help);

        if min.is_some() || max.is_some() {
            let message = bounds_text(min, max);
            q = q.with_validator(move |x: &f64| {
                if min.is_none_or(|lo| *x >= lo) && max.is_none_or(|hi| *x <= hi) {
                    Ok(Validation::Valid)
                } else {
                    Ok(Validation::Invalid(message.clone().into()))
                }
            });
        }

        Ok(q.prompt()?)
    }
}

use std::fmt::{Display, Formatter};

use anyhow::Result;
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{EnumIter, EnumMessage as EnumMessageDerive, IntoStaticStr};

const DIM_ITALIC: &str = "\x1b[2m\x1b[3m";
const RESET: &str = "\x1b[0m";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, EnumMessageDerive, IntoStaticStr)]
pub enum DemoChoice {
    #[strum(
        message = "Percentile table",
        detailed_message = "CDF values and percentiles for whole z-scores."
    )]
    PercentileTable,
    #[strum(
        message = "Method comparison",
        detailed_message = "Closed-form CDF vs trapezoidal integration."
    )]
    MethodComparison,
    #[strum(
        message = "Step-by-step",
        detailed_message = "How one z-score becomes a percentile."
    )]
    Walkthrough,
    #[strum(
        message = "Density sketch",
        detailed_message = "Text rendering of the curve and its shaded mass."
    )]
    DensitySketch,
    #[strum(message = "Quit")]
    Quit,
}

struct MenuItem {
    choice: DemoChoice,
    text: String,
}

impl Display for MenuItem {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

fn menu_items() -> Vec<MenuItem> {
    DemoChoice::iter()
        .map(|choice| {
            let label = choice.get_message().unwrap_or_else(|| choice.into());
            let desc = choice.get_detailed_message().unwrap_or("");
            let text = if desc.is_empty() {
                label.to_string()
            } else {
                format!("{label}  {DIM_ITALIC}{desc}{RESET}")
            };
            MenuItem { choice, text }
        })
        .collect()
}

pub fn select_demo() -> Result<DemoChoice> {
    let selected = inquire::Select::new("Choose a demonstration:", menu_items()).prompt()?;
    Ok(selected.choice)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_choice_is_listed() {
        let items = menu_items();
        assert_eq!(items.len(), DemoChoice::iter().count());
        assert_eq!(items.last().unwrap().choice, DemoChoice::Quit);
    }

    #[test]
    fn described_choices_carry_dim_styling() {
        let items = menu_items();
        assert!(items[0].text.contains(DIM_ITALIC));
        // Quit has no description and stays plain
        assert!(!items.last().unwrap().text.contains(DIM_ITALIC));
    }
}

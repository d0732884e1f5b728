use anyhow::Result;

/// Console input abstraction so demos can be driven (and tested)
/// without a live terminal.
pub trait PromptDriver {
    fn ask_u64(
        &self,
        title: &str,
        help: &str,
        default: u64,
        min: Option<u64>,
        max: Option<u64>,
    ) -> Result<u64>;
    fn ask_f64(
        &self,
        title: &str,
        help: &str,
        default: f64,
        min: Option<f64>,
        max: Option<f64>,
    ) -> Result<f64>;
}

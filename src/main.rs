use anyhow::Result;
use inquire::InquireError;

use normlab::core::{DEFAULT_INTERVALS, TrapezoidCdf};
use normlab::demos::{comparison, percentile_table, sketch, walkthrough};
use normlab::ui::drivers::{InquireDriver, PromptDriver};
use normlab::ui::menu::{self, DemoChoice};

fn main() -> Result<()> {
    println!("How the standard normal CDF turns z-scores into percentiles.\n");

    let driver = InquireDriver;
    loop {
        let choice = match menu::select_demo() {
            Ok(choice) => choice,
            Err(err) if was_cancelled(&err) => break,
            Err(err) => return Err(err),
        };

        match choice {
            DemoChoice::PercentileTable => {
                let rows = percentile_table::build_rows(&percentile_table::CANONICAL_Z_SCORES);
                println!("{}", percentile_table::render(&rows));
            }
            DemoChoice::MethodComparison => {
                let rule = prompt_rule(&driver)?;
                let rows = comparison::compare(&comparison::DEFAULT_TEST_POINTS, &rule)?;
                println!("{}", comparison::render(&rows, &rule));
            }
            DemoChoice::Walkthrough => {
                let z = prompt_z(&driver, -1.0)?;
                let rule = prompt_rule(&driver)?;
                println!("{}", walkthrough::render(&walkthrough::narrate(z, &rule)?));
            }
            DemoChoice::DensitySketch => {
                let z = prompt_z(&driver, 0.0)?;
                let rows = sketch::density_sketch(z, sketch::DEFAULT_WIDTH, sketch::DEFAULT_HEIGHT);
                println!("{}", sketch::render(&rows));
            }
            DemoChoice::Quit => break,
        }
    }

    Ok(())
}

fn prompt_z<D: PromptDriver>(driver: &D, default: f64) -> Result<f64> {
    driver.ask_f64(
        "z-score:",
        "The evaluation point, in standard deviations from the mean",
        default,
        Some(-8.0),
        Some(8.0),
    )
}

fn prompt_rule<D: PromptDriver>(driver: &D) -> Result<TrapezoidCdf> {
    let intervals = driver.ask_u64(
        "Sampling points:",
        "Equally spaced density samples between the lower bound and z",
        DEFAULT_INTERVALS as u64,
        Some(2),
        Some(10_000_000),
    )?;
    Ok(TrapezoidCdf::new(intervals as usize)?)
}

fn was_cancelled(err: &anyhow::Error) -> bool {
    matches!(
        err.downcast_ref::<InquireError>(),
        Some(InquireError::OperationCanceled | InquireError::OperationInterrupted)
    )
}

pub mod comparison;
pub mod percentile_table;
pub mod sketch;
pub mod walkthrough;

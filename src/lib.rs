pub mod core;
pub mod demos;
pub mod ui;
pub mod utils;

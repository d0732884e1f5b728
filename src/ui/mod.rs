pub mod drivers;
pub mod menu;

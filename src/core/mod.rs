pub mod density;
pub mod quadrature;

pub use density::standard_normal_pdf;
pub use quadrature::{DEFAULT_INTERVALS, NEGLIGIBLE_MASS_BOUND, QuadratureError, TrapezoidCdf};

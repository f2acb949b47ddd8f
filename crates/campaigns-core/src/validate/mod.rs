pub mod params;

pub use params::{validate_dimensions, validate_duration, validate_fields, Dimensions, Duration};

//! Outfit domain models.

mod model;

pub use model::{Outfit, WeatherMode};

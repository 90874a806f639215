//! Outfit recommendation engine.
//!
//! Selection is driven by weather mode and color affinity; the style hint
//! picks an advisory template. All randomness comes from the caller's RNG.

mod candidates;
mod generator;
mod template;

pub use candidates::CandidateTiers;
pub use generator::{GeneratedOutfit, generate};
pub use template::{STYLE_CHOICES, WeatherRules, style_template};

pub mod assembly;
pub mod catalog;
pub mod clock;
pub mod config;
pub mod engine;
pub mod error;
pub mod outfit;
pub mod store;

// Re-export common error type
pub use error::{Result, WardrobeError};

//! Application layer for the wardrobe.
//!
//! Wires configuration, logging, and file storage around the core store and
//! exposes the use cases a front end calls.

pub mod bootstrap;
pub mod logging;
pub mod wardrobe_service;

pub use bootstrap::{AppContext, bootstrap, bootstrap_with};
pub use wardrobe_service::WardrobeService;

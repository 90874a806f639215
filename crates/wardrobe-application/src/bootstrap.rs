//! Application startup: config, logging, storage, service.

use std::sync::Arc;

use anyhow::{Context, Result};
use wardrobe_core::config::WardrobeConfig;
use wardrobe_core::store::WardrobeStore;
use wardrobe_infrastructure::{ConfigService, FileKeyValueStore, WardrobePaths};

use crate::logging::init_tracing;
use crate::wardrobe_service::WardrobeService;

/// Everything a front end needs after startup.
pub struct AppContext {
    pub config: WardrobeConfig,
    pub service: WardrobeService,
}

/// Starts the app from the platform config file.
pub fn bootstrap() -> Result<AppContext> {
    let config_service = ConfigService::open_default().context("Failed to locate config file")?;
    bootstrap_with(&config_service)
}

/// Starts the app from an explicit config file.
///
/// A missing config file means defaults. A config file that exists but
/// does not parse is an error, as is an unresolvable storage directory:
/// falling back would silently open a different snapshot directory.
pub fn bootstrap_with(config_service: &ConfigService) -> Result<AppContext> {
    let config = config_service.load().with_context(|| {
        format!(
            "Failed to parse config file {}",
            config_service.path().display()
        )
    })?;
    init_tracing(&config.logging.filter);

    let data_dir = WardrobePaths::resolve_storage_dir(&config)
        .context("Failed to resolve wardrobe storage directory")?;
    tracing::info!("Wardrobe storage at {}", data_dir.display());

    let storage = Arc::new(FileKeyValueStore::new(data_dir));
    let store = WardrobeStore::open(storage);
    let service = WardrobeService::new(store).with_default_style(config.generation.default_style);

    Ok(AppContext { config, service })
}

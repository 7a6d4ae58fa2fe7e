//! A tiny synchronous event emitter.
//!
//! Register listeners per event name, dispatch events with arguments, remove
//! listeners selectively, and grant the same capability to your own types
//! with [`impl_emitter!`].

pub mod common;
pub mod config;
pub mod event;
pub mod utils;

pub use common::types::EmitterConfig;
pub use config::ConfigManager;
pub use event::{Args, Emitter, EventEmitter, EventName, Listener, ListenerCallback, Registry};
pub use serde_json::Value;
pub use utils::error::{EmitterError, ListenerError, ListenerResult, Result};

use std::path::Path;

/// Load an [`EmitterConfig`] from a JSON or YAML file and build a standalone
/// emitter from it.
pub fn init<P: AsRef<Path>>(config_path: P) -> Result<EventEmitter> {
    let config = ConfigManager::load_config(config_path)?;
    log::info!("Initialized emitter '{}'", config.label());
    Ok(EventEmitter::with_config(config))
}

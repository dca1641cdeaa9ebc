pub mod adapters;
pub mod api;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{InMemoryStore, SqliteStore};
pub use config::{AppConfig, StoreBackend};
pub use crate::core::service::BlueprintService;
pub use crate::core::transform::{Deduplicate, Identity, Subsample, TransformKind};
pub use crate::core::{Blueprint, BlueprintStore, BlueprintTransform, Point};
pub use utils::error::{BlueprintError, Result};

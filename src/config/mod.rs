#[cfg(feature = "cli")]
pub mod cli;

use crate::core::transform::TransformKind;
use crate::core::Point;
use crate::utils::error::{BlueprintError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_path, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

#[cfg(feature = "cli")]
pub use cli::{CliConfig, Command};

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub store: StoreConfig,
    pub filter: FilterConfig,
    pub seed: Vec<SeedBlueprint>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct StoreConfig {
    pub backend: StoreBackend,
    /// Database file for the sqlite backend.
    pub path: Option<String>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum StoreBackend {
    #[default]
    Memory,
    #[serde(alias = "postgres", alias = "relational")]
    Sqlite,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub kind: TransformKind,
}

/// Blueprint saved at startup, e.g. sample data for a fresh store.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedBlueprint {
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<(i32, i32)>,
}

impl SeedBlueprint {
    pub fn points(&self) -> Vec<Point> {
        self.points.iter().copied().map(Point::from).collect()
    }
}

impl AppConfig {
    /// Loads configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parses configuration from a TOML string, expanding `${VAR}` references.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content)
            .map_err(|e| BlueprintError::config(format!("TOML parsing error: {}", e)))
    }

    // Unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}")
            .map_err(|e| BlueprintError::config(format!("Invalid substitution pattern: {}", e)))?;

        let result = re.replace_all(content, |caps: &regex::Captures<'_>| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn sqlite_path(&self) -> &str {
        self.store.path.as_deref().unwrap_or("blueprints.db")
    }

    fn validate_config(&self) -> Result<()> {
        if self.store.backend == StoreBackend::Sqlite {
            validate_path("store.path", self.sqlite_path())?;
        }

        for seed in &self.seed {
            validate_non_empty_string("seed.author", &seed.author)?;
            validate_non_empty_string("seed.name", &seed.name)?;
        }

        Ok(())
    }
}

impl Validate for AppConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
            .map_err(|e| BlueprintError::config(e.to_string()))
    }
}

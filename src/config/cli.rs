use crate::config::{AppConfig, StoreBackend};
use crate::core::transform::TransformKind;
use crate::utils::error::Result;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "blueprints")]
#[command(about = "Manage authored blueprints of 2-D points")]
pub struct CliConfig {
    #[arg(long, help = "TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, value_enum, help = "Storage backend, overrides the config file")]
    pub backend: Option<StoreBackend>,

    #[arg(long, help = "SQLite database file, overrides the config file")]
    pub database: Option<String>,

    #[arg(long, value_enum, help = "Transform applied on reads, overrides the config file")]
    pub filter: Option<TransformKind>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON")]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Create a blueprint
    Create {
        author: String,
        name: String,
        /// Points as `x,y` pairs separated by `;`, e.g. "0,0;10,0"
        #[arg(long, default_value = "", value_parser = parse_points)]
        points: PointList,
    },
    /// Show one blueprint
    Get { author: String, name: String },
    /// List the blueprints of an author
    ByAuthor { author: String },
    /// List every blueprint
    List,
    /// Append a point to a blueprint
    AddPoint {
        author: String,
        name: String,
        #[arg(allow_negative_numbers = true)]
        x: i32,
        #[arg(allow_negative_numbers = true)]
        y: i32,
    },
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PointList(pub Vec<(i32, i32)>);

fn parse_points(raw: &str) -> std::result::Result<PointList, String> {
    let mut points = Vec::new();
    for pair in raw.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        let (x, y) = pair
            .split_once(',')
            .ok_or_else(|| format!("expected `x,y`, got `{}`", pair))?;
        let x = x.trim().parse::<i32>().map_err(|e| format!("bad x in `{}`: {}", pair, e))?;
        let y = y.trim().parse::<i32>().map_err(|e| format!("bad y in `{}`: {}", pair, e))?;
        points.push((x, y));
    }
    Ok(PointList(points))
}

impl CliConfig {
    /// Loads the config file (if any) and applies command-line overrides.
    pub fn resolve(&self) -> Result<AppConfig> {
        let mut config = match &self.config {
            Some(path) => AppConfig::from_file(path)?,
            None => AppConfig::default(),
        };

        if let Some(backend) = self.backend {
            config.store.backend = backend;
        }
        if let Some(database) = &self.database {
            config.store.path = Some(database.clone());
        }
        if let Some(filter) = self.filter {
            config.filter.kind = filter;
        }

        Ok(config)
    }
}

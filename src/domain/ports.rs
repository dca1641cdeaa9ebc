use crate::domain::model::{Blueprint, Point};
use crate::utils::error::Result;
use async_trait::async_trait;

/// Keyed persistence of blueprints.
///
/// Every backend enforces `(author, name)` uniqueness and reports the same
/// error kinds: `AlreadyExists` from `save`, `NotFound` from lookups and
/// appends on absent keys. Collections returned are snapshots owned by the
/// caller, ordered by `(author, name)`.
#[async_trait]
pub trait BlueprintStore: Send + Sync {
    async fn save(&self, blueprint: Blueprint) -> Result<()>;
    async fn get(&self, author: &str, name: &str) -> Result<Blueprint>;
    async fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>>;
    async fn get_all(&self) -> Result<Vec<Blueprint>>;
    async fn append_point(&self, author: &str, name: &str, point: Point) -> Result<()>;
}

/// Read-time transformation of a stored blueprint.
pub trait BlueprintTransform: Send + Sync {
    fn name(&self) -> &'static str;
    fn apply(&self, blueprint: &Blueprint) -> Blueprint;
}

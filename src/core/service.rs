use crate::core::{Blueprint, BlueprintStore, BlueprintTransform, Point, Result};
use crate::utils::validation::validate_non_empty_string;

/// Entry point for blueprint operations.
///
/// Writes reach the store untouched; every read passes through the
/// transform chosen at construction.
pub struct BlueprintService<S: BlueprintStore> {
    store: S,
    transform: Box<dyn BlueprintTransform>,
}

impl<S: BlueprintStore> BlueprintService<S> {
    pub fn new(store: S, transform: Box<dyn BlueprintTransform>) -> Self {
        tracing::debug!("Blueprint service using '{}' transform", transform.name());
        Self { store, transform }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn transform_name(&self) -> &'static str {
        self.transform.name()
    }

    pub async fn create_blueprint(
        &self,
        author: &str,
        name: &str,
        points: Vec<Point>,
    ) -> Result<Blueprint> {
        validate_non_empty_string("author", author)?;
        validate_non_empty_string("name", name)?;

        let blueprint = Blueprint::new(author, name, points);
        tracing::debug!(
            "Creating blueprint {}/{} with {} points",
            author,
            name,
            blueprint.points.len()
        );
        self.store.save(blueprint.clone()).await?;
        Ok(blueprint)
    }

    pub async fn get_blueprint(&self, author: &str, name: &str) -> Result<Blueprint> {
        let blueprint = self.store.get(author, name).await?;
        Ok(self.transform.apply(&blueprint))
    }

    pub async fn get_blueprints_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let blueprints = self.store.get_by_author(author).await?;
        Ok(self.apply_all(&blueprints))
    }

    pub async fn get_all_blueprints(&self) -> Result<Vec<Blueprint>> {
        let blueprints = self.store.get_all().await?;
        Ok(self.apply_all(&blueprints))
    }

    pub async fn add_point(&self, author: &str, name: &str, x: i32, y: i32) -> Result<()> {
        tracing::debug!("Appending ({}, {}) to {}/{}", x, y, author, name);
        self.store.append_point(author, name, Point::new(x, y)).await
    }

    fn apply_all(&self, blueprints: &[Blueprint]) -> Vec<Blueprint> {
        blueprints
            .iter()
            .map(|bp| self.transform.apply(bp))
            .collect()
    }
}

use crate::core::{Blueprint, BlueprintKey, BlueprintStore, Point, Result};
use crate::utils::error::BlueprintError;
use async_trait::async_trait;
use parking_lot::RwLock;
use std::collections::BTreeMap;

/// Process-local store. Nothing survives a restart.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    blueprints: RwLock<BTreeMap<BlueprintKey, Blueprint>>,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.blueprints.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.blueprints.read().is_empty()
    }
}

#[async_trait]
impl BlueprintStore for InMemoryStore {
    async fn save(&self, blueprint: Blueprint) -> Result<()> {
        let mut blueprints = self.blueprints.write();
        let key = blueprint.key();
        if blueprints.contains_key(&key) {
            return Err(BlueprintError::already_exists(&key.author, &key.name));
        }
        blueprints.insert(key, blueprint);
        Ok(())
    }

    async fn get(&self, author: &str, name: &str) -> Result<Blueprint> {
        self.blueprints
            .read()
            .get(&BlueprintKey::new(author, name))
            .cloned()
            .ok_or_else(|| BlueprintError::blueprint_not_found(author, name))
    }

    async fn get_by_author(&self, author: &str) -> Result<Vec<Blueprint>> {
        let found: Vec<Blueprint> = self
            .blueprints
            .read()
            .values()
            .filter(|bp| bp.author == author)
            .cloned()
            .collect();

        if found.is_empty() {
            return Err(BlueprintError::author_not_found(author));
        }
        Ok(found)
    }

    async fn get_all(&self) -> Result<Vec<Blueprint>> {
        Ok(self.blueprints.read().values().cloned().collect())
    }

    async fn append_point(&self, author: &str, name: &str, point: Point) -> Result<()> {
        let mut blueprints = self.blueprints.write();
        let blueprint = blueprints
            .get_mut(&BlueprintKey::new(author, name))
            .ok_or_else(|| BlueprintError::blueprint_not_found(author, name))?;
        blueprint.add_point(point);
        Ok(())
    }
}

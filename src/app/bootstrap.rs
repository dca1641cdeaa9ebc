use crate::config::{AppConfig, SeedBlueprint};
use crate::core::service::BlueprintService;
use crate::core::BlueprintStore;
use crate::utils::error::{BlueprintError, Result};

/// Builds the service with the transform selected in `config`.
pub fn build_service<S: BlueprintStore>(config: &AppConfig, store: S) -> BlueprintService<S> {
    BlueprintService::new(store, config.filter.kind.build())
}

/// Saves the configured seed blueprints. Seeds whose key is already taken
/// are skipped; returns how many were inserted.
pub async fn seed<S: BlueprintStore>(
    service: &BlueprintService<S>,
    seeds: &[SeedBlueprint],
) -> Result<usize> {
    let mut inserted = 0;
    for seed in seeds {
        match service
            .create_blueprint(&seed.author, &seed.name, seed.points())
            .await
        {
            Ok(_) => inserted += 1,
            Err(BlueprintError::AlreadyExists { author, name }) => {
                tracing::warn!("Seed {}/{} already stored, skipping", author, name);
            }
            Err(e) => return Err(e),
        }
    }

    if inserted > 0 {
        tracing::info!("Seeded {} blueprints", inserted);
    }
    Ok(inserted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryStore;

    fn seeds() -> Vec<SeedBlueprint> {
        vec![
            SeedBlueprint {
                author: "john".to_string(),
                name: "house".to_string(),
                points: vec![(0, 0), (10, 0), (10, 10), (0, 10)],
            },
            SeedBlueprint {
                author: "john".to_string(),
                name: "house".to_string(),
                points: vec![],
            },
        ]
    }

    #[tokio::test]
    async fn test_seed_skips_taken_keys() {
        let config = AppConfig::from_toml_str("[filter]\nkind = \"subsample\"\n").unwrap();
        let service = build_service(&config, InMemoryStore::new());
        assert_eq!(service.transform_name(), "subsample");

        assert_eq!(seed(&service, &seeds()).await.unwrap(), 1);
        assert_eq!(service.store().get("john", "house").await.unwrap().points.len(), 4);
    }

    #[tokio::test]
    async fn test_seed_reports_invalid_entries() {
        let service = build_service(&AppConfig::default(), InMemoryStore::new());
        let bad = vec![SeedBlueprint {
            author: String::new(),
            name: "x".to_string(),
            points: vec![],
        }];
        assert!(matches!(
            seed(&service, &bad).await,
            Err(BlueprintError::InvalidInput { .. })
        ));
    }
}

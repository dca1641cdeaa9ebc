use crate::domain::model::Blueprint;
use crate::domain::ports::BlueprintTransform;
use serde::{Deserialize, Serialize};

/// Returns blueprints unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct Identity;

impl BlueprintTransform for Identity {
    fn name(&self) -> &'static str {
        "identity"
    }

    fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        blueprint.clone()
    }
}

/// Collapses runs of consecutive equal points, keeping the first of each run.
///
/// Only the immediate predecessor is compared: `(1,1),(2,2),(1,1)` is kept
/// as is.
#[derive(Debug, Clone, Copy, Default)]
pub struct Deduplicate;

impl BlueprintTransform for Deduplicate {
    fn name(&self) -> &'static str {
        "deduplicate"
    }

    fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        let mut points = blueprint.points.clone();
        points.dedup();
        blueprint.with_points(points)
    }
}

/// Keeps the points at even indices. Blueprints with two points or fewer
/// pass through untouched.
#[derive(Debug, Clone, Copy, Default)]
pub struct Subsample;

impl BlueprintTransform for Subsample {
    fn name(&self) -> &'static str {
        "subsample"
    }

    fn apply(&self, blueprint: &Blueprint) -> Blueprint {
        if blueprint.points.len() <= 2 {
            return blueprint.clone();
        }
        let points = blueprint.points.iter().copied().step_by(2).collect();
        blueprint.with_points(points)
    }
}

/// Configured choice of the transform applied on every read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum TransformKind {
    #[default]
    Identity,
    #[serde(alias = "redundancy")]
    #[cfg_attr(feature = "cli", value(alias = "redundancy"))]
    Deduplicate,
    #[serde(alias = "undersampling")]
    #[cfg_attr(feature = "cli", value(alias = "undersampling"))]
    Subsample,
}

impl TransformKind {
    pub fn build(self) -> Box<dyn BlueprintTransform> {
        match self {
            Self::Identity => Box::new(Identity),
            Self::Deduplicate => Box::new(Deduplicate),
            Self::Subsample => Box::new(Subsample),
        }
    }
}

pub mod service;
pub mod transform;

pub use crate::domain::model::{Blueprint, BlueprintKey, Point};
pub use crate::domain::ports::{BlueprintStore, BlueprintTransform};
pub use crate::utils::error::Result;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// A named, authored, ordered sequence of points.
///
/// Two blueprints with the same `(author, name)` denote the same resource;
/// stores reject the second one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Blueprint {
    pub author: String,
    pub name: String,
    #[serde(default)]
    pub points: Vec<Point>,
}

impl Blueprint {
    pub fn new(author: impl Into<String>, name: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            author: author.into(),
            name: name.into(),
            points,
        }
    }

    pub fn key(&self) -> BlueprintKey {
        BlueprintKey::new(&self.author, &self.name)
    }

    /// Builds a blueprint with the same identity and a different point list.
    pub fn with_points(&self, points: Vec<Point>) -> Self {
        Self {
            author: self.author.clone(),
            name: self.name.clone(),
            points,
        }
    }

    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }
}

/// Identity of a blueprint inside a store.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct BlueprintKey {
    pub author: String,
    pub name: String,
}

impl BlueprintKey {
    pub fn new(author: &str, name: &str) -> Self {
        Self {
            author: author.to_string(),
            name: name.to_string(),
        }
    }
}

impl std::fmt::Display for BlueprintKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.author, self.name)
    }
}

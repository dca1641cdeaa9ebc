use serde::Serialize;
use std::collections::BTreeMap;

pub const BASE_PATH: &str = "/api/v1/blueprints";

/// Hypermedia links keyed by relation name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Links(BTreeMap<String, String>);

impl Links {
    pub fn insert(mut self, rel: &str, href: String) -> Self {
        self.0.insert(rel.to_string(), href);
        self
    }

    pub fn get(&self, rel: &str) -> Option<&str> {
        self.0.get(rel).map(String::as_str)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn for_all() -> Self {
        Self::default().insert("self", BASE_PATH.to_string())
    }

    pub fn for_author(author: &str) -> Self {
        Self::default()
            .insert("self", author_path(author))
            .insert("all-blueprints", BASE_PATH.to_string())
    }

    pub fn for_blueprint(author: &str, name: &str) -> Self {
        Self::default()
            .insert("self", blueprint_path(author, name))
            .insert("add-point", format!("{}/points", blueprint_path(author, name)))
            .insert("author-blueprints", author_path(author))
            .insert("all-blueprints", BASE_PATH.to_string())
    }

    /// Links returned after a point was appended.
    pub fn for_point_update(author: &str, name: &str) -> Self {
        Self::default()
            .insert("blueprint", blueprint_path(author, name))
            .insert("all-blueprints", BASE_PATH.to_string())
    }
}

fn author_path(author: &str) -> String {
    format!("{}/{}", BASE_PATH, author)
}

fn blueprint_path(author: &str, name: &str) -> String {
    format!("{}/{}/{}", BASE_PATH, author, name)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blueprint_links() {
        let links = Links::for_blueprint("john", "house");
        assert_eq!(links.get("self"), Some("/api/v1/blueprints/john/house"));
        assert_eq!(links.get("add-point"), Some("/api/v1/blueprints/john/house/points"));
        assert_eq!(links.get("author-blueprints"), Some("/api/v1/blueprints/john"));
        assert_eq!(links.get("all-blueprints"), Some("/api/v1/blueprints"));
    }

    #[test]
    fn test_point_update_links() {
        let links = Links::for_point_update("john", "house");
        assert_eq!(links.get("blueprint"), Some("/api/v1/blueprints/john/house"));
        assert!(links.get("self").is_none());
    }
}

use crate::utils::error::{BlueprintError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_non_empty_string(field_name: &str, value: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(BlueprintError::invalid_input(
            field_name,
            "Value cannot be empty or whitespace-only",
        ));
    }
    Ok(())
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(BlueprintError::invalid_input(field_name, "Path cannot be empty"));
    }

    if path.contains('\0') {
        return Err(BlueprintError::invalid_input(
            field_name,
            "Path contains null bytes",
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_non_empty_string() {
        assert!(validate_non_empty_string("author", "john").is_ok());
        assert!(validate_non_empty_string("author", "").is_err());
        assert!(validate_non_empty_string("author", "   ").is_err());
    }

    #[test]
    fn test_validate_path() {
        assert!(validate_path("store.path", "blueprints.db").is_ok());
        assert!(validate_path("store.path", ":memory:").is_ok());
        assert!(validate_path("store.path", "").is_err());
        assert!(validate_path("store.path", "bad\0path").is_err());
    }

    #[test]
    fn test_error_names_the_field() {
        match validate_non_empty_string("name", "") {
            Err(BlueprintError::InvalidInput { field, .. }) => assert_eq!(field, "name"),
            other => panic!("unexpected result: {:?}", other),
        }
    }
}

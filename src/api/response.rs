use crate::api::links::Links;
use crate::utils::error::{BlueprintError, ErrorCategory};
use serde::Serialize;

/// Uniform envelope `{code, message, data, _links}`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ApiResponse<T> {
    pub code: u16,
    pub message: String,
    pub data: Option<T>,
    #[serde(rename = "_links")]
    pub links: Links,
}

impl<T> ApiResponse<T> {
    pub fn new(code: u16, message: impl Into<String>, data: Option<T>) -> Self {
        Self {
            code,
            message: message.into(),
            data,
            links: Links::default(),
        }
    }

    pub fn ok(data: T) -> Self {
        Self::new(200, "execute ok", Some(data))
    }

    pub fn created(data: T) -> Self {
        Self::new(201, "resource created", Some(data))
    }

    pub fn accepted(data: Option<T>) -> Self {
        Self::new(202, "update accepted", data)
    }

    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::new(400, message, None)
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::new(404, message, None)
    }

    pub fn conflict(message: impl Into<String>) -> Self {
        Self::new(409, message, None)
    }

    pub fn with_links(mut self, links: Links) -> Self {
        self.links = links;
        self
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.code)
    }

    pub fn from_error(err: &BlueprintError) -> Self {
        match err.category() {
            ErrorCategory::Client => Self::bad_request(err.to_string()),
            ErrorCategory::NotFound => Self::not_found(err.to_string()),
            ErrorCategory::Conflict => Self::conflict(err.to_string()),
            ErrorCategory::Configuration | ErrorCategory::Internal => {
                Self::new(err.status_code(), err.to_string(), None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_constructors() {
        let r = ApiResponse::ok("payload");
        assert_eq!(r.code, 200);
        assert_eq!(r.message, "execute ok");
        assert_eq!(r.data, Some("payload"));
        assert!(r.links.is_empty());

        let r = ApiResponse::created("nuevo");
        assert_eq!((r.code, r.message.as_str()), (201, "resource created"));

        let r: ApiResponse<()> = ApiResponse::accepted(None);
        assert_eq!((r.code, r.message.as_str()), (202, "update accepted"));
        assert!(r.data.is_none());
        assert!(r.is_success());
    }

    #[test]
    fn test_error_constructors_carry_message_and_no_data() {
        let r: ApiResponse<()> = ApiResponse::bad_request("author and name are required");
        assert_eq!(r.code, 400);
        assert_eq!(r.message, "author and name are required");
        assert!(r.data.is_none());
        assert!(!r.is_success());

        assert_eq!(ApiResponse::<()>::not_found("x").code, 404);
        assert_eq!(ApiResponse::<()>::conflict("x").code, 409);
    }

    #[test]
    fn test_from_error_picks_status() {
        let r: ApiResponse<()> =
            ApiResponse::from_error(&BlueprintError::already_exists("john", "house"));
        assert_eq!(r.code, 409);
        assert_eq!(r.message, "Blueprint already exists: john/house");

        let r: ApiResponse<()> =
            ApiResponse::from_error(&BlueprintError::invalid_input("author", "blank"));
        assert_eq!(r.code, 400);

        let r: ApiResponse<()> =
            ApiResponse::from_error(&BlueprintError::author_not_found("nobody"));
        assert_eq!(r.code, 404);
    }

    #[test]
    fn test_serializes_links_under_underscore_key() {
        let r = ApiResponse::ok(1).with_links(Links::for_all());
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["code"], 200);
        assert_eq!(json["data"], 1);
        assert_eq!(json["_links"]["self"], "/api/v1/blueprints");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum BlueprintError {
    #[error("Invalid input for `{field}`: {reason}")]
    InvalidInput { field: String, reason: String },

    #[error("Blueprint already exists: {author}/{name}")]
    AlreadyExists { author: String, name: String },

    #[error("{message}")]
    NotFound { message: String },

    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Background task failed: {0}")]
    TaskJoin(#[from] tokio::task::JoinError),

    #[error("Configuration error: {message}")]
    Config { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Conflict,
    NotFound,
    Configuration,
    Internal,
}

impl BlueprintError {
    pub fn invalid_input(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidInput {
            field: field.to_string(),
            reason: reason.into(),
        }
    }

    pub fn already_exists(author: &str, name: &str) -> Self {
        Self::AlreadyExists {
            author: author.to_string(),
            name: name.to_string(),
        }
    }

    pub fn blueprint_not_found(author: &str, name: &str) -> Self {
        Self::NotFound {
            message: format!("Blueprint not found: {}/{}", author, name),
        }
    }

    pub fn author_not_found(author: &str) -> Self {
        Self::NotFound {
            message: format!("No blueprints for author: {}", author),
        }
    }

    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidInput { .. } => ErrorCategory::Client,
            Self::AlreadyExists { .. } => ErrorCategory::Conflict,
            Self::NotFound { .. } => ErrorCategory::NotFound,
            Self::Config { .. } => ErrorCategory::Configuration,
            Self::Database(_) | Self::Io(_) | Self::Serialization(_) | Self::TaskJoin(_) => {
                ErrorCategory::Internal
            }
        }
    }

    /// HTTP-style status a caller reports for this error.
    pub fn status_code(&self) -> u16 {
        match self.category() {
            ErrorCategory::Client => 400,
            ErrorCategory::Conflict => 409,
            ErrorCategory::NotFound => 404,
            ErrorCategory::Configuration | ErrorCategory::Internal => 500,
        }
    }

    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Client | ErrorCategory::Conflict | ErrorCategory::NotFound => 1,
            ErrorCategory::Configuration => 2,
            ErrorCategory::Internal => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, BlueprintError>;

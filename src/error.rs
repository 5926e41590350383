//! Pantry error types

/// Pantry error types
#[derive(Debug, thiserror::Error)]
pub enum PantryError {
    // Upstream/network errors
    /// Every attempt against the upstream failed. Callers should surface a
    /// "try again" state rather than partial results.
    #[error("upstream request to {url} failed after {attempts} attempt(s): {reason}")]
    UpstreamRequestFailed {
        url: String,
        attempts: u32,
        reason: String,
    },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error ({status}): {message}")]
    Api { status: u16, message: String },

    #[error("recipe not found: {0}")]
    RecipeNotFound(String),

    // Data errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("ingredient already added: {0}")]
    DuplicateIngredient(String),

    #[error("unknown recipe category: {0}")]
    UnknownCategory(String),

    // Configuration errors
    #[error("configuration error: {0}")]
    Configuration(String),
}

impl PantryError {
    /// Whether this error was produced by the upstream service or the
    /// network path to it, as opposed to local input or configuration.
    pub fn is_upstream(&self) -> bool {
        matches!(
            self,
            PantryError::UpstreamRequestFailed { .. }
                | PantryError::Http(_)
                | PantryError::Api { .. }
                | PantryError::Json(_)
        )
    }
}

/// Result type alias for Pantry operations
pub type Result<T> = std::result::Result<T, PantryError>;

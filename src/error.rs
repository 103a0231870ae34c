use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

/// Internal failure modes of the rendering pipeline.
///
/// None of these cross the top-level rendering functions: callers of
/// [`crate::render_stored`] always get a display string, and failures degrade
/// per the fallback chain (plain-text extraction, then empty output). The
/// error type exists for the fallible inner layers and for callers that want
/// to know why a document was rejected.
#[derive(Error, Debug, Clone)]
pub enum RenderError {
    #[error("Maximum nesting depth ({max_depth}) exceeded")]
    MaxNestingDepthExceeded { max_depth: usize },

    #[error("Document root must be a 'root' node, found '{found}'")]
    NotARootNode { found: String },

    #[error("Deserialization error: {0}")]
    DeserializationError(String),
}

impl From<serde_json::Error> for RenderError {
    fn from(err: serde_json::Error) -> Self {
        RenderError::DeserializationError(err.to_string())
    }
}

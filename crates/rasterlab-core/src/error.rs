//! Error taxonomy shared by every pipeline stage.
//!
//! Each stage checks its own preconditions and returns one of the known
//! kinds below before doing any work. Known kinds propagate unchanged through
//! the driver; only failures nobody anticipated are wrapped in
//! [`PipelineError::Internal`], which always names the originating operation.

use thiserror::Error;

/// Boxed cause carried by [`PipelineError::Internal`].
pub type BoxedCause = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Error kinds produced by the ingestion and transform pipeline.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Unsupported or mismatched file/image format.
    #[error("Unsupported format: {0}")]
    Format(String),

    /// The file is missing, unreadable, or corrupted.
    #[error("Cannot decode image: {0}")]
    Decode(String),

    /// Buffer rank or size is invalid for the requested operation.
    #[error("Invalid dimensions: {0}")]
    Dimension(String),

    /// The buffer holds no samples.
    #[error("Empty input: {0}")]
    EmptyInput(String),

    /// Unanticipated failure inside `operation`.
    #[error("Internal error in {operation}: {source}")]
    Internal {
        operation: &'static str,
        #[source]
        source: BoxedCause,
    },
}

impl PipelineError {
    /// Wrap an unexpected failure, recording the operation it came from.
    pub fn internal(operation: &'static str, source: impl Into<BoxedCause>) -> Self {
        PipelineError::Internal {
            operation,
            source: source.into(),
        }
    }

    /// Short, stable name of the error kind (used in logs and CLI output).
    pub fn kind(&self) -> &'static str {
        match self {
            PipelineError::Format(_) => "FormatError",
            PipelineError::Decode(_) => "DecodeError",
            PipelineError::Dimension(_) => "DimensionError",
            PipelineError::EmptyInput(_) => "EmptyInputError",
            PipelineError::Internal { .. } => "InternalError",
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, PipelineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PipelineError::Format("'image.png' has no jpg/jpeg extension".to_string());
        assert_eq!(
            err.to_string(),
            "Unsupported format: 'image.png' has no jpg/jpeg extension"
        );

        let err = PipelineError::Dimension("expected rank 2 or 3, got 4".to_string());
        assert_eq!(err.to_string(), "Invalid dimensions: expected rank 2 or 3, got 4");
    }

    #[test]
    fn test_internal_names_operation() {
        let err = PipelineError::internal("load", "decoder limit exceeded");
        assert_eq!(err.kind(), "InternalError");
        assert_eq!(
            err.to_string(),
            "Internal error in load: decoder limit exceeded"
        );
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(PipelineError::Decode(String::new()).kind(), "DecodeError");
        assert_eq!(PipelineError::EmptyInput(String::new()).kind(), "EmptyInputError");
    }
}

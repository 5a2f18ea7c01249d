use thiserror::Error;

/// Failure reported by a child renderer instead of producing output.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("{0}")]
    Message(String),
    #[error("{context}: {source}")]
    Source {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

impl RenderError {
    pub fn message(message: impl Into<String>) -> Self {
        RenderError::Message(message.into())
    }

    pub fn with_source(
        context: impl Into<String>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        RenderError::Source {
            context: context.into(),
            source: source.into(),
        }
    }
}

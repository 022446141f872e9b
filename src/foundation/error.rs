/// Result alias used across the crate.
pub type StoryResult<T> = Result<T, StoryError>;

/// Error type for every stage of the story pipeline.
#[derive(thiserror::Error, Debug)]
pub enum StoryError {
    /// Corpus is missing, malformed, or has an empty level.
    #[error("corpus error: {0}")]
    Corpus(String),

    /// Font could not be fetched, read, or registered.
    #[error("font error: {0}")]
    Font(String),

    /// Layout or raster stage failed.
    #[error("render error: {0}")]
    Render(String),

    /// JSON (de)serialization failed.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Any other failure, usually IO wrapped with context.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl StoryError {
    /// Build a [`StoryError::Corpus`].
    pub fn corpus(msg: impl Into<String>) -> Self {
        Self::Corpus(msg.into())
    }

    /// Build a [`StoryError::Font`].
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Build a [`StoryError::Render`].
    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }

    /// Build a [`StoryError::Serde`].
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

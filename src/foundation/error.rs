/// Result alias used throughout the crate.
pub type PathlapseResult<T> = Result<T, PathlapseError>;

/// Every failure the pipeline can report. All of them are fatal for a render.
#[derive(thiserror::Error, Debug)]
pub enum PathlapseError {
    /// A configuration value or input record is out of range or malformed.
    #[error("validation error: {0}")]
    Validation(String),

    /// Loaded inputs disagree with each other (time-point counts, degenerate ranges, no data).
    #[error("input inconsistency: {0}")]
    InputInconsistency(String),

    /// A required file, image or output sink could not be acquired or written.
    #[error("resource error: {0}")]
    Resource(String),

    /// Raster construction or compositing failed.
    #[error("render error: {0}")]
    Render(String),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl PathlapseError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn inconsistency(msg: impl Into<String>) -> Self {
        Self::InputInconsistency(msg.into())
    }

    pub fn resource(msg: impl Into<String>) -> Self {
        Self::Resource(msg.into())
    }

    pub fn render(msg: impl Into<String>) -> Self {
        Self::Render(msg.into())
    }
}

impl From<image::ImageError> for PathlapseError {
    fn from(e: image::ImageError) -> Self {
        Self::Resource(format!("image: {e}"))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

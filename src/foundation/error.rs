/// Convenience result type used across Refractor.
pub type RefractResult<T> = Result<T, RefractError>;

/// Top-level error taxonomy used by engine APIs.
#[derive(thiserror::Error, Debug)]
pub enum RefractError {
    /// Width or height is zero, unknown, or inconsistent with a pixel buffer.
    #[error("invalid dimensions: {0}")]
    InvalidDimensions(String),

    /// A parameter lies outside its documented domain.
    #[error("invalid parameter: {0}")]
    InvalidParameter(String),

    /// The input byte stream could not be decoded into pixels.
    #[error("decode error: {0}")]
    Decode(String),

    /// The output buffer could not be serialized by the codec.
    #[error("encoding error: {0}")]
    Encoding(String),

    /// A cooperative cancellation request was observed between row batches.
    #[error("operation cancelled")]
    Cancelled,

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl RefractError {
    /// Build a [`RefractError::InvalidDimensions`] value.
    pub fn dimensions(msg: impl Into<String>) -> Self {
        Self::InvalidDimensions(msg.into())
    }

    /// Build a [`RefractError::InvalidParameter`] value.
    pub fn parameter(msg: impl Into<String>) -> Self {
        Self::InvalidParameter(msg.into())
    }

    /// Build a [`RefractError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`RefractError::Encoding`] value.
    pub fn encoding(msg: impl Into<String>) -> Self {
        Self::Encoding(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

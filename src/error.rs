use thiserror::Error;

/// Top-level error type for catenary cable generation.
#[derive(Debug, Error)]
pub enum CatenaryError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Tessellation(#[from] TessellationError),
}

/// Errors related to curve generation and cable configuration.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("invalid configuration: {parameter} {reason}")]
    InvalidConfiguration {
        parameter: &'static str,
        reason: String,
    },

    #[error("cable has no end anchor")]
    MissingAnchor,

    #[error("cable width must be positive and finite, got {0}")]
    InvalidWidth(f64),
}

impl GeometryError {
    /// Shorthand for a [`GeometryError::InvalidConfiguration`] error.
    pub(crate) fn invalid(parameter: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidConfiguration {
            parameter,
            reason: reason.into(),
        }
    }
}

/// Errors related to tessellation.
#[derive(Debug, Error)]
pub enum TessellationError {
    #[error("invalid tessellation parameters: {0}")]
    InvalidParameters(String),
}

/// Convenience type alias for results using [`CatenaryError`].
pub type Result<T> = std::result::Result<T, CatenaryError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_configuration_message_names_parameter() {
        let err: CatenaryError = GeometryError::invalid("relax", "must be non-zero").into();
        assert_eq!(
            err.to_string(),
            "invalid configuration: relax must be non-zero"
        );
    }
}

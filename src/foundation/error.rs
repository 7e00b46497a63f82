/// Convenience result type used across fxgraph.
pub type FxResult<T> = Result<T, FxError>;

/// Top-level error taxonomy.
///
/// Every variant except [`FxError::Other`] is raised synchronously while a pipeline is being
/// validated or while an animation request is being recorded, before the backend is asked to
/// allocate anything for the failing step.
#[derive(thiserror::Error, Debug)]
pub enum FxError {
    /// An effect pipeline (or a blend branch) with no descriptors.
    #[error("empty pipeline: an effects pipeline can't be empty")]
    EmptyPipeline,

    /// The first descriptor of a pipeline is not a source.
    #[error("invalid source: '{tag}' can't start a pipeline")]
    InvalidSource {
        /// Tag of the offending descriptor.
        tag: String,
    },

    /// A descriptor after the first one is not a transform.
    #[error("invalid transform: '{tag}' at position {index} is not a pipeline transform")]
    InvalidTransform {
        /// Position of the offending descriptor in its list.
        index: usize,
        /// Tag of the offending descriptor.
        tag: String,
    },

    /// An acrylic descriptor whose background source is not recognised.
    #[error("invalid acrylic source: {value}")]
    InvalidAcrylicSource {
        /// The unrecognised source value.
        value: String,
    },

    /// A request the animation backend can't honour (offset, clip).
    #[error("unsupported operation: {0}")]
    UnsupportedOperation(String),

    /// A request that needs a capability the animation target lacks.
    #[error("invalid target type: {0}")]
    InvalidTargetType(String),

    /// Malformed option values or limits exceeded.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing data structures.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Opaque failure reported by a backend.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl FxError {
    /// Build a [`FxError::InvalidSource`] value.
    pub fn invalid_source(tag: impl Into<String>) -> Self {
        Self::InvalidSource { tag: tag.into() }
    }

    /// Build a [`FxError::InvalidTransform`] value.
    pub fn invalid_transform(index: usize, tag: impl Into<String>) -> Self {
        Self::InvalidTransform {
            index,
            tag: tag.into(),
        }
    }

    /// Build a [`FxError::InvalidAcrylicSource`] value.
    pub fn invalid_acrylic_source(value: impl Into<String>) -> Self {
        Self::InvalidAcrylicSource {
            value: value.into(),
        }
    }

    /// Build a [`FxError::UnsupportedOperation`] value.
    pub fn unsupported(msg: impl Into<String>) -> Self {
        Self::UnsupportedOperation(msg.into())
    }

    /// Build a [`FxError::InvalidTargetType`] value.
    pub fn invalid_target(msg: impl Into<String>) -> Self {
        Self::InvalidTargetType(msg.into())
    }

    /// Build a [`FxError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`FxError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;

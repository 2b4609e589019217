use thiserror::Error;

/// Errors raised when parsing model values at the application boundary.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ModelError {
    /// Role string is not one of the four known roles.
    #[error("invalid role: {value:?}")]
    InvalidRole {
        /// The rejected input.
        value: String,
    },

    /// Theme string is neither `dark` nor `light`.
    #[error("invalid theme: {value:?}")]
    InvalidTheme {
        /// The rejected input.
        value: String,
    },

    /// Path does not name any known route.
    #[error("unknown route: {path}")]
    UnknownRoute {
        /// The path that failed to parse.
        path: String,
    },
}

pub type Result<T> = std::result::Result<T, ModelError>;

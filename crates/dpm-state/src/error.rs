//! Error types for the state stores.
//!
//! None of these reach the rendering layer: storage faults are logged and
//! replaced with defaults inside the stores. Only [`SessionError`] is
//! returned to callers, and only from the login boundary.

use dpm_model::ModelError;
use thiserror::Error;

/// Key-value storage failures.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum StorageError {
    /// The backend could not be read.
    #[error("failed to read {key:?}: {reason}")]
    Read {
        /// Storage key (or the backing file for whole-store reads).
        key: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// The backend refused a write.
    #[error("failed to write {key:?}: {reason}")]
    Write {
        /// Storage key being written.
        key: String,
        /// Description of what went wrong.
        reason: String,
    },

    /// A stored value exists but cannot be decoded.
    #[error("corrupt value under {key:?}: {reason}")]
    Corrupt {
        /// Storage key holding the bad value.
        key: String,
        /// Decoder message.
        reason: String,
    },
}

impl StorageError {
    pub fn read(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Read {
            key: key.into(),
            reason: err.to_string(),
        }
    }

    pub fn write(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Write {
            key: key.into(),
            reason: err.to_string(),
        }
    }

    pub fn corrupt(key: impl Into<String>, err: impl std::fmt::Display) -> Self {
        Self::Corrupt {
            key: key.into(),
            reason: err.to_string(),
        }
    }
}

/// Errors returned by sign-in operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum SessionError {
    /// Login was attempted with a role outside the known set.
    #[error(transparent)]
    InvalidRole(ModelError),

    /// E-mail and password do not match a known account.
    #[error("invalid email or password")]
    InvalidCredentials,
}

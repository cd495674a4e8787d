//! Error types for the split engine.
//!
//! This module provides strongly-typed errors using the `thiserror` crate
//! for all error conditions that can occur while managing a split session.

use thiserror::Error;

use crate::models::MemberId;

/// The main error type for the split engine.
///
/// Allocation and time-range conversion never fail; errors only come from
/// loading configuration, addressing a member that does not exist, or
/// malformed input arriving at the boundary.
///
/// # Example
///
/// ```
/// use split_engine::error::EngineError;
///
/// let error = EngineError::ConfigNotFound {
///     path: "/missing/session.yaml".to_string(),
/// };
/// assert_eq!(error.to_string(), "Configuration file not found: /missing/session.yaml");
/// ```
#[derive(Debug, Error)]
pub enum EngineError {
    /// Configuration file was not found at the specified path.
    #[error("Configuration file not found: {path}")]
    ConfigNotFound {
        /// The path that was not found.
        path: String,
    },

    /// Configuration file could not be parsed.
    #[error("Failed to parse configuration file '{path}': {message}")]
    ConfigParseError {
        /// The path to the file that failed to parse.
        path: String,
        /// A description of the parse error.
        message: String,
    },

    /// No member with the given id is on the roster.
    #[error("Member not found: {id}")]
    MemberNotFound {
        /// The id that was looked up.
        id: MemberId,
    },

    /// A time-of-day value could not be parsed.
    #[error("Invalid time '{value}': {message}")]
    InvalidTime {
        /// The raw value that was rejected.
        value: String,
        /// A description of what was wrong with it.
        message: String,
    },

    /// A member patch was internally inconsistent.
    #[error("Invalid patch: {message}")]
    InvalidPatch {
        /// A description of the inconsistency.
        message: String,
    },
}

/// A type alias for Results that return EngineError.
pub type EngineResult<T> = Result<T, EngineError>;

//! Centralized error handling for groupcolor.
//!
//! Color lookups never fail; unknown groups fall back to the default color.
//! The errors here only come from the parsing edges (group keys, hex colors,
//! operands, configuration values) and from writing CLI output.

use thiserror::Error;

/// Unified error type for groupcolor.
#[allow(clippy::enum_variant_names)]
#[derive(Error, Debug)]
pub enum GroupColorError {
    /// Group key or color parsing errors
    #[error("Color error: {0}")]
    Color(#[from] ColorError),

    /// Arithmetic errors
    #[error("Arithmetic error: {0}")]
    Arith(#[from] ArithError),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// General I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Color specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorError {
    /// Input is not a decimal group key
    #[error("Invalid group key: {0:?}")]
    InvalidGroup(String),

    /// Input is not a `#rrggbb` color
    #[error("Invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Arithmetic specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ArithError {
    /// The sum does not fit in an `i64`
    #[error("{x} + {y} overflows")]
    Overflow { x: i64, y: i64 },

    /// Operand is not an integer
    #[error("Invalid operand: {0:?}")]
    InvalidOperand(String),
}

/// Configuration specific errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Unknown output format name
    #[error("Invalid output format: {0:?} (expected plain, hex or json)")]
    InvalidFormat(String),

    /// Unknown log level name
    #[error("Invalid log level: {0:?}")]
    InvalidLogLevel(String),
}

/// Type alias for Result using the unified error type
pub type Result<T> = std::result::Result<T, GroupColorError>;

//! Configuration error types

use thiserror::Error;

/// Errors that can occur during configuration loading
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration loading failed: {0}")]
    LoadError(#[from] config::ConfigError),

    #[error("Validation failed: {0}")]
    ValidationFailed(#[from] ValidationError),
}

/// Errors that can occur during configuration validation
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Default lens version must not be empty")]
    EmptyDefaultVersion,

    #[error("Export base filename must not be empty")]
    EmptyBaseFilename,

    #[error("Export base filename must not contain a path: {0}")]
    InvalidBaseFilename(String),

    #[error("Invalid log filter: {0}")]
    InvalidLogLevel(String),
}

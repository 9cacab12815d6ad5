//! Error types for the generators

use thiserror::Error;

use crate::assets::OutputError;
use crate::config::ConfigError;

/// Result type alias for generator operations
pub type Result<T> = std::result::Result<T, GeneratorError>;

/// Errors that abort a generation batch
#[derive(Error, Debug)]
pub enum GeneratorError {
    /// Manifest could not be loaded
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    
    /// An image could not be written
    #[error("Output error: {0}")]
    Output(#[from] OutputError),
}

//! Top-level error type

use thiserror::Error;

use crate::config::ConfigError;
use crate::scene::SceneError;

/// Errors surfaced by the office pipeline and the command line
#[derive(Debug, Error)]
pub enum OfficeError {
    #[error("config error: {0}")]
    Config(#[from] ConfigError),

    #[error("scene error: {0}")]
    Scene(#[from] SceneError),
}

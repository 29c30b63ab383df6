use std::result::Result as StdResult;

use thiserror::Error;

/// Errors raised by core configuration and parsing helpers.
#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = StdResult<T, CoreError>;

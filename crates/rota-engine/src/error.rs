//! Error types for rota-engine operations.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RotaError {
    #[error("Invalid date: {0}")]
    InvalidDate(String),
}

pub type Result<T> = std::result::Result<T, RotaError>;

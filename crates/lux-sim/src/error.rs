use lux_core::LuxError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] LuxError),
}

pub type SimResult<T> = Result<T, SimError>;

//! Error types for the life simulator core engine

use thiserror::Error;

/// Main error type for the life simulator core engine
#[derive(Error, Debug)]
pub enum LifeSimError {
    #[error("Invalid socioeconomic class: {0}")]
    InvalidSocioClass(String),

    #[error("Invalid nationality: {0}")]
    InvalidNationality(String),

    #[error("Invalid religion: {0}")]
    InvalidReligion(String),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),
}

#[cfg(feature = "python")]
impl From<LifeSimError> for pyo3::PyErr {
    fn from(err: LifeSimError) -> pyo3::PyErr {
        use pyo3::exceptions::{PyRuntimeError, PyValueError};

        match err {
            LifeSimError::InvalidSocioClass(_)
            | LifeSimError::InvalidNationality(_)
            | LifeSimError::InvalidReligion(_)
            | LifeSimError::InvalidConfig(_) => PyValueError::new_err(err.to_string()),
            LifeSimError::DeserializationError(_) | LifeSimError::SerializationError(_) => {
                PyRuntimeError::new_err(err.to_string())
            }
        }
    }
}

/// Result type alias for the life simulator core engine
pub type Result<T> = std::result::Result<T, LifeSimError>;

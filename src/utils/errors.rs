//! Sistema de manejo de errores
//!
//! Este módulo define los tipos de errores del coche y su discriminante
//! para que los consumidores puedan reaccionar según el tipo de fallo.

use serde::Serialize;
use thiserror::Error;
use validator::ValidationError;

/// Discriminante de los errores del coche
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ErrorKind {
    Validation,
    State,
    Capacity,
}

/// Errores principales del coche
#[derive(Error, Debug, Clone)]
pub enum CarError {
    #[error("Invalid {field}")]
    Validation {
        field: &'static str,
        detail: ValidationError,
    },

    #[error("{0}")]
    State(String),

    #[error("{0}")]
    Capacity(String),
}

impl CarError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            CarError::Validation { .. } => ErrorKind::Validation,
            CarError::State(_) => ErrorKind::State,
            CarError::Capacity(_) => ErrorKind::Capacity,
        }
    }

    /// Código estable para reportes
    pub fn code(&self) -> &'static str {
        match self {
            CarError::Validation { .. } => "VALIDATION_ERROR",
            CarError::State(_) => "STATE_ERROR",
            CarError::Capacity(_) => "CAPACITY_ERROR",
        }
    }

    /// Campo rechazado, solo para errores de validación
    pub fn field(&self) -> Option<&'static str> {
        match self {
            CarError::Validation { field, .. } => Some(*field),
            _ => None,
        }
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type CarResult<T> = Result<T, CarError>;

/// Función helper para crear errores de validación
pub fn validation_error(field: &'static str, detail: ValidationError) -> CarError {
    CarError::Validation { field, detail }
}

/// Función helper para crear errores de estado del motor
pub fn state_error(message: &str) -> CarError {
    CarError::State(message.to_string())
}

/// Función helper para crear errores de capacidad del depósito
pub fn capacity_error(message: &str) -> CarError {
    CarError::Capacity(message.to_string())
}

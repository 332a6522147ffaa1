//! Utilidades del sistema
//!
//! Este módulo contiene el manejo de errores y los predicados de validación.

pub mod errors;
pub mod validation;

//! Utilidades de validación
//!
//! Este módulo contiene los predicados que protegen los campos del coche.
//! Cada predicado devuelve un `ValidationError` con el código de la regla
//! y los parámetros que la violaron.

use chrono::{Datelike, Local};
use serde::Serialize;
use validator::ValidationError;

/// Año más antiguo aceptado para la fabricación
pub const MIN_YEAR_OF_MANUFACTURING: i32 = 1900;

/// Año calendario actual, evaluado en el momento de la llamada
pub fn current_year() -> i32 {
    Local::now().year()
}

/// Validar longitud mínima y máxima de `brand`/`model`.
///
/// Cuenta caracteres, no bytes: "é" cuenta como uno.
pub fn validate_length(value: &str, min: usize, max: usize) -> Result<(), ValidationError> {
    let len = value.chars().count();
    if len < min || len > max {
        let mut error = ValidationError::new("length");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &len);
        return Err(error);
    }
    Ok(())
}

/// Validar que un número sea finito (ni NaN ni infinito)
pub fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        let mut error = ValidationError::new("finite");
        error.add_param("actual".into(), &value.to_string());
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor esté en `[min, max]`.
///
/// Un NaN no es comparable y también se rechaza, por eso la condición
/// se escribe negada en lugar de `value < min || value > max`.
pub fn validate_range<T: PartialOrd + Serialize>(
    value: T,
    min: T,
    max: T,
) -> Result<(), ValidationError> {
    if !(value >= min && value <= max) {
        let mut error = ValidationError::new("range");
        error.add_param("min".into(), &min);
        error.add_param("max".into(), &max);
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor sea positivo
pub fn validate_positive<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value <= T::zero() {
        let mut error = ValidationError::new("positive");
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar que un valor no sea negativo (velocidad y horas de conducción)
pub fn validate_non_negative<T: PartialOrd + num_traits::Zero + Serialize>(
    value: T,
) -> Result<(), ValidationError> {
    if value < T::zero() {
        let mut error = ValidationError::new("non_negative");
        error.add_param("actual".into(), &value);
        return Err(error);
    }
    Ok(())
}

/// Validar un número finito dentro de un rango
pub fn validate_bounded(value: f64, min: f64, max: f64) -> Result<(), ValidationError> {
    validate_finite(value)?;
    validate_range(value, min, max)
}

/// Validar el año de fabricación contra el año actual
pub fn validate_year_of_manufacturing(value: i32) -> Result<(), ValidationError> {
    validate_range(value, MIN_YEAR_OF_MANUFACTURING, current_year())
}

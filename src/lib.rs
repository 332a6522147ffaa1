//! Simulador de un único coche: depósito de combustible, motor y
//! cuentakilómetros con validación de todos sus campos.

pub mod config;
pub mod dto;
pub mod models;
pub mod services;
pub mod utils;

pub use dto::car_dto::{CarDefinition, CarStatus};
pub use models::car::{Car, EngineState};
pub use utils::errors::{CarError, CarResult, ErrorKind};

//! Services module
//!
//! Este módulo contiene la lógica que usa el coche como consumidor:
//! la ejecución de guiones de maniobras y su reporte.

pub mod simulation_service;

pub use simulation_service::*;

//! Configuración del proyecto
//!
//! Este módulo contiene la configuración del simulador leída del entorno.

pub mod environment;

pub use environment::*;

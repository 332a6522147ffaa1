//! Modelos del sistema
//!
//! Este módulo contiene la entidad Car y su estado de motor.

pub mod car;

//! Configuración de variables de entorno
//!
//! Este módulo maneja la configuración del simulador. Se carga `.env`
//! si existe y después se leen las variables del proceso.

use std::env;
use std::path::PathBuf;
use std::str::FromStr;

use anyhow::{anyhow, Result};
use tracing::Level;

/// Configuración del simulador
#[derive(Debug, Clone)]
pub struct SimulatorConfig {
    pub log_level: Level,
    pub simulation_script: Option<PathBuf>,
}

impl Default for SimulatorConfig {
    fn default() -> Self {
        Self {
            log_level: Level::INFO,
            simulation_script: None,
        }
    }
}

impl SimulatorConfig {
    /// Cargar la configuración desde el entorno
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_vars(env::var("LOG_LEVEL").ok(), env::var("SIMULATION_SCRIPT").ok())
    }

    fn from_vars(log_level: Option<String>, simulation_script: Option<String>) -> Result<Self> {
        let defaults = Self::default();

        let log_level = match log_level {
            Some(raw) => Level::from_str(raw.trim())
                .map_err(|_| anyhow!("LOG_LEVEL must be one of trace, debug, info, warn, error"))?,
            None => defaults.log_level,
        };

        let simulation_script = simulation_script
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .map(PathBuf::from);

        Ok(Self {
            log_level,
            simulation_script,
        })
    }
}

use anyhow::{Context, Result};
use tracing::{error, info};

use car_simulator::config::environment::SimulatorConfig;
use car_simulator::services::simulation_service::{SimulationScript, SimulationService};

fn main() -> Result<()> {
    let config = SimulatorConfig::from_env()?;

    // Configurar logging
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();

    info!("🚗 Car Simulator");
    info!("================");

    let script = match &config.simulation_script {
        Some(path) => {
            info!("📄 Cargando guion desde {}", path.display());
            let raw = std::fs::read_to_string(path)
                .with_context(|| format!("No se pudo leer {}", path.display()))?;
            SimulationScript::from_json(&raw)?
        }
        None => {
            info!("📄 Usando guion de demostración");
            SimulationScript::demo()
        }
    };

    let report = match SimulationService::run(script) {
        Ok(report) => report,
        Err(e) => {
            error!("❌ Error en la simulación: {:#}", e);
            return Err(e);
        }
    };

    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

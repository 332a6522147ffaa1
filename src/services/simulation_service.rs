//! Servicio de simulación
//!
//! Aplica una secuencia de maniobras sobre un coche y registra el
//! resultado de cada una. Una maniobra rechazada no detiene la simulación:
//! el coche queda intacto y se pasa a la siguiente.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::dto::car_dto::{CarDefinition, CarStatus};
use crate::models::car::Car;
use crate::utils::errors::{CarError, ErrorKind};

/// Maniobra que se puede aplicar a un coche
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum Maneuver {
    Start,
    ShutDown,
    Refuel { amount: f64 },
    Drive { speed: f64, hours: f64 },
}

impl Maneuver {
    fn apply(&self, car: &mut Car) -> Result<(), CarError> {
        match self {
            Maneuver::Start => car.start(),
            Maneuver::ShutDown => car.shut_down_engine(),
            Maneuver::Refuel { amount } => car.fill_up_gas_tank(*amount),
            Maneuver::Drive { speed, hours } => car.drive(*speed, *hours),
        }
    }
}

/// Guion de simulación: un coche y sus maniobras
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationScript {
    pub car: CarDefinition,
    #[serde(default)]
    pub maneuvers: Vec<Maneuver>,
}

impl SimulationScript {
    pub fn from_json(raw: &str) -> Result<Self> {
        serde_json::from_str(raw).context("Guion de simulación inválido")
    }

    /// Guion de demostración: Toyota Corolla con un viaje completo
    /// y un segundo viaje sin combustible suficiente.
    pub fn demo() -> Self {
        Self {
            car: CarDefinition {
                brand: "Toyota".to_string(),
                model: "Corolla".to_string(),
                year_of_manufacturing: 2020,
                max_speed: 180.0,
                max_fuel_volume: 10.0,
                fuel_consumption: 6.0,
            },
            maneuvers: vec![
                Maneuver::Refuel { amount: 8.0 },
                Maneuver::Start,
                Maneuver::Drive { speed: 60.0, hours: 2.0 },
                Maneuver::Drive { speed: 60.0, hours: 1.0 },
                Maneuver::Drive { speed: 200.0, hours: 1.0 },
                Maneuver::ShutDown,
            ],
        }
    }
}

/// Resultado de una maniobra
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StepOutcome {
    pub maneuver: Maneuver,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_kind: Option<ErrorKind>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    pub fuel_after: f64,
    pub mileage_after: f64,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SimulationReport {
    pub steps: Vec<StepOutcome>,
    pub final_status: CarStatus,
}

impl SimulationReport {
    pub fn succeeded(&self) -> usize {
        self.steps.iter().filter(|s| s.success).count()
    }

    pub fn failed(&self) -> usize {
        self.steps.len() - self.succeeded()
    }
}

pub struct SimulationService;

impl SimulationService {
    /// Ejecutar un guion completo. Solo falla si el coche no se puede construir.
    pub fn run(script: SimulationScript) -> Result<SimulationReport> {
        let mut car = Car::try_from(script.car).context("No se pudo construir el coche")?;
        info!("🚗 Simulación iniciada para {}", car);

        let steps = script
            .maneuvers
            .into_iter()
            .map(|maneuver| Self::run_step(&mut car, maneuver))
            .collect();

        let report = SimulationReport {
            steps,
            final_status: car.status(),
        };

        info!(
            "🏁 Simulación terminada: {} correctas, {} rechazadas, {:.2} km, {:.2} L restantes",
            report.succeeded(),
            report.failed(),
            report.final_status.mileage,
            report.final_status.current_fuel_volume
        );

        Ok(report)
    }

    fn run_step(car: &mut Car, maneuver: Maneuver) -> StepOutcome {
        let result = maneuver.apply(car);

        match &result {
            Ok(()) => info!("✅ {:?} aplicada", maneuver),
            Err(e) => warn!("⚠️ {:?} rechazada [{}]: {}", maneuver, e.code(), e),
        }

        let error = result.err();
        StepOutcome {
            success: error.is_none(),
            error_kind: error.as_ref().map(CarError::kind),
            error_code: error.as_ref().map(|e| e.code().to_string()),
            message: error.as_ref().map(|e| e.to_string()),
            fuel_after: car.current_fuel_volume(),
            mileage_after: car.mileage(),
            maneuver,
        }
    }
}

use serde::{Deserialize, Serialize};

use crate::models::car::{Car, EngineState};
use crate::utils::errors::CarError;

// Definición de un coche (los seis campos del constructor)
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CarDefinition {
    pub brand: String,
    pub model: String,
    pub year_of_manufacturing: i32,
    pub max_speed: f64,
    pub max_fuel_volume: f64,
    pub fuel_consumption: f64,
}

impl TryFrom<CarDefinition> for Car {
    type Error = CarError;

    fn try_from(definition: CarDefinition) -> Result<Self, Self::Error> {
        Car::new(
            definition.brand,
            definition.model,
            definition.year_of_manufacturing,
            definition.max_speed,
            definition.max_fuel_volume,
            definition.fuel_consumption,
        )
    }
}

// Foto del estado de un coche
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CarStatus {
    pub brand: String,
    pub model: String,
    pub year_of_manufacturing: i32,
    pub max_speed: f64,
    pub max_fuel_volume: f64,
    pub fuel_consumption: f64,
    pub current_fuel_volume: f64,
    pub engine: EngineState,
    pub is_started: bool,
    pub mileage: f64,
}

//! Modelo de Car
//!
//! Este módulo contiene el struct Car: un único vehículo con depósito de
//! combustible, motor encendido/apagado y un cuentakilómetros.
//! Todos los campos son privados; cada escritura pasa por su validación
//! y una operación rechazada no modifica el estado.

use serde::{Deserialize, Serialize};

use crate::dto::car_dto::CarStatus;
use crate::utils::errors::{capacity_error, state_error, validation_error, CarResult};
use crate::utils::validation::{
    validate_bounded, validate_finite, validate_length, validate_non_negative, validate_positive,
    validate_year_of_manufacturing,
};

pub const MIN_NAME_LENGTH: usize = 1;
pub const MAX_NAME_LENGTH: usize = 50;
pub const MIN_MAX_SPEED: f64 = 100.0;
pub const MAX_MAX_SPEED: f64 = 300.0;
pub const MIN_MAX_FUEL_VOLUME: f64 = 5.0;
pub const MAX_MAX_FUEL_VOLUME: f64 = 20.0;

/// Estado del motor
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EngineState {
    #[default]
    Off,
    On,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Car {
    brand: String,
    model: String,
    year_of_manufacturing: i32,
    max_speed: f64,
    max_fuel_volume: f64,
    fuel_consumption: f64,
    current_fuel_volume: f64,
    engine: EngineState,
    mileage: f64,
}

impl Car {
    /// Crear un coche validando los seis campos obligatorios.
    ///
    /// El coche arranca con el depósito vacío, el motor apagado y
    /// el cuentakilómetros a cero.
    pub fn new(
        brand: impl Into<String>,
        model: impl Into<String>,
        year_of_manufacturing: i32,
        max_speed: f64,
        max_fuel_volume: f64,
        fuel_consumption: f64,
    ) -> CarResult<Self> {
        let brand = brand.into();
        let model = model.into();

        Self::check_name("brand", &brand)?;
        Self::check_name("model", &model)?;
        validate_year_of_manufacturing(year_of_manufacturing)
            .map_err(|e| validation_error("yearOfManufacturing", e))?;
        validate_bounded(max_speed, MIN_MAX_SPEED, MAX_MAX_SPEED)
            .map_err(|e| validation_error("maxSpeed", e))?;
        validate_bounded(max_fuel_volume, MIN_MAX_FUEL_VOLUME, MAX_MAX_FUEL_VOLUME)
            .map_err(|e| validation_error("maxFuelVolume", e))?;
        validate_finite(fuel_consumption).map_err(|e| validation_error("fuelConsumption", e))?;

        Ok(Self {
            brand,
            model,
            year_of_manufacturing,
            max_speed,
            max_fuel_volume,
            fuel_consumption,
            current_fuel_volume: 0.0,
            engine: EngineState::Off,
            mileage: 0.0,
        })
    }

    fn check_name(field: &'static str, value: &str) -> CarResult<()> {
        validate_length(value, MIN_NAME_LENGTH, MAX_NAME_LENGTH)
            .map_err(|e| validation_error(field, e))
    }

    pub fn brand(&self) -> &str {
        &self.brand
    }

    pub fn set_brand(&mut self, value: impl Into<String>) -> CarResult<()> {
        let value = value.into();
        Self::check_name("brand", &value)?;
        self.brand = value;
        Ok(())
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn set_model(&mut self, value: impl Into<String>) -> CarResult<()> {
        let value = value.into();
        Self::check_name("model", &value)?;
        self.model = value;
        Ok(())
    }

    pub fn year_of_manufacturing(&self) -> i32 {
        self.year_of_manufacturing
    }

    /// El límite superior es el año calendario en curso al validar.
    pub fn set_year_of_manufacturing(&mut self, value: i32) -> CarResult<()> {
        validate_year_of_manufacturing(value)
            .map_err(|e| validation_error("yearOfManufacturing", e))?;
        self.year_of_manufacturing = value;
        Ok(())
    }

    pub fn max_speed(&self) -> f64 {
        self.max_speed
    }

    pub fn set_max_speed(&mut self, value: f64) -> CarResult<()> {
        validate_bounded(value, MIN_MAX_SPEED, MAX_MAX_SPEED)
            .map_err(|e| validation_error("maxSpeed", e))?;
        self.max_speed = value;
        Ok(())
    }

    pub fn max_fuel_volume(&self) -> f64 {
        self.max_fuel_volume
    }

    /// Rechaza también una capacidad menor que el combustible ya cargado.
    pub fn set_max_fuel_volume(&mut self, value: f64) -> CarResult<()> {
        validate_bounded(value, MIN_MAX_FUEL_VOLUME, MAX_MAX_FUEL_VOLUME)
            .map_err(|e| validation_error("maxFuelVolume", e))?;
        if value < self.current_fuel_volume {
            return Err(capacity_error("Fuel tank holds more than the new capacity"));
        }
        self.max_fuel_volume = value;
        Ok(())
    }

    pub fn fuel_consumption(&self) -> f64 {
        self.fuel_consumption
    }

    pub fn set_fuel_consumption(&mut self, value: f64) -> CarResult<()> {
        validate_finite(value).map_err(|e| validation_error("fuelConsumption", e))?;
        self.fuel_consumption = value;
        Ok(())
    }

    pub fn current_fuel_volume(&self) -> f64 {
        self.current_fuel_volume
    }

    pub fn engine_state(&self) -> EngineState {
        self.engine
    }

    pub fn is_started(&self) -> bool {
        self.engine == EngineState::On
    }

    pub fn mileage(&self) -> f64 {
        self.mileage
    }

    pub fn start(&mut self) -> CarResult<()> {
        if self.is_started() {
            return Err(state_error("The car is already started"));
        }
        self.engine = EngineState::On;
        Ok(())
    }

    pub fn shut_down_engine(&mut self) -> CarResult<()> {
        if !self.is_started() {
            return Err(state_error("The car hasn't started yet"));
        }
        self.engine = EngineState::Off;
        Ok(())
    }

    /// Cargar combustible sin superar la capacidad del depósito
    pub fn fill_up_gas_tank(&mut self, amount: f64) -> CarResult<()> {
        validate_finite(amount).map_err(|e| validation_error("fuelAmount", e))?;
        validate_positive(amount).map_err(|e| validation_error("fuelAmount", e))?;

        if self.current_fuel_volume + amount > self.max_fuel_volume {
            return Err(capacity_error("Fuel tank is full"));
        }
        self.current_fuel_volume += amount;
        Ok(())
    }

    /// Conducir a `speed` km/h durante `hours` horas.
    ///
    /// Consume `speed * hours * fuel_consumption / 100` litros y suma
    /// `speed * hours` km. Si alguna comprobación falla no cambia nada.
    /// Velocidad y horas negativas se rechazan: el cuentakilómetros no retrocede.
    pub fn drive(&mut self, speed: f64, hours: f64) -> CarResult<()> {
        validate_finite(speed)
            .and_then(|_| validate_non_negative(speed))
            .map_err(|e| validation_error("speed", e))?;
        validate_finite(hours)
            .and_then(|_| validate_non_negative(hours))
            .map_err(|e| validation_error("hours", e))?;

        if speed > self.max_speed {
            return Err(state_error("The car cannot go that fast"));
        }
        if !self.is_started() {
            return Err(state_error("The car must be started to drive"));
        }

        let distance = speed * hours;
        let required_fuel = distance * self.fuel_consumption / 100.0;
        // Con consumo negativo el viaje llenaría el depósito
        if required_fuel < 0.0 {
            return Err(capacity_error("Negative fuel consumption cannot refill the tank"));
        }
        if required_fuel > self.current_fuel_volume {
            return Err(capacity_error("Insufficient fuel"));
        }

        self.current_fuel_volume -= required_fuel;
        self.mileage += distance;
        Ok(())
    }

    /// Foto del estado actual
    pub fn status(&self) -> CarStatus {
        CarStatus {
            brand: self.brand.clone(),
            model: self.model.clone(),
            year_of_manufacturing: self.year_of_manufacturing,
            max_speed: self.max_speed,
            max_fuel_volume: self.max_fuel_volume,
            fuel_consumption: self.fuel_consumption,
            current_fuel_volume: self.current_fuel_volume,
            engine: self.engine,
            is_started: self.is_started(),
            mileage: self.mileage,
        }
    }
}

impl std::fmt::Display for Car {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({})", self.brand, self.model, self.year_of_manufacturing)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::errors::ErrorKind;

    fn corolla() -> Car {
        Car::new("Toyota", "Corolla", 2020, 180.0, 10.0, 6.0).unwrap()
    }

    #[test]
    fn test_new_car_is_empty_and_off() {
        let car = corolla();
        assert_eq!(car.current_fuel_volume(), 0.0);
        assert_eq!(car.mileage(), 0.0);
        assert!(!car.is_started());
        assert_eq!(car.engine_state(), EngineState::Off);
        assert_eq!(car.to_string(), "Toyota Corolla (2020)");
    }

    #[test]
    fn test_new_rejects_invalid_fields() {
        let err = Car::new("", "Corolla", 2020, 180.0, 10.0, 6.0).unwrap_err();
        assert_eq!(err.field(), Some("brand"));

        let err = Car::new("Toyota", "Corolla", 1899, 180.0, 10.0, 6.0).unwrap_err();
        assert_eq!(err.field(), Some("yearOfManufacturing"));

        let err = Car::new("Toyota", "Corolla", 2020, 301.0, 10.0, 6.0).unwrap_err();
        assert_eq!(err.field(), Some("maxSpeed"));

        let err = Car::new("Toyota", "Corolla", 2020, 180.0, 4.0, 6.0).unwrap_err();
        assert_eq!(err.field(), Some("maxFuelVolume"));

        let err = Car::new("Toyota", "Corolla", 2020, 180.0, 10.0, f64::NAN).unwrap_err();
        assert_eq!(err.field(), Some("fuelConsumption"));
        assert_eq!(err.kind(), ErrorKind::Validation);
    }

    #[test]
    fn test_setters_keep_previous_value_on_error() {
        let mut car = corolla();

        assert!(car.set_brand("A".repeat(51)).is_err());
        assert_eq!(car.brand(), "Toyota");
        assert!(car.set_model("").is_err());
        assert_eq!(car.model(), "Corolla");
        assert!(car.set_max_speed(99.0).is_err());
        assert_eq!(car.max_speed(), 180.0);
        assert!(car.set_max_fuel_volume(f64::INFINITY).is_err());
        assert_eq!(car.max_fuel_volume(), 10.0);
        assert!(car.set_fuel_consumption(f64::NAN).is_err());
        assert_eq!(car.fuel_consumption(), 6.0);

        car.set_brand("Honda").unwrap();
        car.set_model("Civic").unwrap();
        car.set_max_speed(300.0).unwrap();
        car.set_max_fuel_volume(5.0).unwrap();
        car.set_fuel_consumption(-2.5).unwrap();
        assert_eq!(car.brand(), "Honda");
        assert_eq!(car.model(), "Civic");
        assert_eq!(car.max_speed(), 300.0);
        assert_eq!(car.max_fuel_volume(), 5.0);
        assert_eq!(car.fuel_consumption(), -2.5);
    }

    #[test]
    fn test_max_fuel_volume_cannot_drop_below_current_fuel() {
        let mut car = corolla();
        car.fill_up_gas_tank(8.0).unwrap();

        let err = car.set_max_fuel_volume(6.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(car.max_fuel_volume(), 10.0);
    }

    #[test]
    fn test_engine_transitions() {
        let mut car = corolla();
        assert_eq!(car.shut_down_engine().unwrap_err().kind(), ErrorKind::State);

        car.start().unwrap();
        assert!(car.is_started());
        let err = car.start().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::State);
        assert_eq!(err.to_string(), "The car is already started");

        car.shut_down_engine().unwrap();
        assert!(!car.is_started());
    }

    #[test]
    fn test_fill_up_gas_tank() {
        let mut car = corolla();

        assert_eq!(car.fill_up_gas_tank(f64::NAN).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(car.fill_up_gas_tank(0.0).unwrap_err().kind(), ErrorKind::Validation);
        assert_eq!(car.fill_up_gas_tank(-1.0).unwrap_err().kind(), ErrorKind::Validation);

        car.fill_up_gas_tank(10.0).unwrap();
        assert_eq!(car.current_fuel_volume(), 10.0);

        let err = car.fill_up_gas_tank(0.1).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(car.current_fuel_volume(), 10.0);
    }

    #[test]
    fn test_drive_checks_speed_before_engine() {
        let mut car = corolla();
        let err = car.drive(200.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "The car cannot go that fast");

        let err = car.drive(100.0, 1.0).unwrap_err();
        assert_eq!(err.to_string(), "The car must be started to drive");
    }

    #[test]
    fn test_drive_rejects_non_finite_arguments() {
        let mut car = corolla();
        car.start().unwrap();

        assert_eq!(car.drive(f64::NAN, 1.0).unwrap_err().field(), Some("speed"));
        assert_eq!(car.drive(60.0, f64::INFINITY).unwrap_err().field(), Some("hours"));
    }

    #[test]
    fn test_drive_rejects_negative_speed_or_hours() {
        let mut car = corolla();
        car.fill_up_gas_tank(8.0).unwrap();
        car.start().unwrap();
        car.drive(60.0, 1.0).unwrap();

        let err = car.drive(-100.0, 1.0).unwrap_err();
        assert_eq!(err.field(), Some("speed"));
        let err = car.drive(60.0, -1.0).unwrap_err();
        assert_eq!(err.field(), Some("hours"));

        assert!((car.current_fuel_volume() - 4.4).abs() < 1e-9);
        assert_eq!(car.mileage(), 60.0);
    }

    #[test]
    fn test_drive_rejects_negative_consumption() {
        let mut car = Car::new("Toyota", "Corolla", 2020, 180.0, 10.0, -6.0).unwrap();
        car.fill_up_gas_tank(8.0).unwrap();
        car.start().unwrap();

        let err = car.drive(60.0, 2.0).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Capacity);
        assert_eq!(car.current_fuel_volume(), 8.0);
        assert_eq!(car.mileage(), 0.0);
    }

    #[test]
    fn test_drive_consumes_fuel_and_adds_mileage() {
        let mut car = corolla();
        car.fill_up_gas_tank(8.0).unwrap();
        car.start().unwrap();
        car.drive(60.0, 2.0).unwrap();

        assert!((car.current_fuel_volume() - 0.8).abs() < 1e-9);
        assert_eq!(car.mileage(), 120.0);
        assert!(car.is_started());
    }

    #[test]
    fn test_status_mirrors_getters() {
        let mut car = corolla();
        car.fill_up_gas_tank(3.0).unwrap();
        car.start().unwrap();

        let status = car.status();
        assert_eq!(status.brand, "Toyota");
        assert_eq!(status.current_fuel_volume, 3.0);
        assert_eq!(status.engine, EngineState::On);
        assert!(status.is_started);
    }
}

//! Modelos de dominio
//!
//! Value objects de cada campo del vehículo y la entidad `Vehicle`.

pub mod license_plate;
pub mod make;
pub mod model_year;
pub mod renavam;
pub mod vehicle;
pub mod vehicle_model;
pub mod vin;

pub use license_plate::LicensePlate;
pub use make::Make;
pub use model_year::ModelYear;
pub use renavam::Renavam;
pub use vehicle::{CreateVehicleParams, Vehicle};
pub use vehicle_model::VehicleModel;
pub use vin::Vin;

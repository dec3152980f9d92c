use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::Vehicle;
use crate::services::UpdateVehicleParams;

// Request para crear un vehículo
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleRequest {
    #[validate(length(min = 7, max = 10))]
    pub license_plate: String,

    #[validate(length(equal = 17))]
    pub vin: String,

    #[validate(length(min = 9, max = 11))]
    pub renavam: String,

    #[validate(length(min = 1, max = 100))]
    pub model: String,

    #[validate(length(min = 1, max = 100))]
    pub make: String,

    #[validate(range(min = 1900.0, max = 2100.0))]
    pub model_year: f64,
}

// Request para actualizar un vehículo
#[derive(Debug, Clone, Default, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicleRequest {
    #[validate(length(min = 7, max = 10))]
    pub license_plate: Option<String>,

    #[validate(length(equal = 17))]
    pub vin: Option<String>,

    #[validate(length(min = 9, max = 11))]
    pub renavam: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub model: Option<String>,

    #[validate(length(min = 1, max = 100))]
    pub make: Option<String>,

    #[validate(range(min = 1900.0, max = 2100.0))]
    pub model_year: Option<f64>,
}

impl From<UpdateVehicleRequest> for UpdateVehicleParams {
    fn from(request: UpdateVehicleRequest) -> Self {
        Self {
            license_plate: request.license_plate,
            vin: request.vin,
            renavam: request.renavam,
            model: request.model,
            make: request.make,
            model_year: request.model_year,
        }
    }
}

// Response de vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleResponse {
    pub id: String,
    pub license_plate: String,
    pub vin: String,
    pub renavam: String,
    pub model: String,
    pub make: String,
    pub model_year: i32,
}

impl From<&Vehicle> for VehicleResponse {
    fn from(vehicle: &Vehicle) -> Self {
        Self {
            id: vehicle.id().to_string(),
            license_plate: vehicle.license_plate().value().to_string(),
            vin: vehicle.vin().value().to_string(),
            renavam: vehicle.renavam().value().to_string(),
            model: vehicle.model().value().to_string(),
            make: vehicle.make().value().to_string(),
            model_year: vehicle.model_year().value(),
        }
    }
}

use std::sync::Arc;

use uuid::Uuid;
use validator::Validate;

use crate::dto::vehicle_dto::{CreateVehicleRequest, UpdateVehicleRequest, VehicleResponse};
use crate::models::CreateVehicleParams;
use crate::repositories::VehicleRepository;
use crate::services::{
    CreateVehicleUseCase, DeleteVehicleUseCase, GetVehicleUseCase, ListVehiclesUseCase,
    UpdateVehicleUseCase,
};
use crate::utils::errors::AppError;

/// Traduce DTOs HTTP a parámetros de los casos de uso y viceversa
pub struct VehicleController {
    create_vehicle: CreateVehicleUseCase,
    get_vehicle: GetVehicleUseCase,
    list_vehicles: ListVehiclesUseCase,
    update_vehicle: UpdateVehicleUseCase,
    delete_vehicle: DeleteVehicleUseCase,
}

impl VehicleController {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self {
            create_vehicle: CreateVehicleUseCase::new(repository.clone()),
            get_vehicle: GetVehicleUseCase::new(repository.clone()),
            list_vehicles: ListVehiclesUseCase::new(repository.clone()),
            update_vehicle: UpdateVehicleUseCase::new(repository.clone()),
            delete_vehicle: DeleteVehicleUseCase::new(repository),
        }
    }

    pub async fn create(&self, request: CreateVehicleRequest) -> Result<VehicleResponse, AppError> {
        request.validate()?;

        // El id lo genera la capa HTTP antes de crear
        let params = CreateVehicleParams {
            id: Uuid::new_v4().to_string(),
            license_plate: request.license_plate,
            vin: request.vin,
            renavam: request.renavam,
            model: request.model,
            make: request.make,
            model_year: request.model_year,
        };

        let vehicle = self.create_vehicle.execute(params).await?;
        Ok(VehicleResponse::from(&vehicle))
    }

    pub async fn get_by_id(&self, id: &str) -> Result<VehicleResponse, AppError> {
        let vehicle = self.get_vehicle.execute(id).await?;
        Ok(VehicleResponse::from(&vehicle))
    }

    pub async fn list(&self) -> Result<Vec<VehicleResponse>, AppError> {
        let vehicles = self.list_vehicles.execute().await?;
        Ok(vehicles.iter().map(VehicleResponse::from).collect())
    }

    pub async fn update(
        &self,
        id: &str,
        request: UpdateVehicleRequest,
    ) -> Result<VehicleResponse, AppError> {
        request.validate()?;
        let vehicle = self.update_vehicle.execute(id, request.into()).await?;
        Ok(VehicleResponse::from(&vehicle))
    }

    pub async fn delete(&self, id: &str) -> Result<(), AppError> {
        self.delete_vehicle.execute(id).await
    }
}

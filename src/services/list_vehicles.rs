use std::sync::Arc;

use tracing::debug;

use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::AppResult;

/// Listado completo. El contrato devuelve siempre un `Vec`, posiblemente vacío.
pub struct ListVehiclesUseCase {
    repository: Arc<dyn VehicleRepository>,
}

impl ListVehiclesUseCase {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self) -> AppResult<Vec<Vehicle>> {
        let vehicles = self.repository.find_all().await?;
        debug!("📋 {} vehículos listados", vehicles.len());
        Ok(vehicles)
    }
}

use std::sync::Arc;

use tracing::debug;

use crate::models::Vehicle;
use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct GetVehicleUseCase {
    repository: Arc<dyn VehicleRepository>,
}

impl GetVehicleUseCase {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> AppResult<Vehicle> {
        if id.is_empty() {
            return Err(AppError::MissingId);
        }

        debug!("🔍 Buscando vehículo {}", id);
        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(id))
    }
}

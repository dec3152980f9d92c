use std::sync::Arc;

use tracing::info;

use crate::repositories::VehicleRepository;
use crate::utils::errors::{not_found_error, AppError, AppResult};

pub struct DeleteVehicleUseCase {
    repository: Arc<dyn VehicleRepository>,
}

impl DeleteVehicleUseCase {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str) -> AppResult<()> {
        if id.is_empty() {
            return Err(AppError::MissingId);
        }

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(id))?;

        self.repository.delete(existing.id()).await?;
        info!("🗑️ Vehículo {} eliminado", existing.id());
        Ok(())
    }
}

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{CreateVehicleParams, Vehicle};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{duplicate_error, AppResult, UniqueField};
use crate::utils::validation::normalize_upper;

/// Alta de un vehículo: unicidad de placa, luego de VIN, luego construcción
pub struct CreateVehicleUseCase {
    repository: Arc<dyn VehicleRepository>,
}

impl CreateVehicleUseCase {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, params: CreateVehicleParams) -> AppResult<Vehicle> {
        self.validate_license_plate_uniqueness(&params.license_plate).await?;
        self.validate_vin_uniqueness(&params.vin).await?;

        let vehicle = Vehicle::create(params)?;
        let saved = self.repository.save(vehicle).await?;

        info!("✅ Vehículo {} creado ({})", saved.id(), saved.license_plate().value());
        Ok(saved)
    }

    async fn validate_license_plate_uniqueness(&self, license_plate: &str) -> AppResult<()> {
        let normalized = normalize_upper(license_plate);
        debug!("🔍 Verificando unicidad de placa {}", normalized);

        if self.repository.exists_by_license_plate(&normalized).await? {
            warn!("⚠️ Placa duplicada: {}", normalized);
            return Err(duplicate_error(UniqueField::LicensePlate, &normalized));
        }
        Ok(())
    }

    async fn validate_vin_uniqueness(&self, vin: &str) -> AppResult<()> {
        let normalized = normalize_upper(vin);
        debug!("🔍 Verificando unicidad de VIN {}", normalized);

        if self.repository.exists_by_vin(&normalized).await? {
            warn!("⚠️ VIN duplicado: {}", normalized);
            return Err(duplicate_error(UniqueField::Vin, &normalized));
        }
        Ok(())
    }
}

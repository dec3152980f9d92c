use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::models::{CreateVehicleParams, Vehicle};
use crate::repositories::VehicleRepository;
use crate::utils::errors::{duplicate_error, not_found_error, AppError, AppResult, UniqueField};
use crate::utils::validation::normalize_upper;

/// Campos opcionales de una actualización; los omitidos conservan su valor
#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateVehicleParams {
    pub license_plate: Option<String>,
    pub vin: Option<String>,
    pub renavam: Option<String>,
    pub model: Option<String>,
    pub make: Option<String>,
    pub model_year: Option<f64>,
}

pub struct UpdateVehicleUseCase {
    repository: Arc<dyn VehicleRepository>,
}

impl UpdateVehicleUseCase {
    pub fn new(repository: Arc<dyn VehicleRepository>) -> Self {
        Self { repository }
    }

    pub async fn execute(&self, id: &str, params: UpdateVehicleParams) -> AppResult<Vehicle> {
        if id.is_empty() {
            return Err(AppError::MissingId);
        }

        let existing = self
            .repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found_error(id))?;

        self.validate_unique_fields(&params, &existing).await?;

        let updated = Vehicle::create(merge_params(params, &existing))?;
        let saved = self.repository.save(updated).await?;

        info!("✅ Vehículo {} actualizado", saved.id());
        Ok(saved)
    }

    async fn validate_unique_fields(
        &self,
        params: &UpdateVehicleParams,
        existing: &Vehicle,
    ) -> AppResult<()> {
        if let Some(plate) =
            changed_value(params.license_plate.as_deref(), existing.license_plate().value())
        {
            debug!("🔍 Placa modificada, verificando unicidad de {}", plate);
            if self.repository.exists_by_license_plate(&plate).await? {
                warn!("⚠️ Placa duplicada: {}", plate);
                return Err(duplicate_error(UniqueField::LicensePlate, &plate));
            }
        }

        if let Some(vin) = changed_value(params.vin.as_deref(), existing.vin().value()) {
            debug!("🔍 VIN modificado, verificando unicidad de {}", vin);
            if self.repository.exists_by_vin(&vin).await? {
                warn!("⚠️ VIN duplicado: {}", vin);
                return Err(duplicate_error(UniqueField::Vin, &vin));
            }
        }

        Ok(())
    }
}

/// Valor normalizado sólo si viene informado y difiere del actual
fn changed_value(candidate: Option<&str>, current: &str) -> Option<String> {
    candidate
        .filter(|raw| !raw.is_empty())
        .map(normalize_upper)
        .filter(|normalized| normalized != current)
}

fn merge_params(params: UpdateVehicleParams, existing: &Vehicle) -> CreateVehicleParams {
    let current = existing.to_params();
    CreateVehicleParams {
        id: current.id,
        license_plate: params.license_plate.unwrap_or(current.license_plate),
        vin: params.vin.unwrap_or(current.vin),
        renavam: params.renavam.unwrap_or(current.renavam),
        model: params.model.unwrap_or(current.model),
        make: params.make.unwrap_or(current.make),
        model_year: params.model_year.unwrap_or(current.model_year),
    }
}

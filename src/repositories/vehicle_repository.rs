//! Contrato de persistencia de vehículos
//!
//! Los casos de uso dependen sólo de este trait; el almacenamiento concreto
//! (archivo JSON o memoria) se elige al arrancar el proceso.

use async_trait::async_trait;

use crate::models::Vehicle;
use crate::utils::errors::AppResult;

#[async_trait]
pub trait VehicleRepository: Send + Sync {
    /// Inserta o reemplaza por id y devuelve la representación persistida
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle>;

    /// `None` cuando no existe, nunca un error
    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>>;

    async fn find_all(&self) -> AppResult<Vec<Vehicle>>;

    async fn exists_by_license_plate(&self, license_plate: &str) -> AppResult<bool>;

    async fn exists_by_vin(&self, vin: &str) -> AppResult<bool>;

    /// Borrar un id inexistente no es un error
    async fn delete(&self, id: &str) -> AppResult<()>;
}

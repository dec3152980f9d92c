use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use super::VehicleRepository;
use crate::models::Vehicle;
use crate::utils::errors::AppResult;

/// Repositorio en memoria, conserva el orden de inserción
#[derive(Default)]
pub struct InMemoryVehicleRepository {
    vehicles: RwLock<Vec<Vehicle>>,
}

impl InMemoryVehicleRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            vehicles: RwLock::new(vehicles),
        }
    }
}

#[async_trait]
impl VehicleRepository for InMemoryVehicleRepository {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let mut vehicles = self.vehicles.write().await;
        match vehicles.iter().position(|v| v.id() == vehicle.id()) {
            Some(index) => vehicles[index] = vehicle.clone(),
            None => vehicles.push(vehicle.clone()),
        }
        debug!("💾 Vehículo {} guardado en memoria ({} total)", vehicle.id(), vehicles.len());
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().find(|v| v.id() == id).cloned())
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        Ok(self.vehicles.read().await.clone())
    }

    async fn exists_by_license_plate(&self, license_plate: &str) -> AppResult<bool> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().any(|v| v.license_plate().value() == license_plate))
    }

    async fn exists_by_vin(&self, vin: &str) -> AppResult<bool> {
        let vehicles = self.vehicles.read().await;
        Ok(vehicles.iter().any(|v| v.vin().value() == vin))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let mut vehicles = self.vehicles.write().await;
        vehicles.retain(|v| v.id() != id);
        Ok(())
    }
}

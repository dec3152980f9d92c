//! Repositorio de prueba que cuenta llamadas y permite forzar respuestas

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::Vehicle;
use crate::repositories::{InMemoryVehicleRepository, VehicleRepository};
use crate::utils::errors::AppResult;

#[derive(Default)]
pub struct CallCounts {
    pub save: AtomicUsize,
    pub find_by_id: AtomicUsize,
    pub find_all: AtomicUsize,
    pub exists_by_license_plate: AtomicUsize,
    pub exists_by_vin: AtomicUsize,
    pub delete: AtomicUsize,
}

impl CallCounts {
    pub fn get(counter: &AtomicUsize) -> usize {
        counter.load(Ordering::SeqCst)
    }

    pub fn total(&self) -> usize {
        [
            &self.save,
            &self.find_by_id,
            &self.find_all,
            &self.exists_by_license_plate,
            &self.exists_by_vin,
            &self.delete,
        ]
        .iter()
        .map(|c| Self::get(c))
        .sum()
    }
}

#[derive(Default)]
pub struct CountingRepository {
    inner: InMemoryVehicleRepository,
    pub calls: CallCounts,
    pub plate_taken: bool,
    pub vin_taken: bool,
    pub last_deleted: std::sync::Mutex<Option<String>>,
}

impl CountingRepository {
    pub fn with_vehicles(vehicles: Vec<Vehicle>) -> Self {
        Self {
            inner: InMemoryVehicleRepository::with_vehicles(vehicles),
            ..Self::default()
        }
    }

    /// Fuerza `exists_by_license_plate` a responder `true`
    pub fn with_plate_taken(mut self) -> Self {
        self.plate_taken = true;
        self
    }

    /// Fuerza `exists_by_vin` a responder `true`
    pub fn with_vin_taken(mut self) -> Self {
        self.vin_taken = true;
        self
    }

    pub fn into_arc(self) -> Arc<Self> {
        Arc::new(self)
    }
}

#[async_trait]
impl VehicleRepository for CountingRepository {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        self.calls.save.fetch_add(1, Ordering::SeqCst);
        self.inner.save(vehicle).await
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        self.calls.find_by_id.fetch_add(1, Ordering::SeqCst);
        self.inner.find_by_id(id).await
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        self.calls.find_all.fetch_add(1, Ordering::SeqCst);
        self.inner.find_all().await
    }

    async fn exists_by_license_plate(&self, license_plate: &str) -> AppResult<bool> {
        self.calls.exists_by_license_plate.fetch_add(1, Ordering::SeqCst);
        if self.plate_taken {
            return Ok(true);
        }
        self.inner.exists_by_license_plate(license_plate).await
    }

    async fn exists_by_vin(&self, vin: &str) -> AppResult<bool> {
        self.calls.exists_by_vin.fetch_add(1, Ordering::SeqCst);
        if self.vin_taken {
            return Ok(true);
        }
        self.inner.exists_by_vin(vin).await
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        self.calls.delete.fetch_add(1, Ordering::SeqCst);
        if let Ok(mut last) = self.last_deleted.lock() {
            *last = Some(id.to_string());
        }
        self.inner.delete(id).await
    }
}

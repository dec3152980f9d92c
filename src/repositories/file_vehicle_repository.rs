//! Repositorio de vehículos respaldado por un archivo JSON
//!
//! Guarda un arreglo JSON con indentación en `<data_dir>/vehicles.json`.
//! Cada lectura reconstruye las entidades con `Vehicle::create`, de modo que
//! un archivo editado a mano no puede introducir vehículos inválidos.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use tokio::fs;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::VehicleRepository;
use crate::models::{CreateVehicleParams, Vehicle};
use crate::utils::errors::AppResult;
use crate::utils::validation::normalize_upper;

pub const VEHICLES_FILE_NAME: &str = "vehicles.json";

/// Registro tal como se escribe en disco
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
struct VehicleRecord {
    id: String,
    license_plate: String,
    vin: String,
    renavam: String,
    model: String,
    make: String,
    model_year: i32,
}

impl From<&Vehicle> for VehicleRecord {
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

impl VehicleRecord {
    fn into_vehicle(self) -> AppResult<Vehicle> {
        Vehicle::create(CreateVehicleParams {
            id: self.id,
            license_plate: self.license_plate,
            vin: self.vin,
            renavam: self.renavam,
            model: self.model,
            make: self.make,
            model_year: f64::from(self.model_year),
        })
    }
}

pub struct FileVehicleRepository {
    data_dir: PathBuf,
    file_path: PathBuf,
    // Serializa los ciclos leer-modificar-escribir dentro del proceso
    lock: Mutex<()>,
}

impl FileVehicleRepository {
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        let data_dir = data_dir.into();
        let file_path = data_dir.join(VEHICLES_FILE_NAME);
        info!("📁 Repositorio de vehículos en {}", file_path.display());
        Self {
            data_dir,
            file_path,
            lock: Mutex::new(()),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    async fn ensure_data_directory(&self) -> AppResult<()> {
        fs::create_dir_all(&self.data_dir).await?;
        Ok(())
    }

    async fn read_records(&self) -> AppResult<Vec<VehicleRecord>> {
        match fs::read_to_string(&self.file_path).await {
            Ok(contents) => {
                let records: Vec<VehicleRecord> = serde_json::from_str(&contents)?;
                debug!("📥 {} registros leídos de {}", records.len(), self.file_path.display());
                Ok(records)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!("❌ {} no existe todavía, almacén vacío", self.file_path.display());
                Ok(Vec::new())
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn write_records(&self, records: &[VehicleRecord]) -> AppResult<()> {
        self.ensure_data_directory().await?;
        let contents = serde_json::to_string_pretty(records)?;
        fs::write(&self.file_path, contents).await?;
        debug!("💾 {} registros escritos en {}", records.len(), self.file_path.display());
        Ok(())
    }
}

#[async_trait]
impl VehicleRepository for FileVehicleRepository {
    async fn save(&self, vehicle: Vehicle) -> AppResult<Vehicle> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        let record = VehicleRecord::from(&vehicle);

        match records.iter().position(|r| r.id == record.id) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }

        self.write_records(&records).await?;
        Ok(vehicle)
    }

    async fn find_by_id(&self, id: &str) -> AppResult<Option<Vehicle>> {
        let _guard = self.lock.lock().await;
        self.read_records()
            .await?
            .into_iter()
            .find(|r| r.id == id)
            .map(VehicleRecord::into_vehicle)
            .transpose()
    }

    async fn find_all(&self) -> AppResult<Vec<Vehicle>> {
        let _guard = self.lock.lock().await;
        self.read_records()
            .await?
            .into_iter()
            .map(VehicleRecord::into_vehicle)
            .collect()
    }

    async fn exists_by_license_plate(&self, license_plate: &str) -> AppResult<bool> {
        let _guard = self.lock.lock().await;
        let records = self.read_records().await?;
        Ok(records
            .iter()
            .any(|r| normalize_upper(&r.license_plate) == license_plate))
    }

    async fn exists_by_vin(&self, vin: &str) -> AppResult<bool> {
        let _guard = self.lock.lock().await;
        let records = self.read_records().await?;
        Ok(records.iter().any(|r| normalize_upper(&r.vin) == vin))
    }

    async fn delete(&self, id: &str) -> AppResult<()> {
        let _guard = self.lock.lock().await;
        let mut records = self.read_records().await?;
        records.retain(|r| r.id != id);
        self.write_records(&records).await
    }
}

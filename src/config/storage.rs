//! Configuración del almacenamiento
//!
//! Selecciona la implementación del repositorio de vehículos al arrancar.

use std::str::FromStr;
use std::sync::Arc;

use anyhow::anyhow;
use tracing::info;

use super::environment::EnvironmentConfig;
use crate::repositories::{FileVehicleRepository, InMemoryVehicleRepository, VehicleRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    File,
    Memory,
}

impl FromStr for StorageBackend {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "file" => Ok(StorageBackend::File),
            "memory" => Ok(StorageBackend::Memory),
            other => Err(anyhow!(
                "STORAGE_BACKEND must be 'file' or 'memory', got '{}'",
                other
            )),
        }
    }
}

/// Construir el repositorio configurado
pub fn create_repository(config: &EnvironmentConfig) -> Arc<dyn VehicleRepository> {
    match config.storage_backend {
        StorageBackend::File => {
            info!("💾 Almacenamiento en archivo: {}", config.data_dir.display());
            Arc::new(FileVehicleRepository::new(config.data_dir.clone()))
        }
        StorageBackend::Memory => {
            info!("🧠 Almacenamiento en memoria (no persistente)");
            Arc::new(InMemoryVehicleRepository::new())
        }
    }
}

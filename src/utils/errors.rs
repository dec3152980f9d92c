//! Sistema de manejo de errores
//!
//! Este módulo define todos los tipos de errores del registro de vehículos
//! y su conversión a respuestas HTTP apropiadas.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use super::validation::ValidationError;

/// Campos con restricción de unicidad
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    LicensePlate,
    Vin,
}

impl UniqueField {
    pub fn as_str(&self) -> &'static str {
        match self {
            UniqueField::LicensePlate => "licensePlate",
            UniqueField::Vin => "vin",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            UniqueField::LicensePlate => "license plate",
            UniqueField::Vin => "VIN",
        }
    }
}

impl std::fmt::Display for UniqueField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Errores principales de la aplicación
#[derive(Error, Debug)]
pub enum AppError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Vehicle ID is required")]
    MissingId,

    #[error("Vehicle with ID {0} not found")]
    NotFound(String),

    #[error("Vehicle with {field} {value} already exists")]
    DuplicateField { field: UniqueField, value: String },

    #[error("Invalid request: {0}")]
    InvalidRequest(#[from] validator::ValidationErrors),

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Respuesta de error para la API
#[derive(Debug, serde::Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    details: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    code: Option<String>,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let message = self.to_string();
        let (status, error_response) = match self {
            AppError::Validation(e) => {
                tracing::warn!("Validation error: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message,
                        details: Some(json!({ "field": e.field, "kind": e.kind.as_str() })),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::InvalidRequest(e) => {
                tracing::warn!("Invalid request: {}", e);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Validation Error".to_string(),
                        message: "The provided data is invalid".to_string(),
                        details: Some(json!(e)),
                        code: Some("VALIDATION_ERROR".to_string()),
                    },
                )
            }

            AppError::MissingId => {
                tracing::warn!("Missing vehicle id");
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message,
                        details: None,
                        code: Some("MISSING_ID".to_string()),
                    },
                )
            }

            AppError::NotFound(id) => {
                tracing::warn!("Resource not found: {}", id);
                (
                    StatusCode::NOT_FOUND,
                    ErrorResponse {
                        error: "Not Found".to_string(),
                        message,
                        details: None,
                        code: Some("NOT_FOUND".to_string()),
                    },
                )
            }

            AppError::DuplicateField { field, value } => {
                tracing::warn!("Conflict on {}: {}", field, value);
                (
                    StatusCode::CONFLICT,
                    ErrorResponse {
                        error: "Conflict".to_string(),
                        message,
                        details: Some(json!({ "field": field.as_str(), "value": value })),
                        code: Some("CONFLICT".to_string()),
                    },
                )
            }

            AppError::BadRequest(msg) => {
                tracing::warn!("Bad request: {}", msg);
                (
                    StatusCode::BAD_REQUEST,
                    ErrorResponse {
                        error: "Bad Request".to_string(),
                        message: msg,
                        details: None,
                        code: Some("BAD_REQUEST".to_string()),
                    },
                )
            }

            AppError::Io(e) => {
                tracing::error!("Storage I/O error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Storage Error".to_string(),
                        message: "An error occurred while accessing the vehicle store".to_string(),
                        details: Some(json!({ "io_error": e.to_string() })),
                        code: Some("STORAGE_ERROR".to_string()),
                    },
                )
            }

            AppError::Serialization(e) => {
                tracing::error!("Storage serialization error: {}", e);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    ErrorResponse {
                        error: "Storage Error".to_string(),
                        message: "The vehicle store contains unreadable data".to_string(),
                        details: Some(json!({ "serialization_error": e.to_string() })),
                        code: Some("STORAGE_ERROR".to_string()),
                    },
                )
            }
        };

        (status, Json(error_response)).into_response()
    }
}

/// Resultado tipado para operaciones que pueden fallar
pub type AppResult<T> = Result<T, AppError>;

/// Función helper para crear errores de recurso no encontrado
pub fn not_found_error(id: &str) -> AppError {
    AppError::NotFound(id.to_string())
}

/// Función helper para crear errores de unicidad
pub fn duplicate_error(field: UniqueField, value: &str) -> AppError {
    AppError::DuplicateField {
        field,
        value: value.to_string(),
    }
}

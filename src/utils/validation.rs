//! Utilidades de validación
//!
//! Este módulo contiene el error de validación de campos y las funciones
//! helper compartidas por los value objects del vehículo.

use regex::Regex;
use thiserror::Error;

/// Tipo de fallo de validación de un campo
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationErrorKind {
    EmptyField,
    InvalidFormat,
}

impl ValidationErrorKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValidationErrorKind::EmptyField => "empty_field",
            ValidationErrorKind::InvalidFormat => "invalid_format",
        }
    }
}

/// Error de validación de un campo individual
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{message}")]
pub struct ValidationError {
    pub kind: ValidationErrorKind,
    pub field: &'static str,
    pub message: String,
}

impl ValidationError {
    pub fn empty(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::EmptyField,
            field,
            message: message.into(),
        }
    }

    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self {
            kind: ValidationErrorKind::InvalidFormat,
            field,
            message: message.into(),
        }
    }
}

/// Rechazar un valor vacío antes de normalizarlo
pub fn validate_present(
    value: &str,
    field: &'static str,
    message: &str,
) -> Result<(), ValidationError> {
    if value.is_empty() {
        return Err(ValidationError::empty(field, message));
    }
    Ok(())
}

/// Normalizar a mayúsculas sin espacios laterales
pub fn normalize_upper(value: &str) -> String {
    value.trim().to_uppercase()
}

/// Validar que el valor coincida con alguno de los patrones
pub fn matches_any(value: &str, patterns: &[&Regex]) -> bool {
    patterns.iter().any(|pattern| pattern.is_match(value))
}

/// Validar longitud mínima y máxima en caracteres
pub fn validate_length(value: &str, min: usize, max: usize) -> bool {
    let len = value.chars().count();
    len >= min && len <= max
}

/// Validar un texto libre acotado (modelo, marca) y devolverlo normalizado
pub fn validate_text(
    value: &str,
    field: &'static str,
    max: usize,
    empty_message: &str,
    invalid_message: &str,
) -> Result<String, ValidationError> {
    validate_present(value, field, empty_message)?;

    let normalized = value.trim();
    if !validate_length(normalized, 1, max) {
        return Err(ValidationError::invalid(field, invalid_message));
    }

    Ok(normalized.to_string())
}

//! Modelo comercial del vehículo (p. ej. "Gol")

use crate::utils::validation::{validate_text, ValidationError};

pub const MAX_MODEL_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct VehicleModel(String);

impl VehicleModel {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_text(
            value,
            "model",
            MAX_MODEL_LENGTH,
            "Model cannot be empty",
            "Invalid model. Model cannot be empty",
        )
        .map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

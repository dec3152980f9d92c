//! Marca del vehículo (p. ej. "Volkswagen")

use crate::utils::validation::{validate_text, ValidationError};

pub const MAX_MAKE_LENGTH: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Make(String);

impl Make {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_text(
            value,
            "make",
            MAX_MAKE_LENGTH,
            "Make cannot be empty",
            "Invalid make. Make cannot be empty",
        )
        .map(Self)
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

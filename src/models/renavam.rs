//! RENAVAM (Registro Nacional de Veículos Automotores), 11 dígitos

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::validation::{validate_present, ValidationError};

lazy_static! {
    static ref RENAVAM_REGEX: Regex = Regex::new(r"^[0-9]{11}$").unwrap();
}

const FIELD: &str = "renavam";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Renavam(String);

impl Renavam {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_present(value, FIELD, "RENAVAM cannot be empty")?;

        let normalized = value.trim();
        if !RENAVAM_REGEX.is_match(normalized) {
            return Err(ValidationError::invalid(
                FIELD,
                "Invalid RENAVAM format. Expected 11 digits",
            ));
        }

        Ok(Self(normalized.to_string()))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

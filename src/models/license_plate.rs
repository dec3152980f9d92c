//! Placa del vehículo
//!
//! Acepta el formato Mercosul (AAA1A23) y el formato brasileño anterior (AAA1234).

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::validation::{matches_any, normalize_upper, validate_present, ValidationError};

lazy_static! {
    static ref MERCOSUL_REGEX: Regex = Regex::new(r"^[A-Z]{3}[0-9][A-Z][0-9]{2}$").unwrap();
    static ref LEGACY_REGEX: Regex = Regex::new(r"^[A-Z]{3}[0-9]{4}$").unwrap();
}

const FIELD: &str = "licensePlate";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct LicensePlate(String);

impl LicensePlate {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_present(value, FIELD, "License plate cannot be empty")?;

        let normalized = normalize_upper(value);
        if !matches_any(&normalized, &[&*MERCOSUL_REGEX, &*LEGACY_REGEX]) {
            return Err(ValidationError::invalid(
                FIELD,
                "Invalid license plate format. Expected AAA-1A23 or AAA1234",
            ));
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

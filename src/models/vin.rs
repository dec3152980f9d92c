//! VIN (Vehicle Identification Number)

use lazy_static::lazy_static;
use regex::Regex;

use crate::utils::validation::{normalize_upper, validate_present, ValidationError};

lazy_static! {
    // 17 caracteres, sin I, O ni Q
    static ref VIN_REGEX: Regex = Regex::new(r"^[A-HJ-NPR-Z0-9]{17}$").unwrap();
}

const FIELD: &str = "vin";

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Vin(String);

impl Vin {
    pub fn new(value: &str) -> Result<Self, ValidationError> {
        validate_present(value, FIELD, "VIN cannot be empty")?;

        let normalized = normalize_upper(value);
        if !VIN_REGEX.is_match(&normalized) {
            return Err(ValidationError::invalid(
                FIELD,
                "Invalid VIN format. Expected 17 alphanumeric characters (excluding I, O, Q)",
            ));
        }

        Ok(Self(normalized))
    }

    pub fn value(&self) -> &str {
        &self.0
    }
}

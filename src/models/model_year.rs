//! Año modelo del vehículo

use chrono::{Datelike, Local};

use crate::utils::validation::ValidationError;

pub const MIN_MODEL_YEAR: i32 = 1900;

/// Año máximo aceptado: el año en curso más uno
pub fn max_model_year() -> i32 {
    Local::now().year() + 1
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ModelYear(i32);

impl ModelYear {
    /// Los números JSON llegan sin tipo entero, por eso se recibe un `f64`.
    pub fn new(value: f64) -> Result<Self, ValidationError> {
        let max = max_model_year();
        let in_range = value.is_finite()
            && value.fract() == 0.0
            && value >= f64::from(MIN_MODEL_YEAR)
            && value <= f64::from(max);

        if !in_range {
            return Err(ValidationError::invalid(
                "modelYear",
                format!(
                    "Invalid model year. Expected a year between {} and {}",
                    MIN_MODEL_YEAR, max
                ),
            ));
        }

        Ok(Self(value as i32))
    }

    pub fn value(&self) -> i32 {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::ValidationErrorKind;

    #[test]
    fn test_accepts_range_bounds() {
        assert_eq!(ModelYear::new(1900.0).unwrap().value(), 1900);
        assert_eq!(ModelYear::new(2020.0).unwrap().value(), 2020);
        let max = max_model_year();
        assert_eq!(ModelYear::new(f64::from(max)).unwrap().value(), max);
    }

    #[test]
    fn test_rejects_out_of_range() {
        assert!(ModelYear::new(1899.0).is_err());
        assert!(ModelYear::new(f64::from(max_model_year() + 1)).is_err());
        assert!(ModelYear::new(-2020.0).is_err());
    }

    #[test]
    fn test_rejects_non_integers_and_nan() {
        for raw in [2020.5, f64::NAN, f64::INFINITY, f64::NEG_INFINITY] {
            let err = ModelYear::new(raw).unwrap_err();
            assert_eq!(err.kind, ValidationErrorKind::InvalidFormat);
            assert!(err.message.starts_with("Invalid model year. Expected a year between 1900 and "));
        }
    }
}

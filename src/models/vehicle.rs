//! Modelo de Vehicle
//!
//! Agregado raíz del registro. Se construye siempre a partir de los seis
//! campos en crudo y nunca existe parcialmente validado.

use serde::{Deserialize, Serialize};

use super::{LicensePlate, Make, ModelYear, Renavam, VehicleModel, Vin};
use crate::utils::errors::{AppError, AppResult};

/// Parámetros en crudo para construir un vehículo
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicleParams {
    pub id: String,
    pub license_plate: String,
    pub vin: String,
    pub renavam: String,
    pub model: String,
    pub make: String,
    pub model_year: f64,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vehicle {
    id: String,
    license_plate: LicensePlate,
    vin: Vin,
    renavam: Renavam,
    model: VehicleModel,
    make: Make,
    model_year: ModelYear,
}

impl Vehicle {
    pub fn create(params: CreateVehicleParams) -> AppResult<Self> {
        let license_plate = LicensePlate::new(&params.license_plate)?;
        let vin = Vin::new(&params.vin)?;
        let renavam = Renavam::new(&params.renavam)?;
        let model = VehicleModel::new(&params.model)?;
        let make = Make::new(&params.make)?;
        let model_year = ModelYear::new(params.model_year)?;

        if params.id.is_empty() {
            return Err(AppError::MissingId);
        }

        Ok(Self {
            id: params.id,
            license_plate,
            vin,
            renavam,
            model,
            make,
            model_year,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn license_plate(&self) -> &LicensePlate {
        &self.license_plate
    }

    pub fn vin(&self) -> &Vin {
        &self.vin
    }

    pub fn renavam(&self) -> &Renavam {
        &self.renavam
    }

    pub fn model(&self) -> &VehicleModel {
        &self.model
    }

    pub fn make(&self) -> &Make {
        &self.make
    }

    pub fn model_year(&self) -> &ModelYear {
        &self.model_year
    }

    /// Parámetros completos con los valores normalizados actuales
    pub fn to_params(&self) -> CreateVehicleParams {
        CreateVehicleParams {
            id: self.id.clone(),
            license_plate: self.license_plate.value().to_string(),
            vin: self.vin.value().to_string(),
            renavam: self.renavam.value().to_string(),
            model: self.model.value().to_string(),
            make: self.make.value().to_string(),
            model_year: f64::from(self.model_year.value()),
        }
    }
}

#[cfg(test)]
pub(crate) fn sample_params(id: &str) -> CreateVehicleParams {
    CreateVehicleParams {
        id: id.to_string(),
        license_plate: "ABC1D23".to_string(),
        vin: "9BWZZZ377VT004251".to_string(),
        renavam: "12345678901".to_string(),
        model: "Gol".to_string(),
        make: "Volkswagen".to_string(),
        model_year: 2020.0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::validation::ValidationErrorKind;

    #[test]
    fn test_create_vehicle_normalizes_fields() {
        let params = CreateVehicleParams {
            license_plate: "abc1d23".to_string(),
            vin: " 9bwzzz377vt004251".to_string(),
            model: " Gol ".to_string(),
            ..sample_params("123")
        };

        let vehicle = Vehicle::create(params).unwrap();

        assert_eq!(vehicle.id(), "123");
        assert_eq!(vehicle.license_plate().value(), "ABC1D23");
        assert_eq!(vehicle.vin().value(), "9BWZZZ377VT004251");
        assert_eq!(vehicle.renavam().value(), "12345678901");
        assert_eq!(vehicle.model().value(), "Gol");
        assert_eq!(vehicle.make().value(), "Volkswagen");
        assert_eq!(vehicle.model_year().value(), 2020);
    }

    #[test]
    fn test_missing_id() {
        let result = Vehicle::create(sample_params(""));
        assert!(matches!(result, Err(AppError::MissingId)));
    }

    #[test]
    fn test_whitespace_id_is_kept_as_given() {
        let vehicle = Vehicle::create(sample_params("   ")).unwrap();
        assert_eq!(vehicle.id(), "   ");
    }

    #[test]
    fn test_fields_validated_in_order() {
        // Placa y VIN inválidos: el primer error es el de la placa
        let params = CreateVehicleParams {
            license_plate: "INVALID".to_string(),
            vin: "SHORT".to_string(),
            ..sample_params("")
        };

        match Vehicle::create(params) {
            Err(AppError::Validation(e)) => {
                assert_eq!(e.field, "licensePlate");
                assert_eq!(e.kind, ValidationErrorKind::InvalidFormat);
            }
            other => panic!("expected license plate validation error, got {:?}", other),
        }
    }

    #[test]
    fn test_field_errors_win_over_missing_id() {
        let params = CreateVehicleParams {
            model_year: 1800.0,
            ..sample_params("")
        };
        assert!(matches!(
            Vehicle::create(params),
            Err(AppError::Validation(e)) if e.field == "modelYear"
        ));
    }

    #[test]
    fn test_to_params_round_trips_normalized_values() {
        let vehicle = Vehicle::create(CreateVehicleParams {
            license_plate: "abc1234".to_string(),
            ..sample_params("42")
        })
        .unwrap();

        let params = vehicle.to_params();
        assert_eq!(params.license_plate, "ABC1234");
        assert_eq!(Vehicle::create(params).unwrap(), vehicle);
    }
}

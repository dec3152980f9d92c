//! Casos de uso del registro de vehículos
//!
//! Cada caso de uso valida sus precondiciones, consulta el repositorio para
//! las reglas de negocio y escribe sólo como último paso.

pub mod create_vehicle;
pub mod delete_vehicle;
pub mod get_vehicle;
pub mod list_vehicles;
pub mod update_vehicle;

#[cfg(test)]
pub(crate) mod test_support;

pub use create_vehicle::CreateVehicleUseCase;
pub use delete_vehicle::DeleteVehicleUseCase;
pub use get_vehicle::GetVehicleUseCase;
pub use list_vehicles::ListVehiclesUseCase;
pub use update_vehicle::{UpdateVehicleParams, UpdateVehicleUseCase};

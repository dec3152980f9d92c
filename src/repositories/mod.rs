pub mod file_vehicle_repository;
pub mod in_memory_vehicle_repository;
pub mod vehicle_repository;

pub use file_vehicle_repository::FileVehicleRepository;
pub use in_memory_vehicle_repository::InMemoryVehicleRepository;
pub use vehicle_repository::VehicleRepository;

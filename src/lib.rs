//! Registro de vehículos
//!
//! Servicio CRUD de vehículos con validación de formato por campo y
//! unicidad de placa y VIN.

pub mod config;
pub mod controllers;
pub mod dto;
pub mod middleware;
pub mod models;
pub mod repositories;
pub mod routes;
pub mod services;
pub mod state;
pub mod utils;

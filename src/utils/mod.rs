//! Utilidades del sistema
//!
//! Este módulo contiene utilidades para manejo de errores y validación
//! compartidas por el dominio y la capa HTTP.

pub mod errors;
pub mod validation;

pub use errors::{AppError, AppResult, UniqueField};
pub use validation::{ValidationError, ValidationErrorKind};

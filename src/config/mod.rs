//! Configuración del proyecto
//!
//! Este módulo contiene la configuración de variables de entorno y la
//! selección del almacenamiento de vehículos.

pub mod environment;
pub mod storage;

pub use environment::*;
pub use storage::*;

//! Utilidades del sistema
//! 
//! Este módulo contiene utilidades para manejo de errores y fechas.

pub mod dates;
pub mod errors;

pub use errors::{SeedError, SeedResult};

//! Cargador de datos base para la aplicación de despacho de flota
//! 
//! Crea las cuentas de ejemplo y escribe los documentos iniciales de las
//! colecciones `users`, `vehicles`, `partners` y `tasks`.

pub mod config;
pub mod models;
pub mod seed;
pub mod store;
pub mod utils;

//! Configuración del proyecto
//! 
//! Este módulo contiene el archivo de credenciales, la configuración de base
//! de datos y las variables de entorno.

pub mod credentials;
pub mod database;
pub mod environment;

pub use credentials::{DocumentBackend, ServiceAccount};
pub use database::DatabaseConfig;
pub use environment::EnvironmentConfig;

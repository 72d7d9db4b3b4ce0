//! Configuración de variables de entorno
//! 
//! Solo se leen la ruta del archivo de credenciales y el filtro de logs.

use std::env;
use std::path::PathBuf;

pub const DEFAULT_CREDENTIALS_PATH: &str = "./serviceAccountKey.json";
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Configuración del entorno
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    pub credentials_path: PathBuf,
    pub log_filter: String,
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            credentials_path: env::var("SEED_CREDENTIALS")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(DEFAULT_CREDENTIALS_PATH)),
            log_filter: env::var("RUST_LOG").unwrap_or_else(|_| DEFAULT_LOG_FILTER.to_string()),
        }
    }
}

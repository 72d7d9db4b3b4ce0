//! Sistema de manejo de errores
//! 
//! Este módulo define los errores del cargador y su agrupación en un
//! único tipo que se propaga con `?` hasta `main`.

use thiserror::Error;

/// Errores principales del cargador
#[derive(Error, Debug)]
pub enum SeedError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] redis::RedisError),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Store error: {0}")]
    Store(String),

    #[error("Identity provider error: {0}")]
    Identity(String),
}

/// Resultado tipado para operaciones que pueden fallar
pub type SeedResult<T> = Result<T, SeedError>;

/// Función helper para crear errores de configuración
pub fn config_error(message: &str) -> SeedError {
    SeedError::Config(message.to_string())
}

/// Función helper para crear errores de escritura en el store
pub fn store_error(collection: &str, message: &str) -> SeedError {
    SeedError::Store(format!("{}: {}", collection, message))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_store_error_message() {
        let err = store_error("vehicles", "write rejected");
        assert_eq!(err.to_string(), "Store error: vehicles: write rejected");
    }

    #[test]
    fn test_json_error_conversion() {
        let json = serde_json::from_str::<serde_json::Value>("{").unwrap_err();
        let err: SeedError = json.into();
        assert!(matches!(err, SeedError::Serialization(_)));
    }
}

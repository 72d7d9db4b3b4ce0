//! Archivo de credenciales
//! 
//! Cuenta de servicio en JSON con los datos de conexión al proveedor de
//! identidad y al store de documentos.

use std::path::Path;
use std::str::FromStr;

use serde::Deserialize;

use crate::utils::errors::{config_error, SeedError, SeedResult};

/// Backend del store de documentos
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DocumentBackend {
    Postgres,
    Redis,
}

impl FromStr for DocumentBackend {
    type Err = SeedError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "postgres" | "postgresql" => Ok(DocumentBackend::Postgres),
            "redis" => Ok(DocumentBackend::Redis),
            other => Err(SeedError::Config(format!("unknown document backend '{}'", other))),
        }
    }
}

/// Cuenta de servicio
#[derive(Debug, Clone, Deserialize)]
pub struct ServiceAccount {
    pub project_id: String,
    pub database_url: String,
    #[serde(default)]
    pub redis_url: Option<String>,
    #[serde(default)]
    pub document_backend: Option<String>,
}

impl ServiceAccount {
    /// Leer la cuenta de servicio desde disco
    pub fn load(path: &Path) -> SeedResult<Self> {
        let raw = std::fs::read_to_string(path).map_err(|e| {
            SeedError::Config(format!("cannot read credentials {}: {}", path.display(), e))
        })?;
        Self::from_json(&raw)
    }

    pub fn from_json(raw: &str) -> SeedResult<Self> {
        let account: ServiceAccount = serde_json::from_str(raw)?;
        if account.database_url.trim().is_empty() {
            return Err(config_error("database_url must not be empty"));
        }
        Ok(account)
    }

    /// Backend elegido (PostgreSQL por defecto)
    pub fn backend(&self) -> SeedResult<DocumentBackend> {
        match &self.document_backend {
            Some(value) => value.parse(),
            None => Ok(DocumentBackend::Postgres),
        }
    }

    /// URL de Redis, obligatoria con el backend Redis
    pub fn require_redis_url(&self) -> SeedResult<&str> {
        self.redis_url
            .as_deref()
            .ok_or_else(|| config_error("redis_url is required for the redis backend"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_minimal_account() {
        let account = ServiceAccount::from_json(
            r#"{ "project_id": "nvts188", "database_url": "postgresql://u:p@localhost/fleet" }"#,
        )
        .unwrap();

        assert_eq!(account.project_id, "nvts188");
        assert_eq!(account.backend().unwrap(), DocumentBackend::Postgres);
        assert!(account.require_redis_url().is_err());
    }

    #[test]
    fn test_parse_redis_backend() {
        let account = ServiceAccount::from_json(
            r#"{
                "project_id": "nvts188",
                "database_url": "postgresql://u:p@localhost/fleet",
                "redis_url": "redis://localhost:6379",
                "document_backend": "Redis"
            }"#,
        )
        .unwrap();

        assert_eq!(account.backend().unwrap(), DocumentBackend::Redis);
        assert_eq!(account.require_redis_url().unwrap(), "redis://localhost:6379");
    }

    #[test]
    fn test_unknown_backend_is_config_error() {
        assert!(matches!(
            "firestore".parse::<DocumentBackend>(),
            Err(SeedError::Config(_))
        ));
    }

    #[test]
    fn test_empty_database_url_rejected() {
        let result = ServiceAccount::from_json(r#"{ "project_id": "x", "database_url": " " }"#);
        assert!(matches!(result, Err(SeedError::Config(_))));
    }

    #[test]
    fn test_missing_file_is_config_error() {
        let result = ServiceAccount::load(Path::new("/nonexistent/serviceAccountKey.json"));
        assert!(matches!(result, Err(SeedError::Config(_))));
    }
}

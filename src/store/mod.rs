//! Clientes de almacenamiento
//! 
//! Fronteras del cargador con el mundo exterior: el store de documentos y el
//! proveedor de identidad. Los clientes se construyen en `main` y se pasan al
//! cargador, nunca se guardan en estado global.

pub mod memory;
pub mod postgres;
pub mod redis_store;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use serde_json::{Map, Value};

use crate::models::{AccountOutcome, NewAccount};
use crate::utils::errors::{SeedError, SeedResult};

/// Campos de un documento
pub type Document = Map<String, Value>;

/// Longitud de las claves generadas por `insert`
pub const GENERATED_KEY_LEN: usize = 20;

/// Modo de escritura de `upsert`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WriteMode {
    /// Solo se sobrescriben los campos presentes; el resto se conserva
    Merge,
    /// El documento se reemplaza completo
    Overwrite,
}

/// Store de documentos agrupados en colecciones
#[async_trait]
pub trait DocumentStore: Send + Sync {
    /// Crear o actualizar el documento `collection/key`
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: Document,
        mode: WriteMode,
    ) -> SeedResult<()>;

    /// Insertar un documento nuevo y devolver la clave generada
    async fn insert(&self, collection: &str, fields: Document) -> SeedResult<String>;

    /// Hora de escritura según el reloj del store
    async fn now(&self) -> SeedResult<DateTime<Utc>>;
}

/// Proveedor de identidad (cuentas de acceso)
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Crear una cuenta. Los uid o emails duplicados devuelven
    /// `AccountOutcome::AlreadyExists`; solo los fallos del cliente son `Err`.
    async fn create_account(&self, account: &NewAccount) -> SeedResult<AccountOutcome>;
}

/// Convertir un modelo serializable en los campos de un documento
pub fn to_document<T: Serialize>(value: &T) -> SeedResult<Document> {
    match serde_json::to_value(value)? {
        Value::Object(fields) => Ok(fields),
        other => Err(SeedError::Store(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}

/// Aplicar una escritura sobre un documento existente
pub fn apply_write(existing: Option<Document>, fields: Document, mode: WriteMode) -> Document {
    match (existing, mode) {
        (Some(mut current), WriteMode::Merge) => {
            for (name, value) in fields {
                current.insert(name, value);
            }
            current
        }
        _ => fields,
    }
}

/// Generar una clave aleatoria alfanumérica para `insert`
pub fn generate_key() -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(GENERATED_KEY_LEN)
        .map(char::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn doc(value: Value) -> Document {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_merge_keeps_unrelated_fields() {
        let existing = doc(json!({ "name": "old", "phoneToken": "abc" }));
        let merged = apply_write(Some(existing), doc(json!({ "name": "new" })), WriteMode::Merge);

        assert_eq!(merged["name"], "new");
        assert_eq!(merged["phoneToken"], "abc");
    }

    #[test]
    fn test_overwrite_drops_unrelated_fields() {
        let existing = doc(json!({ "name": "old", "phoneToken": "abc" }));
        let fields = doc(json!({ "name": "new" }));
        let written = apply_write(Some(existing), fields, WriteMode::Overwrite);

        assert_eq!(written.len(), 1);
        assert!(written.get("phoneToken").is_none());
    }

    #[test]
    fn test_to_document_rejects_non_objects() {
        assert!(to_document(&"plain").is_err());
        assert_eq!(to_document(&json!({ "a": 1 })).unwrap()["a"], 1);
    }

    #[test]
    fn test_generate_key_shape() {
        let key = generate_key();
        assert_eq!(key.len(), GENERATED_KEY_LEN);
        assert!(key.chars().all(|c| c.is_ascii_alphanumeric()));
        assert_ne!(key, generate_key());
    }
}

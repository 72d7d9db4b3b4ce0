//! Backend Redis
//! 
//! Cada documento se guarda como JSON en `fleet:{collection}:{key}` y las
//! claves de cada colección en el set `fleet:{collection}:keys`.

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use redis::{aio::ConnectionManager, AsyncCommands};
use tracing::{debug, info};

use super::{apply_write, generate_key, Document, DocumentStore, WriteMode};
use crate::utils::errors::{SeedError, SeedResult};

pub const KEY_PREFIX: &str = "fleet";

/// Clave Redis de un documento
fn document_key(collection: &str, key: &str) -> String {
    format!("{}:{}:{}", KEY_PREFIX, collection, key)
}

/// Clave Redis del índice de una colección
fn index_key(collection: &str) -> String {
    format!("{}:{}:keys", KEY_PREFIX, collection)
}

/// Convertir la respuesta de `TIME` (segundos, microsegundos)
fn time_from_redis(seconds: i64, micros: i64) -> SeedResult<DateTime<Utc>> {
    let nanos = u32::try_from(micros * 1_000)
        .map_err(|_| SeedError::Store(format!("invalid TIME microseconds: {}", micros)))?;
    Utc.timestamp_opt(seconds, nanos)
        .single()
        .ok_or_else(|| SeedError::Store(format!("invalid TIME seconds: {}", seconds)))
}

/// Store de documentos sobre Redis con connection manager
#[derive(Clone)]
pub struct RedisDocumentStore {
    manager: ConnectionManager,
}

impl RedisDocumentStore {
    /// Conectar y verificar con `PING`
    pub async fn connect(redis_url: &str) -> SeedResult<Self> {
        info!("🔗 Conectando a Redis...");

        let client = redis::Client::open(redis_url)?;
        let manager = ConnectionManager::new(client).await?;

        let mut conn = manager.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;

        info!("✅ Redis conectado exitosamente");
        Ok(Self { manager })
    }

    async fn read(&self, collection: &str, key: &str) -> SeedResult<Option<Document>> {
        let mut conn = self.manager.clone();
        match conn.get::<_, Option<String>>(document_key(collection, key)).await? {
            Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
            None => Ok(None),
        }
    }
}

#[async_trait]
impl DocumentStore for RedisDocumentStore {
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: Document,
        mode: WriteMode,
    ) -> SeedResult<()> {
        // Lectura y escritura separadas: el cargador escribe de forma secuencial
        let existing = match mode {
            WriteMode::Merge => self.read(collection, key).await?,
            WriteMode::Overwrite => None,
        };
        let serialized = serde_json::to_string(&apply_write(existing, fields, mode))?;

        let mut conn = self.manager.clone();
        conn.set::<_, _, ()>(document_key(collection, key), serialized).await?;
        conn.sadd::<_, _, ()>(index_key(collection), key).await?;

        debug!("💾 upsert {}/{} ({:?})", collection, key, mode);
        Ok(())
    }

    async fn insert(&self, collection: &str, fields: Document) -> SeedResult<String> {
        let serialized = serde_json::to_string(&fields)?;
        let mut conn = self.manager.clone();

        let key = loop {
            let candidate = generate_key();
            let created: bool = conn
                .set_nx(document_key(collection, &candidate), &serialized)
                .await?;
            if created {
                break candidate;
            }
        };
        conn.sadd::<_, _, ()>(index_key(collection), &key).await?;

        debug!("💾 insert {}/{}", collection, key);
        Ok(key)
    }

    async fn now(&self) -> SeedResult<DateTime<Utc>> {
        let mut conn = self.manager.clone();
        let (seconds, micros): (i64, i64) = redis::cmd("TIME").query_async(&mut conn).await?;
        time_from_redis(seconds, micros)
    }
}

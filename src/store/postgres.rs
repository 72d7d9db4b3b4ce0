//! Backend PostgreSQL
//! 
//! Documentos en una tabla JSONB `(collection, key, data)` y cuentas de
//! identidad en `auth_accounts`, con contraseñas hasheadas con bcrypt.

use async_trait::async_trait;
use bcrypt::{hash, DEFAULT_COST};
use chrono::{DateTime, Utc};
use serde_json::Value;
use sqlx::{types::Json, Executor, PgPool};
use tracing::{debug, info};

use super::{generate_key, Document, DocumentStore, IdentityProvider, WriteMode};
use crate::models::account::check_new_account;
use crate::models::{AccountOutcome, NewAccount};
use crate::utils::errors::SeedResult;

const SCHEMA_SQL: &str = include_str!("../../migrations/0001_bootstrap_schema.sql");

const MERGE_SQL: &str = r#"
    INSERT INTO documents (collection, key, data, updated_at)
    VALUES ($1, $2, $3, now())
    ON CONFLICT (collection, key)
    DO UPDATE SET data = documents.data || EXCLUDED.data, updated_at = now()
"#;

const OVERWRITE_SQL: &str = r#"
    INSERT INTO documents (collection, key, data, updated_at)
    VALUES ($1, $2, $3, now())
    ON CONFLICT (collection, key)
    DO UPDATE SET data = EXCLUDED.data, updated_at = now()
"#;

const INSERT_SQL: &str = r#"
    INSERT INTO documents (collection, key, data, updated_at)
    VALUES ($1, $2, $3, now())
    ON CONFLICT (collection, key) DO NOTHING
    RETURNING key
"#;

const CREATE_ACCOUNT_SQL: &str = r#"
    INSERT INTO auth_accounts (uid, email, password_hash, display_name, email_verified, created_at)
    VALUES ($1, $2, $3, $4, $5, now())
"#;

/// Crear las tablas si no existen
pub async fn ensure_schema(pool: &PgPool) -> SeedResult<()> {
    // Protocolo simple: admite varias sentencias en una sola llamada
    pool.execute(SCHEMA_SQL).await?;
    info!("✅ Esquema de documentos y cuentas verificado");
    Ok(())
}

/// SQL de `upsert` según el modo de escritura
fn upsert_sql(mode: WriteMode) -> &'static str {
    match mode {
        WriteMode::Merge => MERGE_SQL,
        WriteMode::Overwrite => OVERWRITE_SQL,
    }
}

#[derive(Clone)]
pub struct PgDocumentStore {
    pool: PgPool,
}

impl PgDocumentStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl DocumentStore for PgDocumentStore {
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: Document,
        mode: WriteMode,
    ) -> SeedResult<()> {
        sqlx::query(upsert_sql(mode))
            .bind(collection)
            .bind(key)
            .bind(Json(Value::Object(fields)))
            .execute(&self.pool)
            .await?;

        debug!("💾 upsert {}/{} ({:?})", collection, key, mode);
        Ok(())
    }

    async fn insert(&self, collection: &str, fields: Document) -> SeedResult<String> {
        let data = Json(Value::Object(fields));

        // Sin fila devuelta: la clave generada ya existía, se prueba otra
        let key = loop {
            let inserted = sqlx::query_scalar::<_, String>(INSERT_SQL)
                .bind(collection)
                .bind(generate_key())
                .bind(&data)
                .fetch_optional(&self.pool)
                .await?;
            if let Some(key) = inserted {
                break key;
            }
        };

        debug!("💾 insert {}/{}", collection, key);
        Ok(key)
    }

    async fn now(&self) -> SeedResult<DateTime<Utc>> {
        let now = sqlx::query_scalar::<_, DateTime<Utc>>("SELECT now()")
            .fetch_one(&self.pool)
            .await?;
        Ok(now)
    }
}

#[derive(Clone)]
pub struct PgIdentityProvider {
    pool: PgPool,
}

impl PgIdentityProvider {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl IdentityProvider for PgIdentityProvider {
    async fn create_account(&self, account: &NewAccount) -> SeedResult<AccountOutcome> {
        if let Some(outcome) = check_new_account(account) {
            return Ok(outcome);
        }

        let password_hash = match hash(&account.password, DEFAULT_COST) {
            Ok(h) => h,
            Err(e) => return Ok(AccountOutcome::Failed(format!("password hashing failed: {}", e))),
        };

        let result = sqlx::query(CREATE_ACCOUNT_SQL)
            .bind(&account.uid)
            .bind(account.email.to_lowercase())
            .bind(password_hash)
            .bind(&account.display_name)
            .bind(account.email_verified)
            .execute(&self.pool)
            .await;

        match result {
            Ok(_) => Ok(AccountOutcome::Created),
            Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                Ok(AccountOutcome::AlreadyExists)
            }
            Err(sqlx::Error::Database(db)) => Ok(AccountOutcome::Failed(db.message().to_string())),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_upsert_sql_by_mode() {
        assert!(upsert_sql(WriteMode::Merge).contains("documents.data || EXCLUDED.data"));
        assert!(upsert_sql(WriteMode::Overwrite).contains("data = EXCLUDED.data"));
        assert!(!upsert_sql(WriteMode::Overwrite).contains("||"));
    }

    #[test]
    fn test_insert_sql_skips_existing_keys() {
        assert!(INSERT_SQL.contains("DO NOTHING"));
        assert!(INSERT_SQL.contains("RETURNING key"));
        assert!(!INSERT_SQL.contains("DO UPDATE"));
    }

    #[test]
    fn test_schema_is_idempotent() {
        assert_eq!(SCHEMA_SQL.matches("CREATE TABLE IF NOT EXISTS").count(), 2);
    }
}

//! Backend en memoria
//! 
//! Implementa `DocumentStore` e `IdentityProvider` sobre mapas protegidos por
//! `RwLock`, con reloj fijo. Permite simular fallos del proveedor y del store.

use std::collections::{BTreeMap, HashMap, HashSet};

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use tracing::debug;

use super::{apply_write, generate_key, Document, DocumentStore, IdentityProvider, WriteMode};
use crate::models::account::check_new_account;
use crate::models::{AccountOutcome, NewAccount};
use crate::utils::errors::{store_error, SeedError, SeedResult};

/// Cuenta guardada por el backend en memoria
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccountRecord {
    pub uid: String,
    pub email: String,
    pub display_name: String,
    pub email_verified: bool,
}

pub struct MemoryBackend {
    clock: DateTime<Utc>,
    collections: RwLock<HashMap<String, BTreeMap<String, Document>>>,
    accounts: RwLock<BTreeMap<String, AccountRecord>>,
    failing_emails: HashSet<String>,
    failing_collections: HashSet<String>,
    identity_offline: bool,
}

impl MemoryBackend {
    /// Crear un backend vacío cuyo `now()` devuelve siempre `clock`
    pub fn new(clock: DateTime<Utc>) -> Self {
        Self {
            clock,
            collections: RwLock::new(HashMap::new()),
            accounts: RwLock::new(BTreeMap::new()),
            failing_emails: HashSet::new(),
            failing_collections: HashSet::new(),
            identity_offline: false,
        }
    }

    /// La creación de la cuenta con este email devuelve `Failed`
    pub fn with_failing_email(mut self, email: &str) -> Self {
        self.failing_emails.insert(email.to_lowercase());
        self
    }

    /// Toda escritura en esta colección devuelve `Err`
    pub fn with_failing_collection(mut self, collection: &str) -> Self {
        self.failing_collections.insert(collection.to_string());
        self
    }

    /// El cliente de identidad falla antes de llegar al proveedor
    pub fn with_identity_offline(mut self) -> Self {
        self.identity_offline = true;
        self
    }

    /// Número de documentos en una colección
    pub async fn count(&self, collection: &str) -> usize {
        let collections = self.collections.read().await;
        collections.get(collection).map_or(0, BTreeMap::len)
    }

    /// Leer un documento
    pub async fn get(&self, collection: &str, key: &str) -> Option<Document> {
        let collections = self.collections.read().await;
        collections.get(collection).and_then(|docs| docs.get(key)).cloned()
    }

    /// Claves de una colección, ordenadas
    pub async fn keys(&self, collection: &str) -> Vec<String> {
        let collections = self.collections.read().await;
        collections
            .get(collection)
            .map(|docs| docs.keys().cloned().collect())
            .unwrap_or_default()
    }

    pub async fn account_count(&self) -> usize {
        self.accounts.read().await.len()
    }

    pub async fn account(&self, uid: &str) -> Option<AccountRecord> {
        self.accounts.read().await.get(uid).cloned()
    }

    fn check_writable(&self, collection: &str) -> SeedResult<()> {
        if self.failing_collections.contains(collection) {
            return Err(store_error(collection, "simulated write failure"));
        }
        Ok(())
    }
}

#[async_trait]
impl DocumentStore for MemoryBackend {
    async fn upsert(
        &self,
        collection: &str,
        key: &str,
        fields: Document,
        mode: WriteMode,
    ) -> SeedResult<()> {
        self.check_writable(collection)?;

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let written = apply_write(docs.remove(key), fields, mode);
        docs.insert(key.to_string(), written);

        debug!("💾 upsert {}/{} ({:?})", collection, key, mode);
        Ok(())
    }

    async fn insert(&self, collection: &str, fields: Document) -> SeedResult<String> {
        self.check_writable(collection)?;

        let mut collections = self.collections.write().await;
        let docs = collections.entry(collection.to_string()).or_default();
        let mut key = generate_key();
        while docs.contains_key(&key) {
            key = generate_key();
        }
        docs.insert(key.clone(), fields);

        debug!("💾 insert {}/{}", collection, key);
        Ok(key)
    }

    async fn now(&self) -> SeedResult<DateTime<Utc>> {
        Ok(self.clock)
    }
}

#[async_trait]
impl IdentityProvider for MemoryBackend {
    async fn create_account(&self, account: &NewAccount) -> SeedResult<AccountOutcome> {
        if self.identity_offline {
            return Err(SeedError::Identity("identity provider unreachable".to_string()));
        }
        if let Some(outcome) = check_new_account(account) {
            return Ok(outcome);
        }
        if self.failing_emails.contains(&account.email.to_lowercase()) {
            return Ok(AccountOutcome::Failed("simulated provider error".to_string()));
        }

        let mut accounts = self.accounts.write().await;
        let email = account.email.to_lowercase();
        if accounts.contains_key(&account.uid) || accounts.values().any(|a| a.email == email) {
            return Ok(AccountOutcome::AlreadyExists);
        }

        accounts.insert(
            account.uid.clone(),
            AccountRecord {
                uid: account.uid.clone(),
                email,
                display_name: account.display_name.clone(),
                email_verified: account.email_verified,
            },
        );
        Ok(AccountOutcome::Created)
    }
}

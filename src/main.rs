use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use fleet_bootstrap::config::{DatabaseConfig, DocumentBackend, EnvironmentConfig, ServiceAccount};
use fleet_bootstrap::seed::BootstrapLoader;
use fleet_bootstrap::store::postgres::{ensure_schema, PgDocumentStore, PgIdentityProvider};
use fleet_bootstrap::store::redis_store::RedisDocumentStore;
use fleet_bootstrap::store::DocumentStore;

#[tokio::main]
async fn main() {
    // Cargar variables de entorno
    dotenv().ok();
    let env_config = EnvironmentConfig::default();

    // Configurar logging
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(&env_config.log_filter))
        .init();

    info!("🚚 Fleet Bootstrap - carga inicial de colecciones");
    info!("================================================");

    // Los errores se registran y el proceso termina igual con código 0
    if let Err(e) = run(&env_config).await {
        error!("❌ La carga inicial falló: {:#}", e);
        eprintln!("{:#}", e);
    }

    info!("👋 Proceso terminado");
    std::process::exit(0);
}

async fn run(env_config: &EnvironmentConfig) -> Result<()> {
    let account = ServiceAccount::load(&env_config.credentials_path)?;
    info!("🔑 Proyecto: {}", account.project_id);

    let pool = DatabaseConfig::from_url(&account.database_url)
        .create_pool()
        .await
        .context("Error conectando a la base de datos")?;
    ensure_schema(&pool).await?;

    let identity = PgIdentityProvider::new(pool.clone());
    let store: Box<dyn DocumentStore> = match account.backend()? {
        DocumentBackend::Postgres => Box::new(PgDocumentStore::new(pool.clone())),
        DocumentBackend::Redis => {
            Box::new(RedisDocumentStore::connect(account.require_redis_url()?).await?)
        }
    };

    BootstrapLoader::new(&identity, &*store).run().await?;

    info!("--- Colecciones inicializadas. Revise el store de documentos y las cuentas. ---");
    Ok(())
}

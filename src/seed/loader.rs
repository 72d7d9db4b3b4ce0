//! Cargador de datos base
//! 
//! Escribe la tabla de semillas en cuatro fases secuenciales: usuarios,
//! vehículos, socios y tareas. Las fases 1 a 3 se pueden repetir sin
//! duplicar datos; la fase 4 añade una tarea nueva en cada ejecución.

use tracing::{error, info};

use super::data::{
    seed_partners, seed_task, seed_vehicle, DEFAULT_PASSWORD, PARTNERS, SEED_USERS, TASKS,
    USERS, VEHICLES,
};
use crate::models::{AccountOutcome, NewAccount, UserRole};
use crate::store::{to_document, DocumentStore, IdentityProvider, WriteMode};
use crate::utils::dates::planned_date;
use crate::utils::errors::SeedResult;

/// Resumen de una ejecución
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BootstrapReport {
    pub accounts_created: usize,
    pub accounts_existing: usize,
    /// (email, motivo)
    pub accounts_failed: Vec<(String, String)>,
    pub roles_written: usize,
    pub vehicles_written: usize,
    pub partners_written: usize,
    pub task_id: Option<String>,
    pub planned_date: Option<String>,
}

pub struct BootstrapLoader<'a> {
    identity: &'a dyn IdentityProvider,
    store: &'a dyn DocumentStore,
}

impl<'a> BootstrapLoader<'a> {
    pub fn new(identity: &'a dyn IdentityProvider, store: &'a dyn DocumentStore) -> Self {
        Self { identity, store }
    }

    /// Ejecutar las cuatro fases en orden. Un error en cualquier escritura
    /// corta la ejecución; los fallos de cuentas individuales no.
    pub async fn run(&self) -> SeedResult<BootstrapReport> {
        info!("--- Inicializando datos base de la flota ---");

        let mut report = BootstrapReport::default();
        self.seed_users(&mut report).await?;
        self.seed_vehicles(&mut report).await?;
        self.seed_partners(&mut report).await?;
        self.seed_tasks(&mut report).await?;

        info!(
            "🏁 Carga completada: {} cuentas nuevas, {} existentes, {} fallidas, {} roles, {} vehículos, {} socios, tarea {}",
            report.accounts_created,
            report.accounts_existing,
            report.accounts_failed.len(),
            report.roles_written,
            report.vehicles_written,
            report.partners_written,
            report.task_id.as_deref().unwrap_or("-"),
        );
        Ok(report)
    }

    /// Fase 1: cuentas de identidad y documentos de rol (merge)
    pub async fn seed_users(&self, report: &mut BootstrapReport) -> SeedResult<()> {
        for seed in SEED_USERS.iter() {
            let account = NewAccount::from_seed(seed, DEFAULT_PASSWORD);

            match self.identity.create_account(&account).await? {
                AccountOutcome::Created => {
                    info!("✅ Cuenta creada: {}", seed.email);
                    report.accounts_created += 1;
                }
                AccountOutcome::AlreadyExists => {
                    info!("ℹ️ La cuenta {} ya existe, solo se actualiza el rol", seed.email);
                    report.accounts_existing += 1;
                }
                AccountOutcome::Failed(reason) => {
                    error!("❌ No se pudo crear la cuenta {}: {}", seed.email, reason);
                    report.accounts_failed.push((seed.email.to_string(), reason));
                    continue;
                }
            }

            let role = UserRole::from_seed(seed, self.store.now().await?);
            self.store
                .upsert(USERS, seed.id, to_document(&role)?, WriteMode::Merge)
                .await?;
            report.roles_written += 1;
        }

        let emails: Vec<&str> = SEED_USERS.iter().map(|u| u.email).collect();
        info!("✅ Colección '{}' inicializada", USERS);
        info!("   Cuentas de ejemplo: {}", emails.join(", "));
        info!("   Contraseña por defecto: {}", DEFAULT_PASSWORD);
        Ok(())
    }

    /// Fase 2: ficha del camión (sobrescritura completa)
    pub async fn seed_vehicles(&self, report: &mut BootstrapReport) -> SeedResult<()> {
        let vehicle = seed_vehicle(self.store.now().await?);
        self.store
            .upsert(VEHICLES, &vehicle.id, to_document(&vehicle)?, WriteMode::Overwrite)
            .await?;
        report.vehicles_written += 1;

        info!("✅ Colección '{}' inicializada ({})", VEHICLES, vehicle.plate);
        Ok(())
    }

    /// Fase 3: socios (sobrescritura completa)
    pub async fn seed_partners(&self, report: &mut BootstrapReport) -> SeedResult<()> {
        let partners = seed_partners(self.store.now().await?);
        for partner in partners.iter() {
            self.store
                .upsert(PARTNERS, &partner.id, to_document(partner)?, WriteMode::Overwrite)
                .await?;
            report.partners_written += 1;
        }

        let names: Vec<&str> = partners.iter().map(|p| p.name.as_str()).collect();
        info!("✅ Colección '{}' inicializada ({})", PARTNERS, names.join(", "));
        Ok(())
    }

    /// Fase 4: una tarea pendiente para mañana, con clave generada
    pub async fn seed_tasks(&self, report: &mut BootstrapReport) -> SeedResult<()> {
        let now = self.store.now().await?;
        let task = seed_task(now, planned_date(now));
        let task_id = self.store.insert(TASKS, to_document(&task)?).await?;

        info!("✅ Colección '{}': tarea pendiente {} para {}", TASKS, task_id, task.planned_date);
        report.task_id = Some(task_id);
        report.planned_date = Some(task.planned_date);
        Ok(())
    }
}

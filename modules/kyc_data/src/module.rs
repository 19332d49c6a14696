//! Module lifecycle: connect, migrate, expose the repositories

use crate::config::Config;
use crate::domain::audit::{Clock, IdGenerator, SystemClock, UuidV4Generator};
use crate::infra::storage::migrations::Migrator;
use crate::infra::storage::Repositories;
use anyhow::{anyhow, Result};
use parking_lot::RwLock;
use sea_orm::{Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use std::sync::Arc;

/// KYC data module
pub struct KycDataModule {
    config: RwLock<Config>,
    db: RwLock<Option<Arc<DatabaseConnection>>>,
    repositories: RwLock<Option<Repositories>>,
    clock: Arc<dyn Clock>,
    ids: Arc<dyn IdGenerator>,
}

impl Default for KycDataModule {
    fn default() -> Self {
        Self::new(Arc::new(SystemClock), Arc::new(UuidV4Generator))
    }
}

impl KycDataModule {
    /// Module whose repositories use the given clock and id source
    pub fn new(clock: Arc<dyn Clock>, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            config: RwLock::new(Config::default()),
            db: RwLock::new(None),
            repositories: RwLock::new(None),
            clock,
            ids,
        }
    }

    pub async fn init(&self, cfg: Config) -> Result<()> {
        let conn = Database::connect(cfg.connect_options()).await?;
        let conn = Arc::new(conn);

        *self.db.write() = Some(conn.clone());
        let run_migrations = cfg.run_migrations;
        *self.config.write() = cfg;

        if run_migrations {
            self.migrate().await?;
        }

        let repos = Repositories::new(conn, self.clock.clone(), self.ids.clone());
        *self.repositories.write() = Some(repos);

        tracing::info!("KYC data module initialized");
        Ok(())
    }

    /// Apply pending migrations
    pub async fn migrate(&self) -> Result<()> {
        let conn = self.connection()?;
        Migrator::up(&*conn, None).await?;
        tracing::info!("KYC data migrations completed");
        Ok(())
    }

    pub fn repositories(&self) -> Result<Repositories> {
        self.repositories
            .read()
            .clone()
            .ok_or_else(|| anyhow!("KYC data module not initialized"))
    }

    pub fn config(&self) -> Config {
        self.config.read().clone()
    }

    fn connection(&self) -> Result<Arc<DatabaseConnection>> {
        self.db
            .read()
            .clone()
            .ok_or_else(|| anyhow!("KYC data module not initialized"))
    }
}

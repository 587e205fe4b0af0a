use std::sync::Arc;

use database_migration::{Migrator, MigratorTrait};
use domain_payroll::service::{
    CatalogService, EntryRecorderService, RateResolverService, ReportAggregatorService,
};
use service_payroll::{
    CatalogServiceImpl, EntryRecorderServiceImpl, RateResolverServiceImpl,
    ReportAggregatorServiceImpl,
};

use super::{
    config::LedgerConfig,
    database::{Database, OrmRepo},
};

/// Process-wide state. Services are handed out per request through [`Self::scoped`].
#[derive(Clone)]
pub struct ServiceProvider {
    pub config: LedgerConfig,
    pub database: Arc<Database>,
}

/// Services sharing one unit of work.
pub struct ServiceProviderScoped {
    pub catalog: Arc<dyn CatalogService>,
    pub rate_resolver: Arc<dyn RateResolverService>,
    pub entry_recorder: Arc<dyn EntryRecorderService>,
    pub report_aggregator: Arc<dyn ReportAggregatorService>,
}

impl ServiceProvider {
    /// Connects to the configured database and brings its schema up to date when
    /// `db.auto_migrate` is set.
    pub async fn build(config: LedgerConfig) -> anyhow::Result<Self> {
        let database = Database::new(&config.db.url).await?;
        if config.db.auto_migrate {
            Migrator::up(database.get_connection(), None).await?;
            tracing::info!("Database schema is up to date.");
        }
        Ok(Self::with_database(config, Arc::new(database)))
    }

    pub fn with_database(config: LedgerConfig, database: Arc<Database>) -> Self {
        Self { config, database }
    }

    pub fn scoped(&self) -> ServiceProviderScoped {
        let repo = Arc::new(OrmRepo::builder().db(self.database.clone()).build());
        let rate_resolver = Arc::new(
            RateResolverServiceImpl::builder()
                .worker_repo(repo.clone())
                .rate_repo(repo.clone())
                .build(),
        );
        ServiceProviderScoped {
            catalog: Arc::new(
                CatalogServiceImpl::builder()
                    .category_repo(repo.clone())
                    .worker_repo(repo.clone())
                    .operation_repo(repo.clone())
                    .rate_repo(repo.clone())
                    .order_repo(repo.clone())
                    .build(),
            ),
            entry_recorder: Arc::new(
                EntryRecorderServiceImpl::builder()
                    .order_repo(repo.clone())
                    .worker_repo(repo.clone())
                    .operation_repo(repo.clone())
                    .entry_repo(repo.clone())
                    .rate_resolver(rate_resolver.clone())
                    .build(),
            ),
            report_aggregator: Arc::new(
                ReportAggregatorServiceImpl::builder()
                    .entry_repo(repo.clone())
                    .order_repo(repo.clone())
                    .worker_repo(repo.clone())
                    .operation_repo(repo)
                    .build(),
            ),
            rate_resolver,
        }
    }
}

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use domain_payroll::{exception::PayrollException, model::vo::CatalogKind};
use sea_orm::{ConnectionTrait, DatabaseBackend, SqlErr, Statement, TransactionTrait};
use tokio::sync::Mutex;
use typed_builder::TypedBuilder;

use super::Database;

/// A buffered write and the unique key it may collide on.
pub struct PendingStatement {
    pub statement: Statement,
    pub kind: CatalogKind,
    pub key: String,
}

/// Unit of work over sea-orm. Reads go straight to the connection, writes are
/// buffered and committed together by [`OrmRepo::save_changed`].
///
/// Build one per request; the buffer is not meant to be shared between callers.
#[derive(TypedBuilder)]
pub struct OrmRepo {
    pub db: Arc<Database>,
    #[builder(default)]
    pub statements: Arc<Mutex<Vec<PendingStatement>>>,
    #[builder(default = AtomicBool::new(true))]
    pub can_drop: AtomicBool,
}

impl OrmRepo {
    pub fn backend(&self) -> DatabaseBackend {
        self.db.get_connection().get_database_backend()
    }

    pub async fn push(&self, statement: Statement, kind: CatalogKind, key: impl Into<String>) {
        let mut stmts = self.statements.lock().await;
        stmts.push(PendingStatement {
            statement,
            kind,
            key: key.into(),
        });
        self.can_drop.store(false, Ordering::Relaxed);
    }

    /// Runs every buffered statement in one transaction. A unique violation rolls
    /// everything back and comes out as [`PayrollException::DuplicateKey`].
    pub async fn save_changed(&self) -> anyhow::Result<bool> {
        if self.can_drop.load(Ordering::Relaxed) {
            return Ok(false);
        }
        let mut stmts = self.statements.lock().await;
        let trans = self.db.get_connection().begin().await?;
        for pending in stmts.iter() {
            if let Err(e) = trans.execute(pending.statement.clone()).await {
                trans.rollback().await?;
                self.can_drop.store(true, Ordering::Relaxed);
                if let Some(SqlErr::UniqueConstraintViolation(_)) = e.sql_err() {
                    let exception = PayrollException::DuplicateKey {
                        kind: pending.kind,
                        key: pending.key.to_owned(),
                    };
                    stmts.clear();
                    anyhow::bail!(exception);
                }
                stmts.clear();
                anyhow::bail!(e);
            }
        }
        trans.commit().await?;
        self.can_drop.store(true, Ordering::Relaxed);
        stmts.clear();
        Ok(true)
    }
}

impl Drop for OrmRepo {
    fn drop(&mut self) {
        if !self.can_drop.load(Ordering::Relaxed) {
            if let Ok(stmts) = self.statements.try_lock() {
                let sqls = stmts
                    .iter()
                    .map(|x| x.statement.to_string())
                    .collect::<Vec<String>>()
                    .join("\n");
                tracing::warn!("Unsaved sql statements dropped:\n{sqls}")
            }
        }
    }
}

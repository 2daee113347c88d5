use std::sync::Arc;

use chrono::Utc;
use partner_core_api::{ActorContext, AuditError};
use partner_core_db::audit::change_set::ChangeTracker;
use partner_core_db::audit::engine::AuditEngine;
use sqlx::{PgPool, Postgres, Transaction};
use tokio::sync::Mutex;

use crate::lookup::PgLookupSource;
use crate::repository::audit::audit_entry_repository::AuditEntryRepositoryImpl;

/// Shared handle to the transaction of one unit of work.
///
/// Every repository of a session executes on this transaction; `None`
/// means the transaction has been consumed by commit or rollback.
#[derive(Clone)]
pub struct Executor {
    pub tx: Arc<Mutex<Option<Transaction<'static, Postgres>>>>,
}

impl Executor {
    pub fn new(tx: Transaction<'static, Postgres>) -> Self {
        Self {
            tx: Arc::new(Mutex::new(Some(tx))),
        }
    }
}

/// One save call: one transaction, one actor, one audit pass.
///
/// Repositories built from this session share its executor and change
/// tracker. `commit` runs the audit pass over everything the tracker
/// recorded and appends the resulting entries to the same transaction
/// before committing it; if the pass fails, nothing commits. Dropping
/// the unit of work without committing rolls everything back, audit
/// rows included.
pub struct UnitOfWork {
    executor: Executor,
    tracker: Arc<ChangeTracker>,
    engine: Arc<AuditEngine>,
    actor: ActorContext,
}

impl UnitOfWork {
    pub async fn begin(
        pool: &PgPool,
        engine: Arc<AuditEngine>,
        actor: ActorContext,
    ) -> Result<Self, Box<dyn std::error::Error + Send + Sync>> {
        let tx = pool.begin().await?;
        tracing::debug!(actor_id = %actor.actor_id, "unit of work started");
        Ok(Self {
            executor: Executor::new(tx),
            tracker: Arc::new(ChangeTracker::new()),
            engine,
            actor,
        })
    }

    pub fn executor(&self) -> Executor {
        self.executor.clone()
    }

    pub fn tracker(&self) -> Arc<ChangeTracker> {
        self.tracker.clone()
    }

    pub fn actor(&self) -> &ActorContext {
        &self.actor
    }

    /// Runs the audit pass and commits the combined write set.
    ///
    /// The pass timestamp is taken once here; every entry of the pass
    /// shares it, together with the session actor.
    pub async fn commit(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let recorded_at = Utc::now();
        let changes = self.tracker.drain();

        if !changes.is_empty() {
            let lookup = PgLookupSource::new(self.executor.clone());
            let entries = self
                .engine
                .run(changes, &self.actor, recorded_at, &lookup)
                .await?;
            if !entries.is_empty() {
                let audit_repo = AuditEntryRepositoryImpl::new(self.executor.clone());
                audit_repo
                    .append(&entries)
                    .await
                    .map_err(|e| AuditError::Emission(e.to_string()))?;
                tracing::debug!(count = entries.len(), "audit entries emitted");
            }
        }

        let tx = {
            let mut guard = self.executor.tx.lock().await;
            guard.take().ok_or("Transaction has been consumed")?
        };
        tx.commit().await?;
        Ok(())
    }

    /// Explicitly discards the unit of work. Equivalent to dropping it,
    /// but surfaces rollback errors.
    pub async fn rollback(self) -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
        let tx = {
            let mut guard = self.executor.tx.lock().await;
            guard.take().ok_or("Transaction has been consumed")?
        };
        tx.rollback().await?;
        tracing::debug!("unit of work rolled back");
        Ok(())
    }
}

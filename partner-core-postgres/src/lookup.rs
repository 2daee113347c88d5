use async_trait::async_trait;
use partner_core_db::audit::resolver::{LookupSource, ReferenceKind};
use uuid::Uuid;

use crate::unit_of_work::Executor;

/// Point lookups for reference labels, executed on the session
/// transaction so resolved labels match the state the save sees.
pub struct PgLookupSource {
    executor: Executor,
}

impl PgLookupSource {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

#[async_trait]
impl LookupSource for PgLookupSource {
    async fn find_label(
        &self,
        reference: ReferenceKind,
        id: Uuid,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
        let sql = match reference {
            ReferenceKind::Partner => "SELECT name FROM partner WHERE id = $1",
            ReferenceKind::Site => "SELECT name FROM site WHERE id = $1",
            ReferenceKind::CommunicationType => "SELECT name FROM communication_type WHERE id = $1",
            ReferenceKind::CommunicationStatus => {
                "SELECT name FROM communication_status WHERE id = $1"
            }
            ReferenceKind::DocumentType => "SELECT name FROM document_type WHERE id = $1",
            ReferenceKind::User => "SELECT display_name FROM app_user WHERE id = $1",
        };
        let query = sqlx::query_scalar::<_, String>(sql).bind(id);

        let mut tx = self.executor.tx.lock().await;
        if let Some(transaction) = tx.as_mut() {
            Ok(query.fetch_optional(&mut **transaction).await?)
        } else {
            Err("Transaction has been consumed".into())
        }
    }
}

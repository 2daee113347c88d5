use partner_core_db::models::partner::SiteModel;
use std::collections::HashMap;
use std::error::Error;
use uuid::Uuid;

use crate::unit_of_work::Executor;
use crate::utils::TryFromRow;

pub(super) async fn load_batch_impl(
    executor: &Executor,
    ids: &[Uuid],
) -> Result<Vec<Option<SiteModel>>, Box<dyn Error + Send + Sync>> {
    if ids.is_empty() {
        return Ok(vec![]);
    }

    let query = sqlx::query(
        r#"
        SELECT id, partner_id, name, street, city, created_at, updated_at, row_version
        FROM site
        WHERE id = ANY($1)
        "#,
    )
    .bind(ids);

    let rows = {
        let mut tx = executor.tx.lock().await;
        if let Some(transaction) = tx.as_mut() {
            query.fetch_all(&mut **transaction).await?
        } else {
            return Err("Transaction has been consumed".into());
        }
    };

    let mut map: HashMap<Uuid, SiteModel> = HashMap::with_capacity(rows.len());
    for row in rows {
        let model = SiteModel::try_from_row(&row)?;
        map.insert(model.id, model);
    }

    Ok(ids.iter().map(|id| map.remove(id)).collect())
}

#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use heapless::String as HeaplessString;
    use partner_core_db::models::document::{DocumentModel, DocumentTypeModel};
    use partner_core_db::repository::create_batch::CreateBatch;
    use uuid::Uuid;

    use crate::postgres_repositories::SessionRepositories;

    pub fn create_test_document(
        partner_id: Uuid,
        document_type_id: Uuid,
        file_name: &str,
    ) -> DocumentModel {
        DocumentModel {
            id: Uuid::new_v4(),
            partner_id,
            document_type_id,
            file_name: HeaplessString::try_from(file_name).unwrap(),
            description: None,
            archived: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            row_version: 0,
        }
    }

    pub async fn seed_document_type(
        repos: &SessionRepositories,
        name: &str,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let document_type = DocumentTypeModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from(name).unwrap(),
            created_at: Utc::now(),
        };
        repos
            .document_type_repository
            .create_batch(vec![document_type.clone()])
            .await?;
        Ok(document_type.id)
    }
}

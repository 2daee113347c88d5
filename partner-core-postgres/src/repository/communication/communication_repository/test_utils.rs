#[cfg(test)]
pub mod test_utils {
    use chrono::{SubsecRound, Utc};
    use heapless::String as HeaplessString;
    use partner_core_db::models::communication::{
        CommunicationModel, CommunicationStatusModel, CommunicationTypeModel,
    };
    use partner_core_db::repository::create_batch::CreateBatch;
    use uuid::Uuid;

    use crate::postgres_repositories::SessionRepositories;

    pub fn create_test_communication(
        partner_id: Uuid,
        communication_type_id: Uuid,
        communication_status_id: Uuid,
        subject: &str,
    ) -> CommunicationModel {
        CommunicationModel {
            id: Uuid::new_v4(),
            partner_id,
            site_id: None,
            communication_type_id,
            communication_status_id,
            assigned_user_id: None,
            subject: HeaplessString::try_from(subject).unwrap(),
            details: None,
            occurred_at: Utc::now().trunc_subsecs(0),
            created_at: Utc::now(),
            updated_at: Utc::now(),
            row_version: 0,
        }
    }

    /// Seeds a "Phone call" type and an "Open" status, returning their ids.
    pub async fn seed_communication_lookups(
        repos: &SessionRepositories,
    ) -> Result<(Uuid, Uuid), Box<dyn std::error::Error + Send + Sync>> {
        let communication_type = CommunicationTypeModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from("Phone call").unwrap(),
            created_at: Utc::now(),
        };
        repos
            .communication_type_repository
            .create_batch(vec![communication_type.clone()])
            .await?;

        let status_id = seed_communication_status(repos, "Open").await?;
        Ok((communication_type.id, status_id))
    }

    pub async fn seed_communication_status(
        repos: &SessionRepositories,
        name: &str,
    ) -> Result<Uuid, Box<dyn std::error::Error + Send + Sync>> {
        let status = CommunicationStatusModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from(name).unwrap(),
            created_at: Utc::now(),
        };
        repos
            .communication_status_repository
            .create_batch(vec![status.clone()])
            .await?;
        Ok(status.id)
    }
}

#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use heapless::String as HeaplessString;
    use partner_core_db::models::partner::SiteModel;
    use uuid::Uuid;

    pub fn create_test_site(partner_id: Uuid, name: &str) -> SiteModel {
        SiteModel {
            id: Uuid::new_v4(),
            partner_id,
            name: HeaplessString::try_from(name).unwrap(),
            street: None,
            city: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            row_version: 0,
        }
    }
}

#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use heapless::String as HeaplessString;
    use partner_core_db::models::partner::PartnerModel;
    use uuid::Uuid;

    pub fn create_test_partner(name: &str) -> PartnerModel {
        PartnerModel {
            id: Uuid::new_v4(),
            name: HeaplessString::try_from(name).unwrap(),
            email: None,
            phone: None,
            street: None,
            city: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
            row_version: 0,
        }
    }
}

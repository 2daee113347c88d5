use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::registry::RecordKind;
use crate::audit::value::{Property, PropertyValue};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for business partners, the root of the relation
/// hierarchy. Sites, communications and documents all reference a
/// partner.
///
/// Audited: every field change except bookkeeping columns appears in
/// the audit trail.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PartnerModel {
    pub id: Uuid,

    /// Display name, also the label other records resolve to
    pub name: HeaplessString<100>,

    pub email: Option<HeaplessString<100>>,

    pub phone: Option<HeaplessString<30>>,

    pub street: Option<HeaplessString<100>>,

    pub city: Option<HeaplessString<50>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Concurrency token, bumped by every update
    pub row_version: i32,
}

impl Identifiable for PartnerModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for PartnerModel {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Partner
    }

    fn snapshot(&self) -> Vec<Property> {
        vec![
            Property::new("id", PropertyValue::Id(self.id)),
            Property::new("name", PropertyValue::text(&self.name)),
            Property::new("email", PropertyValue::opt_text(&self.email)),
            Property::new("phone", PropertyValue::opt_text(&self.phone)),
            Property::new("street", PropertyValue::opt_text(&self.street)),
            Property::new("city", PropertyValue::opt_text(&self.city)),
            Property::new("created_at", PropertyValue::timestamp(self.created_at)),
            Property::new("updated_at", PropertyValue::timestamp(self.updated_at)),
            Property::new("row_version", PropertyValue::Integer(self.row_version as i64)),
        ]
    }
}

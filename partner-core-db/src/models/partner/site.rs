use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::registry::RecordKind;
use crate::audit::value::{Property, PropertyValue};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for a partner's physical site. Communications can be
/// logged against a specific site.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SiteModel {
    pub id: Uuid,

    /// Owning partner
    pub partner_id: Uuid,

    pub name: HeaplessString<100>,

    pub street: Option<HeaplessString<100>>,

    pub city: Option<HeaplessString<50>>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Concurrency token, bumped by every update
    pub row_version: i32,
}

impl Identifiable for SiteModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for SiteModel {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Site
    }

    fn snapshot(&self) -> Vec<Property> {
        vec![
            Property::new("id", PropertyValue::Id(self.id)),
            Property::new("partner_id", PropertyValue::Id(self.partner_id)),
            Property::new("name", PropertyValue::text(&self.name)),
            Property::new("street", PropertyValue::opt_text(&self.street)),
            Property::new("city", PropertyValue::opt_text(&self.city)),
            Property::new("created_at", PropertyValue::timestamp(self.created_at)),
            Property::new("updated_at", PropertyValue::timestamp(self.updated_at)),
            Property::new("row_version", PropertyValue::Integer(self.row_version as i64)),
        ]
    }
}

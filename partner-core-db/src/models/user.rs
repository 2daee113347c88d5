use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::registry::RecordKind;
use crate::audit::value::{Property, PropertyValue};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for application users. Users act as audit actors and
/// as assignees on communications.
///
/// Deliberately NOT registered with the audit engine: user
/// administration is handled by the identity collaborator, and the
/// registry is a closed allow-list.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppUserModel {
    pub id: Uuid,
    pub display_name: HeaplessString<100>,
    pub email: HeaplessString<100>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for AppUserModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for AppUserModel {
    fn record_kind(&self) -> RecordKind {
        RecordKind::AppUser
    }

    fn snapshot(&self) -> Vec<Property> {
        vec![
            Property::new("id", PropertyValue::Id(self.id)),
            Property::new("display_name", PropertyValue::text(&self.display_name)),
            Property::new("email", PropertyValue::text(&self.email)),
            Property::new("created_at", PropertyValue::timestamp(self.created_at)),
        ]
    }
}

use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::registry::RecordKind;
use crate::audit::value::{Property, PropertyValue};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// Lookup table of communication statuses ("Open", "Resolved", ...).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationStatusModel {
    pub id: Uuid,
    pub name: HeaplessString<50>,
    pub created_at: DateTime<Utc>,
}

impl Identifiable for CommunicationStatusModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for CommunicationStatusModel {
    fn record_kind(&self) -> RecordKind {
        RecordKind::CommunicationStatus
    }

    fn snapshot(&self) -> Vec<Property> {
        vec![
            Property::new("id", PropertyValue::Id(self.id)),
            Property::new("name", PropertyValue::text(&self.name)),
            Property::new("created_at", PropertyValue::timestamp(self.created_at)),
        ]
    }
}

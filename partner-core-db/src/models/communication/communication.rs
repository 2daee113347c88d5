use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::registry::RecordKind;
use crate::audit::value::{Property, PropertyValue};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for one logged communication with a partner: a call,
/// a visit, a letter. Type and status are lookup-table references; site
/// and assigned user are optional.
///
/// The audit trail narrates reference fields through their resolved
/// display labels, so a status change reads "Status: Open → Resolved"
/// rather than as UUIDs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CommunicationModel {
    pub id: Uuid,

    pub partner_id: Uuid,

    /// Site the communication took place at, if any
    pub site_id: Option<Uuid>,

    pub communication_type_id: Uuid,

    pub communication_status_id: Uuid,

    /// User the follow-up is assigned to, if any
    pub assigned_user_id: Option<Uuid>,

    pub subject: HeaplessString<200>,

    pub details: Option<HeaplessString<500>>,

    /// When the communication took place
    pub occurred_at: DateTime<Utc>,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Concurrency token, bumped by every update
    pub row_version: i32,
}

impl Identifiable for CommunicationModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for CommunicationModel {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Communication
    }

    fn snapshot(&self) -> Vec<Property> {
        vec![
            Property::new("id", PropertyValue::Id(self.id)),
            Property::new("partner_id", PropertyValue::Id(self.partner_id)),
            Property::new("site_id", PropertyValue::id(self.site_id)),
            Property::new(
                "communication_type_id",
                PropertyValue::Id(self.communication_type_id),
            ),
            Property::new(
                "communication_status_id",
                PropertyValue::Id(self.communication_status_id),
            ),
            Property::new("assigned_user_id", PropertyValue::id(self.assigned_user_id)),
            Property::new("subject", PropertyValue::text(&self.subject)),
            Property::new("details", PropertyValue::opt_text(&self.details)),
            Property::new("occurred_at", PropertyValue::timestamp(self.occurred_at)),
            Property::new("created_at", PropertyValue::timestamp(self.created_at)),
            Property::new("updated_at", PropertyValue::timestamp(self.updated_at)),
            Property::new("row_version", PropertyValue::Integer(self.row_version as i64)),
        ]
    }
}

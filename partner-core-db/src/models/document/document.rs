use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::audit::registry::RecordKind;
use crate::audit::value::{Property, PropertyValue};
use crate::models::auditable::Auditable;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// Database model for a document filed against a partner. Stores only
/// the file name and metadata; the file payload lives in external
/// storage and is not this system's concern.
///
/// `archived` is a bookkeeping flag: flipping it alone produces no
/// audit entry.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DocumentModel {
    pub id: Uuid,

    pub partner_id: Uuid,

    pub document_type_id: Uuid,

    pub file_name: HeaplessString<255>,

    pub description: Option<HeaplessString<255>>,

    pub archived: bool,

    pub created_at: DateTime<Utc>,

    pub updated_at: DateTime<Utc>,

    /// Concurrency token, bumped by every update
    pub row_version: i32,
}

impl Identifiable for DocumentModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

impl Auditable for DocumentModel {
    fn record_kind(&self) -> RecordKind {
        RecordKind::Document
    }

    fn snapshot(&self) -> Vec<Property> {
        vec![
            Property::new("id", PropertyValue::Id(self.id)),
            Property::new("partner_id", PropertyValue::Id(self.partner_id)),
            Property::new("document_type_id", PropertyValue::Id(self.document_type_id)),
            Property::new("file_name", PropertyValue::text(&self.file_name)),
            Property::new("description", PropertyValue::opt_text(&self.description)),
            Property::new("archived", PropertyValue::Boolean(self.archived)),
            Property::new("created_at", PropertyValue::timestamp(self.created_at)),
            Property::new("updated_at", PropertyValue::timestamp(self.updated_at)),
            Property::new("row_version", PropertyValue::Integer(self.row_version as i64)),
        ]
    }
}

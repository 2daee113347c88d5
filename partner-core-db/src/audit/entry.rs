use chrono::{DateTime, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::identifiable::Identifiable;

use super::change_set::ChangeAction;
use super::registry::RecordKind;

/// # Documentation
/// - One immutable audit trail row, produced by the audit pass and
///   committed in the same transaction as the mutation it describes.
/// - All rows of one pass share the same actor and `recorded_at`.
/// - Append-only; the engine never updates or deletes entries.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuditEntryModel {
    pub id: Uuid,
    pub record_kind: RecordKind,
    pub record_id: Uuid,
    pub action: ChangeAction,
    pub actor_id: Uuid,
    pub actor_name: HeaplessString<100>,
    pub recorded_at: DateTime<Utc>,
    pub narrative: String,
}

impl Identifiable for AuditEntryModel {
    fn get_id(&self) -> Uuid {
        self.id
    }
}

use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::Type;

/// Domain record kinds known to the system.
///
/// Only kinds present in the [`AuditRegistry`] are visible to the audit
/// engine; the enum itself carries every kind so unregistered records can
/// still describe themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Type)]
#[sqlx(type_name = "record_kind", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecordKind {
    Partner,
    Site,
    Communication,
    CommunicationType,
    CommunicationStatus,
    Document,
    DocumentType,
    AppUser,
}

impl From<RecordKind> for &'static str {
    fn from(val: RecordKind) -> Self {
        match val {
            RecordKind::Partner => "PARTNER",
            RecordKind::Site => "SITE",
            RecordKind::Communication => "COMMUNICATION",
            RecordKind::CommunicationType => "COMMUNICATION_TYPE",
            RecordKind::CommunicationStatus => "COMMUNICATION_STATUS",
            RecordKind::Document => "DOCUMENT",
            RecordKind::DocumentType => "DOCUMENT_TYPE",
            RecordKind::AppUser => "APP_USER",
        }
    }
}

/// Static configuration of one audited record kind.
#[derive(Debug, Clone)]
pub struct AuditedKind {
    /// Human-readable kind label used in narratives and for ordering
    pub label: &'static str,
    /// Snapshot property holding the primary key
    pub pk_property: &'static str,
    /// Bookkeeping properties never diffed or narrated
    pub excluded_properties: HashSet<&'static str>,
}

impl AuditedKind {
    fn new(label: &'static str, pk_property: &'static str, excluded: &[&'static str]) -> Self {
        Self {
            label,
            pk_property,
            excluded_properties: excluded.iter().copied().collect(),
        }
    }
}

/// Closed allow-list of record kinds the audit engine inspects.
///
/// Built once at process start and shared read-only afterwards. A kind
/// absent from this registry is invisible to the engine: its mutations
/// are never diffed and never audited. New kinds must opt in here.
#[derive(Debug, Clone)]
pub struct AuditRegistry {
    kinds: HashMap<RecordKind, AuditedKind>,
}

const BOOKKEEPING: &[&str] = &["created_at", "updated_at", "row_version"];

impl AuditRegistry {
    pub fn new(kinds: HashMap<RecordKind, AuditedKind>) -> Self {
        Self { kinds }
    }

    /// The production registration set.
    pub fn standard() -> Self {
        let mut kinds = HashMap::new();
        kinds.insert(RecordKind::Partner, AuditedKind::new("partner", "id", BOOKKEEPING));
        kinds.insert(RecordKind::Site, AuditedKind::new("site", "id", BOOKKEEPING));
        kinds.insert(
            RecordKind::Communication,
            AuditedKind::new("communication", "id", BOOKKEEPING),
        );
        kinds.insert(
            RecordKind::Document,
            AuditedKind::new(
                "document",
                "id",
                &["created_at", "updated_at", "row_version", "archived"],
            ),
        );
        kinds.insert(
            RecordKind::CommunicationType,
            AuditedKind::new("communication type", "id", &["created_at"]),
        );
        kinds.insert(
            RecordKind::CommunicationStatus,
            AuditedKind::new("communication status", "id", &["created_at"]),
        );
        kinds.insert(
            RecordKind::DocumentType,
            AuditedKind::new("document type", "id", &["created_at"]),
        );
        Self::new(kinds)
    }

    pub fn is_audited(&self, kind: RecordKind) -> bool {
        self.kinds.contains_key(&kind)
    }

    pub fn entry(&self, kind: RecordKind) -> Option<&AuditedKind> {
        self.kinds.get(&kind)
    }

    pub fn label(&self, kind: RecordKind) -> Option<&'static str> {
        self.kinds.get(&kind).map(|entry| entry.label)
    }

    pub fn excluded_properties(&self, kind: RecordKind) -> Option<&HashSet<&'static str>> {
        self.kinds.get(&kind).map(|entry| &entry.excluded_properties)
    }

    pub fn registered_kinds(&self) -> impl Iterator<Item = RecordKind> + '_ {
        self.kinds.keys().copied()
    }
}

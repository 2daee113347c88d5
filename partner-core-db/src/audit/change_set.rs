use std::sync::Mutex;

use partner_core_api::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};
use sqlx::Type;
use uuid::Uuid;

use crate::models::auditable::Auditable;

use super::registry::{AuditRegistry, RecordKind};
use super::value::{property_value, Property, PropertyValue};

/// Classification of one pending record mutation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Type)]
#[sqlx(type_name = "audit_action", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ChangeAction {
    Created,
    Updated,
    Deleted,
}

impl From<ChangeAction> for &'static str {
    fn from(val: ChangeAction) -> Self {
        match val {
            ChangeAction::Created => "CREATED",
            ChangeAction::Updated => "UPDATED",
            ChangeAction::Deleted => "DELETED",
        }
    }
}

/// One raw entry of the change-tracking facility: kind, operation and
/// the before/after snapshots the write path captured.
#[derive(Debug, Clone)]
pub struct TrackedChange {
    pub kind: RecordKind,
    pub action: ChangeAction,
    pub original: Option<Vec<Property>>,
    pub current: Option<Vec<Property>>,
}

/// The change-tracking facility of one unit of work.
///
/// Repositories record every create, update and delete here; the audit
/// pass drains the tracker exactly once, immediately before commit.
/// Shared across the repositories of one session, never across sessions.
#[derive(Debug, Default)]
pub struct ChangeTracker {
    entries: Mutex<Vec<TrackedChange>>,
}

impl ChangeTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record_created<T: Auditable>(&self, item: &T) {
        self.push(TrackedChange {
            kind: item.record_kind(),
            action: ChangeAction::Created,
            original: None,
            current: Some(item.snapshot()),
        });
    }

    pub fn record_updated<T: Auditable>(&self, before: &T, after: &T) {
        self.push(TrackedChange {
            kind: after.record_kind(),
            action: ChangeAction::Updated,
            original: Some(before.snapshot()),
            current: Some(after.snapshot()),
        });
    }

    pub fn record_deleted<T: Auditable>(&self, before: &T) {
        self.push(TrackedChange {
            kind: before.record_kind(),
            action: ChangeAction::Deleted,
            original: Some(before.snapshot()),
            current: None,
        });
    }

    /// Takes every entry recorded so far, leaving the tracker empty.
    pub fn drain(&self) -> Vec<TrackedChange> {
        let mut entries = self.entries.lock().expect("change tracker lock poisoned");
        std::mem::take(&mut *entries)
    }

    pub fn is_empty(&self) -> bool {
        self.entries
            .lock()
            .expect("change tracker lock poisoned")
            .is_empty()
    }

    fn push(&self, change: TrackedChange) {
        self.entries
            .lock()
            .expect("change tracker lock poisoned")
            .push(change);
    }
}

/// One collected mutation of a registered kind, ready for diffing.
///
/// Lives only for the duration of one save call.
#[derive(Debug, Clone)]
pub struct PendingMutation {
    pub kind: RecordKind,
    pub record_id: Uuid,
    pub action: ChangeAction,
    /// Snapshot before the mutation; empty for created records
    pub original: Vec<Property>,
    /// Snapshot after the mutation; empty for deleted records
    pub current: Vec<Property>,
}

/// Filters tracked changes down to registered kinds and resolves each
/// record's primary key: from the current snapshot when present, else
/// from the original one (deletes carry no current snapshot).
///
/// The result is ordered by (kind label, record id); the sort is stable,
/// so entries of one kind keep the order the tracker recorded them in.
pub fn collect_pending(
    changes: Vec<TrackedChange>,
    registry: &AuditRegistry,
) -> AuditResult<Vec<PendingMutation>> {
    let mut pending = Vec::with_capacity(changes.len());

    for change in changes {
        let Some(entry) = registry.entry(change.kind) else {
            continue;
        };

        let record_id = [&change.current, &change.original]
            .into_iter()
            .flatten()
            .find_map(|snapshot| match property_value(snapshot, entry.pk_property) {
                PropertyValue::Id(id) => Some(id),
                _ => None,
            })
            .ok_or_else(|| {
                AuditError::Collection(format!(
                    "{} change carries no '{}' primary key",
                    entry.label, entry.pk_property
                ))
            })?;

        pending.push(PendingMutation {
            kind: change.kind,
            record_id,
            action: change.action,
            original: change.original.unwrap_or_default(),
            current: change.current.unwrap_or_default(),
        });
    }

    let labels: std::collections::HashMap<RecordKind, &str> = pending
        .iter()
        .map(|mutation| (mutation.kind, registry.label(mutation.kind).unwrap_or("")))
        .collect();
    pending.sort_by(|a, b| {
        (labels[&a.kind], a.record_id).cmp(&(labels[&b.kind], b.record_id))
    });

    Ok(pending)
}

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use partner_core_api::{ActorContext, AuditResult};
use uuid::Uuid;

use super::change_set::{collect_pending, ChangeAction, PendingMutation, TrackedChange};
use super::diff::{diff_snapshots, FieldDelta};
use super::entry::AuditEntryModel;
use super::narrative::{
    CommunicationNarrator, DocumentNarrator, GenericNarrator, KindNarrator, PartnerNarrator,
    SiteNarrator,
};
use super::registry::{AuditRegistry, RecordKind};
use super::resolver::{LookupResolver, LookupSource, ReferenceKind};
use super::value::property_value;

/// The entity-change audit engine.
///
/// Runs one pass per unit of work, synchronously inside the pre-commit
/// hook: collect the tracked changes, diff the updated records, resolve
/// reference labels, format narratives. The caller owns emission and
/// the commit; if this returns an error the commit must not happen.
///
/// The engine is immutable after construction and safe to share across
/// concurrent sessions; all per-pass state lives in the pass.
pub struct AuditEngine {
    registry: AuditRegistry,
    narrators: HashMap<RecordKind, Box<dyn KindNarrator>>,
}

impl AuditEngine {
    /// Builds an engine over the given registry. Registered kinds
    /// without a dedicated narrator fall back to [`GenericNarrator`].
    pub fn new(
        registry: AuditRegistry,
        mut narrators: HashMap<RecordKind, Box<dyn KindNarrator>>,
    ) -> Self {
        let missing: Vec<(RecordKind, &'static str)> = registry
            .registered_kinds()
            .filter(|kind| !narrators.contains_key(kind))
            .filter_map(|kind| registry.label(kind).map(|label| (kind, label)))
            .collect();
        for (kind, label) in missing {
            narrators.insert(kind, Box::new(GenericNarrator::new(label)));
        }
        Self {
            registry,
            narrators,
        }
    }

    /// The production configuration: the standard registry with the
    /// dedicated narrators wired in.
    pub fn standard() -> Self {
        let mut narrators: HashMap<RecordKind, Box<dyn KindNarrator>> = HashMap::new();
        narrators.insert(RecordKind::Partner, Box::new(PartnerNarrator));
        narrators.insert(RecordKind::Site, Box::new(SiteNarrator));
        narrators.insert(RecordKind::Communication, Box::new(CommunicationNarrator));
        narrators.insert(RecordKind::Document, Box::new(DocumentNarrator));
        Self::new(AuditRegistry::standard(), narrators)
    }

    pub fn registry(&self) -> &AuditRegistry {
        &self.registry
    }

    /// Executes one audit pass over the drained change set.
    ///
    /// Returns the entries to append to the unit of work: exactly one
    /// per created or deleted mutation of a registered kind, and one
    /// per updated mutation that still has deltas after exclusion
    /// filtering. All entries share `actor` and `recorded_at`.
    pub async fn run(
        &self,
        changes: Vec<TrackedChange>,
        actor: &ActorContext,
        recorded_at: DateTime<Utc>,
        source: &dyn LookupSource,
    ) -> AuditResult<Vec<AuditEntryModel>> {
        let pending = collect_pending(changes, &self.registry)?;

        // Diffing: decide which mutations produce entries and which
        // references their narratives will need.
        let mut prepared: Vec<(PendingMutation, Vec<FieldDelta>)> = Vec::new();
        let mut wanted: Vec<(ReferenceKind, Uuid)> = Vec::new();

        for mutation in pending {
            let Some(narrator) = self.narrators.get(&mutation.kind) else {
                continue;
            };
            match mutation.action {
                ChangeAction::Updated => {
                    let Some(excluded) = self.registry.excluded_properties(mutation.kind) else {
                        continue;
                    };
                    let deltas = diff_snapshots(&mutation.original, &mutation.current, excluded);
                    if deltas.is_empty() {
                        continue;
                    }
                    for delta in &deltas {
                        if let Some(reference) = narrator.reference_kind_of(delta.property) {
                            wanted.extend(delta.old.as_id().map(|id| (reference, id)));
                            wanted.extend(delta.new.as_id().map(|id| (reference, id)));
                        }
                    }
                    prepared.push((mutation, deltas));
                }
                ChangeAction::Created | ChangeAction::Deleted => {
                    let snapshot = match mutation.action {
                        ChangeAction::Created => &mutation.current,
                        _ => &mutation.original,
                    };
                    for rule in narrator.rules() {
                        if let Some(reference) = rule.reference {
                            wanted.extend(
                                property_value(snapshot, rule.property)
                                    .as_id()
                                    .map(|id| (reference, id)),
                            );
                        }
                    }
                    prepared.push((mutation, Vec::new()));
                }
            }
        }

        // Resolving: one concurrent batch, joined before formatting.
        let mut resolver = LookupResolver::new();
        resolver.resolve_batch(&wanted, source).await?;

        // Formatting.
        let mut entries = Vec::with_capacity(prepared.len());
        for (mutation, mut deltas) in prepared {
            let Some(narrator) = self.narrators.get(&mutation.kind) else {
                continue;
            };
            let narrative = match mutation.action {
                ChangeAction::Created => narrator.format_created(&mutation, &resolver),
                ChangeAction::Deleted => narrator.format_deleted(&mutation, &resolver),
                ChangeAction::Updated => {
                    for delta in &mut deltas {
                        if let Some(reference) = narrator.reference_kind_of(delta.property) {
                            delta.old_label = Some(resolver.label_for(reference, &delta.old));
                            delta.new_label = Some(resolver.label_for(reference, &delta.new));
                        }
                    }
                    narrator.format_updated(&deltas)
                }
            };
            entries.push(AuditEntryModel {
                id: Uuid::new_v4(),
                record_kind: mutation.kind,
                record_id: mutation.record_id,
                action: mutation.action,
                actor_id: actor.actor_id,
                actor_name: actor.display_name.clone(),
                recorded_at,
                narrative,
            });
        }

        Ok(entries)
    }
}

use super::change_set::PendingMutation;
use super::diff::FieldDelta;
use super::resolver::{LookupResolver, ReferenceKind};
use super::value::{property_value, Property};

/// One row of a narrator's property table: how a property is displayed
/// and, for foreign keys, which reference kind resolves it.
#[derive(Debug, Clone, Copy)]
pub struct PropertyRule {
    pub property: &'static str,
    pub display: &'static str,
    pub reference: Option<ReferenceKind>,
}

const fn plain(property: &'static str, display: &'static str) -> PropertyRule {
    PropertyRule {
        property,
        display,
        reference: None,
    }
}

const fn reference(
    property: &'static str,
    display: &'static str,
    kind: ReferenceKind,
) -> PropertyRule {
    PropertyRule {
        property,
        display,
        reference: Some(kind),
    }
}

/// Per-kind narrative strategy.
///
/// One narrator per registered kind, selected at dispatch time. Each
/// dedicated narrator is driven by its property table; adding a field
/// means adding a table row, not touching the diff engine.
pub trait KindNarrator: Send + Sync {
    /// The property table driving translation and reference resolution
    fn rules(&self) -> &[PropertyRule];

    /// Display name for a property; `None` falls back to the raw name
    fn translate_property(&self, property: &str) -> Option<&'static str> {
        self.rules()
            .iter()
            .find(|rule| rule.property == property)
            .map(|rule| rule.display)
    }

    /// Reference kind of a foreign-key property, if it is one
    fn reference_kind_of(&self, property: &str) -> Option<ReferenceKind> {
        self.rules()
            .iter()
            .find(|rule| rule.property == property)
            .and_then(|rule| rule.reference)
    }

    fn format_created(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String;

    fn format_deleted(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String;

    /// One clause per delta, semicolon-joined, in delta order.
    fn format_updated(&self, deltas: &[FieldDelta]) -> String {
        deltas
            .iter()
            .map(|delta| self.clause(delta))
            .collect::<Vec<_>>()
            .join("; ")
    }

    fn clause(&self, delta: &FieldDelta) -> String {
        let display = self
            .translate_property(delta.property)
            .unwrap_or(delta.property);
        let old = delta
            .old_label
            .clone()
            .unwrap_or_else(|| delta.old.to_display());
        let new = delta
            .new_label
            .clone()
            .unwrap_or_else(|| delta.new.to_display());
        format!("{display}: {old} → {new}")
    }
}

fn quoted_text(snapshot: &[Property], name: &str) -> String {
    property_value(snapshot, name).to_display()
}

fn resolved(
    snapshot: &[Property],
    name: &str,
    reference: ReferenceKind,
    lookups: &LookupResolver,
) -> String {
    lookups.label_for(reference, &property_value(snapshot, name))
}

pub struct PartnerNarrator;

const PARTNER_RULES: &[PropertyRule] = &[
    plain("name", "Name"),
    plain("email", "Email"),
    plain("phone", "Phone"),
    plain("street", "Street"),
    plain("city", "City"),
];

impl KindNarrator for PartnerNarrator {
    fn rules(&self) -> &[PropertyRule] {
        PARTNER_RULES
    }

    fn format_created(&self, mutation: &PendingMutation, _lookups: &LookupResolver) -> String {
        format!("Created partner \"{}\"", quoted_text(&mutation.current, "name"))
    }

    fn format_deleted(&self, mutation: &PendingMutation, _lookups: &LookupResolver) -> String {
        format!("Deleted partner \"{}\"", quoted_text(&mutation.original, "name"))
    }
}

pub struct SiteNarrator;

const SITE_RULES: &[PropertyRule] = &[
    reference("partner_id", "Partner", ReferenceKind::Partner),
    plain("name", "Name"),
    plain("street", "Street"),
    plain("city", "City"),
];

impl KindNarrator for SiteNarrator {
    fn rules(&self) -> &[PropertyRule] {
        SITE_RULES
    }

    fn format_created(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String {
        format!(
            "Created site \"{}\" for partner {}",
            quoted_text(&mutation.current, "name"),
            resolved(&mutation.current, "partner_id", ReferenceKind::Partner, lookups),
        )
    }

    fn format_deleted(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String {
        format!(
            "Deleted site \"{}\" of partner {}",
            quoted_text(&mutation.original, "name"),
            resolved(&mutation.original, "partner_id", ReferenceKind::Partner, lookups),
        )
    }
}

pub struct CommunicationNarrator;

const COMMUNICATION_RULES: &[PropertyRule] = &[
    reference("communication_type_id", "Type", ReferenceKind::CommunicationType),
    reference("communication_status_id", "Status", ReferenceKind::CommunicationStatus),
    reference("partner_id", "Partner", ReferenceKind::Partner),
    reference("site_id", "Site", ReferenceKind::Site),
    reference("assigned_user_id", "Assigned to", ReferenceKind::User),
    plain("subject", "Subject"),
    plain("details", "Details"),
    plain("occurred_at", "Occurred at"),
];

impl KindNarrator for CommunicationNarrator {
    fn rules(&self) -> &[PropertyRule] {
        COMMUNICATION_RULES
    }

    fn format_created(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String {
        let snapshot = &mutation.current;
        format!(
            "Created {} communication \"{}\" for {} at {} with status {}",
            resolved(snapshot, "communication_type_id", ReferenceKind::CommunicationType, lookups),
            quoted_text(snapshot, "subject"),
            resolved(snapshot, "partner_id", ReferenceKind::Partner, lookups),
            resolved(snapshot, "site_id", ReferenceKind::Site, lookups),
            resolved(snapshot, "communication_status_id", ReferenceKind::CommunicationStatus, lookups),
        )
    }

    fn format_deleted(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String {
        let snapshot = &mutation.original;
        format!(
            "Deleted {} communication \"{}\" of partner {}",
            resolved(snapshot, "communication_type_id", ReferenceKind::CommunicationType, lookups),
            quoted_text(snapshot, "subject"),
            resolved(snapshot, "partner_id", ReferenceKind::Partner, lookups),
        )
    }
}

pub struct DocumentNarrator;

const DOCUMENT_RULES: &[PropertyRule] = &[
    reference("document_type_id", "Type", ReferenceKind::DocumentType),
    reference("partner_id", "Partner", ReferenceKind::Partner),
    plain("file_name", "File name"),
    plain("description", "Description"),
];

impl KindNarrator for DocumentNarrator {
    fn rules(&self) -> &[PropertyRule] {
        DOCUMENT_RULES
    }

    fn format_created(&self, mutation: &PendingMutation, lookups: &LookupResolver) -> String {
        let snapshot = &mutation.current;
        format!(
            "Created {} document \"{}\" for partner {}",
            resolved(snapshot, "document_type_id", ReferenceKind::DocumentType, lookups),
            quoted_text(snapshot, "file_name"),
            resolved(snapshot, "partner_id", ReferenceKind::Partner, lookups),
        )
    }

    fn format_deleted(&self, mutation: &PendingMutation, _lookups: &LookupResolver) -> String {
        format!(
            "Deleted document \"{}\"",
            quoted_text(&mutation.original, "file_name")
        )
    }
}

/// Fallback narrator for registered kinds without a dedicated strategy
/// (the lookup tables). Narrates raw property names and wraps updates
/// in a generic sentence.
pub struct GenericNarrator {
    label: &'static str,
}

impl GenericNarrator {
    pub fn new(label: &'static str) -> Self {
        Self { label }
    }
}

impl KindNarrator for GenericNarrator {
    fn rules(&self) -> &[PropertyRule] {
        &[]
    }

    fn format_created(&self, _mutation: &PendingMutation, _lookups: &LookupResolver) -> String {
        format!("Created {}", self.label)
    }

    fn format_deleted(&self, _mutation: &PendingMutation, _lookups: &LookupResolver) -> String {
        format!("Deleted {}", self.label)
    }

    fn format_updated(&self, deltas: &[FieldDelta]) -> String {
        let clauses = deltas
            .iter()
            .map(|delta| self.clause(delta))
            .collect::<Vec<_>>()
            .join("; ");
        format!("Updated {} ({clauses})", self.label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audit::change_set::ChangeAction;
    use crate::audit::registry::RecordKind;
    use crate::audit::value::PropertyValue;
    use uuid::Uuid;

    fn delta(property: &'static str, old: PropertyValue, new: PropertyValue) -> FieldDelta {
        FieldDelta {
            property,
            old,
            new,
            old_label: None,
            new_label: None,
        }
    }

    #[test]
    fn test_updated_clause_uses_translated_name_and_labels() {
        let narrator = CommunicationNarrator;
        let mut status = delta(
            "communication_status_id",
            PropertyValue::Id(Uuid::from_u128(1)),
            PropertyValue::Id(Uuid::from_u128(3)),
        );
        status.old_label = Some("Open".into());
        status.new_label = Some("Resolved".into());

        assert_eq!(narrator.format_updated(&[status]), "Status: Open → Resolved");
    }

    #[test]
    fn test_untranslated_property_keeps_raw_name() {
        let narrator = PartnerNarrator;
        let d = delta(
            "vat_number",
            PropertyValue::Text("DE1".into()),
            PropertyValue::Text("DE2".into()),
        );
        assert_eq!(narrator.format_updated(&[d]), "vat_number: DE1 → DE2");
    }

    #[test]
    fn test_clauses_join_with_semicolons_in_order() {
        let narrator = PartnerNarrator;
        let deltas = vec![
            delta(
                "name",
                PropertyValue::Text("Acme".into()),
                PropertyValue::Text("Acme Corp".into()),
            ),
            delta(
                "city",
                PropertyValue::Null,
                PropertyValue::Text("Hamburg".into()),
            ),
        ];
        assert_eq!(
            narrator.format_updated(&deltas),
            "Name: Acme → Acme Corp; City: — → Hamburg"
        );
    }

    #[test]
    fn test_partner_creation_sentence() {
        let narrator = PartnerNarrator;
        let mutation = PendingMutation {
            kind: RecordKind::Partner,
            record_id: Uuid::from_u128(1),
            action: ChangeAction::Created,
            original: Vec::new(),
            current: vec![Property::new("name", PropertyValue::Text("Acme".into()))],
        };
        assert_eq!(
            narrator.format_created(&mutation, &LookupResolver::new()),
            "Created partner \"Acme\""
        );
    }

    #[test]
    fn test_generic_narrator_wraps_updates() {
        let narrator = GenericNarrator::new("communication status");
        let d = delta(
            "name",
            PropertyValue::Text("Open".into()),
            PropertyValue::Text("In progress".into()),
        );
        assert_eq!(
            narrator.format_updated(&[d]),
            "Updated communication status (name: Open → In progress)"
        );
        assert!(narrator.translate_property("name").is_none());
    }

    #[test]
    fn test_reference_table_drives_resolution_kinds() {
        let narrator = CommunicationNarrator;
        assert_eq!(
            narrator.reference_kind_of("communication_status_id"),
            Some(ReferenceKind::CommunicationStatus)
        );
        assert_eq!(narrator.reference_kind_of("subject"), None);
    }
}

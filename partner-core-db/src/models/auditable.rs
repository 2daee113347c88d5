use crate::audit::registry::RecordKind;
use crate::audit::value::Property;

use super::identifiable::Identifiable;

/// Trait for entities whose saves are captured by the change audit engine
pub trait Auditable: Identifiable {
    /// Returns the record kind this entity is registered under
    fn record_kind(&self) -> RecordKind;

    /// Returns the property snapshot used for field-level diffing,
    /// in field declaration order
    fn snapshot(&self) -> Vec<Property>;
}

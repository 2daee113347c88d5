use std::collections::HashSet;

use super::value::{property_value, Property, PropertyValue};

/// One changed, non-excluded property of an updated record.
///
/// `old_label`/`new_label` are filled during the resolving phase for
/// properties that are foreign-key references; plain properties keep
/// `None` and render their raw normalized value.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldDelta {
    pub property: &'static str,
    pub old: PropertyValue,
    pub new: PropertyValue,
    pub old_label: Option<String>,
    pub new_label: Option<String>,
}

/// Computes the field deltas between two snapshots of the same record.
///
/// Properties are walked in current-snapshot (declaration) order, which
/// fixes clause order in the narrative. A property missing from the
/// original snapshot reads as `Null`, so values that were never set and
/// values explicitly cleared compare consistently. Comparison is typed
/// equality; display normalization happens later.
pub fn diff_snapshots(
    original: &[Property],
    current: &[Property],
    excluded: &HashSet<&'static str>,
) -> Vec<FieldDelta> {
    let mut deltas = Vec::new();

    for property in current {
        if excluded.contains(property.name) {
            continue;
        }
        let old = property_value(original, property.name);
        if old != property.value {
            deltas.push(FieldDelta {
                property: property.name,
                old,
                new: property.value.clone(),
                old_label: None,
                new_label: None,
            });
        }
    }

    deltas
}

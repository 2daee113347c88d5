use chrono::{DateTime, SubsecRound, Utc};
use heapless::String as HeaplessString;
use uuid::Uuid;

/// Display text used wherever a value is absent: unset references,
/// cleared optional fields.
pub const UNSET_LABEL: &str = "—";

/// A typed property value captured in a record snapshot.
///
/// Values are compared as typed values, not as strings; string
/// normalization happens only when a narrative is rendered. Absence is
/// always `Null`, so a cleared optional field and a never-set field
/// compare equal.
#[derive(Debug, Clone, PartialEq)]
pub enum PropertyValue {
    Null,
    Text(String),
    Id(Uuid),
    Integer(i64),
    Boolean(bool),
    Timestamp(DateTime<Utc>),
}

impl PropertyValue {
    pub fn text<const N: usize>(value: &HeaplessString<N>) -> Self {
        PropertyValue::Text(value.as_str().to_string())
    }

    pub fn opt_text<const N: usize>(value: &Option<HeaplessString<N>>) -> Self {
        match value {
            Some(value) => PropertyValue::Text(value.as_str().to_string()),
            None => PropertyValue::Null,
        }
    }

    /// A reference value; `None` and the nil UUID both normalize to `Null`.
    pub fn id(value: Option<Uuid>) -> Self {
        match value {
            Some(id) if !id.is_nil() => PropertyValue::Id(id),
            _ => PropertyValue::Null,
        }
    }

    /// A timestamp, normalized to microseconds (the storage precision)
    /// so a value that round-tripped through the store never diffs
    /// against its in-memory twin.
    pub fn timestamp(value: DateTime<Utc>) -> Self {
        PropertyValue::Timestamp(value.round_subsecs(6))
    }

    pub fn as_id(&self) -> Option<Uuid> {
        match self {
            PropertyValue::Id(id) => Some(*id),
            _ => None,
        }
    }

    /// String-normalized rendering used in narratives.
    pub fn to_display(&self) -> String {
        match self {
            PropertyValue::Null => UNSET_LABEL.to_string(),
            PropertyValue::Text(value) => value.clone(),
            PropertyValue::Id(id) => id.to_string(),
            PropertyValue::Integer(value) => value.to_string(),
            PropertyValue::Boolean(value) => value.to_string(),
            PropertyValue::Timestamp(value) => value.format("%Y-%m-%d %H:%M:%S UTC").to_string(),
        }
    }
}

/// One named entry of a record snapshot.
#[derive(Debug, Clone, PartialEq)]
pub struct Property {
    pub name: &'static str,
    pub value: PropertyValue,
}

impl Property {
    pub fn new(name: &'static str, value: PropertyValue) -> Self {
        Self { name, value }
    }
}

/// Returns the value of a named property, `Null` if the snapshot does
/// not carry it.
pub fn property_value(snapshot: &[Property], name: &str) -> PropertyValue {
    snapshot
        .iter()
        .find(|property| property.name == name)
        .map(|property| property.value.clone())
        .unwrap_or(PropertyValue::Null)
}

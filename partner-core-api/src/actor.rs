use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// The identity on whose behalf a unit of work runs.
///
/// Supplied by the identity collaborator at session start; every audit
/// entry produced within the session carries this actor unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActorContext {
    pub actor_id: Uuid,
    pub display_name: HeaplessString<100>,
}

impl ActorContext {
    pub fn new(actor_id: Uuid, display_name: &str) -> Result<Self, crate::ApiError> {
        let display_name = HeaplessString::try_from(display_name).map_err(|_| {
            crate::ApiError::ValidationError("Actor display name too long (max 100 chars)".into())
        })?;
        Ok(Self {
            actor_id,
            display_name,
        })
    }

    /// Fixed sentinel used when no authenticated actor is present
    /// (startup tasks, scheduled jobs).
    pub fn system() -> Self {
        Self {
            actor_id: Uuid::nil(),
            display_name: HeaplessString::try_from("system").unwrap(),
        }
    }

    pub fn is_system(&self) -> bool {
        self.actor_id.is_nil()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_system_actor_is_nil() {
        let actor = ActorContext::system();
        assert!(actor.is_system());
        assert_eq!(actor.display_name.as_str(), "system");
    }

    #[test]
    fn test_actor_name_length_is_bounded() {
        let long_name = "x".repeat(101);
        assert!(ActorContext::new(Uuid::new_v4(), &long_name).is_err());
    }
}

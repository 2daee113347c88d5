use std::collections::HashMap;

use async_trait::async_trait;
use futures::future::try_join_all;
use partner_core_api::{AuditError, AuditResult};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::value::{PropertyValue, UNSET_LABEL};

/// Categories of foreign-key targets a narrative can name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReferenceKind {
    Partner,
    Site,
    CommunicationType,
    CommunicationStatus,
    DocumentType,
    User,
}

impl ReferenceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReferenceKind::Partner => "partner",
            ReferenceKind::Site => "site",
            ReferenceKind::CommunicationType => "communication_type",
            ReferenceKind::CommunicationStatus => "communication_status",
            ReferenceKind::DocumentType => "document_type",
            ReferenceKind::User => "user",
        }
    }
}

/// Read-only point-lookup capability of the backing store.
///
/// `Ok(None)` is a miss (the row does not exist) and is absorbed into a
/// fallback label; `Err` is a store failure and aborts the audit pass.
#[async_trait]
pub trait LookupSource: Send + Sync {
    async fn find_label(
        &self,
        reference: ReferenceKind,
        id: Uuid,
    ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>>;
}

/// Pass-scoped resolver of reference ids to display labels.
///
/// The cache lives exactly as long as one audit pass, so a label can
/// never go stale across transactions; within the pass the same
/// reference is queried at most once.
#[derive(Debug, Default)]
pub struct LookupResolver {
    cache: HashMap<(ReferenceKind, Uuid), String>,
}

impl LookupResolver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolves every not-yet-cached `(reference, id)` pair as one
    /// concurrent batch of point queries, joined before any formatting
    /// starts. Unset ids never reach the store. A miss caches the
    /// `"#<id>"` fallback; a store error aborts the pass.
    pub async fn resolve_batch(
        &mut self,
        wanted: &[(ReferenceKind, Uuid)],
        source: &dyn LookupSource,
    ) -> AuditResult<()> {
        let mut batch: Vec<(ReferenceKind, Uuid)> = Vec::new();
        for &(reference, id) in wanted {
            if id.is_nil()
                || self.cache.contains_key(&(reference, id))
                || batch.contains(&(reference, id))
            {
                continue;
            }
            batch.push((reference, id));
        }

        let lookups = batch.into_iter().map(|(reference, id)| async move {
            match source.find_label(reference, id).await {
                Ok(label) => Ok((reference, id, label)),
                Err(source_err) => Err(AuditError::LookupQuery {
                    reference: reference.as_str(),
                    id,
                    source: source_err,
                }),
            }
        });

        for (reference, id, label) in try_join_all(lookups).await? {
            self.cache
                .insert((reference, id), label.unwrap_or_else(|| format!("#{id}")));
        }

        Ok(())
    }

    /// Display label for a reference value: the resolved label, the
    /// `"#<id>"` fallback for an unresolved row, or the fixed unset
    /// placeholder for a null/nil value.
    pub fn label_for(&self, reference: ReferenceKind, value: &PropertyValue) -> String {
        match value.as_id() {
            Some(id) => self
                .cache
                .get(&(reference, id))
                .cloned()
                .unwrap_or_else(|| format!("#{id}")),
            None => UNSET_LABEL.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Lookup stub that answers from a fixed table and counts queries.
    pub(crate) struct TableSource {
        labels: HashMap<(ReferenceKind, Uuid), String>,
        pub calls: AtomicUsize,
        pub fail: bool,
    }

    impl TableSource {
        pub(crate) fn new(entries: &[(ReferenceKind, Uuid, &str)]) -> Self {
            Self {
                labels: entries
                    .iter()
                    .map(|(reference, id, label)| ((*reference, *id), label.to_string()))
                    .collect(),
                calls: AtomicUsize::new(0),
                fail: false,
            }
        }
    }

    #[async_trait]
    impl LookupSource for TableSource {
        async fn find_label(
            &self,
            reference: ReferenceKind,
            id: Uuid,
        ) -> Result<Option<String>, Box<dyn std::error::Error + Send + Sync>> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.fail {
                return Err("connection reset".into());
            }
            Ok(self.labels.get(&(reference, id)).cloned())
        }
    }

    #[tokio::test]
    async fn test_repeated_references_query_once() {
        let id = Uuid::from_u128(42);
        let source = TableSource::new(&[(ReferenceKind::Partner, id, "Acme")]);
        let mut resolver = LookupResolver::new();

        resolver
            .resolve_batch(
                &[
                    (ReferenceKind::Partner, id),
                    (ReferenceKind::Partner, id),
                    (ReferenceKind::Partner, id),
                ],
                &source,
            )
            .await
            .unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            resolver.label_for(ReferenceKind::Partner, &PropertyValue::Id(id)),
            "Acme"
        );
    }

    #[tokio::test]
    async fn test_unset_ids_are_never_queried() {
        let source = TableSource::new(&[]);
        let mut resolver = LookupResolver::new();

        resolver
            .resolve_batch(&[(ReferenceKind::Site, Uuid::nil())], &source)
            .await
            .unwrap();

        assert_eq!(source.calls.load(Ordering::SeqCst), 0);
        assert_eq!(
            resolver.label_for(ReferenceKind::Site, &PropertyValue::Null),
            UNSET_LABEL
        );
    }

    #[tokio::test]
    async fn test_miss_resolves_to_hash_fallback() {
        let missing = Uuid::from_u128(999);
        let source = TableSource::new(&[]);
        let mut resolver = LookupResolver::new();

        resolver
            .resolve_batch(&[(ReferenceKind::CommunicationStatus, missing)], &source)
            .await
            .unwrap();

        assert_eq!(
            resolver.label_for(ReferenceKind::CommunicationStatus, &PropertyValue::Id(missing)),
            format!("#{missing}")
        );
    }

    #[tokio::test]
    async fn test_store_failure_aborts_the_pass() {
        let mut source = TableSource::new(&[]);
        source.fail = true;
        let mut resolver = LookupResolver::new();

        let result = resolver
            .resolve_batch(&[(ReferenceKind::User, Uuid::from_u128(5))], &source)
            .await;

        assert!(matches!(result, Err(AuditError::LookupQuery { .. })));
    }

    #[test]
    fn test_cache_is_scoped_to_the_resolver() {
        // A fresh resolver knows nothing; a stale cross-pass cache
        // would resolve this to a label.
        let resolver = LookupResolver::new();
        let id = Uuid::from_u128(42);
        assert_eq!(
            resolver.label_for(ReferenceKind::Partner, &PropertyValue::Id(id)),
            format!("#{id}")
        );
    }
}

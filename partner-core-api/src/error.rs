use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Internal error: {0}")]
    InternalError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}

pub type ApiResult<T> = Result<T, ApiError>;

/// Failure taxonomy of one audit pass.
///
/// Recoverable conditions (a referenced row that no longer exists, a
/// property without a display translation) never appear here: they are
/// absorbed into fallback text inside the pass. Every variant of this
/// enum aborts the whole save; the triggering transaction must not
/// commit once one is raised.
#[derive(Error, Debug)]
pub enum AuditError {
    /// The change-tracking facility could not be enumerated into
    /// pending mutations.
    #[error("Change collection failed: {0}")]
    Collection(String),

    /// The store itself errored during a reference resolution query.
    /// Distinct from a miss, which resolves to a fallback label.
    #[error("Lookup query failed for {reference} {id}: {source}")]
    LookupQuery {
        reference: &'static str,
        id: Uuid,
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Appending audit rows to the unit of work failed.
    #[error("Audit emission failed: {0}")]
    Emission(String),
}

pub type AuditResult<T> = Result<T, AuditError>;

//! Error taxonomy shared by every service in the crate.
//!
//! Repositories stay silent about missing rows (they return `Option` or an
//! empty collection); services translate absence and policy failures into
//! the variants here. Messages are complete sentences a caller can surface
//! directly.

use thiserror::Error;

/// Failure modes reported by the service layer.
#[derive(Error, Debug)]
pub enum Error {
    /// The addressed entity does not exist, or it exists but must not be
    /// revealed to this viewer. Read paths for non-owners collapse access
    /// failures into this variant so existence never leaks.
    #[error("{0}")]
    NotFound(String),

    /// The entity exists and the actor may know it exists, but lacks the
    /// required access level. Only raised on paths where the actor already
    /// owns the surrounding context.
    #[error("{0}")]
    Denied(String),

    /// Malformed input: empty required fields, negative identifiers, values
    /// outside the accepted range.
    #[error("{0}")]
    Validation(String),

    /// A uniqueness or idempotency rule was violated: duplicate username,
    /// email, slug, or an already-present relation.
    #[error("{0}")]
    Conflict(String),

    /// The underlying store failed; the active transaction has been rolled
    /// back and the whole operation must be treated as not having happened.
    #[error(transparent)]
    Db(#[from] sea_orm::DbErr),
}

/// Lets unit tests in this crate use `?` on crate results inside functions
/// returning `Result<_, TestError>`. The `cfg(test)` build of this library is
/// a distinct crate instance from the `curio` that `curio-test-utils` links
/// against, so the `#[from]` conversion defined there does not cover the
/// `Error` type seen here.
#[cfg(test)]
impl From<Error> for curio_test_utils::TestError {
    fn from(error: Error) -> Self {
        Self::DbErr(sea_orm::DbErr::Custom(error.to_string()))
    }
}

use crate::types::MovieId;

/// Domain error for movie store operations.
///
/// The store has exactly one failure mode: a lookup for an id that is not in
/// the collection. `delete` and `update` surface this variant unchanged when
/// their target id is missing. The display string is part of the API
/// contract and is asserted verbatim by tests.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Movie with ID {id} not found.")]
    NotFound { id: MovieId },
}

//! Normalisation of id lists before they are bound as array parameters.

use crate::error::CoreError;
use crate::types::DbId;

/// Sort and deduplicate `ids`, rejecting non-positive values.
///
/// The result is safe to bind as a single `BIGINT[]` parameter (`= ANY($1)`).
pub fn normalize_ids(ids: &[DbId]) -> Result<Vec<DbId>, CoreError> {
    if let Some(bad) = ids.iter().find(|id| **id <= 0) {
        return Err(CoreError::Validation(format!("Invalid id {bad}")));
    }
    let mut out = ids.to_vec();
    out.sort_unstable();
    out.dedup();
    Ok(out)
}

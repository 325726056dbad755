//! Study group entity model.

use serde::Serialize;
use sqlx::FromRow;
use studynotes_core::types::{DbId, Timestamp};

/// A study group row from the `study_groups` table.
///
/// `members` behaves as an ordered set of emails: membership changes are
/// idempotent and insertion order is preserved.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct StudyGroup {
    pub id: DbId,
    pub name: String,
    pub members: Vec<String>,
    pub created_by: String,
    pub created_at: Timestamp,
}

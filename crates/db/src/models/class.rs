//! Class (subject) entity model.

use serde::Serialize;
use sqlx::FromRow;
use studynotes_core::types::{DbId, Timestamp};

/// A class row from the `classes` table. Names are not unique.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Class {
    pub id: DbId,
    pub name: String,
    pub created_at: Timestamp,
}

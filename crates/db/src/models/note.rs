//! Note entity model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use studynotes_core::types::{DbId, Timestamp};

/// A note row from the `notes` table.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Note {
    pub id: DbId,
    pub user_id: DbId,
    pub title: String,
    pub markdown: String,
    /// Plain-text mirror of the markdown body, used for search indexing.
    pub content: String,
    /// Denormalized class name; deleting a class does not touch this.
    pub subject: String,
    pub tags: Vec<String>,
    /// Emails this note is shared with, in insertion order.
    pub shared_with: Vec<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// A note annotated with the reader's relationship to it.
///
/// The listing endpoint merges owned and shared query results; each entry
/// carries which side it came from. A note owned by a reader who is also
/// listed in `shared_with` appears once per query, i.e. twice.
#[derive(Debug, Clone, Serialize)]
pub struct NoteWithOwnership {
    #[serde(flatten)]
    pub note: Note,
    pub is_owner: bool,
}

/// DTO for creating a new note. Blank title and subject receive defaults
/// at insert time; the other fields default to empty.
#[derive(Debug, Default, Deserialize)]
pub struct CreateNote {
    pub title: String,
    pub markdown: String,
    pub content: String,
    pub subject: String,
    pub tags: Vec<String>,
    pub shared_with: Vec<String>,
}

/// DTO for updating a note. All fields are optional; `updated_at` is
/// refreshed unconditionally on every update.
#[derive(Debug, Default, Deserialize)]
pub struct UpdateNote {
    pub title: Option<String>,
    pub markdown: Option<String>,
    pub content: Option<String>,
    pub subject: Option<String>,
    pub tags: Option<Vec<String>>,
    pub shared_with: Option<Vec<String>>,
}

//! Repository for the `notes` table.
//!
//! Reads come in two flavors matching the sharing model: an equality
//! filter on the owner id and a membership filter on `shared_with`. The
//! listing endpoint merges the two result sets in process; neither query
//! orders its results, so the merge owns the sort.

use sqlx::PgPool;
use studynotes_core::notes::{DEFAULT_SUBJECT, DEFAULT_TITLE};
use studynotes_core::types::DbId;

use crate::models::note::{CreateNote, Note, UpdateNote};

/// Column list for notes queries.
const COLUMNS: &str = "id, user_id, title, markdown, content, subject, tags, \
    shared_with, created_at, updated_at";

/// Provides CRUD operations for notes.
pub struct NoteRepo;

impl NoteRepo {
    /// Insert a new note, returning the created row.
    ///
    /// A blank title or subject falls back to its default. `created_at`
    /// and `updated_at` are both assigned the statement time, so they are
    /// equal on the returned row.
    pub async fn create(
        pool: &PgPool,
        user_id: DbId,
        input: &CreateNote,
    ) -> Result<Note, sqlx::Error> {
        let title = if input.title.is_empty() {
            DEFAULT_TITLE
        } else {
            &input.title
        };
        let subject = if input.subject.is_empty() {
            DEFAULT_SUBJECT
        } else {
            &input.subject
        };
        let query = format!(
            "INSERT INTO notes (user_id, title, markdown, content, subject, tags, shared_with)
             VALUES ($1, $2, $3, $4, $5, $6, $7)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .bind(title)
            .bind(&input.markdown)
            .bind(&input.content)
            .bind(subject)
            .bind(&input.tags)
            .bind(&input.shared_with)
            .fetch_one(pool)
            .await
    }

    /// Find a note by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List notes owned by a user.
    pub async fn list_owned(pool: &PgPool, user_id: DbId) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE user_id = $1");
        sqlx::query_as::<_, Note>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// List notes shared with the given email.
    pub async fn list_shared_with(pool: &PgPool, email: &str) -> Result<Vec<Note>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM notes WHERE $1 = ANY(shared_with)");
        sqlx::query_as::<_, Note>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// Update a note by ID, returning the updated row.
    ///
    /// Only non-`None` fields are applied; `updated_at` is overwritten
    /// with the statement time regardless of what the input contains.
    pub async fn update(
        pool: &PgPool,
        id: DbId,
        input: &UpdateNote,
    ) -> Result<Option<Note>, sqlx::Error> {
        let query = format!(
            "UPDATE notes SET
                title = COALESCE($2, title),
                markdown = COALESCE($3, markdown),
                content = COALESCE($4, content),
                subject = COALESCE($5, subject),
                tags = COALESCE($6, tags),
                shared_with = COALESCE($7, shared_with),
                updated_at = NOW()
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Note>(&query)
            .bind(id)
            .bind(&input.title)
            .bind(&input.markdown)
            .bind(&input.content)
            .bind(&input.subject)
            .bind(&input.tags)
            .bind(&input.shared_with)
            .fetch_optional(pool)
            .await
    }

    /// Delete a note by ID. Returns `true` if a row was deleted.
    ///
    /// No ownership check is performed here or in the handler; any
    /// authenticated caller holding the id can delete the note.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM notes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

//! Repository for the `study_groups` table.
//!
//! Membership changes are idempotent set operations performed in SQL:
//! adding an existing member or removing an absent one leaves the row
//! unchanged and still reports success.

use sqlx::PgPool;
use studynotes_core::types::DbId;

use crate::models::group::StudyGroup;

/// Column list for study group queries.
const COLUMNS: &str = "id, name, members, created_by, created_at";

/// Provides CRUD operations for study groups.
pub struct GroupRepo;

impl GroupRepo {
    /// Insert a new group with the creator as its first member.
    pub async fn create(
        pool: &PgPool,
        name: &str,
        creator_email: &str,
    ) -> Result<StudyGroup, sqlx::Error> {
        let query = format!(
            "INSERT INTO study_groups (name, members, created_by)
             VALUES ($1, ARRAY[$2], $3)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyGroup>(&query)
            .bind(name)
            .bind(creator_email)
            .bind(creator_email)
            .fetch_one(pool)
            .await
    }

    /// Find a group by its ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<StudyGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM study_groups WHERE id = $1");
        sqlx::query_as::<_, StudyGroup>(&query)
            .bind(id)
            .fetch_optional(pool)
            .await
    }

    /// List groups the given email is a member of.
    pub async fn list_for_member(
        pool: &PgPool,
        email: &str,
    ) -> Result<Vec<StudyGroup>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM study_groups WHERE $1 = ANY(members)");
        sqlx::query_as::<_, StudyGroup>(&query)
            .bind(email)
            .fetch_all(pool)
            .await
    }

    /// Add a member email as a set-union, returning the updated row.
    ///
    /// Appending is guarded so an already-present member is a no-op.
    pub async fn add_member(
        pool: &PgPool,
        id: DbId,
        email: &str,
    ) -> Result<Option<StudyGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE study_groups
             SET members = CASE
                 WHEN $2 = ANY(members) THEN members
                 ELSE array_append(members, $2)
             END
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyGroup>(&query)
            .bind(id)
            .bind(email)
            .fetch_optional(pool)
            .await
    }

    /// Remove a member email as a set-difference, returning the updated row.
    ///
    /// Removing an absent member is a no-op.
    pub async fn remove_member(
        pool: &PgPool,
        id: DbId,
        email: &str,
    ) -> Result<Option<StudyGroup>, sqlx::Error> {
        let query = format!(
            "UPDATE study_groups
             SET members = array_remove(members, $2)
             WHERE id = $1
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, StudyGroup>(&query)
            .bind(id)
            .bind(email)
            .fetch_optional(pool)
            .await
    }
}

//! Repository for the `classes` table.

use sqlx::PgPool;
use studynotes_core::types::DbId;

use crate::models::class::Class;

/// Column list for classes queries.
const COLUMNS: &str = "id, name, created_at";

/// Provides CRUD operations for classes (subjects).
pub struct ClassRepo;

impl ClassRepo {
    /// Insert a new class, returning the created row.
    ///
    /// No uniqueness is enforced on the name.
    pub async fn create(pool: &PgPool, name: &str) -> Result<Class, sqlx::Error> {
        let query = format!(
            "INSERT INTO classes (name)
             VALUES ($1)
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Class>(&query)
            .bind(name)
            .fetch_one(pool)
            .await
    }

    /// List all classes ordered lexicographically by name.
    pub async fn list(pool: &PgPool) -> Result<Vec<Class>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM classes ORDER BY name");
        sqlx::query_as::<_, Class>(&query).fetch_all(pool).await
    }

    /// Delete a class by ID. Returns `true` if a row was deleted.
    ///
    /// Notes referencing the class keep their denormalized subject string.
    pub async fn delete(pool: &PgPool, id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM classes WHERE id = $1")
            .bind(id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}

use serde::Serialize;
use sqlx::{self, postgres::PgRow, FromRow, PgPool, Postgres};
use uuid::Uuid;

use crate::database::manager::DatabaseError;

/// Generic table access: the finders every resource shares.
///
/// Table and column names are compile-time constants supplied by the model
/// modules, never request input, so they are interpolated directly. Values
/// always go through bind parameters.
pub struct Repository<T> {
    table_name: &'static str,
    pool: PgPool,
    _phantom: std::marker::PhantomData<T>,
}

impl<T> Repository<T>
where
    T: for<'r> FromRow<'r, PgRow> + Send + Unpin + Serialize,
{
    pub fn new(table_name: &'static str, pool: PgPool) -> Self {
        Self {
            table_name,
            pool,
            _phantom: std::marker::PhantomData,
        }
    }

    pub async fn find_all(&self) -> Result<Vec<T>, DatabaseError> {
        let sql = format!("SELECT * FROM \"{}\"", self.table_name);
        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    pub async fn find_by_id(&self, id: Uuid) -> Result<Option<T>, DatabaseError> {
        self.find_one_by("id", id).await
    }

    pub async fn exists(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let sql = format!("SELECT EXISTS(SELECT 1 FROM \"{}\" WHERE id = $1)", self.table_name);
        let exists: bool = sqlx::query_scalar(&sql).bind(id).fetch_one(&self.pool).await?;
        Ok(exists)
    }

    /// All rows where `column = value`.
    pub async fn find_by<V>(&self, column: &'static str, value: V) -> Result<Vec<T>, DatabaseError>
    where
        V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
    {
        let sql = format!("SELECT * FROM \"{}\" WHERE \"{}\" = $1", self.table_name, column);
        let rows = sqlx::query_as::<_, T>(&sql).bind(value).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// First row where `column = value`, for columns that are unique in practice.
    pub async fn find_one_by<V>(&self, column: &'static str, value: V) -> Result<Option<T>, DatabaseError>
    where
        V: for<'q> sqlx::Encode<'q, Postgres> + sqlx::Type<Postgres> + Send + 'static,
    {
        let sql = format!(
            "SELECT * FROM \"{}\" WHERE \"{}\" = $1 LIMIT 1",
            self.table_name, column
        );
        let row = sqlx::query_as::<_, T>(&sql).bind(value).fetch_optional(&self.pool).await?;
        Ok(row)
    }

    /// Returns false when no row had that id.
    pub async fn delete_by_id(&self, id: Uuid) -> Result<bool, DatabaseError> {
        let sql = format!("DELETE FROM \"{}\" WHERE id = $1", self.table_name);
        let result = sqlx::query(&sql).bind(id).execute(&self.pool).await?;
        Ok(result.rows_affected() > 0)
    }
}

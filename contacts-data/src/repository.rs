/// Generic repository over the PostgreSQL store
///
/// This module provides storage-agnostic CRUD primitives parameterized by
/// entity type, so any entity can reuse the same access logic without
/// duplicated query code. Entities describe their own storage mapping
/// through the [`Entity`] trait; the repository supplies the access paths.
///
/// The repository holds a cloned pool handle. Cloning a `PgPool` is cheap
/// (it is reference counted) and the handle is released deterministically
/// when the repository is dropped, on every exit path.
///
/// # Example
///
/// ```no_run
/// use contacts_data::models::contact::Contact;
/// use contacts_data::repository::Repository;
/// use sqlx::PgPool;
///
/// # async fn example(pool: PgPool) -> Result<(), Box<dyn std::error::Error>> {
/// let repository = Repository::new(pool);
///
/// let all: Vec<Contact> = repository.select_all().await?;
/// let one: Option<Contact> = repository.select_by_id(1).await?;
/// # Ok(())
/// # }
/// ```

use crate::error::StoreError;
use sqlx::postgres::{PgArguments, PgPool, PgRow};
use sqlx::query::Query;
use sqlx::{FromRow, Postgres};
use tracing::debug;

/// Storage mapping for a repository-managed entity
///
/// Implementors declare their table, the column list used for reads, and
/// how to build insert/update statements for a row. The repository never
/// inspects entity fields beyond the id.
pub trait Entity: for<'r> FromRow<'r, PgRow> + Send + Unpin {
    /// Backing table name
    const TABLE: &'static str;

    /// Column list for SELECT statements
    const COLUMNS: &'static str;

    /// Primary key of this row
    fn id(&self) -> i64;

    /// Builds the INSERT statement for this row (id assigned by the store)
    fn insert(&self) -> Query<'_, Postgres, PgArguments>;

    /// Builds the full-row UPDATE statement keyed by id
    fn update(&self) -> Query<'_, Postgres, PgArguments>;
}

/// Generic data-access layer
///
/// One instance is created per request by the API layer; all state lives in
/// the backing store.
#[derive(Clone)]
pub struct Repository {
    pool: PgPool,
}

impl Repository {
    /// Creates a repository over a pool handle
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Returns every row of the backing table, in store-native order
    ///
    /// No ordering is guaranteed beyond what the store returns by default.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the store is unreachable or the
    /// query fails.
    pub async fn select_all<T: Entity>(&self) -> Result<Vec<T>, StoreError> {
        let sql = format!("SELECT {} FROM {}", T::COLUMNS, T::TABLE);
        debug!(table = T::TABLE, "selecting all rows");

        let rows = sqlx::query_as::<_, T>(&sql).fetch_all(&self.pool).await?;
        Ok(rows)
    }

    /// Returns the row with the given id, or `None` if absent
    ///
    /// A missing row is not an error; only store failures are.
    pub async fn select_by_id<T: Entity>(&self, id: i64) -> Result<Option<T>, StoreError> {
        let sql = format!("SELECT {} FROM {} WHERE id = $1", T::COLUMNS, T::TABLE);
        debug!(table = T::TABLE, id, "selecting row by id");

        let row = sqlx::query_as::<_, T>(&sql)
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    /// Inserts a new row; the store assigns the id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::Database`] if the insert violates a store-level
    /// constraint or the store is unreachable.
    pub async fn create<T: Entity>(&self, entity: &T) -> Result<(), StoreError> {
        debug!(table = T::TABLE, "inserting row");
        entity.insert().execute(&self.pool).await?;
        Ok(())
    }

    /// Updates a row in place, keyed by the entity's id
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::UpdateConflict`] when the id does not exist or
    /// the store rejects the statement with a constraint violation, and
    /// [`StoreError::Database`] for any other failure.
    pub async fn update<T: Entity>(&self, entity: &T) -> Result<(), StoreError> {
        debug!(table = T::TABLE, id = entity.id(), "updating row");

        let result = entity.update().execute(&self.pool).await.map_err(|err| {
            if matches!(&err, sqlx::Error::Database(db_err) if db_err.constraint().is_some()) {
                StoreError::UpdateConflict(err.to_string())
            } else {
                StoreError::Database(err)
            }
        })?;

        if result.rows_affected() == 0 {
            return Err(StoreError::UpdateConflict(format!(
                "no {} row with id {}",
                T::TABLE,
                entity.id()
            )));
        }

        Ok(())
    }

    /// Persists a logical deletion
    ///
    /// The repository has no distinct delete semantics: callers mutate the
    /// entity (flip its status flag) and this forwards to [`Repository::update`].
    /// Rows are never removed from the table.
    pub async fn delete<T: Entity>(&self, entity: &T) -> Result<(), StoreError> {
        self.update(entity).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::contact::Contact;

    #[test]
    fn test_contact_entity_metadata() {
        assert_eq!(Contact::TABLE, "contacts");
        assert!(Contact::COLUMNS.starts_with("id, "));
        assert!(Contact::COLUMNS.contains("status"));
    }

    #[test]
    fn test_entity_id_accessor() {
        let contact = Contact {
            id: 42,
            first_name: "Ann".to_string(),
            last_name: "Lee".to_string(),
            email: "ann@x.com".to_string(),
            phone_number: None,
            status: true,
        };
        assert_eq!(contact.id(), 42);
    }

    // Integration tests against a live database live in
    // contacts-api/tests/, driven through the HTTP surface.
}

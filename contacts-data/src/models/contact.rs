/// Contact model and storage mapping
///
/// This module provides the `Contact` entity: the single record type of the
/// service. Contacts are never hard-deleted; the `status` flag marks them
/// inactive instead.
///
/// # Schema
///
/// ```sql
/// CREATE TABLE contacts (
///     id BIGSERIAL PRIMARY KEY,
///     first_name VARCHAR(30) NOT NULL,
///     last_name VARCHAR(30) NOT NULL,
///     email VARCHAR(50) NOT NULL,
///     phone_number VARCHAR(10),
///     status BOOLEAN NOT NULL DEFAULT TRUE
/// );
/// ```
///
/// Email uniqueness is deliberately not a store constraint: the handler
/// checks it with a full-table scan before inserting, so concurrent creates
/// with the same email can race (accepted behavior).
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
/// let contact = Contact {
///     id: 0,
///     first_name: "Ann".to_string(),
///     last_name: "Lee".to_string(),
///     email: "ann@x.com".to_string(),
///     phone_number: None,
///     status: true,
/// };
///
/// repository.create(&contact).await?;
/// # Ok(())
/// # }
/// ```

use crate::repository::Entity;
use serde::{Deserialize, Serialize};
use sqlx::postgres::PgArguments;
use sqlx::query::Query;
use sqlx::Postgres;
use validator::{Validate, ValidationError};

/// An organization contact
///
/// Serialized with camelCase field names on the wire. The `id` is assigned
/// by the store on insert; a client-supplied id is ignored on creation and
/// required for updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, sqlx::FromRow, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    /// Primary key, assigned by the store; immutable once created
    #[serde(default)]
    pub id: i64,

    /// Given name, required, at most 30 characters
    #[validate(length(min = 1, max = 30, message = "firstName must be 1-30 characters"))]
    pub first_name: String,

    /// Family name, required, at most 30 characters
    #[validate(length(min = 1, max = 30, message = "lastName must be 1-30 characters"))]
    pub last_name: String,

    /// Email address, required, at most 50 characters
    ///
    /// Must be unique across all contacts, active and inactive. The check is
    /// performed by the create handler, not the store.
    #[validate(
        length(min = 1, max = 50, message = "email must be 1-50 characters"),
        email(message = "not a valid email address")
    )]
    pub email: String,

    /// Optional phone number; when present, exactly 10 digits
    #[validate(custom(function = validate_phone_number))]
    pub phone_number: Option<String>,

    /// True while the contact is active; soft-delete sets this to false
    #[serde(default = "default_status")]
    pub status: bool,
}

/// Contacts are active unless the payload says otherwise
fn default_status() -> bool {
    true
}

/// Checks that a phone number is exactly 10 ASCII digits
fn validate_phone_number(phone: &str) -> Result<(), ValidationError> {
    if phone.len() == 10 && phone.bytes().all(|b| b.is_ascii_digit()) {
        Ok(())
    } else {
        let mut err = ValidationError::new("phone_number");
        err.message = Some("phoneNumber must be exactly 10 digits".into());
        Err(err)
    }
}

impl Entity for Contact {
    const TABLE: &'static str = "contacts";
    const COLUMNS: &'static str = "id, first_name, last_name, email, phone_number, status";

    fn id(&self) -> i64 {
        self.id
    }

    /// Insert without the id column; the store assigns it
    fn insert(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            "INSERT INTO contacts (first_name, last_name, email, phone_number, status) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(self.status)
    }

    /// Full-row update keyed by id
    fn update(&self) -> Query<'_, Postgres, PgArguments> {
        sqlx::query(
            "UPDATE contacts \
             SET first_name = $2, last_name = $3, email = $4, phone_number = $5, status = $6 \
             WHERE id = $1",
        )
        .bind(self.id)
        .bind(&self.first_name)
        .bind(&self.last_name)
        .bind(&self.email)
        .bind(&self.phone_number)
        .bind(self.status)
    }
}

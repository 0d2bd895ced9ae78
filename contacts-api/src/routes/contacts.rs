/// Contact CRUD endpoints
///
/// This module exposes the contact management operations of the service.
/// All state lives in the backing store; every handler builds a
/// request-scoped repository from the shared pool.
///
/// # Endpoints
///
/// - `GET /contact` - List all contacts (active and inactive)
/// - `GET /contact/:id` - Get a contact by id
/// - `POST /contact` - Create a contact, returns the full updated list
/// - `PUT /contact` - Edit a contact in place (body includes id)
/// - `DELETE /contact/:id` - Soft-delete a contact (sets status to false)
///
/// HEAD requests to `/contact` are answered through the GET route with the
/// body dropped, which doubles as the liveness probe.

use crate::{
    app::AppState,
    error::{ApiError, ApiResult},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use contacts_data::models::contact::Contact;
use validator::Validate;

/// List all contacts
///
/// Returns every contact in the organization regardless of status, in
/// store-native order.
///
/// # Endpoint
///
/// ```text
/// GET /contact
/// ```
///
/// # Errors
///
/// - `400 Bad Request`: Store failure (message embedded)
pub async fn list_contacts(State(state): State<AppState>) -> ApiResult<Json<Vec<Contact>>> {
    let contacts = state.repository().select_all::<Contact>().await?;
    Ok(Json(contacts))
}

/// Get a contact by id
///
/// # Endpoint
///
/// ```text
/// GET /contact/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No contact with this id (empty body)
/// - `400 Bad Request`: Store failure (message embedded)
pub async fn get_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<Json<Contact>> {
    let contact = state
        .repository()
        .select_by_id::<Contact>(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    Ok(Json(contact))
}

/// Create a contact
///
/// Validates the payload, rejects duplicate emails, inserts the row, and
/// returns the full updated contact list.
///
/// The duplicate check scans the whole table (active and inactive contacts)
/// and is a separate round-trip from the insert: concurrent creates with
/// the same email can both pass the check. The store carries no unique
/// constraint, so that race produces a duplicate row. Accepted behavior.
///
/// # Endpoint
///
/// ```text
/// POST /contact
/// Content-Type: application/json
///
/// {
///   "firstName": "Ann",
///   "lastName": "Lee",
///   "email": "ann@x.com",
///   "phoneNumber": "5551234567",
///   "status": true
/// }
/// ```
///
/// Any id in the payload is ignored; the store assigns one. A missing
/// status defaults to active.
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Field validation failed (per-field details)
/// - `400 Bad Request`: Email already exists, or store failure
pub async fn create_contact(
    State(state): State<AppState>,
    Json(contact): Json<Contact>,
) -> ApiResult<Json<Vec<Contact>>> {
    contact.validate()?;

    let repository = state.repository();

    let contacts = repository.select_all::<Contact>().await?;
    if contacts.iter().any(|c| c.email == contact.email) {
        return Err(ApiError::DuplicateEmail(contact.email));
    }

    repository.create(&contact).await?;

    let contacts = repository.select_all::<Contact>().await?;
    Ok(Json(contacts))
}

/// Edit a contact
///
/// Full-row update keyed by the id in the payload. The email is not
/// re-checked for uniqueness on edit.
///
/// # Endpoint
///
/// ```text
/// PUT /contact
/// Content-Type: application/json
///
/// {
///   "id": 1,
///   "firstName": "Ann",
///   "lastName": "Lee",
///   "email": "ann@x.com",
///   "status": true
/// }
/// ```
///
/// # Errors
///
/// - `422 Unprocessable Entity`: Field validation failed (per-field details)
/// - `400 Bad Request`: Unknown id or constraint conflict (fixed message),
///   or other store failure (message embedded)
pub async fn edit_contact(
    State(state): State<AppState>,
    Json(contact): Json<Contact>,
) -> ApiResult<StatusCode> {
    contact.validate()?;

    state.repository().update(&contact).await?;

    Ok(StatusCode::OK)
}

/// Soft-delete a contact
///
/// Marks the contact inactive. The row is never removed; a subsequent GET
/// still returns it with `status: false`.
///
/// # Endpoint
///
/// ```text
/// DELETE /contact/:id
/// ```
///
/// # Errors
///
/// - `404 Not Found`: No contact with this id (empty body)
/// - `400 Bad Request`: Store failure
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> ApiResult<StatusCode> {
    let repository = state.repository();

    let mut contact = repository
        .select_by_id::<Contact>(id)
        .await?
        .ok_or(ApiError::NotFound)?;

    // Inactivate rather than remove
    contact.status = false;
    repository.delete(&contact).await?;

    Ok(StatusCode::NO_CONTENT)
}

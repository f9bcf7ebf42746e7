use crate::auth::AuthUser;
use crate::error::{AppError, AppResult};
use crate::extract::{AppJson, AppPath};
use crate::models::{Contact, CreateContactRequest, UpdateContactRequest};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Json};
use std::sync::Arc;
use uuid::Uuid;
use validator::Validate;

use super::AppState;

/// Ensure `contact` belongs to `user_id`.
pub fn check_owner(contact: &Contact, user_id: Uuid) -> AppResult<()> {
    if contact.user_id != user_id {
        return Err(AppError::Forbidden(
            "User doesn't have permission to access other users' contacts".to_string(),
        ));
    }
    Ok(())
}

/// Load a contact and check that the caller owns it
async fn owned_contact(state: &AppState, user_id: Uuid, id: Uuid) -> AppResult<Contact> {
    let contact = state
        .repository
        .get_contact(id)
        .await?
        .ok_or_else(|| AppError::ContactNotFound(id.to_string()))?;

    check_owner(&contact, user_id)?;
    Ok(contact)
}

/// List the caller's contacts
pub async fn list_contacts(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
) -> AppResult<impl IntoResponse> {
    let contacts = state.repository.list_contacts(auth.user_id()?).await?;
    Ok(Json(contacts))
}

/// Create a contact
pub async fn create_contact(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    AppJson(payload): AppJson<CreateContactRequest>,
) -> AppResult<impl IntoResponse> {
    payload
        .validate()
        .map_err(|e| AppError::Validation(format!("All fields are mandatory: {}", e)))?;

    let contact = state
        .repository
        .create_contact(auth.user_id()?, &payload)
        .await?;

    Ok((StatusCode::CREATED, Json(contact)))
}

/// Get a single contact
pub async fn get_contact(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<impl IntoResponse> {
    let contact = owned_contact(&state, auth.user_id()?, id).await?;
    Ok(Json(contact))
}

/// Update a contact
pub async fn update_contact(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
    AppJson(payload): AppJson<UpdateContactRequest>,
) -> AppResult<impl IntoResponse> {
    payload.validate()?;
    if payload.is_empty() {
        return Err(AppError::Validation(
            "At least one of name, email or phone is required".to_string(),
        ));
    }

    owned_contact(&state, auth.user_id()?, id).await?;

    let updated = state
        .repository
        .update_contact(id, &payload)
        .await?
        .ok_or_else(|| AppError::ContactNotFound(id.to_string()))?;

    Ok(Json(updated))
}

/// Delete a contact, returning the removed entry
pub async fn delete_contact(
    State(state): State<Arc<AppState>>,
    auth: AuthUser,
    AppPath(id): AppPath<Uuid>,
) -> AppResult<impl IntoResponse> {
    owned_contact(&state, auth.user_id()?, id).await?;

    let deleted = state
        .repository
        .delete_contact(id)
        .await?
        .ok_or_else(|| AppError::ContactNotFound(id.to_string()))?;

    Ok(Json(deleted))
}

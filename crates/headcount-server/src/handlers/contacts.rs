//! Contact partial handlers (list, create, read, edit form, update, toggle,
//! delete, count).

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::Form;

use headcount_core::{Action, Contact, ContactId, ContactService, Status};

use crate::error::ApiError;
use crate::render;
use crate::schema::contacts::{ContactForm, CountQuery, StatusForm};
use crate::state::AppState;

/// Event name HTMX listeners use to refresh counts and tables.
pub const NEW_CONTACT_EVENT: &str = "newContact";
const HX_TRIGGER: &str = "HX-Trigger";

fn parse_id(raw: &str) -> Result<ContactId, ApiError> {
    ContactId::parse(raw).map_err(ApiError::from)
}

fn render_table(contacts: &dyn ContactService) -> Html<String> {
    Html(render::contacts_table(&contacts.get()))
}

/// Renders all contacts.
///
/// `GET /contacts`
pub async fn list_contacts(State(state): State<AppState>) -> Html<String> {
    render_table(state.contacts.as_ref())
}

/// Creates a contact from the submitted form and re-renders the table.
///
/// `POST /contacts`
pub async fn create_contact(
    State(state): State<AppState>,
    Form(form): Form<ContactForm>,
) -> Result<Response, ApiError> {
    let contact = form.into_contact()?;
    let created = state.contacts.dispatch(Action::Create, contact)?;
    tracing::info!(id = %created.id, "contact created");
    Ok((
        [(HX_TRIGGER, NEW_CONTACT_EVENT)],
        render_table(state.contacts.as_ref()),
    )
        .into_response())
}

/// Renders a single contact row.
///
/// `GET /contacts/{id}`
pub async fn get_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = parse_id(&raw_id)?;
    let contact = state.contacts.find(id)?;
    Ok(Html(render::contact_row(&contact)))
}

/// Renders the edit form in a slide-out panel, pre-filled with the contact.
///
/// `GET /contacts/{id}/edit`
pub async fn edit_contact_form(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Html<String>, ApiError> {
    let id = parse_id(&raw_id)?;
    let contact = state.contacts.find(id)?;
    let form = render::contact_put_form(&contact);
    Ok(Html(render::slideout(&form, "Close", true)))
}

/// Updates a contact. A blank name or phone removes it instead, which is
/// reported as a failed update.
///
/// `PUT /contacts/{id}`
pub async fn update_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<ContactForm>,
) -> Result<Response, ApiError> {
    let path_id = parse_id(&raw_id)?;
    let has_id = form.has_id();
    let mut contact = form.into_contact()?;
    if !has_id {
        contact.id = path_id;
    }

    let matches = contact.id == path_id && state.contacts.find(contact.id).is_ok();
    if !matches {
        return Err(ApiError::NotFound("error matching records".to_string()));
    }

    match state.contacts.dispatch(Action::Update, contact) {
        Ok(updated) => {
            tracing::info!(id = %updated.id, "contact updated");
            Ok((
                [(HX_TRIGGER, NEW_CONTACT_EVENT)],
                Html(render::contact_row(&updated)),
            )
                .into_response())
        }
        Err(err) => {
            tracing::warn!(id = %path_id, error = %err, "update did not apply");
            Err(ApiError::InternalError(
                "something went wrong when updating record".to_string(),
            ))
        }
    }
}

/// Sets the status of a contact from the row checkbox.
///
/// `PATCH /contacts/{id}/status`
pub async fn toggle_contact_status(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    Form(form): Form<StatusForm>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    let status: Status = form.status()?;
    let stored = state.contacts.find(id)?;

    state
        .contacts
        .dispatch(Action::Toggle, Contact { status, ..stored })?;
    // Render what is stored now, not the request's copy of the other fields.
    let current = state.contacts.find(id)?;
    tracing::info!(id = %id, status = %current.status, "contact status changed");

    Ok((
        [(HX_TRIGGER, NEW_CONTACT_EVENT)],
        Html(render::contact_row(&current)),
    )
        .into_response())
}

/// Removes a contact. Responds 200 with an empty body even when the id is
/// unknown, so HTMX swaps the row away either way.
///
/// `DELETE /contacts/{id}`
pub async fn delete_contact(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Response, ApiError> {
    let id = parse_id(&raw_id)?;
    match state.contacts.remove(id) {
        Ok(_) => tracing::info!(id = %id, "contact deleted"),
        Err(err) => tracing::debug!(id = %id, error = %err, "delete of unknown contact"),
    }
    Ok((StatusCode::OK, [(HX_TRIGGER, NEW_CONTACT_EVENT)]).into_response())
}

/// Plain-text count of contacts, optionally filtered by status.
///
/// `GET /contacts/count[?active=true|inactive=true]`
pub async fn count_contacts(
    State(state): State<AppState>,
    Query(query): Query<CountQuery>,
) -> Result<String, ApiError> {
    let count = match query.filter().map_err(|msg| ApiError::BadRequest(msg.to_string()))? {
        Some(status) => state.contacts.count_by_status(status),
        None => state.contacts.count(),
    };
    Ok(count.to_string())
}

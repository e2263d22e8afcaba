use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::{delete, get, post},
};
use axum_macros::debug_handler;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

use std::sync::Arc;

use crate::{
    dto::{CreateNoteRequest, NoteResponse},
    error::ApiError,
    service::NoteService,
};

#[derive(OpenApi)]
#[openapi(
    paths(create_note, delete_note, get_all_notes),
    components(schemas(NoteResponse, CreateNoteRequest)),
    tags(
        (name = "notes", description = "Notes management API")
    )
)]
pub struct ApiDoc;

/// Builds the full application router: the notes API under `/api`, the
/// swagger UI, request tracing, and the JSON 404 fallback.
pub fn router(service: Arc<NoteService>) -> Router {
    let api_router = Router::new()
        .route("/", get(root))
        .route("/notes", post(create_note))
        .route("/notes", get(get_all_notes))
        .route("/notes/{id}", delete(delete_note))
        .with_state(service);

    Router::new()
        .nest("/api", api_router)
        .merge(
            SwaggerUi::new("/swagger-ui").url("/api-doc/openapi.json", ApiDoc::openapi()),
        )
        .fallback(route_not_found)
        .layer(TraceLayer::new_for_http())
}

async fn root() -> Response {
    (StatusCode::OK, "API is running...").into_response()
}

async fn route_not_found() -> ApiError {
    ApiError::NotFound("Route not found".to_string())
}

#[utoipa::path(
    post,
    path = "/api/notes",
    request_body = CreateNoteRequest,
    responses(
        (status = 201, description = "Note created successfully", body = NoteResponse),
        (status = 400, description = "Note text missing or blank"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn create_note(
    State(service): State<Arc<NoteService>>,
    Json(payload): Json<CreateNoteRequest>,
) -> Result<Response, ApiError> {
    let text = payload
        .text
        .as_deref()
        .map(str::trim)
        .filter(|text| !text.is_empty())
        .ok_or_else(|| ApiError::Validation("Note text is required".to_string()))?;

    let note = service.create_note(text.to_string()).await?;

    Ok((StatusCode::CREATED, Json(note)).into_response())
}

#[utoipa::path(
    delete,
    path = "/api/notes/{id}",
    params(
        ("id" = i64, Path, description = "Note ID")
    ),
    responses(
        (status = 204, description = "Note deleted successfully"),
        (status = 404, description = "Note not found"),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn delete_note(
    State(service): State<Arc<NoteService>>,
    Path(id): Path<String>,
) -> Result<Response, ApiError> {
    // A non-numeric id can never match a note, so it reads as a failed lookup.
    let not_found = || ApiError::NotFound("Note not found".to_string());
    let id: i64 = id.parse().map_err(|_| not_found())?;

    if service.delete_note(id).await? {
        Ok(StatusCode::NO_CONTENT.into_response())
    } else {
        Err(not_found())
    }
}

#[utoipa::path(
    get,
    path = "/api/notes",
    responses(
        (status = 200, description = "List of all notes, newest first", body = Vec<NoteResponse>),
        (status = 500, description = "Internal server error")
    ),
    tag = "notes"
)]
#[debug_handler]
pub async fn get_all_notes(
    State(service): State<Arc<NoteService>>,
) -> Result<Response, ApiError> {
    let notes = service.get_all_notes().await?;

    Ok((StatusCode::OK, Json(notes)).into_response())
}

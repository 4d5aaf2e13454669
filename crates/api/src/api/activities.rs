// Activity directory HTTP routes

use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    routing::{delete, get, post},
    Json, Router,
};
use mergington_core::{Activities, Activity, ActivityStore};
use serde::Deserialize;
use std::sync::Arc;
use utoipa::IntoParams;

use super::common::{ApiError, ErrorResponse, MessageResponse};
use super::validation::validate_roster_input;
use crate::services::ActivityService;

/// Query parameters for signup and unregister
#[derive(Debug, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct EmailQuery {
    /// Participant email, matched exactly (case-sensitive).
    #[param(example = "michael@mergington.edu")]
    pub email: String,
}

/// App state for activity routes
#[derive(Clone)]
pub struct AppState {
    pub service: Arc<ActivityService>,
}

impl AppState {
    pub fn new(store: Arc<dyn ActivityStore>) -> Self {
        Self {
            service: Arc::new(ActivityService::new(store)),
        }
    }
}

/// Create activity routes
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/activities", get(list_activities))
        .route("/activities/:activity_name/signup", post(signup_for_activity))
        .route(
            "/activities/:activity_name/unregister",
            delete(unregister_from_activity),
        )
        .with_state(state)
}

/// GET /activities - List every activity with its roster
#[utoipa::path(
    get,
    path = "/activities",
    responses(
        (status = 200, description = "All activities keyed by name", body = HashMap<String, Activity>),
        (status = 500, description = "Internal server error", body = ErrorResponse)
    ),
    tag = "activities"
)]
pub async fn list_activities(State(state): State<AppState>) -> Result<Json<Activities>, ApiError> {
    let activities = state.service.list().await?;
    Ok(Json(activities))
}

/// POST /activities/{activity_name}/signup - Sign a student up for an activity
#[utoipa::path(
    post,
    path = "/activities/{activity_name}/signup",
    params(
        ("activity_name" = String, Path, description = "Activity name (exact match)"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Student signed up", body = MessageResponse),
        (status = 400, description = "Activity is full or student already signed up", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing or invalid email parameter", body = ErrorResponse)
    ),
    tag = "activities"
)]
pub async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query.map_err(reject_query)?;
    validate_roster_input(&activity_name, &email)?;

    let message = state.service.signup(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(message)))
}

/// DELETE /activities/{activity_name}/unregister - Remove a student from an activity
#[utoipa::path(
    delete,
    path = "/activities/{activity_name}/unregister",
    params(
        ("activity_name" = String, Path, description = "Activity name (exact match)"),
        EmailQuery
    ),
    responses(
        (status = 200, description = "Student unregistered", body = MessageResponse),
        (status = 400, description = "Student is not registered", body = ErrorResponse),
        (status = 404, description = "Activity not found", body = ErrorResponse),
        (status = 422, description = "Missing or invalid email parameter", body = ErrorResponse)
    ),
    tag = "activities"
)]
pub async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<Json<MessageResponse>, ApiError> {
    let Query(EmailQuery { email }) = query.map_err(reject_query)?;
    validate_roster_input(&activity_name, &email)?;

    let message = state.service.unregister(&activity_name, &email).await?;
    Ok(Json(MessageResponse::new(message)))
}

fn reject_query(rejection: QueryRejection) -> ApiError {
    ApiError::unprocessable(rejection.body_text())
}

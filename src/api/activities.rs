/// Activity REST API endpoints
///
/// Listing, signup and unregister routes over the activity directory service.
/// Errors are returned as `{"detail": "..."}` bodies with the matching status.

use crate::activity::{ActivityDirectoryService, ActivityError, ActivityMap};
use axum::{
    extract::{rejection::QueryRejection, Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Redirect, Response},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use serde_json::json;

/// Application state containing shared resources
#[derive(Clone)]
pub struct AppState {
    /// Activity directory backed by the process-wide store
    pub service: ActivityDirectoryService,
}

/// Query string accepted by signup and unregister
///
/// Kept as raw pairs so a repeated `email` resolves to its last value
/// instead of failing deserialization.
#[derive(Debug, Deserialize)]
#[serde(transparent)]
pub struct EmailQuery(Vec<(String, String)>);

impl EmailQuery {
    /// The last `email` value, if any was supplied
    pub fn into_email(self) -> Option<String> {
        self.0
            .into_iter()
            .rev()
            .find(|(key, _)| key == "email")
            .map(|(_, value)| value)
    }
}

/// HTTP-facing error with a `detail` body
#[derive(Debug)]
pub enum ApiError {
    Activity(ActivityError),
    MissingEmail,
    InvalidQuery(QueryRejection),
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        Self::InvalidQuery(rejection)
    }
}

impl From<ActivityError> for ApiError {
    fn from(err: ActivityError) -> Self {
        Self::Activity(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match self {
            ApiError::MissingEmail => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Missing required query parameter: email".to_string(),
            ),
            ApiError::InvalidQuery(rejection) => {
                (StatusCode::UNPROCESSABLE_ENTITY, rejection.body_text())
            }
            ApiError::Activity(err) => {
                let status = match &err {
                    ActivityError::NotFound => StatusCode::NOT_FOUND,
                    ActivityError::AlreadyRegistered | ActivityError::NotRegistered => {
                        StatusCode::BAD_REQUEST
                    }
                    ActivityError::SignupFailed | ActivityError::UnregisterFailed => {
                        StatusCode::INTERNAL_SERVER_ERROR
                    }
                    ActivityError::Storage(e) => {
                        tracing::error!("❌ Activity store error: {:#}", e);
                        return (
                            StatusCode::INTERNAL_SERVER_ERROR,
                            Json(json!({ "detail": "Internal server error" })),
                        )
                            .into_response();
                    }
                };
                (status, err.to_string())
            }
        };

        (status, Json(json!({ "detail": detail }))).into_response()
    }
}

/// Create activity routes
///
/// Activity names arrive percent-decoded in the path (e.g. "Chess%20Club").
pub fn create_activity_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/activities", get(list_activities))
        .route("/activities/{activity_name}/signup", post(signup_for_activity))
        .route("/activities/{activity_name}/unregister", post(unregister_from_activity))
}

/// GET /
///
/// Sends browsers to the static landing page.
async fn root() -> Redirect {
    Redirect::temporary("/static/index.html")
}

/// List all activities
///
/// GET /activities
/// Returns: { "Chess Club": { "description": "...", "schedule": "...", "max_participants": 12, "participants": [...] }, ... }
async fn list_activities(State(state): State<AppState>) -> Result<Json<ActivityMap>, ApiError> {
    let activities = state.service.list_activities().await?;
    Ok(Json(activities))
}

/// Sign up a student for an activity
///
/// POST /activities/{activity_name}/signup?email=...
async fn signup_for_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let email = query.into_email().ok_or(ApiError::MissingEmail)?;

    match state.service.sign_up(&activity_name, &email).await {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            tracing::warn!("Signup of {} for '{}' rejected: {}", email, activity_name, e);
            Err(e.into())
        }
    }
}

/// Unregister a student from an activity
///
/// POST /activities/{activity_name}/unregister?email=...
async fn unregister_from_activity(
    State(state): State<AppState>,
    Path(activity_name): Path<String>,
    query: Result<Query<EmailQuery>, QueryRejection>,
) -> Result<impl IntoResponse, ApiError> {
    let Query(query) = query?;
    let email = query.into_email().ok_or(ApiError::MissingEmail)?;

    match state.service.unregister(&activity_name, &email).await {
        Ok(message) => Ok(Json(json!({ "message": message }))),
        Err(e) => {
            tracing::warn!("Unregister of {} from '{}' rejected: {}", email, activity_name, e);
            Err(e.into())
        }
    }
}

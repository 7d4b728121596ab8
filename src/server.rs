//! HTTP API for auth, notes, account deactivation, and the assistant.
//!
//! A thin axum adapter over the feature stores: every handler builds the
//! store it needs from the shared storage port, so the HTTP surface and the
//! local stores see exactly the same state. Errors are surfaced as
//! `{"message": …}` bodies with a 4xx status, matching what the front-end
//! shows in its alerts.

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{delete, get, post};
use axum::{Json, Router};
use rand::rngs::StdRng;
use rand::SeedableRng;
use serde::Deserialize;
use serde_json::json;
use tower_http::cors::CorsLayer;

use crate::assistant;
use crate::config::MemoaConfig;
use crate::db;
use crate::storage::{SqliteStorage, StoragePort};
use crate::store::users::AuthError;
use crate::store::{NoteStore, UserRegistry};

#[derive(Clone)]
pub struct AppState {
    pub storage: Arc<dyn StoragePort>,
    pub config: Arc<MemoaConfig>,
}

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Unauthorized(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Something went wrong.")]
    Internal(#[from] anyhow::Error),
}

impl From<AuthError> for ApiError {
    fn from(err: AuthError) -> Self {
        match err {
            AuthError::MissingFields | AuthError::DuplicateEmail | AuthError::WeakPassword => {
                Self::BadRequest(err.to_string())
            }
            AuthError::InvalidCredentials => Self::Unauthorized(err.to_string()),
            AuthError::UnknownUser => Self::NotFound(err.to_string()),
            AuthError::Storage(inner) => Self::Internal(inner),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::BadRequest(_) => StatusCode::BAD_REQUEST,
            Self::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            Self::NotFound(_) => StatusCode::NOT_FOUND,
            Self::Internal(err) => {
                tracing::error!(%err, "internal error");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };
        (status, Json(json!({ "message": self.to_string() }))).into_response()
    }
}

/// Build the API router over the given state.
pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health))
        .route("/api/register", post(register))
        .route("/api/login", post(login))
        .route("/api/notes", get(list_notes).post(create_note))
        .route("/api/notes/{id}", delete(delete_note))
        .route("/api/account/deactivate", post(deactivate))
        .route("/api/assistant", post(assistant_chat))
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Open the database and serve the API until ctrl-c.
pub async fn serve(config: MemoaConfig) -> anyhow::Result<()> {
    let db_path = config.resolved_db_path();
    let conn = db::open_database(&db_path)?;
    let storage: Arc<dyn StoragePort> = Arc::new(SqliteStorage::new(conn));

    let host = config.server.host.clone();
    let port = config.server.port;
    let bind_addr = format!("{host}:{port}");

    let state = AppState {
        storage,
        config: Arc::new(config),
    };

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;
    tracing::info!(addr = %bind_addr, "Memoa API listening at http://{bind_addr}/api");

    axum::serve(listener, router(state))
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c()
                .await
                .expect("failed to listen for ctrl-c");
            tracing::info!("shutting down");
        })
        .await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

#[derive(Deserialize)]
struct RegisterBody {
    #[serde(default)]
    name: String,
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let registry = UserRegistry::new(state.storage.clone());
    let user = registry.register(&body.name, &body.email, &body.password)?;
    Ok(Json(json!({ "user": user.to_session() })))
}

#[derive(Deserialize)]
struct LoginBody {
    #[serde(default)]
    email: String,
    #[serde(default)]
    password: String,
}

async fn login(
    State(state): State<AppState>,
    Json(body): Json<LoginBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if body.email.trim().is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "Email and password are required.".into(),
        ));
    }
    let registry = UserRegistry::new(state.storage.clone());
    let user = registry.login(&body.email, &body.password)?;
    Ok(Json(json!({ "user": user.to_session() })))
}

#[derive(Deserialize)]
struct NotesQuery {
    #[serde(rename = "userId")]
    user_id: Option<String>,
}

async fn list_notes(
    State(state): State<AppState>,
    Query(query): Query<NotesQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let Some(user_id) = query.user_id.filter(|id| !id.is_empty()) else {
        return Err(ApiError::BadRequest("Missing userId.".into()));
    };
    let notes = NoteStore::new(state.storage.clone()).list(&user_id)?;
    Ok(Json(json!({ "notes": notes })))
}

#[derive(Deserialize)]
struct CreateNoteBody {
    #[serde(rename = "userId", default)]
    user_id: String,
    #[serde(default)]
    content: String,
}

async fn create_note(
    State(state): State<AppState>,
    Json(body): Json<CreateNoteBody>,
) -> Result<(StatusCode, Json<serde_json::Value>), ApiError> {
    if body.user_id.is_empty() || body.content.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "userId and content are required.".into(),
        ));
    }
    let note = NoteStore::new(state.storage.clone()).create(&body.user_id, &body.content)?;
    Ok((StatusCode::CREATED, Json(json!({ "note": note }))))
}

async fn delete_note(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let removed = NoteStore::new(state.storage.clone()).delete_by_id(&id)?;
    if !removed {
        return Err(ApiError::NotFound("Note not found.".into()));
    }
    Ok(Json(json!({ "status": "deleted" })))
}

#[derive(Deserialize)]
struct DeactivateBody {
    #[serde(rename = "userId", default)]
    user_id: String,
    #[serde(default)]
    password: String,
}

async fn deactivate(
    State(state): State<AppState>,
    Json(body): Json<DeactivateBody>,
) -> Result<Json<serde_json::Value>, ApiError> {
    if body.user_id.is_empty() || body.password.is_empty() {
        return Err(ApiError::BadRequest(
            "userId and password are required.".into(),
        ));
    }
    let registry = UserRegistry::new(state.storage.clone());
    registry.deactivate(&body.user_id, &body.password)?;
    Ok(Json(json!({ "message": "Account deactivated." })))
}

#[derive(Deserialize)]
struct AssistantBody {
    #[serde(rename = "userId", default)]
    user_id: String,
    #[serde(default)]
    prompt: String,
}

async fn assistant_chat(
    State(state): State<AppState>,
    Json(body): Json<AssistantBody>,
) -> Result<Json<assistant::AssistantReply>, ApiError> {
    if body.user_id.is_empty() || body.prompt.trim().is_empty() {
        return Err(ApiError::BadRequest(
            "userId and prompt are required.".into(),
        ));
    }

    // Cosmetic stagger so the reply lands like a typing bot.
    let delay = state.config.assistant.reply_delay_ms;
    if delay > 0 {
        tokio::time::sleep(std::time::Duration::from_millis(delay)).await;
    }

    let store = NoteStore::new(state.storage.clone());
    let mut notes = store.list(&body.user_id)?;
    let mut rng = StdRng::from_os_rng();
    let reply = assistant::run(&mut notes, &body.prompt, &mut rng);
    if reply.mutated() {
        store.replace(&body.user_id, &notes)?;
    }
    Ok(Json(reply))
}

use std::{collections::HashMap, sync::Arc};

use axum::{
    extract::{Path, Request, State},
    http::{StatusCode, Uri},
    middleware::{self, Next},
    response::Response,
    routing::{get, post},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tokio::{net::TcpListener, sync::RwLock};
use tracing::{debug, info};

pub mod config;

pub use config::{Config, ConfigError};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: u64,
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

#[derive(Deserialize)]
pub struct CreateTodo {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Todos keyed by `(project_id, todolist_id)`, in insertion order.
#[derive(Debug, Default)]
pub struct Store {
    next_id: u64,
    lists: HashMap<(u64, u64), Vec<Todo>>,
}

impl Store {
    pub fn insert(
        &mut self,
        project_id: u64,
        todolist_id: u64,
        title: Option<String>,
        notes: Option<String>,
    ) -> Todo {
        self.next_id += 1;
        let todo = Todo {
            id: self.next_id,
            title,
            notes,
        };
        self.lists
            .entry((project_id, todolist_id))
            .or_default()
            .push(todo.clone());
        todo
    }

    pub fn list(&self, project_id: u64, todolist_id: u64) -> Vec<Todo> {
        self.lists
            .get(&(project_id, todolist_id))
            .cloned()
            .unwrap_or_default()
    }
}

pub type Db = Arc<RwLock<Store>>;

type JsonError = (StatusCode, Json<Value>);

pub fn app() -> Router {
    app_with_db(Db::default())
}

pub fn app_with_db(db: Db) -> Router {
    Router::new()
        .route("/todos/{project_id}/{todolist_id}", get(get_todos))
        .route("/create_todo/{project_id}/{todolist_id}", post(create_todo))
        .route("/test", get(test_route))
        .fallback(not_found)
        .layer(middleware::from_fn(log_exchange))
        .with_state(db)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    run_with_db(listener, Db::default()).await
}

pub async fn run_with_db(listener: TcpListener, db: Db) -> Result<(), std::io::Error> {
    axum::serve(listener, app_with_db(db)).await
}

async fn log_exchange(request: Request, next: Next) -> Response {
    debug!(method = %request.method(), uri = %request.uri(), headers = ?request.headers(), "Request");
    let response = next.run(request).await;
    debug!(status = %response.status(), headers = ?response.headers(), "Response");
    response
}

/// Ids are integers; anything else is answered like an unknown path.
fn parse_ids(uri: &Uri, project_id: &str, todolist_id: &str) -> Result<(u64, u64), JsonError> {
    match (project_id.parse(), todolist_id.parse()) {
        (Ok(project_id), Ok(todolist_id)) => Ok((project_id, todolist_id)),
        _ => Err(path_not_found(uri)),
    }
}

async fn get_todos(
    State(db): State<Db>,
    uri: Uri,
    Path((project_id, todolist_id)): Path<(String, String)>,
) -> Result<Json<Vec<Todo>>, JsonError> {
    let (project_id, todolist_id) = parse_ids(&uri, &project_id, &todolist_id)?;
    debug!(project_id, todolist_id, "Received request for todos");
    let todos = db.read().await.list(project_id, todolist_id);
    info!(count = todos.len(), "Returning todos");
    Ok(Json(todos))
}

async fn create_todo(
    State(db): State<Db>,
    uri: Uri,
    Path((project_id, todolist_id)): Path<(String, String)>,
    Json(input): Json<CreateTodo>,
) -> Result<(StatusCode, Json<Todo>), JsonError> {
    let (project_id, todolist_id) = parse_ids(&uri, &project_id, &todolist_id)?;
    let title = match input.title {
        Some(title) if !title.is_empty() => title,
        _ => {
            return Err((
                StatusCode::BAD_REQUEST,
                Json(json!({"error": "Title is required"})),
            ))
        }
    };
    let todo = db
        .write()
        .await
        .insert(project_id, todolist_id, Some(title), input.notes);
    Ok((StatusCode::CREATED, Json(todo)))
}

async fn test_route() -> Json<Value> {
    Json(json!({"message": "Test route working"}))
}

async fn not_found(uri: Uri) -> JsonError {
    path_not_found(&uri)
}

fn path_not_found(uri: &Uri) -> JsonError {
    let path = uri.path().trim_start_matches('/');
    debug!(path, "Caught request for unknown path");
    (
        StatusCode::NOT_FOUND,
        Json(json!({"error": format!("Path not found: {path}")})),
    )
}

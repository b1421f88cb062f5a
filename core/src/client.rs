//! Stateless HTTP request builder and response parser for the todos API.
//!
//! # Design
//! `TodoClient` holds only a `base_url`. Each operation is split into a
//! `build_*` method that produces an `HttpRequest` and a `parse_*` method
//! that consumes an `HttpResponse`; the caller executes the round-trip.
//!
//! `parse_fetch_todos` deliberately ignores the status code: whatever JSON
//! the server sends back is what gets rendered.

use tracing::debug;

use crate::error::ApiError;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::types::{NewTodo, Todo, TodoPayload};

/// Synchronous, stateless client for the todos API.
#[derive(Debug, Clone)]
pub struct TodoClient {
    base_url: String,
}

impl TodoClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// GET `/todos/{project_id}/{todo_list_id}`. Ids are interpolated as-is.
    pub fn build_fetch_todos(&self, project_id: &str, todo_list_id: &str) -> HttpRequest {
        HttpRequest {
            method: HttpMethod::Get,
            path: format!("{}/todos/{project_id}/{todo_list_id}", self.base_url),
            headers: Vec::new(),
            body: None,
        }
    }

    pub fn build_create_todo(
        &self,
        project_id: &str,
        todo_list_id: &str,
        input: &NewTodo,
    ) -> Result<HttpRequest, ApiError> {
        let body = serde_json::to_string(input).map_err(|e| ApiError::SerializationError(e.to_string()))?;
        Ok(HttpRequest {
            method: HttpMethod::Post,
            path: format!("{}/create_todo/{project_id}/{todo_list_id}", self.base_url),
            headers: vec![("content-type".to_string(), "application/json".to_string())],
            body: Some(body),
        })
    }

    /// Parse the body of a fetch, whatever the status.
    ///
    /// A JSON array must hold todos; any other JSON value comes back as
    /// `TodoPayload::Other` for the caller to decide on.
    pub fn parse_fetch_todos(&self, response: HttpResponse) -> Result<TodoPayload, ApiError> {
        debug!(status = response.status, "Response status");
        debug!(headers = ?response.headers, "Response headers");

        let value: serde_json::Value = serde_json::from_str(&response.body)
            .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
        match value {
            serde_json::Value::Array(_) => {
                let todos: Vec<Todo> = serde_json::from_value(value)
                    .map_err(|e| ApiError::DeserializationError(e.to_string()))?;
                Ok(TodoPayload::List(todos))
            }
            other => Ok(TodoPayload::Other(other)),
        }
    }

    pub fn parse_create_todo(&self, response: HttpResponse) -> Result<Todo, ApiError> {
        check_status(&response, 201)?;
        serde_json::from_str(&response.body).map_err(|e| ApiError::DeserializationError(e.to_string()))
    }
}

/// Map non-success status codes to the appropriate `ApiError` variant.
fn check_status(response: &HttpResponse, expected: u16) -> Result<(), ApiError> {
    if response.status == expected {
        return Ok(());
    }
    if response.status == 404 {
        return Err(ApiError::NotFound);
    }
    Err(ApiError::HttpError {
        status: response.status,
        body: response.body.clone(),
    })
}

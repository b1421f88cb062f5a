//! Fetch-and-render driver for a selected todo list.
//!
//! # Design
//! Each fetch is split into `begin_fetch` (read the project id, build the
//! request, take a generation number) and `complete_fetch` (render the
//! result if the generation is still current). `fetch_todos` runs both
//! around a `Transport` call; hosts that do their own I/O call the halves
//! directly.
//!
//! The generation counter is bumped under the view lock, so checking it and
//! rendering happen atomically with respect to other selections.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, error, info};

use crate::client::TodoClient;
use crate::error::ApiError;
use crate::http::{HttpRequest, HttpResponse, Transport};
use crate::render;
use crate::types::TodoPayload;
use crate::view::TodoView;

/// A fetch in flight: the request to execute and the generation it belongs to.
#[derive(Debug, Clone)]
pub struct FetchTicket {
    generation: u64,
    todo_list_id: String,
    request: HttpRequest,
}

impl FetchTicket {
    pub fn request(&self) -> &HttpRequest {
        &self.request
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn todo_list_id(&self) -> &str {
        &self.todo_list_id
    }
}

/// What `complete_fetch` did with a response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FetchOutcome {
    /// The todos were rendered; holds how many.
    Rendered(usize),
    /// The error was rendered in place of the todos.
    Failed(ApiError),
    /// A newer selection superseded this fetch; nothing was rendered.
    Discarded,
}

/// Loads the todos of the selected todo list into a `TodoView`.
#[derive(Debug)]
pub struct TodoListLoader<V> {
    client: TodoClient,
    view: Mutex<V>,
    generation: AtomicU64,
}

impl<V: TodoView> TodoListLoader<V> {
    pub fn new(client: TodoClient, view: V) -> Self {
        Self {
            client,
            view: Mutex::new(view),
            generation: AtomicU64::new(0),
        }
    }

    /// Lock the view. Rendering never panics midway, so a poisoned lock
    /// still holds a consistent view.
    pub fn view(&self) -> MutexGuard<'_, V> {
        self.view.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn into_view(self) -> V {
        self.view.into_inner().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn begin_fetch(&self, todo_list_id: &str) -> FetchTicket {
        info!(todo_list_id, "Fetching todos for todo list");
        let view = self.view();
        let project_id = view.selected_project_id();
        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        drop(view);

        let request = self.client.build_fetch_todos(&project_id, todo_list_id);
        debug!(generation, path = %request.path, "Built todos request");
        FetchTicket {
            generation,
            todo_list_id: todo_list_id.to_string(),
            request,
        }
    }

    pub fn complete_fetch(
        &self,
        ticket: FetchTicket,
        result: Result<HttpResponse, ApiError>,
    ) -> FetchOutcome {
        let mut view = self.view();
        let latest = self.generation.load(Ordering::SeqCst);
        if ticket.generation != latest {
            match &result {
                Ok(response) => debug!(
                    generation = ticket.generation,
                    latest,
                    todo_list_id = %ticket.todo_list_id,
                    status = response.status,
                    "Discarding stale todos response"
                ),
                Err(err) => debug!(
                    generation = ticket.generation,
                    latest,
                    todo_list_id = %ticket.todo_list_id,
                    error = %err,
                    "Discarding stale todos response"
                ),
            }
            return FetchOutcome::Discarded;
        }

        let payload = result.and_then(|response| self.client.parse_fetch_todos(response));
        match payload {
            Ok(TodoPayload::List(todos)) => {
                debug!(?todos, "Todos received");
                let count = todos.len();
                render::populate_todos_dropdown(&mut *view, &todos);
                render::display_todos(&mut *view, &TodoPayload::List(todos));
                FetchOutcome::Rendered(count)
            }
            Ok(TodoPayload::Other(value)) => {
                debug!(%value, "Todos received");
                let err = ApiError::UnexpectedPayload(json_kind(&value));
                fail(&mut *view, err)
            }
            Err(err) => fail(&mut *view, err),
        }
    }

    pub async fn fetch_todos<T: Transport>(&self, transport: &T, todo_list_id: &str) -> FetchOutcome {
        let ticket = self.begin_fetch(todo_list_id);
        let result = transport.execute(ticket.request.clone()).await;
        self.complete_fetch(ticket, result)
    }

    /// Handle a change of the todo list selector.
    ///
    /// An empty selection resets the view without any request and returns
    /// `None`; it also invalidates fetches still in flight.
    pub async fn on_todo_list_selected<T: Transport>(
        &self,
        transport: &T,
        selected: &str,
    ) -> Option<FetchOutcome> {
        info!(todo_list_id = selected, "Selected todo list");
        if selected.is_empty() {
            self.reset();
            return None;
        }
        Some(self.fetch_todos(transport, selected).await)
    }

    pub fn reset(&self) {
        let mut view = self.view();
        self.generation.fetch_add(1, Ordering::SeqCst);
        render::reset(&mut *view);
    }
}

fn fail<V: TodoView + ?Sized>(view: &mut V, err: ApiError) -> FetchOutcome {
    error!(error = %err, "Error fetching todos");
    render::display_error(view, &err.to_string());
    FetchOutcome::Failed(err)
}

fn json_kind(value: &serde_json::Value) -> &'static str {
    match value {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "a boolean",
        serde_json::Value::Number(_) => "a number",
        serde_json::Value::String(_) => "a string",
        serde_json::Value::Array(_) => "an array",
        serde_json::Value::Object(_) => "an object",
    }
}

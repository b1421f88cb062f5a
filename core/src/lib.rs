//! Loads the todos of a selected todo list and renders them into a view.
//!
//! # Overview
//! `TodoClient` builds `HttpRequest` values and parses `HttpResponse` values
//! without touching the network (host-does-IO pattern). `TodoListLoader`
//! drives one fetch per selection through a `Transport`, then writes the
//! result into a `TodoView`: the todo dropdown and the todo list container.
//!
//! # Design
//! - UI state is never global. The view is an explicit handle owned by the
//!   loader, so the whole component runs headless in tests.
//! - Every fetch carries a generation number. A response whose generation
//!   is no longer the latest is dropped before rendering, so a slow answer
//!   for an earlier selection never overwrites a newer one.
//! - The response body is parsed whatever the HTTP status is. A server
//!   that answers 500 with a JSON array still renders the array.

pub mod client;
pub mod error;
pub mod http;
pub mod loader;
pub mod render;
pub mod types;
pub mod view;

pub use client::TodoClient;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse, Transport, UreqTransport};
pub use loader::{FetchOutcome, FetchTicket, TodoListLoader};
pub use render::{SelectOption, TodoListContent};
pub use types::{NewTodo, Todo, TodoId, TodoPayload};
pub use view::{MemoryView, TodoView};

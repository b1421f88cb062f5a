//! Domain DTOs for the todos endpoint.
//!
//! # Design
//! Only `id` and `title` are consumed. Servers send many more fields per
//! todo; serde ignores them. These types are defined independently from the
//! mock-server's; the integration tests catch schema drift.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Label shown for a todo whose title is missing or empty.
pub const UNNAMED_TODO: &str = "Unnamed todo";

/// Identifier of a todo. Any JSON number or string is accepted.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(untagged)]
pub enum TodoId {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for TodoId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoId::Number(n) => write!(f, "{n}"),
            TodoId::Text(s) => f.write_str(s),
        }
    }
}

/// A single todo item returned by the API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Todo {
    pub id: TodoId,
    #[serde(default)]
    pub title: Option<String>,
}

impl Todo {
    /// The text shown for this todo: its title, or `Unnamed todo`.
    pub fn label(&self) -> &str {
        match self.title.as_deref() {
            Some(title) if !title.is_empty() => title,
            _ => UNNAMED_TODO,
        }
    }
}

/// A parsed response body from the todos endpoint.
#[derive(Debug, Clone, PartialEq)]
pub enum TodoPayload {
    List(Vec<Todo>),
    /// Valid JSON that is not an array, e.g. `{"error": "..."}`.
    Other(serde_json::Value),
}

impl TodoPayload {
    pub fn as_list(&self) -> Option<&[Todo]> {
        match self {
            TodoPayload::List(todos) => Some(todos),
            TodoPayload::Other(_) => None,
        }
    }
}

/// Request payload for creating a todo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NewTodo {
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

//! Turns fetched todos into dropdown options and list content.
//!
//! The builders (`dropdown_options`, `list_content`) are pure; the
//! remaining functions write their output into a `TodoView`, fully
//! replacing whatever the view showed before.

use std::fmt;

use crate::types::{Todo, TodoPayload};
use crate::view::TodoView;

pub const SELECT_A_TODO: &str = "Select a todo";
pub const NO_TODOS_FOUND: &str = "No todos found.";
pub const ERROR_LOADING_TODOS: &str = "Error loading todos";

/// One entry of the todo dropdown.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub value: String,
    pub label: String,
}

impl SelectOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// The empty-selection entry heading every dropdown.
    pub fn placeholder() -> Self {
        Self::new("", SELECT_A_TODO)
    }
}

/// What the todo list container shows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum TodoListContent {
    #[default]
    Cleared,
    NoTodos,
    /// One block per todo, in server order.
    Items(Vec<String>),
    Error(String),
}

impl fmt::Display for TodoListContent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TodoListContent::Cleared => Ok(()),
            TodoListContent::NoTodos => f.write_str(NO_TODOS_FOUND),
            TodoListContent::Items(items) => f.write_str(&items.join("\n")),
            TodoListContent::Error(message) => write!(f, "{ERROR_LOADING_TODOS}: {message}"),
        }
    }
}

pub fn dropdown_options(todos: &[Todo]) -> Vec<SelectOption> {
    std::iter::once(SelectOption::placeholder())
        .chain(
            todos
                .iter()
                .map(|todo| SelectOption::new(todo.id.to_string(), todo.label())),
        )
        .collect()
}

pub fn list_content(payload: &TodoPayload) -> TodoListContent {
    match payload.as_list() {
        Some(todos) if !todos.is_empty() => {
            TodoListContent::Items(todos.iter().map(|todo| todo.label().to_string()).collect())
        }
        _ => TodoListContent::NoTodos,
    }
}

pub fn populate_todos_dropdown<V: TodoView + ?Sized>(view: &mut V, todos: &[Todo]) {
    view.replace_todo_options(dropdown_options(todos));
}

pub fn display_todos<V: TodoView + ?Sized>(view: &mut V, payload: &TodoPayload) {
    view.replace_todo_list(list_content(payload));
}

/// The dropdown collapses to a single error entry.
pub fn display_error<V: TodoView + ?Sized>(view: &mut V, message: &str) {
    view.replace_todo_list(TodoListContent::Error(message.to_string()));
    view.replace_todo_options(vec![SelectOption::new("", ERROR_LOADING_TODOS)]);
}

pub fn reset<V: TodoView + ?Sized>(view: &mut V) {
    view.replace_todo_options(vec![SelectOption::placeholder()]);
    view.replace_todo_list(TodoListContent::Cleared);
}

//! The UI surface the loader reads from and renders into.

use crate::render::{SelectOption, TodoListContent};

/// Handles to the three page elements the loader touches.
pub trait TodoView {
    /// Current value of the project selector.
    fn selected_project_id(&self) -> String;

    /// Replace every option of the todo dropdown.
    fn replace_todo_options(&mut self, options: Vec<SelectOption>);

    /// Replace the content of the todo list container.
    fn replace_todo_list(&mut self, content: TodoListContent);
}

/// A `TodoView` that keeps its state in memory.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MemoryView {
    pub project_id: String,
    pub todo_options: Vec<SelectOption>,
    pub todo_list: TodoListContent,
    /// Number of replace calls received so far.
    pub updates: usize,
}

impl MemoryView {
    pub fn new(project_id: &str) -> Self {
        Self {
            project_id: project_id.to_string(),
            todo_options: vec![SelectOption::placeholder()],
            ..Self::default()
        }
    }

    pub fn option_labels(&self) -> Vec<&str> {
        self.todo_options.iter().map(|o| o.label.as_str()).collect()
    }
}

impl TodoView for MemoryView {
    fn selected_project_id(&self) -> String {
        self.project_id.clone()
    }

    fn replace_todo_options(&mut self, options: Vec<SelectOption>) {
        self.todo_options = options;
        self.updates += 1;
    }

    fn replace_todo_list(&mut self, content: TodoListContent) {
        self.todo_list = content;
        self.updates += 1;
    }
}

use super::models::{ALTERNATE_USER_NAME, AppState, DEFAULT_USER_NAME, TodoItem};

/// A state change requested by a child component.
#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Create(String),
    Toggle(TodoItem),
    SetVisibility(bool),
    ChangeUserName,
}

impl AppState {
    /// Appends a new open record unless the text is blank or already present.
    pub fn with_todo(&self, action: &str) -> Self {
        let mut next = self.clone();
        if !action.trim().is_empty() && !self.contains_action(action) {
            next.todo_items.push(TodoItem::new(action.to_string(), false));
        }
        next
    }

    pub fn with_toggled(&self, todo: &TodoItem) -> Self {
        let todo_items = self
            .todo_items
            .iter()
            .map(|item| {
                if item.id == todo.id {
                    TodoItem {
                        done: !item.done,
                        ..item.clone()
                    }
                } else {
                    item.clone()
                }
            })
            .collect();

        Self {
            todo_items,
            ..self.clone()
        }
    }

    pub fn with_visibility(&self, show_completed: bool) -> Self {
        Self {
            show_completed,
            ..self.clone()
        }
    }

    pub fn with_next_user_name(&self) -> Self {
        let user_name = if self.user_name == DEFAULT_USER_NAME {
            ALTERNATE_USER_NAME
        } else {
            DEFAULT_USER_NAME
        };

        Self {
            user_name: user_name.to_string(),
            ..self.clone()
        }
    }

    pub fn apply(&self, message: &Message) -> Self {
        match message {
            Message::Create(action) => self.with_todo(action),
            Message::Toggle(todo) => self.with_toggled(todo),
            Message::SetVisibility(flag) => self.with_visibility(*flag),
            Message::ChangeUserName => self.with_next_user_name(),
        }
    }
}

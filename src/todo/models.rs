use serde::{Deserialize, Serialize};
use uuid::Uuid;

pub const DEFAULT_USER_NAME: &str = "Sean";
pub const ALTERNATE_USER_NAME: &str = "Bob";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoItem {
    // Snapshots written before ids existed get one on load.
    #[serde(default = "Uuid::new_v4")]
    pub id: Uuid,
    pub action: String,
    pub done: bool,
}

impl TodoItem {
    pub fn new(action: String, done: bool) -> Self {
        Self {
            id: Uuid::new_v4(),
            action,
            done,
        }
    }
}

/// The whole persisted snapshot. Field names match the stored JSON layout
/// (`userName`, `todoItems`, `showCompleted`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppState {
    pub user_name: String,
    pub todo_items: Vec<TodoItem>,
    pub show_completed: bool,
}

impl AppState {
    pub fn new(user_name: String, todo_items: Vec<TodoItem>, show_completed: bool) -> Self {
        Self {
            user_name,
            todo_items,
            show_completed,
        }
    }

    /// Fallback used when nothing valid has been persisted yet.
    pub fn seed() -> Self {
        Self::new(
            DEFAULT_USER_NAME.to_string(),
            vec![
                TodoItem::new("Buy Flowers".to_string(), false),
                TodoItem::new("Get Shoes".to_string(), false),
                TodoItem::new("HE NEED SOME MILK".to_string(), true),
                TodoItem::new("Work towards world peace".to_string(), true),
            ],
            true,
        )
    }

    pub fn contains_action(&self, action: &str) -> bool {
        self.todo_items.iter().any(|item| item.action == action)
    }

    pub fn incomplete_items(&self) -> Vec<&TodoItem> {
        self.todo_items.iter().filter(|item| !item.done).collect()
    }

    pub fn completed_items(&self) -> Vec<&TodoItem> {
        self.todo_items.iter().filter(|item| item.done).collect()
    }

    pub fn items_left(&self) -> usize {
        self.todo_items.iter().filter(|item| !item.done).count()
    }

    /// Rows in on-screen order: incomplete first, then completed when shown.
    pub fn visible_items(&self) -> Vec<&TodoItem> {
        let mut items = self.incomplete_items();
        if self.show_completed {
            items.extend(self.completed_items());
        }
        items
    }
}

use super::models::AppState;
use super::store::KeyValueStore;
use anyhow::{Context, Result, bail};
use std::collections::HashSet;

pub const STORAGE_KEY: &str = "todos";

pub trait Persistence {
    fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<()>;
}

impl Persistence for AppState {
    fn save_to(&self, store: &mut dyn KeyValueStore) -> Result<()> {
        let json = serde_json::to_string(self).context("Failed to serialize todo snapshot")?;
        store.set(STORAGE_KEY, &json)
    }
}

/// Loads the persisted snapshot, falling back to the seed state when nothing
/// is stored or the stored value is unusable.
pub fn load_state(store: &dyn KeyValueStore) -> AppState {
    match store.get(STORAGE_KEY) {
        Ok(Some(raw)) => match parse_snapshot(&raw) {
            Ok(state) => {
                log::info!("Loaded {} todo items from store", state.todo_items.len());
                state
            }
            Err(e) => {
                log::warn!("Ignoring malformed snapshot, using seed state: {:#}", e);
                AppState::seed()
            }
        },
        Ok(None) => {
            log::info!("No snapshot stored, using seed state");
            AppState::seed()
        }
        Err(e) => {
            log::warn!("Failed to read store, using seed state: {:#}", e);
            AppState::seed()
        }
    }
}

/// Forgets the saved snapshot so the next load starts from the seed state.
pub fn reset(store: &mut dyn KeyValueStore) -> Result<()> {
    store.remove(STORAGE_KEY)?;
    log::info!("Removed saved todo snapshot");
    Ok(())
}

pub fn parse_snapshot(raw: &str) -> Result<AppState> {
    let state: AppState = serde_json::from_str(raw).context("Snapshot is not a valid state object")?;
    validate(&state)?;
    Ok(state)
}

fn validate(state: &AppState) -> Result<()> {
    let mut actions = HashSet::new();
    let mut ids = HashSet::new();

    for item in &state.todo_items {
        if item.action.is_empty() {
            bail!("Snapshot contains a todo with empty text");
        }
        if !actions.insert(item.action.as_str()) {
            bail!("Snapshot contains duplicate todo '{}'", item.action);
        }
        if !ids.insert(item.id) {
            bail!("Snapshot contains duplicate id {}", item.id);
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::store::MemoryStore;

    #[test]
    fn test_empty_store_loads_seed() {
        let store = MemoryStore::new();
        let state = load_state(&store);

        assert_eq!(state.user_name, "Sean");
        assert_eq!(state.todo_items.len(), 4);
    }

    #[test]
    fn test_save_then_load_round_trips() {
        let mut store = MemoryStore::new();
        let state = AppState::seed().with_todo("Buy Milk");
        let toggled = state.with_toggled(&state.todo_items[0].clone());

        toggled.save_to(&mut store).unwrap();
        let loaded = load_state(&store);

        assert_eq!(loaded, toggled);
    }

    #[test]
    fn test_legacy_snapshot_without_ids_loads() {
        let mut store = MemoryStore::new();
        let raw = r#"{
            "userName": "Bob",
            "todoItems": [
                {"action": "Buy Flowers", "done": false},
                {"action": "Buy Milk", "done": true}
            ],
            "showCompleted": false
        }"#;
        store.set(STORAGE_KEY, raw).unwrap();

        let state = load_state(&store);
        assert_eq!(state.user_name, "Bob");
        assert!(!state.show_completed);
        assert_eq!(state.todo_items.len(), 2);
        assert_eq!(state.todo_items[1].action, "Buy Milk");
        assert!(state.todo_items[1].done);
        assert_ne!(state.todo_items[0].id, state.todo_items[1].id);
    }

    #[test]
    fn test_not_json_falls_back_to_seed() {
        let mut store = MemoryStore::new();
        store.set(STORAGE_KEY, "{{{").unwrap();

        assert_eq!(load_state(&store).todo_items.len(), 4);
    }

    #[test]
    fn test_wrong_shape_falls_back_to_seed() {
        let mut store = MemoryStore::new();
        store
            .set(STORAGE_KEY, r#"{"userName": "Sean", "todoItems": "nope", "showCompleted": true}"#)
            .unwrap();

        assert_eq!(load_state(&store).todo_items.len(), 4);
    }

    #[test]
    fn test_duplicate_actions_rejected() {
        let raw = r#"{
            "userName": "Sean",
            "todoItems": [
                {"action": "Same", "done": false},
                {"action": "Same", "done": true}
            ],
            "showCompleted": true
        }"#;

        assert!(parse_snapshot(raw).is_err());
    }

    #[test]
    fn test_empty_action_rejected() {
        let raw = r#"{"userName": "Sean", "todoItems": [{"action": "", "done": false}], "showCompleted": true}"#;

        assert!(parse_snapshot(raw).is_err());
    }

    #[test]
    fn test_empty_list_is_valid() {
        let raw = r#"{"userName": "Sean", "todoItems": [], "showCompleted": true}"#;
        let state = parse_snapshot(raw).unwrap();

        assert!(state.todo_items.is_empty());
    }

    #[test]
    fn test_reset_removes_only_the_snapshot() {
        let mut store = MemoryStore::new();
        store.set("other", "kept").unwrap();
        AppState::seed().with_todo("Buy Milk").save_to(&mut store).unwrap();

        reset(&mut store).unwrap();

        assert_eq!(store.get(STORAGE_KEY).unwrap(), None);
        assert_eq!(store.get("other").unwrap().as_deref(), Some("kept"));
        // Resetting an empty store is fine
        reset(&mut store).unwrap();
    }

    #[test]
    fn test_saved_under_todos_key() {
        let mut store = MemoryStore::new();
        AppState::seed().save_to(&mut store).unwrap();

        let raw = store.get("todos").unwrap().unwrap();
        assert!(raw.contains("\"todoItems\""));
        assert!(raw.contains("\"Buy Flowers\""));
    }
}

use crate::todo::models::{AppState, TodoItem};
use crate::todo::persistence::{self, Persistence};
use crate::todo::reducer::Message;
use crate::todo::store::KeyValueStore;
use crate::tui::components::creator::TodoCreator;
use crate::tui::components::row::TodoRow;
use crate::tui::components::visibility::VisibilityControl;
use crate::tui::handlers::{CreatorAction, HelpModeAction, KeyHandler, ListAction};
use anyhow::Result;
use crossterm::event::KeyEvent;

pub const COMPLETED_DESCRIPTION: &str = "Completed Tasks";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Creator,
}

/// Owns the snapshot and the store. Children only ever see borrowed views
/// of the state and report back through `Message`s.
#[derive(Debug)]
pub struct App {
    pub state: AppState,
    pub creator: TodoCreator,
    pub focus: Focus,
    /// Index into `visible_items()`.
    pub selected_index: usize,
    pub help_mode: bool,
    pub should_quit: bool,
    store: Box<dyn KeyValueStore>,
}

impl App {
    pub fn new(state: AppState, store: Box<dyn KeyValueStore>) -> Self {
        Self {
            state,
            creator: TodoCreator::new(),
            focus: Focus::List,
            selected_index: 0,
            help_mode: false,
            should_quit: false,
            store,
        }
    }

    /// Starts from whatever the store holds, or the seed state.
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let state = persistence::load_state(store.as_ref());
        Self::new(state, store)
    }

    pub fn store(&self) -> &dyn KeyValueStore {
        self.store.as_ref()
    }

    pub fn handle_key_event(&mut self, key_event: KeyEvent) -> Result<()> {
        if self.help_mode {
            self.handle_help_mode_key(key_event);
        } else {
            match self.focus {
                Focus::List => self.handle_list_key(key_event),
                Focus::Creator => self.handle_creator_key(key_event),
            }
        }
        Ok(())
    }

    fn handle_list_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_list_key(key_event) {
            ListAction::Quit => self.should_quit = true,
            ListAction::MoveSelectionUp => self.move_selection_up(),
            ListAction::MoveSelectionDown => self.move_selection_down(),
            ListAction::ToggleSelectedItem => {
                if let Some(message) = self.selected_item().map(|item| TodoRow::new(item).on_toggle()) {
                    self.dispatch(message);
                }
            }
            ListAction::FocusCreator => self.set_focus(Focus::Creator),
            ListAction::ToggleShowCompleted => {
                let message =
                    VisibilityControl::new(COMPLETED_DESCRIPTION, self.state.show_completed).on_change();
                self.dispatch(message);
            }
            ListAction::ChangeUserName => self.change_user_name(),
            ListAction::ToggleHelpMode => self.help_mode = true,
            ListAction::None => {}
        }
    }

    fn handle_help_mode_key(&mut self, key_event: KeyEvent) {
        match KeyHandler::handle_help_mode_key(key_event) {
            HelpModeAction::ExitHelpMode => self.help_mode = false,
            HelpModeAction::None => {}
        }
    }

    fn handle_creator_key(&mut self, key_event: KeyEvent) {
        let action = KeyHandler::handle_creator_key(key_event);
        if action == CreatorAction::Leave {
            self.set_focus(Focus::List);
            return;
        }

        if let Some(message) = self.creator.handle_action(action) {
            self.dispatch(message);
        }
    }

    fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.creator.focused = focus == Focus::Creator;
    }

    /// Applies a child's request, stores the new snapshot and persists it
    /// when anything actually changed.
    pub fn dispatch(&mut self, message: Message) {
        log::debug!("Dispatching {:?}", message);

        let next = self.state.apply(&message);
        if next == self.state {
            log::debug!("Message left state unchanged");
            return;
        }

        self.state = next;
        self.clamp_selection();
        self.persist();
    }

    pub fn create_todo(&mut self, text: &str) {
        self.dispatch(Message::Create(text.to_string()));
    }

    pub fn toggle_todo(&mut self, todo: &TodoItem) {
        self.dispatch(Message::Toggle(todo.clone()));
    }

    pub fn set_visibility(&mut self, show_completed: bool) {
        self.dispatch(Message::SetVisibility(show_completed));
    }

    pub fn change_user_name(&mut self) {
        self.dispatch(Message::ChangeUserName);
    }

    fn persist(&mut self) {
        if let Err(e) = self.state.save_to(self.store.as_mut()) {
            log::warn!("Failed to save todos: {:#}", e);
        }
    }

    pub fn visible_items(&self) -> Vec<&TodoItem> {
        self.state.visible_items()
    }

    pub fn selected_item(&self) -> Option<&TodoItem> {
        self.visible_items().get(self.selected_index).copied()
    }

    fn move_selection_up(&mut self) {
        self.selected_index = self.selected_index.saturating_sub(1);
    }

    fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.visible_items().len() {
            self.selected_index += 1;
        }
    }

    fn clamp_selection(&mut self) {
        let visible = self.visible_items().len();
        if self.selected_index >= visible {
            self.selected_index = visible.saturating_sub(1);
        }
    }
}

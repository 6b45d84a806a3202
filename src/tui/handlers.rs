use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

pub struct KeyHandler;

impl KeyHandler {
    pub fn handle_list_key(key_event: KeyEvent) -> ListAction {
        match key_event.code {
            KeyCode::Char('q') => ListAction::Quit,
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                ListAction::Quit
            }
            KeyCode::Up | KeyCode::Char('k') => ListAction::MoveSelectionUp,
            KeyCode::Down | KeyCode::Char('j') => ListAction::MoveSelectionDown,
            KeyCode::Enter | KeyCode::Char(' ') => ListAction::ToggleSelectedItem,
            KeyCode::Char('a') | KeyCode::Char('i') | KeyCode::Tab => ListAction::FocusCreator,
            KeyCode::Char('c') => ListAction::ToggleShowCompleted,
            KeyCode::Char('n') => ListAction::ChangeUserName,
            KeyCode::Char('?') => ListAction::ToggleHelpMode,
            _ => ListAction::None,
        }
    }

    pub fn handle_help_mode_key(key_event: KeyEvent) -> HelpModeAction {
        match key_event.code {
            KeyCode::Char('q') | KeyCode::Esc | KeyCode::Char('?') => {
                HelpModeAction::ExitHelpMode
            }
            _ => HelpModeAction::None,
        }
    }

    pub fn handle_creator_key(key_event: KeyEvent) -> CreatorAction {
        let ctrl = key_event.modifiers.contains(KeyModifiers::CONTROL);
        match key_event.code {
            KeyCode::Esc | KeyCode::Tab => CreatorAction::Leave,
            KeyCode::Enter => CreatorAction::Submit,
            KeyCode::Backspace if ctrl => CreatorAction::DeleteWordBackward,
            KeyCode::Char('w') if ctrl => CreatorAction::DeleteWordBackward,
            KeyCode::Backspace => CreatorAction::Backspace,
            KeyCode::Delete => CreatorAction::Delete,
            KeyCode::Left => CreatorAction::MoveCursorLeft,
            KeyCode::Right => CreatorAction::MoveCursorRight,
            KeyCode::Home => CreatorAction::MoveCursorHome,
            KeyCode::End => CreatorAction::MoveCursorEnd,
            KeyCode::Char(_) if ctrl => CreatorAction::None,
            KeyCode::Char(c) => CreatorAction::InsertChar(c),
            _ => CreatorAction::None,
        }
    }
}

#[derive(Debug, PartialEq)]
pub enum ListAction {
    None,
    Quit,
    MoveSelectionUp,
    MoveSelectionDown,
    ToggleSelectedItem,
    FocusCreator,
    ToggleShowCompleted,
    ChangeUserName,
    ToggleHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum HelpModeAction {
    None,
    ExitHelpMode,
}

#[derive(Debug, PartialEq)]
pub enum CreatorAction {
    None,
    Leave,
    Submit,
    Backspace,
    Delete,
    DeleteWordBackward,
    MoveCursorLeft,
    MoveCursorRight,
    MoveCursorHome,
    MoveCursorEnd,
    InsertChar(char),
}

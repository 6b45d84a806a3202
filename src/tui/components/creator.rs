use crate::todo::reducer::Message;
use crate::tui::component::Component;
use crate::tui::handlers::CreatorAction;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Text input for new records. The buffer is local to this component and
/// never part of the persisted state.
#[derive(Debug, Default)]
pub struct TodoCreator {
    pub buffer: String,
    /// Byte offset into `buffer`, always on a char boundary.
    pub cursor_position: usize,
    pub focused: bool,
}

impl TodoCreator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn handle_action(&mut self, action: CreatorAction) -> Option<Message> {
        match action {
            CreatorAction::Submit => return self.submit(),
            CreatorAction::InsertChar(c) => self.insert_char(c),
            CreatorAction::Backspace => self.backspace(),
            CreatorAction::Delete => self.delete(),
            CreatorAction::DeleteWordBackward => self.delete_word_backward(),
            CreatorAction::MoveCursorLeft => self.move_cursor_left(),
            CreatorAction::MoveCursorRight => self.move_cursor_right(),
            CreatorAction::MoveCursorHome => self.cursor_position = 0,
            CreatorAction::MoveCursorEnd => self.cursor_position = self.buffer.len(),
            CreatorAction::Leave | CreatorAction::None => {}
        }
        None
    }

    /// Emits a create request for non-blank input. The buffer is cleared
    /// either way; whether the container accepts the text is not our concern.
    pub fn submit(&mut self) -> Option<Message> {
        let text = self.buffer.trim().to_string();
        self.clear();

        if text.is_empty() {
            None
        } else {
            Some(Message::Create(text))
        }
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor_position = 0;
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor_position, c);
        self.cursor_position += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.buffer.remove(previous);
            self.cursor_position = previous;
        }
    }

    pub fn delete(&mut self) {
        if self.cursor_position < self.buffer.len() {
            self.buffer.remove(self.cursor_position);
        }
    }

    pub fn move_cursor_left(&mut self) {
        if let Some(previous) = self.previous_boundary() {
            self.cursor_position = previous;
        }
    }

    pub fn move_cursor_right(&mut self) {
        if let Some(c) = self.buffer[self.cursor_position..].chars().next() {
            self.cursor_position += c.len_utf8();
        }
    }

    /// Removes trailing whitespace before the cursor, then the word before it.
    pub fn delete_word_backward(&mut self) {
        let before = &self.buffer[..self.cursor_position];
        let trimmed = before.trim_end();
        let word_start = trimmed
            .char_indices()
            .rev()
            .find(|(_, c)| c.is_whitespace())
            .map(|(i, c)| i + c.len_utf8())
            .unwrap_or(0);

        self.buffer.replace_range(word_start..self.cursor_position, "");
        self.cursor_position = word_start;
    }

    fn previous_boundary(&self) -> Option<usize> {
        self.buffer[..self.cursor_position]
            .char_indices()
            .next_back()
            .map(|(i, _)| i)
    }
}

impl Component for TodoCreator {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let (before_cursor, after_cursor) = self.buffer.split_at(self.cursor_position);
        let (text, style) = if self.focused {
            (
                format!("{}█{}", before_cursor, after_cursor),
                Style::default().fg(Color::White),
            )
        } else if self.buffer.is_empty() {
            (
                "Press 'a' to add a task".to_string(),
                Style::default().fg(Color::DarkGray),
            )
        } else {
            (self.buffer.clone(), Style::default().fg(Color::Gray))
        };

        let border_style = if self.focused {
            Style::default().fg(Color::Cyan)
        } else {
            Style::default()
        };

        let input = Paragraph::new(text).style(style).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style)
                .title("Add Item"),
        );

        frame.render_widget(input, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::component::test_support::render_text;

    fn typed(text: &str) -> TodoCreator {
        let mut creator = TodoCreator::new();
        for c in text.chars() {
            creator.insert_char(c);
        }
        creator
    }

    #[test]
    fn test_submit_emits_create_and_clears() {
        let mut creator = typed("Buy Milk");

        assert_eq!(creator.submit(), Some(Message::Create("Buy Milk".to_string())));
        assert!(creator.buffer.is_empty());
        assert_eq!(creator.cursor_position, 0);
    }

    #[test]
    fn test_submit_trims_text() {
        let mut creator = typed("  Buy Milk  ");

        assert_eq!(creator.submit(), Some(Message::Create("Buy Milk".to_string())));
    }

    #[test]
    fn test_submit_rejects_blank_input_but_still_clears() {
        let mut creator = typed("   ");

        assert_eq!(creator.submit(), None);
        assert!(creator.buffer.is_empty());

        let mut empty = TodoCreator::new();
        assert_eq!(empty.submit(), None);
    }

    #[test]
    fn test_submit_via_action() {
        let mut creator = typed("Get Shoes");

        assert_eq!(creator.handle_action(CreatorAction::InsertChar('!')), None);
        assert_eq!(
            creator.handle_action(CreatorAction::Submit),
            Some(Message::Create("Get Shoes!".to_string()))
        );
    }

    #[test]
    fn test_edit_operations() {
        let mut creator = typed("helo");

        creator.move_cursor_left();
        creator.insert_char('l');
        assert_eq!(creator.buffer, "hello");
        assert_eq!(creator.cursor_position, 4);

        creator.handle_action(CreatorAction::MoveCursorEnd);
        creator.backspace();
        assert_eq!(creator.buffer, "hell");

        creator.handle_action(CreatorAction::MoveCursorHome);
        creator.delete();
        assert_eq!(creator.buffer, "ell");
        assert_eq!(creator.cursor_position, 0);
    }

    #[test]
    fn test_cursor_boundaries() {
        let mut creator = typed("ab");

        creator.move_cursor_right();
        assert_eq!(creator.cursor_position, 2);

        creator.move_cursor_left();
        creator.move_cursor_left();
        creator.move_cursor_left();
        assert_eq!(creator.cursor_position, 0);

        creator.backspace();
        assert_eq!(creator.buffer, "ab");
    }

    #[test]
    fn test_multibyte_characters() {
        let mut creator = typed("café");
        assert_eq!(creator.cursor_position, "café".len());

        creator.move_cursor_left();
        assert_eq!(creator.cursor_position, 3);

        creator.move_cursor_right();
        creator.backspace();
        assert_eq!(creator.buffer, "caf");
    }

    #[test]
    fn test_delete_word_backward() {
        let mut creator = typed("Buy some milk  ");

        creator.delete_word_backward();
        assert_eq!(creator.buffer, "Buy some ");

        creator.delete_word_backward();
        assert_eq!(creator.buffer, "Buy ");

        creator.delete_word_backward();
        assert_eq!(creator.buffer, "");
        assert_eq!(creator.cursor_position, 0);
    }

    #[test]
    fn test_render_shows_cursor_when_focused() {
        let mut creator = typed("Buy");
        creator.focused = true;

        let text = render_text(30, 3, |f| {
            let area = f.size();
            creator.render(f, area);
        });
        assert!(text.contains("Buy█"));
    }

    #[test]
    fn test_render_placeholder_when_idle() {
        let mut creator = TodoCreator::new();

        let text = render_text(40, 3, |f| {
            let area = f.size();
            creator.render(f, area);
        });
        assert!(text.contains("Press 'a' to add a task"));
    }
}

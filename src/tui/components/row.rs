use crate::todo::models::TodoItem;
use crate::todo::reducer::Message;
use ratatui::{
    style::{Color, Modifier, Style},
    widgets::{Cell, Row},
};

/// One record as a table row: its text and a done checkbox.
pub struct TodoRow<'a> {
    pub item: &'a TodoItem,
}

impl<'a> TodoRow<'a> {
    pub fn new(item: &'a TodoItem) -> Self {
        Self { item }
    }

    pub fn checkbox(&self) -> &'static str {
        if self.item.done { "☑" } else { "☐" }
    }

    pub fn to_row(&self) -> Row<'a> {
        let style = if self.item.done {
            Style::default()
                .fg(Color::DarkGray)
                .add_modifier(Modifier::CROSSED_OUT)
        } else {
            Style::default().fg(Color::White)
        };

        Row::new(vec![
            Cell::from(self.item.action.as_str()).style(style),
            Cell::from(self.checkbox()),
        ])
    }

    /// Hands the whole record back; the container finds its own copy by id.
    pub fn on_toggle(&self) -> Message {
        Message::Toggle(self.item.clone())
    }
}

use crate::todo::reducer::Message;
use crate::tui::component::Component;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};

/// A labelled checkbox mirroring one boolean.
pub struct VisibilityControl<'a> {
    pub description: &'a str,
    pub is_checked: bool,
}

impl<'a> VisibilityControl<'a> {
    pub fn new(description: &'a str, is_checked: bool) -> Self {
        Self {
            description,
            is_checked,
        }
    }

    pub fn text(&self) -> String {
        let checkbox = if self.is_checked { "☑" } else { "☐" };
        format!("{} Show {} (c)", checkbox, self.description)
    }

    pub fn on_change(&self) -> Message {
        Message::SetVisibility(!self.is_checked)
    }
}

impl Component for VisibilityControl<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let control = Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(Style::default().fg(Color::White).bg(Color::DarkGray));

        frame.render_widget(control, area);
    }
}

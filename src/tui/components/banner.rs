use crate::todo::models::TodoItem;
use crate::tui::component::Component;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};

/// Header line with the owner's name and how many records are still open.
pub struct Banner<'a> {
    pub name: &'a str,
    pub items: &'a [TodoItem],
}

impl<'a> Banner<'a> {
    pub fn new(name: &'a str, items: &'a [TodoItem]) -> Self {
        Self { name, items }
    }

    pub fn text(&self) -> String {
        let left = self.items.iter().filter(|item| !item.done).count();
        format!("{}'s To Do List ({} items left to do)", self.name, left)
    }
}

impl Component for Banner<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let banner = Paragraph::new(self.text())
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL))
            .style(
                Style::default()
                    .fg(Color::White)
                    .bg(Color::Blue)
                    .add_modifier(Modifier::BOLD),
            );

        frame.render_widget(banner, area);
    }
}

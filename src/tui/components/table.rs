use crate::todo::models::TodoItem;
use crate::tui::component::Component;
use crate::tui::components::row::TodoRow;
use ratatui::{
    Frame,
    layout::{Constraint, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Row, Table, TableState},
};

/// A bordered two-column table of records with an optional highlighted row.
pub struct TodoTable<'a> {
    pub title: &'a str,
    pub items: Vec<&'a TodoItem>,
    pub selected: Option<usize>,
}

impl<'a> TodoTable<'a> {
    pub fn new(title: &'a str, items: Vec<&'a TodoItem>, selected: Option<usize>) -> Self {
        Self {
            title,
            items,
            selected,
        }
    }
}

impl Component for TodoTable<'_> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let rows: Vec<Row> = self
            .items
            .iter()
            .map(|item| TodoRow::new(*item).to_row())
            .collect();

        let header = Row::new(vec!["Description", "Done"]).style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        );

        let table = Table::new(rows, [Constraint::Min(10), Constraint::Length(6)])
            .header(header)
            .block(Block::default().borders(Borders::ALL).title(self.title))
            .highlight_style(
                Style::default()
                    .bg(Color::Yellow)
                    .fg(Color::Black)
                    .add_modifier(Modifier::BOLD),
            );

        let mut table_state = TableState::default();
        table_state.select(self.selected);

        frame.render_stateful_widget(table, area, &mut table_state);
    }
}

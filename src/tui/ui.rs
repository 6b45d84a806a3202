use crate::tui::app::{App, COMPLETED_DESCRIPTION, Focus};
use crate::tui::component::Component;
use crate::tui::components::banner::Banner;
use crate::tui::components::table::TodoTable;
use crate::tui::components::visibility::VisibilityControl;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

pub fn draw(frame: &mut Frame, app: &mut App) {
    let completed_height = if app.state.show_completed {
        Constraint::Min(3)
    } else {
        Constraint::Length(0)
    };

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Banner
            Constraint::Length(3), // Creator
            Constraint::Min(3),    // Open items
            Constraint::Length(3), // Visibility control
            completed_height,      // Completed items
            Constraint::Length(3), // Footer
        ])
        .split(frame.size());

    Banner::new(&app.state.user_name, &app.state.todo_items).render(frame, chunks[0]);
    app.creator.render(frame, chunks[1]);
    draw_tables(frame, app, chunks[2], chunks[4]);
    VisibilityControl::new(COMPLETED_DESCRIPTION, app.state.show_completed).render(frame, chunks[3]);
    draw_footer(frame, chunks[5], app);

    if app.help_mode {
        draw_help_window(frame);
    }
}

fn draw_tables(frame: &mut Frame, app: &App, open_area: Rect, completed_area: Rect) {
    let incomplete = app.state.incomplete_items();
    let open_count = incomplete.len();

    // The row cursor spans both tables; only highlight while the list has focus
    let selected = (app.focus == Focus::List).then_some(app.selected_index);
    let open_selected = selected.filter(|&index| index < open_count);
    let completed_selected = selected
        .filter(|&index| index >= open_count)
        .map(|index| index - open_count);

    TodoTable::new("To Do", incomplete, open_selected).render(frame, open_area);

    if app.state.show_completed {
        TodoTable::new(COMPLETED_DESCRIPTION, app.state.completed_items(), completed_selected)
            .render(frame, completed_area);
    }
}

fn draw_footer(frame: &mut Frame, area: Rect, app: &App) {
    let footer_text = match app.focus {
        Focus::Creator => "ADD ITEM | Enter: add | Esc/Tab: back to list | ←→: cursor".to_string(),
        Focus::List => format!(
            "Items: {} | Left: {} | ↑↓/j/k: navigate | Enter/Space: toggle | a: add | ?: help | q: quit",
            app.state.todo_items.len(),
            app.state.items_left(),
        ),
    };

    let footer = Paragraph::new(footer_text)
        .block(Block::default().borders(Borders::ALL))
        .style(Style::default().fg(Color::Yellow));

    frame.render_widget(footer, area);
}

fn draw_help_window(frame: &mut Frame) {
    let help_text = [
        "Todo List - Keyboard Commands",
        "",
        "LIST:",
        "  ↑↓ / j/k          Navigate up/down",
        "  Enter / Space     Toggle done on the selected task",
        "  c                 Show/hide completed tasks",
        "  n                 Switch list owner",
        "",
        "ADDING:",
        "  a / i / Tab       Focus the input",
        "  Enter             Add the typed task",
        "  Ctrl+W            Delete previous word",
        "  Esc / Tab         Back to the list",
        "",
        "OTHER:",
        "  ?                 Show this help (press ? or Esc to close)",
        "  q / Ctrl+C        Quit application",
    ];

    let help_paragraph = Paragraph::new(help_text.join("\n"))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Help - Keyboard Commands ")
                .style(Style::default().fg(Color::Yellow)),
        )
        .style(Style::default().fg(Color::White))
        .wrap(Wrap { trim: false });

    let area = centered_rect(80, 70, frame.size());

    frame.render_widget(Clear, area);
    frame.render_widget(help_paragraph, area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

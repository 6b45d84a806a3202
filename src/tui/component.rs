use ratatui::Frame;
use ratatui::layout::Rect;

/// A piece of the screen that renders itself from the props it was built with.
///
/// Components never touch `AppState` directly. Anything they want changed is
/// returned to the container as a `Message`.
pub trait Component {
    fn render(&mut self, frame: &mut Frame, area: Rect);
}

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;
use ratatui::widgets::Paragraph;

pub const HINT: &str = "Press 'q' to quit";

/// Hint on the first row, the current rendering from the second row down.
pub fn draw_screen(frame: &mut Frame, rendering: &str) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0)]);
    let [hint_area, roll_area] = layout.areas(frame.area());

    frame.render_widget(Span::styled(HINT, hint_style()), hint_area);
    frame.render_widget(Paragraph::new(rendering), roll_area);
}

/// Xterm 88, dark red.
const HINT_COLOR: Color = Color::Indexed(88);

fn hint_style() -> Style {
    Style::default().fg(HINT_COLOR)
}

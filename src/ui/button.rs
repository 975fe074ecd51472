use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

/// A three-row rounded button with a centered label.
pub fn render(frame: &mut Frame, area: Rect, label: &str, style: Style, border: Style) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(border)
        .style(style);
    let inner = block.inner(area);
    frame.render_widget(block, area);
    frame.render_widget(
        Paragraph::new(label.to_string())
            .style(style)
            .alignment(Alignment::Center),
        inner,
    );
}

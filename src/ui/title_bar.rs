use crate::ui::layout::CardLayout;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;

/// Draw the title bar: a screen-specific button on the left, the title in
/// the middle, minimize and close on the right.
pub fn render(
    frame: &mut Frame,
    card: &CardLayout,
    palette: &Palette,
    left_glyph: &str,
    title: &str,
) {
    let button = palette.title_button();

    frame.render_widget(
        Paragraph::new(title.to_string())
            .style(palette.label())
            .alignment(Alignment::Center),
        card.title_bar,
    );
    frame.render_widget(
        Paragraph::new(left_glyph.to_string())
            .style(button)
            .alignment(Alignment::Center),
        card.left_button,
    );
    frame.render_widget(
        Paragraph::new("—").style(button).alignment(Alignment::Center),
        card.minimize_button,
    );
    frame.render_widget(
        Paragraph::new("✕").style(button).alignment(Alignment::Center),
        card.close_button,
    );
}

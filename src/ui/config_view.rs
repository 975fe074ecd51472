use crate::app::config_screen::{ConfigField, ConfigScreen};
use crate::app::state::AppContext;
use crate::ui::layout::{card_layout, config_layout};
use crate::ui::theme::Palette;
use crate::ui::{button, title_bar};
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Padding, Paragraph};

pub fn render(frame: &mut Frame, viewport: Rect, ctx: &AppContext, screen: &ConfigScreen) {
    let palette = ctx.palette();
    let inner = screen.chrome.render(frame, viewport, palette);
    let card = card_layout(inner);

    title_bar::render(frame, &card, palette, ctx.theme.toggle_glyph(), "Timer");
    if screen.chrome.minimized {
        return;
    }

    let layout = config_layout(card.body);

    for (area, field) in [
        (layout.hours, ConfigField::Hours),
        (layout.minutes, ConfigField::Minutes),
        (layout.seconds, ConfigField::Seconds),
    ] {
        let value = screen.field_value(field).unwrap_or(0);
        render_clock_field(frame, area, palette, value, screen.focus == field);
    }
    for colon in [layout.first_colon, layout.second_colon] {
        let middle = Rect::new(colon.x, colon.y + colon.height / 2, colon.width, 1);
        frame.render_widget(
            Paragraph::new(":")
                .style(palette.separator())
                .alignment(Alignment::Center),
            middle.intersection(colon),
        );
    }

    frame.render_widget(
        Paragraph::new("Message (optional):").style(palette.label()),
        layout.message_label,
    );
    render_message(frame, layout.message, palette, screen);

    let focused = screen.focus == ConfigField::Start;
    button::render(
        frame,
        layout.start_button,
        "Start Timer",
        palette.primary_button(focused),
        palette.primary_button(focused),
    );
}

fn input_block(palette: &Palette, focused: bool) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(palette.input_border(focused))
        .style(palette.input(focused))
}

fn render_clock_field(frame: &mut Frame, area: Rect, palette: &Palette, value: u8, focused: bool) {
    let block = input_block(palette, focused);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut style = palette.input(focused).add_modifier(Modifier::BOLD);
    if focused {
        style = style.add_modifier(Modifier::UNDERLINED);
    }
    frame.render_widget(
        Paragraph::new(format!("{:02}", value))
            .style(style)
            .alignment(Alignment::Center),
        inner,
    );
}

fn render_message(frame: &mut Frame, area: Rect, palette: &Palette, screen: &ConfigScreen) {
    let focused = screen.focus == ConfigField::Message;
    let block = input_block(palette, focused).padding(Padding::horizontal(1));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let (visible, cursor_col) = screen.message.view(inner.width);
    frame.render_widget(
        Paragraph::new(visible.to_string()).style(palette.input(focused)),
        inner,
    );

    if focused && inner.width > 0 && inner.height > 0 {
        let x = (inner.x + cursor_col).min(inner.right() - 1);
        frame.set_cursor_position((x, inner.y));
    }
}

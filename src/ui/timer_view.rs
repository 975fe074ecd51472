use crate::app::state::AppContext;
use crate::app::timer_screen::TimerScreen;
use crate::timer::{format_hms, Countdown, Phase};
use crate::ui::layout::{card_layout, timer_layout};
use crate::ui::{button, title_bar};
use chrono::{Local, TimeDelta};
use ratatui::prelude::*;
use ratatui::widgets::{Gauge, Paragraph};
use std::fmt::Write;
use unicode_width::UnicodeWidthChar;

pub fn render(frame: &mut Frame, viewport: Rect, ctx: &AppContext, screen: &TimerScreen) {
    let palette = ctx.palette();
    let countdown = screen.countdown();
    let expired = countdown.phase() == Phase::Expired;
    let inner = screen.chrome.render(frame, viewport, palette);
    let card = card_layout(inner);

    // Collapsed windows still show the time in the title
    let title = if screen.chrome.minimized {
        format!("{} {}", format_hms(countdown.remaining()), phase_glyph(countdown))
    } else {
        "Timer".to_string()
    };
    title_bar::render(frame, &card, palette, "⚙", &title);
    if screen.chrome.minimized {
        return;
    }

    let layout = timer_layout(card.body);

    frame.render_widget(
        Paragraph::new(format_hms(countdown.remaining()))
            .style(palette.time(expired))
            .alignment(Alignment::Center),
        layout.time,
    );
    frame.render_widget(
        Paragraph::new(truncate(screen.message(), layout.message.width))
            .style(palette.label())
            .alignment(Alignment::Center),
        layout.message,
    );
    frame.render_widget(
        Gauge::default()
            .gauge_style(palette.gauge(expired))
            .ratio(countdown.progress().clamp(0.0, 1.0))
            .label("")
            .use_unicode(true),
        layout.progress,
    );

    let (status, status_style) = match countdown.phase() {
        Phase::Expired if countdown.initial_duration() > 0 => {
            ("Time's up!".to_string(), palette.time(true))
        }
        Phase::Running if ctx.config.ui.show_end_time => (
            end_time(countdown.remaining(), &ctx.config.ui.end_time_format),
            palette.label(),
        ),
        Phase::Paused => ("paused".to_string(), palette.label()),
        _ => (String::new(), palette.label()),
    };
    frame.render_widget(
        Paragraph::new(status)
            .style(status_style)
            .alignment(Alignment::Center),
        layout.ends_at,
    );

    let controls = palette.secondary_button();
    let border = Style::default().fg(palette.border).bg(palette.window_bg);
    let play = if countdown.is_running() { "⏸" } else { "▶" };
    button::render(frame, layout.pause_button, play, controls, border);
    button::render(frame, layout.reset_button, "⟳", controls, border);
    button::render(frame, layout.edit_button, "✎", controls, border);
}

fn phase_glyph(countdown: &Countdown) -> &'static str {
    match countdown.phase() {
        Phase::Running => "▶",
        Phase::Paused | Phase::Idle => "⏸",
        Phase::Expired => "✓",
    }
}

/// Wall-clock time `remaining` seconds from now. An unusable format string
/// falls back to `%H:%M:%S`.
fn end_time(remaining: u64, format: &str) -> String {
    let at = Local::now() + TimeDelta::seconds(remaining as i64);
    let mut out = String::from("ends at ");
    if write!(out, "{}", at.format(format)).is_err() {
        out.truncate("ends at ".len());
        let _ = write!(out, "{}", at.format("%H:%M:%S"));
    }
    out
}

/// Cut `text` to `width` columns, marking the cut with an ellipsis.
pub fn truncate(text: &str, width: u16) -> String {
    let width = usize::from(width);
    if unicode_width::UnicodeWidthStr::width(text) <= width {
        return text.to_string();
    }
    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w + 1 > width {
            break;
        }
        out.push(ch);
        used += w;
    }
    if width > 0 {
        out.push('…');
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("tea", 10), "tea");
        assert_eq!(truncate("take the bread out", 8), "take th…");
        assert_eq!(truncate("日本語", 4), "日…");
        assert_eq!(truncate("abc", 0), "");
    }

    #[test]
    fn test_end_time_bad_format_falls_back() {
        let s = end_time(60, "%");
        assert!(s.starts_with("ends at "));
        assert_eq!(s.len(), "ends at ".len() + 8);
    }
}

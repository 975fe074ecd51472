use ratatui::layout::{Constraint, Flex, Layout, Rect};

/// Width of a title-bar button hit area.
const TITLE_BUTTON_WIDTH: u16 = 3;

/// Regions inside the window border.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardLayout {
    pub title_bar: Rect,
    /// Theme toggle on the configuration screen, settings on the timer screen.
    pub left_button: Rect,
    pub minimize_button: Rect,
    pub close_button: Rect,
    pub body: Rect,
}

pub fn card_layout(inner: Rect) -> CardLayout {
    let chunks = Layout::vertical([
        Constraint::Length(1), // Title bar
        Constraint::Min(0),    // Body
    ])
    .split(inner);

    let title_bar = chunks[0];
    let w = TITLE_BUTTON_WIDTH.min(title_bar.width);
    let left_button =
        Rect::new(title_bar.x + 1, title_bar.y, w, title_bar.height).intersection(title_bar);
    let close_button = Rect::new(
        title_bar.right().saturating_sub(w + 1),
        title_bar.y,
        w,
        title_bar.height,
    )
    .intersection(title_bar);
    let minimize_button = Rect::new(
        close_button.x.saturating_sub(w),
        title_bar.y,
        w,
        title_bar.height,
    )
    .intersection(title_bar);

    // Side padding for the body
    let body = Layout::horizontal([Constraint::Min(0)])
        .horizontal_margin(2)
        .split(chunks[1])[0];

    CardLayout {
        title_bar,
        left_button,
        minimize_button,
        close_button,
        body,
    }
}

/// Configuration screen widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConfigLayout {
    pub hours: Rect,
    pub first_colon: Rect,
    pub minutes: Rect,
    pub second_colon: Rect,
    pub seconds: Rect,
    pub message_label: Rect,
    pub message: Rect,
    pub start_button: Rect,
}

pub fn config_layout(body: Rect) -> ConfigLayout {
    let rows = Layout::vertical([
        Constraint::Fill(1),   // Spacer
        Constraint::Length(3), // HH : MM : SS
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Message label
        Constraint::Length(3), // Message input
        Constraint::Length(1), // Spacer
        Constraint::Length(3), // Start button
        Constraint::Fill(1),   // Spacer
    ])
    .split(body);

    let clock = Layout::horizontal([
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Length(6),
        Constraint::Length(3),
        Constraint::Length(6),
    ])
    .flex(Flex::Center)
    .split(rows[1]);

    ConfigLayout {
        hours: clock[0],
        first_colon: clock[1],
        minutes: clock[2],
        second_colon: clock[3],
        seconds: clock[4],
        message_label: rows[3],
        message: rows[4],
        start_button: rows[6],
    }
}

/// Countdown screen widgets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimerLayout {
    pub time: Rect,
    pub message: Rect,
    pub progress: Rect,
    pub ends_at: Rect,
    pub pause_button: Rect,
    pub reset_button: Rect,
    pub edit_button: Rect,
}

pub fn timer_layout(body: Rect) -> TimerLayout {
    let rows = Layout::vertical([
        Constraint::Fill(1),   // Spacer
        Constraint::Length(1), // Time
        Constraint::Length(1), // Message
        Constraint::Length(1), // Spacer
        Constraint::Length(1), // Progress
        Constraint::Length(1), // Ends at
        Constraint::Fill(1),   // Spacer
        Constraint::Length(3), // Pause / reset
        Constraint::Length(3), // Edit
    ])
    .split(body);

    let controls = Layout::horizontal([Constraint::Length(8), Constraint::Length(8)])
        .flex(Flex::Center)
        .spacing(2)
        .split(rows[7]);
    let edit = Layout::horizontal([Constraint::Length(8)])
        .flex(Flex::Center)
        .split(rows[8]);

    TimerLayout {
        time: rows[1],
        message: rows[2],
        progress: rows[4],
        ends_at: rows[5],
        pause_button: controls[0],
        reset_button: controls[1],
        edit_button: edit[0],
    }
}

/// Whether a cell lies inside a (possibly empty) rectangle.
pub fn hit(area: Rect, col: u16, row: u16) -> bool {
    col >= area.x && col < area.right() && row >= area.y && row < area.bottom()
}

use crate::app::action::Action;
use crate::app::config_screen::ConfigField;
use crate::app::coordinator::{ScreenCoordinator, ScreenKind};
use crate::app::event::AppEvent;
use crate::app::state::AppState;
use crate::timer::TimerEvent;
use crate::ui::layout::{self, hit};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent,
    MouseEventKind,
};
use ratatui::layout::Rect;
use tracing::{debug, info, trace};

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => {
            state.dirty = true;
            handle_terminal(state, cevent)
        }
        AppEvent::CountdownTick { generation } => {
            if generation != state.tick_generation {
                trace!(generation, current = state.tick_generation, "stale tick dropped");
                return vec![];
            }
            state.dirty = true;
            drive_countdown(state, |screens| screens.timer.tick())
        }
        AppEvent::Timer(event) => {
            handle_timer_event(state, event);
            vec![]
        }
    }
}

/// Observer notifications arrive after the transition already happened, so
/// they only log and redraw. The ticker follows the transition itself.
fn handle_timer_event(state: &mut AppState, event: TimerEvent) {
    state.dirty = true;
    match event {
        TimerEvent::Ticked { .. } => {}
        TimerEvent::Expired => info!("time's up"),
        other => info!(event = ?other, "countdown transition"),
    }
}

/// Apply a countdown transition and return the ticker action it calls for.
/// The generation moves in the same step, so ticks already queued by the
/// previous run are stale by the time they are read.
fn drive_countdown(
    state: &mut AppState,
    transition: impl FnOnce(&mut ScreenCoordinator),
) -> Vec<Action> {
    let before = state.screens.timer.countdown().state();
    transition(&mut state.screens);
    let after = state.screens.timer.countdown().state();

    match (before.running, after.running) {
        (false, true) => {
            let generation = state.next_tick_generation();
            vec![Action::StartTicker { generation }]
        }
        (true, false) => {
            state.next_tick_generation();
            vec![Action::StopTicker]
        }
        _ => vec![],
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.viewport = Rect::new(0, 0, width, height);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    // Global keybindings
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        let viewport = state.viewport;
        match key.code {
            KeyCode::Char('c') => return vec![Action::Quit],
            KeyCode::Char('t') => {
                state.ctx.toggle_theme();
                return vec![];
            }
            KeyCode::Char('n') => {
                state.screens.active_chrome_mut().toggle_minimized();
                return vec![];
            }
            KeyCode::Left => {
                state.screens.active_chrome_mut().nudge(viewport, -1, 0);
                return vec![];
            }
            KeyCode::Right => {
                state.screens.active_chrome_mut().nudge(viewport, 1, 0);
                return vec![];
            }
            KeyCode::Up => {
                state.screens.active_chrome_mut().nudge(viewport, 0, -1);
                return vec![];
            }
            KeyCode::Down => {
                state.screens.active_chrome_mut().nudge(viewport, 0, 1);
                return vec![];
            }
            _ => {}
        }
    }

    match state.screens.active() {
        ScreenKind::Config => handle_config_key(state, key),
        ScreenKind::Timer => handle_timer_key(state, key),
    }
}

fn handle_config_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    let focus = state.screens.config.focus;
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    let submit = match key.code {
        KeyCode::Enter => true,
        KeyCode::Char(' ') => focus == ConfigField::Start,
        _ => false,
    };
    if submit {
        return submit_config(state);
    }

    let screen = &mut state.screens.config;
    match key.code {
        KeyCode::Tab => screen.focus_next(),
        KeyCode::BackTab => screen.focus_prev(),
        _ if focus == ConfigField::Message => match key.code {
            KeyCode::Char('w') if ctrl => screen.message.delete_word_back(),
            KeyCode::Char(c) if !ctrl => screen.message.insert_char(c),
            KeyCode::Backspace => screen.message.delete_back(),
            KeyCode::Delete => screen.message.delete_forward(),
            KeyCode::Left => screen.message.move_left(),
            KeyCode::Right => screen.message.move_right(),
            KeyCode::Home => screen.message.move_home(),
            KeyCode::End => screen.message.move_end(),
            KeyCode::Up => screen.focus_prev(),
            KeyCode::Down => screen.focus_next(),
            _ => {}
        },
        KeyCode::Char('q') => return vec![Action::Quit],
        KeyCode::Char(c) if c.is_ascii_digit() => {
            screen.type_digit(c as u8 - b'0');
        }
        KeyCode::Up | KeyCode::Char('+') => screen.adjust(1),
        KeyCode::Down | KeyCode::Char('-') => screen.adjust(-1),
        KeyCode::Backspace | KeyCode::Delete => screen.erase_digit(),
        KeyCode::Left => screen.focus_prev(),
        KeyCode::Right => screen.focus_next(),
        _ => {}
    }
    vec![]
}

fn handle_timer_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Char(' ') | KeyCode::Char('p') | KeyCode::Enter => {
            drive_countdown(state, |screens| screens.timer.toggle_pause())
        }
        KeyCode::Char('r') => drive_countdown(state, |screens| screens.timer.reset()),
        KeyCode::Char('e') | KeyCode::Char('s') | KeyCode::Esc => show_config(state),
        KeyCode::Char('q') => vec![Action::Quit],
        _ => vec![],
    }
}

fn show_config(state: &mut AppState) -> Vec<Action> {
    drive_countdown(state, |screens| {
        screens.show_config();
    })
}

fn submit_config(state: &mut AppState) -> Vec<Action> {
    drive_countdown(state, |screens| match screens.config.request() {
        Ok(request) => {
            debug!(
                duration = request.duration(),
                message = request.message(),
                "session submitted"
            );
            screens.submit(request);
        }
        Err(e) => debug!("start rejected: {}", e),
    })
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    let viewport = state.viewport;
    let (col, row) = (mouse.column, mouse.row);

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(state, col, row),
        MouseEventKind::Drag(MouseButton::Left) => {
            state.screens.active_chrome_mut().drag_to(viewport, col, row);
            vec![]
        }
        MouseEventKind::Up(MouseButton::Left) => {
            state.screens.active_chrome_mut().end_drag();
            vec![]
        }
        MouseEventKind::ScrollUp => {
            scroll_field(state, col, row, 1);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            scroll_field(state, col, row, -1);
            vec![]
        }
        _ => {
            state.dirty = false;
            vec![]
        }
    }
}

fn handle_click(state: &mut AppState, col: u16, row: u16) -> Vec<Action> {
    let viewport = state.viewport;
    let chrome = state.screens.active_chrome();
    if !chrome.contains(viewport, col, row) {
        return vec![];
    }
    let minimized = chrome.minimized;
    let card = layout::card_layout(chrome.inner(viewport));

    if hit(card.close_button, col, row) {
        return vec![Action::Quit];
    }
    if hit(card.minimize_button, col, row) {
        state.screens.active_chrome_mut().toggle_minimized();
        return vec![];
    }
    if hit(card.left_button, col, row) {
        return match state.screens.active() {
            ScreenKind::Config => {
                state.ctx.toggle_theme();
                vec![]
            }
            ScreenKind::Timer => show_config(state),
        };
    }

    if !minimized {
        if let Some(actions) = click_body(state, card.body, col, row) {
            return actions;
        }
    }

    state
        .screens
        .active_chrome_mut()
        .begin_drag(viewport, col, row);
    vec![]
}

/// `None` when the click missed every control.
fn click_body(state: &mut AppState, body: Rect, col: u16, row: u16) -> Option<Vec<Action>> {
    match state.screens.active() {
        ScreenKind::Config => {
            let l = layout::config_layout(body);
            let target = [
                (l.hours, ConfigField::Hours),
                (l.minutes, ConfigField::Minutes),
                (l.seconds, ConfigField::Seconds),
                (l.message, ConfigField::Message),
                (l.start_button, ConfigField::Start),
            ]
            .into_iter()
            .find(|(area, _)| hit(*area, col, row))
            .map(|(_, field)| field);

            match target {
                Some(ConfigField::Start) => {
                    state.screens.config.focus = ConfigField::Start;
                    Some(submit_config(state))
                }
                Some(field) => {
                    let screen = &mut state.screens.config;
                    screen.focus = field;
                    if field == ConfigField::Message {
                        screen.message.move_end();
                    }
                    Some(vec![])
                }
                None => None,
            }
        }
        ScreenKind::Timer => {
            let l = layout::timer_layout(body);
            if hit(l.pause_button, col, row) {
                Some(drive_countdown(state, |screens| screens.timer.toggle_pause()))
            } else if hit(l.reset_button, col, row) {
                Some(drive_countdown(state, |screens| screens.timer.reset()))
            } else if hit(l.edit_button, col, row) {
                Some(show_config(state))
            } else {
                None
            }
        }
    }
}

/// Mouse wheel over a clock field steps it.
fn scroll_field(state: &mut AppState, col: u16, row: u16, delta: i16) {
    if state.screens.active() != ScreenKind::Config {
        return;
    }
    let chrome = &state.screens.config.chrome;
    if chrome.minimized {
        return;
    }
    let card = layout::card_layout(chrome.inner(state.viewport));
    let l = layout::config_layout(card.body);
    let field = [
        (l.hours, ConfigField::Hours),
        (l.minutes, ConfigField::Minutes),
        (l.seconds, ConfigField::Seconds),
    ]
    .into_iter()
    .find(|(area, _)| hit(*area, col, row))
    .map(|(_, field)| field);

    if let Some(field) = field {
        let screen = &mut state.screens.config;
        screen.focus = field;
        screen.adjust(delta);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{AppConfig, WindowPlacement};
    use crate::timer::Phase;
    use crate::ui::theme::ThemeKind;
    use crossterm::event::KeyEventState;
    use tokio::sync::mpsc;

    const VIEWPORT: Rect = Rect {
        x: 0,
        y: 0,
        width: 100,
        height: 40,
    };

    const PLACEMENT: WindowPlacement = WindowPlacement {
        x: 10,
        y: 5,
        width: 36,
        height: 20,
    };

    struct Harness {
        state: AppState,
        rx: mpsc::UnboundedReceiver<AppEvent>,
    }

    impl Harness {
        fn new() -> Self {
            let (tx, rx) = mpsc::unbounded_channel();
            let observer = Box::new(move |ev: TimerEvent| {
                let _ = tx.send(AppEvent::Timer(ev));
            });
            let state = AppState::new(AppConfig::default(), Some(PLACEMENT), VIEWPORT, observer);
            Self { state, rx }
        }

        /// Handle an event, then everything the observer queued in response.
        fn send(&mut self, event: AppEvent) -> Vec<Action> {
            let mut actions = handle_event(&mut self.state, event);
            while let Ok(queued) = self.rx.try_recv() {
                actions.extend(handle_event(&mut self.state, queued));
            }
            actions
        }

        fn key(&mut self, code: KeyCode) -> Vec<Action> {
            self.send(AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                code,
                KeyModifiers::NONE,
            ))))
        }

        fn ctrl(&mut self, c: char) -> Vec<Action> {
            self.send(AppEvent::Terminal(CEvent::Key(KeyEvent::new(
                KeyCode::Char(c),
                KeyModifiers::CONTROL,
            ))))
        }

        fn mouse(&mut self, kind: MouseEventKind, column: u16, row: u16) -> Vec<Action> {
            self.send(AppEvent::Terminal(CEvent::Mouse(MouseEvent {
                kind,
                column,
                row,
                modifiers: KeyModifiers::NONE,
            })))
        }

        fn click(&mut self, area: Rect) -> Vec<Action> {
            self.mouse(MouseEventKind::Down(MouseButton::Left), area.x, area.y)
        }

        fn tick(&mut self) -> Vec<Action> {
            let generation = self.state.tick_generation;
            self.send(AppEvent::CountdownTick { generation })
        }

        fn type_str(&mut self, s: &str) {
            for c in s.chars() {
                self.key(KeyCode::Char(c));
            }
        }

        fn card(&self) -> layout::CardLayout {
            let chrome = self.state.screens.active_chrome();
            layout::card_layout(chrome.inner(self.state.viewport))
        }

        fn phase(&self) -> Phase {
            self.state.screens.timer.countdown().phase()
        }
    }

    /// Enter 0:01:05 with a message and press Enter.
    fn start_session(h: &mut Harness) -> Vec<Action> {
        h.key(KeyCode::Tab);
        h.type_str("1");
        h.key(KeyCode::Tab);
        h.type_str("5");
        h.key(KeyCode::Tab);
        h.type_str("tea");
        h.key(KeyCode::Enter)
    }

    #[test]
    fn test_enter_starts_countdown() {
        let mut h = Harness::new();
        let actions = start_session(&mut h);
        assert_eq!(actions, vec![Action::StartTicker { generation: 1 }]);
        assert_eq!(h.state.screens.active(), ScreenKind::Timer);
        assert_eq!(h.state.screens.timer.countdown().remaining(), 65);
        assert_eq!(h.state.screens.timer.message(), "tea");
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let mut h = Harness::new();
        let actions = h.key(KeyCode::Enter);
        assert!(actions.is_empty());
        assert_eq!(h.state.screens.active(), ScreenKind::Config);
    }

    #[test]
    fn test_ticks_count_down_and_expire() {
        let mut h = Harness::new();
        h.type_str("0");
        h.key(KeyCode::Tab);
        h.key(KeyCode::Tab);
        h.type_str("2");
        h.key(KeyCode::Enter);

        assert!(h.tick().is_empty());
        assert_eq!(h.state.screens.timer.countdown().remaining(), 1);
        assert_eq!(h.tick(), vec![Action::StopTicker]);
        assert_eq!(h.phase(), Phase::Expired);
    }

    #[test]
    fn test_stale_tick_is_dropped() {
        let mut h = Harness::new();
        start_session(&mut h);
        let old = h.state.tick_generation;
        assert_eq!(h.key(KeyCode::Char(' ')), vec![Action::StopTicker]);
        assert_eq!(
            h.key(KeyCode::Char(' ')),
            vec![Action::StartTicker { generation: old + 2 }]
        );

        h.send(AppEvent::CountdownTick { generation: old });
        assert_eq!(h.state.screens.timer.countdown().remaining(), 65);
        h.tick();
        assert_eq!(h.state.screens.timer.countdown().remaining(), 64);
    }

    #[test]
    fn test_tick_from_before_pause_is_dropped_with_events_still_queued() {
        let mut h = Harness::new();
        start_session(&mut h);
        let old = h.state.tick_generation;
        let space = || {
            AppEvent::Terminal(CEvent::Key(KeyEvent::new(KeyCode::Char(' '), KeyModifiers::NONE)))
        };

        // Observer events stay queued behind the keys
        assert_eq!(handle_event(&mut h.state, space()), vec![Action::StopTicker]);
        assert_eq!(
            handle_event(&mut h.state, space()),
            vec![Action::StartTicker { generation: old + 2 }]
        );
        let actions = handle_event(&mut h.state, AppEvent::CountdownTick { generation: old });
        assert!(actions.is_empty());
        assert_eq!(h.state.screens.timer.countdown().remaining(), 65);

        // Draining the late notifications leaves the new run alone
        assert!(h.send(AppEvent::Terminal(CEvent::FocusGained)).is_empty());
        assert_eq!(h.state.tick_generation, old + 2);
        assert_eq!(h.phase(), Phase::Running);
    }

    #[test]
    fn test_reset_and_edit_keys() {
        let mut h = Harness::new();
        start_session(&mut h);
        h.tick();
        assert_eq!(h.key(KeyCode::Char('r')), vec![Action::StopTicker]);
        assert_eq!(h.phase(), Phase::Idle);
        assert_eq!(h.state.screens.timer.countdown().remaining(), 65);

        h.key(KeyCode::Char('e'));
        assert_eq!(h.state.screens.active(), ScreenKind::Config);
        // Values entered earlier are still there
        assert_eq!(h.state.screens.config.total_seconds(), 65);
    }

    #[test]
    fn test_back_while_running_stops_ticker() {
        let mut h = Harness::new();
        start_session(&mut h);
        assert_eq!(h.key(KeyCode::Esc), vec![Action::StopTicker]);
        assert_eq!(h.phase(), Phase::Idle);
    }

    #[test]
    fn test_q_types_into_message_but_quits_elsewhere() {
        let mut h = Harness::new();
        h.state.screens.config.focus = ConfigField::Message;
        assert!(h.key(KeyCode::Char('q')).is_empty());
        assert_eq!(h.state.screens.config.message.text, "q");

        h.state.screens.config.focus = ConfigField::Hours;
        assert_eq!(h.key(KeyCode::Char('q')), vec![Action::Quit]);
        assert_eq!(h.ctrl('c'), vec![Action::Quit]);
    }

    #[test]
    fn test_ctrl_t_toggles_theme() {
        let mut h = Harness::new();
        h.ctrl('t');
        assert_eq!(h.state.ctx.theme, ThemeKind::Dark);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut h = Harness::new();
        let release = KeyEvent {
            code: KeyCode::Char('7'),
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Release,
            state: KeyEventState::NONE,
        };
        h.send(AppEvent::Terminal(CEvent::Key(release)));
        assert_eq!(h.state.screens.config.hours, 0);
    }

    #[test]
    fn test_title_bar_buttons() {
        let mut h = Harness::new();
        let card = h.card();
        h.click(card.left_button);
        assert_eq!(h.state.ctx.theme, ThemeKind::Dark);

        h.click(card.minimize_button);
        assert!(h.state.screens.active_chrome().minimized);
        h.click(card.minimize_button);
        assert!(!h.state.screens.active_chrome().minimized);

        assert_eq!(h.click(card.close_button), vec![Action::Quit]);
    }

    #[test]
    fn test_click_controls() {
        let mut h = Harness::new();
        let config = layout::config_layout(h.card().body);
        h.click(config.seconds);
        assert_eq!(h.state.screens.config.focus, ConfigField::Seconds);
        h.mouse(MouseEventKind::ScrollUp, config.seconds.x, config.seconds.y);
        h.mouse(MouseEventKind::ScrollUp, config.seconds.x, config.seconds.y);
        assert_eq!(h.state.screens.config.seconds, 2);

        let actions = h.click(config.start_button);
        assert_eq!(actions, vec![Action::StartTicker { generation: 1 }]);
        assert_eq!(h.state.screens.active(), ScreenKind::Timer);

        let timer = layout::timer_layout(h.card().body);
        assert_eq!(h.click(timer.pause_button), vec![Action::StopTicker]);
        assert_eq!(h.phase(), Phase::Idle);
        h.click(timer.edit_button);
        assert_eq!(h.state.screens.active(), ScreenKind::Config);
    }

    #[test]
    fn test_settings_button_returns_to_config() {
        let mut h = Harness::new();
        start_session(&mut h);
        let card = h.card();
        h.click(card.left_button);
        assert_eq!(h.state.screens.active(), ScreenKind::Config);
        // The theme is untouched by the settings button
        assert_eq!(h.state.ctx.theme, ThemeKind::Light);
    }

    #[test]
    fn test_drag_moves_window_and_follows_screen_switch() {
        let mut h = Harness::new();
        let grab = h.card().title_bar;
        let (gx, gy) = (grab.x + 10, grab.y);
        h.mouse(MouseEventKind::Down(MouseButton::Left), gx, gy);
        h.mouse(MouseEventKind::Drag(MouseButton::Left), gx + 5, gy + 3);
        h.mouse(MouseEventKind::Up(MouseButton::Left), gx + 5, gy + 3);

        let moved = h.state.screens.active_placement();
        assert_eq!((moved.x, moved.y), (PLACEMENT.x + 5, PLACEMENT.y + 3));

        start_session(&mut h);
        assert_eq!(h.state.screens.active_placement(), moved);
    }

    #[test]
    fn test_ctrl_arrow_nudges() {
        let mut h = Harness::new();
        h.send(AppEvent::Terminal(CEvent::Key(KeyEvent::new(
            KeyCode::Right,
            KeyModifiers::CONTROL,
        ))));
        assert_eq!(h.state.screens.active_placement().x, PLACEMENT.x + 1);
    }

    #[test]
    fn test_resize_updates_viewport() {
        let mut h = Harness::new();
        h.send(AppEvent::Terminal(CEvent::Resize(60, 20)));
        assert_eq!(h.state.viewport, Rect::new(0, 0, 60, 20));
    }
}

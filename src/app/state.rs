use crate::app::coordinator::ScreenCoordinator;
use crate::config::{AppConfig, WindowPlacement};
use crate::timer::TimerObserver;
use crate::ui::theme::{Palette, ThemeKind};
use ratatui::layout::Rect;
use tracing::info;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// State shared by both screens. Owned by [`AppState`] and lent to each
/// screen when it renders or handles input.
#[derive(Debug, Clone)]
pub struct AppContext {
    pub config: AppConfig,
    pub theme: ThemeKind,
}

impl AppContext {
    pub fn new(config: AppConfig) -> Self {
        let theme = config.ui.theme;
        Self { config, theme }
    }

    pub fn palette(&self) -> &'static Palette {
        self.theme.palette()
    }

    pub fn toggle_theme(&mut self) {
        self.theme = self.theme.toggled();
        info!(theme = ?self.theme, "theme changed");
    }
}

/// Single-line text field with a byte-offset cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct InputState {
    pub text: String,
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.text.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn delete_back(&mut self) {
        if self.cursor > 0 {
            let prev = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.text.drain(prev..self.cursor);
            self.cursor = prev;
        }
    }

    pub fn delete_forward(&mut self) {
        if self.cursor < self.text.len() {
            let next = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
            self.text.drain(self.cursor..next);
        }
    }

    pub fn move_left(&mut self) {
        if self.cursor > 0 {
            self.cursor = self.text[..self.cursor]
                .char_indices()
                .next_back()
                .map(|(i, _)| i)
                .unwrap_or(0);
        }
    }

    pub fn move_right(&mut self) {
        if self.cursor < self.text.len() {
            self.cursor = self.text[self.cursor..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor + i)
                .unwrap_or(self.text.len());
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    pub fn delete_word_back(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let mut pos = self.cursor;
        // Skip trailing whitespace
        while pos > 0 && self.text.as_bytes().get(pos - 1) == Some(&b' ') {
            pos -= 1;
        }
        // Skip word characters
        while pos > 0 && self.text.as_bytes().get(pos - 1) != Some(&b' ') {
            pos -= 1;
        }
        // Land on a char boundary if the word ended in multi-byte text
        while !self.text.is_char_boundary(pos) {
            pos += 1;
        }
        self.text.drain(pos..self.cursor);
        self.cursor = pos;
    }

    /// The tail of the text that fits in `width` columns with the cursor
    /// visible, and the cursor's column within it.
    pub fn view(&self, width: u16) -> (&str, u16) {
        let width = usize::from(width);
        if width == 0 {
            return ("", 0);
        }
        let mut start = 0;
        let mut before = UnicodeWidthStr::width(&self.text[..self.cursor]);
        // One column is kept free for the cursor itself
        while before >= width {
            let Some(ch) = self.text[start..].chars().next() else {
                break;
            };
            before -= UnicodeWidthChar::width(ch).unwrap_or(0);
            start += ch.len_utf8();
        }
        (&self.text[start..], before as u16)
    }
}

pub struct AppState {
    pub ctx: AppContext,
    pub screens: ScreenCoordinator,
    /// Terminal area the window lives in.
    pub viewport: Rect,
    /// Bumped on every ticker start/stop; ticks from older runs are dropped.
    pub tick_generation: u64,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        saved: Option<WindowPlacement>,
        viewport: Rect,
        observer: Box<dyn TimerObserver>,
    ) -> Self {
        let ctx = AppContext::new(config);
        let placement = saved.unwrap_or_else(|| WindowPlacement::centered(viewport));
        let screens = ScreenCoordinator::new(placement, observer);
        Self {
            ctx,
            screens,
            viewport,
            tick_generation: 0,
            should_quit: false,
            dirty: true,
        }
    }

    pub fn next_tick_generation(&mut self) -> u64 {
        self.tick_generation = self.tick_generation.wrapping_add(1);
        self.tick_generation
    }
}

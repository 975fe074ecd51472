//! Window decoration shared by both screens: placement, drag-to-move,
//! minimize and the rounded, theme-painted frame.

use crate::config::WindowPlacement;
use crate::ui::theme::Palette;
use ratatui::prelude::*;
use ratatui::widgets::{Block, BorderType, Borders, Clear};

/// Height of the collapsed window: border, title bar, border.
pub const MINIMIZED_HEIGHT: u16 = 3;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chrome {
    pub placement: WindowPlacement,
    pub minimized: bool,
    /// Pointer offset from the window's top-left corner while dragging.
    drag_anchor: Option<(u16, u16)>,
}

impl Chrome {
    pub fn new(placement: WindowPlacement) -> Self {
        Self {
            placement,
            minimized: false,
            drag_anchor: None,
        }
    }

    /// Where the window is drawn inside `viewport`.
    pub fn area(&self, viewport: Rect) -> Rect {
        let mut area = self.placement.fit_within(viewport);
        if self.minimized {
            area.height = area.height.min(MINIMIZED_HEIGHT);
        }
        area
    }

    /// The area inside the border.
    pub fn inner(&self, viewport: Rect) -> Rect {
        frame_block().inner(self.area(viewport))
    }

    pub fn contains(&self, viewport: Rect, col: u16, row: u16) -> bool {
        self.area(viewport).contains(Position::new(col, row))
    }

    /// Start dragging if the pointer is on the window.
    pub fn begin_drag(&mut self, viewport: Rect, col: u16, row: u16) -> bool {
        let area = self.area(viewport);
        if !area.contains(Position::new(col, row)) {
            return false;
        }
        // Snap the stored placement to what is on screen so the anchor matches
        self.placement.x = area.x;
        self.placement.y = area.y;
        self.drag_anchor = Some((col - area.x, row - area.y));
        true
    }

    pub fn drag_to(&mut self, viewport: Rect, col: u16, row: u16) {
        let Some((ax, ay)) = self.drag_anchor else {
            return;
        };
        self.placement.x = col.saturating_sub(ax);
        self.placement.y = row.saturating_sub(ay);
        self.clamp(viewport);
    }

    pub fn end_drag(&mut self) {
        self.drag_anchor = None;
    }

    /// Move by whole cells, staying inside `viewport`.
    pub fn nudge(&mut self, viewport: Rect, dx: i32, dy: i32) {
        let area = self.area(viewport);
        let x = i32::from(area.x) + dx;
        let y = i32::from(area.y) + dy;
        self.placement.x = x.clamp(0, i32::from(u16::MAX)) as u16;
        self.placement.y = y.clamp(0, i32::from(u16::MAX)) as u16;
        self.clamp(viewport);
    }

    pub fn toggle_minimized(&mut self) {
        self.minimized = !self.minimized;
    }

    fn clamp(&mut self, viewport: Rect) {
        let fitted = self.placement.fit_within(viewport);
        self.placement.x = fitted.x;
        self.placement.y = fitted.y;
    }

    /// Clear the window area and paint the rounded frame. Returns the area
    /// inside the border.
    pub fn render(&self, frame: &mut Frame, viewport: Rect, palette: &Palette) -> Rect {
        let area = self.area(viewport);
        frame.render_widget(Clear, area);
        let block = frame_block()
            .border_style(palette.border())
            .style(palette.window());
        let inner = block.inner(area);
        frame.render_widget(block, area);
        inner
    }
}

fn frame_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

mod button;
pub mod chrome;
mod config_view;
pub mod layout;
pub mod theme;
mod timer_view;
mod title_bar;

use crate::app::coordinator::ScreenKind;
use crate::app::state::AppState;
use ratatui::prelude::*;

pub fn render(frame: &mut Frame, state: &AppState) {
    let viewport = frame.area();
    match state.screens.active() {
        ScreenKind::Config => {
            config_view::render(frame, viewport, &state.ctx, &state.screens.config)
        }
        ScreenKind::Timer => timer_view::render(frame, viewport, &state.ctx, &state.screens.timer),
    }
}

//! Switches between the configuration and countdown screens.
//!
//! Exactly one screen is active at a time. A switch hands the outgoing
//! screen's placement to the incoming one so the window appears not to move.

use crate::app::config_screen::ConfigScreen;
use crate::app::timer_screen::TimerScreen;
use crate::config::WindowPlacement;
use crate::timer::{SessionRequest, TimerObserver};
use crate::ui::chrome::Chrome;
use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenKind {
    Config,
    Timer,
}

#[derive(Debug)]
pub struct ScreenCoordinator {
    pub config: ConfigScreen,
    pub timer: TimerScreen,
    active: ScreenKind,
}

impl ScreenCoordinator {
    /// Starts on the configuration screen at `placement`.
    pub fn new(placement: WindowPlacement, observer: Box<dyn TimerObserver>) -> Self {
        debug!(?placement, "screens created");
        Self {
            config: ConfigScreen::new(placement),
            timer: TimerScreen::new(placement, observer),
            active: ScreenKind::Config,
        }
    }

    pub fn active(&self) -> ScreenKind {
        self.active
    }

    /// Hand a request to the countdown screen and show it. Ignored unless
    /// the configuration screen is active.
    pub fn submit(&mut self, request: SessionRequest) -> bool {
        if self.active != ScreenKind::Config {
            debug!("submit ignored: configuration screen not active");
            return false;
        }
        self.timer.chrome.placement = self.config.chrome.placement;
        self.timer.chrome.minimized = self.config.chrome.minimized;
        self.timer.start(request);
        self.active = ScreenKind::Timer;
        true
    }

    /// Return to the configuration screen. A running countdown is paused.
    pub fn show_config(&mut self) -> bool {
        if self.active != ScreenKind::Timer {
            return false;
        }
        self.config.chrome.placement = self.timer.chrome.placement;
        self.config.chrome.minimized = self.timer.chrome.minimized;
        self.timer.pause();
        self.active = ScreenKind::Config;
        true
    }

    pub fn active_chrome(&self) -> &Chrome {
        match self.active {
            ScreenKind::Config => &self.config.chrome,
            ScreenKind::Timer => &self.timer.chrome,
        }
    }

    pub fn active_chrome_mut(&mut self) -> &mut Chrome {
        match self.active {
            ScreenKind::Config => &mut self.config.chrome,
            ScreenKind::Timer => &mut self.timer.chrome,
        }
    }

    pub fn active_placement(&self) -> WindowPlacement {
        self.active_chrome().placement
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timer::{Phase, TimerEvent};
    use std::cell::RefCell;
    use std::rc::Rc;

    const START: WindowPlacement = WindowPlacement {
        x: 4,
        y: 2,
        width: 36,
        height: 20,
    };

    fn coordinator() -> (ScreenCoordinator, Rc<RefCell<Vec<TimerEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let c = ScreenCoordinator::new(
            START,
            Box::new(move |ev: TimerEvent| sink.borrow_mut().push(ev)),
        );
        (c, events)
    }

    #[test]
    fn test_starts_on_config() {
        let (c, _) = coordinator();
        assert_eq!(c.active(), ScreenKind::Config);
        assert_eq!(c.active_placement(), START);
    }

    #[test]
    fn test_submit_switches_to_timer() {
        let (mut c, events) = coordinator();
        c.config.chrome.placement.x = 30;
        assert!(c.submit(SessionRequest::new(61, "stretch").unwrap()));
        assert_eq!(c.active(), ScreenKind::Timer);
        assert_eq!(c.timer.countdown().remaining(), 61);
        assert_eq!(c.timer.message(), "stretch");
        assert_eq!(c.active_placement().x, 30);
        assert_eq!(*events.borrow(), vec![TimerEvent::Started { duration: 61 }]);
    }

    #[test]
    fn test_submit_while_timer_active_is_ignored() {
        let (mut c, _) = coordinator();
        c.submit(SessionRequest::new(10, "a").unwrap());
        assert!(!c.submit(SessionRequest::new(20, "b").unwrap()));
        assert_eq!(c.timer.countdown().initial_duration(), 10);
    }

    #[test]
    fn test_back_preserves_geometry() {
        let (mut c, _) = coordinator();
        c.submit(SessionRequest::new(10, "a").unwrap());
        c.timer.chrome.placement = WindowPlacement {
            x: 50,
            y: 9,
            width: 40,
            height: 22,
        };
        assert!(c.show_config());
        assert_eq!(c.active(), ScreenKind::Config);
        assert_eq!(c.config.chrome.placement, c.timer.chrome.placement);
        assert_eq!(c.active_placement().x, 50);
    }

    #[test]
    fn test_back_pauses_running_countdown() {
        let (mut c, events) = coordinator();
        c.submit(SessionRequest::new(10, "a").unwrap());
        c.timer.tick();
        c.show_config();
        assert_eq!(c.timer.countdown().phase(), Phase::Paused);
        assert_eq!(
            events.borrow().last(),
            Some(&TimerEvent::Paused { remaining: 9 })
        );
    }

    #[test]
    fn test_back_on_config_is_noop() {
        let (mut c, _) = coordinator();
        assert!(!c.show_config());
        assert_eq!(c.active(), ScreenKind::Config);
    }

    #[test]
    fn test_config_values_survive_round_trip() {
        let (mut c, _) = coordinator();
        c.config.minutes = 5;
        c.config.message.text = "laundry".into();
        let req = c.config.request().unwrap();
        c.submit(req);
        c.show_config();
        assert_eq!(c.config.minutes, 5);
        assert_eq!(c.config.message.text, "laundry");
    }
}

use crate::config::WindowPlacement;
use crate::timer::{Countdown, SessionRequest, TimerObserver};
use crate::ui::chrome::Chrome;
use tracing::info;

/// Caption shown before the first session starts.
const DEFAULT_CAPTION: &str = "Countdown";

/// The live countdown screen. Sole owner of the countdown state.
#[derive(Debug)]
pub struct TimerScreen {
    pub chrome: Chrome,
    countdown: Countdown,
    message: String,
}

impl TimerScreen {
    pub fn new(placement: WindowPlacement, observer: Box<dyn TimerObserver>) -> Self {
        let mut countdown = Countdown::new();
        countdown.subscribe(observer);
        Self {
            chrome: Chrome::new(placement),
            countdown,
            message: DEFAULT_CAPTION.to_string(),
        }
    }

    /// Consume a request and start counting down from its duration.
    pub fn start(&mut self, request: SessionRequest) {
        let (duration, message) = request.into_parts();
        info!(duration, "countdown started");
        self.message = message;
        self.countdown.start(duration);
    }

    pub fn toggle_pause(&mut self) {
        self.countdown.toggle_pause();
    }

    pub fn reset(&mut self) {
        self.countdown.reset();
    }

    pub fn tick(&mut self) {
        self.countdown.tick();
    }

    /// Stop a running countdown without resetting it.
    pub fn pause(&mut self) {
        self.countdown.pause();
    }

    pub fn countdown(&self) -> &Countdown {
        &self.countdown
    }

    pub fn message(&self) -> &str {
        &self.message
    }
}

use crate::timer::TimerEvent;
use crossterm::event::Event as CrosstermEvent;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// One countdown period elapsed. Carries the generation of the ticker
    /// run that produced it.
    CountdownTick { generation: u64 },

    /// Countdown transition forwarded from the timer observer
    Timer(TimerEvent),
}

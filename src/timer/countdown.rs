//! The countdown state machine.
//!
//! A [`Countdown`] owns a [`TimerState`] and advances it one second per
//! external tick. The phase is never stored; it is derived from the state,
//! so `remaining <= initial_duration` and "not running at zero" hold after
//! every operation.

use std::fmt;
use tracing::debug;

/// Raw countdown data. All values are whole seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TimerState {
    pub initial_duration: u64,
    pub remaining: u64,
    pub running: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Stopped at the full duration.
    Idle,
    Running,
    /// Stopped part way through.
    Paused,
    /// Reached zero. Stays here until reset or restarted.
    Expired,
}

/// Transition notifications delivered to every [`TimerObserver`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerEvent {
    Started { duration: u64 },
    Ticked { remaining: u64 },
    Paused { remaining: u64 },
    Resumed { remaining: u64 },
    Reset { remaining: u64 },
    Expired,
}

pub trait TimerObserver {
    fn on_timer_event(&mut self, event: TimerEvent);
}

impl<F> TimerObserver for F
where
    F: FnMut(TimerEvent),
{
    fn on_timer_event(&mut self, event: TimerEvent) {
        self(event)
    }
}

#[derive(Default)]
pub struct Countdown {
    state: TimerState,
    observers: Vec<Box<dyn TimerObserver>>,
}

impl fmt::Debug for Countdown {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Countdown")
            .field("state", &self.state)
            .field("observers", &self.observers.len())
            .finish()
    }
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, observer: Box<dyn TimerObserver>) {
        self.observers.push(observer);
    }

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn remaining(&self) -> u64 {
        self.state.remaining
    }

    pub fn initial_duration(&self) -> u64 {
        self.state.initial_duration
    }

    pub fn is_running(&self) -> bool {
        self.state.running
    }

    /// Pausing before the first tick leaves `remaining == initial_duration`,
    /// which reads as `Idle` rather than `Paused`.
    pub fn phase(&self) -> Phase {
        let s = &self.state;
        if s.remaining == 0 {
            Phase::Expired
        } else if s.running {
            Phase::Running
        } else if s.remaining == s.initial_duration {
            Phase::Idle
        } else {
            Phase::Paused
        }
    }

    /// Fraction of the session already elapsed, in `[0, 1]`.
    pub fn progress(&self) -> f64 {
        let s = &self.state;
        if s.initial_duration == 0 {
            return 1.0;
        }
        1.0 - s.remaining as f64 / s.initial_duration as f64
    }

    /// Begin a new session. A zero duration is ignored. Always discards the
    /// previous session, expired or not.
    pub fn start(&mut self, duration: u64) {
        if duration == 0 {
            debug!("ignoring start with zero duration");
            return;
        }
        self.state = TimerState {
            initial_duration: duration,
            remaining: duration,
            running: true,
        };
        self.notify(TimerEvent::Started { duration });
    }

    /// Advance by one second. Ignored unless running.
    pub fn tick(&mut self) {
        if !self.state.running {
            return;
        }
        self.state.remaining = self.state.remaining.saturating_sub(1);
        self.notify(TimerEvent::Ticked {
            remaining: self.state.remaining,
        });
        if self.state.remaining == 0 {
            self.state.running = false;
            self.notify(TimerEvent::Expired);
        }
    }

    pub fn toggle_pause(&mut self) {
        if self.state.remaining == 0 {
            return;
        }
        self.state.running = !self.state.running;
        let remaining = self.state.remaining;
        if self.state.running {
            self.notify(TimerEvent::Resumed { remaining });
        } else {
            self.notify(TimerEvent::Paused { remaining });
        }
    }

    /// Stop if running. Used when the countdown screen is hidden.
    pub fn pause(&mut self) {
        if self.state.running {
            self.toggle_pause();
        }
    }

    pub fn reset(&mut self) {
        self.state.remaining = self.state.initial_duration;
        self.state.running = false;
        self.notify(TimerEvent::Reset {
            remaining: self.state.remaining,
        });
    }

    fn notify(&mut self, event: TimerEvent) {
        for observer in &mut self.observers {
            observer.on_timer_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recorded() -> (Countdown, Rc<RefCell<Vec<TimerEvent>>>) {
        let events = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&events);
        let mut countdown = Countdown::new();
        countdown.subscribe(Box::new(move |ev: TimerEvent| sink.borrow_mut().push(ev)));
        (countdown, events)
    }

    fn assert_invariants(c: &Countdown) {
        let s = c.state();
        assert!(s.remaining <= s.initial_duration);
        if s.remaining == 0 {
            assert!(!s.running);
        }
    }

    #[test]
    fn test_start_runs_with_full_duration() {
        for d in [1, 2, 59, 3661] {
            let mut c = Countdown::new();
            c.start(d);
            assert_eq!(c.remaining(), d);
            assert_eq!(c.phase(), Phase::Running);
            assert_invariants(&c);
        }
    }

    #[test]
    fn test_start_zero_is_noop() {
        let (mut c, events) = recorded();
        c.start(5);
        c.tick();
        let before = c.state();
        c.start(0);
        assert_eq!(c.state(), before);
        assert_eq!(events.borrow().len(), 2);
    }

    #[test]
    fn test_fresh_countdown_is_expired() {
        let c = Countdown::new();
        assert_eq!(c.phase(), Phase::Expired);
        assert_eq!(c.progress(), 1.0);
    }

    #[test]
    fn test_ticks_reach_expired() {
        let (mut c, events) = recorded();
        c.start(3);
        for _ in 0..3 {
            c.tick();
            assert_invariants(&c);
        }
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.phase(), Phase::Expired);
        assert_eq!(events.borrow().last(), Some(&TimerEvent::Expired));

        c.tick();
        c.tick();
        assert_eq!(c.remaining(), 0);
        assert_eq!(c.phase(), Phase::Expired);
    }

    #[test]
    fn test_toggle_pause_when_expired_is_noop() {
        let (mut c, events) = recorded();
        c.start(1);
        c.tick();
        let count = events.borrow().len();
        c.toggle_pause();
        assert_eq!(c.phase(), Phase::Expired);
        assert_eq!(events.borrow().len(), count);
    }

    #[test]
    fn test_pause_and_resume() {
        let (mut c, events) = recorded();
        c.start(10);
        c.tick();
        c.toggle_pause();
        assert_eq!(c.phase(), Phase::Paused);

        c.tick();
        c.tick();
        assert_eq!(c.remaining(), 9);

        c.toggle_pause();
        assert_eq!(c.phase(), Phase::Running);
        assert_eq!(
            *events.borrow(),
            vec![
                TimerEvent::Started { duration: 10 },
                TimerEvent::Ticked { remaining: 9 },
                TimerEvent::Paused { remaining: 9 },
                TimerEvent::Resumed { remaining: 9 },
            ]
        );
    }

    #[test]
    fn test_pause_before_first_tick_reads_idle() {
        let mut c = Countdown::new();
        c.start(10);
        c.toggle_pause();
        assert_eq!(c.phase(), Phase::Idle);
        c.toggle_pause();
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_reset_restores_initial_duration() {
        let mut c = Countdown::new();
        c.start(4);
        c.tick();
        c.toggle_pause();
        c.reset();
        assert_eq!(c.remaining(), 4);
        assert_eq!(c.phase(), Phase::Idle);

        c.toggle_pause();
        c.tick();
        c.tick();
        c.tick();
        c.tick();
        assert_eq!(c.phase(), Phase::Expired);
        c.reset();
        assert_eq!(c.remaining(), 4);
        assert_eq!(c.phase(), Phase::Idle);

        // Reset makes toggling effective again
        c.toggle_pause();
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_reset_with_zero_initial_is_expired() {
        let (mut c, events) = recorded();
        c.reset();
        assert_eq!(c.phase(), Phase::Expired);
        assert_eq!(*events.borrow(), vec![TimerEvent::Reset { remaining: 0 }]);
    }

    #[test]
    fn test_start_restarts_running_session() {
        let mut c = Countdown::new();
        c.start(5);
        c.tick();
        c.tick();
        c.start(8);
        assert_eq!(c.state().initial_duration, 8);
        assert_eq!(c.remaining(), 8);
        assert_eq!(c.phase(), Phase::Running);
    }

    #[test]
    fn test_progress() {
        let mut c = Countdown::new();
        c.start(4);
        assert_eq!(c.progress(), 0.0);
        c.tick();
        assert_eq!(c.progress(), 0.25);
    }
}

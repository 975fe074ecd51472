//! Countdown core: the timer state machine, session requests, time
//! formatting and the periodic ticker that drives it.

pub mod countdown;
pub mod format;
pub mod session;
pub mod ticker;

pub use countdown::{Countdown, Phase, TimerEvent, TimerObserver};
pub use format::format_hms;
pub use session::{SessionError, SessionRequest};

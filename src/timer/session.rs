use thiserror::Error;

/// Largest value any of the hour/minute/second fields accepts.
pub const FIELD_MAX: u8 = 60;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SessionError {
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,
}

/// A configured countdown handed from the configuration screen to the
/// countdown screen. Consumed by [`crate::app::timer_screen::TimerScreen::start`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionRequest {
    duration: u64,
    message: String,
}

impl SessionRequest {
    pub fn new(duration: u64, message: impl Into<String>) -> Result<Self, SessionError> {
        if duration == 0 {
            return Err(SessionError::ZeroDuration);
        }
        Ok(Self {
            duration,
            message: message.into(),
        })
    }

    /// Build a request from the three clock fields. Each field is clamped to
    /// `0..=FIELD_MAX` before the total is computed.
    pub fn from_hms(
        hours: u8,
        minutes: u8,
        seconds: u8,
        message: impl Into<String>,
    ) -> Result<Self, SessionError> {
        Self::new(total_seconds(hours, minutes, seconds), message)
    }

    pub fn duration(&self) -> u64 {
        self.duration
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_parts(self) -> (u64, String) {
        (self.duration, self.message)
    }
}

pub fn total_seconds(hours: u8, minutes: u8, seconds: u8) -> u64 {
    let h = u64::from(hours.min(FIELD_MAX));
    let m = u64::from(minutes.min(FIELD_MAX));
    let s = u64::from(seconds.min(FIELD_MAX));
    h * 3600 + m * 60 + s
}

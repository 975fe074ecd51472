use crate::app::state::InputState;
use crate::config::WindowPlacement;
use crate::timer::session::{total_seconds, FIELD_MAX};
use crate::timer::{SessionError, SessionRequest};
use crate::ui::chrome::Chrome;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigField {
    Hours,
    Minutes,
    Seconds,
    Message,
    Start,
}

impl ConfigField {
    const ORDER: [ConfigField; 5] = [
        ConfigField::Hours,
        ConfigField::Minutes,
        ConfigField::Seconds,
        ConfigField::Message,
        ConfigField::Start,
    ];

    fn index(self) -> usize {
        Self::ORDER.iter().position(|f| *f == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Self::ORDER[(self.index() + 1) % Self::ORDER.len()]
    }

    pub fn prev(self) -> Self {
        let len = Self::ORDER.len();
        Self::ORDER[(self.index() + len - 1) % len]
    }
}

/// The duration and message entry screen.
#[derive(Debug, Clone)]
pub struct ConfigScreen {
    pub chrome: Chrome,
    pub hours: u8,
    pub minutes: u8,
    pub seconds: u8,
    pub message: InputState,
    pub focus: ConfigField,
}

impl ConfigScreen {
    pub fn new(placement: WindowPlacement) -> Self {
        Self {
            chrome: Chrome::new(placement),
            hours: 0,
            minutes: 0,
            seconds: 0,
            message: InputState::new(),
            focus: ConfigField::Hours,
        }
    }

    pub fn focus_next(&mut self) {
        self.focus = self.focus.next();
    }

    pub fn focus_prev(&mut self) {
        self.focus = self.focus.prev();
    }

    pub fn field_value(&self, field: ConfigField) -> Option<u8> {
        match field {
            ConfigField::Hours => Some(self.hours),
            ConfigField::Minutes => Some(self.minutes),
            ConfigField::Seconds => Some(self.seconds),
            _ => None,
        }
    }

    fn focused_value_mut(&mut self) -> Option<&mut u8> {
        match self.focus {
            ConfigField::Hours => Some(&mut self.hours),
            ConfigField::Minutes => Some(&mut self.minutes),
            ConfigField::Seconds => Some(&mut self.seconds),
            _ => None,
        }
    }

    /// Append a digit to the focused clock field. If the result would leave
    /// the `0..=60` range the field restarts with just the new digit.
    pub fn type_digit(&mut self, digit: u8) {
        let Some(value) = self.focused_value_mut() else {
            return;
        };
        let appended = u16::from(*value) * 10 + u16::from(digit);
        *value = if appended <= u16::from(FIELD_MAX) {
            appended as u8
        } else {
            digit.min(9)
        };
    }

    /// Step the focused clock field, clamped to `0..=60`.
    pub fn adjust(&mut self, delta: i16) {
        if let Some(value) = self.focused_value_mut() {
            *value = (i16::from(*value) + delta).clamp(0, i16::from(FIELD_MAX)) as u8;
        }
    }

    /// Drop the last digit of the focused clock field.
    pub fn erase_digit(&mut self) {
        if let Some(value) = self.focused_value_mut() {
            *value /= 10;
        }
    }

    pub fn total_seconds(&self) -> u64 {
        total_seconds(self.hours, self.minutes, self.seconds)
    }

    pub fn request(&self) -> Result<SessionRequest, SessionError> {
        SessionRequest::from_hms(
            self.hours,
            self.minutes,
            self.seconds,
            self.message.text.clone(),
        )
    }
}

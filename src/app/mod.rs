//! Core application logic: screens, state, event handling, and action dispatch.

pub mod action;
pub mod config_screen;
pub mod coordinator;
pub mod event;
pub mod handler;
pub mod state;
pub mod timer_screen;

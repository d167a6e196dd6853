// TUI application state
//
// Wraps the controller with the presentation-only state: theme, toast,
// the captured log buffer, and the flags the event loop acts on.

use super::components::Toast;
use super::theme::Theme;
use crate::controller::{Controller, Effect, Event};
use crate::logging::LogBuffer;
use chrono::Utc;

pub struct App {
    pub controller: Controller,

    /// Captured logs; the footer shows the latest entry
    pub log_buffer: LogBuffer,

    pub theme: Theme,

    /// Notice currently flashed in the corner
    pub toast: Option<Toast>,

    /// Set when the controller asks to terminate
    pub should_quit: bool,

    /// Set when the controller asks for the expiry timer to be re-armed
    rearm_expiry: bool,
}

impl App {
    pub fn new(controller: Controller, log_buffer: LogBuffer, theme: Theme) -> Self {
        Self {
            controller,
            log_buffer,
            theme,
            toast: None,
            should_quit: false,
            rearm_expiry: false,
        }
    }

    /// Reduce one event at the current time and apply the resulting effects
    pub fn dispatch(&mut self, event: Event) {
        for effect in self.controller.handle(event, Utc::now()) {
            match effect {
                Effect::Terminate => self.should_quit = true,
                Effect::RearmExpiry => self.rearm_expiry = true,
                Effect::Notice(notice) => self.show_toast(notice.message()),
            }
        }
    }

    /// Consume the pending re-arm request
    pub fn take_rearm(&mut self) -> bool {
        std::mem::take(&mut self.rearm_expiry)
    }

    pub fn show_toast(&mut self, message: impl Into<String>) {
        self.toast = Some(Toast::new(message));
    }

    pub fn clear_expired_toast(&mut self) {
        if self.toast.as_ref().is_some_and(Toast::is_expired) {
            self.toast = None;
        }
    }
}

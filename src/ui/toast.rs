// src/ui/toast.rs
//! The two reusable notification slots

use std::time::{Duration, Instant};

use crate::app_log;

pub const ERROR_TOAST_DURATION: Duration = Duration::from_secs(5);
pub const SUCCESS_TOAST_DURATION: Duration = Duration::from_secs(3);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Error,
    Success,
}

impl ToastKind {
    pub fn css_class(&self) -> &'static str {
        match self {
            Self::Error => "error-message",
            Self::Success => "success-message",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Self::Error => "fas fa-exclamation-triangle",
            Self::Success => "fas fa-check-circle",
        }
    }

    fn duration(&self) -> Duration {
        match self {
            Self::Error => ERROR_TOAST_DURATION,
            Self::Success => SUCCESS_TOAST_DURATION,
        }
    }
}

/// A single reusable toast element. Showing a new message replaces the
/// previous one and restarts the dismiss timer.
#[derive(Debug, Clone)]
pub struct ToastSlot {
    kind: ToastKind,
    message: Option<String>,
    shown_at: Option<Instant>,
    shown_count: usize,
}

impl ToastSlot {
    fn new(kind: ToastKind) -> Self {
        Self {
            kind,
            message: None,
            shown_at: None,
            shown_count: 0,
        }
    }

    fn show(&mut self, message: String, now: Instant) {
        self.message = Some(message);
        self.shown_at = Some(now);
        self.shown_count += 1;
    }

    pub fn kind(&self) -> ToastKind {
        self.kind
    }

    /// Last message shown, visible or not.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn is_visible_at(&self, now: Instant) -> bool {
        self.shown_at
            .map(|at| now.saturating_duration_since(at) < self.kind.duration())
            .unwrap_or(false)
    }

    pub fn visible_message_at(&self, now: Instant) -> Option<&str> {
        if self.is_visible_at(now) {
            self.message()
        } else {
            None
        }
    }

    /// How many times this slot has been (re)used.
    pub fn shown_count(&self) -> usize {
        self.shown_count
    }
}

#[derive(Debug, Clone)]
pub struct Toasts {
    pub error: ToastSlot,
    pub success: ToastSlot,
}

impl Default for Toasts {
    fn default() -> Self {
        Self {
            error: ToastSlot::new(ToastKind::Error),
            success: ToastSlot::new(ToastKind::Success),
        }
    }
}

impl Toasts {
    pub fn show_error(&mut self, message: impl Into<String>) {
        let message = message.into();
        app_log!(warn, "Error toast: {}", message);
        self.error.show(message, Instant::now());
    }

    pub fn show_success(&mut self, message: impl Into<String>) {
        let message = message.into();
        app_log!(info, "Success toast: {}", message);
        self.success.show(message, Instant::now());
    }

    pub fn current_error(&self) -> Option<&str> {
        self.error.visible_message_at(Instant::now())
    }

    pub fn current_success(&self) -> Option<&str> {
        self.success.visible_message_at(Instant::now())
    }
}

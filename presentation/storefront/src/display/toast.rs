use std::collections::VecDeque;
use std::sync::Mutex;

use chrono::{DateTime, Utc};

use business::domain::notifier::Notifier;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastLevel {
    Success,
    Info,
    Warning,
    Error,
}

/// One pending user notification. `created_at` lets the UI expire toasts
/// after its display window.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub level: ToastLevel,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// Collects notifications for the UI to drain on its next render pass.
#[derive(Default)]
pub struct ToastQueue {
    pending: Mutex<VecDeque<Toast>>,
}

impl ToastQueue {
    pub fn new() -> Self {
        Self::default()
    }

    /// Takes all pending toasts, oldest first.
    pub fn drain(&self) -> Vec<Toast> {
        match self.pending.lock() {
            Ok(mut pending) => pending.drain(..).collect(),
            Err(_) => Vec::new(),
        }
    }

    fn push(&self, level: ToastLevel, message: &str) {
        if let Ok(mut pending) = self.pending.lock() {
            pending.push_back(Toast {
                level,
                message: message.to_string(),
                created_at: Utc::now(),
            });
        }
    }
}

impl Notifier for ToastQueue {
    fn success(&self, message: &str) {
        self.push(ToastLevel::Success, message);
    }

    fn info(&self, message: &str) {
        self.push(ToastLevel::Info, message);
    }

    fn warning(&self, message: &str) {
        self.push(ToastLevel::Warning, message);
    }

    fn error(&self, message: &str) {
        self.push(ToastLevel::Error, message);
    }
}

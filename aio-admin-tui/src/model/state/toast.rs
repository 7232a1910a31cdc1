//! 状态栏提示消息

use std::time::{Duration, Instant};

/// 提示停留时间
pub const TOAST_DURATION: Duration = Duration::from_secs(3);

/// 提示类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
    Info,
}

/// 一条会自动消失的提示
#[derive(Debug, Clone)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub expires_at: Instant,
}

impl Toast {
    pub fn new(kind: ToastKind, message: impl Into<String>, now: Instant) -> Self {
        Self {
            kind,
            message: message.into(),
            expires_at: now + TOAST_DURATION,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        now >= self.expires_at
    }
}

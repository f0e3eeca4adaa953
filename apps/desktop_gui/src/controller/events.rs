//! Events flowing from the delivery worker to the UI, plus the banner
//! model for app-level problems (worker startup, queue pressure). The
//! contact submission itself reports through `contact::status`.

pub enum UiEvent {
    /// Worker lifecycle notices, shown as the unobtrusive status text.
    Info(String),
    /// The worker cannot run at all; any in-flight submission is rolled
    /// back and the banner explains what happened.
    WorkerFailed { detail: String },
    ContactDelivered,
    /// Delivery failed; `detail` is for logs only, the status line always
    /// shows the fixed delivery-error text.
    ContactFailed { detail: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusBannerSeverity {
    Error,
}

#[derive(Debug, Clone)]
pub struct StatusBanner {
    pub severity: StatusBannerSeverity,
    pub message: String,
}

impl StatusBanner {
    pub fn error(message: impl Into<String>) -> Self {
        Self {
            severity: StatusBannerSeverity::Error,
            message: message.into(),
        }
    }
}

pub const SENDING_TEXT: &str = "Sending…";
pub const SENT_TEXT: &str = "Message sent. I will respond as soon as possible.";
pub const VALIDATION_ERROR_TEXT: &str = "Please provide your email and a message.";
pub const DELIVERY_ERROR_TEXT: &str =
    "Could not send via the form endpoint. Please use the email link below.";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SubmissionState {
    #[default]
    Idle,
    Sending,
    Sent,
    Error,
}

/// Current submission state paired with the status line the UI shows for
/// it. `Sent` and `Error` are terminal for an attempt; a new submit moves
/// back through `Sending`.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SubmissionStatus {
    pub state: SubmissionState,
    pub message: String,
}

impl SubmissionStatus {
    pub fn idle() -> Self {
        Self::default()
    }

    pub fn sending() -> Self {
        Self {
            state: SubmissionState::Sending,
            message: SENDING_TEXT.into(),
        }
    }

    pub fn sent() -> Self {
        Self {
            state: SubmissionState::Sent,
            message: SENT_TEXT.into(),
        }
    }

    pub fn validation_failed() -> Self {
        Self {
            state: SubmissionState::Error,
            message: VALIDATION_ERROR_TEXT.into(),
        }
    }

    pub fn delivery_failed() -> Self {
        Self {
            state: SubmissionState::Error,
            message: DELIVERY_ERROR_TEXT.into(),
        }
    }

    pub fn is_sending(&self) -> bool {
        self.state == SubmissionState::Sending
    }

    pub fn is_error(&self) -> bool {
        self.state == SubmissionState::Error
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initial_status_is_idle_with_no_message() {
        let status = SubmissionStatus::idle();
        assert_eq!(status.state, SubmissionState::Idle);
        assert!(status.message.is_empty());
        assert!(!status.is_sending());
    }

    #[test]
    fn states_carry_their_fixed_texts() {
        assert_eq!(SubmissionStatus::sending().message, "Sending…");
        assert_eq!(
            SubmissionStatus::sent().message,
            "Message sent. I will respond as soon as possible."
        );
        assert_eq!(
            SubmissionStatus::validation_failed().message,
            "Please provide your email and a message."
        );
        assert_eq!(
            SubmissionStatus::delivery_failed().message,
            "Could not send via the form endpoint. Please use the email link below."
        );
    }

    #[test]
    fn only_sending_reports_in_flight() {
        assert!(SubmissionStatus::sending().is_sending());
        assert!(!SubmissionStatus::sent().is_sending());
        assert!(!SubmissionStatus::delivery_failed().is_sending());
        assert!(SubmissionStatus::delivery_failed().is_error());
        assert!(!SubmissionStatus::sent().is_error());
    }
}

pub const SENDING_MESSAGE: &str = "Sending...";
pub const SUCCESS_MESSAGE: &str = "Thanks For Showing Interest, Will Call You Shortly";
pub const GENERIC_ERROR_MESSAGE: &str = "Something Went Wrong. Please try again later.";

/// Lifecycle of a submission attempt, rendered as the result overlay.
///
/// `Success` and `Error` stay until the overlay is dismissed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionStatus {
    #[default]
    Idle,
    Sending,
    Success(String),
    Error(String),
}

impl SubmissionStatus {
    pub fn is_overlay_visible(&self) -> bool {
        !matches!(self, Self::Idle)
    }

    pub fn is_sending(&self) -> bool {
        matches!(self, Self::Sending)
    }

    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Idle => None,
            Self::Sending => Some(SENDING_MESSAGE),
            Self::Success(message) | Self::Error(message) => Some(message),
        }
    }
}

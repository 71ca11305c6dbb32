use services::SessionError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewError {
    SessionUnavailable,
    Unknown,
}

impl ViewError {
    #[must_use]
    pub fn message(self) -> &'static str {
        match self {
            Self::SessionUnavailable => "This assessment is not available right now.",
            Self::Unknown => "Something went wrong. Please try again.",
        }
    }
}

impl From<SessionError> for ViewError {
    fn from(err: SessionError) -> Self {
        match err {
            SessionError::MissingReport(_) => Self::SessionUnavailable,
            _ => Self::Unknown,
        }
    }
}

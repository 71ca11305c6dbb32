/// Lifecycle of the simulated interview call.
///
/// `Idle -> Active -> Ended`. `Ended` is terminal for a session; a new
/// session starts again at `Idle`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum CallState {
    #[default]
    Idle,
    Active,
    Ended,
}

impl CallState {
    #[must_use]
    pub const fn is_active(self) -> bool {
        matches!(self, Self::Active)
    }

    #[must_use]
    pub const fn can_start(self) -> bool {
        matches!(self, Self::Idle)
    }

    #[must_use]
    pub const fn can_stop(self) -> bool {
        matches!(self, Self::Active)
    }
}

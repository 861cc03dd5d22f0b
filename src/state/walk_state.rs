use std::fmt;

/// Lifecycle of a frontier walk
///
/// A walk only ever moves forward: `Idle -> Running -> Done`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkState {
    /// Created, frontier holds only the seed
    Idle,

    /// Pages are being fetched
    Running,

    /// Frontier exhausted or a limit was reached
    Done,
}

impl WalkState {
    /// Returns true if `next` is the state that follows this one
    pub fn can_transition_to(&self, next: WalkState) -> bool {
        matches!(
            (self, next),
            (Self::Idle, Self::Running) | (Self::Running, Self::Done)
        )
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Running => "running",
            Self::Done => "done",
        }
    }
}

impl fmt::Display for WalkState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

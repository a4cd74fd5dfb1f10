//! State returned by behavior tree nodes.

/// The result of ticking a node once.
///
/// # Tick Semantics
///
/// Every tick produces exactly one state. Long-running work does not block
/// inside a tick; it reports [`NodeState::Running`] and relies on the driver
/// to tick the same node again on a later step.
#[derive(
    Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::AsRefStr,
)]
pub enum NodeState {
    /// Not yet meaningfully evaluated.
    ///
    /// A correct leaf never returns this, but every decorator and composite
    /// has a defined answer for it.
    #[default]
    None,

    /// The node completed its work.
    ///
    /// For conditions: the condition holds.
    /// For actions: the action finished.
    Success,

    /// The node could not complete its work.
    ///
    /// For conditions: the condition does not hold.
    /// For actions: the action cannot be carried out right now.
    Failure,

    /// The node is mid-task and needs further ticks to finish.
    Running,
}

impl NodeState {
    /// Returns `true` if this state is `Success`.
    #[inline]
    pub fn is_success(self) -> bool {
        matches!(self, NodeState::Success)
    }

    /// Returns `true` if this state is `Failure`.
    #[inline]
    pub fn is_failure(self) -> bool {
        matches!(self, NodeState::Failure)
    }

    /// Returns `true` if this state is `Running`.
    #[inline]
    pub fn is_running(self) -> bool {
        matches!(self, NodeState::Running)
    }

    /// Returns `true` if this state is `None`.
    #[inline]
    pub fn is_none(self) -> bool {
        matches!(self, NodeState::None)
    }

    /// Inverts the state: Success becomes Failure and vice versa.
    ///
    /// `Running` is kept as is. `None` maps to `Failure`: an unevaluated
    /// child never counts as a success.
    #[inline]
    pub fn invert(self) -> Self {
        match self {
            NodeState::Success => NodeState::Failure,
            NodeState::Failure => NodeState::Success,
            NodeState::Running => NodeState::Running,
            NodeState::None => NodeState::Failure,
        }
    }
}

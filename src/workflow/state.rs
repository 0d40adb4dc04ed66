//! Single-owner workflow state.

/// Which workflow currently owns the session.
///
/// Stands in for a pair of re-entrancy flags: a workflow is only entered
/// from `Idle`, and every exit path returns to `Idle`, so at most one of
/// the two flows can ever be in flight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FlowState {
    #[default]
    Idle,
    StoringRecords,
    Minting,
}

impl FlowState {
    pub fn is_idle(&self) -> bool {
        matches!(self, FlowState::Idle)
    }

    /// Short label for notices and logs.
    pub fn describe(&self) -> &'static str {
        match self {
            FlowState::Idle => "idle",
            FlowState::StoringRecords => "storing records",
            FlowState::Minting => "minting",
        }
    }
}

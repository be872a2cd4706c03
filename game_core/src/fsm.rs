//! Match State Machine
//!
//! A match is either being played or frozen on the win screen.

/// Match states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchState {
    InProgress,
    GameOver,
}

/// Actions that trigger state transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchAction {
    ThresholdReached,
    Restart,
}

/// Result of a state transition
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionResult {
    pub success: bool,
    pub from_state: MatchState,
    pub to_state: MatchState,
    pub action: MatchAction,
}

/// Match Finite State Machine
#[derive(Debug, Clone)]
pub struct MatchFsm {
    state: MatchState,
}

impl MatchFsm {
    pub fn new() -> Self {
        Self {
            state: MatchState::InProgress,
        }
    }

    pub fn state(&self) -> MatchState {
        self.state
    }

    /// Attempt a transition
    pub fn transition(&mut self, action: MatchAction) -> TransitionResult {
        let from_state = self.state;
        let next = self.next_state(action);
        if let Some(next_state) = next {
            self.state = next_state;
        }
        TransitionResult {
            success: next.is_some(),
            from_state,
            to_state: self.state,
            action,
        }
    }

    fn next_state(&self, action: MatchAction) -> Option<MatchState> {
        match (self.state, action) {
            (MatchState::InProgress, MatchAction::ThresholdReached) => Some(MatchState::GameOver),
            (MatchState::GameOver, MatchAction::Restart) => Some(MatchState::InProgress),
            _ => None,
        }
    }

    pub fn is_game_over(&self) -> bool {
        self.state == MatchState::GameOver
    }
}

impl Default for MatchFsm {
    fn default() -> Self {
        Self::new()
    }
}

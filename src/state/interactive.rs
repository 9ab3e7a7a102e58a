/// Question the session is waiting on; the next input line answers it instead of
/// being parsed as a command.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InteractiveState {
    #[default]
    None,
    ConfirmRestart,
}

pub const RESTART_PROMPT: &str = "WARNING: Unsaved progress will be lost, Are you sure you want to RESTART? (y/n): ";

impl InteractiveState {
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            InteractiveState::None => None,
            InteractiveState::ConfirmRestart => Some(RESTART_PROMPT),
        }
    }
}

/// Only these answers confirm; anything else declines.
pub fn is_confirmation(answer: &str) -> bool {
    matches!(answer.trim(), "y" | "Y" | "yes" | "YES")
}

use serde::{Deserialize, Serialize};

/// Messages specific to SystemState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SystemMsg {
    // System control
    Quit,
    Tick,
    /// Tear everything down and rebuild from config
    Reload,

    // External signals
    ConnectivityChanged(bool),
    NewVersionDetected(String),

    // Status management
    UpdateStatusMessage(String),
    ClearStatusMessage,
    ShowError(String),
}

impl SystemMsg {
    /// Determine if this is a frequent message during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, SystemMsg::Tick)
    }
}

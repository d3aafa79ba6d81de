use crossterm::event::KeyEvent;
use serde::{Deserialize, Serialize};

/// Raw messages from external sources (terminal, health probe, runtime)
/// These represent unprocessed external events that need to be translated to domain events
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RawMsg {
    // System events
    Tick,
    Render,
    Resize(u16, u16),
    Quit,

    // User input (raw keyboard events)
    Key(KeyEvent),

    // Health probe
    ConnectivityChanged(bool),
    NewVersion(String),

    // System status
    Error(String),
}

impl RawMsg {
    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        matches!(self, RawMsg::Tick | RawMsg::Render)
    }
}

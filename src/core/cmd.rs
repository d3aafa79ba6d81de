use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::domain::{location::Location, query::FetchRequest};

/// Identifies a scheduled one-shot timer. At most one timer per id is pending.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TimerId {
    /// Releases the carousel's animation lock
    CarouselUnlock,
    /// Clears the grid's transient reset flag
    ResetSignal,
}

/// Elm-like command definitions
/// Represents side effects (network, navigation, timers, logging)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Cmd {
    // Catalog
    FetchProducts {
        request: FetchRequest,
        generation: u64,
        online: bool,
    },

    // Navigation
    Navigate {
        location: Location,
    },
    NavigateBack,

    // Timers
    StartTimer {
        id: TimerId,
        after: Duration,
    },
    CancelTimer {
        id: TimerId,
    },

    // Logging related
    LogError {
        message: String,
    },
    LogInfo {
        message: String,
    },

    // Batch command (execute multiple commands together)
    Batch(Vec<Cmd>),

    // Do nothing (for testing)
    None,
}

impl Cmd {
    /// Combine multiple commands into one
    pub fn batch(commands: Vec<Cmd>) -> Cmd {
        let mut commands = commands;
        match commands.len() {
            0 => Cmd::None,
            1 => commands.remove(0),
            _ => Cmd::Batch(commands),
        }
    }

    /// Whether the command completes later on a spawned task
    pub fn is_async(&self) -> bool {
        match self {
            Cmd::FetchProducts { .. } | Cmd::StartTimer { .. } => true,

            Cmd::Navigate { .. }
            | Cmd::NavigateBack
            | Cmd::CancelTimer { .. }
            | Cmd::LogError { .. }
            | Cmd::LogInfo { .. }
            | Cmd::None => false,

            Cmd::Batch(cmds) => cmds.iter().any(|cmd| cmd.is_async()),
        }
    }

    /// Human-readable command name for execution logs
    pub fn name(&self) -> String {
        match self {
            Cmd::FetchProducts { .. } => "FetchProducts".to_string(),
            Cmd::Navigate { .. } => "Navigate".to_string(),
            Cmd::NavigateBack => "NavigateBack".to_string(),
            Cmd::StartTimer { id, .. } => format!("StartTimer({id:?})"),
            Cmd::CancelTimer { id } => format!("CancelTimer({id:?})"),
            Cmd::LogError { .. } => "LogError".to_string(),
            Cmd::LogInfo { .. } => "LogInfo".to_string(),
            Cmd::Batch(cmds) => format!("Batch({})", cmds.len()),
            Cmd::None => "None".to_string(),
        }
    }
}

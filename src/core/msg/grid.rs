use serde::{Deserialize, Serialize};

use crate::domain::{location::Location, product::Product};

/// Messages specific to GridState
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum GridMsg {
    /// Navigation settled on a new location
    LocationChanged(Location),
    /// Return to the previous location in history
    BackRequested,

    // Pagination
    PageRequested(u32),
    NextPage,
    PreviousPage,

    // Filter reset
    ResetRequested,
    ResetElapsed,

    // Fetch completion, tagged with the generation that issued it
    FetchSucceeded {
        generation: u64,
        products: Vec<Product>,
    },
    FetchFailed {
        generation: u64,
        reason: String,
    },

    // Card selection
    SelectionMoved(isize),
}

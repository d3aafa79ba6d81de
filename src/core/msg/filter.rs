use serde::{Deserialize, Serialize};

/// Messages specific to FilterBarState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum FilterMsg {
    CategoryCycled,
    SortCycled,
    OrderToggled,

    // Search text editing
    SearchStarted,
    SearchInput(char),
    SearchBackspace,
    SearchCommitted,
    SearchCancelled,

    /// Navigate to the listing with the local selection
    Applied,
    /// The grid raised its transient reset flag
    ResetObserved,
}

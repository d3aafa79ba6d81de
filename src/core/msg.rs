use serde::{Deserialize, Serialize};

pub mod carousel;
pub mod filter;
pub mod grid;
pub mod system;

use crate::core::cmd::TimerId;
use carousel::CarouselMsg;
use filter::FilterMsg;
use grid::GridMsg;
use system::SystemMsg;

/// Domain messages representing application intent
/// These are processed by the update function
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Msg {
    // System operations (delegated to SystemState)
    System(SystemMsg),

    // Carousel operations (delegated to CarouselState)
    Carousel(CarouselMsg),

    // Listing operations (delegated to GridState)
    Grid(GridMsg),

    // Filter bar operations (delegated to FilterBarState)
    Filter(FilterMsg),
}

impl Msg {
    /// Message delivered when the timer `id` fires
    pub fn timer_elapsed(id: TimerId) -> Msg {
        match id {
            TimerId::CarouselUnlock => Msg::Carousel(CarouselMsg::AnimationSettled),
            TimerId::ResetSignal => Msg::Grid(GridMsg::ResetElapsed),
        }
    }

    /// Helper to exclude frequent messages during debugging
    pub fn is_frequent(&self) -> bool {
        match self {
            Msg::System(system_msg) => system_msg.is_frequent(),
            Msg::Filter(FilterMsg::SearchInput(_)) => true,
            _ => false,
        }
    }
}

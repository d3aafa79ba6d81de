use serde::{Deserialize, Serialize};

/// Messages specific to CarouselState
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum CarouselMsg {
    Next,
    Previous,
    JumpTo(usize),
    /// The transition window has elapsed
    AnimationSettled,
}

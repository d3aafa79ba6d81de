//! Carousel state
//!
//! Cycles through a fixed list of image references. A transition holds the
//! animation lock for [`ANIMATION_LOCK`]; input arriving while the lock is held is
//! dropped rather than queued.

use std::time::Duration;

use crate::core::{
    cmd::{Cmd, TimerId},
    msg::carousel::CarouselMsg,
};

/// Length of one slide transition.
pub const ANIMATION_LOCK: Duration = Duration::from_millis(500);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SlideDirection {
    #[default]
    Forward,
    Backward,
}

impl SlideDirection {
    fn step(self) -> isize {
        match self {
            SlideDirection::Forward => 1,
            SlideDirection::Backward => -1,
        }
    }
}

/// Visual state of one slide, derived from the carousel position
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlideState {
    Active,
    Incoming,
    Hidden,
}

#[derive(Debug, Clone, Default)]
pub struct CarouselState {
    images: Vec<String>,
    current_index: usize,
    animating: bool,
    direction: SlideDirection,
}

impl CarouselState {
    pub fn new(images: Vec<String>) -> Self {
        Self {
            images,
            ..Default::default()
        }
    }

    pub fn images(&self) -> &[String] {
        &self.images
    }

    pub fn len(&self) -> usize {
        self.images.len()
    }

    pub fn is_empty(&self) -> bool {
        self.images.is_empty()
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_image(&self) -> Option<&str> {
        self.images.get(self.current_index).map(String::as_str)
    }

    pub fn is_animating(&self) -> bool {
        self.animating
    }

    pub fn direction(&self) -> SlideDirection {
        self.direction
    }

    /// Arrows and indicator dots only exist with at least two slides.
    pub fn has_controls(&self) -> bool {
        self.images.len() > 1
    }

    pub fn slide_state(&self, index: usize) -> SlideState {
        let len = self.images.len();
        if len == 0 || index >= len {
            return SlideState::Hidden;
        }
        if index == self.current_index {
            return SlideState::Active;
        }
        let incoming = match self.direction {
            SlideDirection::Forward => (self.current_index + 1) % len,
            SlideDirection::Backward => (self.current_index + len - 1) % len,
        };
        if index == incoming {
            SlideState::Incoming
        } else {
            SlideState::Hidden
        }
    }

    /// Carousel-specific update function
    /// Returns: Generated commands
    pub fn update(&mut self, msg: CarouselMsg) -> Vec<Cmd> {
        match msg {
            CarouselMsg::Next => self.advance(SlideDirection::Forward),
            CarouselMsg::Previous => self.advance(SlideDirection::Backward),
            CarouselMsg::JumpTo(index) => self.jump_to(index),
            CarouselMsg::AnimationSettled => {
                self.animating = false;
                vec![]
            }
        }
    }

    /// Cancels a pending lock release. Call before dropping the component.
    pub fn teardown(&mut self) -> Vec<Cmd> {
        if self.animating {
            self.animating = false;
            vec![Cmd::CancelTimer {
                id: TimerId::CarouselUnlock,
            }]
        } else {
            vec![]
        }
    }

    fn advance(&mut self, direction: SlideDirection) -> Vec<Cmd> {
        if self.animating || !self.has_controls() {
            return vec![];
        }
        let len = self.images.len() as isize;
        let next = (self.current_index as isize + direction.step() + len) % len;
        self.current_index = next as usize;
        self.direction = direction;
        self.lock()
    }

    fn jump_to(&mut self, index: usize) -> Vec<Cmd> {
        if self.animating || !self.has_controls() || index >= self.images.len() {
            return vec![];
        }
        self.direction = if index > self.current_index {
            SlideDirection::Forward
        } else {
            SlideDirection::Backward
        };
        self.current_index = index;
        self.lock()
    }

    fn lock(&mut self) -> Vec<Cmd> {
        self.animating = true;
        vec![Cmd::StartTimer {
            id: TimerId::CarouselUnlock,
            after: ANIMATION_LOCK,
        }]
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::*;

    use super::*;

    fn carousel(n: usize) -> CarouselState {
        CarouselState::new((0..n).map(|i| format!("slide-{i}.jpg")).collect())
    }

    fn unlock_cmd() -> Cmd {
        Cmd::StartTimer {
            id: TimerId::CarouselUnlock,
            after: ANIMATION_LOCK,
        }
    }

    #[test]
    fn test_carousel_initial_state() {
        let state = carousel(3);
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_animating());
        assert_eq!(state.current_image(), Some("slide-0.jpg"));
    }

    #[test]
    fn test_next_locks_and_schedules_release() {
        let mut state = carousel(3);

        let cmds = state.update(CarouselMsg::Next);

        assert_eq!(state.current_index(), 1);
        assert!(state.is_animating());
        assert_eq!(cmds, vec![unlock_cmd()]);

        let cmds = state.update(CarouselMsg::AnimationSettled);
        assert!(!state.is_animating());
        assert!(cmds.is_empty());
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut state = carousel(4);
        state.update(CarouselMsg::Previous);
        assert_eq!(state.current_index(), 3);
        assert_eq!(state.direction(), SlideDirection::Backward);
    }

    #[rstest]
    #[case(2)]
    #[case(3)]
    #[case(7)]
    fn test_full_cycle_returns_to_start(#[case] n: usize) {
        let mut state = carousel(n);
        for _ in 0..n {
            state.update(CarouselMsg::Next);
            state.update(CarouselMsg::AnimationSettled);
        }
        assert_eq!(state.current_index(), 0);

        for _ in 0..n {
            state.update(CarouselMsg::Previous);
            state.update(CarouselMsg::AnimationSettled);
        }
        assert_eq!(state.current_index(), 0);
    }

    #[test]
    fn test_input_while_animating_is_ignored() {
        let mut state = carousel(5);
        state.update(CarouselMsg::Next);

        for msg in [
            CarouselMsg::Next,
            CarouselMsg::Previous,
            CarouselMsg::JumpTo(4),
        ] {
            let cmds = state.update(msg);
            assert!(cmds.is_empty());
            assert_eq!(state.current_index(), 1);
            assert!(state.is_animating());
        }
    }

    #[rstest]
    #[case(0, 3, SlideDirection::Forward)]
    #[case(2, 0, SlideDirection::Backward)]
    #[case(2, 2, SlideDirection::Backward)]
    fn test_jump_to(
        #[case] start: usize,
        #[case] target: usize,
        #[case] expected_direction: SlideDirection,
    ) {
        let mut state = carousel(4);
        state.update(CarouselMsg::JumpTo(start));
        state.update(CarouselMsg::AnimationSettled);

        let cmds = state.update(CarouselMsg::JumpTo(target));
        assert_eq!(cmds, vec![unlock_cmd()]);
        state.update(CarouselMsg::AnimationSettled);

        assert_eq!(state.current_index(), target);
        assert_eq!(state.direction(), expected_direction);
    }

    #[test]
    fn test_jump_out_of_range_is_ignored() {
        let mut state = carousel(3);
        let cmds = state.update(CarouselMsg::JumpTo(3));
        assert!(cmds.is_empty());
        assert_eq!(state.current_index(), 0);
        assert!(!state.is_animating());
    }

    #[rstest]
    #[case(0)]
    #[case(1)]
    fn test_single_or_no_slide_disables_navigation(#[case] n: usize) {
        let mut state = carousel(n);
        assert!(!state.has_controls());

        for msg in [
            CarouselMsg::Next,
            CarouselMsg::Previous,
            CarouselMsg::JumpTo(0),
        ] {
            assert!(state.update(msg).is_empty());
            assert_eq!(state.current_index(), 0);
            assert!(!state.is_animating());
        }
    }

    #[test]
    fn test_slide_state_after_forward_move() {
        let mut state = carousel(4);
        state.update(CarouselMsg::Next);

        assert_eq!(state.slide_state(0), SlideState::Hidden);
        assert_eq!(state.slide_state(1), SlideState::Active);
        assert_eq!(state.slide_state(2), SlideState::Incoming);
        assert_eq!(state.slide_state(3), SlideState::Hidden);
        assert_eq!(state.slide_state(9), SlideState::Hidden);
    }

    #[test]
    fn test_slide_state_after_backward_move() {
        let mut state = carousel(4);
        state.update(CarouselMsg::Previous);

        assert_eq!(state.slide_state(3), SlideState::Active);
        assert_eq!(state.slide_state(2), SlideState::Incoming);
        assert_eq!(state.slide_state(0), SlideState::Hidden);
    }

    #[test]
    fn test_teardown_cancels_pending_release() {
        let mut state = carousel(3);
        assert!(state.teardown().is_empty());

        state.update(CarouselMsg::Next);
        let cmds = state.teardown();
        assert_eq!(
            cmds,
            vec![Cmd::CancelTimer {
                id: TimerId::CarouselUnlock
            }]
        );
        assert!(!state.is_animating());
    }
}

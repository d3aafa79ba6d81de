pub mod carousel;
pub mod filter;
pub mod grid;
pub mod system;

use crate::{core::cmd::Cmd, infrastructure::config::Config};
use carousel::CarouselState;
use filter::FilterBarState;
use grid::{FetchContext, GridState};
use system::SystemState;

/// Unified application state
#[derive(Debug, Clone, Default)]
pub struct AppState {
    pub carousel: CarouselState,
    pub grid: GridState,
    pub filter: FilterBarState,
    pub system: SystemState,
    pub config: ConfigState,
}

/// Configuration state - holds all user-configurable settings
#[derive(Debug, Clone, Default)]
pub struct ConfigState {
    /// Current configuration loaded from file
    pub config: Config,
}

impl AppState {
    /// Initialize AppState from configuration
    pub fn new(config: Config) -> Self {
        Self {
            carousel: CarouselState::new(config.carousel.images.clone()),
            filter: FilterBarState::new(
                config.listing.categories.clone(),
                config.listing.sort_fields.clone(),
            ),
            config: ConfigState { config },
            ..Default::default()
        }
    }

    pub fn fetch_context(&self) -> FetchContext {
        FetchContext {
            online: self.system.is_online,
        }
    }

    /// Tears every component down, returning the commands that release their resources
    pub fn teardown(&mut self) -> Vec<Cmd> {
        let mut cmds = self.carousel.teardown();
        cmds.extend(self.grid.teardown());
        cmds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_default() {
        let state = AppState::default();

        assert!(state.carousel.is_empty());
        assert!(state.grid.products().is_empty());
        assert!(!state.system.should_quit);
        assert!(state.system.is_online);
    }

    #[test]
    fn test_app_state_new_with_config() {
        let mut config = Config::default();
        config.carousel.images = vec!["a.jpg".to_string(), "b.jpg".to_string()];
        config.listing.categories = vec!["shoes".to_string()];

        let state = AppState::new(config);

        assert_eq!(state.carousel.len(), 2);
        assert!(state.carousel.has_controls());
        assert_eq!(state.config.config.listing.categories, vec!["shoes"]);
    }

    #[test]
    fn test_fetch_context_follows_connectivity() {
        let mut state = AppState::default();
        assert!(state.fetch_context().online);
        state.system.is_online = false;
        assert!(!state.fetch_context().online);
    }
}

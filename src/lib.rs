//! # Storefront - terminal storefront client
//!
//! A product catalogue for the terminal: a banner carousel above a paginated,
//! filterable product grid, fetched from a product API with an offline cache.
//!
//! ## Architecture Overview
//!
//! The crate follows the Elm architecture:
//!
//! - **Model** (`core::state`): application state, one struct per component
//! - **Message** (`core::msg`): events that can change the state
//! - **Update** (`core::update`): transforms state and returns commands
//! - **Command** (`core::cmd`): side effects (fetches, navigation, timers)
//! - **View** (`presentation::components`): stateless rendering of the state
//!
//! ## Example Usage
//!
//! ```rust
//! use storefront::{
//!     core::msg::carousel::CarouselMsg, infrastructure::config::Config, update, AppState, Cmd,
//!     Msg,
//! };
//!
//! let mut config = Config::default();
//! config.carousel.images = vec!["/banners/a.jpg".into(), "/banners/b.jpg".into()];
//! let state = AppState::new(config);
//!
//! let (state, commands) = update(Msg::Carousel(CarouselMsg::Next), state);
//!
//! assert_eq!(state.carousel.current_index(), 1);
//! assert!(matches!(commands[0], Cmd::StartTimer { .. }));
//! ```
//!
//! ## Modules
//!
//! - [`core`] - state, messages, update and command execution
//! - [`domain`] - locations, listing queries and products
//! - [`infrastructure`] - product API, offline cache, timers, terminal, config
//! - [`integration`] - runtime and host loop
//! - [`presentation`] - components and widgets

pub mod core;
pub mod domain;
pub mod infrastructure;
pub mod integration;
pub mod presentation;
pub mod utils;

// Re-exports for convenience
pub use crate::core::{
    cmd::Cmd, msg::Msg, raw_msg::RawMsg, state::AppState, translator::translate_raw_to_domain,
    update::update,
};
pub use integration::runtime::{Runtime, RuntimeStats};

/// Result type used throughout the library
pub type Result<T> = color_eyre::eyre::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

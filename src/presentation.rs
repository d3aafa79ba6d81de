//! Presentation layer
//!
//! Stateless components, the widgets they are built from and key binding configuration.

pub mod components;
pub mod config;
pub mod widgets;

//! Infrastructure layer
//!
//! This module handles external integrations and services:
//! - TUI foundation
//! - CLI argument processing and configuration
//! - Product API, offline cache and connectivity probing
//! - Timers and navigation history used by the command executor

pub mod cache;
pub mod catalog;
pub mod cli;
pub mod config;
pub mod connectivity;
pub mod product_source;
pub mod router;
pub mod timer;
pub mod tui;

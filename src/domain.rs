//! Domain logic
//!
//! This module contains the storefront's pure domain types:
//! - Navigable locations and their query pairs
//! - The listing query and fetch request derived from a location
//! - Product records
//! - Text helpers for labels and prices

pub mod location;
pub mod product;
pub mod query;
pub mod text;

//! Reusable UI widgets
//!
//! Widgets render borrowed data and hold no state of their own.

pub mod indicator_dots;
pub mod product_card;
pub mod slide;

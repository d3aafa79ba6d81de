//! Presentation configuration (key bindings)

pub mod keybindings;

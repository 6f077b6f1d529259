pub mod keyboard;
pub mod keymap;

pub use keyboard::*;

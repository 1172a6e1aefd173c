pub mod controls;
pub mod keyboard;
pub mod pointer;

pub use controls::{wire_direction_buttons, wire_restart_buttons};
pub use keyboard::{wire_blur, wire_keyboard};
pub use pointer::{wire_input_handlers, InputWiring};

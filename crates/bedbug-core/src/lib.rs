//! Interactive core of the Bed Bug Guru site.
//!
//! Holds the page state machine, the player, the spider and the input
//! state, and resolves clicks against the active page's sprites. Nothing
//! here touches the browser, so the web frontend and host tests share it.

pub mod camera;
pub mod config;
pub mod constants;
pub mod content;
pub mod controller;
pub mod error;
pub mod input;
pub mod interaction;
pub mod movement;
pub mod page;
pub mod player;
pub mod policy;
pub mod scene;
pub mod spider;

pub use camera::*;
pub use config::*;
pub use constants::*;
pub use controller::*;
pub use error::*;
pub use input::*;
pub use interaction::*;
pub use page::*;
pub use player::*;
pub use policy::*;
pub use scene::*;
pub use spider::*;

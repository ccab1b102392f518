//! Menu and HUD models (layout and hit-testing only; drawing lives in `renderer`)

pub mod hud;
pub mod menu;

pub use hud::Hud;
pub use menu::{Menu, MenuAction, MenuButton};

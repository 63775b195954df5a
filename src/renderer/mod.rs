//! Rendering module
//!
//! Turns a `GameState` into draw calls on any `platform::Renderer`. Nothing
//! here mutates the simulation.

pub mod frame;
pub mod sprites;

pub use frame::render_frame;
pub use sprites::{ASSET_NAMES, Sprites};

use serde::{Deserialize, Serialize};

/// Opaque RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// Colors for game elements
pub mod colors {
    use super::Color;

    pub const SKY: Color = Color::rgb(100, 100, 255);
    pub const GROUND: Color = Color::rgb(0, 255, 0);
    pub const LABEL: Color = Color::rgb(255, 255, 255);
    /// Sprite tints for backends that cannot show the images themselves
    pub const DUCK: Color = Color::rgb(255, 220, 0);
    pub const COIN: Color = Color::rgb(255, 180, 0);
    pub const CACTUS: Color = Color::rgb(0, 120, 40);
}

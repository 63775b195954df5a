//! Sprite set loaded at startup

use std::path::Path;

use crate::error::SetupError;
use crate::platform::AssetLoader;
use crate::sim::ObstacleKind;

/// The three image files the game needs, in load order
pub const ASSET_NAMES: [&str; 3] = ["duck.png", "coin.png", "cactus.png"];

#[derive(Debug, Clone)]
pub struct Sprites<T> {
    pub player: T,
    pub collectible: T,
    pub hazard: T,
}

impl<T> Sprites<T> {
    /// Load every sprite from `dir`. The first failure aborts the load.
    pub fn load<L>(loader: &mut L, dir: &Path) -> Result<Self, SetupError>
    where
        L: AssetLoader<Texture = T>,
    {
        let [player, collectible, hazard] = ASSET_NAMES;
        Ok(Self {
            player: loader.load_texture(&dir.join(player))?,
            collectible: loader.load_texture(&dir.join(collectible))?,
            hazard: loader.load_texture(&dir.join(hazard))?,
        })
    }

    pub fn for_kind(&self, kind: ObstacleKind) -> &T {
        match kind {
            ObstacleKind::Collectible => &self.collectible,
            ObstacleKind::Hazard => &self.hazard,
        }
    }
}

//! Sprite frame sets and the sprite-or-shape decision
//!
//! Each entity type decides once, at load time, whether it is drawn from
//! sprite frames or from generated shapes. A sprite set is only used when
//! every one of its frames is present in the asset catalog.

use std::collections::HashSet;

use crate::sim::Player;

/// Frames per animation strip
pub const FRAMES_PER_STRIP: usize = 10;

/// Image lookup provided by the asset layer
pub trait AssetCatalog {
    fn has_image(&self, name: &str) -> bool;
}

impl AssetCatalog for HashSet<String> {
    fn has_image(&self, name: &str) -> bool {
        self.contains(name)
    }
}

/// Catalog with no images at all; everything falls back to shapes
#[derive(Debug, Default, Clone, Copy)]
pub struct NoAssets;

impl AssetCatalog for NoAssets {
    fn has_image(&self, _name: &str) -> bool {
        false
    }
}

/// An ordered list of image names forming one animation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SpriteStrip {
    pub frames: Vec<String>,
}

impl SpriteStrip {
    pub fn new(frames: Vec<String>) -> Self {
        Self { frames }
    }

    /// Frame name for an unbounded frame counter
    pub fn frame(&self, index: usize) -> &str {
        &self.frames[index % self.frames.len()]
    }

    fn is_complete(&self, catalog: &dyn AssetCatalog) -> bool {
        !self.frames.is_empty() && self.frames.iter().all(|f| catalog.has_image(f))
    }

    fn missing<'a>(&'a self, catalog: &dyn AssetCatalog) -> Option<&'a str> {
        self.frames
            .iter()
            .find(|f| !catalog.has_image(f))
            .map(String::as_str)
    }
}

/// Player animation strips, picked by movement state
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlayerStrips {
    pub idle: SpriteStrip,
    pub walk: SpriteStrip,
    pub jump: SpriteStrip,
}

impl PlayerStrips {
    pub fn standard() -> Self {
        let strip = |dir: &str, stem: &str| {
            SpriteStrip::new(
                (0..FRAMES_PER_STRIP)
                    .map(|i| format!("player/{}/{}__{:03}", dir, stem, i))
                    .collect(),
            )
        };
        Self {
            idle: strip("idle", "idle"),
            walk: strip("walk", "run"),
            jump: strip("jump", "jump"),
        }
    }

    /// Jump strip while airborne, walk while moving, idle otherwise
    pub fn select(&self, player: &Player) -> &str {
        let index = player.anim.frame() as usize;
        if !player.body.on_ground() {
            self.jump.frame(index)
        } else if player.body.vel.x != 0.0 {
            self.walk.frame(index)
        } else {
            self.idle.frame(index)
        }
    }
}

/// One-based numbered strip (`prefix_1` .. `prefix_10`)
fn numbered_strip(prefix: &str) -> SpriteStrip {
    SpriteStrip::new(
        (1..=FRAMES_PER_STRIP)
            .map(|i| format!("{}_{}", prefix, i))
            .collect(),
    )
}

pub fn enemy_strip() -> SpriteStrip {
    numbered_strip("enemies/walk")
}

pub fn coin_strip() -> SpriteStrip {
    numbered_strip("coins/gold")
}

/// How the player is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerVisual {
    Sprites(PlayerStrips),
    Shapes,
}

/// How a single-strip entity (enemy, coin) is drawn
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StripVisual {
    Sprites(SpriteStrip),
    Shapes,
}

impl PlayerVisual {
    pub fn resolve(catalog: &dyn AssetCatalog, use_sprites: bool) -> Self {
        if !use_sprites {
            return PlayerVisual::Shapes;
        }
        let strips = PlayerStrips::standard();
        let missing = [&strips.idle, &strips.walk, &strips.jump]
            .into_iter()
            .find_map(|s| s.missing(catalog).map(str::to_string));
        match missing {
            None => {
                log::info!("Player sprites loaded");
                PlayerVisual::Sprites(strips)
            }
            Some(name) => {
                log::warn!("Player sprite {} not found, using shapes", name);
                PlayerVisual::Shapes
            }
        }
    }
}

impl StripVisual {
    pub fn resolve(
        kind: &str,
        strip: SpriteStrip,
        catalog: &dyn AssetCatalog,
        use_sprites: bool,
    ) -> Self {
        if !use_sprites {
            return StripVisual::Shapes;
        }
        if strip.is_complete(catalog) {
            log::info!("{} sprites loaded", kind);
            StripVisual::Sprites(strip)
        } else {
            log::warn!(
                "{} sprite {} not found, using shapes",
                kind,
                strip.missing(catalog).unwrap_or("<none>")
            );
            StripVisual::Shapes
        }
    }
}

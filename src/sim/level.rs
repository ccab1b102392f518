//! Level layouts
//!
//! A layout is the static description a session is (re)built from: platform
//! rectangles, enemy spawns with patrol bounds, coin positions and the player
//! spawn point. The built-in layout is used unless a JSON layout is supplied.

use std::fmt;
use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::coin::Coin;
use super::enemy::Enemy;
use super::player::Player;
use super::rect::{Platform, Rect};

/// Enemy spawn point and patrol range
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EnemySpawn {
    pub x: f32,
    pub y: f32,
    pub patrol_left: f32,
    pub patrol_right: f32,
}

/// Static level description
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LevelLayout {
    pub player_spawn: Vec2,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<EnemySpawn>,
    /// Coin centers
    pub coins: Vec<Vec2>,
}

/// Errors from loading or validating a layout
#[derive(Debug)]
pub enum LayoutError {
    Io(std::io::Error),
    Parse(serde_json::Error),
    /// Enemy index whose patrol bounds are not strictly increasing
    InvalidPatrol(usize),
    /// Platform index with a non-positive width or height
    InvalidSize(usize),
    /// A layout with no coins can never be won
    Empty,
}

impl fmt::Display for LayoutError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            LayoutError::Io(e) => write!(f, "Failed to read level layout: {}", e),
            LayoutError::Parse(e) => write!(f, "Invalid level layout JSON: {}", e),
            LayoutError::InvalidPatrol(i) => {
                write!(f, "Enemy {} has patrol_left >= patrol_right", i)
            }
            LayoutError::InvalidSize(i) => write!(f, "Platform {} has a non-positive size", i),
            LayoutError::Empty => write!(f, "Level layout has no coins"),
        }
    }
}

impl std::error::Error for LayoutError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            LayoutError::Io(e) => Some(e),
            LayoutError::Parse(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LayoutError {
    fn from(e: std::io::Error) -> Self {
        LayoutError::Io(e)
    }
}

impl From<serde_json::Error> for LayoutError {
    fn from(e: serde_json::Error) -> Self {
        LayoutError::Parse(e)
    }
}

const STANDARD_PLATFORMS: [(f32, f32, f32, f32); 6] = [
    (0.0, 550.0, 800.0, 50.0), // Ground
    (150.0, 450.0, 200.0, 20.0),
    (450.0, 400.0, 200.0, 20.0),
    (200.0, 300.0, 150.0, 20.0),
    (500.0, 250.0, 180.0, 20.0),
    (300.0, 175.0, 150.0, 20.0),
];

const STANDARD_ENEMIES: [(f32, f32, f32, f32); 3] = [
    (160.0, 400.0, 150.0, 330.0),
    (460.0, 350.0, 450.0, 630.0),
    (510.0, 200.0, 500.0, 660.0),
];

const STANDARD_COINS: [(f32, f32); 6] = [
    (250.0, 420.0),
    (550.0, 370.0),
    (275.0, 270.0),
    (590.0, 220.0),
    (375.0, 150.0),
    (700.0, 500.0),
];

impl Default for LevelLayout {
    fn default() -> Self {
        Self::standard()
    }
}

impl LevelLayout {
    /// The built-in level
    pub fn standard() -> Self {
        Self {
            player_spawn: Vec2::new(100.0, 400.0),
            platforms: STANDARD_PLATFORMS
                .iter()
                .map(|&(x, y, w, h)| Rect::new(x, y, w, h))
                .collect(),
            enemies: STANDARD_ENEMIES
                .iter()
                .map(|&(x, y, patrol_left, patrol_right)| EnemySpawn {
                    x,
                    y,
                    patrol_left,
                    patrol_right,
                })
                .collect(),
            coins: STANDARD_COINS
                .iter()
                .map(|&(x, y)| Vec2::new(x, y))
                .collect(),
        }
    }

    /// Parse and validate a layout from JSON
    pub fn from_json(json: &str) -> Result<Self, LayoutError> {
        let layout: LevelLayout = serde_json::from_str(json)?;
        layout.validate()?;
        Ok(layout)
    }

    /// Read, parse and validate a layout file
    pub fn load(path: &Path) -> Result<Self, LayoutError> {
        let json = std::fs::read_to_string(path)?;
        let layout = Self::from_json(&json)?;
        log::info!(
            "Loaded level {} ({} platforms, {} enemies, {} coins)",
            path.display(),
            layout.platforms.len(),
            layout.enemies.len(),
            layout.coins.len()
        );
        Ok(layout)
    }

    pub fn validate(&self) -> Result<(), LayoutError> {
        if self.coins.is_empty() {
            return Err(LayoutError::Empty);
        }
        if let Some(i) = self
            .platforms
            .iter()
            .position(|p| p.width() <= 0.0 || p.height() <= 0.0)
        {
            return Err(LayoutError::InvalidSize(i));
        }
        if let Some(i) = self
            .enemies
            .iter()
            .position(|e| e.patrol_left >= e.patrol_right)
        {
            return Err(LayoutError::InvalidPatrol(i));
        }
        Ok(())
    }

    pub fn spawn_player(&self) -> Player {
        Player::new(self.player_spawn.x, self.player_spawn.y)
    }

    pub fn spawn_enemies(&self) -> Vec<Enemy> {
        self.enemies
            .iter()
            .map(|e| Enemy::new(e.x, e.y, e.patrol_left, e.patrol_right))
            .collect()
    }

    pub fn spawn_coins(&self) -> Vec<Coin> {
        self.coins.iter().map(|c| Coin::new(c.x, c.y)).collect()
    }
}

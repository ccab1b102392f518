//! Read-only view of a session for HUD, logging and tooling

use glam::Vec2;
use serde::Serialize;

use super::rect::Rect;
use super::state::{GamePhase, Session};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PlayerView {
    pub rect: Rect,
    pub center: Vec2,
    pub alive: bool,
    pub on_ground: bool,
    pub invincible: bool,
    pub facing_right: bool,
    pub frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EnemyView {
    pub rect: Rect,
    pub center: Vec2,
    pub facing_right: bool,
    pub frame: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CoinView {
    pub center: Vec2,
    pub radius: f32,
    pub collected: bool,
}

/// Everything the presentation layer is allowed to see
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Snapshot {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: i32,
    pub message: String,
    pub coins_remaining: usize,
    pub coins_total: usize,
    pub player: PlayerView,
    pub platforms: Vec<Rect>,
    pub enemies: Vec<EnemyView>,
    pub coins: Vec<CoinView>,
}

impl Session {
    pub fn snapshot(&self) -> Snapshot {
        let player = &self.player;
        Snapshot {
            phase: self.phase,
            score: self.score,
            lives: self.lives,
            message: self.message.clone(),
            coins_remaining: self.coins_remaining(),
            coins_total: self.coins.len(),
            player: PlayerView {
                rect: player.body.rect,
                center: player.body.rect.center(),
                alive: player.alive,
                on_ground: player.body.on_ground(),
                invincible: player.invincible,
                facing_right: player.facing_right,
                frame: player.anim.frame(),
            },
            platforms: self.platforms.clone(),
            enemies: self
                .enemies
                .iter()
                .map(|e| EnemyView {
                    rect: e.body.rect,
                    center: e.body.rect.center(),
                    facing_right: e.facing_right,
                    frame: e.anim.frame(),
                })
                .collect(),
            coins: self
                .coins
                .iter()
                .map(|c| CoinView {
                    center: c.pos,
                    radius: c.radius,
                    collected: c.collected,
                })
                .collect(),
        }
    }
}

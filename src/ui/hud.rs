//! Heads-up display model
//!
//! Turns a snapshot into the strings and positions the text/shape layer
//! draws. Nothing here touches the session directly.

use glam::Vec2;

use crate::sim::{GamePhase, Snapshot};

pub const RETURN_PROMPT: &str = "Press SPACE to return to menu";

/// Top-left anchor of the first heart; hearts step right by `HEART_SPACING`
pub const HEART_ORIGIN: Vec2 = Vec2::new(20.0, 100.0);
pub const HEART_SPACING: f32 = 35.0;

#[derive(Debug, Clone, PartialEq)]
pub struct Hud {
    pub score_text: String,
    pub coins_text: String,
    /// One anchor per remaining life
    pub hearts: Vec<Vec2>,
    /// End message and prompt, shown only on end screens
    pub banner: Option<(String, &'static str)>,
}

impl Hud {
    pub fn from_snapshot(snapshot: &Snapshot) -> Self {
        let lives = snapshot.lives.max(0) as usize;
        let hearts = (0..lives)
            .map(|i| HEART_ORIGIN + Vec2::new(i as f32 * HEART_SPACING, 0.0))
            .collect();

        let banner = match snapshot.phase {
            GamePhase::GameOver | GamePhase::Win => {
                Some((snapshot.message.clone(), RETURN_PROMPT))
            }
            GamePhase::Menu | GamePhase::Playing => None,
        };

        Self {
            score_text: format!("Score: {}", snapshot.score),
            coins_text: format!("Coins: {}/{}", snapshot.coins_remaining, snapshot.coins_total),
            hearts,
            banner,
        }
    }
}

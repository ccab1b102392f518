//! Collectible coins

use glam::Vec2;

use super::collision::within_pickup_range;
use super::player::Player;
use crate::consts::{COIN_RADIUS, COIN_SPIN_RATE};

#[derive(Debug, Clone, PartialEq)]
pub struct Coin {
    /// Center of the coin
    pub pos: Vec2,
    pub radius: f32,
    /// Once set, never cleared for the rest of the session
    pub collected: bool,
    /// Continuous spin counter; the renderer floors it to pick a frame
    pub spin: f32,
}

impl Coin {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vec2::new(x, y),
            radius: COIN_RADIUS,
            collected: false,
            spin: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.spin += dt * COIN_SPIN_RATE;
    }

    /// Collect the coin if the player's center is within reach.
    ///
    /// Returns true only on the tick the coin is collected.
    pub fn check_collision(&mut self, player: &Player) -> bool {
        if self.collected {
            return false;
        }
        if within_pickup_range(self.pos, self.radius, player.body.rect.center()) {
            self.collected = true;
            return true;
        }
        false
    }

    /// Frame index into a spin animation of `len` frames
    pub fn frame_index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.spin as usize % len
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_collects_within_reach() {
        let player = Player::new(100.0, 400.0);
        let center = player.body.rect.center();
        let mut coin = Coin::new(center.x + 15.0, center.y);
        assert!(coin.check_collision(&player));
        assert!(coin.collected);
    }

    #[test]
    fn test_out_of_reach() {
        let player = Player::new(100.0, 400.0);
        let center = player.body.rect.center();
        let mut coin = Coin::new(center.x, center.y + 32.0);
        assert!(!coin.check_collision(&player));
        assert!(!coin.collected);
    }

    #[test]
    fn test_spin_frames() {
        let mut coin = Coin::new(0.0, 0.0);
        coin.update(0.5);
        assert_eq!(coin.frame_index(10), 2);
        coin.update(2.0);
        assert_eq!(coin.frame_index(10), 2);
    }

    proptest! {
        #[test]
        fn prop_collection_is_one_shot(dx in -20.0f32..20.0, dy in -20.0f32..20.0, repeats in 1usize..10) {
            let player = Player::new(100.0, 400.0);
            let center = player.body.rect.center();
            let mut coin = Coin::new(center.x + dx, center.y + dy);
            prop_assert!(coin.check_collision(&player));
            for _ in 0..repeats {
                prop_assert!(!coin.check_collision(&player));
                prop_assert!(coin.collected);
            }
        }
    }
}

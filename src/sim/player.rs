//! The player character
//!
//! Input-driven horizontal movement, a grounded-only jump, a timed
//! invincibility window after each hit, and death by falling off the world.

use super::body::{AnimationTimer, AxisBody};
use super::rect::Platform;
use crate::consts::*;

/// The player entity
#[derive(Debug, Clone, PartialEq)]
pub struct Player {
    pub body: AxisBody,
    pub anim: AnimationTimer,
    pub alive: bool,
    pub invincible: bool,
    /// Seconds of invincibility left (only meaningful while `invincible`)
    pub invincible_timer: f32,
    pub facing_right: bool,
    /// Held-direction input flags, refreshed every tick
    pub move_left: bool,
    pub move_right: bool,
    /// Latched jump request, cleared once a jump actually starts
    pub jump_requested: bool,
}

impl Player {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            body: AxisBody::new(x, y, PLAYER_WIDTH, PLAYER_HEIGHT),
            anim: AnimationTimer::default(),
            alive: true,
            invincible: false,
            invincible_timer: 0.0,
            facing_right: true,
            move_left: false,
            move_right: false,
            jump_requested: false,
        }
    }

    /// Advance the player by one tick.
    ///
    /// Returns true if a jump started this tick so the caller can fire the
    /// jump sound.
    pub fn update(&mut self, dt: f32, platforms: &[Platform]) -> bool {
        if !self.alive {
            return false;
        }

        if self.invincible {
            self.invincible_timer -= dt;
            if self.invincible_timer <= 0.0 {
                self.invincible = false;
            }
        }

        // Right wins when both are held
        self.body.vel.x = 0.0;
        if self.move_left {
            self.body.vel.x = -PLAYER_SPEED;
            self.facing_right = false;
        }
        if self.move_right {
            self.body.vel.x = PLAYER_SPEED;
            self.facing_right = true;
        }

        let mut jumped = false;
        if self.jump_requested && self.body.on_ground() {
            self.body.vel.y = JUMP_STRENGTH;
            self.jump_requested = false;
            jumped = true;
        }

        self.body.apply_gravity();
        self.body.move_and_collide(platforms);

        if self.body.vel.x != 0.0 || !self.body.on_ground() {
            self.anim.advance(dt);
        }

        if self.body.rect.top() > SCREEN_HEIGHT + FALL_DEATH_MARGIN {
            log::info!("Player fell out of the world at x={:.1}", self.body.rect.left());
            self.alive = false;
        }

        jumped
    }

    /// Start the invincibility window unless it is already running.
    ///
    /// Returns true if the hit counted. The caller owns the life counter.
    pub fn take_damage(&mut self) -> bool {
        if self.invincible {
            return false;
        }
        self.invincible = true;
        self.invincible_timer = INVINCIBILITY_SECS;
        true
    }
}

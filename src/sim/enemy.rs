//! Patrolling enemies
//!
//! Enemies walk back and forth between two x-bounds. Direction only changes
//! when an edge of the body reaches a bound; in between, the previous
//! velocity carries over.

use super::body::{AnimationTimer, AxisBody};
use super::rect::Platform;
use crate::consts::{ENEMY_HEIGHT, ENEMY_SPEED, ENEMY_WIDTH};

#[derive(Debug, Clone, PartialEq)]
pub struct Enemy {
    pub body: AxisBody,
    pub anim: AnimationTimer,
    /// Left patrol bound (x)
    pub patrol_left: f32,
    /// Right patrol bound (x), always greater than `patrol_left`
    pub patrol_right: f32,
    pub speed: f32,
    pub facing_right: bool,
}

impl Enemy {
    /// Spawn an enemy walking right
    pub fn new(x: f32, y: f32, patrol_left: f32, patrol_right: f32) -> Self {
        debug_assert!(patrol_left < patrol_right, "patrol bounds out of order");
        let mut body = AxisBody::new(x, y, ENEMY_WIDTH, ENEMY_HEIGHT);
        body.vel.x = ENEMY_SPEED;
        Self {
            body,
            anim: AnimationTimer::default(),
            patrol_left,
            patrol_right,
            speed: ENEMY_SPEED,
            facing_right: true,
        }
    }

    /// Steer at patrol bounds, then fall and move like any body
    pub fn update(&mut self, dt: f32, platforms: &[Platform]) {
        if self.body.rect.left() <= self.patrol_left {
            self.body.vel.x = self.speed;
            self.facing_right = true;
        } else if self.body.rect.right() >= self.patrol_right {
            self.body.vel.x = -self.speed;
            self.facing_right = false;
        }

        self.body.apply_gravity();
        self.body.move_and_collide(platforms);
        self.anim.advance(dt);
    }
}

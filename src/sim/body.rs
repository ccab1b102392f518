//! Shared physics body and animation timer
//!
//! Players and enemies both embed an `AxisBody` for gravity and platform
//! collision, plus an `AnimationTimer` that the renderer turns into a frame
//! index.

use glam::Vec2;

use super::collision::{resolve_horizontal, resolve_vertical};
use super::rect::{Platform, Rect};
use crate::consts::{ANIMATION_STEP, GRAVITY, MAX_FALL_SPEED};

/// A rectangle that moves under gravity and collides with platforms
#[derive(Debug, Clone, PartialEq)]
pub struct AxisBody {
    pub rect: Rect,
    /// Velocity in pixels per tick
    pub vel: Vec2,
    /// Recomputed by every vertical collision pass
    on_ground: bool,
}

impl AxisBody {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self {
            rect: Rect::new(x, y, w, h),
            vel: Vec2::ZERO,
            on_ground: false,
        }
    }

    /// Whether the last vertical pass landed on a platform
    #[inline]
    pub fn on_ground(&self) -> bool {
        self.on_ground
    }

    /// Accelerate downward while airborne, clamped to terminal fall speed
    pub fn apply_gravity(&mut self) {
        if !self.on_ground {
            self.vel.y = (self.vel.y + GRAVITY).min(MAX_FALL_SPEED);
        }
    }

    /// Move by the current velocity, resolving x then y against `platforms`
    pub fn move_and_collide(&mut self, platforms: &[Platform]) {
        self.rect.pos.x += self.vel.x;
        resolve_horizontal(&mut self.rect, self.vel.x, platforms);

        self.rect.pos.y += self.vel.y;
        let contact = resolve_vertical(&mut self.rect, &mut self.vel.y, platforms);
        self.on_ground = contact.landed;
    }
}

/// Frame counter advanced on a fixed time step
#[derive(Debug, Clone, PartialEq)]
pub struct AnimationTimer {
    elapsed: f32,
    frame: u32,
    step: f32,
}

impl Default for AnimationTimer {
    fn default() -> Self {
        Self::new(ANIMATION_STEP)
    }
}

impl AnimationTimer {
    pub fn new(step: f32) -> Self {
        Self {
            elapsed: 0.0,
            frame: 0,
            step,
        }
    }

    /// Accumulate `dt`; bump the frame counter once per elapsed step
    pub fn advance(&mut self, dt: f32) {
        self.elapsed += dt;
        if self.elapsed >= self.step {
            self.elapsed = 0.0;
            self.frame = self.frame.wrapping_add(1);
        }
    }

    /// Raw frame counter (unbounded)
    pub fn frame(&self) -> u32 {
        self.frame
    }

    /// Frame index into an animation of `len` frames
    pub fn frame_index(&self, len: usize) -> usize {
        if len == 0 {
            0
        } else {
            self.frame as usize % len
        }
    }
}

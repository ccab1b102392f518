//! Vertex types for 2D shape rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position (screen pixels) and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }
}

/// Raw bytes of a vertex list, ready for a GPU buffer upload
pub fn as_bytes(vertices: &[Vertex]) -> &[u8] {
    bytemuck::cast_slice(vertices)
}

/// Opaque color from 8-bit channels
pub const fn rgb(r: u8, g: u8, b: u8) -> [f32; 4] {
    [r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0, 1.0]
}

/// Colors for game elements
pub mod colors {
    use super::rgb;

    pub const MENU_BACKGROUND: [f32; 4] = rgb(30, 30, 60);
    pub const SKY: [f32; 4] = rgb(135, 206, 235);
    pub const PLATFORM: [f32; 4] = rgb(100, 200, 100);
    pub const PLATFORM_EDGE: [f32; 4] = rgb(80, 180, 80);
    pub const BUTTON: [f32; 4] = rgb(80, 180, 80);
    pub const BUTTON_HOVER: [f32; 4] = rgb(100, 200, 100);
    pub const WHITE: [f32; 4] = rgb(255, 255, 255);
    pub const BLACK: [f32; 4] = rgb(0, 0, 0);
    pub const YELLOW: [f32; 4] = rgb(255, 255, 0);
    pub const MENU_STATUS: [f32; 4] = rgb(200, 200, 200);
    pub const HEART: [f32; 4] = rgb(255, 0, 0);

    pub const PLAYER_IDLE: [[f32; 4]; 2] = [rgb(100, 150, 255), rgb(120, 170, 255)];
    pub const PLAYER_WALK: [[f32; 4]; 4] = [
        rgb(100, 150, 255),
        rgb(110, 160, 255),
        rgb(120, 170, 255),
        rgb(110, 160, 255),
    ];
    pub const PLAYER_LEGS: [f32; 4] = rgb(50, 100, 200);

    pub const ENEMY_BODY: [[f32; 4]; 3] = [rgb(255, 100, 100), rgb(255, 120, 120), rgb(255, 110, 110)];
    pub const ENEMY_SPIKE: [f32; 4] = rgb(150, 50, 50);
    pub const ENEMY_MOUTH: [f32; 4] = rgb(100, 0, 0);

    pub const COIN: [f32; 4] = rgb(255, 215, 0);
    pub const COIN_SHINE: [f32; 4] = rgb(255, 255, 100);
}

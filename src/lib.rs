//! Ninja Platformer - a small 2D platformer
//!
//! Core modules:
//! - `sim`: Deterministic simulation (bodies, collisions, session state machine)
//! - `renderer`: Render adapter (sprite frames or shape fallback vertices)
//! - `audio`: Fire-and-forget sound/music triggers
//! - `ui`: Menu buttons and HUD model
//! - `app`: Fixed-step frame driver tying it all together
//! - `settings`: Startup configuration

pub mod app;
pub mod audio;
pub mod renderer;
pub mod settings;
pub mod sim;
pub mod ui;

pub use app::App;
pub use settings::Settings;

/// Game configuration constants
///
/// Velocities are in pixels per tick, timers in seconds.
pub mod consts {
    /// Fixed simulation timestep (60 Hz)
    pub const SIM_DT: f32 = 1.0 / 60.0;
    /// Maximum substeps per frame to prevent spiral of death
    pub const MAX_SUBSTEPS: u32 = 8;
    /// Largest frame delta the driver will accumulate
    pub const MAX_FRAME_DT: f32 = 0.1;

    /// Screen dimensions (y grows downward)
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Downward acceleration applied each tick while airborne
    pub const GRAVITY: f32 = 0.5;
    /// Terminal fall speed
    pub const MAX_FALL_SPEED: f32 = 15.0;
    /// Initial vertical velocity of a jump (negative is up)
    pub const JUMP_STRENGTH: f32 = -12.0;

    /// Player defaults
    pub const PLAYER_WIDTH: f32 = 40.0;
    pub const PLAYER_HEIGHT: f32 = 50.0;
    pub const PLAYER_SPEED: f32 = 4.0;
    /// Length of the post-hit invincibility window
    pub const INVINCIBILITY_SECS: f32 = 2.0;
    /// How far below the screen the player may fall before dying
    pub const FALL_DEATH_MARGIN: f32 = 100.0;

    /// Enemy defaults
    pub const ENEMY_WIDTH: f32 = 35.0;
    pub const ENEMY_HEIGHT: f32 = 40.0;
    pub const ENEMY_SPEED: f32 = 2.0;

    /// Coin defaults
    pub const COIN_RADIUS: f32 = 12.0;
    /// Approximate player half-extent added to the coin radius for pickups
    pub const PICKUP_REACH: f32 = 20.0;
    pub const COIN_SCORE: u32 = 10;
    /// Coin spin counter advance per second
    pub const COIN_SPIN_RATE: f32 = 5.0;

    /// Session defaults
    pub const STARTING_LIVES: i32 = 3;

    /// Seconds between walk/idle animation frames
    pub const ANIMATION_STEP: f32 = 0.15;
}

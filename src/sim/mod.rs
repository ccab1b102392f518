//! Deterministic simulation module
//!
//! All gameplay logic lives here. This module must stay pure:
//! - Per-tick constants, elapsed time only for timers
//! - Stable iteration order (layout order)
//! - No rendering, audio or platform dependencies

pub mod body;
pub mod coin;
pub mod collision;
pub mod enemy;
pub mod level;
pub mod player;
pub mod rect;
pub mod snapshot;
pub mod state;
pub mod tick;

pub use body::{AnimationTimer, AxisBody};
pub use coin::Coin;
pub use collision::{VerticalContact, resolve_horizontal, resolve_vertical, within_pickup_range};
pub use enemy::Enemy;
pub use level::{EnemySpawn, LayoutError, LevelLayout};
pub use player::Player;
pub use rect::{Platform, Rect};
pub use snapshot::Snapshot;
pub use state::{GameEvent, GamePhase, Session};
pub use tick::{TickInput, tick};

//! Session state and the game phase machine
//!
//! The session owns every entity and is the only thing that changes the
//! phase, score and lives. Side effects (sounds) are recorded as events and
//! drained by the frame driver.

use serde::Serialize;

use super::coin::Coin;
use super::enemy::Enemy;
use super::level::LevelLayout;
use super::player::Player;
use super::rect::Platform;
use crate::consts::STARTING_LIVES;

pub const MSG_NO_LIVES: &str = "Game Over! No lives left!";
pub const MSG_FELL: &str = "Game Over! You fell!";

/// Current phase of the game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum GamePhase {
    /// Title screen with buttons
    Menu,
    /// Active gameplay
    Playing,
    /// Player died; waiting for acknowledgement
    GameOver,
    /// Every coin collected; waiting for acknowledgement
    Win,
}

/// Something that happened during a tick that the outside world may react to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    Jump,
    CoinCollected { index: usize },
    PlayerHit { lives_left: i32 },
    Won { score: u32 },
    GameOver,
}

/// Complete session state
#[derive(Debug, Clone)]
pub struct Session {
    pub phase: GamePhase,
    pub score: u32,
    pub lives: i32,
    /// End-of-game banner, empty while playing
    pub message: String,
    /// Simulation tick counter for the current level
    pub time_ticks: u64,
    pub player: Player,
    pub platforms: Vec<Platform>,
    pub enemies: Vec<Enemy>,
    pub coins: Vec<Coin>,
    layout: LevelLayout,
    events: Vec<GameEvent>,
}

impl Session {
    /// Create a session sitting in the menu with the level already built.
    ///
    /// A layout that fails validation is replaced by the standard one.
    pub fn new(layout: LevelLayout) -> Self {
        let layout = match layout.validate() {
            Ok(()) => layout,
            Err(e) => {
                log::warn!("{} - using the standard level", e);
                LevelLayout::standard()
            }
        };
        let mut session = Self {
            phase: GamePhase::Menu,
            score: 0,
            lives: STARTING_LIVES,
            message: String::new(),
            time_ticks: 0,
            player: layout.spawn_player(),
            platforms: Vec::new(),
            enemies: Vec::new(),
            coins: Vec::new(),
            layout,
            events: Vec::new(),
        };
        session.init_level();
        session.phase = GamePhase::Menu;
        session
    }

    /// Rebuild every entity from the layout and reset counters.
    ///
    /// Does not change the phase; use [`Session::start`] to begin playing.
    pub fn init_level(&mut self) {
        self.player = self.layout.spawn_player();
        self.platforms = self.layout.platforms.clone();
        self.enemies = self.layout.spawn_enemies();
        self.coins = self.layout.spawn_coins();
        self.score = 0;
        self.lives = STARTING_LIVES;
        self.message.clear();
        self.time_ticks = 0;
        self.events.clear();
    }

    /// Reset the level and enter `Playing`
    pub fn start(&mut self) {
        self.init_level();
        self.phase = GamePhase::Playing;
        log::info!(
            "Level started: {} platforms, {} enemies, {} coins",
            self.platforms.len(),
            self.enemies.len(),
            self.coins.len()
        );
    }

    /// Acknowledge an end screen. Returns true if the phase changed.
    pub fn return_to_menu(&mut self) -> bool {
        match self.phase {
            GamePhase::GameOver | GamePhase::Win => {
                self.phase = GamePhase::Menu;
                log::info!("Returned to menu");
                true
            }
            GamePhase::Menu | GamePhase::Playing => false,
        }
    }

    pub fn layout(&self) -> &LevelLayout {
        &self.layout
    }

    pub fn coins_remaining(&self) -> usize {
        self.coins.iter().filter(|c| !c.collected).count()
    }

    pub fn all_coins_collected(&self) -> bool {
        self.coins.iter().all(|c| c.collected)
    }

    pub(crate) fn push_event(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Take the events recorded since the last drain, oldest first
    pub fn drain_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }
}

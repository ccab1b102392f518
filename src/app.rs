//! Frame driver
//!
//! Owns the session and its collaborators, translates raw input into tick
//! input and menu actions, and runs the simulation on a fixed timestep no
//! matter how irregular the caller's frame times are.

use glam::Vec2;

use crate::audio::{AudioBackend, AudioManager};
use crate::consts::{MAX_FRAME_DT, MAX_SUBSTEPS, SIM_DT};
use crate::renderer::{AssetCatalog, DrawItem, SceneRenderer};
use crate::settings::Settings;
use crate::sim::{GamePhase, LevelLayout, Session, TickInput, tick};
use crate::ui::{Menu, MenuAction};

/// Keys the game listens to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    A,
    D,
    Up,
    Space,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
}

/// Held-key state; arrows and WASD count the same
#[derive(Debug, Clone, Copy, Default)]
struct HeldKeys {
    left: bool,
    right: bool,
    a: bool,
    d: bool,
}

/// Game instance holding all state
pub struct App {
    pub session: Session,
    pub menu: Menu,
    pub settings: Settings,
    audio: AudioManager,
    renderer: SceneRenderer,
    held: HeldKeys,
    /// Jump pressed and not yet handed to a tick
    jump_pending: bool,
    mouse_pos: Vec2,
    accumulator: f32,
    running: bool,
}

impl App {
    pub fn new(
        settings: Settings,
        layout: LevelLayout,
        audio_backend: Box<dyn AudioBackend>,
        catalog: &dyn AssetCatalog,
    ) -> Self {
        let audio = AudioManager::new(audio_backend, &settings);
        let renderer = SceneRenderer::new(catalog, &settings);
        Self {
            session: Session::new(layout),
            menu: Menu::default(),
            settings,
            audio,
            renderer,
            held: HeldKeys::default(),
            jump_pending: false,
            mouse_pos: Vec2::ZERO,
            accumulator: 0.0,
            running: true,
        }
    }

    /// False once Exit has been chosen
    pub fn is_running(&self) -> bool {
        self.running
    }

    pub fn phase(&self) -> GamePhase {
        self.session.phase
    }

    pub fn audio(&self) -> &AudioManager {
        &self.audio
    }

    pub fn key_down(&mut self, key: Key) {
        self.set_held(key, true);
        match self.session.phase {
            GamePhase::Playing => {
                if matches!(key, Key::Space | Key::Up) {
                    self.jump_pending = true;
                }
            }
            GamePhase::GameOver | GamePhase::Win => {
                if key == Key::Space {
                    self.session.return_to_menu();
                }
            }
            GamePhase::Menu => {}
        }
    }

    pub fn key_up(&mut self, key: Key) {
        self.set_held(key, false);
    }

    fn set_held(&mut self, key: Key, down: bool) {
        match key {
            Key::Left => self.held.left = down,
            Key::Right => self.held.right = down,
            Key::A => self.held.a = down,
            Key::D => self.held.d = down,
            Key::Up | Key::Space | Key::Other => {}
        }
    }

    pub fn mouse_move(&mut self, pos: Vec2) {
        self.mouse_pos = pos;
    }

    /// Handle a click; only the left button drives the menu
    pub fn mouse_down(&mut self, pos: Vec2, button: MouseButton) {
        self.mouse_pos = pos;
        if button != MouseButton::Left || self.session.phase != GamePhase::Menu {
            return;
        }
        if let Some(action) = self.menu.click(pos) {
            self.apply_menu_action(action);
        }
    }

    fn apply_menu_action(&mut self, action: MenuAction) {
        match action {
            MenuAction::StartGame => {
                self.session.start();
                self.jump_pending = false;
                self.accumulator = 0.0;
                self.audio.ensure_music();
            }
            MenuAction::ToggleMusic => {
                self.settings.music_enabled = !self.settings.music_enabled;
                self.audio.set_music_enabled(self.settings.music_enabled);
                log::info!("Music {}", if self.settings.music_enabled { "on" } else { "off" });
            }
            MenuAction::ToggleSounds => {
                self.settings.sounds_enabled = !self.settings.sounds_enabled;
                self.audio.set_sounds_enabled(self.settings.sounds_enabled);
                log::info!("Sounds {}", if self.settings.sounds_enabled { "on" } else { "off" });
            }
            MenuAction::Exit => {
                log::info!("Exit requested");
                self.running = false;
            }
        }
    }

    fn tick_input(&self) -> TickInput {
        TickInput {
            move_left: self.held.left || self.held.a,
            move_right: self.held.right || self.held.d,
            jump: self.jump_pending,
        }
    }

    /// Advance by one rendered frame of `frame_dt` seconds
    pub fn update(&mut self, frame_dt: f32) {
        self.audio.ensure_music();

        if self.session.phase == GamePhase::Menu {
            self.menu.update_hover(self.mouse_pos);
            return;
        }

        self.accumulator += frame_dt.clamp(0.0, MAX_FRAME_DT);

        let mut substeps = 0;
        while self.accumulator >= SIM_DT && substeps < MAX_SUBSTEPS {
            let input = self.tick_input();
            tick(&mut self.session, &input, SIM_DT);
            self.accumulator -= SIM_DT;
            substeps += 1;

            // Clear one-shot inputs after processing
            self.jump_pending = false;
        }

        let events = self.session.drain_events();
        self.audio.handle_events(&events);

        if self.session.phase != GamePhase::Playing {
            self.accumulator = 0.0;
        }
    }

    /// Draw list for the current state
    pub fn render(&self) -> Vec<DrawItem> {
        self.renderer.render(&self.session, &self.menu, &self.settings)
    }
}

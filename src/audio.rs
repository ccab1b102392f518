//! Audio triggers
//!
//! The game only fires sounds and starts/stops background music. Playback is
//! delegated to an `AudioBackend`; any backend failure is logged and dropped
//! so it can never affect gameplay.

use std::fmt;

use crate::settings::Settings;
use crate::sim::GameEvent;

/// Background music track name
pub const MUSIC_TRACK: &str = "background";

/// Sound effect types
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundEffect {
    /// Player left the ground
    Jump,
    /// Coin picked up
    Coin,
    /// Player took damage
    Hit,
}

impl SoundEffect {
    /// Asset name the backend should play
    pub fn asset_name(&self) -> &'static str {
        match self {
            SoundEffect::Jump => "jump",
            SoundEffect::Coin => "coin",
            SoundEffect::Hit => "hit",
        }
    }

    /// Sound for a simulation event, if it has one
    pub fn for_event(event: &GameEvent) -> Option<Self> {
        match event {
            GameEvent::Jump => Some(SoundEffect::Jump),
            GameEvent::CoinCollected { .. } => Some(SoundEffect::Coin),
            GameEvent::PlayerHit { .. } => Some(SoundEffect::Hit),
            GameEvent::Won { .. } | GameEvent::GameOver => None,
        }
    }
}

/// Errors a backend may report
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AudioError {
    /// No audio device/context
    Unavailable,
    /// Sound or track not found
    MissingAsset(String),
    /// Anything else the backend wants to report
    Backend(String),
}

impl fmt::Display for AudioError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            AudioError::Unavailable => write!(f, "Audio output unavailable"),
            AudioError::MissingAsset(name) => write!(f, "Missing audio asset: {}", name),
            AudioError::Backend(msg) => write!(f, "Audio backend error: {}", msg),
        }
    }
}

impl std::error::Error for AudioError {}

/// Playback device
pub trait AudioBackend {
    fn play_sound(&mut self, name: &str, volume: f32) -> Result<(), AudioError>;
    fn play_music(&mut self, track: &str, volume: f32) -> Result<(), AudioError>;
    fn stop_music(&mut self);
}

/// Backend that plays nothing (headless runs)
#[derive(Debug, Default)]
pub struct NullBackend;

impl AudioBackend for NullBackend {
    fn play_sound(&mut self, name: &str, _volume: f32) -> Result<(), AudioError> {
        log::trace!("sound: {}", name);
        Ok(())
    }

    fn play_music(&mut self, track: &str, _volume: f32) -> Result<(), AudioError> {
        log::trace!("music: {}", track);
        Ok(())
    }

    fn stop_music(&mut self) {}
}

/// Audio manager for the game
pub struct AudioManager {
    backend: Box<dyn AudioBackend>,
    sfx_volume: f32,
    music_volume: f32,
    sounds_enabled: bool,
    music_enabled: bool,
    music_started: bool,
}

impl AudioManager {
    pub fn new(backend: Box<dyn AudioBackend>, settings: &Settings) -> Self {
        Self {
            backend,
            sfx_volume: settings.effective_sfx_volume(),
            music_volume: settings.effective_music_volume(),
            sounds_enabled: settings.sounds_enabled,
            music_enabled: settings.music_enabled,
            music_started: false,
        }
    }

    pub fn sounds_enabled(&self) -> bool {
        self.sounds_enabled
    }

    pub fn music_enabled(&self) -> bool {
        self.music_enabled
    }

    pub fn music_started(&self) -> bool {
        self.music_started
    }

    /// Play a sound effect. Returns true if the backend accepted it.
    pub fn play(&mut self, effect: SoundEffect) -> bool {
        if !self.sounds_enabled || self.sfx_volume <= 0.0 {
            return false;
        }
        match self.backend.play_sound(effect.asset_name(), self.sfx_volume) {
            Ok(()) => true,
            Err(e) => {
                log::debug!("Ignoring {:?} sound failure: {}", effect, e);
                false
            }
        }
    }

    /// Forward simulation events to their sounds
    pub fn handle_events(&mut self, events: &[GameEvent]) {
        for event in events {
            if let Some(effect) = SoundEffect::for_event(event) {
                self.play(effect);
            }
        }
    }

    /// Start background music if enabled and not yet playing.
    ///
    /// Safe to call every frame; a failed start is retried next call.
    pub fn ensure_music(&mut self) {
        if !self.music_enabled || self.music_started {
            return;
        }
        match self.backend.play_music(MUSIC_TRACK, self.music_volume) {
            Ok(()) => self.music_started = true,
            Err(e) => log::debug!("Ignoring music start failure: {}", e),
        }
    }

    pub fn set_music_enabled(&mut self, enabled: bool) {
        self.music_enabled = enabled;
        if enabled {
            self.ensure_music();
        } else {
            self.backend.stop_music();
            self.music_started = false;
        }
    }

    pub fn set_sounds_enabled(&mut self, enabled: bool) {
        self.sounds_enabled = enabled;
    }
}

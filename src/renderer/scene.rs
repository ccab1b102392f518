//! Scene pass: turns the session into an ordered list of draw items
//!
//! The pass only reads game state. Back-to-front order is background,
//! platforms, coins, enemies, player, HUD, overlay.

use glam::Vec2;

use super::shapes;
use super::sprites::{AssetCatalog, PlayerVisual, StripVisual, coin_strip, enemy_strip};
use super::vertex::{Vertex, colors};
use crate::consts::SCREEN_WIDTH;
use crate::settings::Settings;
use crate::sim::{GamePhase, Player, Session};
use crate::ui::{Hud, Menu};

pub const TITLE: &str = "SUPER NINJA MARIO SONIC COPY";

/// Text anchoring
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Anchor {
    TopLeft,
    Center,
}

/// A single thing for the drawing backend to put on screen
#[derive(Debug, Clone, PartialEq)]
pub enum DrawItem {
    /// Fill the whole screen
    Clear([f32; 4]),
    /// Triangle list
    Mesh(Vec<Vertex>),
    /// Named image centered on a point
    Sprite {
        name: String,
        center: Vec2,
        flip_x: bool,
    },
    Text {
        text: String,
        pos: Vec2,
        anchor: Anchor,
        size: f32,
        color: [f32; 4],
    },
}

impl DrawItem {
    fn text(text: impl Into<String>, pos: Vec2, anchor: Anchor, size: f32, color: [f32; 4]) -> Self {
        DrawItem::Text {
            text: text.into(),
            pos,
            anchor,
            size,
            color,
        }
    }
}

/// Scene renderer with per-entity-type visuals fixed at construction
#[derive(Debug, Clone)]
pub struct SceneRenderer {
    player: PlayerVisual,
    enemy: StripVisual,
    coin: StripVisual,
    flash_invincible: bool,
}

impl SceneRenderer {
    pub fn new(catalog: &dyn AssetCatalog, settings: &Settings) -> Self {
        let use_sprites = settings.use_sprites;
        Self {
            player: PlayerVisual::resolve(catalog, use_sprites),
            enemy: StripVisual::resolve("Enemy", enemy_strip(), catalog, use_sprites),
            coin: StripVisual::resolve("Coin", coin_strip(), catalog, use_sprites),
            flash_invincible: settings.invincibility_flash,
        }
    }

    pub fn uses_player_sprites(&self) -> bool {
        matches!(self.player, PlayerVisual::Sprites(_))
    }

    /// Build the full frame
    pub fn render(&self, session: &Session, menu: &Menu, settings: &Settings) -> Vec<DrawItem> {
        match session.phase {
            GamePhase::Menu => self.render_menu(menu, settings),
            GamePhase::Playing | GamePhase::GameOver | GamePhase::Win => self.render_level(session),
        }
    }

    fn render_menu(&self, menu: &Menu, settings: &Settings) -> Vec<DrawItem> {
        let mut items = vec![
            DrawItem::Clear(colors::MENU_BACKGROUND),
            DrawItem::text(
                TITLE,
                Vec2::new(SCREEN_WIDTH / 2.0, 100.0),
                Anchor::Center,
                60.0,
                colors::WHITE,
            ),
            DrawItem::text(
                format!(
                    "Music: {}  Sounds: {}",
                    on_off(settings.music_enabled),
                    on_off(settings.sounds_enabled)
                ),
                Vec2::new(SCREEN_WIDTH / 2.0, 520.0),
                Anchor::Center,
                25.0,
                colors::MENU_STATUS,
            ),
        ];

        for button in &menu.buttons {
            items.push(DrawItem::Mesh(shapes::button(&button.rect, button.hovered)));
            items.push(DrawItem::text(
                button.label,
                button.rect.center(),
                Anchor::Center,
                30.0,
                colors::WHITE,
            ));
        }
        items
    }

    fn render_level(&self, session: &Session) -> Vec<DrawItem> {
        let mut items = vec![DrawItem::Clear(colors::SKY)];

        let mut platforms = Vec::new();
        for platform in &session.platforms {
            platforms.extend(shapes::platform(platform));
        }
        items.push(DrawItem::Mesh(platforms));

        for coin in session.coins.iter().filter(|c| !c.collected) {
            items.push(match &self.coin {
                StripVisual::Sprites(strip) => DrawItem::Sprite {
                    name: strip.frame(coin.frame_index(strip.frames.len())).to_string(),
                    center: coin.pos,
                    flip_x: false,
                },
                StripVisual::Shapes => DrawItem::Mesh(shapes::coin(coin)),
            });
        }

        for enemy in &session.enemies {
            items.push(match &self.enemy {
                StripVisual::Sprites(strip) => DrawItem::Sprite {
                    name: strip.frame(enemy.anim.frame() as usize).to_string(),
                    center: enemy.body.rect.center(),
                    flip_x: !enemy.facing_right,
                },
                StripVisual::Shapes => DrawItem::Mesh(shapes::enemy(enemy)),
            });
        }

        let player = &session.player;
        if player.alive && !self.player_blinked_out(player) {
            items.push(match &self.player {
                PlayerVisual::Sprites(strips) => DrawItem::Sprite {
                    name: strips.select(player).to_string(),
                    center: player.body.rect.center(),
                    flip_x: !player.facing_right,
                },
                PlayerVisual::Shapes => DrawItem::Mesh(shapes::player(player)),
            });
        }

        self.push_hud(&mut items, &Hud::from_snapshot(&session.snapshot()));
        items
    }

    /// Invincible players skip every other tenth of a second
    fn player_blinked_out(&self, player: &Player) -> bool {
        self.flash_invincible
            && player.invincible
            && ((player.invincible_timer * 10.0).floor() as i64).rem_euclid(2) == 0
    }

    fn push_hud(&self, items: &mut Vec<DrawItem>, hud: &Hud) {
        items.push(DrawItem::text(
            hud.score_text.clone(),
            Vec2::new(20.0, 20.0),
            Anchor::TopLeft,
            30.0,
            colors::WHITE,
        ));
        items.push(DrawItem::text(
            hud.coins_text.clone(),
            Vec2::new(20.0, 60.0),
            Anchor::TopLeft,
            30.0,
            colors::WHITE,
        ));

        let mut hearts = Vec::new();
        for anchor in &hud.hearts {
            hearts.extend(shapes::heart(*anchor));
        }
        if !hearts.is_empty() {
            items.push(DrawItem::Mesh(hearts));
        }

        if let Some((message, prompt)) = &hud.banner {
            items.push(DrawItem::text(
                message.clone(),
                Vec2::new(SCREEN_WIDTH / 2.0, 250.0),
                Anchor::Center,
                50.0,
                colors::YELLOW,
            ));
            items.push(DrawItem::text(
                *prompt,
                Vec2::new(SCREEN_WIDTH / 2.0, 320.0),
                Anchor::Center,
                30.0,
                colors::WHITE,
            ));
        }
    }
}

fn on_off(enabled: bool) -> &'static str {
    if enabled { "ON" } else { "OFF" }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::renderer::sprites::{NoAssets, PlayerStrips};
    use crate::sim::LevelLayout;
    use std::collections::HashSet;

    fn full_catalog() -> HashSet<String> {
        let strips = PlayerStrips::standard();
        [strips.idle, strips.walk, strips.jump, enemy_strip(), coin_strip()]
            .into_iter()
            .flat_map(|s| s.frames)
            .collect()
    }

    fn sprites(items: &[DrawItem]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|i| match i {
                DrawItem::Sprite { name, .. } => Some(name.as_str()),
                _ => None,
            })
            .collect()
    }

    fn texts(items: &[DrawItem]) -> Vec<&str> {
        items
            .iter()
            .filter_map(|i| match i {
                DrawItem::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    #[test]
    fn test_menu_frame() {
        let renderer = SceneRenderer::new(&NoAssets, &Settings::default());
        let session = Session::new(LevelLayout::standard());
        let items = renderer.render(&session, &Menu::default(), &Settings::default());
        assert_eq!(items[0], DrawItem::Clear(colors::MENU_BACKGROUND));
        let texts = texts(&items);
        assert!(texts.contains(&TITLE));
        assert!(texts.contains(&"Music: ON  Sounds: ON"));
        assert!(texts.contains(&"Start Game"));
    }

    #[test]
    fn test_sprite_frame_order() {
        let settings = Settings::default();
        let renderer = SceneRenderer::new(&full_catalog(), &settings);
        assert!(renderer.uses_player_sprites());

        let mut session = Session::new(LevelLayout::standard());
        session.start();
        session.coins[0].collected = true;

        let items = renderer.render(&session, &Menu::default(), &settings);
        let names = sprites(&items);
        // 5 coins, 3 enemies, then the player last
        assert_eq!(names.len(), 9);
        assert!(names[..5].iter().all(|n| n.starts_with("coins/gold_")));
        assert!(names[5..8].iter().all(|n| n.starts_with("enemies/walk_")));
        assert_eq!(names[8], "player/jump/jump__000");
    }

    #[test]
    fn test_shape_fallback_has_no_sprites() {
        let settings = Settings::default();
        let renderer = SceneRenderer::new(&NoAssets, &settings);
        let mut session = Session::new(LevelLayout::standard());
        session.start();
        let items = renderer.render(&session, &Menu::default(), &settings);
        assert!(sprites(&items).is_empty());
        assert!(texts(&items).contains(&"Coins: 6/6"));
    }

    #[test]
    fn test_invincible_player_blinks() {
        let settings = Settings::default();
        let renderer = SceneRenderer::new(&full_catalog(), &settings);
        let mut session = Session::new(LevelLayout::standard());
        session.start();
        session.player.take_damage();

        // 2.0 s -> floor(20) is even: hidden
        let items = renderer.render(&session, &Menu::default(), &settings);
        assert!(!sprites(&items).iter().any(|n| n.starts_with("player/")));

        session.player.invincible_timer = 1.95;
        let items = renderer.render(&session, &Menu::default(), &settings);
        assert!(sprites(&items).iter().any(|n| n.starts_with("player/")));
    }

    #[test]
    fn test_end_overlay() {
        let settings = Settings::default();
        let renderer = SceneRenderer::new(&NoAssets, &settings);
        let mut session = Session::new(LevelLayout::standard());
        session.start();
        session.phase = GamePhase::Win;
        session.message = "You Won! Score: 60".to_string();
        let items = renderer.render(&session, &Menu::default(), &settings);
        let texts = texts(&items);
        assert!(texts.contains(&"You Won! Score: 60"));
        assert!(texts.contains(&crate::ui::hud::RETURN_PROMPT));
    }
}

//! Title menu buttons

use glam::Vec2;

use crate::sim::Rect;

/// What a menu button does when clicked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuAction {
    StartGame,
    ToggleMusic,
    ToggleSounds,
    Exit,
}

#[derive(Debug, Clone)]
pub struct MenuButton {
    pub rect: Rect,
    pub label: &'static str,
    pub action: MenuAction,
    pub hovered: bool,
}

impl MenuButton {
    pub fn new(x: f32, y: f32, label: &'static str, action: MenuAction) -> Self {
        Self {
            rect: Rect::new(x, y, 200.0, 50.0),
            label,
            action,
            hovered: false,
        }
    }
}

/// Vertical stack of menu buttons
#[derive(Debug, Clone)]
pub struct Menu {
    pub buttons: Vec<MenuButton>,
}

impl Default for Menu {
    fn default() -> Self {
        Self {
            buttons: vec![
                MenuButton::new(300.0, 200.0, "Start Game", MenuAction::StartGame),
                MenuButton::new(300.0, 280.0, "Toggle Music", MenuAction::ToggleMusic),
                MenuButton::new(300.0, 360.0, "Toggle Sounds", MenuAction::ToggleSounds),
                MenuButton::new(300.0, 440.0, "Exit", MenuAction::Exit),
            ],
        }
    }
}

impl Menu {
    /// Refresh hover state from the mouse position
    pub fn update_hover(&mut self, mouse: Vec2) {
        for button in &mut self.buttons {
            button.hovered = button.rect.contains_point(mouse);
        }
    }

    /// Action of the first button under `pos`
    pub fn click(&self, pos: Vec2) -> Option<MenuAction> {
        self.buttons
            .iter()
            .find(|b| b.rect.contains_point(pos))
            .map(|b| b.action)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_maps_to_action() {
        let menu = Menu::default();
        assert_eq!(menu.click(Vec2::new(400.0, 225.0)), Some(MenuAction::StartGame));
        assert_eq!(menu.click(Vec2::new(310.0, 300.0)), Some(MenuAction::ToggleMusic));
        assert_eq!(menu.click(Vec2::new(499.0, 489.0)), Some(MenuAction::Exit));
        assert_eq!(menu.click(Vec2::new(400.0, 265.0)), None);
    }

    #[test]
    fn test_hover_tracks_mouse() {
        let mut menu = Menu::default();
        menu.update_hover(Vec2::new(400.0, 380.0));
        let hovered: Vec<_> = menu.buttons.iter().filter(|b| b.hovered).map(|b| b.action).collect();
        assert_eq!(hovered, vec![MenuAction::ToggleSounds]);

        menu.update_hover(Vec2::ZERO);
        assert!(menu.buttons.iter().all(|b| !b.hovered));
    }
}

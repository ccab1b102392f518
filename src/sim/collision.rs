//! Collision detection and response against static platforms
//!
//! Movement is resolved one axis at a time: the body is displaced along x and
//! pushed out of anything it now overlaps, then displaced along y and pushed
//! out again. Resolving each axis separately means the push-out direction is
//! always known from the sign of the velocity on that axis.
//!
//! Overlaps are resolved against every platform in list order. Valid levels
//! never contain overlapping platforms, so the order only matters for
//! malformed layouts (last overlap wins).

use glam::Vec2;

use super::rect::{Platform, Rect};
use crate::consts::PICKUP_REACH;

/// Outcome of the vertical resolution pass
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VerticalContact {
    /// Body came to rest on top of a platform
    pub landed: bool,
    /// Body hit the underside of a platform while rising
    pub bumped_head: bool,
}

/// Push `rect` out of overlapping platforms along x.
///
/// `vx` is the displacement that was just applied. The body's leading edge is
/// snapped to the platform edge it ran into. Returns true if any platform was
/// hit.
pub fn resolve_horizontal(rect: &mut Rect, vx: f32, platforms: &[Platform]) -> bool {
    let mut hit = false;
    for platform in platforms {
        if !rect.overlaps(platform) {
            continue;
        }
        if vx > 0.0 {
            rect.set_right(platform.left());
            hit = true;
        } else if vx < 0.0 {
            rect.set_left(platform.right());
            hit = true;
        }
    }
    hit
}

/// Push `rect` out of overlapping platforms along y, zeroing `vy` on contact.
///
/// Once `vy` is zeroed, later overlaps in the same pass are left alone since
/// there is no direction of travel to resolve against.
pub fn resolve_vertical(rect: &mut Rect, vy: &mut f32, platforms: &[Platform]) -> VerticalContact {
    let mut contact = VerticalContact::default();
    for platform in platforms {
        if !rect.overlaps(platform) {
            continue;
        }
        if *vy > 0.0 {
            rect.set_bottom(platform.top());
            *vy = 0.0;
            contact.landed = true;
        } else if *vy < 0.0 {
            rect.set_top(platform.bottom());
            *vy = 0.0;
            contact.bumped_head = true;
        }
    }
    contact
}

/// Distance-based pickup test between a round collectible and a body center.
///
/// Uses a fixed reach instead of a true circle/rectangle test.
pub fn within_pickup_range(center: Vec2, radius: f32, target: Vec2) -> bool {
    center.distance(target) < radius + PICKUP_REACH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wall() -> Platform {
        Rect::new(200.0, 0.0, 20.0, 600.0)
    }

    #[test]
    fn test_horizontal_snap_moving_right() {
        let mut rect = Rect::new(165.0, 100.0, 40.0, 50.0);
        assert!(resolve_horizontal(&mut rect, 4.0, &[wall()]));
        assert_eq!(rect.right(), 200.0);
    }

    #[test]
    fn test_horizontal_snap_moving_left() {
        let mut rect = Rect::new(218.0, 100.0, 40.0, 50.0);
        assert!(resolve_horizontal(&mut rect, -4.0, &[wall()]));
        assert_eq!(rect.left(), 220.0);
    }

    #[test]
    fn test_horizontal_last_overlap_wins() {
        // Platforms resolve in list order; the later one gets the final snap
        let a = Rect::new(200.0, 0.0, 20.0, 600.0);
        let b = Rect::new(190.0, 0.0, 20.0, 600.0);
        let mut rect = Rect::new(165.0, 100.0, 40.0, 50.0);
        assert!(resolve_horizontal(&mut rect, 4.0, &[a, b]));
        assert_eq!(rect.right(), 190.0);
    }

    #[test]
    fn test_horizontal_no_velocity_no_push() {
        let mut rect = Rect::new(190.0, 100.0, 40.0, 50.0);
        assert!(!resolve_horizontal(&mut rect, 0.0, &[wall()]));
        assert_eq!(rect.left(), 190.0);
    }

    #[test]
    fn test_vertical_landing() {
        let floor = Rect::new(0.0, 550.0, 800.0, 50.0);
        let mut rect = Rect::new(100.0, 505.0, 40.0, 50.0);
        let mut vy = 5.0;
        let contact = resolve_vertical(&mut rect, &mut vy, &[floor]);
        assert!(contact.landed);
        assert!(!contact.bumped_head);
        assert_eq!(vy, 0.0);
        assert_eq!(rect.bottom(), 550.0);
    }

    #[test]
    fn test_vertical_head_bump() {
        let ceiling = Rect::new(0.0, 300.0, 800.0, 20.0);
        let mut rect = Rect::new(100.0, 310.0, 40.0, 50.0);
        let mut vy = -8.0;
        let contact = resolve_vertical(&mut rect, &mut vy, &[ceiling]);
        assert!(!contact.landed);
        assert!(contact.bumped_head);
        assert_eq!(vy, 0.0);
        assert_eq!(rect.top(), 320.0);
    }

    #[test]
    fn test_vertical_first_contact_stops_resolution() {
        // Second platform still overlaps after the first snap, but vy is zero by then
        let a = Rect::new(0.0, 550.0, 800.0, 50.0);
        let b = Rect::new(0.0, 540.0, 800.0, 50.0);
        let mut rect = Rect::new(100.0, 505.0, 40.0, 50.0);
        let mut vy = 5.0;
        resolve_vertical(&mut rect, &mut vy, &[a, b]);
        assert_eq!(rect.bottom(), 550.0);
    }

    #[test]
    fn test_pickup_range() {
        let coin = Vec2::new(135.0, 425.0);
        assert!(within_pickup_range(coin, 12.0, Vec2::new(120.0, 425.0)));
        assert!(!within_pickup_range(coin, 12.0, Vec2::new(103.0, 425.0)));
    }
}

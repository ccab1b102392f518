//! Shape generation for 2D primitives and the sprite-less entity looks
//!
//! Every function returns a triangle list in screen pixels.

use glam::Vec2;
use std::f32::consts::PI;

use super::vertex::{Vertex, colors};
use crate::sim::{Coin, Enemy, Player, Rect};

/// Segments used for small circles (eyes, hearts)
const SMALL_CIRCLE_SEGMENTS: u32 = 12;
/// Segments used for coins
const COIN_SEGMENTS: u32 = 24;

/// Generate vertices for a filled rectangle
pub fn rect(r: &Rect, color: [f32; 4]) -> Vec<Vertex> {
    let (l, t, rt, b) = (r.left(), r.top(), r.right(), r.bottom());
    vec![
        Vertex::new(l, t, color),
        Vertex::new(rt, t, color),
        Vertex::new(l, b, color),
        Vertex::new(l, b, color),
        Vertex::new(rt, t, color),
        Vertex::new(rt, b, color),
    ]
}

/// Generate vertices for a rectangle outline of the given thickness
pub fn rect_outline(r: &Rect, color: [f32; 4], thickness: f32) -> Vec<Vertex> {
    let t = thickness;
    let mut vertices = Vec::with_capacity(24);
    vertices.extend(rect(&Rect::new(r.left(), r.top(), r.width(), t), color));
    vertices.extend(rect(&Rect::new(r.left(), r.bottom() - t, r.width(), t), color));
    vertices.extend(rect(&Rect::new(r.left(), r.top(), t, r.height()), color));
    vertices.extend(rect(&Rect::new(r.right() - t, r.top(), t, r.height()), color));
    vertices
}

/// Generate vertices for a line segment drawn as a thin quad
pub fn line(a: Vec2, b: Vec2, color: [f32; 4], width: f32) -> Vec<Vertex> {
    let dir = (b - a).normalize_or_zero();
    let perp = Vec2::new(-dir.y, dir.x) * (width * 0.5);

    let a1 = a + perp;
    let a2 = a - perp;
    let b1 = b + perp;
    let b2 = b - perp;

    vec![
        Vertex::new(a1.x, a1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(b1.x, b1.y, color),
        Vertex::new(a2.x, a2.y, color),
        Vertex::new(b2.x, b2.y, color),
    ]
}

/// Generate vertices for a filled circle
pub fn circle(center: Vec2, radius: f32, color: [f32; 4], segments: u32) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity((segments * 3) as usize);

    for i in 0..segments {
        let theta1 = (i as f32 / segments as f32) * 2.0 * PI;
        let theta2 = ((i + 1) as f32 / segments as f32) * 2.0 * PI;

        // Triangle from center to edge
        vertices.push(Vertex::new(center.x, center.y, color));
        vertices.push(Vertex::new(
            center.x + radius * theta1.cos(),
            center.y + radius * theta1.sin(),
            color,
        ));
        vertices.push(Vertex::new(
            center.x + radius * theta2.cos(),
            center.y + radius * theta2.sin(),
            color,
        ));
    }

    vertices
}

/// Platform slab with a darker border
pub fn platform(r: &Rect) -> Vec<Vertex> {
    let mut vertices = rect(r, colors::PLATFORM);
    vertices.extend(rect_outline(r, colors::PLATFORM_EDGE, 1.0));
    vertices
}

/// Menu button, brighter while hovered
pub fn button(r: &Rect, hovered: bool) -> Vec<Vertex> {
    let fill = if hovered {
        colors::BUTTON_HOVER
    } else {
        colors::BUTTON
    };
    let mut vertices = rect(r, fill);
    vertices.extend(rect_outline(r, colors::WHITE, 1.0));
    vertices
}

/// Three-blob heart anchored at its top-left lobe
pub fn heart(anchor: Vec2) -> Vec<Vertex> {
    let mut vertices = circle(anchor, 8.0, colors::HEART, SMALL_CIRCLE_SEGMENTS);
    vertices.extend(circle(
        anchor + Vec2::new(10.0, 0.0),
        8.0,
        colors::HEART,
        SMALL_CIRCLE_SEGMENTS,
    ));
    vertices.extend(circle(
        anchor + Vec2::new(5.0, 10.0),
        10.0,
        colors::HEART,
        SMALL_CIRCLE_SEGMENTS,
    ));
    vertices
}

/// Blue block with blinking eyes and swinging legs
pub fn player(player: &Player) -> Vec<Vertex> {
    let r = &player.body.rect;
    let frame = player.anim.frame();
    let moving = player.body.vel.x != 0.0;

    let body_color = if moving {
        colors::PLAYER_WALK[frame as usize % colors::PLAYER_WALK.len()]
    } else {
        colors::PLAYER_IDLE[frame as usize % colors::PLAYER_IDLE.len()]
    };
    let mut vertices = rect(r, body_color);

    let eye_y = r.top() + 15.0;
    if frame % 20 == 0 {
        // Blink
        vertices.extend(line(
            Vec2::new(r.left() + 12.0, eye_y),
            Vec2::new(r.left() + 18.0, eye_y),
            colors::BLACK,
            1.0,
        ));
        vertices.extend(line(
            Vec2::new(r.left() + 22.0, eye_y),
            Vec2::new(r.left() + 28.0, eye_y),
            colors::BLACK,
            1.0,
        ));
    } else {
        for eye_x in [15.0, 25.0] {
            vertices.extend(circle(
                Vec2::new(r.left() + eye_x, eye_y),
                3.0,
                colors::BLACK,
                SMALL_CIRCLE_SEGMENTS,
            ));
        }
    }

    let leg_offset = if moving {
        ((frame as f32 * 3.0).sin() * 5.0).trunc()
    } else {
        0.0
    };
    let leg_top = r.bottom() - 10.0;
    vertices.extend(rect(
        &Rect::new(r.left() + 10.0, leg_top + leg_offset, 6.0, 10.0),
        colors::PLAYER_LEGS,
    ));
    vertices.extend(rect(
        &Rect::new(r.left() + 24.0, leg_top - leg_offset, 6.0, 10.0),
        colors::PLAYER_LEGS,
    ));

    vertices
}

/// Red block with bobbing spikes, shifting eyes and a chewing mouth
pub fn enemy(enemy: &Enemy) -> Vec<Vertex> {
    let r = &enemy.body.rect;
    let frame = enemy.anim.frame() as f32;

    let body_color = colors::ENEMY_BODY[enemy.anim.frame_index(colors::ENEMY_BODY.len())];
    let mut vertices = rect(r, body_color);

    let spike_offset = ((frame * 2.0).sin() * 3.0).trunc();
    for spike_x in [5.0, 15.0, 25.0] {
        vertices.extend(rect(
            &Rect::new(r.left() + spike_x, r.top() + spike_offset - 5.0, 8.0, 8.0),
            colors::ENEMY_SPIKE,
        ));
    }

    let eye_shift = (frame.sin() * 2.0).trunc();
    for eye_x in [10.0, 25.0] {
        vertices.extend(circle(
            Vec2::new(r.left() + eye_x + eye_shift, r.top() + 20.0),
            2.0,
            colors::YELLOW,
            SMALL_CIRCLE_SEGMENTS,
        ));
    }

    let mouth_y = r.top() + 28.0;
    let mouth_half = (((frame * 1.5).sin().abs() * 10.0).trunc() + 5.0) / 2.0;
    let cx = r.center().x;
    vertices.extend(line(
        Vec2::new(cx - mouth_half, mouth_y),
        Vec2::new(cx + mouth_half, mouth_y),
        colors::ENEMY_MOUTH,
        1.0,
    ));

    vertices
}

/// Gold disc with a shine band that narrows as the coin spins
pub fn coin(coin: &Coin) -> Vec<Vertex> {
    let scale = coin.spin.cos().abs();
    let width = (coin.radius * 2.0 * scale).trunc().max(2.0);

    let mut vertices = circle(coin.pos, coin.radius, colors::COIN, COIN_SEGMENTS);
    vertices.extend(rect(
        &Rect::new(
            coin.pos.x - width / 2.0,
            coin.pos.y - coin.radius,
            width,
            coin.radius * 2.0,
        ),
        colors::COIN_SHINE,
    ));
    vertices
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_covers_corners() {
        let verts = rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::WHITE);
        assert_eq!(verts.len(), 6);
        assert!(verts.iter().any(|v| v.position == [10.0, 20.0]));
        assert!(verts.iter().any(|v| v.position == [40.0, 60.0]));
    }

    #[test]
    fn test_circle_vertex_count() {
        assert_eq!(circle(Vec2::ZERO, 5.0, colors::WHITE, 16).len(), 48);
    }

    #[test]
    fn test_player_shape_stays_near_body() {
        let p = Player::new(100.0, 400.0);
        let verts = player(&p);
        assert!(!verts.is_empty());
        for v in verts {
            assert!(v.position[0] >= 99.0 && v.position[0] <= 141.0);
            assert!(v.position[1] >= 399.0 && v.position[1] <= 451.0);
        }
    }

    #[test]
    fn test_coin_shine_never_vanishes() {
        let mut c = Coin::new(50.0, 50.0);
        c.spin = PI / 2.0;
        let verts = coin(&c);
        let shine: Vec<_> = verts.iter().filter(|v| v.color == colors::COIN_SHINE).collect();
        let min_x = shine.iter().map(|v| v.position[0]).fold(f32::MAX, f32::min);
        let max_x = shine.iter().map(|v| v.position[0]).fold(f32::MIN, f32::max);
        assert_eq!(max_x - min_x, 2.0);
    }
}

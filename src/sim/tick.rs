//! Fixed timestep simulation tick
//!
//! One call advances a playing session by one step: player, then enemies,
//! then coins, then player/enemy contact, then the win and game-over checks.

use super::state::{GameEvent, GamePhase, MSG_FELL, MSG_NO_LIVES, Session};
use crate::consts::COIN_SCORE;

/// Input commands for a single tick
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TickInput {
    /// Left held (arrow or A)
    pub move_left: bool,
    /// Right held (arrow or D)
    pub move_right: bool,
    /// Jump pressed since the last tick (latched on the player until used)
    pub jump: bool,
}

/// Advance the session by one fixed timestep. No-op outside `Playing`.
pub fn tick(state: &mut Session, input: &TickInput, dt: f32) {
    if state.phase != GamePhase::Playing {
        return;
    }

    state.time_ticks += 1;

    let player = &mut state.player;
    player.move_left = input.move_left;
    player.move_right = input.move_right;
    if input.jump {
        player.jump_requested = true;
    }

    if state.player.update(dt, &state.platforms) {
        state.push_event(GameEvent::Jump);
    }

    for enemy in &mut state.enemies {
        enemy.update(dt, &state.platforms);
    }

    let mut picked = Vec::new();
    for (index, coin) in state.coins.iter_mut().enumerate() {
        coin.update(dt);
        if coin.check_collision(&state.player) {
            picked.push(index);
        }
    }
    for index in picked {
        state.score += COIN_SCORE;
        log::debug!("Coin {} collected, score {}", index, state.score);
        state.push_event(GameEvent::CoinCollected { index });
    }

    if state.player.alive {
        let hits = state
            .enemies
            .iter()
            .filter(|e| e.body.rect.overlaps(&state.player.body.rect))
            .count();
        for _ in 0..hits {
            if !state.player.take_damage() {
                continue;
            }
            state.lives -= 1;
            log::info!("Player hit, {} lives left", state.lives);
            state.push_event(GameEvent::PlayerHit {
                lives_left: state.lives,
            });
            if state.lives <= 0 {
                state.player.alive = false;
                state.message = MSG_NO_LIVES.to_string();
            }
        }
    }

    if state.player.alive && state.all_coins_collected() {
        state.phase = GamePhase::Win;
        state.message = format!("You Won! Score: {}", state.score);
        log::info!("{}", state.message);
        state.push_event(GameEvent::Won { score: state.score });
    }

    if !state.player.alive {
        state.phase = GamePhase::GameOver;
        if state.message.is_empty() {
            state.message = MSG_FELL.to_string();
        }
        log::info!("{} (score {})", state.message, state.score);
        state.push_event(GameEvent::GameOver);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use crate::sim::level::LevelLayout;

    fn playing() -> Session {
        let mut state = Session::new(LevelLayout::standard());
        state.start();
        state
    }

    /// Put the last uncollected coin on the player's center
    fn collect_all_but_last(state: &mut Session) {
        let last = state.coins.len() - 1;
        for coin in &mut state.coins[..last] {
            coin.collected = true;
        }
        state.coins[last].pos = state.player.body.rect.center();
    }

    #[test]
    fn test_tick_ignored_outside_playing() {
        let mut state = Session::new(LevelLayout::standard());
        let before = state.player.body.rect;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.player.body.rect, before);
        assert_eq!(state.time_ticks, 0);
    }

    #[test]
    fn test_coin_pickup_scores() {
        let mut state = playing();
        let center = state.player.body.rect.center();
        state.coins[0].pos = center + glam::Vec2::new(15.0, 0.0);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.coins[0].collected);
        assert_eq!(state.score, COIN_SCORE);
        assert!(
            state
                .drain_events()
                .contains(&GameEvent::CoinCollected { index: 0 })
        );

        // Already collected: never awarded twice
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.score, COIN_SCORE);
    }

    #[test]
    fn test_win_on_last_coin() {
        let mut state = playing();
        collect_all_but_last(&mut state);
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::Win);
        assert_eq!(state.message, "You Won! Score: 10");
        assert!(state.drain_events().contains(&GameEvent::Won { score: 10 }));
    }

    #[test]
    fn test_death_beats_win_on_same_tick() {
        let mut state = playing();
        state.lives = 1;
        collect_all_but_last(&mut state);
        state.enemies[0].body.rect.pos = state.player.body.rect.pos;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert!(state.all_coins_collected());
        assert_eq!(state.lives, 0);
        assert!(!state.player.alive);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, MSG_NO_LIVES);
    }

    #[test]
    fn test_invincibility_blocks_second_hit() {
        let mut state = playing();
        state.enemies[0].body.rect.pos = state.player.body.rect.pos;

        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 2);
        assert!(state.player.invincible);

        state.enemies[0].body.rect.pos = state.player.body.rect.pos;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.lives, 2);
        assert_eq!(state.phase, GamePhase::Playing);

        let hits = state
            .drain_events()
            .into_iter()
            .filter(|e| matches!(e, GameEvent::PlayerHit { .. }))
            .count();
        assert_eq!(hits, 1);
    }

    #[test]
    fn test_fall_is_game_over() {
        let mut state = playing();
        state.player.body.rect.pos = glam::Vec2::new(100.0, SCREEN_HEIGHT + FALL_DEATH_MARGIN);
        state.player.body.vel.y = MAX_FALL_SPEED;
        tick(&mut state, &TickInput::default(), SIM_DT);
        assert_eq!(state.phase, GamePhase::GameOver);
        assert_eq!(state.message, MSG_FELL);
        assert_eq!(state.lives, STARTING_LIVES);
    }

    #[test]
    fn test_jump_event_and_latch() {
        let mut state = playing();
        // Fall onto the ground first
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.player.body.on_ground() {
                break;
            }
        }
        assert!(state.player.body.on_ground());
        state.drain_events();

        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(state.player.body.vel.y, JUMP_STRENGTH);
        assert_eq!(state.drain_events(), vec![GameEvent::Jump]);
    }

    #[test]
    fn test_same_tick_event_order() {
        let mut state = playing();
        for _ in 0..120 {
            tick(&mut state, &TickInput::default(), SIM_DT);
            if state.player.body.on_ground() {
                break;
            }
        }
        assert!(state.player.body.on_ground());
        state.drain_events();

        // Coin and enemy sit where the player will be after the jump
        let pos = state.player.body.rect.pos;
        state.coins[0].pos = state.player.body.rect.center();
        state.enemies[0].body.rect.pos = pos + glam::Vec2::new(0.0, JUMP_STRENGTH);

        tick(
            &mut state,
            &TickInput {
                jump: true,
                ..Default::default()
            },
            SIM_DT,
        );
        assert_eq!(
            state.drain_events(),
            vec![
                GameEvent::Jump,
                GameEvent::CoinCollected { index: 0 },
                GameEvent::PlayerHit { lives_left: 2 },
            ]
        );
        assert_eq!(state.phase, GamePhase::Playing);
    }

    #[test]
    fn test_reinit_is_repeatable() {
        let mut state = playing();
        let fresh = state.snapshot();

        let input = TickInput {
            move_right: true,
            jump: true,
            ..Default::default()
        };
        for _ in 0..90 {
            tick(&mut state, &input, SIM_DT);
        }
        assert_ne!(state.snapshot(), fresh);

        state.start();
        let first = state.snapshot();
        state.start();
        let second = state.snapshot();
        assert_eq!(first, fresh);
        assert_eq!(second, fresh);
        assert_eq!(second.score, 0);
        assert_eq!(second.lives, 3);
    }

    #[test]
    fn test_determinism() {
        let mut a = playing();
        let mut b = playing();
        let inputs = [
            TickInput {
                move_right: true,
                ..Default::default()
            },
            TickInput {
                move_right: true,
                jump: true,
                ..Default::default()
            },
            TickInput {
                move_left: true,
                ..Default::default()
            },
        ];
        for i in 0..300 {
            let input = &inputs[i % inputs.len()];
            tick(&mut a, input, SIM_DT);
            tick(&mut b, input, SIM_DT);
        }
        assert_eq!(a.snapshot(), b.snapshot());
    }
}

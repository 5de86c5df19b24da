//! Player integration: gravity, terminal velocity, friction, movement

use super::player::Player;
use crate::tuning::Tuning;

/// Advance the player's velocity and position by one frame.
///
/// Friction is a fixed per-frame decrement, not scaled by `dt`.
pub fn integrate(player: &mut Player, tuning: &Tuning, dt: f32) {
    player.vel.y = (player.vel.y + tuning.gravity * dt).min(tuning.terminal_velocity);

    let vx = player.vel.x;
    player.vel.x = if vx > tuning.friction_snap {
        vx - tuning.friction_step
    } else if vx < -tuning.friction_snap {
        vx + tuning.friction_step
    } else {
        0.0
    };

    player.pos += player.vel * tuning.world_scale * dt;
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    #[test]
    fn test_gravity_and_terminal_velocity() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        integrate(&mut player, &tuning, 0.5);
        assert!((player.vel.y - tuning.gravity * 0.5).abs() < 1e-4);

        player.vel.y = tuning.terminal_velocity - 0.01;
        integrate(&mut player, &tuning, 1.0 / 60.0);
        assert_eq!(player.vel.y, tuning.terminal_velocity);
    }

    #[test]
    fn test_friction_decays_then_snaps() {
        let tuning = Tuning::default();
        let mut player = Player::new(&tuning);
        player.vel.x = 1.0;
        integrate(&mut player, &tuning, 1.0 / 60.0);
        assert!((player.vel.x - 0.8).abs() < 1e-5);

        player.vel.x = -0.25;
        integrate(&mut player, &tuning, 1.0 / 60.0);
        assert_eq!(player.vel.x, 0.0);
    }

    #[test]
    fn test_position_scales_by_world_units() {
        let tuning = Tuning {
            gravity: 0.0,
            ..Tuning::default()
        };
        let mut player = Player::new(&tuning);
        player.vel = Vec2::new(2.0, 0.0);
        integrate(&mut player, &tuning, 0.25);
        // Friction first: 2.0 -> 1.8, then 1.8 * 64 * 0.25
        assert!((player.pos.x - 28.8).abs() < 1e-3);
    }
}

//! Trigger dispatch
//!
//! Active triggers are scanned in generation order. Pickups and checkpoints
//! let the scan carry on; a hazard, a launcher, or a reached end stops it, so
//! at most one of those terminal effects applies per frame.

use serde::{Deserialize, Serialize};

use super::collision::circle_overlaps_rect;
use super::level::Level;
use super::player::Player;
use super::tile::TileKind;
use crate::cell_center;
use crate::tuning::Tuning;

/// Gameplay moments the audio/UI collaborators react to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    Jumped,
    CoinCollected,
    /// Enough coins collected to finish the level
    EndUnlocked,
    CheckpointReached,
    JumpBoostCollected,
    SpeedBoostCollected,
    PlayerHit,
    Launched,
    EndReached,
}

/// What the trigger scan asks the caller to do next
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TriggerOutcome {
    #[default]
    Continue,
    /// Hit a hazard and respawned with lives to spare
    Respawned,
    /// Hit a hazard with no lives left
    GameOver,
    Launched,
    /// Touched the end with enough coins
    EndReached,
}

/// Apply the effects of every active trigger the player overlaps
pub fn dispatch_triggers(
    level: &mut Level,
    player: &mut Player,
    tuning: &Tuning,
    events: &mut Vec<GameEvent>,
) -> TriggerOutcome {
    let Level {
        grid,
        triggers,
        cell_size,
        ..
    } = level;

    for trigger in triggers.iter_mut() {
        if !trigger.active || !circle_overlaps_rect(player.pos, player.radius, trigger) {
            continue;
        }

        match trigger.kind {
            TileKind::Collectible => {
                player.coins += 1;
                player.score += tuning.coin_score;
                grid.clear_cell(trigger.cell);
                trigger.active = false;
                events.push(GameEvent::CoinCollected);
                if player.coins == tuning.coin_threshold {
                    grid.flip_endpoint(trigger.cell);
                    events.push(GameEvent::EndUnlocked);
                    log::info!("End unlocked after {} coins", player.coins);
                }
            }
            TileKind::CheckpointInactive => {
                grid.activate_checkpoint(trigger.cell);
                trigger.active = false;
                events.push(GameEvent::CheckpointReached);
            }
            TileKind::JumpBoost => {
                player.start_jump_boost(tuning.boost_duration);
                grid.clear_cell(trigger.cell);
                trigger.active = false;
                events.push(GameEvent::JumpBoostCollected);
            }
            TileKind::SpeedBoost => {
                player.start_speed_boost(tuning.boost_duration);
                grid.clear_cell(trigger.cell);
                trigger.active = false;
                events.push(GameEvent::SpeedBoostCollected);
            }
            TileKind::Hazard => {
                let respawn = cell_center(grid.spawn.unwrap_or_default(), *cell_size);
                player.die(respawn);
                events.push(GameEvent::PlayerHit);
                return if player.is_dead() {
                    log::info!("Out of lives");
                    TriggerOutcome::GameOver
                } else {
                    TriggerOutcome::Respawned
                };
            }
            TileKind::Launcher => {
                player.vel.y = tuning.launch_impulse;
                events.push(GameEvent::Launched);
                return TriggerOutcome::Launched;
            }
            TileKind::End => {
                if player.coins < tuning.coin_threshold {
                    continue;
                }
                trigger.active = false;
                events.push(GameEvent::EndReached);
                return TriggerOutcome::EndReached;
            }
            TileKind::Empty
            | TileKind::Wall
            | TileKind::Slope
            | TileKind::Start
            | TileKind::CheckpointActive
            | TileKind::EndLocked => {}
        }
    }

    TriggerOutcome::Continue
}

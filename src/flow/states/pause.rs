//! Pause overlay

use crate::flow::{Flow, GameState, StateId};
use crate::platform::{FrameInput, Key};

/// Overlay pushed on top of Levels. Continue pops back into the run
/// untouched; Back pops with a request to abandon it.
#[derive(Debug, Default)]
pub struct PauseState;

impl GameState for PauseState {
    fn id(&self) -> StateId {
        StateId::Pause
    }

    fn load(&mut self, _flow: &mut Flow) {
        log::debug!("Paused");
    }

    fn unload(&mut self, _flow: &mut Flow) {
        log::debug!("Unpaused");
    }

    fn update(&mut self, flow: &mut Flow, input: &FrameInput, _dt: f32) {
        if input.pressed(Key::Pause) || input.pressed(Key::Confirm) {
            flow.pop();
        } else if input.pressed(Key::Back) {
            log::info!("Quit to main menu from pause");
            flow.vars.abandon_run = true;
            flow.pop();
        }
    }
}

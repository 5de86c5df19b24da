//! Title screen

use crate::flow::{Flow, GameState, StateId};
use crate::platform::{FrameInput, Key};

/// Title screen: Confirm starts a run, Back quits
#[derive(Debug, Default)]
pub struct MainMenuState;

impl GameState for MainMenuState {
    fn id(&self) -> StateId {
        StateId::MainMenu
    }

    fn load(&mut self, flow: &mut Flow) {
        flow.vars.hud = None;
    }

    fn unload(&mut self, _flow: &mut Flow) {}

    fn update(&mut self, flow: &mut Flow, input: &FrameInput, _dt: f32) {
        if input.pressed(Key::Confirm) {
            flow.change(StateId::Levels);
        } else if input.pressed(Key::Back) {
            log::info!("Quit requested from main menu");
            flow.request_quit();
        }
    }
}

//! Game flow
//!
//! A stack-based state machine drives which screen is active. States talk
//! to the machine only through the [`Flow`] handed to each lifecycle call.

pub mod machine;
pub mod states;
pub mod vars;

pub use machine::{Flow, GameState, StateId, StateMachine};
pub use states::{GameOverState, LevelsState, MainMenuState, PauseState};
pub use vars::{Hud, RunSummary, SharedVars};

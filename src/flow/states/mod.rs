//! The game's screens

mod game_over;
mod levels;
mod main_menu;
mod pause;

pub use game_over::GameOverState;
pub use levels::LevelsState;
pub use main_menu::MainMenuState;
pub use pause::PauseState;

//! Ring Rush entry point
//!
//! Headless host: loads settings, wires the states into the machine and
//! drives it with a scripted input feed at a fixed 60 Hz. A windowed host
//! would replace the feed with decoded device events and draw from
//! `SharedVars` after each frame.

use std::path::PathBuf;

use ring_rush::flow::{GameOverState, LevelsState, MainMenuState, PauseState, StateId, StateMachine};
use ring_rush::highscores::format_time;
use ring_rush::persistence::DirLevelSource;
use ring_rush::platform::{FrameInput, HeldKeys, InputEvent, Key};
use ring_rush::Settings;

const DT: f32 = 1.0 / 60.0;
/// Give up on the scripted run after this many frames
const MAX_FRAMES: u32 = 60 * 120;

fn main() {
    env_logger::init();
    log::info!("Ring Rush (headless) starting...");

    let settings_path = std::env::args()
        .nth(1)
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("settings.json"));
    let settings = Settings::load(&settings_path);

    let mut machine = StateMachine::new();
    machine.register(Box::new(MainMenuState));
    machine.register(Box::new(LevelsState::new(
        Box::new(DirLevelSource::new(&settings.levels_dir, settings.level_count)),
        settings.tuning.clone(),
        settings.view_size,
    )));
    machine.register(Box::new(PauseState));
    machine.register(Box::new(GameOverState::new(&settings.records_dir)));

    machine.change(StateId::MainMenu);
    let mut frame = 0;
    while !machine.is_quit() && frame < MAX_FRAMES {
        if machine.is_changed() {
            machine.advance();
            continue;
        }
        let input = scripted_input(machine.current(), frame);
        machine.update(&input, DT);
        frame += 1;
    }

    if let Some(best) = &machine.vars().best {
        log::info!(
            "High score {}, fastest time {}",
            best.high_score,
            best.fastest_time.map_or_else(|| "-".to_string(), format_time)
        );
    }
    machine.teardown();
    log::info!("Ring Rush stopped after {} frames", frame);
}

/// Autopilot: start a run, roll right hopping every second, then quit from
/// the results screen
fn scripted_input(state: Option<StateId>, frame: u32) -> FrameInput {
    match state {
        Some(StateId::MainMenu) if frame > 0 => FrameInput::press(Key::Back),
        Some(StateId::MainMenu) => FrameInput::press(Key::Confirm),
        Some(StateId::Levels) => FrameInput {
            events: if frame % 60 == 0 {
                vec![InputEvent::Pressed(Key::Jump)]
            } else {
                Vec::new()
            },
            held: HeldKeys {
                left: false,
                right: true,
            },
        },
        Some(StateId::Pause) => FrameInput::press(Key::Pause),
        Some(StateId::GameOver) => FrameInput::press(Key::Confirm),
        None => FrameInput::default(),
    }
}

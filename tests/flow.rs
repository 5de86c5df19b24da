//! End-to-end game flow: menu, levels, pause, game over

use std::fs;
use std::path::PathBuf;

use glam::Vec2;
use ring_rush::flow::{GameOverState, LevelsState, MainMenuState, PauseState, StateId, StateMachine};
use ring_rush::persistence::MemoryLevelSource;
use ring_rush::platform::{FrameInput, HeldKeys, InputEvent, Key};
use ring_rush::{BestRecords, Tuning};

const DT: f32 = 1.0 / 60.0;

// Floor with a row of coins between start and end
const CORRIDOR: &str = "\
0,0,0,0,0,0
6,3,3,3,3,7
1,1,1,1,1,1";

// Start above a spike pit with no way out
const PIT: &str = "\
0
6
4
1";

fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("ring-rush-flow-{}-{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn machine(levels: &[&str], tuning: Tuning, records: &PathBuf) -> StateMachine {
    let mut machine = StateMachine::new();
    machine.register(Box::new(MainMenuState));
    machine.register(Box::new(LevelsState::new(
        Box::new(MemoryLevelSource::new(levels.iter().copied())),
        tuning,
        Vec2::new(800.0, 600.0),
    )));
    machine.register(Box::new(PauseState));
    machine.register(Box::new(GameOverState::new(records)));
    machine.change(StateId::MainMenu);
    machine.advance();
    machine
}

fn start_run(machine: &mut StateMachine) {
    machine.update(&FrameInput::press(Key::Confirm), DT);
    assert_eq!(machine.pending(), Some(StateId::Levels));
    machine.advance();
    assert_eq!(machine.current(), Some(StateId::Levels));
}

fn roll_right() -> FrameInput {
    FrameInput {
        events: Vec::new(),
        held: HeldKeys {
            left: false,
            right: true,
        },
    }
}

/// Feed `input` until the machine asks for a change, up to `limit` frames
fn run_until_change(machine: &mut StateMachine, input: &FrameInput, limit: u32) -> bool {
    for _ in 0..limit {
        machine.update(input, DT);
        if machine.is_changed() {
            return true;
        }
    }
    false
}

#[test]
fn test_pause_resumes_the_same_run() {
    let records = scratch_dir("pause");
    let mut machine = machine(&[CORRIDOR], Tuning::default(), &records);
    start_run(&mut machine);

    for _ in 0..60 {
        machine.update(&roll_right(), DT);
    }
    let before = machine.vars().hud.clone().unwrap();
    assert!(before.coins > 0);
    let elapsed = machine.vars().elapsed;

    machine.update(&FrameInput::press(Key::Pause), DT);
    assert_eq!(machine.current(), Some(StateId::Pause));
    assert_eq!(machine.stack(), &[StateId::Levels]);

    // Time does not pass while paused
    for _ in 0..30 {
        machine.update(&FrameInput::default(), DT);
    }
    assert_eq!(machine.vars().elapsed, elapsed);

    machine.update(&FrameInput::press(Key::Pause), DT);
    assert_eq!(machine.current(), Some(StateId::Levels));
    assert!(machine.stack().is_empty());

    machine.update(&FrameInput::default(), DT);
    let after = machine.vars().hud.clone().unwrap();
    assert_eq!(after.coins, before.coins);
    assert_eq!(after.score, before.score);
    assert!(machine.vars().elapsed > elapsed);
    let _ = fs::remove_dir_all(&records);
}

#[test]
fn test_running_out_of_lives_ends_in_game_over() {
    let records = scratch_dir("death");
    let mut machine = machine(&[PIT], Tuning::default(), &records);
    start_run(&mut machine);

    assert!(run_until_change(&mut machine, &FrameInput::default(), 1200));
    assert_eq!(machine.pending(), Some(StateId::GameOver));

    let summary = machine.vars().summary.clone().unwrap();
    assert!(!summary.completed);
    assert_eq!(summary.lives, -1);
    assert_eq!(summary.level_reached, 1);

    machine.advance();
    assert_eq!(machine.current(), Some(StateId::GameOver));
    let best = machine.vars().best.clone().unwrap();
    assert_eq!(best.fastest_time, None);

    machine.update(&FrameInput::press(Key::Confirm), DT);
    machine.advance();
    assert_eq!(machine.current(), Some(StateId::MainMenu));
    let _ = fs::remove_dir_all(&records);
}

#[test]
fn test_finishing_every_level_records_a_time() {
    let records = scratch_dir("complete");
    let tuning = Tuning {
        coin_threshold: 1,
        ..Tuning::default()
    };
    let short = "\
0,0,0,0
6,3,7,0
1,1,1,1";
    let mut machine = machine(&[short, short], tuning, &records);
    start_run(&mut machine);

    assert!(run_until_change(&mut machine, &roll_right(), 600));
    assert_eq!(machine.pending(), Some(StateId::GameOver));

    let summary = machine.vars().summary.clone().unwrap();
    assert!(summary.completed);
    assert_eq!(summary.level_reached, 2);
    assert_eq!(summary.levels_cleared(), 2);
    assert_eq!(summary.score, 4);

    machine.advance();
    let saved = BestRecords::load(&records);
    assert_eq!(saved.high_score, 4);
    assert!(saved.fastest_time.is_some());
    let _ = fs::remove_dir_all(&records);
}

#[test]
fn test_skip_level_advances_and_back_abandons() {
    let records = scratch_dir("skip");
    let mut machine = machine(&[CORRIDOR, CORRIDOR], Tuning::default(), &records);
    start_run(&mut machine);

    machine.update(&FrameInput::default(), DT);
    assert_eq!(machine.vars().hud.as_ref().unwrap().label, "Level 1 - 1");

    machine.update(&FrameInput::press(Key::SkipLevel), DT);
    machine.update(&FrameInput::default(), DT);
    assert_eq!(machine.vars().hud.as_ref().unwrap().label, "Level 1 - 2");

    machine.update(&FrameInput::press(Key::Back), DT);
    assert_eq!(machine.pending(), Some(StateId::MainMenu));
    assert!(machine.vars().hud.is_none());
    machine.advance();

    // A fresh run starts from level 1 again
    start_run(&mut machine);
    machine.update(&FrameInput::default(), DT);
    assert_eq!(machine.vars().hud.as_ref().unwrap().label, "Level 1 - 1");
    assert!(machine.vars().elapsed < 0.1);
    let _ = fs::remove_dir_all(&records);
}

#[test]
fn test_quit_to_menu_from_pause() {
    let records = scratch_dir("pause-quit");
    let mut machine = machine(&[CORRIDOR, CORRIDOR], Tuning::default(), &records);
    start_run(&mut machine);
    machine.update(&FrameInput::press(Key::SkipLevel), DT);
    for _ in 0..30 {
        machine.update(&roll_right(), DT);
    }

    machine.update(&FrameInput::press(Key::Pause), DT);
    assert_eq!(machine.current(), Some(StateId::Pause));

    machine.update(&FrameInput::press(Key::Back), DT);
    assert_eq!(machine.current(), Some(StateId::Levels));
    assert!(machine.stack().is_empty());
    assert_eq!(machine.pending(), Some(StateId::MainMenu));
    assert!(machine.vars().hud.is_none());
    assert!(!machine.vars().abandon_run);

    machine.advance();
    assert_eq!(machine.current(), Some(StateId::MainMenu));

    // Nothing of the abandoned run carries over
    start_run(&mut machine);
    machine.update(&FrameInput::default(), DT);
    let hud = machine.vars().hud.clone().unwrap();
    assert_eq!(hud.label, "Level 1 - 1");
    assert_eq!(hud.coins, 0);
    assert_eq!(hud.score, 0);
    assert_eq!(hud.lives, Tuning::default().starting_lives);
    let _ = fs::remove_dir_all(&records);
}

#[test]
fn test_unloadable_level_returns_to_menu() {
    let records = scratch_dir("broken");
    let mut machine = machine(&["6,x"], Tuning::default(), &records);
    machine.update(&FrameInput::press(Key::Confirm), DT);
    machine.advance();
    assert_eq!(machine.current(), Some(StateId::Levels));
    assert_eq!(machine.pending(), Some(StateId::MainMenu));
    machine.advance();
    assert_eq!(machine.current(), Some(StateId::MainMenu));
    let _ = fs::remove_dir_all(&records);
}

#[test]
fn test_quit_from_menu_and_teardown() {
    let records = scratch_dir("quit");
    let mut machine = machine(&[CORRIDOR], Tuning::default(), &records);
    machine.update(
        &FrameInput {
            events: vec![InputEvent::Pressed(Key::Back)],
            held: HeldKeys::default(),
        },
        DT,
    );
    assert!(machine.is_quit());
    machine.advance();
    assert_eq!(machine.current(), None);
    machine.teardown();
    assert!(machine.stack().is_empty());
    let _ = fs::remove_dir_all(&records);
}

//! Game loop and frame scheduler integration.

use blockfall::{Command, FrameScheduler, Game, GameConfig, GameLoop, GameStatus, ManualScheduler};

fn idle_loop() -> GameLoop<ManualScheduler> {
    GameLoop::new(Game::new(&GameConfig::seeded(11)), ManualScheduler::new())
}

fn piece_y(game_loop: &GameLoop<ManualScheduler>) -> Option<i32> {
    game_loop.game().current_piece().map(|p| p.y)
}

#[test]
fn scheduler_idle_until_start() {
    let mut game_loop = idle_loop();
    assert!(!game_loop.scheduler().is_running());

    game_loop.scheduler_mut().push_frame(0);
    assert!(!game_loop.pump());

    game_loop.dispatch(Command::Start);
    assert!(game_loop.scheduler().is_running());
}

#[test]
fn frames_drive_gravity_by_elapsed_time() {
    let mut game_loop = idle_loop();
    game_loop.dispatch(Command::Start);
    let start_y = piece_y(&game_loop);

    // Irregular cadence: only elapsed time matters
    for now in [0, 3, 250, 251, 999] {
        game_loop.scheduler_mut().push_frame(now);
    }
    while game_loop.pump() {}
    assert_eq!(piece_y(&game_loop), start_y);

    game_loop.scheduler_mut().push_frame(1000);
    assert!(game_loop.pump());
    assert_eq!(piece_y(&game_loop), start_y.map(|y| y + 1));
}

#[test]
fn pause_cancels_pending_frames() {
    let mut game_loop = idle_loop();
    game_loop.dispatch(Command::Start);
    game_loop.scheduler_mut().push_frame(0);
    game_loop.pump();
    let y = piece_y(&game_loop);

    game_loop.scheduler_mut().push_frame(5000);
    game_loop.dispatch(Command::TogglePause);
    assert_eq!(game_loop.game().status(), GameStatus::Paused);
    assert!(!game_loop.scheduler().is_running());
    assert_eq!(game_loop.scheduler().pending(), 0);
    assert!(!game_loop.pump());
    assert_eq!(piece_y(&game_loop), y);

    game_loop.dispatch(Command::TogglePause);
    assert!(game_loop.scheduler().is_running());
}

#[test]
fn game_over_stops_the_scheduler() {
    let mut game_loop = idle_loop();
    game_loop.dispatch(Command::Start);

    // Stack pieces until a spawn fails
    let mut guard = 0;
    while game_loop.game().status() == GameStatus::Playing && guard < 500 {
        game_loop.dispatch(Command::HardDrop);
        guard += 1;
    }

    assert_eq!(game_loop.game().status(), GameStatus::GameOver);
    assert!(!game_loop.scheduler().is_running());
    game_loop.scheduler_mut().push_frame(99_999);
    assert!(!game_loop.pump());

    game_loop.dispatch(Command::Start);
    assert!(game_loop.scheduler().is_running());
    assert_eq!(game_loop.game().score(), 0);
}

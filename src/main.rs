use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    io::stdout,
    time::Duration,
};

mod input;
mod ui;

use blockfall::config::Cli;
use blockfall::constants::FRAME_PERIOD;
use blockfall::{ClockScheduler, Game, GameConfig, GameEvent, GameLoop};
use input::command_for_key;
use ui::ui;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = GameConfig::from(&cli);

    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run(&mut terminal, &config);

    // Cleanup, even when the loop failed
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

fn run<B: Backend>(terminal: &mut Terminal<B>, config: &GameConfig) -> Result<()> {
    let mut game_loop = GameLoop::new(Game::new(config), ClockScheduler::new());
    let mut message: Option<String> = None;

    loop {
        terminal.draw(|f| ui(f, game_loop.game(), message.as_deref()))?;

        // The poll timeout paces the frames
        if event::poll(Duration::from_millis(FRAME_PERIOD))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                if kind == KeyEventKind::Press && matches!(code, KeyCode::Char('q') | KeyCode::Char('Q')) {
                    break;
                }
                if let Some(command) = command_for_key(code, kind) {
                    game_loop.dispatch(command);
                }
            }
        }

        game_loop.pump();

        for event in game_loop.take_events() {
            match event {
                GameEvent::Started => message = None,
                GameEvent::LinesCleared(4) => message = Some("Four lines!".to_string()),
                GameEvent::LinesCleared(n) => message = Some(format!("{} line(s)", n)),
                GameEvent::LevelUp(level) => message = Some(format!("Level {}!", level)),
                _ => {}
            }
        }
    }

    Ok(())
}

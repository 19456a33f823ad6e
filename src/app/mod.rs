use std::io::{IsTerminal, Stdout, stdout};
use std::time::{Duration, Instant};

use crossterm::event::{self, Event, KeyCode, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use tracing::info;

use crate::config::Settings;
use crate::error::{Error, Result};
use crate::game::{Game, RandomSource};
use crate::ui::{ViewOptions, draw_game};

type Term = Terminal<CrosstermBackend<Stdout>>;

const INPUT_POLL: Duration = Duration::from_millis(50);

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

pub fn run(settings: &Settings) -> Result<()> {
    if !stdout().is_terminal() {
        return Err(Error::terminal("stdout is not a terminal"));
    }

    let source = match settings.game.seed {
        Some(seed) => RandomSource::seeded(seed),
        None => RandomSource::from_entropy(),
    };
    let mut game = Game::new(source);
    info!(
        tick_ms = settings.game.tick_ms,
        seed = ?settings.game.seed,
        "starting"
    );

    let view = ViewOptions {
        show_ghost: settings.ui.show_ghost,
    };
    let tick = Duration::from_millis(settings.game.tick_ms);

    let mut tui = TuiGuard::new()?;
    let result = run_loop(tui.terminal_mut(), &mut game, &view, tick);
    info!(score = game.score(), lines = game.lines_cleared(), "exiting");
    result
}

fn run_loop(terminal: &mut Term, game: &mut Game, view: &ViewOptions, tick: Duration) -> Result<()> {
    let mut last_tick = Instant::now();

    loop {
        terminal.draw(|frame| draw_game(frame, &*game, view))?;

        let timeout = tick.saturating_sub(last_tick.elapsed()).min(INPUT_POLL);
        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press && handle_input(key.code, game) == Flow::Quit {
                    break;
                }
            }
        }

        if last_tick.elapsed() >= tick {
            game.tick();
            last_tick = Instant::now();
        }
    }
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode()?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(self.terminal.backend_mut(), LeaveAlternateScreen);
        let _ = self.terminal.show_cursor();
    }
}

/// Maps a key press onto an engine command.
pub fn handle_input(code: KeyCode, game: &mut Game) -> Flow {
    match code {
        KeyCode::Char('q') | KeyCode::Esc => return Flow::Quit,
        KeyCode::Left | KeyCode::Char('h') => {
            let _ = game.move_left();
        }
        KeyCode::Right | KeyCode::Char('l') => {
            let _ = game.move_right();
        }
        KeyCode::Down | KeyCode::Char('j') => game.move_down(),
        KeyCode::Up | KeyCode::Char('k') => {
            let _ = game.rotate();
        }
        KeyCode::Char(' ') => game.hard_drop(),
        KeyCode::Char('r') => game.reset(),
        _ => {}
    }
    Flow::Continue
}

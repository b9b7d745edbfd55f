use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use instant::Instant;

use crate::config::Tuning;
use crate::debug::timer::TimedSystems;
use crate::debug::FrameStats;
use crate::ecs::components::Dir;
use crate::ecs::systems::EcsSystems;
use crate::error::GameError;
use crate::game::{Game, SimulationState};
use crate::render::sprites::SpriteSheet;
use crate::render::term::Terminal;
use crate::render::{self, Canvas};

/// Max accumulated time before we clamp (prevents spiral of death).
const MAX_ACCUMULATOR: f64 = 0.25;
/// Seconds per presented frame.
const FRAME_TIME: f64 = 1.0 / 30.0;

/// What a key press asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Steer(Dir),
    Restart,
    ToggleStats,
    Quit,
}

/// Map a terminal key event. Releases and repeats of non-steering keys are
/// dropped.
pub fn map_key(key: KeyEvent) -> Option<Command> {
    if key.kind == KeyEventKind::Release {
        return None;
    }
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(Command::Quit);
    }
    let command = match key.code {
        KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Command::Steer(Dir::Up),
        KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Command::Steer(Dir::Left),
        KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Command::Steer(Dir::Down),
        KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Command::Steer(Dir::Right),
        _ if key.kind == KeyEventKind::Repeat => return None,
        KeyCode::Char('r') | KeyCode::Char('R') => Command::Restart,
        KeyCode::Tab | KeyCode::F(12) => Command::ToggleStats,
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Command::Quit,
        _ => return None,
    };
    Some(command)
}

/// Top-level application state.
struct App {
    tuning: Tuning,
    sheet: SpriteSheet,
    game: Game,
    systems: TimedSystems<EcsSystems>,

    // Fixed timestep
    tick_rate: f64,
    last_frame_time: Instant,
    accumulator: f64,

    /// Presented frames; drives animation only.
    frame: u64,
    frame_stats: FrameStats,
    canvas: Canvas,
    quit: bool,
}

impl App {
    fn new(tuning: Tuning) -> Result<Self, GameError> {
        let sheet = SpriteSheet::builtin();
        let game = Game::new(&sheet, &tuning)?;
        let canvas = Canvas::for_game(&game);
        let tick_rate = 1.0 / tuning.ticks_per_second.max(0.1);
        Ok(Self {
            tuning,
            sheet,
            game,
            systems: TimedSystems::new(EcsSystems),
            tick_rate,
            last_frame_time: Instant::now(),
            accumulator: 0.0,
            frame: 0,
            frame_stats: FrameStats::new(),
            canvas,
            quit: false,
        })
    }

    fn handle(&mut self, command: Command) -> Result<(), GameError> {
        match command {
            Command::Steer(dir) => self.game.input(dir),
            Command::Restart if self.game.state() != SimulationState::Playing => {
                log::info!(
                    "Restarting after {} ticks, score {}",
                    self.game.ticks_played(),
                    self.game.score()
                );
                self.game = Game::new(&self.sheet, &self.tuning)?;
                self.accumulator = 0.0;
            }
            Command::Restart => {}
            Command::ToggleStats => self.frame_stats.toggle(),
            Command::Quit => {
                log::info!("Quit requested");
                self.quit = true;
            }
        }
        Ok(())
    }

    /// Drain pending input, waiting at most `timeout` for the first event.
    fn poll_input(&mut self, timeout: Duration) -> Result<(), GameError> {
        let mut wait = timeout;
        while event::poll(wait)? {
            if let Event::Key(key) = event::read()? {
                if let Some(command) = map_key(key) {
                    self.handle(command)?;
                }
            }
            wait = Duration::ZERO;
        }
        Ok(())
    }

    /// Run fixed-timestep simulation ticks.
    fn run_fixed_update(&mut self, dt: f64) {
        self.accumulator = (self.accumulator + dt).min(MAX_ACCUMULATOR.max(self.tick_rate));

        while self.accumulator >= self.tick_rate {
            self.game.step(&mut self.systems);
            self.accumulator -= self.tick_rate;
        }
    }

    fn render(&mut self, term: &mut Terminal) -> Result<(), GameError> {
        render::draw(&self.game, &self.sheet, self.frame, &mut self.canvas);
        let status = self
            .frame_stats
            .visible
            .then(|| self.frame_stats.line(&self.systems.timers));
        term.present(&self.canvas, status.as_deref())?;
        self.frame += 1;
        Ok(())
    }
}

/// Entry point: set up the terminal and run until quit.
pub fn run(tuning: Tuning) -> Result<(), GameError> {
    let mut app = App::new(tuning)?;
    log::info!(
        "Running at {} ticks/s (scatter {}, chase {}, scared {})",
        app.tuning.ticks_per_second,
        app.tuning.scatter_ticks,
        app.tuning.chase_ticks,
        app.tuning.scared_ticks,
    );
    let mut term = Terminal::new()?;

    while !app.quit {
        app.poll_input(Duration::from_secs_f64(FRAME_TIME))?;

        let now = Instant::now();
        let dt = now.duration_since(app.last_frame_time).as_secs_f64();
        app.last_frame_time = now;
        app.frame_stats.record_frame(dt, &app.systems.timers);

        app.run_fixed_update(dt);
        app.render(&mut term)?;
    }
    Ok(())
}

use std::error::Error;
use std::io::{self, Stdout, Write};
use std::thread;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use crossterm::style::{Color, Print, ResetColor, SetForegroundColor};
use crossterm::terminal::{self, ClearType, EnterAlternateScreen, LeaveAlternateScreen};
use crossterm::{cursor, execute, queue};
use log::{debug, info};
use rand::rngs::StdRng;
use tricky_circles::{solve, Action, Level, Rating, MAX_LEN, MIN_LEN};

const REPLAY_DELAY: Duration = Duration::from_millis(500);

/// Runs the interactive game until the player quits. The terminal is put
/// back the way it was even if the game fails.
pub fn run(length: usize, rng: StdRng) -> Result<(), Box<dyn Error>> {
    terminal::enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, cursor::Hide)?;

    let res = Game::new(length, rng).and_then(|mut game| game.run(&mut stdout));

    let _ = execute!(stdout, cursor::Show, LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    res
}

struct Game {
    level: Level,
    length: usize,
    minimum: usize,
    rng: StdRng,
    auto_solved: bool,
    rating: Option<Rating>,
    message: Option<String>,
    should_quit: bool,
    needs_redraw: bool,
}

impl Game {
    fn new(length: usize, mut rng: StdRng) -> Result<Self, Box<dyn Error>> {
        let level = Level::random(length, &mut rng)?;
        let minimum = solve(level.begin())?.distance;

        Ok(Self {
            level,
            length,
            minimum,
            rng,
            auto_solved: false,
            rating: None,
            message: None,
            should_quit: false,
            needs_redraw: true,
        })
    }

    fn run(&mut self, out: &mut Stdout) -> Result<(), Box<dyn Error>> {
        loop {
            if self.needs_redraw {
                self.draw(out)?;
                self.needs_redraw = false;
            }

            if self.should_quit {
                break;
            }

            if event::poll(Duration::from_millis(100))? {
                match event::read()? {
                    Event::Key(key) => self.handle_key(key, out)?,
                    Event::Resize(_, _) => self.needs_redraw = true,
                    _ => {}
                }
            }
        }
        Ok(())
    }

    fn handle_key(&mut self, key: KeyEvent, out: &mut Stdout) -> Result<(), Box<dyn Error>> {
        if key.kind != KeyEventKind::Press {
            return Ok(());
        }
        self.message = None;
        self.needs_redraw = true;

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,
            KeyCode::Char(c @ ('a' | 'b' | 'x')) => {
                if self.rating.is_some() {
                    self.message = Some("Press 'n' for a new level or 'r' to retry.".to_string());
                } else {
                    self.apply(Action::from_letter(c)?);
                }
            }
            KeyCode::Char('s') if self.rating.is_none() => self.auto_solve(out)?,
            KeyCode::Char('r') => {
                info!("Retry level");
                self.level.reset();
                self.rating = None;
                self.auto_solved = false;
            }
            KeyCode::Char('n') => self.deal(self.length)?,
            KeyCode::Char('+') if self.length < MAX_LEN => self.deal(self.length + 1)?,
            KeyCode::Char('-') if self.length > MIN_LEN => self.deal(self.length - 1)?,
            KeyCode::Char('+') | KeyCode::Char('-') => {
                self.message = Some(format!("Levels have {} to {} circles.", MIN_LEN, MAX_LEN));
            }
            _ => {}
        }
        Ok(())
    }

    fn apply(&mut self, action: Action) {
        self.level.apply(action);
        debug!("{} pressed, move {}", action, self.level.moves());

        if self.level.is_solved() {
            let rating = Rating::new(self.level.moves(), self.minimum, self.auto_solved);
            info!("Level solved: {:?}", rating);
            self.rating = Some(rating);
        }
    }

    /// Replays the solver's answer from the current arrangement one move at
    /// a time.
    fn auto_solve(&mut self, out: &mut Stdout) -> Result<(), Box<dyn Error>> {
        info!("Show solution");
        let solution = solve(self.level.current())?;
        self.auto_solved = true;

        for action in solution.actions {
            self.apply(action);
            self.draw(out)?;
            thread::sleep(REPLAY_DELAY);
        }
        Ok(())
    }

    fn deal(&mut self, length: usize) -> Result<(), Box<dyn Error>> {
        info!("New level with {} circles", length);
        self.level = Level::random(length, &mut self.rng)?;
        self.minimum = solve(self.level.begin())?.distance;
        self.length = length;
        self.auto_solved = false;
        self.rating = None;
        Ok(())
    }

    fn draw(&self, out: &mut Stdout) -> io::Result<()> {
        queue!(
            out,
            terminal::Clear(ClearType::All),
            cursor::MoveTo(2, 1),
            Print(format!("Tricky Circles  [{} circles]", self.level.len())),
            cursor::MoveTo(2, 3),
        )?;

        for &symbol in self.level.current().symbols() {
            let (r, g, b) = self.level.color_of(symbol).unwrap_or((255, 255, 255));
            queue!(
                out,
                SetForegroundColor(Color::Rgb { r, g, b }),
                Print(format!("\u{25cf}{} ", symbol)),
            )?;
        }

        queue!(
            out,
            ResetColor,
            cursor::MoveTo(2, 5),
            Print(format!("Moves: {} ({})", self.level.moves(), self.minimum)),
            cursor::MoveTo(2, 7),
            Print("a: swap first two   b: swap last two   x: rotate middle"),
            cursor::MoveTo(2, 8),
            Print("s: solve   r: reset   n: new level   +/-: circles   q: quit"),
        )?;

        if let Some(rating) = self.rating {
            queue!(
                out,
                cursor::MoveTo(2, 10),
                SetForegroundColor(Color::Yellow),
                Print(rating.message()),
                ResetColor,
            )?;
        }
        if let Some(message) = &self.message {
            queue!(out, cursor::MoveTo(2, 11), Print(message))?;
        }

        out.flush()
    }
}

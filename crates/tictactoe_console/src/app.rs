//! The console loop: reads commands, drives the game session and prints
//! whatever the session observers rendered.

use crate::command::{Command, HELP};
use crate::config::ConsoleConfig;
use crate::render;
use std::cell::RefCell;
use std::io::{BufRead, Write};
use std::rc::Rc;
use tictactoe_timeline::{GameEvent, GameSession, GameState, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// Whether the loop keeps reading.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    /// Read the next command.
    Continue,
    /// Stop reading.
    Quit,
}

/// Console front end for one game session.
#[derive(Debug)]
pub struct Console {
    session: GameSession,
    frames: Rc<RefCell<Vec<String>>>,
    config: ConsoleConfig,
}

impl Console {
    /// Creates a console and registers its redraw observer.
    #[instrument(skip(config))]
    pub fn new(config: ConsoleConfig) -> Self {
        let frames = Rc::new(RefCell::new(Vec::new()));
        let mut session = GameSession::new();

        let sink = Rc::clone(&frames);
        let show_board = *config.show_board();
        let show_history = *config.show_history();
        session.subscribe(move |event: &GameEvent, state: &GameState| {
            debug!(?event, "Redrawing");
            let mut frame = Vec::new();
            if show_board {
                frame.push(render::board(state));
            }
            if show_history {
                frame.push(render::history(state));
            }
            if !frame.is_empty() {
                sink.borrow_mut().push(frame.join("\n\n"));
            }
        });

        Self {
            session,
            frames,
            config,
        }
    }

    /// Returns the game state.
    pub fn state(&self) -> &GameState {
        self.session.state()
    }

    /// Executes one command line and writes its output.
    #[instrument(skip(self, out))]
    pub fn handle_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        let command = match line.parse::<Command>() {
            Ok(command) => command,
            Err(err) => {
                warn!(%err, "Rejected command");
                writeln!(out, "error: {}", err)?;
                return Ok(Flow::Continue);
            }
        };

        match command {
            Command::Play(position) => match self.session.apply_move(position.to_index())? {
                MoveOutcome::Applied(mov) => info!(%mov, "Played"),
                MoveOutcome::Ignored(reason) => writeln!(out, "ignored: {}", reason)?,
            },
            Command::Jump(step) => {
                if let Err(err) = self.session.jump_to(step) {
                    writeln!(out, "error: {}", err.kind())?;
                }
            }
            Command::Board => writeln!(out, "{}", render::board(self.state()))?,
            Command::History => writeln!(out, "{}", render::history(self.state()))?,
            Command::Json => writeln!(out, "{}", serde_json::to_string_pretty(self.state())?)?,
            Command::Restart => self.session.reset(),
            Command::Help => writeln!(out, "{}", HELP)?,
            Command::Quit => return Ok(Flow::Quit),
        }

        self.flush_frames(out)?;
        Ok(Flow::Continue)
    }

    /// Reads commands until end of input or `quit`.
    ///
    /// The prompt is printed only when `interactive` is set.
    #[instrument(skip_all, fields(interactive = interactive))]
    pub fn run(
        &mut self,
        mut input: impl BufRead,
        out: &mut impl Write,
        interactive: bool,
    ) -> anyhow::Result<()> {
        writeln!(out, "{}", render::board(self.state()))?;
        if interactive {
            write!(out, "{}", self.config.prompt())?;
            out.flush()?;
        }

        let mut buf = Vec::new();
        loop {
            buf.clear();
            if input.read_until(b'\n', &mut buf)? == 0 {
                break;
            }
            let flow = match std::str::from_utf8(&buf) {
                Ok(line) => self.handle_raw_line(line, out)?,
                Err(err) => {
                    warn!(%err, "Rejected non UTF-8 input line");
                    writeln!(out, "error: input line is not valid UTF-8 ({})", err)?;
                    Flow::Continue
                }
            };
            if flow == Flow::Quit {
                break;
            }
            if interactive {
                write!(out, "{}", self.config.prompt())?;
                out.flush()?;
            }
        }

        info!(steps = self.state().history().len(), "Session ended");
        Ok(())
    }

    /// Skips blank and `#` comment lines, otherwise executes the line.
    #[instrument(skip(self, out))]
    fn handle_raw_line(&mut self, line: &str, out: &mut impl Write) -> anyhow::Result<Flow> {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            return Ok(Flow::Continue);
        }
        self.handle_line(line, out)
    }

    #[instrument(skip_all)]
    fn flush_frames(&mut self, out: &mut impl Write) -> std::io::Result<()> {
        for frame in self.frames.borrow_mut().drain(..) {
            writeln!(out, "{}", frame)?;
        }
        Ok(())
    }
}

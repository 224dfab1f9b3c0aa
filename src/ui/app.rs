//! Main TUI application state and logic

use super::panes::{self, LogScrollState, StatusRenderData};
use crate::permutation::PermutationSource;
use crate::playback::{PlaybackEngine, StepOutcome};
use crate::solver::Solver;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use rand::rngs::StdRng;
use ratatui::{
    backend::Backend,
    layout::{Constraint, Direction, Layout},
    Frame, Terminal,
};
use std::io;
use std::time::{Duration, Instant};

/// Longest wait for input before redrawing
const IDLE_POLL: Duration = Duration::from_millis(50);

/// Multiplier applied by the `+` and `-` keys
const RATE_STEP_FACTOR: f64 = 2.0;

/// Which pane is currently focused
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedPane {
    StackA,
    StackB,
    Log,
}

impl FocusedPane {
    /// Move focus to the next pane (left to right, wrapping)
    pub fn next(self) -> Self {
        match self {
            FocusedPane::StackA => FocusedPane::StackB,
            FocusedPane::StackB => FocusedPane::Log,
            FocusedPane::Log => FocusedPane::StackA,
        }
    }

    /// Move focus to the previous pane
    pub fn prev(self) -> Self {
        match self {
            FocusedPane::StackA => FocusedPane::Log,
            FocusedPane::StackB => FocusedPane::StackA,
            FocusedPane::Log => FocusedPane::StackB,
        }
    }
}

/// The main application state
pub struct App {
    /// Playback of the current permutation's log
    pub engine: PlaybackEngine,

    /// Solver used when a new permutation is generated
    pub solver: Solver,

    /// Where `g` draws new permutations from
    pub source: PermutationSource,

    rng: StdRng,

    /// Currently focused pane
    pub focused_pane: FocusedPane,

    /// Per-pane scroll offsets
    pub stack_a_scroll: usize,
    pub stack_b_scroll: usize,
    pub log_scroll: LogScrollState,

    /// Whether the app should quit
    pub should_quit: bool,

    /// Status message to display
    pub status_message: String,

    /// Last time space was pressed (for debouncing)
    pub last_space_press: Instant,
}

impl App {
    pub fn new(
        engine: PlaybackEngine,
        solver: Solver,
        source: PermutationSource,
        rng: StdRng,
    ) -> Self {
        App {
            engine,
            solver,
            source,
            rng,
            focused_pane: FocusedPane::StackA,
            stack_a_scroll: 0,
            stack_b_scroll: 0,
            log_scroll: LogScrollState::default(),
            should_quit: false,
            status_message: String::from("Ready!"),
            last_space_press: Instant::now()
                .checked_sub(Duration::from_secs(1))
                .unwrap_or(Instant::now()),
        }
    }

    /// Run the TUI application
    pub fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> io::Result<()> {
        loop {
            terminal.draw(|f| self.render(f))?;

            if self.should_quit {
                break;
            }

            // Handle auto-play mode
            if let Some(outcome) = self.engine.poll(Instant::now()) {
                self.status_message = if self.engine.is_finished() {
                    "Playback complete".to_string()
                } else {
                    describe_outcome(outcome)
                };
                self.log_scroll.follow = true;
            }

            // Wake up in time for the next tick, but keep polling input
            let timeout = self
                .engine
                .time_until_next_tick(Instant::now())
                .map_or(IDLE_POLL, |wait| wait.min(IDLE_POLL));

            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(key);
                    }
                }
            }
        }

        Ok(())
    }

    /// Render the UI
    fn render(&mut self, frame: &mut Frame) {
        let size = frame.area();

        // Panes on top, status bar at the bottom
        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Min(0), Constraint::Length(1)])
            .split(size);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(40),
                Constraint::Percentage(40),
                Constraint::Percentage(20),
            ])
            .split(main_chunks[0]);

        let total = self.engine.original().len();

        panes::render_stack_pane(
            frame,
            columns[0],
            "Stack A",
            self.engine.stack_a(),
            total,
            self.focused_pane == FocusedPane::StackA,
            &mut self.stack_a_scroll,
        );

        panes::render_stack_pane(
            frame,
            columns[1],
            "Stack B",
            self.engine.stack_b(),
            total,
            self.focused_pane == FocusedPane::StackB,
            &mut self.stack_b_scroll,
        );

        panes::render_log_pane(
            frame,
            columns[2],
            self.engine.log(),
            self.engine.cursor(),
            self.focused_pane == FocusedPane::Log,
            &mut self.log_scroll,
        );

        panes::render_status_bar(
            frame,
            main_chunks[1],
            StatusRenderData {
                message: &self.status_message,
                cursor: self.engine.cursor(),
                total_ops: self.engine.len(),
                rate: self.engine.rate(),
                status: self.engine.status(),
                next_op: self.engine.next_operation(),
            },
        );
    }

    /// Handle keyboard events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.should_quit = true;
            }
            // Number keys step forward N times directly
            KeyCode::Char(c @ '1'..='9') => {
                self.engine.pause();
                let n = c.to_digit(10).unwrap_or(1) as usize;
                let stepped = (0..n)
                    .take_while(|_| !self.engine.step().is_noop())
                    .count();
                self.status_message = format!("Stepped forward {} step(s)", stepped);
                self.log_scroll.follow = true;
            }
            KeyCode::Tab => {
                self.focused_pane = self.focused_pane.next();
            }
            KeyCode::BackTab => {
                self.focused_pane = self.focused_pane.prev();
            }
            KeyCode::Left => {
                self.engine.pause();
                let outcome = self.engine.step_back();
                self.status_message = if outcome.is_noop() {
                    "Cannot step backward: already at the start".to_string()
                } else {
                    describe_outcome(outcome)
                };
                self.log_scroll.follow = true;
            }
            KeyCode::Right => {
                self.engine.pause();
                let outcome = self.engine.step();
                self.status_message = if outcome.is_noop() {
                    "Cannot step forward: already at the end".to_string()
                } else {
                    describe_outcome(outcome)
                };
                self.log_scroll.follow = true;
            }
            KeyCode::Up => match self.focused_pane {
                FocusedPane::StackA => {
                    self.stack_a_scroll = self.stack_a_scroll.saturating_sub(1);
                }
                FocusedPane::StackB => {
                    self.stack_b_scroll = self.stack_b_scroll.saturating_sub(1);
                }
                FocusedPane::Log => {
                    self.log_scroll.follow = false;
                    self.log_scroll.offset = self.log_scroll.offset.saturating_sub(1);
                }
            },
            KeyCode::Down => match self.focused_pane {
                FocusedPane::StackA => {
                    self.stack_a_scroll = self.stack_a_scroll.saturating_add(1);
                }
                FocusedPane::StackB => {
                    self.stack_b_scroll = self.stack_b_scroll.saturating_add(1);
                }
                FocusedPane::Log => {
                    self.log_scroll.follow = false;
                    self.log_scroll.offset = self.log_scroll.offset.saturating_add(1);
                }
            },
            KeyCode::Char(' ') => {
                // Toggle auto-play mode (with 200ms debounce to prevent key repeat spam)
                if self.last_space_press.elapsed() >= Duration::from_millis(200) {
                    self.last_space_press = Instant::now();
                    self.toggle_play();
                }
            }
            KeyCode::Char('+') | KeyCode::Char('=') => {
                self.change_rate(RATE_STEP_FACTOR);
            }
            KeyCode::Char('-') => {
                self.change_rate(1.0 / RATE_STEP_FACTOR);
            }
            KeyCode::Enter => {
                self.engine.pause();
                self.engine.jump_to_end();
                self.status_message = "Jumped to end".to_string();
                self.log_scroll.follow = true;
            }
            KeyCode::Backspace => {
                self.engine.reset();
                self.status_message = "Jumped to start".to_string();
                self.log_scroll.follow = true;
            }
            KeyCode::Char('g') | KeyCode::Char('G') => {
                self.regenerate();
            }
            _ => {}
        }
    }

    fn toggle_play(&mut self) {
        if self.engine.is_playing() {
            self.engine.pause();
            self.status_message = "Paused".to_string();
            return;
        }

        let rate = self.engine.rate();
        if self.engine.play(rate, Instant::now()).is_some() {
            self.status_message = "Playing...".to_string();
        } else {
            self.status_message = "Nothing left to play".to_string();
        }
    }

    fn change_rate(&mut self, factor: f64) {
        let rate = self.engine.rate() * factor;
        self.engine.set_rate(rate, Instant::now());
        self.status_message = format!("Rate: {:.1} op/s", self.engine.rate());
    }

    /// Draw a new permutation, solve it and load it. Playback is cancelled
    /// before the old state is replaced.
    fn regenerate(&mut self) {
        self.engine.pause();
        match self.source.draw(&mut self.rng) {
            Ok(permutation) => {
                let log = self.solver.solve(&permutation);
                let count = log.len();
                self.engine.load(permutation.into_elements(), log);
                self.stack_a_scroll = 0;
                self.stack_b_scroll = 0;
                self.log_scroll = LogScrollState::default();
                self.status_message = format!("New permutation: {} operations", count);
            }
            Err(e) => {
                self.status_message = format!("Cannot generate: {}", e);
            }
        }
    }
}

fn describe_outcome(outcome: StepOutcome) -> String {
    match outcome {
        StepOutcome::Applied(op) => format!("{}: {}", op, op.describe()),
        StepOutcome::Reverted(op) => format!("Undid {}: {}", op, op.describe()),
        StepOutcome::NoOp => "No change".to_string(),
    }
}

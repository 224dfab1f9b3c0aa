// Playback engine: cursor, live stacks and timer-driven stepping

use super::scheduler::{CancellationToken, Tick, Ticker};
use crate::snapshot::Snapshot;
use crate::stacks::{Element, Operation, OperationLog, Stack, StackPair};
use std::time::{Duration, Instant};

/// Default playback rate in operations per second
pub const DEFAULT_RATE: f64 = 10.0;

/// Slowest accepted playback rate
pub const MIN_RATE: f64 = 0.5;

/// Fastest accepted playback rate
pub const MAX_RATE: f64 = 1000.0;

/// Playback rate limits
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaybackConfig {
    pub default_rate: f64,
    pub min_rate: f64,
    pub max_rate: f64,
}

impl PlaybackConfig {
    /// Replace unusable limits with the defaults: bounds must be finite,
    /// positive and ordered, and the default rate must lie within them.
    pub fn sanitized(self) -> Self {
        let usable = |rate: f64| rate.is_finite() && rate > 0.0;
        let (min_rate, max_rate) =
            if usable(self.min_rate) && usable(self.max_rate) && self.min_rate <= self.max_rate {
                (self.min_rate, self.max_rate)
            } else {
                (MIN_RATE, MAX_RATE)
            };
        let default_rate = if usable(self.default_rate) {
            self.default_rate
        } else {
            DEFAULT_RATE
        };
        PlaybackConfig {
            default_rate: default_rate.clamp(min_rate, max_rate),
            min_rate,
            max_rate,
        }
    }

    /// Clamp `rate` into range; non-finite or non-positive rates fall back to the default
    pub fn clamp_rate(&self, rate: f64) -> f64 {
        if !rate.is_finite() || rate <= 0.0 {
            return self.default_rate;
        }
        rate.clamp(self.min_rate, self.max_rate)
    }
}

impl Default for PlaybackConfig {
    fn default() -> Self {
        PlaybackConfig {
            default_rate: DEFAULT_RATE,
            min_rate: MIN_RATE,
            max_rate: MAX_RATE,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackStatus {
    /// Freshly loaded or reset, nothing applied yet
    Idle,
    /// Moved manually; more operations remain
    Stepping,
    /// A ticker is armed
    Playing,
    /// Cursor sits at the end of the log
    Finished,
}

/// Result of a single step request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepOutcome {
    /// The operation was applied and the cursor advanced
    Applied(Operation),
    /// The operation was undone and the cursor moved back
    Reverted(Operation),
    /// Cursor was already at the boundary; nothing changed
    NoOp,
}

impl StepOutcome {
    pub fn is_noop(&self) -> bool {
        matches!(self, StepOutcome::NoOp)
    }
}

/// Replays an operation log against the permutation it was solved for
#[derive(Debug)]
pub struct PlaybackEngine {
    /// Input permutation, top of A first
    original: Vec<Element>,

    log: OperationLog,

    /// Live stacks after `cursor` operations
    pair: StackPair,

    /// Index of the next operation to apply
    cursor: usize,

    status: PlaybackStatus,

    /// Operations per second while playing
    rate: f64,

    config: PlaybackConfig,

    /// Armed while playing; dropped (and cancelled) on pause
    ticker: Option<Ticker>,
}

impl PlaybackEngine {
    pub fn new(original: Vec<Element>, log: OperationLog) -> Self {
        Self::with_config(original, log, PlaybackConfig::default())
    }

    pub fn with_config(original: Vec<Element>, log: OperationLog, config: PlaybackConfig) -> Self {
        let config = config.sanitized();
        let pair = StackPair::new(&original);
        PlaybackEngine {
            original,
            log,
            pair,
            cursor: 0,
            status: PlaybackStatus::Idle,
            rate: config.default_rate,
            config,
            ticker: None,
        }
    }

    /// Replace the permutation and log. Active playback is cancelled first.
    pub fn load(&mut self, original: Vec<Element>, log: OperationLog) {
        self.cancel_ticker();
        self.pair = StackPair::new(&original);
        self.original = original;
        self.log = log;
        self.cursor = 0;
        self.status = PlaybackStatus::Idle;
    }

    /// Apply the operation at the cursor
    pub fn step(&mut self) -> StepOutcome {
        let Some(op) = self.log.get(self.cursor) else {
            self.settle();
            return StepOutcome::NoOp;
        };

        self.pair.apply(op);
        self.cursor += 1;
        self.settle();
        StepOutcome::Applied(op)
    }

    /// Undo the last applied operation by replaying the log up to it
    pub fn step_back(&mut self) -> StepOutcome {
        if self.cursor == 0 {
            return StepOutcome::NoOp;
        }

        let target = self.cursor - 1;
        let op = self.log.get(target);
        self.pair = self.log.replay_prefix(&self.original, target);
        self.cursor = target;
        self.settle();
        op.map(StepOutcome::Reverted).unwrap_or(StepOutcome::NoOp)
    }

    /// Jump to `cursor`, clamped to `[0, len]`
    pub fn seek(&mut self, cursor: usize) {
        let target = cursor.min(self.log.len());
        if target == self.cursor {
            return;
        }
        if target > self.cursor {
            for op in self.log.as_slice()[self.cursor..target].iter() {
                self.pair.apply(*op);
            }
        } else {
            self.pair = self.log.replay_prefix(&self.original, target);
        }
        self.cursor = target;
        self.settle();
    }

    pub fn jump_to_end(&mut self) {
        self.seek(self.log.len());
    }

    /// Back to the original permutation with nothing applied
    pub fn reset(&mut self) {
        self.cancel_ticker();
        self.pair = StackPair::new(&self.original);
        self.cursor = 0;
        self.status = PlaybackStatus::Idle;
    }

    /// Start stepping at `rate` operations per second. Returns the token of
    /// the armed ticker, or `None` when there is nothing left to play.
    pub fn play(&mut self, rate: f64, now: Instant) -> Option<CancellationToken> {
        self.cancel_ticker();
        self.rate = self.config.clamp_rate(rate);

        if self.cursor >= self.log.len() {
            self.status = PlaybackStatus::Finished;
            return None;
        }

        let ticker = Ticker::start(self.interval(), now);
        let token = ticker.token();
        self.ticker = Some(ticker);
        self.status = PlaybackStatus::Playing;
        Some(token)
    }

    /// Stop playing. No tick produced before this call can step afterwards.
    pub fn pause(&mut self) {
        self.cancel_ticker();
        if self.status == PlaybackStatus::Playing {
            self.status = if self.cursor == 0 {
                PlaybackStatus::Idle
            } else {
                PlaybackStatus::Stepping
            };
        }
    }

    /// Change the rate; an active ticker is re-armed at the new interval
    pub fn set_rate(&mut self, rate: f64, now: Instant) {
        self.rate = self.config.clamp_rate(rate);
        if self.ticker.is_some() {
            self.play(self.rate, now);
        }
    }

    /// Fire the ticker if a tick is due at `now`
    pub fn poll(&mut self, now: Instant) -> Option<StepOutcome> {
        let tick = self.take_due_tick(now)?;
        self.fire(&tick)
    }

    /// Take the due tick without processing it. Callers that defer ticks
    /// (e.g. through an event queue) pass it to [`fire`](Self::fire) later.
    pub fn take_due_tick(&mut self, now: Instant) -> Option<Tick> {
        self.ticker.as_mut()?.poll(now)
    }

    /// Process a tick. Ticks whose token has been cancelled are ignored.
    pub fn fire(&mut self, tick: &Tick) -> Option<StepOutcome> {
        if tick.is_cancelled() {
            return None;
        }
        Some(self.step())
    }

    /// Time until the next scheduled step, if playing
    pub fn time_until_next_tick(&self, now: Instant) -> Option<Duration> {
        self.ticker.as_ref()?.time_until_next(now)
    }

    /// State after `cursor` operations (clamped) without moving the live cursor
    pub fn state_at(&self, cursor: usize) -> Snapshot {
        let target = cursor.min(self.log.len());
        if target == self.cursor {
            return self.snapshot();
        }
        let pair = self.log.replay_prefix(&self.original, target);
        Snapshot::from_pair(&pair, target)
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot::from_pair(&self.pair, self.cursor)
    }

    pub fn stack_a(&self) -> &Stack {
        &self.pair.a
    }

    pub fn stack_b(&self) -> &Stack {
        &self.pair.b
    }

    pub fn pair(&self) -> &StackPair {
        &self.pair
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn len(&self) -> usize {
        self.log.len()
    }

    pub fn is_empty(&self) -> bool {
        self.log.is_empty()
    }

    pub fn log(&self) -> &OperationLog {
        &self.log
    }

    pub fn original(&self) -> &[Element] {
        &self.original
    }

    /// The operation `step` would apply next
    pub fn next_operation(&self) -> Option<Operation> {
        self.log.get(self.cursor)
    }

    pub fn status(&self) -> PlaybackStatus {
        self.status
    }

    pub fn is_playing(&self) -> bool {
        self.status == PlaybackStatus::Playing
    }

    pub fn is_finished(&self) -> bool {
        self.cursor == self.log.len()
    }

    pub fn rate(&self) -> f64 {
        self.rate
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    fn interval(&self) -> Duration {
        Duration::from_secs_f64(1.0 / self.rate)
    }

    fn cancel_ticker(&mut self) {
        if let Some(ticker) = self.ticker.take() {
            ticker.cancel();
        }
    }

    /// Recompute status after the cursor moved (or failed to)
    fn settle(&mut self) {
        if self.cursor == self.log.len() {
            self.cancel_ticker();
            self.status = PlaybackStatus::Finished;
        } else if self.status != PlaybackStatus::Playing {
            self.status = PlaybackStatus::Stepping;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn engine(ranks: &[usize], ops: &[Operation]) -> PlaybackEngine {
        PlaybackEngine::new(Element::from_ranks(ranks), OperationLog::new(ops.to_vec()))
    }

    #[test]
    fn test_clamp_rate() {
        let config = PlaybackConfig::default();
        assert_eq!(config.clamp_rate(f64::NAN), DEFAULT_RATE);
        assert_eq!(config.clamp_rate(-3.0), DEFAULT_RATE);
        assert_eq!(config.clamp_rate(0.01), MIN_RATE);
        assert_eq!(config.clamp_rate(1e9), MAX_RATE);
        assert_eq!(config.clamp_rate(25.0), 25.0);
    }

    #[test]
    fn test_degenerate_config_falls_back_to_defaults() {
        let config = PlaybackConfig {
            default_rate: 0.0,
            min_rate: 5.0,
            max_rate: 1.0,
        }
        .sanitized();
        assert_eq!(config, PlaybackConfig::default());

        let config = PlaybackConfig {
            default_rate: 2000.0,
            min_rate: 1.0,
            max_rate: 100.0,
        }
        .sanitized();
        assert_eq!(config.default_rate, 100.0);
    }

    #[test]
    fn test_play_with_zero_default_rate_does_not_panic() {
        let start = Instant::now();
        let mut engine = PlaybackEngine::with_config(
            Element::from_ranks(&[1, 0]),
            OperationLog::new(vec![Operation::SA]),
            PlaybackConfig {
                default_rate: 0.0,
                min_rate: 0.5,
                max_rate: 1000.0,
            },
        );
        assert!(engine.play(f64::NAN, start).is_some());
        assert_eq!(engine.rate(), DEFAULT_RATE);
        assert_eq!(
            engine.poll(start + Duration::from_millis(100)),
            Some(StepOutcome::Applied(Operation::SA))
        );
    }

    #[test]
    fn test_status_transitions() {
        let mut engine = engine(&[2, 0, 1], &[Operation::PB, Operation::PA]);
        assert_eq!(engine.status(), PlaybackStatus::Idle);
        engine.step();
        assert_eq!(engine.status(), PlaybackStatus::Stepping);
        engine.step();
        assert_eq!(engine.status(), PlaybackStatus::Finished);
        engine.step_back();
        assert_eq!(engine.status(), PlaybackStatus::Stepping);
        engine.reset();
        assert_eq!(engine.status(), PlaybackStatus::Idle);
        assert_eq!(engine.cursor(), 0);
    }

    #[test]
    fn test_play_at_end_reports_finished() {
        let mut engine = engine(&[0, 1], &[]);
        assert!(engine.play(10.0, Instant::now()).is_none());
        assert_eq!(engine.status(), PlaybackStatus::Finished);
    }

    #[test]
    fn test_set_rate_rearms_ticker() {
        let start = Instant::now();
        let mut engine = engine(&[1, 0], &[Operation::SA]);
        let token = engine.play(1.0, start).expect("armed");
        engine.set_rate(100.0, start);
        assert!(token.is_cancelled());
        assert!(engine.is_playing());
        assert_eq!(
            engine.time_until_next_tick(start),
            Some(Duration::from_millis(10))
        );
    }
}

// Integration tests for the playback engine

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use stacksort::playback::{PlaybackEngine, PlaybackStatus, StepOutcome};
use stacksort::solver::Solver;
use stacksort::stacks::{Element, Operation};
use std::time::{Duration, Instant};

fn engine_for(ranks: &[usize]) -> PlaybackEngine {
    let elements = Element::from_ranks(ranks);
    let log = Solver::default().solve_elements(&elements);
    PlaybackEngine::new(elements, log)
}

fn shuffled_ranks(n: usize, seed: u64) -> Vec<usize> {
    let mut ranks: Vec<usize> = (0..n).collect();
    ranks.shuffle(&mut StdRng::seed_from_u64(seed));
    ranks
}

#[test]
fn test_initial_state_is_original_permutation() {
    let engine = engine_for(&[3, 1, 4, 0, 2]);
    assert_eq!(engine.status(), PlaybackStatus::Idle);
    assert_eq!(engine.cursor(), 0);
    let snapshot = engine.snapshot();
    assert_eq!(snapshot.ranks_a(), vec![3, 1, 4, 0, 2]);
    assert!(snapshot.ranks_b().is_empty());
}

#[test]
fn test_stepping_to_end_sorts() {
    let mut engine = engine_for(&shuffled_ranks(40, 1));
    let total = engine.len();
    for expected_cursor in 1..=total {
        assert!(matches!(engine.step(), StepOutcome::Applied(_)));
        assert_eq!(engine.cursor(), expected_cursor);
    }
    assert_eq!(engine.status(), PlaybackStatus::Finished);
    assert!(engine.pair().is_solved());
}

#[test]
fn test_step_back_then_step_restores_state() {
    let mut engine = engine_for(&shuffled_ranks(25, 2));
    engine.jump_to_end();
    let total = engine.len();
    for cursor in (1..=total).rev() {
        engine.seek(cursor);
        let before = engine.snapshot();
        assert!(matches!(engine.step_back(), StepOutcome::Reverted(_)));
        assert_eq!(engine.cursor(), cursor - 1);
        assert!(matches!(engine.step(), StepOutcome::Applied(_)));
        assert_eq!(engine.snapshot(), before, "cursor {}", cursor);
    }
}

#[test]
fn test_next_operation_tracks_cursor() {
    let mut engine = engine_for(&[2, 0, 1]);
    assert_eq!(engine.next_operation(), Some(Operation::RA));
    engine.step();
    assert_eq!(engine.next_operation(), None);
    engine.step_back();
    assert_eq!(engine.next_operation(), Some(Operation::RA));
}

#[test]
fn test_step_back_reports_undone_operation() {
    let mut engine = engine_for(&[2, 0, 1]);
    assert_eq!(engine.step(), StepOutcome::Applied(Operation::RA));
    assert_eq!(engine.step_back(), StepOutcome::Reverted(Operation::RA));
    assert_eq!(engine.snapshot().ranks_a(), vec![2, 0, 1]);
}

#[test]
fn test_boundaries_are_noops() {
    let mut engine = engine_for(&[1, 0]);
    let start = engine.snapshot();
    assert_eq!(engine.step_back(), StepOutcome::NoOp);
    assert_eq!(engine.snapshot(), start);

    engine.jump_to_end();
    let end = engine.snapshot();
    assert_eq!(engine.step(), StepOutcome::NoOp);
    assert_eq!(engine.snapshot(), end);
    assert_eq!(end.ranks_a(), vec![0, 1]);
}

#[test]
fn test_seek_and_state_at_clamp() {
    let mut engine = engine_for(&shuffled_ranks(12, 3));
    let total = engine.len();

    let end = engine.state_at(total + 100);
    assert_eq!(end.cursor, total);
    assert_eq!(end.ranks_a(), (0..12).collect::<Vec<_>>());
    // state_at never moves the live cursor
    assert_eq!(engine.cursor(), 0);

    engine.seek(usize::MAX);
    assert_eq!(engine.cursor(), total);
    assert_eq!(engine.snapshot(), end);

    engine.seek(3);
    assert_eq!(engine.snapshot(), engine.state_at(3));
}

#[test]
fn test_state_at_matches_stepping() {
    let mut engine = engine_for(&shuffled_ranks(15, 4));
    let expected: Vec<_> = (0..=engine.len()).map(|c| engine.state_at(c)).collect();
    assert_eq!(engine.snapshot(), expected[0]);
    for snapshot in expected.iter().skip(1) {
        engine.step();
        assert_eq!(&engine.snapshot(), snapshot);
    }
}

#[test]
fn test_reset_restores_original() {
    let mut engine = engine_for(&shuffled_ranks(10, 5));
    let start = engine.snapshot();
    engine.play(10.0, Instant::now());
    engine.seek(7);
    engine.reset();
    assert_eq!(engine.status(), PlaybackStatus::Idle);
    assert_eq!(engine.snapshot(), start);
    assert!(!engine.is_playing());
}

#[test]
fn test_play_steps_once_per_interval() {
    let start = Instant::now();
    let interval = Duration::from_millis(100);
    let mut engine = engine_for(&shuffled_ranks(10, 6));

    engine.play(10.0, start).expect("ticker armed");
    assert_eq!(engine.status(), PlaybackStatus::Playing);
    assert!(engine.poll(start + interval / 2).is_none());
    assert!(engine.poll(start + interval).is_some());
    assert!(engine.poll(start + interval + interval / 2).is_none());
    assert!(engine.poll(start + 2 * interval).is_some());
    assert_eq!(engine.cursor(), 2);
}

#[test]
fn test_pause_stops_further_steps() {
    let start = Instant::now();
    let interval = Duration::from_millis(100);
    let mut engine = engine_for(&shuffled_ranks(10, 7));

    engine.play(10.0, start).expect("ticker armed");
    assert!(engine.poll(start + interval).is_some());
    engine.pause();
    assert_eq!(engine.cursor(), 1);

    for k in 2..8 {
        assert!(engine.poll(start + k * interval).is_none());
    }
    assert_eq!(engine.cursor(), 1);
    assert_eq!(engine.status(), PlaybackStatus::Stepping);
}

#[test]
fn test_tick_fired_before_pause_is_ignored() {
    let start = Instant::now();
    let mut engine = engine_for(&shuffled_ranks(10, 8));
    let token = engine.play(10.0, start).expect("ticker armed");

    // The tick is due and taken, but processed only after pause
    let tick = engine
        .take_due_tick(start + Duration::from_millis(100))
        .expect("tick due");
    engine.pause();

    assert!(token.is_cancelled());
    assert!(tick.is_cancelled());
    assert!(engine.fire(&tick).is_none());
    assert_eq!(engine.cursor(), 0);
    assert_eq!(engine.status(), PlaybackStatus::Idle);
}

#[test]
fn test_playback_runs_to_completion() {
    let start = Instant::now();
    let interval = Duration::from_millis(10);
    let mut engine = engine_for(&shuffled_ranks(8, 9));
    let token = engine.play(100.0, start).expect("ticker armed");

    let mut now = start;
    for _ in 0..engine.len() {
        now += interval;
        assert!(engine.poll(now).is_some());
    }
    assert_eq!(engine.status(), PlaybackStatus::Finished);
    assert!(token.is_cancelled());
    assert!(engine.poll(now + interval).is_none());
    assert!(engine.pair().is_solved());
}

#[test]
fn test_load_cancels_active_playback() {
    let start = Instant::now();
    let mut engine = engine_for(&shuffled_ranks(10, 10));
    let token = engine.play(10.0, start).expect("ticker armed");
    engine.poll(start + Duration::from_millis(100));

    let elements = Element::from_ranks(&[2, 0, 1]);
    let log = Solver::default().solve_elements(&elements);
    engine.load(elements, log);

    assert!(token.is_cancelled());
    assert_eq!(engine.status(), PlaybackStatus::Idle);
    assert_eq!(engine.cursor(), 0);
    assert!(engine.poll(start + Duration::from_secs(5)).is_none());
    assert_eq!(engine.snapshot().ranks_a(), vec![2, 0, 1]);
}

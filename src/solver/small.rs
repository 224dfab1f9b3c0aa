//! Strategies for two to five elements
//!
//! Each function reads the recorder's current stacks and emits operations.
//! They compare ranks only relative to one another, except [`sort_small`],
//! which relies on the two smallest ranks being 0 and 1.

use super::Recorder;
use crate::stacks::Operation;

/// Two elements. Only valid for a strictly descending pair; the caller
/// guarantees this by ruling out already-sorted input first.
pub fn sort_two(recorder: &mut Recorder) {
    debug_assert_eq!(recorder.a().len(), 2);
    debug_assert!(
        !recorder.a().is_ascending(),
        "sort_two called on a sorted pair"
    );
    recorder.emit(Operation::SA);
}

/// Three elements on A, sorted with at most two operations.
///
/// Sorted input emits nothing, which lets [`sort_small`] call this on a
/// remainder that may already be in order.
pub fn sort_three(recorder: &mut Recorder) {
    let (Some(a), Some(b), Some(c)) = (recorder.a_rank(0), recorder.a_rank(1), recorder.a_rank(2))
    else {
        return;
    };

    let ops: &[Operation] = if a < b && b < c {
        &[]
    } else if a < c && b > c {
        &[Operation::SA, Operation::RA]
    } else if a > b && a < c {
        &[Operation::SA]
    } else if a > b && b > c {
        &[Operation::SA, Operation::RRA]
    } else if a > b && a > c && b < c {
        &[Operation::RA]
    } else {
        // a < b && a > c
        &[Operation::RRA]
    };

    for &op in ops {
        recorder.emit(op);
    }
}

/// Four or five elements: move ranks 0 and 1 to B, sort what is left on A,
/// then push both back with 0 landing on top.
pub fn sort_small(recorder: &mut Recorder) {
    while recorder.b().len() < 2 {
        match recorder.a_rank(0) {
            Some(rank) if rank <= 1 => recorder.emit(Operation::PB),
            Some(_) => recorder.emit(Operation::RA),
            None => return,
        }
    }

    if recorder.a().len() == 3 {
        sort_three(recorder);
    } else if let (Some(first), Some(second)) = (recorder.a_rank(0), recorder.a_rank(1)) {
        if first > second {
            recorder.emit(Operation::SA);
        }
    }

    if let (Some(top), Some(next)) = (recorder.b_rank(0), recorder.b_rank(1)) {
        if top < next {
            recorder.emit(Operation::SB);
        }
    }

    recorder.emit(Operation::PA);
    recorder.emit(Operation::PA);
}

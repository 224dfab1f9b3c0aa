//! Chunked strategy for more than five elements
//!
//! Phase 1 pushes everything from A to B in rough ascending order. A bucket
//! floor `floor` counts the elements pushed so far; an element is accepted
//! once its rank is within `floor + range`. Elements at or below the floor
//! stay on top of B, the rest of the bucket is rotated under them.
//!
//! Phase 2 repeatedly brings the largest rank in B to its top (by the shorter
//! rotation direction) and pushes it to A, so A fills from its largest rank
//! down.

use super::Recorder;
use crate::stacks::Operation;

pub fn sort_chunked(recorder: &mut Recorder, range: usize) {
    partition(recorder, range);
    drain_max_first(recorder);
}

fn partition(recorder: &mut Recorder, range: usize) {
    let mut floor = 0usize;
    // The smallest rank left on A is always <= floor, so a candidate exists
    // within one full turn of A.
    while let Some(top) = recorder.a_rank(0) {
        if top <= floor {
            recorder.emit(Operation::PB);
            floor += 1;
        } else if top <= floor.saturating_add(range) {
            recorder.emit(Operation::PB);
            if recorder.b().len() >= 2 {
                recorder.emit(Operation::RB);
            }
            floor += 1;
        } else {
            recorder.emit(Operation::RA);
        }
    }
}

fn drain_max_first(recorder: &mut Recorder) {
    while let Some(position) = recorder.b().position_of_max() {
        let len = recorder.b().len();
        if position <= len / 2 {
            recorder.emit_n(Operation::RB, position);
        } else {
            recorder.emit_n(Operation::RRB, len - position);
        }
        recorder.emit(Operation::PA);
    }
}

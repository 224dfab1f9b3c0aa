// Integration tests for the two-stack solver

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use stacksort::permutation::Permutation;
use stacksort::solver::{Solver, SolverConfig};
use stacksort::stacks::{Element, Operation, OperationLog};

fn solve(ranks: &[usize]) -> OperationLog {
    Solver::default().solve_elements(&Element::from_ranks(ranks))
}

fn assert_sorts(ranks: &[usize], log: &OperationLog) {
    let pair = log.replay(&Element::from_ranks(ranks));
    assert!(pair.b.is_empty(), "B not empty for input {:?}", ranks);
    let expected: Vec<usize> = (0..ranks.len()).collect();
    assert_eq!(
        pair.a.ranks().collect::<Vec<_>>(),
        expected,
        "A not sorted for input {:?}",
        ranks
    );
}

/// Every permutation of 0..n, generated with Heap's algorithm
fn all_permutations(n: usize) -> Vec<Vec<usize>> {
    fn heap(k: usize, items: &mut Vec<usize>, out: &mut Vec<Vec<usize>>) {
        if k <= 1 {
            out.push(items.clone());
            return;
        }
        heap(k - 1, items, out);
        for i in 0..k - 1 {
            let j = if k % 2 == 0 { i } else { 0 };
            items.swap(j, k - 1);
            heap(k - 1, items, out);
        }
    }

    let mut items: Vec<usize> = (0..n).collect();
    let mut out = Vec::new();
    heap(n, &mut items, &mut out);
    out
}

fn random_ranks(n: usize, rng: &mut StdRng) -> Vec<usize> {
    let mut ranks: Vec<usize> = (0..n).collect();
    ranks.shuffle(rng);
    ranks
}

#[test]
fn test_every_small_permutation_is_sorted() {
    for n in 0..=6 {
        let perms = all_permutations(n);
        assert_eq!(perms.len(), (1..=n).product::<usize>().max(1));
        for ranks in perms {
            let log = solve(&ranks);
            assert_sorts(&ranks, &log);
        }
    }
}

#[test]
fn test_random_permutations_are_sorted() {
    let mut rng = StdRng::seed_from_u64(0x5eed);
    for n in [10, 50, 100, 500] {
        for _ in 0..5 {
            let ranks = random_ranks(n, &mut rng);
            let log = solve(&ranks);
            assert_sorts(&ranks, &log);
        }
    }
}

#[test]
fn test_sorted_input_yields_empty_log() {
    for n in [0, 1, 2, 3, 5, 6, 100, 500] {
        let ranks: Vec<usize> = (0..n).collect();
        assert!(solve(&ranks).is_empty(), "n = {}", n);
    }
}

#[test]
fn test_two_elements_swap() {
    let log = solve(&[1, 0]);
    assert_eq!(log.as_slice(), &[Operation::SA]);
    assert_sorts(&[1, 0], &log);
}

#[test]
fn test_three_elements_single_rotate() {
    let log = solve(&[2, 0, 1]);
    assert_eq!(log.as_slice(), &[Operation::RA]);
    assert_sorts(&[2, 0, 1], &log);
}

#[test]
fn test_three_elements_stay_within_two_ops() {
    for ranks in all_permutations(3) {
        assert!(solve(&ranks).len() <= 2, "input {:?}", ranks);
    }
}

#[test]
fn test_small_logs_end_with_two_pushes_back() {
    for ranks in all_permutations(5) {
        let log = solve(&ranks);
        if log.is_empty() {
            continue;
        }
        let tail: Vec<Operation> = log.iter().skip(log.len() - 2).collect();
        assert_eq!(tail, vec![Operation::PA, Operation::PA], "input {:?}", ranks);
    }
}

#[test]
fn test_log_never_hits_unmet_precondition() {
    let mut rng = StdRng::seed_from_u64(42);
    for n in [4, 5, 6, 30, 120] {
        let ranks = random_ranks(n, &mut rng);
        let log = solve(&ranks);
        let mut pair = stacksort::stacks::StackPair::new(&Element::from_ranks(&ranks));
        for op in log.iter() {
            assert!(pair.apply(op), "{} was a no-op for input {:?}", op, ranks);
        }
    }
}

#[test]
fn test_custom_bucket_widths_still_sort() {
    let mut rng = StdRng::seed_from_u64(9);
    let ranks = random_ranks(200, &mut rng);
    for (small, large) in [(1, 1), (5, 60), (200, 200)] {
        let solver = Solver::new(SolverConfig {
            small_range: small,
            large_range: large,
            range_threshold: 100,
        });
        let log = solver.solve_elements(&Element::from_ranks(&ranks));
        assert_sorts(&ranks, &log);
    }
}

#[test]
fn test_solver_is_deterministic() {
    let mut rng = StdRng::seed_from_u64(17);
    let ranks = random_ranks(100, &mut rng);
    assert_eq!(solve(&ranks), solve(&ranks));
}

#[test]
fn test_solve_from_values() {
    let permutation = Permutation::from_values(&[30, -5, 12, 7, 99, 0, -40]).expect("valid input");
    let log = Solver::default().solve(&permutation);
    let pair = log.replay(permutation.elements());
    assert!(pair.is_solved());
    let values: Vec<i64> = pair.a.iter().map(|e| e.value).collect();
    assert_eq!(values, vec![-40, -5, 0, 7, 12, 30, 99]);
}

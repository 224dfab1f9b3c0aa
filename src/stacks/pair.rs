//! The A/B stack pair

use super::element::Element;
use super::operation::Operation;
use super::stack::Stack;

/// Stacks A and B. Every element lives in exactly one of them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StackPair {
    pub a: Stack,
    pub b: Stack,
}

impl StackPair {
    /// A holds `input` (top = `input[0]`), B is empty
    pub fn new(input: &[Element]) -> Self {
        StackPair {
            a: Stack::from_elements(input),
            b: Stack::with_capacity(input.len()),
        }
    }

    /// Apply one operation. Returns false when its precondition is unmet,
    /// in which case the pair is left untouched.
    pub fn apply(&mut self, op: Operation) -> bool {
        match op {
            Operation::SA => self.a.swap_top(),
            Operation::SB => self.b.swap_top(),
            Operation::PA => Self::transfer(&mut self.b, &mut self.a),
            Operation::PB => Self::transfer(&mut self.a, &mut self.b),
            Operation::RA => self.a.rotate(),
            Operation::RB => self.b.rotate(),
            Operation::RRA => self.a.reverse_rotate(),
            Operation::RRB => self.b.reverse_rotate(),
        }
    }

    fn transfer(from: &mut Stack, to: &mut Stack) -> bool {
        match from.pop() {
            Some(element) => {
                to.push(element);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.a.len() + self.b.len()
    }

    pub fn is_empty(&self) -> bool {
        self.a.is_empty() && self.b.is_empty()
    }

    /// A ascending by rank from top to bottom and B empty
    pub fn is_solved(&self) -> bool {
        self.b.is_empty() && self.a.is_ascending()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ranks(stack: &Stack) -> Vec<usize> {
        stack.ranks().collect()
    }

    #[test]
    fn test_push_between_stacks() {
        let mut pair = StackPair::new(&Element::from_ranks(&[2, 0, 1]));
        assert!(pair.apply(Operation::PB));
        assert!(pair.apply(Operation::PB));
        assert_eq!(ranks(&pair.a), vec![1]);
        assert_eq!(ranks(&pair.b), vec![0, 2]);
        assert!(pair.apply(Operation::PA));
        assert_eq!(ranks(&pair.a), vec![0, 1]);
        assert_eq!(ranks(&pair.b), vec![2]);
    }

    #[test]
    fn test_unmet_preconditions_leave_state_unchanged() {
        let mut pair = StackPair::new(&Element::from_ranks(&[0]));
        let before = pair.clone();
        for op in [
            Operation::SA,
            Operation::SB,
            Operation::PA,
            Operation::RA,
            Operation::RB,
            Operation::RRA,
            Operation::RRB,
        ] {
            assert!(!pair.apply(op), "{} should be a no-op", op);
        }
        assert_eq!(pair, before);
    }

    #[test]
    fn test_elements_are_conserved() {
        let mut pair = StackPair::new(&Element::from_ranks(&[4, 1, 3, 0, 2]));
        for op in Operation::ALL.iter().cycle().take(40) {
            pair.apply(*op);
            assert_eq!(pair.len(), 5);
        }
        let mut ranks: Vec<usize> = pair.a.ranks().chain(pair.b.ranks()).collect();
        ranks.sort_unstable();
        assert_eq!(ranks, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_is_solved() {
        assert!(StackPair::new(&Element::from_ranks(&[0, 1, 2])).is_solved());
        assert!(!StackPair::new(&Element::from_ranks(&[1, 0, 2])).is_solved());
        let mut pair = StackPair::new(&Element::from_ranks(&[0, 1]));
        pair.apply(Operation::PB);
        assert!(!pair.is_solved());
    }
}

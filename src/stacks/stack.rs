//! Double-ended stack
//!
//! [`Stack`] wraps a [`VecDeque`] so that every primitive (push, pop, swap,
//! rotate, reverse-rotate) is O(1) amortized. The front of the deque is the top.

use super::element::Element;
use std::collections::VecDeque;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Stack {
    items: VecDeque<Element>,
}

impl Stack {
    pub fn new() -> Self {
        Stack {
            items: VecDeque::new(),
        }
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: VecDeque::with_capacity(capacity),
        }
    }

    /// Build a stack whose top is `elements[0]`
    pub fn from_elements(elements: &[Element]) -> Self {
        Stack {
            items: elements.iter().copied().collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn top(&self) -> Option<&Element> {
        self.items.front()
    }

    /// Element at `index` counted from the top
    pub fn get(&self, index: usize) -> Option<&Element> {
        self.items.get(index)
    }

    pub fn push(&mut self, element: Element) {
        self.items.push_front(element);
    }

    pub fn pop(&mut self) -> Option<Element> {
        self.items.pop_front()
    }

    /// Swap the top two elements. Returns false if there are fewer than two.
    pub fn swap_top(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.swap(0, 1);
        true
    }

    /// Move the top element to the bottom. Returns false if there are fewer than two.
    pub fn rotate(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.rotate_left(1);
        true
    }

    /// Move the bottom element to the top. Returns false if there are fewer than two.
    pub fn reverse_rotate(&mut self) -> bool {
        if self.items.len() < 2 {
            return false;
        }
        self.items.rotate_right(1);
        true
    }

    /// Iterate from top to bottom
    pub fn iter(&self) -> impl Iterator<Item = &Element> {
        self.items.iter()
    }

    /// Ranks from top to bottom
    pub fn ranks(&self) -> impl Iterator<Item = usize> + '_ {
        self.items.iter().map(|e| e.rank)
    }

    /// Position (from the top) of the element with the highest rank
    pub fn position_of_max(&self) -> Option<usize> {
        self.items
            .iter()
            .enumerate()
            .max_by_key(|(_, e)| e.rank)
            .map(|(idx, _)| idx)
    }

    /// Whether ranks strictly increase from top to bottom
    pub fn is_ascending(&self) -> bool {
        self.items
            .iter()
            .zip(self.items.iter().skip(1))
            .all(|(a, b)| a.rank < b.rank)
    }

    pub fn to_vec(&self) -> Vec<Element> {
        self.items.iter().copied().collect()
    }
}

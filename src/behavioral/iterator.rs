/*!

# Iterator

The iterator pattern lets client code walk a collection without knowing how it is stored. The
textbook interface is a pair of methods, `next()` and `is_finished()`, and a collection that
hands out a forward iterator and a backward one.

Rust builds this pattern into the language. `Iterator::next` returns an `Option`, which fuses
`next` and `is_finished` into one call that can't be misused (no calling `next` on a finished
iterator and reading past the end). A backward iterator isn't a second type at all: implement
`DoubleEndedIterator` once and every caller gets `.rev()`.

[`Numbers`] is written out by hand to show the moving parts: a borrowed slice and two cursors
that close in on each other. In real code, `self.numbers.iter().copied()` would do.

*/

use std::iter::FusedIterator;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NumberCollection {
    numbers: Vec<i64>,
}

impl NumberCollection {
    pub fn new(numbers: impl Into<Vec<i64>>) -> Self {
        Self {
            numbers: numbers.into(),
        }
    }

    /// The first `count` Fibonacci numbers, starting `1, 1, 2, ...`. Stops early rather than
    /// overflow.
    pub fn fibonacci(count: usize) -> Self {
        let numbers = std::iter::successors(Some((1i64, 1i64)), |&(a, b)| {
            a.checked_add(b).map(|next| (b, next))
        })
        .map(|(a, _)| a)
        .take(count)
        .collect::<Vec<_>>();
        Self { numbers }
    }

    pub fn forward(&self) -> Numbers<'_> {
        Numbers::new(&self.numbers)
    }

    pub fn backward(&self) -> std::iter::Rev<Numbers<'_>> {
        self.forward().rev()
    }

    pub fn len(&self) -> usize {
        self.numbers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.numbers.is_empty()
    }
}

impl<'a> IntoIterator for &'a NumberCollection {
    type Item = i64;
    type IntoIter = Numbers<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.forward()
    }
}

/// Walks a [`NumberCollection`] from either end.
#[derive(Clone, Debug)]
pub struct Numbers<'a> {
    numbers: &'a [i64],
    // Invariant: front <= back. The unvisited numbers are numbers[front..back].
    front: usize,
    back: usize,
}

impl<'a> Numbers<'a> {
    fn new(numbers: &'a [i64]) -> Self {
        Self {
            numbers,
            front: 0,
            back: numbers.len(),
        }
    }

    /// Equivalent to `self.len() == 0`, under the name the textbook uses.
    pub fn is_finished(&self) -> bool {
        self.front >= self.back
    }
}

impl Iterator for Numbers<'_> {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        if self.is_finished() {
            return None;
        }
        let current = self.numbers[self.front];
        self.front += 1;
        Some(current)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back - self.front;
        (remaining, Some(remaining))
    }
}

impl DoubleEndedIterator for Numbers<'_> {
    fn next_back(&mut self) -> Option<i64> {
        if self.is_finished() {
            return None;
        }
        self.back -= 1;
        Some(self.numbers[self.back])
    }
}

impl ExactSizeIterator for Numbers<'_> {}

impl FusedIterator for Numbers<'_> {}

#[cfg(test)]
mod tests {
    use super::*;

    const FIB: [i64; 9] = [1, 1, 2, 3, 5, 8, 13, 21, 34];

    #[test]
    fn fibonacci_matches_the_literal_list() {
        assert_eq!(NumberCollection::fibonacci(9), NumberCollection::new(FIB));
    }

    #[test]
    fn iterates_forward_and_backward() {
        let fib = NumberCollection::new(FIB);
        assert_eq!(fib.forward().collect::<Vec<_>>(), FIB);

        let mut reversed = FIB;
        reversed.reverse();
        assert_eq!(fib.backward().collect::<Vec<_>>(), reversed);
    }

    #[test]
    fn textbook_loop_still_works() {
        let fib = NumberCollection::new(FIB);
        let mut iter = fib.forward();
        let mut seen = Vec::new();
        while !iter.is_finished() {
            if let Some(n) = iter.next() {
                seen.push(n);
            }
        }
        assert_eq!(seen, FIB);
        assert_eq!(iter.next(), None);
    }

    #[test]
    fn both_ends_meet_in_the_middle() {
        let fib = NumberCollection::new(FIB);
        let mut iter = fib.forward();
        assert_eq!(iter.len(), 9);
        assert_eq!(iter.next(), Some(1));
        assert_eq!(iter.next_back(), Some(34));
        assert_eq!(iter.len(), 7);
        let middle: Vec<_> = iter.by_ref().collect();
        assert_eq!(middle, [1, 2, 3, 5, 8, 13, 21]);
        assert_eq!(iter.next_back(), None);
    }

    #[test]
    fn empty_collection_is_finished_immediately() {
        let empty = NumberCollection::default();
        assert!(empty.is_empty());
        assert!(empty.forward().is_finished());
        assert_eq!((&empty).into_iter().count(), 0);
    }

    #[test]
    fn fibonacci_stops_before_overflow() {
        let long = NumberCollection::fibonacci(1000);
        assert!(long.len() < 1000);
        assert!(long.forward().all(|n| n > 0));
    }
}

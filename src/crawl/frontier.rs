// src/crawl/frontier.rs
// =============================================================================
// Prefixes and the FIFO queue of prefixes still to be probed.
//
// How it works:
// 1. The frontier starts with one prefix per alphabet character
// 2. The driver pops the oldest prefix and probes it
// 3. If that prefix was saturated, all its one-character children go to
//    the back of the queue
//
// Every child is its parent plus one character, and every parent is popped
// exactly once, so no prefix can ever be queued twice and no visited set
// is kept.
// =============================================================================

use std::collections::VecDeque;
use std::fmt;

/// A candidate query string
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Prefix(String);

impl Prefix {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Length in characters, not bytes
    pub fn len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// This prefix extended by one character
    pub fn child(&self, c: char) -> Prefix {
        let mut value = String::with_capacity(self.0.len() + c.len_utf8());
        value.push_str(&self.0);
        value.push(c);
        Prefix(value)
    }
}

impl fmt::Display for Prefix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<char> for Prefix {
    fn from(c: char) -> Self {
        Prefix(c.to_string())
    }
}

#[derive(Debug, Clone, Default)]
pub struct Frontier {
    queue: VecDeque<Prefix>,
}

impl Frontier {
    /// One seed per alphabet character, in alphabet order.
    ///
    /// With `max_prefix_length == 0` even the seeds are too long, so the
    /// frontier starts (and stays) empty.
    pub fn seeded(alphabet: &[char], max_prefix_length: usize) -> Self {
        let queue = if max_prefix_length == 0 {
            VecDeque::new()
        } else {
            alphabet.iter().copied().map(Prefix::from).collect()
        };
        Self { queue }
    }

    /// Removes the oldest prefix
    pub fn pop(&mut self) -> Option<Prefix> {
        self.queue.pop_front()
    }

    /// Queues every one-character child of `parent`, in alphabet order
    pub fn expand(&mut self, parent: &Prefix, alphabet: &[char]) {
        self.queue
            .extend(alphabet.iter().map(|&c| parent.child(c)));
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seeds_follow_alphabet_order() {
        let mut frontier = Frontier::seeded(&['c', 'a', 'b'], 3);
        assert_eq!(frontier.len(), 3);
        assert_eq!(frontier.pop(), Some(Prefix::new("c")));
        assert_eq!(frontier.pop(), Some(Prefix::new("a")));
        assert_eq!(frontier.pop(), Some(Prefix::new("b")));
        assert_eq!(frontier.pop(), None);
    }

    #[test]
    fn test_zero_depth_and_empty_alphabet_seed_nothing() {
        assert!(Frontier::seeded(&['a', 'b'], 0).is_empty());
        assert!(Frontier::seeded(&[], 6).is_empty());
    }

    #[test]
    fn test_expansion_is_fifo_after_existing_items() {
        let alphabet = ['a', 'b'];
        let mut frontier = Frontier::seeded(&alphabet, 2);
        let first = frontier.pop().unwrap();
        frontier.expand(&first, &alphabet);

        let order: Vec<String> = std::iter::from_fn(|| frontier.pop())
            .map(|p| p.to_string())
            .collect();
        assert_eq!(order, vec!["b", "aa", "ab"]);
    }

    #[test]
    fn test_prefix_length_counts_chars() {
        let prefix = Prefix::new("é").child('a');
        assert_eq!(prefix.len(), 2);
        assert_eq!(prefix.as_str(), "éa");
    }
}

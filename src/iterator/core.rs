use log::debug;

use crate::search::constants::{DIGIT_COUNT, MAX_DIGIT, MIN_DIGIT};

/// Lazily yields the combinations `CombinationSearch` would return, in the same order.
///
/// Recursion is replaced by a frame stack: the top frame is the next digit to try at the
/// current depth, and the frames beneath it belong to the shallower depths.
#[derive(Debug, Clone)]
pub struct CombinationIterator {
    len: usize,
    remaining: u32,
    candidate: Vec<u8>,
    frames: Vec<u8>,
    empty_match: bool,
}

impl CombinationIterator {
    pub fn new(target: u32, len: usize) -> Self {
        debug!(
            "Creating iterator for {}-digit combinations summing to {}",
            len, target
        );

        let mut frames = Vec::with_capacity(DIGIT_COUNT + 1);
        if len > 0 {
            frames.push(MIN_DIGIT);
        }

        Self {
            len,
            remaining: target,
            candidate: Vec::with_capacity(len.min(DIGIT_COUNT)),
            frames,
            // A zero-length request has no digits to choose, only the empty combination.
            empty_match: len == 0 && target == 0,
        }
    }

    /// Undo the most recent digit choice
    fn retreat(&mut self) {
        if let Some(digit) = self.candidate.pop() {
            self.remaining += u32::from(digit);
        }
    }
}

impl Iterator for CombinationIterator {
    type Item = Vec<u8>;

    fn next(&mut self) -> Option<Self::Item> {
        if std::mem::take(&mut self.empty_match) {
            return Some(Vec::new());
        }

        while let Some(digit) = self.frames.pop() {
            if digit > MAX_DIGIT || u32::from(digit) > self.remaining {
                self.retreat();
                continue;
            }

            self.frames.push(digit + 1);
            self.candidate.push(digit);
            self.remaining -= u32::from(digit);

            if self.candidate.len() < self.len {
                self.frames.push(digit + 1);
                continue;
            }

            let hit = (self.remaining == 0).then(|| self.candidate.clone());
            self.retreat();
            if hit.is_some() {
                return hit;
            }
        }
        None
    }
}

impl std::iter::FusedIterator for CombinationIterator {}

pub fn iter_combinations(target: u32, len: usize) -> CombinationIterator {
    CombinationIterator::new(target, len)
}

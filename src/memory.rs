// Sliding window over the most recent minority outcomes.
//
// The key packs the window oldest-first into the high bits, A = 0 and B = 1.
// Until M outcomes have been recorded the key only covers what was recorded,
// which is the same as left-padding the window with A.

use crate::choice::Choice;
use crate::error::{GameError, Result};
use std::collections::VecDeque;

pub const MAX_MEMORY_LENGTH: usize = 20;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceMemory {
    length: usize,
    window: VecDeque<Choice>,
}

impl ChoiceMemory {
    pub fn new(length: usize) -> Result<Self> {
        if length == 0 || length > MAX_MEMORY_LENGTH {
            return Err(GameError::InvalidMemoryLength {
                length,
                max: MAX_MEMORY_LENGTH,
            });
        }
        Ok(Self {
            length,
            window: VecDeque::with_capacity(length),
        })
    }

    pub fn length(&self) -> usize {
        self.length
    }

    pub fn key_space(&self) -> usize {
        1 << self.length
    }

    pub fn recorded(&self) -> impl Iterator<Item = Choice> + '_ {
        self.window.iter().copied()
    }

    pub fn current_key(&self) -> usize {
        self.window
            .iter()
            .fold(0, |key, choice| (key << 1) | choice.bit())
    }

    pub fn record(&mut self, choice: Choice) {
        if self.window.len() == self.length {
            self.window.pop_front();
        }
        self.window.push_back(choice);
    }
}

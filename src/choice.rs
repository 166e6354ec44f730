use serde::{Deserialize, Serialize};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Choice {
    A = 0,
    B = 1,
}

impl Choice {
    /// Bit used when a choice is packed into a memory key.
    pub fn bit(self) -> usize {
        self as usize
    }
}

impl fmt::Display for Choice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Choice::A => f.write_str("A"),
            Choice::B => f.write_str("B"),
        }
    }
}

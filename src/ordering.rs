use std::fmt;
use std::str::FromStr;

use crate::errors::HeapError;

use self::HeapOrdering::*;

/// Which end of the priority scale sits at the root of a heap.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum HeapOrdering {
    /// Smallest priority first.
    MinFirst,
    /// Largest priority first.
    MaxFirst,
}

impl Default for HeapOrdering {
    fn default() -> Self {
        MinFirst
    }
}

fn less<P: Ord>(a: &P, b: &P) -> bool {
    a < b
}

fn greater<P: Ord>(a: &P, b: &P) -> bool {
    a > b
}

impl HeapOrdering {
    /// The strict "a outranks b" predicate for this ordering.
    /// Equal priorities never outrank each other.
    pub fn outranks_fn<P: Ord>(self) -> fn(&P, &P) -> bool {
        match self {
            MinFirst => less::<P>,
            MaxFirst => greater::<P>,
        }
    }

    pub fn reversed(self) -> Self {
        match self {
            MinFirst => MaxFirst,
            MaxFirst => MinFirst,
        }
    }
}

impl FromStr for HeapOrdering {
    type Err = HeapError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "min" | "min-first" | "min_first" => Ok(MinFirst),
            "max" | "max-first" | "max_first" => Ok(MaxFirst),
            _ => Err(HeapError::UnknownOrdering(s.to_string())),
        }
    }
}

impl fmt::Display for HeapOrdering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MinFirst => write!(f, "min-first"),
            MaxFirst => write!(f, "max-first"),
        }
    }
}

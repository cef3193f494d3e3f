//! Latency points and their grouping key

use std::fmt;

use crate::chains::ChainNameResolver;

/// Which leg of a bridge transfer a duration was measured on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Source chain into the Poly relay chain
    SrcToPoly,
    /// Poly relay chain out to the destination chain
    PolyToDst,
}

impl Direction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::SrcToPoly => "Src->Poly",
            Direction::PolyToDst => "Poly->Dst",
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single measured transfer leg
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Point {
    pub chain: u64,
    pub duration: u64,
    pub direction: Direction,
}

impl Point {
    pub fn new(chain: u64, duration: u64, direction: Direction) -> Self {
        Point { chain, duration, direction }
    }

    pub fn key(&self) -> ChainKey {
        ChainKey {
            chain: self.chain,
            direction: self.direction,
        }
    }
}

/// Grouping key: one chart is drawn per key
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChainKey {
    pub chain: u64,
    pub direction: Direction,
}

impl ChainKey {
    /// Human readable name such as `Ethereum->Poly` or `Poly->Bsc`
    pub fn display_name(&self, names: &dyn ChainNameResolver) -> String {
        let name = names.chain_name(self.chain);
        match self.direction {
            Direction::SrcToPoly => format!("{}->Poly", name),
            Direction::PolyToDst => format!("Poly->{}", name),
        }
    }
}

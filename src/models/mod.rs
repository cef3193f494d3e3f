//! Data models for the latency charts
//!
//! Points are produced by the loader and folded into groups keyed by
//! chain and direction; each group becomes one chart.

pub mod point;

use std::collections::BTreeMap;

pub use point::{ChainKey, Direction, Point};

/// Points per chain key, each list in file order
pub type Groups = BTreeMap<ChainKey, Vec<Point>>;

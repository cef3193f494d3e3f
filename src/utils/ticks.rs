use std::ops::Range;

use plotters::coord::ranged1d::{DefaultFormatting, KeyPointHint, Ranged};
use plotters::coord::types::RangedCoordf64;

/// An axis tick position with its label
#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: f64,
    pub label: String,
}

/// Evenly spaced ticks from `min`, `n` of them, `(max - min) / n` apart.
///
/// The last tick sits one gap below `max`; `max` itself is never emitted.
/// Labels are the tick values truncated to integers.
pub fn ticks(min: f64, max: f64, n: usize) -> Vec<Tick> {
    let gap = (max - min) / n as f64;
    (0..n)
        .map(|i| {
            let value = gap * i as f64 + min;
            Tick {
                value,
                label: format!("{}", value as i64),
            }
        })
        .collect()
}

/// Label of the tick at `value`, or the truncated value when no tick sits there
pub fn tick_label(ticks: &[Tick], value: f64) -> String {
    ticks
        .iter()
        .find(|t| t.value == value)
        .map(|t| t.label.clone())
        .unwrap_or_else(|| format!("{}", value as i64))
}

/// A linear f64 axis whose key points are a fixed set of ticks
#[derive(Clone)]
pub struct TickAxis {
    inner: RangedCoordf64,
    ticks: Vec<Tick>,
}

impl TickAxis {
    /// Axis over `min..max` with `n` ticks from [`ticks`]
    pub fn new(min: f64, max: f64, n: usize) -> Self {
        TickAxis {
            inner: (min..max).into(),
            ticks: ticks(min, max, n),
        }
    }

    pub fn ticks(&self) -> &[Tick] {
        &self.ticks
    }
}

impl Ranged for TickAxis {
    type FormatOption = DefaultFormatting;
    type ValueType = f64;

    fn map(&self, value: &f64, limit: (i32, i32)) -> i32 {
        self.inner.map(value, limit)
    }

    fn key_points<Hint: KeyPointHint>(&self, _hint: Hint) -> Vec<f64> {
        self.ticks.iter().map(|t| t.value).collect()
    }

    fn range(&self) -> Range<f64> {
        self.inner.range()
    }
}

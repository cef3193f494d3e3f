//! Equal-width histogram binning

/// One histogram bar covering `[min, max)`
#[derive(Debug, Clone, PartialEq)]
pub struct Bin {
    pub min: f64,
    pub max: f64,
    pub count: u64,
}

#[derive(Debug, Clone)]
pub struct Histogram {
    bins: Vec<Bin>,
}

impl Histogram {
    /// Bucket `values` into `buckets` equal-width bins spanning their range.
    ///
    /// When every value is equal (or `buckets` is 0) a single bin of width 1
    /// starting at the value is used. The maximum value is counted in the
    /// last bin.
    pub fn new(values: &[f64], buckets: usize) -> Self {
        let (min, max) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)));
        if values.is_empty() {
            return Histogram { bins: Vec::new() };
        }

        let n = if buckets < 1 || max <= min { 1 } else { buckets };
        let mut width = (max - min) / n as f64;
        if width == 0.0 {
            width = 1.0;
        }

        let mut bins: Vec<Bin> = (0..n)
            .map(|i| Bin {
                min: min + i as f64 * width,
                max: min + (i + 1) as f64 * width,
                count: 0,
            })
            .collect();

        for &v in values {
            let idx = if v == max {
                n - 1
            } else {
                (((v - min) / width) as usize).min(n - 1)
            };
            bins[idx].count += 1;
        }

        Histogram { bins }
    }

    pub fn bins(&self) -> &[Bin] {
        &self.bins
    }

    pub fn max_count(&self) -> u64 {
        self.bins.iter().map(|b| b.count).max().unwrap_or(0)
    }

    /// Lower edge of the first bin to upper edge of the last
    pub fn x_range(&self) -> (f64, f64) {
        match (self.bins.first(), self.bins.last()) {
            (Some(first), Some(last)) => (first.min, last.max),
            _ => (0.0, 0.0),
        }
    }
}

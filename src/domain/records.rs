//! Historical AQI records
//!
//! Row types for the bundled country and city snapshots, plus the monthly
//! series arithmetic shared by profiles and the heatmap.

/// Month labels in snapshot column order
pub const MONTH_NAMES: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

/// Twelve months of AQI values with per-month gaps
///
/// Snapshots mark unmeasured months with a sentinel, so every month is
/// individually optional. Aggregation ignores missing months entirely;
/// zero-filling only happens in `display_values`, which exists for
/// presentation payloads that need a dense array.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct MonthlySeries {
    values: [Option<f64>; 12],
}

impl MonthlySeries {
    /// Creates a series from twelve optional values in January-first order
    pub fn new(values: [Option<f64>; 12]) -> Self {
        Self { values }
    }

    /// Value for a month, indexed 0 (Jan) through 11 (Dec)
    pub fn value(&self, month: usize) -> Option<f64> {
        self.values.get(month).copied().flatten()
    }

    /// Mean over the months that have a value
    ///
    /// A series with no measured months averages to 0.0 rather than NaN,
    /// so missing-data cities sort to the bottom instead of poisoning
    /// comparisons.
    pub fn average(&self) -> f64 {
        let valid: Vec<f64> = self.values.iter().filter_map(|v| *v).collect();
        if valid.is_empty() {
            0.0
        } else {
            valid.iter().sum::<f64>() / valid.len() as f64
        }
    }

    /// Dense array with missing months as 0.0, for display payloads
    pub fn display_values(&self) -> [f64; 12] {
        let mut out = [0.0; 12];
        for (i, value) in self.values.iter().enumerate() {
            out[i] = value.unwrap_or(0.0);
        }
        out
    }

    /// True when at least one month has a value
    pub fn has_data(&self) -> bool {
        self.values.iter().any(|v| v.is_some())
    }
}

/// One country row from the yearly ranking snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct CountryAqi {
    /// Position in the most-polluted ranking, when the snapshot has one
    pub rank: Option<u32>,

    pub country: String,

    /// Published yearly average, when the snapshot has one
    pub average: Option<f64>,

    pub months: MonthlySeries,
}

impl CountryAqi {
    /// Yearly average, falling back to the mean of measured months
    pub fn effective_average(&self) -> f64 {
        self.average.unwrap_or_else(|| self.months.average())
    }
}

/// One city row from the per-city snapshot
#[derive(Debug, Clone, PartialEq)]
pub struct CityAqi {
    pub city: String,
    pub state: String,
    pub months: MonthlySeries,
}

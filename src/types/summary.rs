use std::fmt;

use super::ConvertedTable;

/// One-line result of a run: how long the recording lasts and how many rows it has.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Summary {
    /// max(t) in seconds; `None` for an empty recording
    pub duration_s: Option<f64>,
    pub sample_count: usize,
}

impl Summary {
    pub fn new(duration_s: Option<f64>, sample_count: usize) -> Self {
        Self {
            duration_s,
            sample_count,
        }
    }

    pub fn from_table(table: &ConvertedTable) -> Self {
        Self::new(table.max_time(), table.len())
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // 空表没有最大值，输出小写 nan
        match self.duration_s {
            Some(duration) => write!(f, "Duração: {:.1}s | Amostras: {}", duration, self.sample_count),
            None => write!(f, "Duração: nans | Amostras: {}", self.sample_count),
        }
    }
}

use super::RawSample;

/// Rows exactly as they were read from the CSV file.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleTable {
    rows: Vec<RawSample>,
}

impl SampleTable {
    pub fn new(rows: Vec<RawSample>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[RawSample] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

/// The raw rows plus the columns derived from them, one entry per row.
///
/// Physical columns are stored column-wise because that is how the plots
/// consume them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConvertedTable {
    pub(crate) raw: SampleTable,
    /// Elapsed time in seconds.
    pub t: Vec<f64>,
    /// Acceleration in g.
    pub ax: Vec<f64>,
    pub ay: Vec<f64>,
    pub az: Vec<f64>,
    /// Angular rate in °/s.
    pub gx: Vec<f64>,
    pub gy: Vec<f64>,
    pub gz: Vec<f64>,
}

impl ConvertedTable {
    pub fn raw_table(&self) -> &SampleTable {
        &self.raw
    }

    pub fn len(&self) -> usize {
        self.t.len()
    }

    pub fn is_empty(&self) -> bool {
        self.t.is_empty()
    }

    pub fn accel_columns(&self) -> [&[f64]; 3] {
        [&self.ax, &self.ay, &self.az]
    }

    pub fn gyro_columns(&self) -> [&[f64]; 3] {
        [&self.gx, &self.gy, &self.gz]
    }

    /// 最大时间值；空表返回 None
    pub fn max_time(&self) -> Option<f64> {
        self.t.iter().copied().fold(None, |acc, t| match acc {
            Some(max) => Some(f64::max(max, t)),
            None => Some(t),
        })
    }
}

use log::info;

use crate::config::CalibrationConfig;
use crate::types::{ConvertedTable, RawSample, SampleTable};

/// Turns raw LSB readings into physical units.
///
/// Every derived value depends only on its own row, divided by a fixed
/// calibration constant. No rounding happens here.
#[derive(Debug, Clone)]
pub struct UnitConverter {
    sample_rate_hz: f64,
    accel_lsb_per_g: f64,
    gyro_lsb_per_dps: f64,
}

impl UnitConverter {
    pub fn new(calibration: &CalibrationConfig) -> Self {
        Self {
            sample_rate_hz: calibration.sample_rate_hz,
            accel_lsb_per_g: calibration.accel_lsb_per_g,
            gyro_lsb_per_dps: calibration.gyro_lsb_per_dps,
        }
    }

    pub fn convert(&self, table: &SampleTable) -> ConvertedTable {
        let rows = table.rows();
        let converted = ConvertedTable {
            raw: table.clone(),
            t: column(rows, |row| row.sample_index as f64 / self.sample_rate_hz),
            ax: column(rows, |row| row.accel_x as f64 / self.accel_lsb_per_g),
            ay: column(rows, |row| row.accel_y as f64 / self.accel_lsb_per_g),
            az: column(rows, |row| row.accel_z as f64 / self.accel_lsb_per_g),
            gx: column(rows, |row| row.gyro_x as f64 / self.gyro_lsb_per_dps),
            gy: column(rows, |row| row.gyro_y as f64 / self.gyro_lsb_per_dps),
            gz: column(rows, |row| row.gyro_z as f64 / self.gyro_lsb_per_dps),
        };

        info!(
            "Converted {} samples (rate {} Hz, accel {} LSB/g, gyro {} LSB/(°/s))",
            converted.len(),
            self.sample_rate_hz,
            self.accel_lsb_per_g,
            self.gyro_lsb_per_dps
        );
        converted
    }
}

fn column<F: Fn(&RawSample) -> f64>(rows: &[RawSample], value: F) -> Vec<f64> {
    rows.iter().map(value).collect()
}

impl Default for UnitConverter {
    fn default() -> Self {
        Self::new(&CalibrationConfig::default())
    }
}

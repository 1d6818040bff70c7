use std::path::Path;

use crate::config::AppConfig;
use crate::plotter::ImuFigure;
use crate::types::{ConvertedTable, Summary};

/// 查看器状态：数据加载完成后只读
#[derive(Debug)]
pub struct ViewerState {
    pub file_name: String,
    pub summary: Summary,
    pub sample_rate_hz: f64,
    pub figure: ImuFigure,
}

impl ViewerState {
    pub fn new(path: &Path, table: &ConvertedTable, config: &AppConfig) -> Self {
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());

        Self {
            file_name,
            summary: Summary::from_table(table),
            sample_rate_hz: config.calibration.sample_rate_hz,
            figure: ImuFigure::new(table, &config.plot),
        }
    }

    /// 状态栏上的时长文字
    pub fn duration_text(&self) -> String {
        match self.summary.duration_s {
            Some(duration) => format!("{:.1}s ({})", duration, crate::utils::format_mm_ss(duration)),
            None => "no samples".to_string(),
        }
    }
}

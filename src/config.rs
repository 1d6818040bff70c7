use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 应用配置管理模块
/// 传感器标定参数、窗口与绘图选项集中在这里，提供默认值和配置验证

/// 默认配置文件名（工作目录下）
pub const DEFAULT_CONFIG_FILE: &str = "sense_plot.toml";

/// 主配置结构
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub window: WindowConfig,
    pub calibration: CalibrationConfig,
    pub plot: PlotConfig,
}

/// 窗口配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub vsync: bool,
}

/// 传感器标定参数
///
/// 采样率是实验测得的近似值（记录固件约每 10ms 取一次样），存在误差，
/// 不是标定结果。两个 LSB 系数对应 MPU6050 的 ±2g / ±250°/s 量程。
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CalibrationConfig {
    pub sample_rate_hz: f64,
    pub accel_lsb_per_g: f64,
    pub gyro_lsb_per_dps: f64,
}

/// 绘图配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub line_width: f32,
    pub show_grid: bool,
    pub show_legend: bool,
    pub colors: PlotColors,
}

/// 绘图颜色配置
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotColors {
    pub x_axis: [u8; 3],
    pub y_axis: [u8; 3],
    pub z_axis: [u8; 3],
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1000.0,
            height: 800.0,
            title: "SensePlot - IMU CSV Viewer".to_string(),
            vsync: true,
        }
    }
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            sample_rate_hz: 75.0,
            accel_lsb_per_g: 16384.0,
            gyro_lsb_per_dps: 131.0,
        }
    }
}

impl Default for PlotConfig {
    fn default() -> Self {
        Self {
            line_width: 1.0,
            show_grid: true,
            show_legend: true,
            colors: PlotColors::default(),
        }
    }
}

impl Default for PlotColors {
    fn default() -> Self {
        Self {
            x_axis: [255, 0, 0],    // 红色
            y_axis: [0, 128, 0],    // 绿色
            z_axis: [0, 0, 255],    // 蓝色
        }
    }
}

impl AppConfig {
    /// 从文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(ConfigError::IoError)?;

        let config: AppConfig = toml::from_str(&content)
            .map_err(ConfigError::ParseError)?;

        config.validate()?;
        Ok(config)
    }

    /// 保存配置到文件
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let content = toml::to_string_pretty(self)
            .map_err(ConfigError::SerializeError)?;

        std::fs::write(path, content)
            .map_err(ConfigError::IoError)?;

        Ok(())
    }

    /// 验证配置的有效性
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.window.width <= 0.0 || self.window.height <= 0.0 {
            return Err(ConfigError::ValidationError("Window dimensions must be positive".to_string()));
        }

        let divisors = [
            ("calibration.sample_rate_hz", self.calibration.sample_rate_hz),
            ("calibration.accel_lsb_per_g", self.calibration.accel_lsb_per_g),
            ("calibration.gyro_lsb_per_dps", self.calibration.gyro_lsb_per_dps),
        ];
        for (name, value) in divisors {
            // 除数必须是有限正数
            if !value.is_finite() || value <= 0.0 {
                return Err(ConfigError::ValidationError(format!("{} must be a positive number, got {}", name, value)));
            }
        }

        if self.plot.line_width <= 0.0 {
            return Err(ConfigError::ValidationError("Plot line width must be positive".to_string()));
        }

        Ok(())
    }

    /// 按优先级解析配置：显式路径 > 工作目录下的默认文件 > 内置默认值
    pub fn resolve(explicit: Option<&Path>) -> Result<(Self, Option<PathBuf>), ConfigError> {
        if let Some(path) = explicit {
            return Ok((Self::load_from_file(path)?, Some(path.to_path_buf())));
        }

        let default_path = PathBuf::from(DEFAULT_CONFIG_FILE);
        if default_path.is_file() {
            let config = Self::load_from_file(&default_path)?;
            return Ok((config, Some(default_path)));
        }

        Ok((Self::default(), None))
    }
}

/// 配置错误类型
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    IoError(std::io::Error),
    #[error("Parse error: {0}")]
    ParseError(toml::de::Error),
    #[error("Serialize error: {0}")]
    SerializeError(toml::ser::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_recorder_constants() {
        let config = AppConfig::default();
        assert_eq!(config.calibration.sample_rate_hz, 75.0);
        assert_eq!(config.calibration.accel_lsb_per_g, 16384.0);
        assert_eq!(config.calibration.gyro_lsb_per_dps, 131.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_falls_back_to_defaults() {
        let config: AppConfig = toml::from_str("[calibration]\nsample_rate_hz = 100.0\n").unwrap();
        assert_eq!(config.calibration.sample_rate_hz, 100.0);
        assert_eq!(config.calibration.gyro_lsb_per_dps, 131.0);
        assert_eq!(config.plot.colors.x_axis, [255, 0, 0]);
    }

    #[test]
    fn rejects_non_positive_divisors() {
        let mut config = AppConfig::default();
        config.calibration.accel_lsb_per_g = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));

        let mut config = AppConfig::default();
        config.calibration.sample_rate_hz = f64::NAN;
        assert!(matches!(config.validate(), Err(ConfigError::ValidationError(_))));
    }

    #[test]
    fn save_then_load_keeps_calibration() {
        let path = std::env::temp_dir().join(format!("sense_plot_cfg_{}.toml", std::process::id()));
        let mut config = AppConfig::default();
        config.calibration.sample_rate_hz = 74.5;
        config.save_to_file(&path).unwrap();

        let loaded = AppConfig::load_from_file(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded.calibration.sample_rate_hz, 74.5);
        assert_eq!(loaded.window.title, config.window.title);
    }

    #[test]
    fn invalid_file_is_rejected_on_load() {
        let path = std::env::temp_dir().join(format!("sense_plot_bad_cfg_{}.toml", std::process::id()));
        std::fs::write(&path, "[calibration]\ngyro_lsb_per_dps = -1.0\n").unwrap();
        let result = AppConfig::load_from_file(&path);
        std::fs::remove_file(&path).ok();
        assert!(matches!(result, Err(ConfigError::ValidationError(_))));
    }
}

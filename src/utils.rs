use std::path::{Path, PathBuf};

/// 解析记录仪生成的文件名 `data_NNNN.csv`，返回编号
pub fn parse_recording_number(file_name: &str) -> Option<u32> {
    let digits = file_name.strip_prefix("data_")?.strip_suffix(".csv")?;
    if digits.is_empty() || !digits.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok()
}

/// 在目录中查找编号最大的 `data_NNNN.csv`
pub fn find_latest_recording(dir: &Path) -> Option<PathBuf> {
    let entries = std::fs::read_dir(dir).ok()?;

    entries
        .filter_map(|entry| entry.ok())
        .filter(|entry| entry.path().is_file())
        .filter_map(|entry| {
            let number = parse_recording_number(entry.file_name().to_str()?)?;
            Some((number, entry.path()))
        })
        .max_by_key(|(number, _)| *number)
        .map(|(_, path)| path)
}

/// 将秒数格式化为 mm:ss，与记录仪屏幕上的格式一致
pub fn format_mm_ss(seconds: f64) -> String {
    if !seconds.is_finite() || seconds < 0.0 {
        return "--:--".to_string();
    }
    let total = seconds.floor() as u64;
    format!("{:02}:{:02}", total / 60, total % 60)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognises_recorder_file_names() {
        assert_eq!(parse_recording_number("data_0007.csv"), Some(7));
        assert_eq!(parse_recording_number("data_1234.csv"), Some(1234));
        assert_eq!(parse_recording_number("data_.csv"), None);
        assert_eq!(parse_recording_number("data_12a4.csv"), None);
        assert_eq!(parse_recording_number("other_0001.csv"), None);
        assert_eq!(parse_recording_number("data_0001.txt"), None);
    }

    #[test]
    fn picks_highest_numbered_recording() {
        let dir = std::env::temp_dir().join(format!("sense_plot_latest_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        for name in ["data_0002.csv", "data_0010.csv", "data_0009.csv", "notes.csv"] {
            std::fs::write(dir.join(name), "numero_amostra\n").unwrap();
        }

        let latest = find_latest_recording(&dir);
        std::fs::remove_dir_all(&dir).ok();
        assert_eq!(latest.unwrap().file_name().unwrap(), "data_0010.csv");
    }

    #[test]
    fn no_recordings_means_no_default() {
        let dir = std::env::temp_dir().join(format!("sense_plot_empty_{}", std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        let latest = find_latest_recording(&dir);
        std::fs::remove_dir_all(&dir).ok();
        assert!(latest.is_none());
    }

    #[test]
    fn formats_minutes_and_seconds() {
        assert_eq!(format_mm_ss(0.0), "00:00");
        assert_eq!(format_mm_ss(1.9867), "00:01");
        assert_eq!(format_mm_ss(125.5), "02:05");
        assert_eq!(format_mm_ss(f64::NAN), "--:--");
    }
}

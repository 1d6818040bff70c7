use serde::Deserialize;

/// CSV 表头中必须出现的列名（顺序不限）
pub const REQUIRED_COLUMNS: [&str; 7] = [
    "numero_amostra",
    "accel_x",
    "accel_y",
    "accel_z",
    "giro_x",
    "giro_y",
    "giro_z",
];

/// 一行原始 IMU 读数，单位是传感器原始 LSB
#[derive(Deserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct RawSample {
    #[serde(rename = "numero_amostra")]
    pub sample_index: i64,
    pub accel_x: i32,
    pub accel_y: i32,
    pub accel_z: i32,
    #[serde(rename = "giro_x")]
    pub gyro_x: i32,
    #[serde(rename = "giro_y")]
    pub gyro_y: i32,
    #[serde(rename = "giro_z")]
    pub gyro_z: i32,
}

#[cfg(test)]
impl RawSample {
    pub fn new(sample_index: i64, accel: [i32; 3], gyro: [i32; 3]) -> Self {
        Self {
            sample_index,
            accel_x: accel[0],
            accel_y: accel[1],
            accel_z: accel[2],
            gyro_x: gyro[0],
            gyro_y: gyro[1],
            gyro_z: gyro[2],
        }
    }
}

use egui::{Color32, Vec2b};
use egui_plot::{Legend, Line, Plot, PlotPoints};

use crate::config::PlotConfig;
use crate::types::ConvertedTable;

pub const TIME_AXIS_LABEL: &str = "Time (seconds)";
const AXIS_NAMES: [&str; 3] = ["X", "Y", "Z"];
// 两张图共用同一个时间轴
const TIME_AXIS_GROUP: &str = "imu_time_axis";

/// 一张图的固定文字
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartSpec {
    pub title: &'static str,
    pub y_label: &'static str,
}

pub const ACCEL_CHART: ChartSpec = ChartSpec {
    title: "Accelerometer",
    y_label: "Acceleration (g)",
};

pub const GYRO_CHART: ChartSpec = ChartSpec {
    title: "Gyroscope",
    y_label: "Rotation (°/s)",
};

/// 一条曲线：名称、颜色和 (t, value) 点
#[derive(Debug, Clone, PartialEq)]
pub struct AxisSeries {
    pub name: &'static str,
    pub color: Color32,
    pub points: Vec<[f64; 2]>,
}

/// 为 X/Y/Z 三个分量构建曲线，横轴都是 t
pub fn axis_series(t: &[f64], columns: [&[f64]; 3], config: &PlotConfig) -> [AxisSeries; 3] {
    let colors = [
        config.colors.x_axis,
        config.colors.y_axis,
        config.colors.z_axis,
    ];

    std::array::from_fn(|i| AxisSeries {
        name: AXIS_NAMES[i],
        color: Color32::from_rgb(colors[i][0], colors[i][1], colors[i][2]),
        points: t
            .iter()
            .zip(columns[i])
            .map(|(&time, &value)| [time, value])
            .collect(),
    })
}

/// 纵轴刻度标签：按数量级选择小数位数
fn format_y_tick(value: f64) -> String {
    let abs_value = value.abs();
    if abs_value >= 1000.0 {
        format!("{:.1e}", value)
    } else if abs_value >= 100.0 {
        format!("{:.0}", value)
    } else if abs_value >= 10.0 {
        format!("{:.1}", value)
    } else {
        format!("{:.2}", value)
    }
}

/// 加速度计 + 陀螺仪两张上下排列的时间序列图
#[derive(Debug, Clone)]
pub struct ImuFigure {
    accel: [AxisSeries; 3],
    gyro: [AxisSeries; 3],
}

impl ImuFigure {
    pub fn new(table: &ConvertedTable, config: &PlotConfig) -> Self {
        Self {
            accel: axis_series(&table.t, table.accel_columns(), config),
            gyro: axis_series(&table.t, table.gyro_columns(), config),
        }
    }

    pub fn accel(&self) -> &[AxisSeries; 3] {
        &self.accel
    }

    pub fn gyro(&self) -> &[AxisSeries; 3] {
        &self.gyro
    }

    pub fn ui(&self, ui: &mut egui::Ui, config: &PlotConfig) {
        // 两个标题的高度和间距先扣除，剩下的高度平分
        let reserved = 2.0 * (ui.text_style_height(&egui::TextStyle::Heading) + 3.0 * ui.spacing().item_spacing.y);
        let plot_height = ((ui.available_height() - reserved) / 2.0).max(120.0);

        ui.vertical(|ui| {
            self.plot_chart(ui, ACCEL_CHART, self.accel(), plot_height, config);
            let gap = ui.spacing().item_spacing.y;
            ui.add_space(gap);
            self.plot_chart(ui, GYRO_CHART, self.gyro(), plot_height, config);
        });
    }

    fn plot_chart(
        &self,
        ui: &mut egui::Ui,
        spec: ChartSpec,
        series: &[AxisSeries; 3],
        height: f32,
        config: &PlotConfig,
    ) {
        ui.heading(spec.title);

        let mut plot = Plot::new(spec.title)
            .height(height)
            .x_axis_label(TIME_AXIS_LABEL)
            .y_axis_label(spec.y_label)
            .x_axis_formatter(|v, _| format!("{:.1}", v.value))
            .y_axis_formatter(|v, _| format_y_tick(v.value))
            .show_grid(config.show_grid)
            .link_axis(TIME_AXIS_GROUP, Vec2b::new(true, false));

        if config.show_legend {
            plot = plot.legend(Legend::default());
        }

        plot.show(ui, |plot_ui| {
            for axis in series.iter().filter(|axis| !axis.points.is_empty()) {
                plot_ui.line(
                    Line::new(axis.name, PlotPoints::from(axis.points.clone()))
                        .color(axis.color)
                        .width(config.line_width),
                );
            }
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::converter::UnitConverter;
    use crate::types::{RawSample, SampleTable};

    fn converted() -> ConvertedTable {
        let table = SampleTable::new(vec![
            RawSample::new(0, [0, 0, 16384], [0, 0, 0]),
            RawSample::new(75, [16384, 0, -16384], [131, -131, 0]),
            RawSample::new(150, [8192, -8192, 0], [262, 0, -131]),
        ]);
        UnitConverter::default().convert(&table)
    }

    #[test]
    fn series_are_named_and_coloured_xyz() {
        let figure = ImuFigure::new(&converted(), &PlotConfig::default());

        for series in [figure.accel(), figure.gyro()] {
            let names: Vec<_> = series.iter().map(|s| s.name).collect();
            assert_eq!(names, ["X", "Y", "Z"]);
            assert_eq!(series[0].color, Color32::from_rgb(255, 0, 0));
            assert_eq!(series[1].color, Color32::from_rgb(0, 128, 0));
            assert_eq!(series[2].color, Color32::from_rgb(0, 0, 255));
        }
    }

    #[test]
    fn points_pair_time_with_values() {
        let figure = ImuFigure::new(&converted(), &PlotConfig::default());

        assert_eq!(figure.accel()[0].points, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 0.5]]);
        assert_eq!(figure.accel()[2].points, vec![[0.0, 1.0], [1.0, -1.0], [2.0, 0.0]]);
        assert_eq!(figure.gyro()[0].points, vec![[0.0, 0.0], [1.0, 1.0], [2.0, 2.0]]);
        assert_eq!(figure.gyro()[1].points, vec![[0.0, 0.0], [1.0, -1.0], [2.0, 0.0]]);
    }

    #[test]
    fn both_charts_share_time_values() {
        let figure = ImuFigure::new(&converted(), &PlotConfig::default());
        let times = |series: &AxisSeries| series.points.iter().map(|p| p[0]).collect::<Vec<_>>();

        for (a, g) in figure.accel().iter().zip(figure.gyro()) {
            assert_eq!(times(a), times(g));
        }
    }

    #[test]
    fn empty_table_has_empty_series() {
        let table = UnitConverter::default().convert(&SampleTable::default());
        let figure = ImuFigure::new(&table, &PlotConfig::default());
        assert!(figure.accel().iter().chain(figure.gyro()).all(|s| s.points.is_empty()));
    }

    #[test]
    fn configured_colours_are_used() {
        let mut config = PlotConfig::default();
        config.colors.y_axis = [10, 20, 30];
        let series = axis_series(&[0.0], [&[1.0][..], &[2.0][..], &[3.0][..]], &config);
        assert_eq!(series[1].color, Color32::from_rgb(10, 20, 30));
        assert_eq!(series[2].points, vec![[0.0, 3.0]]);
    }

    #[test]
    fn chart_labels() {
        assert_eq!(ACCEL_CHART.title, "Accelerometer");
        assert_eq!(ACCEL_CHART.y_label, "Acceleration (g)");
        assert_eq!(GYRO_CHART.title, "Gyroscope");
        assert_eq!(GYRO_CHART.y_label, "Rotation (°/s)");
    }

    #[test]
    fn y_ticks_scale_with_magnitude() {
        assert_eq!(format_y_tick(0.5), "0.50");
        assert_eq!(format_y_tick(-12.34), "-12.3");
        assert_eq!(format_y_tick(250.0), "250");
    }
}

use eframe::egui;
use crate::app::sensor_app::SensorPlotApp;

pub fn render_status_bar(app: &SensorPlotApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("status_bar")
        .min_height(30.0)
        .show(ctx, |ui| {
            ui.add_space(5.0);
            ui.horizontal(|ui| {
                ui.label("File:");
                ui.colored_label(egui::Color32::from_rgb(0, 100, 200), &app.state.file_name);

                ui.separator();
                ui.label(format!("Samples: {}", app.state.summary.sample_count));

                ui.separator();
                let duration_color = if app.state.summary.duration_s.is_some() {
                    egui::Color32::from_rgb(0, 150, 0) // 绿色
                } else {
                    egui::Color32::from_rgb(150, 0, 0) // 红色
                };
                ui.label("Duration:");
                ui.colored_label(duration_color, app.state.duration_text());

                ui.separator();
                // 采样率为实验值
                ui.label(format!("Sample Rate: {:.1} Hz (approx.)", app.state.sample_rate_hz))
                    .on_hover_text("Experimentally measured sampling rate, not a calibrated value");
            });
            ui.add_space(5.0);
        });
}

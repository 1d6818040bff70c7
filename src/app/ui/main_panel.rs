use eframe::egui;
use crate::app::sensor_app::SensorPlotApp;

pub fn render_main_panel(app: &SensorPlotApp, ctx: &egui::Context) {
    egui::CentralPanel::default().show(ctx, |ui| {
        if app.state.summary.sample_count == 0 {
            ui.colored_label(egui::Color32::GRAY, "The file has a header but no samples");
            ui.add_space(5.0);
        }

        app.state.figure.ui(ui, &app.config.plot);
    });
}

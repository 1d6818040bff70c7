use std::path::Path;

use eframe::{egui, Frame};
use log::info;

use crate::config::AppConfig;
use crate::error::{AppError, Result};
use crate::types::ConvertedTable;
use super::state::ViewerState;

pub struct SensorPlotApp {
    pub state: ViewerState,
    pub config: AppConfig,
}

impl SensorPlotApp {
    pub fn new(state: ViewerState, config: AppConfig) -> Self {
        Self { state, config }
    }
}

impl eframe::App for SensorPlotApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut Frame) {
        // 设置明亮模式主题
        ctx.set_visuals(egui::Visuals::light());

        crate::app::ui::render_status_bar(self, ctx);
        crate::app::ui::render_main_panel(self, ctx);
    }
}

/// 打开窗口显示两张图，窗口关闭后返回
pub fn run_viewer(path: &Path, table: &ConvertedTable, config: &AppConfig) -> Result<()> {
    let state = ViewerState::new(path, table, config);
    let app_config = config.clone();

    let options = eframe::NativeOptions {
        vsync: config.window.vsync,
        renderer: eframe::Renderer::Glow,
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window.title.clone())
            .with_inner_size([config.window.width, config.window.height])
            .with_resizable(true),
        ..Default::default()
    };

    info!("Opening viewer window for {}", state.file_name);
    eframe::run_native(
        &config.window.title,
        options,
        Box::new(move |_cc| Ok(Box::new(SensorPlotApp::new(state, app_config)))),
    )
    .map_err(|e| AppError::Gui(e.to_string()))?;

    info!("Viewer window closed");
    Ok(())
}

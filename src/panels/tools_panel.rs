use eframe::egui;

use crate::WhiteboardApp;
use crate::components::ToolButton;
use crate::tool::Tool;

pub fn tools_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::TopBottomPanel::top("tools_panel").show(ctx, |ui| {
        ui.horizontal(|ui| {
            let active_tool = app.board().tool();
            for tool in Tool::ALL {
                if ToolButton::new(tool, tool == active_tool).show(ui).clicked() {
                    log::info!("Tool selected from UI: {}", tool.name());
                    app.set_tool(tool);
                }
            }

            ui.separator();

            let mut fill = app.board().fill_color();
            let picker = egui::color_picker::color_edit_button_srgba(
                ui,
                &mut fill,
                egui::color_picker::Alpha::Opaque,
            );
            if picker.on_hover_text("Fill color").changed() {
                app.board_mut().set_fill_color(fill);
            }

            ui.separator();

            let exporting = app.exporter().is_pending();
            if ui
                .add_enabled(!exporting, egui::Button::new("📥"))
                .on_hover_text(format!("Export as {}", app.exporter().file_name()))
                .clicked()
            {
                app.request_export(ctx);
            }

            if let Some(status) = app.status() {
                ui.label(status);
            }
        });
    });
}

use eframe::egui;

use crate::WhiteboardApp;

pub fn central_panel(app: &mut WhiteboardApp, ctx: &egui::Context) {
    egui::CentralPanel::default()
        .frame(egui::Frame::none())
        .show(ctx, |ui| {
            let (response, painter) =
                ui.allocate_painter(ui.available_size(), egui::Sense::click_and_drag());
            let canvas_rect = response.rect;

            // Popups (e.g. the color picker) may cover the canvas
            app.handle_input(ctx, canvas_rect, response.hovered());

            app.renderer().render(&painter, canvas_rect, app.board());

            app.poll_export(ctx, canvas_rect);
        });
}

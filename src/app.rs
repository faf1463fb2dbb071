use crate::config::BoardConfig;
use crate::export::Exporter;
use crate::input::{InputEvent, InputHandler, PointerRouter, route_event};
use crate::panels;
use crate::renderer::Renderer;
use crate::state::Board;
use crate::tool::Tool;

/// The whiteboard application.
///
/// Owns the board and everything that turns egui input into board updates.
/// Nothing is persisted: the board lives as long as the window.
pub struct WhiteboardApp {
    board: Board,
    renderer: Renderer,
    input: InputHandler,
    router: PointerRouter,
    exporter: Exporter,
    status: Option<String>,
}

impl Default for WhiteboardApp {
    fn default() -> Self {
        Self::from_config(&BoardConfig::default())
    }
}

impl WhiteboardApp {
    /// Called once before the first frame.
    pub fn new(cc: &eframe::CreationContext<'_>, config: BoardConfig) -> Self {
        cc.egui_ctx.set_visuals(egui::Visuals::light());
        Self::from_config(&config)
    }

    /// Build the app from a config, falling back to defaults for invalid entries
    pub fn from_config(config: &BoardConfig) -> Self {
        let board = config.new_board().unwrap_or_else(|err| {
            log::warn!("Using default board settings: {}", err);
            Board::default()
        });
        let style = config.shape_style().unwrap_or_else(|err| {
            log::warn!("Using default shape style: {}", err);
            Default::default()
        });
        let background = config.background_color().unwrap_or_else(|err| {
            log::warn!("Using default background: {}", err);
            egui::Color32::WHITE
        });

        Self {
            board,
            renderer: Renderer::new(style, background),
            input: InputHandler::default(),
            router: PointerRouter::default(),
            exporter: Exporter::new(config.export_file_name.clone()),
            status: None,
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    pub fn exporter(&self) -> &Exporter {
        &self.exporter
    }

    /// Outcome of the last export, shown in the toolbar
    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn set_tool(&mut self, tool: Tool) {
        self.router = PointerRouter::default();
        self.board.set_tool(tool);
    }

    /// Feed this frame's pointer and keyboard input to the board.
    ///
    /// `canvas_hovered` is false when something is drawn over the canvas, in
    /// which case presses do not start gestures.
    pub fn handle_input(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect, canvas_hovered: bool) {
        self.input.set_canvas_rect(canvas_rect);
        let wants_keyboard = ctx.wants_keyboard_input();

        for mut event in self.input.process_input(ctx) {
            match &mut event {
                InputEvent::PointerDown { location, .. } if !canvas_hovered => {
                    location.is_in_canvas = false;
                }
                InputEvent::KeyDown { .. } if wants_keyboard => continue,
                _ => {}
            }

            if route_event(&event, &mut self.board, &mut self.router) {
                ctx.request_repaint();
            }
        }
    }

    pub fn request_export(&mut self, ctx: &egui::Context) {
        self.status = None;
        self.exporter.request(ctx);
        ctx.request_repaint();
    }

    /// Complete an export once eframe delivered the screenshot
    pub fn poll_export(&mut self, ctx: &egui::Context, canvas_rect: egui::Rect) {
        match self.exporter.poll(ctx, canvas_rect) {
            Some(Ok(bytes)) => {
                log::info!("Exported {} ({} bytes)", self.exporter.file_name(), bytes);
                self.status = Some(format!("Saved {}", self.exporter.file_name()));
            }
            Some(Err(err)) => {
                log::error!("Export failed: {}", err);
                self.status = Some(format!("Export failed: {}", err));
            }
            None if self.exporter.is_pending() => ctx.request_repaint(),
            None => {}
        }
    }
}

impl eframe::App for WhiteboardApp {
    /// Called each time the UI needs repainting, which may be many times per second.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        panels::tools_panel(self, ctx);
        panels::central_panel(self, ctx);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_config_falls_back_to_defaults() {
        let config = BoardConfig {
            default_fill: "not a color".to_owned(),
            ..Default::default()
        };
        let app = WhiteboardApp::from_config(&config);
        assert_eq!(app.board().fill_color(), crate::state::DEFAULT_FILL);
        assert_eq!(app.exporter().file_name(), "image.png");
    }

    #[test]
    fn test_config_fill_reaches_board() {
        let config = BoardConfig {
            default_fill: "#0000ff".to_owned(),
            default_size: 35.0,
            ..Default::default()
        };
        let app = WhiteboardApp::from_config(&config);
        assert_eq!(app.board().fill_color(), egui::Color32::from_rgb(0, 0, 255));
        assert_eq!(app.board().default_size(), 35.0);
    }
}

//! Saving the canvas as a PNG.
//!
//! eframe is asked for a screenshot of the viewport; when it arrives the
//! canvas area is cut out, encoded and handed to the platform: written to
//! the working directory natively, offered as a download in the browser.
use std::io::Cursor;

use egui::{Color32, ColorImage, Pos2, Rect};

use crate::error::{ExportError, ExportResult};

/// Tracks an export between the screenshot request and its arrival
#[derive(Debug)]
pub struct Exporter {
    file_name: String,
    pending: bool,
}

impl Exporter {
    pub fn new(file_name: impl Into<String>) -> Self {
        Self {
            file_name: file_name.into(),
            pending: false,
        }
    }

    pub fn file_name(&self) -> &str {
        &self.file_name
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    /// Ask eframe for a screenshot of the viewport
    pub fn request(&mut self, ctx: &egui::Context) {
        if self.pending {
            return;
        }
        log::info!("Export requested: {}", self.file_name);
        self.pending = true;
        ctx.send_viewport_cmd(egui::ViewportCommand::Screenshot(Default::default()));
    }

    /// Finish a pending export once the screenshot has arrived.
    ///
    /// Returns the PNG size in bytes, or `None` while nothing is ready.
    pub fn poll(&mut self, ctx: &egui::Context, canvas: Rect) -> Option<ExportResult<usize>> {
        if !self.pending {
            return None;
        }

        let screenshot = ctx.input(|i| {
            i.raw.events.iter().find_map(|event| match event {
                egui::Event::Screenshot { image, .. } => Some(image.clone()),
                _ => None,
            })
        })?;
        self.pending = false;

        let result = crop(&screenshot, canvas, ctx.pixels_per_point())
            .and_then(|image| encode_png(&image))
            .and_then(|png| {
                deliver(&png, &self.file_name)?;
                Ok(png.len())
            });
        Some(result)
    }
}

/// Cut `region` (in points) out of a screenshot taken at `pixels_per_point`.
///
/// The region is clamped to the screenshot. A region that ends up empty
/// yields [`ExportError::EmptyCanvas`].
pub fn crop(screenshot: &ColorImage, region: Rect, pixels_per_point: f32) -> ExportResult<ColorImage> {
    let [width, height] = screenshot.size;
    let bounds = Rect::from_min_max(Pos2::ZERO, Pos2::new(width as f32, height as f32));
    let region = Rect::from_min_max(
        (region.min.to_vec2() * pixels_per_point).to_pos2().round(),
        (region.max.to_vec2() * pixels_per_point).to_pos2().round(),
    )
    .intersect(bounds);

    if !region.is_positive() {
        return Err(ExportError::EmptyCanvas);
    }

    let (min_x, min_y) = (region.min.x as usize, region.min.y as usize);
    let (max_x, max_y) = (region.max.x as usize, region.max.y as usize);

    let mut pixels = Vec::with_capacity((max_x - min_x) * (max_y - min_y));
    for row in min_y..max_y {
        let start = row * width;
        pixels.extend_from_slice(&screenshot.pixels[start + min_x..start + max_x]);
    }

    Ok(ColorImage {
        size: [max_x - min_x, max_y - min_y],
        pixels,
    })
}

/// Encode an image as PNG bytes
pub fn encode_png(image: &ColorImage) -> ExportResult<Vec<u8>> {
    let [width, height] = image.size;
    if width == 0 || height == 0 {
        return Err(ExportError::EmptyCanvas);
    }

    let rgba: Vec<u8> = image
        .pixels
        .iter()
        .flat_map(Color32::to_srgba_unmultiplied)
        .collect();
    let buffer = image::RgbaImage::from_raw(width as u32, height as u32, rgba)
        .ok_or(ExportError::SizeMismatch { width, height })?;

    let mut png = Vec::new();
    image::DynamicImage::ImageRgba8(buffer).write_to(&mut Cursor::new(&mut png), image::ImageFormat::Png)?;
    Ok(png)
}

/// Write the PNG next to the working directory
#[cfg(not(target_arch = "wasm32"))]
pub fn deliver(png: &[u8], file_name: &str) -> ExportResult<()> {
    let path = std::env::current_dir()?.join(file_name);
    std::fs::write(&path, png)?;
    log::info!("Exported canvas to {}", path.display());
    Ok(())
}

/// Offer the PNG as a browser download
#[cfg(target_arch = "wasm32")]
pub fn deliver(png: &[u8], file_name: &str) -> ExportResult<()> {
    download_binary_file(file_name, png, "image/png")
        .map_err(|err| ExportError::Download(format!("{:?}", err)))?;
    log::info!("Offered {} for download ({} bytes)", file_name, png.len());
    Ok(())
}

#[cfg(target_arch = "wasm32")]
fn download_binary_file(
    file_name: &str,
    data: &[u8],
    mime_type: &str,
) -> Result<(), wasm_bindgen::JsValue> {
    use wasm_bindgen::JsCast as _;

    let window = web_sys::window().ok_or("No window")?;
    let document = window.document().ok_or("No document")?;

    let uint8_array = js_sys::Uint8Array::from(data);
    let blob_parts = js_sys::Array::new();
    blob_parts.push(&uint8_array);

    let options = web_sys::BlobPropertyBag::new();
    options.set_type(mime_type);
    let blob = web_sys::Blob::new_with_u8_array_sequence_and_options(&blob_parts, &options)?;

    let url = web_sys::Url::create_object_url_with_blob(&blob)?;
    let anchor = document
        .create_element("a")?
        .dyn_into::<web_sys::HtmlAnchorElement>()?;
    anchor.set_href(&url);
    anchor.set_download(file_name);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).ok();
    Ok(())
}

use wasm_bindgen::{Clamped, JsCast};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement, ImageData};

use crate::raster::Raster;

/// Window size in CSS pixels, or `None` outside a browser.
pub fn viewport_size() -> Option<(f64, f64)> {
    let window = web_sys::window()?;
    let w = window.inner_width().ok()?.as_f64()?;
    let h = window.inner_height().ok()?.as_f64()?;
    Some((w, h))
}

/// Match the canvas backing store to the window, scaled by device pixel
/// ratio (capped at 2). Returns the CSS size and the ratio.
pub fn resize_to_viewport(canvas: &HtmlCanvasElement) -> Option<(f64, f64, f64)> {
    let window = web_sys::window()?;
    let (w, h) = viewport_size()?;
    let dpr = window.device_pixel_ratio().clamp(1.0, 2.0);
    let (bw, bh) = ((w * dpr) as u32, (h * dpr) as u32);
    if canvas.width() != bw || canvas.height() != bh {
        canvas.set_width(bw);
        canvas.set_height(bh);
    }
    Some((w, h, dpr))
}

pub fn context_2d(canvas: &HtmlCanvasElement) -> Option<CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .ok()?
        .map(|c| c.unchecked_into())
}

pub fn create_offscreen(width: u32, height: u32) -> Option<HtmlCanvasElement> {
    let document = web_sys::window()?.document()?;
    let canvas: HtmlCanvasElement = document.create_element("canvas").ok()?.unchecked_into();
    canvas.set_width(width);
    canvas.set_height(height);
    Some(canvas)
}

/// Upload a software raster into a fresh offscreen canvas.
pub fn raster_to_canvas(raster: &Raster) -> Option<HtmlCanvasElement> {
    let canvas = create_offscreen(raster.width(), raster.height())?;
    let ctx = context_2d(&canvas)?;
    let image = ImageData::new_with_u8_clamped_array_and_sh(Clamped(raster.data()), raster.width(), raster.height())
        .map_err(|e| log::warn!("texture upload failed: {:?}", e))
        .ok()?;
    ctx.put_image_data(&image, 0.0, 0.0).ok()?;
    Some(canvas)
}

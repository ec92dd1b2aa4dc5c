// src/rendering/export.rs

use super::plot::{DispersionBoard, PlotArea};
use cairo::{Context, Format, ImageSurface, PdfSurface};
use plotters::prelude::*;
use plotters_cairo::CairoBackend;
use std::path::Path;

pub const EXPORT_WIDTH: u32 = 800;
pub const EXPORT_HEIGHT: u32 = 600;

/// Renders the board onto a cairo context (screen or file) with a white background.
pub fn draw_plot(
  cr: &Context,
  board: &DispersionBoard,
  width: u32,
  height: u32,
) -> Result<PlotArea, Box<dyn std::error::Error>> {
  let backend = CairoBackend::new(cr, (width, height))?;
  let root = backend.into_drawing_area();
  root.fill(&WHITE)?;
  let area = board.draw(&root)?;
  root.present()?;
  Ok(area)
}

/// Writes the current plot to `path`; `.pdf` gives a vector file, anything else a PNG.
pub fn export_plot(board: &DispersionBoard, path: &Path) -> Result<(), String> {
  let is_pdf = path
    .extension()
    .and_then(|e| e.to_str())
    .map(|e| e.eq_ignore_ascii_case("pdf"))
    .unwrap_or(false);

  if is_pdf {
    let surface = PdfSurface::new(EXPORT_WIDTH as f64, EXPORT_HEIGHT as f64, path)
      .map_err(|e| e.to_string())?;
    let cr = Context::new(&surface).map_err(|e| e.to_string())?;
    draw_plot(&cr, board, EXPORT_WIDTH, EXPORT_HEIGHT).map_err(|e| e.to_string())?;
    surface.finish();
  } else {
    let surface = ImageSurface::create(Format::ARgb32, EXPORT_WIDTH as i32, EXPORT_HEIGHT as i32)
      .map_err(|e| e.to_string())?;
    {
      let cr = Context::new(&surface).map_err(|e| e.to_string())?;
      draw_plot(&cr, board, EXPORT_WIDTH, EXPORT_HEIGHT).map_err(|e| e.to_string())?;
    }
    let mut file = std::fs::File::create(path).map_err(|e| e.to_string())?;
    surface.write_to_png(&mut file).map_err(|e| e.to_string())?;
  }
  Ok(())
}

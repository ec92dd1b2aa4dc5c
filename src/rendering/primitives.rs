// src/rendering/primitives.rs

use super::surface::Rgb;
use gtk4::cairo::{self, RadialGradient};
use std::f64::consts::PI;

/// Shaded sphere: highlight top-left, base colour, darker rim, thin outline in `stroke`.
pub fn draw_atom_vector(
  cr: &cairo::Context,
  x: f64,
  y: f64,
  radius: f64,
  fill: Rgb,
  stroke: Rgb,
) -> Result<(), cairo::Error> {
  let (r, g, b) = fill;

  let gradient = RadialGradient::new(
    x - radius * 0.3,
    y - radius * 0.3,
    radius * 0.1,
    x,
    y,
    radius,
  );
  gradient.add_color_stop_rgb(0.0, 1.0, 1.0, 1.0);
  gradient.add_color_stop_rgb(0.2, r + 0.2, g + 0.2, b + 0.2);
  gradient.add_color_stop_rgb(1.0, r * 0.6, g * 0.6, b * 0.6);

  cr.set_source(&gradient)?;
  cr.arc(x, y, radius, 0.0, 2.0 * PI);
  cr.fill()?;

  let (sr, sg, sb) = stroke;
  cr.set_source_rgb(sr * 0.7, sg * 0.7, sb * 0.7);
  cr.set_line_width((radius * 0.05).max(1.0));
  cr.arc(x, y, radius, 0.0, 2.0 * PI);
  cr.stroke()
}

pub fn draw_marker_line(
  cr: &cairo::Context,
  start: [f64; 2],
  end: [f64; 2],
  width: f64,
  color: Rgb,
) -> Result<(), cairo::Error> {
  let (r, g, b) = color;
  cr.set_source_rgb(r, g, b);
  cr.set_line_width(width);
  cr.move_to(start[0], start[1]);
  cr.line_to(end[0], end[1]);
  cr.stroke()
}

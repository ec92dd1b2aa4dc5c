// src/rendering/painter.rs

use super::primitives;
use super::scene::ChainScene;
use super::surface::Rgb;
use gtk4::cairo;

/// Uniform scale and offset that fit the scene into a `win_w` × `win_h` widget, centred.
pub fn fit_scene(scene: &ChainScene, win_w: f64, win_h: f64) -> (f64, f64, f64) {
  if scene.width <= 0.0 || scene.height <= 0.0 {
    return (1.0, 0.0, 0.0);
  }
  let scale = (win_w / scene.width).min(win_h / scene.height);
  let off_x = (win_w - scene.width * scale) / 2.0;
  let off_y = (win_h - scene.height * scale) / 2.0;
  (scale, off_x, off_y)
}

pub fn draw_chain(
  cr: &cairo::Context,
  scene: &ChainScene,
  background: Rgb,
  win_w: f64,
  win_h: f64,
) -> Result<(), cairo::Error> {
  // 1. Background
  let (bg_r, bg_g, bg_b) = background;
  cr.set_source_rgb(bg_r, bg_g, bg_b);
  cr.paint()?;

  let (scale, off_x, off_y) = fit_scene(scene, win_w, win_h);
  let to_screen = |p: [f64; 2]| [off_x + p[0] * scale, off_y + p[1] * scale];

  // 2. Equilibrium markers behind the atoms
  for line in &scene.lines {
    primitives::draw_marker_line(cr, to_screen(line.start), to_screen(line.end), 2.0, line.stroke)?;
  }

  // 3. Atoms
  for circle in &scene.circles {
    let [x, y] = to_screen([circle.x, circle.y]);
    primitives::draw_atom_vector(cr, x, y, circle.radius * scale, circle.fill, circle.stroke)?;
  }

  Ok(())
}

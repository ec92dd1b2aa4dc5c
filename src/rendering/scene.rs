// src/rendering/scene.rs

use super::surface::{ChainCanvas, CircleHandle, LineHandle, Rgb};

// Read by painter.rs each frame; positions are in chain units, not pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct SceneCircle {
  pub x: f64,
  pub y: f64,
  pub radius: f64,
  pub fill: Rgb,
  pub stroke: Rgb,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SceneLine {
  pub start: [f64; 2],
  pub end: [f64; 2],
  pub stroke: Rgb,
}

/// Retained circles and lines for one chain; painter.rs scales it to the widget.
#[derive(Debug, Clone, Default)]
pub struct ChainScene {
  pub width: f64,
  pub height: f64,
  pub circles: Vec<SceneCircle>,
  pub lines: Vec<SceneLine>,
}

impl ChainScene {
  pub fn new(width: f64, height: f64) -> Self {
    Self { width, height, circles: Vec::new(), lines: Vec::new() }
  }

  pub fn circle(&self, handle: CircleHandle) -> Option<&SceneCircle> {
    self.circles.get(handle.0)
  }
}

impl ChainCanvas for ChainScene {
  fn create_circle(&mut self, x: f64, y: f64, radius: f64) -> CircleHandle {
    self.circles.push(SceneCircle {
      x,
      y,
      radius,
      fill: (0.0, 0.0, 0.0),
      stroke: (0.0, 0.0, 0.0),
    });
    CircleHandle(self.circles.len() - 1)
  }

  fn set_fill(&mut self, circle: CircleHandle, color: Rgb) {
    if let Some(c) = self.circles.get_mut(circle.0) {
      c.fill = color;
    }
  }

  fn set_stroke(&mut self, circle: CircleHandle, color: Rgb) {
    if let Some(c) = self.circles.get_mut(circle.0) {
      c.stroke = color;
    }
  }

  fn set_translation(&mut self, circle: CircleHandle, x: f64, y: f64) {
    if let Some(c) = self.circles.get_mut(circle.0) {
      c.x = x;
      c.y = y;
    }
  }

  fn create_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> LineHandle {
    self.lines.push(SceneLine {
      start: [x1, y1],
      end: [x2, y2],
      stroke: (0.0, 0.0, 0.0),
    });
    LineHandle(self.lines.len() - 1)
  }

  fn set_line_stroke(&mut self, line: LineHandle, color: Rgb) {
    if let Some(l) = self.lines.get_mut(line.0) {
      l.stroke = color;
    }
  }

  fn height(&self) -> f64 {
    self.height
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_translation_moves_only_target() {
    let mut scene = ChainScene::new(400.0, 120.0);
    let a = scene.create_circle(50.0, 60.0, 20.0);
    let b = scene.create_circle(100.0, 60.0, 30.0);
    scene.set_translation(b, 104.0, 60.0);

    assert_eq!(scene.circle(a).map(|c| c.x), Some(50.0));
    assert_eq!(scene.circle(b).map(|c| c.x), Some(104.0));
  }

  #[test]
  fn test_colours_apply_to_handles() {
    let mut scene = ChainScene::new(400.0, 120.0);
    let c = scene.create_circle(50.0, 60.0, 20.0);
    let l = scene.create_line(50.0, 30.0, 50.0, 90.0);
    scene.set_fill(c, (1.0, 0.0, 0.0));
    scene.set_stroke(c, (0.5, 0.0, 0.0));
    scene.set_line_stroke(l, (0.0, 0.0, 1.0));

    assert_eq!(scene.circles[0].fill, (1.0, 0.0, 0.0));
    assert_eq!(scene.circles[0].stroke, (0.5, 0.0, 0.0));
    assert_eq!(scene.lines[0].stroke, (0.0, 0.0, 1.0));
  }
}

// src/rendering/surface.rs
//
// Seams between the lattice engine and whatever draws it. The GTK build
// implements these with a retained cairo scene, a plotters board and
// widget tick callbacks; tests use the recording fakes at the bottom.

pub type Rgb = (f64, f64, f64);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CircleHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TicksHandle(pub usize);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FrameHandle(pub u64);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
  Horizontal,
  Vertical,
}

/// Visible data window, stored as [left, top, right, bottom].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
  pub left: f64,
  pub top: f64,
  pub right: f64,
  pub bottom: f64,
}

impl BoundingBox {
  pub fn new(left: f64, top: f64, right: f64, bottom: f64) -> Self {
    Self { left, top, right, bottom }
  }

  pub fn panned_x(&self, dx: f64) -> Self {
    Self { left: self.left + dx, right: self.right + dx, ..*self }
  }

  pub fn width(&self) -> f64 {
    self.right - self.left
  }

  pub fn height(&self) -> f64 {
    self.top - self.bottom
  }

  pub fn contains_x(&self, x: f64) -> bool {
    x >= self.left && x <= self.right
  }

  pub fn approx_eq(&self, other: &BoundingBox, tol: f64) -> bool {
    (self.left - other.left).abs() <= tol
      && (self.top - other.top).abs() <= tol
      && (self.right - other.right).abs() <= tol
      && (self.bottom - other.bottom).abs() <= tol
  }
}

/// Retained 2D canvas holding one animated chain.
pub trait ChainCanvas {
  fn create_circle(&mut self, x: f64, y: f64, radius: f64) -> CircleHandle;
  fn set_fill(&mut self, circle: CircleHandle, color: Rgb);
  fn set_stroke(&mut self, circle: CircleHandle, color: Rgb);
  fn set_translation(&mut self, circle: CircleHandle, x: f64, y: f64);
  fn create_line(&mut self, x1: f64, y1: f64, x2: f64, y2: f64) -> LineHandle;
  fn set_line_stroke(&mut self, line: LineHandle, color: Rgb);
  fn height(&self) -> f64;
}

pub type FunctionGraph = Box<dyn Fn(f64) -> f64>;

/// Interactive plot holding axes, ticks, curves and point markers.
pub trait PlotBoard {
  fn create_axis(&mut self, axis: Axis, label: &str);
  fn create_ticks(&mut self, positions: &[f64], scale: f64, scale_symbol: &str) -> TicksHandle;
  fn remove_ticks(&mut self, ticks: TicksHandle);
  fn create_function_graph(&mut self, graph: FunctionGraph);
  fn create_point(&mut self, at: [f64; 2]) -> PointHandle;
  fn remove_object(&mut self, point: PointHandle);
  fn bounding_box(&self) -> BoundingBox;
  fn set_bounding_box(&mut self, bbox: BoundingBox);
  /// Maps a press on the plot widget to data coordinates, `None` when it misses the plot.
  fn screen_to_data(&self, x: f64, y: f64) -> Option<[f64; 2]>;
}

/// Host redraw loop. Each registration runs once per frame until cancelled.
pub trait FrameScheduler {
  fn register_frame_callback(&mut self) -> FrameHandle;
  fn cancel_frame_callback(&mut self, handle: FrameHandle);
}

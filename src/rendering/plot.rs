// src/rendering/plot.rs
//
// Retained dispersion plot. Objects live here between frames; `draw`
// replays them through plotters onto any backend (screen or export).

use super::surface::{
  Axis, BoundingBox, FunctionGraph, PlotBoard, PointHandle, Rgb, TicksHandle,
};
use crate::config::PlotStyle;
use crate::physics::brillouin::tick_label;
use std::collections::BTreeMap;

use plotters::backend::DrawingBackend;
use plotters::coord::Shift;
use plotters::drawing::DrawingArea;
use plotters::prelude::*;

const PLOT_MARGIN: u32 = 20;

struct TickSet {
  positions: Vec<f64>,
  scale: f64,
  symbol: String,
}

/// Pixel rectangle of the plotting area from the last on-screen draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlotArea {
  pub x0: f64,
  pub y0: f64,
  pub x1: f64,
  pub y1: f64,
}

impl PlotArea {
  fn contains(&self, x: f64, y: f64) -> bool {
    x >= self.x0 && x <= self.x1 && y >= self.y0 && y <= self.y1
  }
}

pub struct DispersionBoard {
  bbox: BoundingBox,
  axes: Vec<(Axis, String)>,
  ticks: BTreeMap<usize, TickSet>,
  graphs: Vec<FunctionGraph>,
  points: BTreeMap<usize, [f64; 2]>,
  area: Option<PlotArea>,
  style: PlotStyle,
  next_id: usize,
}

fn rgb(c: Rgb) -> RGBColor {
  let to_u8 = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
  RGBColor(to_u8(c.0), to_u8(c.1), to_u8(c.2))
}

impl DispersionBoard {
  pub fn new(bbox: BoundingBox, style: PlotStyle) -> Self {
    Self {
      bbox,
      axes: Vec::new(),
      ticks: BTreeMap::new(),
      graphs: Vec::new(),
      points: BTreeMap::new(),
      area: None,
      style,
      next_id: 0,
    }
  }

  fn next(&mut self) -> usize {
    self.next_id += 1;
    self.next_id
  }

  pub fn tick_count(&self) -> usize {
    self.ticks.len()
  }

  pub fn points(&self) -> impl Iterator<Item = &[f64; 2]> {
    self.points.values()
  }

  /// Records where the last screen draw put the plotting area.
  pub fn set_plot_area(&mut self, area: PlotArea) {
    self.area = Some(area);
  }

  /// Replays every live object onto `root` and returns the plotting area in pixels.
  pub fn draw<DB: DrawingBackend>(
    &self,
    root: &DrawingArea<DB, Shift>,
  ) -> Result<PlotArea, std::boxed::Box<dyn std::error::Error>>
  where
    DB::ErrorType: 'static,
  {
    let bbox = self.bbox;
    let mut chart = ChartBuilder::on(root)
      .margin(PLOT_MARGIN)
      .build_cartesian_2d(bbox.left..bbox.right, bbox.bottom..bbox.top)?;

    let tick_height = 0.02 * bbox.height();
    let label_font = ("sans-serif", 14).into_font();

    // 1. Axes
    for (axis, label) in &self.axes {
      match axis {
        Axis::Horizontal => {
          chart.draw_series(LineSeries::new(vec![(bbox.left, 0.0), (bbox.right, 0.0)], &BLACK))?;
          chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (bbox.right - 0.04 * bbox.width(), 4.0 * tick_height),
            ("sans-serif", 18).into_font(),
          )))?;
        }
        Axis::Vertical => {
          if !bbox.contains_x(0.0) {
            continue;
          }
          chart.draw_series(LineSeries::new(vec![(0.0, bbox.bottom), (0.0, bbox.top)], &BLACK))?;
          chart.draw_series(std::iter::once(Text::new(
            label.clone(),
            (0.02 * bbox.width(), bbox.top - 2.0 * tick_height),
            ("sans-serif", 18).into_font(),
          )))?;
        }
      }
    }

    // 2. Ticks with labels in units of their scale symbol
    for set in self.ticks.values() {
      for &x in set.positions.iter().filter(|x| bbox.contains_x(**x)) {
        chart.draw_series(std::iter::once(PathElement::new(
          vec![(x, -tick_height), (x, tick_height)],
          BLACK.stroke_width(2),
        )))?;
        chart.draw_series(std::iter::once(Text::new(
          tick_label(x, set.scale, &set.symbol),
          (x - 0.02 * bbox.width(), -1.5 * tick_height),
          label_font.clone(),
        )))?;
      }
    }

    // 3. Curves, sampled across the visible window
    let samples = self.style.curve_samples.max(2);
    let step = bbox.width() / (samples - 1) as f64;
    let curve_color = rgb(self.style.curve_color);
    for graph in &self.graphs {
      let curve: Vec<(f64, f64)> = (0..samples)
        .map(|i| {
          let x = bbox.left + i as f64 * step;
          (x, graph(x))
        })
        .filter(|(_, y)| y.is_finite())
        .collect();
      chart.draw_series(LineSeries::new(curve, curve_color.stroke_width(2)))?;
    }

    // 4. Point markers
    let point_color = rgb(self.style.point_color);
    chart.draw_series(
      self
        .points
        .values()
        .filter(|p| bbox.contains_x(p[0]))
        .map(|p| Circle::new((p[0], p[1]), self.style.point_radius, point_color.filled())),
    )?;

    let (xr, yr) = chart.plotting_area().get_pixel_range();
    Ok(PlotArea {
      x0: xr.start as f64,
      y0: yr.start as f64,
      x1: xr.end as f64,
      y1: yr.end as f64,
    })
  }
}

impl PlotBoard for DispersionBoard {
  fn create_axis(&mut self, axis: Axis, label: &str) {
    self.axes.push((axis, label.to_string()));
  }

  fn create_ticks(&mut self, positions: &[f64], scale: f64, scale_symbol: &str) -> TicksHandle {
    let id = self.next();
    self.ticks.insert(
      id,
      TickSet {
        positions: positions.to_vec(),
        scale,
        symbol: scale_symbol.to_string(),
      },
    );
    TicksHandle(id)
  }

  fn remove_ticks(&mut self, ticks: TicksHandle) {
    if self.ticks.remove(&ticks.0).is_none() {
      log::debug!("Ticks {:?} already removed", ticks);
    }
  }

  fn create_function_graph(&mut self, graph: FunctionGraph) {
    self.graphs.push(graph);
  }

  fn create_point(&mut self, at: [f64; 2]) -> PointHandle {
    let id = self.next();
    self.points.insert(id, at);
    PointHandle(id)
  }

  fn remove_object(&mut self, point: PointHandle) {
    if self.points.remove(&point.0).is_none() {
      log::debug!("Point {:?} already removed", point);
    }
  }

  fn bounding_box(&self) -> BoundingBox {
    self.bbox
  }

  fn set_bounding_box(&mut self, bbox: BoundingBox) {
    self.bbox = bbox;
  }

  fn screen_to_data(&self, x: f64, y: f64) -> Option<[f64; 2]> {
    let area = self.area?;
    if !area.contains(x, y) || area.x1 <= area.x0 || area.y1 <= area.y0 {
      return None;
    }
    let bbox = self.bbox;
    let fx = (x - area.x0) / (area.x1 - area.x0);
    let fy = (y - area.y0) / (area.y1 - area.y0);
    Some([bbox.left + fx * bbox.width(), bbox.top - fy * bbox.height()])
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn board() -> DispersionBoard {
    DispersionBoard::new(BoundingBox::new(-1.0, 2.0, 1.0, -0.5), PlotStyle::default())
  }

  #[test]
  fn test_screen_to_data_needs_a_drawn_area() {
    let mut b = board();
    assert_eq!(b.screen_to_data(100.0, 100.0), None);

    b.set_plot_area(PlotArea { x0: 20.0, y0: 20.0, x1: 220.0, y1: 270.0 });
    let [x, y] = b.screen_to_data(120.0, 20.0).unwrap();
    assert!((x - 0.0).abs() < 1e-12);
    assert!((y - 2.0).abs() < 1e-12);
    let [x, y] = b.screen_to_data(220.0, 270.0).unwrap();
    assert!((x - 1.0).abs() < 1e-12);
    assert!((y + 0.5).abs() < 1e-12);
  }

  #[test]
  fn test_clicks_in_margin_are_ignored() {
    let mut b = board();
    b.set_plot_area(PlotArea { x0: 20.0, y0: 20.0, x1: 220.0, y1: 270.0 });
    assert_eq!(b.screen_to_data(5.0, 100.0), None);
    assert_eq!(b.screen_to_data(100.0, 280.0), None);
  }

  #[test]
  fn test_screen_mapping_follows_pan() {
    let mut b = board();
    b.set_plot_area(PlotArea { x0: 0.0, y0: 0.0, x1: 200.0, y1: 250.0 });
    let bbox = b.bounding_box().panned_x(0.5);
    b.set_bounding_box(bbox);
    let [x, _] = b.screen_to_data(100.0, 0.0).unwrap();
    assert!((x - 0.5).abs() < 1e-12);
  }

  #[test]
  fn test_object_bookkeeping() {
    let mut b = board();
    let t = b.create_ticks(&[-1.0, 0.0, 1.0], 1.0, "π/a");
    let p = b.create_point([0.1, 1.0]);
    let q = b.create_point([0.1, 0.2]);
    assert_eq!(b.tick_count(), 1);
    assert_eq!(b.points().count(), 2);

    b.remove_ticks(t);
    b.remove_object(p);
    b.remove_object(p);
    assert_eq!(b.tick_count(), 0);
    assert_eq!(b.points().collect::<Vec<_>>(), vec![&[0.1, 0.2]]);
    b.remove_object(q);
    assert_eq!(b.points().count(), 0);
  }
}

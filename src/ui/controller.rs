// src/ui/controller.rs

use super::navigator::{self, DispersionView};
use crate::model::lattice::LatticeParameters;
use crate::rendering::surface::{FrameScheduler, PlotBoard};
use crate::simulation::animation::AnimationClock;

/// A press on the plot: jump to the clicked wavenumber (no snapping) and restart both chains.
/// Returns the new wavenumber, or `None` when the press missed the plotting area.
pub fn handle_plot_press<B: PlotBoard, S: FrameScheduler>(
  params: &mut LatticeParameters,
  view: &mut DispersionView,
  board: &mut B,
  clock: &mut AnimationClock,
  scheduler: &mut S,
  screen: [f64; 2],
  now: f64,
) -> Option<f64> {
  let Some([q, _]) = board.screen_to_data(screen[0], screen[1]) else {
    log::debug!("Press at ({:.0}, {:.0}) is outside the plot", screen[0], screen[1]);
    return None;
  };

  params.wavenumber = q;
  view.points = navigator::replace_points(view.points.take(), params, board);
  clock.restart(scheduler, now);
  Some(q)
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::surface::testing::{RecordingBoard, RecordingScheduler};

  fn setup() -> (LatticeParameters, RecordingBoard, DispersionView) {
    let params = LatticeParameters::default();
    let mut board = RecordingBoard::new(navigator::initial_bounding_box(&params));
    let view = navigator::install(&params, &mut board);
    (params, board, view)
  }

  #[test]
  fn test_press_sets_wavenumber_and_markers() {
    let (mut params, mut board, mut view) = setup();
    let mut clock = AnimationClock::new();
    let mut scheduler = RecordingScheduler::default();
    board.screen_map = Some((1.0, 1.0));

    let q = handle_plot_press(&mut params, &mut view, &mut board, &mut clock, &mut scheduler, [0.02, 1.5], 1.0);

    assert_eq!(q, Some(0.02));
    assert_eq!(params.wavenumber, 0.02);
    let d = params.dispersion_at(0.02);
    let mut coords = board.point_coords();
    coords.sort_by(|a, b| b[1].partial_cmp(&a[1]).unwrap());
    assert_eq!(coords, vec![[0.02, d.omega_optic], [0.02, d.omega_acoustic]]);
    assert!(clock.is_running());
    assert_eq!(scheduler.live.len(), 1);
  }

  #[test]
  fn test_press_does_not_snap_or_touch_ticks() {
    let (mut params, mut board, mut view) = setup();
    let mut clock = AnimationClock::new();
    let mut scheduler = RecordingScheduler::default();
    board.screen_map = Some((1.0, 1.0));
    let ticks_before = board.ticks.clone();
    let bbox_before = board.bbox;

    handle_plot_press(&mut params, &mut view, &mut board, &mut clock, &mut scheduler, [0.123456, 1.0], 0.0);

    assert_eq!(params.wavenumber, 0.123456);
    assert_eq!(board.ticks, ticks_before);
    assert_eq!(board.bbox, bbox_before);
  }

  #[test]
  fn test_unmapped_press_is_ignored() {
    let (mut params, mut board, mut view) = setup();
    let mut clock = AnimationClock::new();
    let mut scheduler = RecordingScheduler::default();
    let before = params.clone();
    let points_before = board.point_coords();

    let q = handle_plot_press(&mut params, &mut view, &mut board, &mut clock, &mut scheduler, [20.0, 5.0], 1.0);

    assert_eq!(q, None);
    assert_eq!(params, before);
    assert_eq!(board.point_coords(), points_before);
    assert!(!clock.is_running());
  }

  #[test]
  fn test_repeated_presses_keep_one_registration() {
    let (mut params, mut board, mut view) = setup();
    let mut clock = AnimationClock::new();
    let mut scheduler = RecordingScheduler::default();
    board.screen_map = Some((0.001, 1.0));

    for i in 0..4 {
      handle_plot_press(&mut params, &mut view, &mut board, &mut clock, &mut scheduler, [i as f64, 0.0], i as f64);
    }
    assert_eq!(scheduler.live.len(), 1);
    assert_eq!(board.points.len(), 2);
  }
}

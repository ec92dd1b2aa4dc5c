// src/ui/navigator.rs
//
// Everything that lives on the dispersion plot and follows the wavenumber:
// the curve setup, the two markers and the Brillouin-zone tick window.

use crate::model::lattice::LatticeParameters;
use crate::physics::brillouin::{reciprocal_lattice_vector, Direction, TickWindow};
use crate::physics::dispersion::Branch;
use crate::rendering::surface::{Axis, BoundingBox, PlotBoard, PointHandle, TicksHandle};

pub const TICK_SYMBOL: &str = "π/a";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlotPointPair {
    pub optical: PointHandle,
    pub acoustic: PointHandle,
}

/// Plot-side state owned by the session: current ticks and markers.
#[derive(Debug, Clone, PartialEq)]
pub struct DispersionView {
    pub ticks: Option<TicksHandle>,
    pub tick_window: TickWindow,
    pub points: Option<PlotPointPair>,
}

/// Initial window: one Brillouin zone wide plus 10%, from just below zero to above the optical top.
pub fn initial_bounding_box(params: &LatticeParameters) -> BoundingBox {
    let boundary = reciprocal_lattice_vector(params.spacing) / 2.0;
    let omega_max = params.omega_max();
    BoundingBox::new(-boundary * 1.1, omega_max * 1.1, boundary * 1.1, -omega_max * 0.2)
}

/// Creates axes, both branch curves, the ticks around the current wavenumber and the markers.
pub fn install<B: PlotBoard>(params: &LatticeParameters, board: &mut B) -> DispersionView {
    board.create_axis(Axis::Horizontal, "k");
    board.create_axis(Axis::Vertical, "ω");

    for branch in [Branch::Optical, Branch::Acoustic] {
        let p = params.clone();
        board.create_function_graph(Box::new(move |q: f64| p.dispersion_at(q).omega(branch)));
    }

    let tick_window = TickWindow::around(params.wavenumber, params.spacing);
    let ticks = board.create_ticks(&tick_window.positions(), tick_scale(params), TICK_SYMBOL);
    let points = replace_points(None, params, board);

    DispersionView { ticks: Some(ticks), tick_window, points }
}

fn tick_scale(params: &LatticeParameters) -> f64 {
    reciprocal_lattice_vector(params.spacing) / 2.0
}

/// Removes `old` markers, then places new ones at the current wavenumber.
/// Returns `None` when a frequency is not finite.
pub fn replace_points<B: PlotBoard>(
    old: Option<PlotPointPair>,
    params: &LatticeParameters,
    board: &mut B,
) -> Option<PlotPointPair> {
    if let Some(old) = old {
        board.remove_object(old.optical);
        board.remove_object(old.acoustic);
    }

    let q = params.wavenumber;
    let d = params.dispersion();
    if !(d.omega_optic.is_finite() && d.omega_acoustic.is_finite()) {
        log::debug!("No markers at q = {:.5}: non-finite frequency", q);
        return None;
    }

    Some(PlotPointPair {
        optical: board.create_point([q, d.omega_optic]),
        acoustic: board.create_point([q, d.omega_acoustic]),
    })
}

/// Moves q by one reciprocal lattice vector and keeps ticks, viewport and markers with it.
pub fn shift_by_reciprocal_lattice_vector<B: PlotBoard>(
    params: &mut LatticeParameters,
    view: &mut DispersionView,
    board: &mut B,
    direction: Direction,
) {
    // 1. Step the wavenumber
    let rlv = reciprocal_lattice_vector(params.spacing);
    params.wavenumber += direction.sign() * rlv;

    // 2. Tick window around the new q
    view.tick_window = TickWindow::around(params.wavenumber, params.spacing);

    // 3. Old ticks go before new ones are made; markers are swapped in step 5
    if let Some(ticks) = view.ticks.take() {
        board.remove_ticks(ticks);
    }
    view.ticks = Some(board.create_ticks(&view.tick_window.positions(), rlv / 2.0, TICK_SYMBOL));

    // 4. Pan by the same step so the view looks identical
    let bbox = board.bounding_box().panned_x(direction.sign() * rlv);
    board.set_bounding_box(bbox);

    // 5. New markers
    view.points = replace_points(view.points.take(), params, board);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::surface::testing::RecordingBoard;

    fn setup() -> (LatticeParameters, RecordingBoard, DispersionView) {
        let params = LatticeParameters::default();
        let mut board = RecordingBoard::new(initial_bounding_box(&params));
        let view = install(&params, &mut board);
        (params, board, view)
    }

    #[test]
    fn test_install_populates_board() {
        let (params, board, view) = setup();
        assert_eq!(board.axes.len(), 2);
        assert_eq!(board.graphs.len(), 2);
        assert_eq!(board.ticks.len(), 1);
        assert_eq!(board.points.len(), 2);
        assert!(view.points.is_some());

        let d = params.dispersion();
        assert!((board.graphs[0](params.wavenumber) - d.omega_optic).abs() < 1e-12);
        assert!((board.graphs[1](params.wavenumber) - d.omega_acoustic).abs() < 1e-12);
    }

    fn assert_round_trip(q0: f64) {
        let mut params = LatticeParameters::new(100.0, 1.0, 2.0, 7, Some(q0)).unwrap();
        let mut board = RecordingBoard::new(initial_bounding_box(&params));
        let mut view = install(&params, &mut board);
        let window0 = view.tick_window;
        let ticks0 = board.ticks.values().next().cloned();
        let bbox0 = board.bounding_box();

        shift_by_reciprocal_lattice_vector(&mut params, &mut view, &mut board, Direction::Forward);
        assert!((params.wavenumber - q0 - reciprocal_lattice_vector(params.spacing)).abs() < 1e-12);
        shift_by_reciprocal_lattice_vector(&mut params, &mut view, &mut board, Direction::Backward);

        assert!((params.wavenumber - q0).abs() < 1e-12, "q0 = {}", q0);
        assert!(view.tick_window.approx_eq(&window0, 1e-12), "q0 = {}: {:?} vs {:?}", q0, view.tick_window, window0);
        let ticks = board.ticks.values().next().cloned();
        let same_ticks = ticks0
            .zip(ticks)
            .map(|(a, b)| a.iter().zip(&b).all(|(x, y)| (x - y).abs() < 1e-12))
            .unwrap_or(false);
        assert!(same_ticks, "q0 = {}", q0);
        assert!(board.bounding_box().approx_eq(&bbox0, 1e-12));
    }

    #[test]
    fn test_forward_then_backward_restores_state() {
        assert_round_trip(LatticeParameters::default().wavenumber);
        assert_round_trip(0.02);
    }

    #[test]
    fn test_round_trip_from_zone_centre_and_negative_wavenumber() {
        assert_round_trip(0.0);
        assert_round_trip(-0.01);
        assert_round_trip(-0.05);
    }

    #[test]
    fn test_install_ticks_follow_initial_wavenumber() {
        let params = LatticeParameters::new(100.0, 1.0, 2.0, 7, Some(0.0)).unwrap();
        let mut board = RecordingBoard::new(initial_bounding_box(&params));
        let view = install(&params, &mut board);
        assert!(view.tick_window.approx_eq(&TickWindow::around(0.0, params.spacing), 1e-12));
        assert_eq!(board.ticks.values().next(), Some(&view.tick_window.positions().to_vec()));
    }

    #[test]
    fn test_shift_does_not_accumulate_objects() {
        let (mut params, mut board, mut view) = setup();
        for direction in [Direction::Forward, Direction::Forward, Direction::Backward, Direction::Backward, Direction::Backward] {
            shift_by_reciprocal_lattice_vector(&mut params, &mut view, &mut board, direction);
            assert_eq!(board.ticks.len(), 1);
            assert_eq!(board.points.len(), 2);
        }
    }

    #[test]
    fn test_shift_updates_ticks_viewport_and_markers() {
        let (mut params, mut board, mut view) = setup();
        let rlv = reciprocal_lattice_vector(params.spacing);
        let bbox0 = board.bounding_box();
        let d0 = params.dispersion();

        shift_by_reciprocal_lattice_vector(&mut params, &mut view, &mut board, Direction::Forward);

        let ticks = board.ticks.values().next().unwrap();
        assert_eq!(ticks, &view.tick_window.positions().to_vec());
        assert!((view.tick_window.middle - rlv).abs() < 1e-12);
        assert!(board.bounding_box().approx_eq(&bbox0.panned_x(rlv), 1e-12));

        // Same frequencies one zone over
        let coords = board.point_coords();
        assert!(coords.iter().all(|p| (p[0] - params.wavenumber).abs() < 1e-15));
        assert!(coords.iter().any(|p| (p[1] - d0.omega_optic).abs() < 1e-9));
        assert!(coords.iter().any(|p| (p[1] - d0.omega_acoustic).abs() < 1e-9));
    }
}

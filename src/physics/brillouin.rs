// src/physics/brillouin.rs
//
// Reciprocal-space bookkeeping for the 1D chain: reciprocal lattice
// vector, zone folding and the three-tick window shown under the plot.

use std::f64::consts::PI;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    pub fn sign(self) -> f64 {
        match self {
            Direction::Forward => 1.0,
            Direction::Backward => -1.0,
        }
    }
}

pub fn reciprocal_lattice_vector(spacing: f64) -> f64 {
    2.0 * PI / spacing
}

/// Index of the zone containing `wavenumber`; zone 0 is [-π/a, π/a).
pub fn zone_index(wavenumber: f64, spacing: f64) -> i64 {
    let rlv = reciprocal_lattice_vector(spacing);
    (wavenumber / rlv + 0.5).floor() as i64
}

/// Folds `wavenumber` back into the first Brillouin zone [-π/a, π/a).
pub fn reduce_to_first_zone(wavenumber: f64, spacing: f64) -> f64 {
    let rlv = reciprocal_lattice_vector(spacing);
    wavenumber - zone_index(wavenumber, spacing) as f64 * rlv
}

/// Lower, middle and upper tick positions bracketing the current view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickWindow {
    pub lower: f64,
    pub middle: f64,
    pub upper: f64,
}

impl TickWindow {
    /// Three ticks half a reciprocal lattice vector apart, the upper one the
    /// first multiple of π/a at or above `wavenumber`.
    pub fn around(wavenumber: f64, spacing: f64) -> Self {
        let rlv = reciprocal_lattice_vector(spacing);
        let upper = (2.0 * wavenumber / rlv).ceil() * rlv / 2.0;
        let middle = upper - rlv / 2.0;
        let lower = middle - rlv / 2.0;
        Self { lower, middle, upper }
    }

    pub fn positions(&self) -> [f64; 3] {
        [self.lower, self.middle, self.upper]
    }

    pub fn approx_eq(&self, other: &TickWindow, tol: f64) -> bool {
        (self.lower - other.lower).abs() <= tol
            && (self.middle - other.middle).abs() <= tol
            && (self.upper - other.upper).abs() <= tol
    }
}

/// Formats `value / scale` as a multiple of `symbol` ("0", "π/a", "-3π/a", "0.50π/a").
pub fn tick_label(value: f64, scale: f64, symbol: &str) -> String {
    let multiple = value / scale;
    let rounded = multiple.round();
    if (multiple - rounded).abs() > 1e-6 {
        return format!("{:.2}{}", multiple, symbol);
    }
    match rounded as i64 {
        0 => "0".to_string(),
        1 => symbol.to_string(),
        -1 => format!("-{}", symbol),
        n => format!("{}{}", n, symbol),
    }
}

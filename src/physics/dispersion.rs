// src/physics/dispersion.rs
//
// Closed-form normal modes of the diatomic chain (unit spring constant).
// m_heavy and m_light are the two masses, `spacing` the lattice parameter
// and `wavenumber` the wave's q.

use crate::model::lattice::MassClass;
use thiserror::Error;

/// Tolerance on |cos(q·a/2)| below which the amplitude ratio is singular.
const SINGULAR_TOLERANCE: f64 = 1e-12;

/// Largest displacement, as a fraction of the lattice parameter.
const AMPLITUDE_FRACTION: f64 = 1.0 / 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Branch {
    Optical,
    Acoustic,
}

impl Branch {
    pub fn label(self) -> &'static str {
        match self {
            Branch::Optical => "optical",
            Branch::Acoustic => "acoustic",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum DispersionError {
    #[error("amplitude ratio is singular at q = {wavenumber:.6} (cos(qa/2) = 0)")]
    SingularWavenumber { wavenumber: f64 },
    #[error("dispersion produced a non-finite value at q = {wavenumber:.6}")]
    NonFinite { wavenumber: f64 },
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DispersionResult {
    pub omega_optic: f64,
    pub omega_acoustic: f64,
    pub light_amplitude_optic: f64,
    pub heavy_amplitude_optic: f64,
    pub light_amplitude_acoustic: f64,
    pub heavy_amplitude_acoustic: f64,
}

impl DispersionResult {
    pub fn omega(&self, branch: Branch) -> f64 {
        match branch {
            Branch::Optical => self.omega_optic,
            Branch::Acoustic => self.omega_acoustic,
        }
    }

    pub fn amplitude(&self, mass: MassClass, branch: Branch) -> f64 {
        match (mass, branch) {
            (MassClass::Light, Branch::Optical) => self.light_amplitude_optic,
            (MassClass::Heavy, Branch::Optical) => self.heavy_amplitude_optic,
            (MassClass::Light, Branch::Acoustic) => self.light_amplitude_acoustic,
            (MassClass::Heavy, Branch::Acoustic) => self.heavy_amplitude_acoustic,
        }
    }

    /// True when every frequency and amplitude can be handed to a renderer.
    pub fn is_finite(&self) -> bool {
        [
            self.omega_optic,
            self.omega_acoustic,
            self.light_amplitude_optic,
            self.heavy_amplitude_optic,
            self.light_amplitude_acoustic,
            self.heavy_amplitude_acoustic,
        ]
        .iter()
        .all(|v| v.is_finite())
    }
}

/// Frequencies and normalized amplitudes of both branches.
///
/// The amplitudes are undefined where cos(q·a/2) = 0 (odd multiples of
/// π/a); there the result carries non-finite or meaningless amplitudes.
/// Use [`try_compute`] when the caller needs to know.
pub fn compute(mass_heavy: f64, mass_light: f64, spacing: f64, wavenumber: f64) -> DispersionResult {
    let inv_h = 1.0 / mass_heavy;
    let inv_l = 1.0 / mass_light;

    // 1. Branch frequencies
    let k = inv_h * inv_h + inv_l * inv_l + 2.0 * inv_h * inv_l * (wavenumber * spacing).cos();
    // K >= 0 algebraically; rounding can push it a hair below zero
    let s = k.max(0.0).sqrt();

    let omega_optic_sq = inv_h + inv_l + s;
    let omega_acoustic_sq = (inv_h + inv_l - s).max(0.0);

    // 2. Amplitude ratios, light over heavy
    let reference = spacing * AMPLITUDE_FRACTION;
    let half_cos = 2.0 * (wavenumber * spacing / 2.0).cos();
    let alpha_optic = (2.0 - omega_optic_sq * mass_heavy) / half_cos;
    let alpha_acoustic = (2.0 - omega_acoustic_sq * mass_heavy) / half_cos;

    let (light_amplitude_optic, heavy_amplitude_optic) = normalize(alpha_optic, reference);
    let (light_amplitude_acoustic, heavy_amplitude_acoustic) = normalize(alpha_acoustic, reference);

    DispersionResult {
        omega_optic: omega_optic_sq.sqrt(),
        omega_acoustic: omega_acoustic_sq.sqrt(),
        light_amplitude_optic,
        heavy_amplitude_optic,
        light_amplitude_acoustic,
        heavy_amplitude_acoustic,
    }
}

/// Like [`compute`], but rejects singular wavenumbers and non-finite output.
pub fn try_compute(
    mass_heavy: f64,
    mass_light: f64,
    spacing: f64,
    wavenumber: f64,
) -> Result<DispersionResult, DispersionError> {
    if is_singular(spacing, wavenumber) {
        return Err(DispersionError::SingularWavenumber { wavenumber });
    }
    let result = compute(mass_heavy, mass_light, spacing, wavenumber);
    if !result.is_finite() {
        return Err(DispersionError::NonFinite { wavenumber });
    }
    Ok(result)
}

pub fn is_singular(spacing: f64, wavenumber: f64) -> bool {
    (wavenumber * spacing / 2.0).cos().abs() < SINGULAR_TOLERANCE
}

/// Top of the optical branch (reached at q = 0).
pub fn omega_max(mass_heavy: f64, mass_light: f64) -> f64 {
    (2.0 * (mass_heavy + mass_light) / (mass_heavy * mass_light)).sqrt()
}

// The mass class with the larger displacement gets exactly `reference`
fn normalize(alpha: f64, reference: f64) -> (f64, f64) {
    if alpha.abs() > 1.0 {
        (reference, reference / alpha)
    } else {
        (reference * alpha, reference)
    }
}

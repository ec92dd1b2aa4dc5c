// src/model/lattice.rs

use crate::physics::dispersion::{self, DispersionError, DispersionResult};
use std::f64::consts::PI;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MassClass {
  Light,
  Heavy,
}

impl MassClass {
  /// Light atoms sit at even indices, heavy atoms at odd ones.
  pub fn for_index(index: usize) -> Self {
    if index % 2 == 0 {
      MassClass::Light
    } else {
      MassClass::Heavy
    }
  }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum LatticeError {
  #[error("lattice parameter must be positive and finite, got {0}")]
  InvalidSpacing(f64),
  #[error("{which} mass must be positive and finite, got {value}")]
  InvalidMass { which: &'static str, value: f64 },
  #[error("atom count must be odd and positive, got {0}")]
  InvalidAtomCount(usize),
  #[error("initial wavenumber must be finite, got {0}")]
  InvalidWavenumber(f64),
}

/// Physical parameters of the session. Only `wavenumber` changes after start-up.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeParameters {
  pub spacing: f64,
  pub mass_light: f64,
  pub mass_heavy: f64,
  pub atom_count: usize,
  pub wavenumber: f64,
}

impl LatticeParameters {
  pub fn new(
    spacing: f64,
    mass_light: f64,
    mass_heavy: f64,
    atom_count: usize,
    wavenumber: Option<f64>,
  ) -> Result<Self, LatticeError> {
    if !(spacing.is_finite() && spacing > 0.0) {
      return Err(LatticeError::InvalidSpacing(spacing));
    }
    for (which, value) in [("light", mass_light), ("heavy", mass_heavy)] {
      if !(value.is_finite() && value > 0.0) {
        return Err(LatticeError::InvalidMass { which, value });
      }
    }
    if atom_count == 0 || atom_count % 2 == 0 {
      return Err(LatticeError::InvalidAtomCount(atom_count));
    }
    // Quarter of the way to the zone boundary unless told otherwise
    let wavenumber = wavenumber.unwrap_or(0.5 * PI / spacing);
    if !wavenumber.is_finite() {
      return Err(LatticeError::InvalidWavenumber(wavenumber));
    }

    Ok(Self { spacing, mass_light, mass_heavy, atom_count, wavenumber })
  }

  /// Equilibrium position of atom `index`; the first atom sits half a lattice parameter in.
  pub fn equilibrium_position(&self, index: usize) -> f64 {
    (index + 1) as f64 * self.spacing / 2.0
  }

  /// Extent of the chain canvas, leaving half a lattice parameter on each side.
  pub fn chain_length(&self) -> f64 {
    (self.atom_count + 1) as f64 * self.spacing / 2.0
  }

  pub fn dispersion(&self) -> DispersionResult {
    self.dispersion_at(self.wavenumber)
  }

  pub fn dispersion_at(&self, wavenumber: f64) -> DispersionResult {
    dispersion::compute(self.mass_heavy, self.mass_light, self.spacing, wavenumber)
  }

  pub fn try_dispersion(&self) -> Result<DispersionResult, DispersionError> {
    dispersion::try_compute(self.mass_heavy, self.mass_light, self.spacing, self.wavenumber)
  }

  pub fn omega_max(&self) -> f64 {
    dispersion::omega_max(self.mass_heavy, self.mass_light)
  }
}

impl Default for LatticeParameters {
  fn default() -> Self {
    Self {
      spacing: 100.0,
      mass_light: 1.0,
      mass_heavy: 2.0,
      atom_count: 7,
      wavenumber: 0.5 * PI / 100.0,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn test_equilibrium_layout() {
    let p = LatticeParameters::default();
    let expected = [50.0, 100.0, 150.0, 200.0, 250.0, 300.0, 350.0];
    for (i, x) in expected.iter().enumerate() {
      assert!((p.equilibrium_position(i) - x).abs() < 1e-12);
    }
    assert!((p.chain_length() - 400.0).abs() < 1e-12);
  }

  #[test]
  fn test_mass_classes_alternate_from_light() {
    let classes: Vec<_> = (0..7).map(MassClass::for_index).collect();
    assert_eq!(classes[0], MassClass::Light);
    for pair in classes.windows(2) {
      assert_ne!(pair[0], pair[1]);
    }
    assert_eq!(classes[6], MassClass::Light);
  }

  #[test]
  fn test_new_validates_fields() {
    assert_eq!(
      LatticeParameters::new(0.0, 1.0, 2.0, 7, None),
      Err(LatticeError::InvalidSpacing(0.0))
    );
    assert!(matches!(
      LatticeParameters::new(100.0, -1.0, 2.0, 7, None),
      Err(LatticeError::InvalidMass { which: "light", .. })
    ));
    assert_eq!(
      LatticeParameters::new(100.0, 1.0, 2.0, 6, None),
      Err(LatticeError::InvalidAtomCount(6))
    );
    assert!(matches!(
      LatticeParameters::new(100.0, 1.0, 2.0, 7, Some(f64::NAN)),
      Err(LatticeError::InvalidWavenumber(_))
    ));
  }

  #[test]
  fn test_default_wavenumber() {
    let p = LatticeParameters::new(100.0, 1.0, 2.0, 7, None).unwrap();
    assert_eq!(p, LatticeParameters::default());
  }
}

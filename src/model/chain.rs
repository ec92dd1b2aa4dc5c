// src/model/chain.rs

use super::lattice::{LatticeParameters, MassClass};
use crate::config::ChainStyle;
use crate::physics::dispersion::{Branch, DispersionResult};
use crate::rendering::surface::{ChainCanvas, CircleHandle};

#[derive(Debug, Clone, PartialEq)]
pub struct Atom {
  pub index: usize,
  pub mass_class: MassClass,
  pub equilibrium: f64,
  pub displacement: f64,
  pub circle: CircleHandle,
}

/// One row of atoms driven by a single dispersion branch.
#[derive(Debug, Clone)]
pub struct AnimatedChain<C> {
  pub branch: Branch,
  pub atoms: Vec<Atom>,
  pub canvas: C,
}

impl<C: ChainCanvas> AnimatedChain<C> {
  /// Draws equilibrium markers and atoms at rest onto `canvas`.
  pub fn build(branch: Branch, params: &LatticeParameters, style: &ChainStyle, mut canvas: C) -> Self {
    let mid = canvas.height() / 2.0;
    let mut atoms = Vec::with_capacity(params.atom_count);

    for index in 0..params.atom_count {
      let mass_class = MassClass::for_index(index);
      let equilibrium = params.equilibrium_position(index);
      let radius = style.radius(mass_class, params.spacing);
      let color = style.color(mass_class);

      // 1. Marker line through the equilibrium point
      let half = style.marker_factor * radius / 2.0;
      let line = canvas.create_line(equilibrium, mid - half, equilibrium, mid + half);
      canvas.set_line_stroke(line, color);

      // 2. The atom itself
      let circle = canvas.create_circle(equilibrium, mid, radius);
      canvas.set_fill(circle, color);
      canvas.set_stroke(circle, color);

      atoms.push(Atom { index, mass_class, equilibrium, displacement: 0.0, circle });
    }

    Self { branch, atoms, canvas }
  }

  /// Moves every atom to x0 + A·sin(q·x0 − ω·t) for this chain's branch.
  pub fn place(&mut self, dispersion: &DispersionResult, wavenumber: f64, t: f64) {
    let omega = dispersion.omega(self.branch);
    let mid = self.canvas.height() / 2.0;

    for atom in &mut self.atoms {
      let amplitude = dispersion.amplitude(atom.mass_class, self.branch);
      atom.displacement = amplitude * (wavenumber * atom.equilibrium - omega * t).sin();
      self.canvas.set_translation(atom.circle, atom.equilibrium + atom.displacement, mid);
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::rendering::scene::ChainScene;

  fn chain(branch: Branch) -> AnimatedChain<ChainScene> {
    let params = LatticeParameters::default();
    let scene = ChainScene::new(params.chain_length(), 120.0);
    AnimatedChain::build(branch, &params, &ChainStyle::default(), scene)
  }

  #[test]
  fn test_build_lays_out_alternating_atoms() {
    let c = chain(Branch::Optical);
    assert_eq!(c.atoms.len(), 7);
    assert_eq!(c.canvas.circles.len(), 7);
    assert_eq!(c.canvas.lines.len(), 7);

    for atom in &c.atoms {
      let circle = c.canvas.circle(atom.circle).unwrap();
      assert_eq!(circle.x, atom.equilibrium);
      assert_eq!(circle.y, 60.0);
      let radius = if atom.index % 2 == 0 { 20.0 } else { 30.0 };
      assert_eq!(circle.radius, radius);
    }
    assert_eq!(c.atoms[0].mass_class, MassClass::Light);
    assert_eq!(c.atoms[1].mass_class, MassClass::Heavy);
    // Marker spans three radii
    let line = &c.canvas.lines[1];
    assert!((line.end[1] - line.start[1] - 90.0).abs() < 1e-12);
  }

  #[test]
  fn test_place_uses_chain_branch() {
    let params = LatticeParameters::default();
    let d = params.dispersion();
    let mut optical = chain(Branch::Optical);
    let mut acoustic = chain(Branch::Acoustic);
    let t = 0.37;
    optical.place(&d, params.wavenumber, t);
    acoustic.place(&d, params.wavenumber, t);

    for (o, a) in optical.atoms.iter().zip(&acoustic.atoms) {
      let x0 = o.equilibrium;
      let q = params.wavenumber;
      let expect_o = d.amplitude(o.mass_class, Branch::Optical) * (q * x0 - d.omega_optic * t).sin();
      let expect_a = d.amplitude(a.mass_class, Branch::Acoustic) * (q * x0 - d.omega_acoustic * t).sin();
      assert!((o.displacement - expect_o).abs() < 1e-12);
      assert!((a.displacement - expect_a).abs() < 1e-12);
      assert!((optical.canvas.circle(o.circle).unwrap().x - (x0 + expect_o)).abs() < 1e-12);
    }
  }

  #[test]
  fn test_small_spacing_scales_atoms_with_lattice() {
    let style = ChainStyle::default();
    let params = LatticeParameters::new(1.0, 1.0, 2.0, 7, None).unwrap();
    let scene = ChainScene::new(params.chain_length(), style.canvas_height_for(params.spacing));
    let c = AnimatedChain::build(Branch::Acoustic, &params, &style, scene);

    assert!((c.canvas.height - 1.2).abs() < 1e-12);
    for atom in &c.atoms {
      let circle = c.canvas.circle(atom.circle).unwrap();
      let expected = if atom.index % 2 == 0 { 0.2 } else { 0.3 };
      assert!((circle.radius - expected).abs() < 1e-12);
      assert!(circle.radius < params.spacing / 2.0);
      assert!((circle.y - 0.6).abs() < 1e-12);
    }
  }
}

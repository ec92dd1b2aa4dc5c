// src/utils/report.rs

use crate::model::lattice::{LatticeParameters, MassClass};
use crate::physics::brillouin::{reduce_to_first_zone, zone_index};
use crate::physics::dispersion::Branch;
use std::f64::consts::PI;

/// One console entry describing the modes at the current wavenumber.
pub fn mode_summary(params: &LatticeParameters) -> String {
    let q = params.wavenumber;
    let unit = PI / params.spacing;
    let zone = zone_index(q, params.spacing);
    let reduced = reduce_to_first_zone(q, params.spacing);

    let mut out = String::new();
    out.push_str(&format!(
        "q = {:.5} ({:+.3} π/a), zone {}, reduced q = {:+.3} π/a\n",
        q,
        q / unit,
        zone,
        reduced / unit
    ));

    match params.try_dispersion() {
        Ok(d) => {
            let rows: Vec<String> = [Branch::Optical, Branch::Acoustic]
                .iter()
                .map(|&branch| {
                    format!(
                        "{:<10} ω = {:<8.4} A(light) = {:<+8.3} A(heavy) = {:<+8.3}",
                        branch.label(),
                        d.omega(branch),
                        d.amplitude(MassClass::Light, branch),
                        d.amplitude(MassClass::Heavy, branch)
                    )
                })
                .collect();
            out.push_str(&rows.join("\n"));
        }
        Err(e) => {
            let d = params.dispersion();
            out.push_str(&format!(
                "ω(optical) = {:.4}, ω(acoustic) = {:.4}\nAnimation paused: {}",
                d.omega_optic, d.omega_acoustic, e
            ));
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_lists_both_branches() {
        let p = LatticeParameters::default();
        let text = mode_summary(&p);
        assert!(text.contains("zone 0"));
        assert!(text.contains("+0.500 π/a"));
        assert!(text.contains("optical"));
        assert!(text.contains("acoustic"));
        assert!(!text.contains("paused"));
    }

    #[test]
    fn test_summary_reports_zone_and_singularity() {
        let mut p = LatticeParameters::default();
        p.wavenumber = 2.0 * 2.0 * PI / p.spacing + 0.3 * PI / p.spacing;
        assert!(mode_summary(&p).contains("zone 2"));

        p.wavenumber = PI / p.spacing;
        let text = mode_summary(&p);
        assert!(text.contains("Animation paused"));
    }
}

//! Forward construction of the underlying-price lattice.
//!
//! Column `i` is built from column `i − 1` only: its first `i` entries are
//! the previous column scaled by `u`, and the new bottom entry is the
//! previous bottom entry scaled by `d`. After `i` steps node `j` therefore
//! holds `S · u^(i−j) · d^j`.

use super::parameters::CrrParameters;
use crr_core::{Real, Size};
use crr_math::Grid;

/// Build the `(steps + 1) × (steps + 1)` underlying-price lattice.
///
/// Entry `(j, i)` is the price after `i` steps with `j` down-moves; entries
/// with `j > i` are left at zero.
pub fn build_price_lattice(spot: Real, params: &CrrParameters, steps: Size) -> Grid {
    let mut lattice = Grid::zeros(steps);
    lattice[(0, 0)] = spot;
    for i in 1..=steps {
        lattice.scale_column_from(i - 1, i, i, params.up);
        lattice[(i, i)] = lattice[(i - 1, i - 1)] * params.down;
    }
    lattice
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::CrrInputs;
    use approx::assert_relative_eq;

    fn params(steps: Size) -> CrrParameters {
        let inputs = CrrInputs::new(100.0, 100.0, 0.2, 0.05, 1.0, steps);
        CrrParameters::derive(&inputs).unwrap()
    }

    #[test]
    fn single_step() {
        let p = params(1);
        let lattice = build_price_lattice(100.0, &p, 1);
        assert_eq!(lattice[(0, 0)], 100.0);
        assert_eq!(lattice[(0, 1)], 100.0 * p.up);
        assert_eq!(lattice[(1, 1)], 100.0 * p.down);
        assert_eq!(lattice[(1, 0)], 0.0);
    }

    #[test]
    fn matches_closed_form() {
        let steps = 25;
        let p = params(steps);
        let lattice = build_price_lattice(100.0, &p, steps);
        for (j, i, price) in lattice.iter_nodes() {
            let expected = 100.0 * p.up.powi((i - j) as i32) * p.down.powi(j as i32);
            assert_relative_eq!(price, expected, max_relative = 1e-12);
        }
    }

    #[test]
    fn recombines() {
        // up-then-down lands where down-then-up does: back at spot after two steps.
        let p = params(2);
        let lattice = build_price_lattice(100.0, &p, 2);
        assert_relative_eq!(lattice[(1, 2)], 100.0, max_relative = 1e-14);
    }

    #[test]
    fn unused_cells_stay_zero() {
        let lattice = build_price_lattice(100.0, &params(6), 6);
        for i in 0..=6 {
            for j in (i + 1)..=6 {
                assert_eq!(lattice[(j, i)], 0.0, "cell ({j}, {i})");
            }
        }
    }
}

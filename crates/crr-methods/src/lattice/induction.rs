//! Terminal payoff and backward induction on the option-value lattice.

use super::parameters::CrrParameters;
use crr_instruments::{ExerciseType, Payoff};
use crr_math::Grid;

/// Allocate the option-value lattice and fill its last column with the
/// payoff of the corresponding terminal prices.
pub fn terminal_values<P: Payoff + ?Sized>(prices: &Grid, payoff: &P) -> Grid {
    let n = prices.steps();
    let mut values = Grid::zeros(n);
    for j in 0..=n {
        values[(j, n)] = payoff.value(prices[(j, n)]);
    }
    values
}

/// Roll `values` back from the terminal column to `(0, 0)`.
///
/// Node `(j, i)` has its up child at `(j, i + 1)`, weighted by `p`, and its
/// down child at `(j + 1, i + 1)`, weighted by `1 − p`. Columns are
/// processed strictly right to left. With American exercise every node is
/// floored at its immediate exercise value.
pub fn roll_back<P: Payoff + ?Sized>(
    prices: &Grid,
    values: &mut Grid,
    params: &CrrParameters,
    payoff: &P,
    exercise: ExerciseType,
) {
    let n = values.steps();
    let pu = params.probability;
    let pd = 1.0 - pu;
    let early = exercise.allows_early_exercise();

    for i in (0..n).rev() {
        for j in 0..=i {
            let continuation = pu * values[(j, i + 1)] + pd * values[(j + 1, i + 1)];
            let hold = params.discount * continuation;
            values[(j, i)] = if early {
                hold.max(payoff.value(prices[(j, i)]))
            } else {
                hold
            };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lattice::{build_price_lattice, CrrInputs};
    use approx::assert_relative_eq;
    use crr_instruments::{OptionType, PlainVanillaPayoff};

    #[test]
    fn terminal_column_is_intrinsic() {
        let inputs = CrrInputs::new(100.0, 100.0, 0.2, 0.05, 1.0, 8);
        let params = CrrParameters::derive(&inputs).unwrap();
        let prices = build_price_lattice(100.0, &params, 8);
        let put = PlainVanillaPayoff::new(OptionType::Put, 100.0);
        let values = terminal_values(&prices, &put);
        for j in 0..=8 {
            assert_eq!(values[(j, 8)], (100.0 - prices[(j, 8)]).max(0.0));
        }
        assert!(values.nodes(7).iter().all(|&v| v == 0.0));
    }

    #[test]
    fn one_step_call_by_hand() {
        let inputs = CrrInputs::new(100.0, 100.0, 0.2, 0.05, 1.0, 1);
        let params = CrrParameters::derive(&inputs).unwrap();
        let prices = build_price_lattice(100.0, &params, 1);
        let call = PlainVanillaPayoff::new(OptionType::Call, 100.0);
        let mut values = terminal_values(&prices, &call);
        roll_back(&prices, &mut values, &params, &call, ExerciseType::European);

        let expected = (-0.05_f64).exp() * params.probability * (100.0 * params.up - 100.0);
        assert_relative_eq!(values[(0, 0)], expected, max_relative = 1e-14);
    }

    #[test]
    fn american_nodes_dominate_intrinsic() {
        let inputs = CrrInputs::new(100.0, 110.0, 0.3, 0.08, 1.0, 30);
        let params = CrrParameters::derive(&inputs).unwrap();
        let prices = build_price_lattice(100.0, &params, 30);
        let put = PlainVanillaPayoff::new(OptionType::Put, 110.0);
        let mut values = terminal_values(&prices, &put);
        roll_back(&prices, &mut values, &params, &put, ExerciseType::American);
        for (j, i, v) in values.iter_nodes() {
            assert!(v >= put.value(prices[(j, i)]), "node ({j}, {i})");
        }
    }
}

// jukes_cantor.rs - Jukes-Cantor (1969) distance correction

use serde::{Deserialize, Serialize};

use crate::error::{FormulaError, Result};

/// Upper bound (exclusive) on the proportion of differing sites.
/// At 0.75 the correction term reaches zero and the distance is infinite.
pub const MAX_PROPORTION: f64 = 0.75;

/// Number of compared sites assumed when none is given
pub const DEFAULT_SEQUENCE_LENGTH: usize = 100;

/// Corrected evolutionary distance and its sampling variance
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct JukesCantorDistance {
    pub distance: f64,
    pub variance: f64,
}

/// Convert an observed proportion of differing sites `p` into the
/// Jukes-Cantor distance `D = -3/4 ln(1 - 4p/3)`, together with
/// `Var(D) = p(1 - p) / ((1 - 4p/3)^2 L)` for `L` compared sites.
///
/// Fails with [`FormulaError::InvalidArgument`] unless `0 <= p < 0.75`
/// and `sequence_length > 0`.
pub fn jukes_cantor_distance(p: f64, sequence_length: usize) -> Result<JukesCantorDistance> {
    // NaN fails both comparisons and is rejected here too
    if !(0.0..MAX_PROPORTION).contains(&p) {
        return Err(FormulaError::InvalidArgument(format!(
            "Proportion of differing sites must be in [0, 0.75), got {}",
            p
        )));
    }
    if sequence_length == 0 {
        return Err(FormulaError::InvalidArgument(
            "Sequence length must be greater than 0".to_string(),
        ));
    }

    let correction = 1.0 - 4.0 / 3.0 * p;
    let distance = -0.75 * correction.ln();
    let variance = p * (1.0 - p) / (correction.powi(2) * sequence_length as f64);

    tracing::debug!(p, sequence_length, distance, variance, "jukes-cantor distance");
    Ok(JukesCantorDistance { distance, variance })
}

/// Inverse of [`jukes_cantor_distance`]: the proportion of differing sites
/// expected after a corrected distance `d`, `p = 3/4 (1 - e^(-4d/3))`.
///
/// `d` is not validated; negative distances give negative proportions.
pub fn jukes_cantor_proportion(d: f64) -> f64 {
    let correction = (-4.0 / 3.0 * d).exp();
    let p = 0.75 * (1.0 - correction);

    tracing::debug!(d, p, "jukes-cantor proportion");
    p
}

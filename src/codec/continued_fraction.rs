use log::{debug, trace};

use crate::settings::CodecSettings;
use crate::types::Convergent;

/// Approximates a fractional amount by continued-fraction expansion.
///
/// # Arguments
/// * `fraction` - The value to approximate, expected in `[0, 1)`.
/// * `settings` - Tolerance and iteration bound.
///
/// # Returns
/// The first convergent within `settings.tolerance` of `fraction`, reduced to lowest terms.
/// Expansion also stops when the residual is exactly zero, when the next term or convergent
/// would overflow `u64`, or after `settings.max_iterations` steps, and the latest convergent is
/// returned. `0.0` yields `0/1`.
pub fn best_rational(fraction: f64, settings: &CodecSettings) -> Convergent {
    // Seeds of the recurrence: h(-2)/k(-2) = 0/1, h(-1)/k(-1) = 1/0
    let (mut h_prev, mut h_curr) = (0u64, 1u64);
    let (mut k_prev, mut k_curr) = (1u64, 0u64);
    let mut residual = fraction;
    let mut steps = 0u32;

    while steps < settings.max_iterations {
        if k_curr != 0 && (fraction - h_curr as f64 / k_curr as f64).abs() <= settings.tolerance
        {
            break;
        }

        let floor = residual.floor();
        // Terms at or past 2^64 do not fit the u64 accumulators
        if floor >= u64::MAX as f64 {
            debug!(
                "term {} exceeds u64 after {} steps approximating {}, keeping {}/{}",
                floor, steps, fraction, h_curr, k_curr
            );
            break;
        }
        let a = floor as u64;

        let next = a
            .checked_mul(h_curr)
            .and_then(|h| h.checked_add(h_prev))
            .zip(a.checked_mul(k_curr).and_then(|k| k.checked_add(k_prev)));
        let Some((h_next, k_next)) = next else {
            debug!(
                "convergent overflow after {} steps approximating {}, keeping {}/{}",
                steps, fraction, h_curr, k_curr
            );
            break;
        };

        h_prev = h_curr;
        h_curr = h_next;
        k_prev = k_curr;
        k_curr = k_next;
        steps += 1;
        trace!("step {}: a = {}, convergent {}/{}", steps, a, h_curr, k_curr);

        let remainder = residual - floor;
        if remainder == 0.0 {
            break;
        }
        residual = 1.0 / remainder;
    }

    if steps == settings.max_iterations {
        debug!(
            "iteration bound {} reached approximating {}",
            settings.max_iterations, fraction
        );
    }

    if k_curr == 0 {
        return Convergent {
            numerator: 0,
            denominator: 1,
            steps,
        };
    }

    let divisor = gcd(h_curr, k_curr).max(1);
    Convergent {
        numerator: h_curr / divisor,
        denominator: k_curr / divisor,
        steps,
    }
}

/// Greatest common divisor by the Euclidean algorithm
pub fn gcd(mut a: u64, mut b: u64) -> u64 {
    while b != 0 {
        let r = a % b;
        a = b;
        b = r;
    }
    a
}

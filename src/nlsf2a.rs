//! Conversion of normalized line spectral frequencies back to LPC
//! coefficients.
//!
//! Each NLSF is mapped to a cosine through the shared lookup table with
//! piecewise linear interpolation, the symmetric and antisymmetric factors
//! are rebuilt from their roots by a product recurrence, and the factors
//! are recombined into Q12 predictor coefficients. The cosine values enter
//! the recurrences in a low-sensitivity order so that rounding noise lands
//! where it perturbs the reconstruction least. A final loop bandwidth
//! expands the result until the stability check passes.

use crate::bwexpander_32::bwexpander_32;
use crate::lpc_fit::lpc_fit;
use crate::lpc_inv_pred_gain::lpc_inverse_pred_gain;
use crate::math;
use crate::table_lsf_cos::{LSF_COS_TAB_Q12, LSF_COS_TAB_SZ};
use crate::MAX_ORDER_LPC;

const QA: i32 = 16;
const MAX_STABILIZE_ITERATIONS: usize = 16;
const SHIFT_QA1_TO_Q12: i32 = QA + 1 - 12;

const ORDERING16: [usize; 16] = [0, 15, 8, 7, 4, 11, 12, 3, 2, 13, 10, 5, 6, 9, 14, 1];
const ORDERING10: [usize; 10] = [0, 9, 6, 3, 4, 5, 8, 1, 2, 7];

/// Converts an NLSF vector in Q15 into LPC coefficients in Q12.
///
/// `a_q12` and `nlsf_q15` must have the same length, which must be one of
/// the supported predictor orders (10 or 16). The NLSF values must be
/// non-negative.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap,
    clippy::cast_sign_loss
)]
pub fn nlsf2a(a_q12: &mut [i16], nlsf_q15: &[i16]) {
    assert_eq!(a_q12.len(), nlsf_q15.len(), "order mismatch");
    let order = a_q12.len();
    assert!(
        order == 10 || order == 16,
        "only 10- and 16-tap predictors are supported"
    );

    let ordering: &[usize] = if order == 16 {
        &ORDERING16
    } else {
        &ORDERING10
    };

    // Interpolated table cosines of the NLSFs, in QA, reordered for low
    // sensitivity to rounding.
    let mut cos_lsf_qa = [0i32; MAX_ORDER_LPC];
    for (&nlsf, &index) in nlsf_q15.iter().zip(ordering.iter()) {
        let nlsf = i32::from(nlsf);
        assert!(nlsf >= 0, "NLSF values must be non-negative");

        let f_int = (nlsf >> (15 - 7)) as usize;
        let f_frac = nlsf - ((f_int as i32) << (15 - 7));
        assert!(f_int < LSF_COS_TAB_SZ, "index out of cosine table range");

        let cos_val = i32::from(LSF_COS_TAB_Q12[f_int]);
        let delta = i32::from(LSF_COS_TAB_Q12[f_int + 1]) - cos_val;
        cos_lsf_qa[index] = math::rshift_round64(
            (i64::from(cos_val) << 8) + i64::from(delta) * i64::from(f_frac),
            20 - QA,
        ) as i32;
    }

    let dd = order / 2;

    let mut p = [0i32; MAX_ORDER_LPC / 2 + 1];
    let mut q = [0i32; MAX_ORDER_LPC / 2 + 1];
    poly_from_roots(&mut p[..=dd], &cos_lsf_qa[..order]);
    poly_from_roots(&mut q[..=dd], &cos_lsf_qa[1..order]);

    // Recombine the factor pair into predictor coefficients, exploiting the
    // symmetry of P and the antisymmetry of Q.
    let mut a32_qa1 = [0i32; MAX_ORDER_LPC];
    for k in 0..dd {
        let ptmp = p[k + 1].wrapping_add(p[k]);
        let qtmp = q[k + 1].wrapping_sub(q[k]);
        a32_qa1[k] = qtmp.wrapping_neg().wrapping_sub(ptmp);
        a32_qa1[order - k - 1] = qtmp.wrapping_sub(ptmp);
    }

    lpc_fit(a_q12, &mut a32_qa1[..order], 12, QA + 1);

    for iteration in 0..MAX_STABILIZE_ITERATIONS {
        if lpc_inverse_pred_gain(a_q12) != 0 {
            return;
        }

        // Unstable after rounding: pull the poles inward, harder on every
        // pass, and retry.
        let chirp_q16 = (1 << 16) - (2 << iteration);
        bwexpander_32(&mut a32_qa1[..order], chirp_q16);
        for (dst, &value) in a_q12.iter_mut().zip(a32_qa1[..order].iter()) {
            *dst = math::rshift_round(value, SHIFT_QA1_TO_Q12) as i16;
        }
    }
}

/// Builds a factor polynomial from the cosines of its roots (every other
/// entry of `clsf`) by the stepwise product recurrence.
fn poly_from_roots(out: &mut [i32], clsf: &[i32]) {
    let dd = out.len() - 1;
    debug_assert!(dd > 0, "polynomial order must be positive");
    debug_assert!(clsf.len() >= if dd <= 1 { 1 } else { 2 * dd - 1 });

    out[0] = 1 << QA;
    out[1] = -clsf[0];

    for k in 1..dd {
        let ftmp = clsf[2 * k];
        out[k + 1] = (out[k - 1] << 1)
            .wrapping_sub(math::rshift_round64(i64::from(ftmp) * i64::from(out[k]), QA) as i32);
        for n in (2..=k).rev() {
            let product = math::rshift_round64(i64::from(ftmp) * i64::from(out[n - 1]), QA) as i32;
            out[n] = out[n].wrapping_add(out[n - 2]).wrapping_sub(product);
        }
        out[1] = out[1].wrapping_sub(ftmp);
    }
}

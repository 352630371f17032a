use nlsf::{a2nlsf, nlsf2a, Convergence};
use proptest::prelude::*;

/// One cosine-table cell in Q15; both directions interpolate inside a cell,
/// so a round trip stays comfortably within it.
const ROUND_TRIP_TOLERANCE: i32 = 256;

fn widen_to_q16<const N: usize>(a_q12: &[i16; N]) -> [i32; N] {
    let mut a_q16 = [0i32; N];
    for (dst, &src) in a_q16.iter_mut().zip(a_q12.iter()) {
        *dst = i32::from(src) << 4;
    }
    a_q16
}

#[test]
fn known_vector_survives_a_round_trip() {
    let nlsf_q15: [i16; 16] = [
        1496, 2925, 5334, 8052, 9524, 10640, 13688, 15291, 16759, 19462, 21048, 22212, 25217,
        26443, 29500, 31037,
    ];

    let mut a_q12 = [0i16; 16];
    nlsf2a(&mut a_q12, &nlsf_q15);

    let mut round = [0i16; 16];
    let outcome = a2nlsf(&mut round, &widen_to_q16(&a_q12));

    assert_eq!(outcome, Convergence::Converged);
    for (k, (&out, &inp)) in round.iter().zip(nlsf_q15.iter()).enumerate() {
        let error = (i32::from(out) - i32::from(inp)).abs();
        assert!(error <= ROUND_TRIP_TOLERANCE, "index {k}: {out} vs {inp}");
    }
}

/// Strictly increasing NLSF vectors with comfortable margins from the range
/// boundaries and from each other.
fn interlaced_nlsf(order: usize) -> impl Strategy<Value = Vec<i16>> {
    proptest::collection::vec(600..1700i32, order).prop_map(|gaps| {
        let mut acc = 500i32;
        gaps.into_iter()
            .map(|gap| {
                acc += gap;
                acc as i16
            })
            .collect()
    })
}

fn round_trip_properties<const N: usize>(nlsf_q15: &[i16]) {
    let mut a_q12 = [0i16; N];
    nlsf2a(&mut a_q12, nlsf_q15);
    let a_q16 = widen_to_q16(&a_q12);

    let mut out = [0i16; N];
    let first = a2nlsf(&mut out, &a_q16);

    assert!(out.iter().all(|&v| (0..=32767).contains(&i32::from(v))));
    assert!(out.windows(2).all(|w| w[0] < w[1]));

    let mut again = [0i16; N];
    let second = a2nlsf(&mut again, &a_q16);
    assert_eq!(first, second);
    assert_eq!(out, again);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn sixteen_tap_round_trips_stay_ordered_in_range_and_deterministic(
        nlsf in interlaced_nlsf(16)
    ) {
        round_trip_properties::<16>(&nlsf);
    }

    #[test]
    fn ten_tap_round_trips_stay_ordered_in_range_and_deterministic(
        nlsf in interlaced_nlsf(10)
    ) {
        round_trip_properties::<10>(&nlsf);
    }
}

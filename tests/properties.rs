//! Property tests for the six quantified invariants of the
//! justification contract (spec §8). Each `Break` sequence is
//! generated with `x0` non-decreasing (the contractual input shape for
//! both justifiers outside of a tab reset), ending in a forced
//! terminator.

use justify::{flags, hq_just, hs_just, Break, BreakFlags, Params};
use proptest::prelude::*;

/// The feasibility-bound formula from spec §3/§4: the maximum amount of
/// space a line may have compressed out of it, for `total_space` units
/// of accumulated whitespace. Reimplemented here (rather than reusing
/// `Params::shrink_bound`, which is crate-private) because the formula
/// itself, not whichever private helper computes it, is the contract
/// this property checks.
fn shrink_bound(max_neg_space: u16, total_space: i64) -> i64 {
    (total_space * i64::from(max_neg_space) + 128) >> 8
}

fn arb_params() -> impl Strategy<Value = Params> {
    (10i32..=300, 0u16..=256).prop_map(|(set_width, max_neg_space)| {
        Params::new(set_width).max_neg_space(max_neg_space)
    })
}

/// One break's shape: how wide its continuation glue is, and what kind
/// of break it is.
#[derive(Debug, Clone, Copy)]
enum Kind {
    Forced,
    Space { glue: i32 },
    Hyphen { penalty: u32 },
}

fn arb_kind() -> impl Strategy<Value = Kind> {
    prop_oneof![
        Just(Kind::Forced),
        (0i32..=12).prop_map(|glue| Kind::Space { glue }),
        (0u32..=2000).prop_map(|penalty| Kind::Hyphen { penalty }),
    ]
}

/// A monotone (in `x0`) break sequence of length `2..=len_max`, ending
/// in a forced terminator. Deltas between consecutive `x0`s are in
/// `1..=40` so lines of a realistic width actually span several
/// breaks.
fn arb_monotone_breaks(len_max: usize) -> impl Strategy<Value = Vec<Break>> {
    (2..=len_max).prop_flat_map(|n| {
        (
            prop::collection::vec(1i32..=40, n),
            prop::collection::vec(arb_kind(), n - 1),
        )
            .prop_map(move |(deltas, kinds)| {
                let mut x0 = 0i32;
                let mut breaks = Vec::with_capacity(n);
                for kind in kinds {
                    x0 += deltas[breaks.len()];
                    breaks.push(match kind {
                        Kind::Forced => Break::new(x0, x0, 0, BreakFlags::NONE),
                        Kind::Space { glue } => Break::new(
                            x0,
                            x0 + glue,
                            0,
                            BreakFlags::from_bits(flags::IS_SPACE),
                        ),
                        Kind::Hyphen { penalty } => {
                            Break::new(x0, x0, penalty, BreakFlags::from_bits(flags::IS_HYPHEN))
                        }
                    });
                }
                x0 += deltas[breaks.len()];
                breaks.push(Break::terminator(x0));
                breaks
            })
    })
}

proptest! {
    /// Property 1: path reconstruction consistency, for HQ.
    #[test]
    fn hq_result_ends_at_terminal_and_strictly_increases(
        breaks in arb_monotone_breaks(20),
        params in arb_params(),
    ) {
        let result = hq_just(&breaks, &params).unwrap();
        if !result.is_empty() {
            prop_assert_eq!(*result.last().unwrap(), breaks.len() - 1);
            for w in result.windows(2) {
                prop_assert!(w[0] < w[1]);
            }
        }
    }

    /// Property 1, for HS: greedy always finds a feasible path (it
    /// never reports an empty result), and always ends at the
    /// terminator.
    #[test]
    fn hs_result_ends_at_terminal_and_strictly_increases(
        breaks in arb_monotone_breaks(20),
        params in arb_params(),
    ) {
        let mut breaks = breaks;
        let result = hs_just(&mut breaks, &params).unwrap();
        prop_assert!(!result.is_empty());
        prop_assert_eq!(*result.last().unwrap(), breaks.len() - 1);
        for w in result.windows(2) {
            prop_assert!(w[0] < w[1]);
        }
    }

    /// Property 4: determinism. Two runs on identical input produce
    /// byte-identical results.
    #[test]
    fn hq_is_deterministic(breaks in arb_monotone_breaks(20), params in arb_params()) {
        let first = hq_just(&breaks, &params).unwrap();
        let second = hq_just(&breaks, &params).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn hs_is_deterministic(breaks in arb_monotone_breaks(20), params in arb_params()) {
        let mut a = breaks.clone();
        let mut b = breaks;
        let first = hs_just(&mut a, &params).unwrap();
        let second = hs_just(&mut b, &params).unwrap();
        prop_assert_eq!(first, second);
        // The monotonicity pre-pass is deterministic too: running it
        // via two separate calls leaves the (already-monotone) input
        // bytewise identical.
        prop_assert_eq!(a, b);
    }

    /// Property 5: feasibility bound, for HQ.
    #[test]
    fn hq_respects_feasibility_bound(breaks in arb_monotone_breaks(20), params in arb_params()) {
        let result = hq_just(&breaks, &params).unwrap();
        let mut start = 0usize;
        let mut x = 0i64;
        for &end in &result {
            let total_space: i64 = breaks[start..=end]
                .iter()
                .filter(|b| b.flags.is_space())
                .map(|b| i64::from(b.x1) - i64::from(b.x0))
                .sum();
            let bound = i64::from(params.set_width) + shrink_bound(params.max_neg_space, total_space);
            // The forced terminal line is exempt (spec §4.E: "a forced
            // last line ... has nowhere else to go").
            if end != breaks.len() - 1 {
                prop_assert!(i64::from(breaks[end].x0) - x <= bound);
            }
            start = end + 1;
            x = i64::from(breaks[end].x1);
        }
    }

    /// Property 5, for HS.
    #[test]
    fn hs_respects_feasibility_bound(breaks in arb_monotone_breaks(20), params in arb_params()) {
        let mut breaks = breaks;
        let result = hs_just(&mut breaks, &params).unwrap();
        let mut start = 0usize;
        let mut x = 0i64;
        for &end in &result {
            let total_space: i64 = breaks[start..=end]
                .iter()
                .filter(|b| b.flags.is_space())
                .map(|b| i64::from(b.x1) - i64::from(b.x0))
                .sum();
            let bound = i64::from(params.set_width) + shrink_bound(params.max_neg_space, total_space);
            if end != breaks.len() - 1 {
                prop_assert!(i64::from(breaks[end].x0) - x <= bound);
            }
            start = end + 1;
            x = i64::from(breaks[end].x1);
        }
    }

    /// Property 2: optimality. Exhaustively enumerate every feasible
    /// increasing break sequence ending at the terminator for small
    /// inputs, and check HQ finds the cheapest one.
    #[test]
    fn hq_matches_brute_force_optimum(
        breaks in arb_monotone_breaks(7),
        params in arb_params(),
    ) {
        let n = breaks.len();
        let hq_result = hq_just(&breaks, &params).unwrap();

        let cost_of = |seq: &[usize]| -> i64 {
            let mut x = 0i32;
            let mut total = 0i64;
            for &b in seq {
                total += justify::penalty::edge_cost(x, &breaks, b, params.set_width);
                x = breaks[b].x1;
            }
            total
        };
        let is_feasible_edge = |pred: Option<usize>, cand: usize| -> bool {
            if cand == n - 1 {
                return true;
            }
            let x_prev = pred.map_or(0, |p| breaks[p].x1);
            let lo = pred.map_or(0, |p| p + 1);
            let total_space: i64 = breaks[lo..=cand]
                .iter()
                .filter(|b| b.flags.is_space())
                .map(|b| i64::from(b.x1) - i64::from(b.x0))
                .sum();
            let bound = i64::from(x_prev) + i64::from(params.set_width) + shrink_bound(params.max_neg_space, total_space);
            i64::from(breaks[cand].x0) <= bound
        };
        let is_feasible_seq = |seq: &[usize]| -> bool {
            let mut pred = None;
            for &cand in seq {
                if !is_feasible_edge(pred, cand) {
                    return false;
                }
                pred = Some(cand);
            }
            true
        };

        let mut best = i64::MAX;
        for mask in 0..(1u32 << (n - 1)) {
            let mut seq: Vec<usize> = (0..n - 1).filter(|i| mask & (1 << i) != 0).collect();
            seq.push(n - 1);
            if is_feasible_seq(&seq) {
                best = best.min(cost_of(&seq));
            }
        }

        if hq_result.is_empty() {
            // HQ found no feasible path: brute force must agree (the
            // terminal break is always individually feasible, so this
            // only fires if even `[n - 1]` alone is infeasible, which
            // cannot happen since `is_feasible_edge` special-cases it
            // -- kept as a guard rather than an unreachable!().
            prop_assert_eq!(best, i64::MAX);
        } else {
            prop_assert_eq!(cost_of(&hq_result), best);
        }
    }

    /// Property 6: the monotonicity pre-pass is idempotent, including
    /// on inputs with a genuine tab-reset backward jump in `x0`.
    #[test]
    fn monotonicity_prepass_is_idempotent(
        mut breaks in arb_monotone_breaks(15),
        reset_at in 1usize..14,
    ) {
        if reset_at < breaks.len() {
            // Force a backward jump to simulate a tab reset.
            let reset_x0 = breaks[reset_at].x0 / 2;
            breaks[reset_at] = Break::new(
                reset_x0,
                reset_x0,
                breaks[reset_at].penalty,
                breaks[reset_at].flags,
            );
        }
        let mut once = breaks.clone();
        justify::greedy::repair_monotonicity(&mut once);
        let mut twice = once.clone();
        justify::greedy::repair_monotonicity(&mut twice);
        prop_assert_eq!(once, twice);
    }
}

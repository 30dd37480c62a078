//! Penalty functions shared by both justifiers.
//!
//! There are two components to the cost of ending a line at a given
//! break: the geometric cost of the resulting line being the wrong
//! width ([`dev2`]), and the break's own intrinsic
//! [`penalty`](crate::Break::penalty) (e.g. a large constant for a
//! discretionary hyphen). [`edge_cost`] combines the two into the
//! weight [`hq_just`](crate::hq_just) assigns to a graph edge.

use crate::Break;

/// Squared deviation from the target width for ending a line at
/// `breaks[break_idx]`, given that the previous line ended at extent
/// `x`.
///
/// Returns `0` if the candidate break is neither a space nor a
/// hyphen: ending a line at an "unreal" break (for example, a forced
/// break at an arbitrary position) is not charged a geometric
/// penalty, since there was no choice of where the text itself could
/// have continued.
///
/// # Examples
///
/// ```
/// use justify::{Break, BreakFlags, flags, penalty::dev2};
///
/// let breaks = [Break::new(104, 104, 0, BreakFlags::from_bits(flags::IS_SPACE))];
/// // Previous line ended at x = 0, target width 100: this break sits
/// // 4 units past the target, so the penalty is 4² = 16.
/// assert_eq!(dev2(0, &breaks, 0, 100), 16);
/// ```
#[must_use]
pub fn dev2(x: i32, breaks: &[Break], break_idx: usize, set_width: i32) -> i64 {
    let b = breaks[break_idx];
    if !b.flags.is_real() {
        return 0;
    }
    let dev = i64::from(b.x0) - (i64::from(x) + i64::from(set_width));
    dev * dev
}

/// The full cost of an edge from predecessor `p` (whose line ends at
/// extent `x1_pred`) to candidate terminating break `breaks[break_idx]`.
///
/// This is [`dev2`] plus the break's own intrinsic penalty.
#[must_use]
pub fn edge_cost(x1_pred: i32, breaks: &[Break], break_idx: usize, set_width: i32) -> i64 {
    dev2(x1_pred, breaks, break_idx, set_width) + i64::from(breaks[break_idx].penalty)
}

//! The high-speed (greedy) justifier.
//!
//! [`hs_just`] picks, for each line, the best of the breaks it can
//! reach without any look-ahead past the line currently being built.
//! It is the fast, line-by-line counterpart to
//! [`hq_just`](crate::hq_just)'s whole-paragraph shortest path, and is
//! the only one of the two that understands tab stops.

use crate::error::{JustifyError, ProgrammingError};
use crate::{flags, Break, Params};

/// Repair in-place the monotonicity of `breaks` before running the
/// greedy scan.
///
/// `breaks[i].x0` is expected to be non-decreasing, except right
/// after a tab resets the horizontal position. Where that happens,
/// this walks back from `i - 1` and inflates the penalty of every
/// break whose `x0` still exceeds `breaks[i].x0`, by `i32::MAX / 2`.
/// This biases the greedy scanner away from ever selecting one of
/// those breaks, since doing so would strand material that belongs
/// before the tab on the previous (already-closed) tab cell.
///
/// Running this twice on the same array is a no-op the second time:
/// once a break's penalty has been inflated past `i32::MAX / 2`, the
/// "inflate again" condition (`penalty < i32::MAX / 2`) no longer
/// holds, and the `x0` values this pass reads are unchanged by the
/// first pass (only `penalty` was touched).
pub fn repair_monotonicity(breaks: &mut [Break]) {
    const HALF_MAX: u32 = i32::MAX as u32 / 2;

    for i in 1..breaks.len() {
        if breaks[i].x0 < breaks[i - 1].x0 {
            let cutoff = breaks[i].x0;
            for j in (0..i).rev() {
                if breaks[j].x0 <= cutoff {
                    break;
                }
                if breaks[j].penalty < HALF_MAX {
                    breaks[j].penalty += HALF_MAX;
                }
            }
        }
    }
}

/// Compute a greedy, high-speed justification.
///
/// `breaks` is mutated in place by the [monotonicity
/// pre-pass](repair_monotonicity): breaks that would strand material
/// behind a tab reset have their penalty inflated so the scanner never
/// selects them. This is an accepted, documented side effect rather
/// than an incidental one — it is why the function takes `&mut`
/// instead of `&`.
///
/// Returns the chosen break indices, one per line, in paragraph order.
/// The last entry is always `breaks.len() - 1`.
///
/// # Errors
///
/// Returns [`ProgrammingError::NonPositiveSetWidth`] if
/// `params.set_width <= 0`, or [`ProgrammingError::EmptyInput`] if
/// `breaks` is empty.
///
/// # Examples
///
/// ```
/// use justify::{hs_just, Break, BreakFlags, Params, flags};
///
/// let mut breaks = vec![
///     Break::new(50, 54, 0, BreakFlags::from_bits(flags::IS_SPACE)),
///     Break::new(100, 104, 0, BreakFlags::from_bits(flags::IS_SPACE)),
///     Break::new(150, 150, 0, BreakFlags::NONE),
/// ];
/// let params = Params::new(100);
/// assert_eq!(hs_just(&mut breaks, &params).unwrap(), vec![1, 2]);
/// ```
pub fn hs_just(breaks: &mut [Break], params: &Params) -> Result<Vec<usize>, JustifyError> {
    if params.set_width <= 0 {
        return Err(ProgrammingError::NonPositiveSetWidth(params.set_width).into());
    }
    if breaks.is_empty() {
        return Err(ProgrammingError::EmptyInput.into());
    }

    repair_monotonicity(breaks);

    let n = breaks.len();
    let tab_width = i64::from(params.effective_tab_width());
    let mut result = Vec::new();
    let mut x: i64 = 0;
    let mut i = 0usize;

    while i < n {
        let mut total_space: i64 = 0;
        let mut tab_offset: i64 = 0;

        let space_err = i64::from(breaks[i].x0) - (x + i64::from(params.set_width));
        let mut best_penalty = space_err * space_err + i64::from(breaks[i].penalty);
        let mut best_idx = i;

        if breaks[i].flags.is_tab() {
            tab_offset = next_tab_offset(breaks[i].x0, tab_offset, x, tab_width);
        }
        if breaks[i].flags.is_space() {
            total_space += i64::from(breaks[i].x1) - i64::from(breaks[i].x0);
        }
        i += 1;

        while i < n {
            let shifted_x0 = i64::from(breaks[i].x0) + tab_offset;
            let bound = x + i64::from(params.set_width) + params.shrink_bound(total_space);
            if shifted_x0 > bound {
                break;
            }

            let space_err = shifted_x0 - (x + i64::from(params.set_width));
            let mut penalty = space_err * space_err;

            if breaks[i].flags.is_tab() {
                tab_offset = next_tab_offset(breaks[i].x0, tab_offset, x, tab_width);
                total_space = 0;
            }

            if penalty > best_penalty {
                break;
            }
            penalty += i64::from(breaks[i].penalty);
            if penalty <= best_penalty {
                best_penalty = penalty;
                best_idx = i;
            }

            if breaks[i].flags.is_space() {
                total_space += i64::from(breaks[i].x1) - i64::from(breaks[i].x0);
            }
            i += 1;
        }

        result.push(best_idx);
        x = i64::from(breaks[best_idx].x1);
        i = best_idx + 1;
    }

    Ok(result)
}

/// Compute the new `tab_offset` after crossing a tab at `x0` (measured
/// before any existing `tab_offset` is applied), given the line's
/// starting extent `x` and the effective `tab_width`.
fn next_tab_offset(x0: i32, tab_offset: i64, x: i64, tab_width: i64) -> i64 {
    let next_stop = ((i64::from(x0) + tab_offset - x) / tab_width + 1) * tab_width;
    x + next_stop - i64::from(x0)
}

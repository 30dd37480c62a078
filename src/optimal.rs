//! The high-quality (optimal) justifier.
//!
//! [`hq_just`] finds the sequence of breaks that minimizes total
//! penalty over the *whole* paragraph, using Dijkstra's shortest-path
//! algorithm over a graph where nodes are breaks (plus a virtual start)
//! and an edge from `p` to `b` costs [`dev2`](crate::penalty::dev2)`(x1
//! of p, b)` `+ breaks[b].penalty`. Rather than considering every edge
//! out of a node, each visit computes one pivot — the break closest to
//! the ideal line width — and spawns a scan walking outward from it in
//! each direction, stopping once the scan would produce a worse edge
//! than one already found. This keeps total queue inserts at `O(n)`
//! even though the shortest-path graph itself is dense.

use crate::error::{JustifyError, ProgrammingError};
use crate::queue::{BreakRef, Entry, PriorityQueue, Work};
use crate::{Break, Params};

#[derive(Debug, Clone, Copy)]
struct ScratchRow {
    total_space: i64,
    dist: Option<i64>,
    pred: BreakRef,
    nl_left: Option<usize>,
    nl_right: Option<usize>,
}

impl ScratchRow {
    const fn unvisited() -> Self {
        ScratchRow {
            total_space: 0,
            dist: None,
            pred: BreakRef::Start,
            nl_left: None,
            nl_right: None,
        }
    }
}

/// Row index into the scratch table for a [`BreakRef`]: row 0 is the
/// virtual start, row `i + 1` is `breaks[i]`. This is the same "start
/// sentinel plus one" layout the reference implementation gets by
/// biasing a pointer one element into its scratch array, made explicit
/// instead of relying on pointer arithmetic one element before the
/// allocation.
const fn row_idx(b: BreakRef) -> usize {
    match b {
        BreakRef::Start => 0,
        BreakRef::At(i) => i + 1,
    }
}

fn idx(b: BreakRef) -> i64 {
    match b {
        BreakRef::Start => -1,
        BreakRef::At(i) => i as i64,
    }
}

fn x_of(b: BreakRef, breaks: &[Break]) -> i32 {
    match b {
        BreakRef::Start => 0,
        BreakRef::At(i) => breaks[i].x1,
    }
}

/// The break at which deviation from the ideal line width stops
/// decreasing and starts increasing, scanning rightward from `b`. The
/// line ending at the returned break is just short of `set_width`; the
/// next break (if any) would overshoot it.
///
/// `b` may be [`BreakRef::Start`]; the returned pivot may likewise be
/// `Start` if even `breaks[0]` already overshoots the target width.
fn find_min_dev_pt(b: BreakRef, breaks: &[Break], set_width: i32) -> BreakRef {
    let x_target = i64::from(x_of(b, breaks)) + i64::from(set_width);
    let start = match b {
        BreakRef::Start => 0,
        BreakRef::At(i) => i + 1,
    };
    let mut i = start;
    while i < breaks.len() && i64::from(breaks[i].x0) <= x_target {
        i += 1;
    }
    if i == 0 {
        BreakRef::Start
    } else {
        BreakRef::At(i - 1)
    }
}

/// Offer `new_dist` as a candidate shortest distance to `target`,
/// arriving via predecessor `pred`. Inserts a fresh
/// [`Work::Visit`] if `target` has never been reached, or relocates
/// its existing queue entry if `new_dist` improves on the best distance
/// found so far. Ties are left alone: the first discovery of a given
/// distance wins, matching the queue's stable insertion order.
fn relax(
    rows: &mut [ScratchRow],
    queue: &mut PriorityQueue,
    target: usize,
    pred: BreakRef,
    new_dist: i64,
) -> Result<(), ProgrammingError> {
    let row = &mut rows[row_idx(BreakRef::At(target))];
    match row.dist {
        None => {
            queue.insert_by_dist(Entry {
                dist: new_dist,
                work: Work::Visit(BreakRef::At(target)),
            });
            row.dist = Some(new_dist);
            row.pred = pred;
        }
        Some(old_dist) if new_dist < old_dist => {
            queue.move_entry(old_dist, Work::Visit(BreakRef::At(target)), new_dist)?;
            row.dist = Some(new_dist);
            row.pred = pred;
        }
        _ => {}
    }
    Ok(())
}

/// Compute a high quality (optimal) justification.
///
/// `breaks` is read-only: unlike [`hs_just`](crate::hs_just), the
/// optimal justifier performs no monotonicity repair and has no notion
/// of tab stops.
///
/// Returns the chosen break indices, one per line, in paragraph order;
/// the last entry is always `breaks.len() - 1`. If no feasible sequence
/// of breaks reaches the final break, returns `Ok(Vec::new())` — this
/// is a domain condition, not an error.
///
/// # Errors
///
/// Returns [`ProgrammingError::NonPositiveSetWidth`] if
/// `params.set_width <= 0`, or [`ProgrammingError::EmptyInput`] if
/// `breaks` is empty. Also propagates [`ProgrammingError::QueueEntryNotFound`]
/// if the internal priority queue's invariants are ever violated; this
/// should be unreachable and indicates a bug in this module.
///
/// # Examples
///
/// ```
/// use justify::{hq_just, Break, BreakFlags, Params, flags};
///
/// let breaks = vec![
///     Break::new(50, 54, 0, BreakFlags::from_bits(flags::IS_SPACE)),
///     Break::new(100, 104, 0, BreakFlags::from_bits(flags::IS_SPACE)),
///     Break::new(150, 150, 0, BreakFlags::NONE),
/// ];
/// let params = Params::new(100).max_neg_space(128);
/// assert_eq!(hq_just(&breaks, &params).unwrap(), vec![1, 2]);
/// ```
pub fn hq_just(breaks: &[Break], params: &Params) -> Result<Vec<usize>, JustifyError> {
    hq_just_inner(breaks, params, &mut None)
}

/// Test-only instrumented wrapper around [`hq_just`] that additionally
/// records the `dist` of every [`Work::Visit`] entry in the order it was
/// popped, so property tests can check the Dijkstra finalization
/// invariant (property 3 of the justification contract: once a break's
/// distance is finalized, no later finalization can undercut it)
/// without reaching into the queue's private state.
#[cfg(test)]
pub(crate) fn hq_just_with_visit_trace(
    breaks: &[Break],
    params: &Params,
) -> Result<(Vec<usize>, Vec<i64>), JustifyError> {
    let mut visit_trace = Some(Vec::new());
    let result = hq_just_inner(breaks, params, &mut visit_trace)?;
    Ok((result, visit_trace.unwrap()))
}

/// Shared implementation behind [`hq_just`] and (in tests)
/// [`hq_just_with_visit_trace`]. `visit_trace`, when `Some`, collects
/// the `dist` of every [`Work::Visit`] entry as it is popped.
///
/// The queue's head is only popped for a [`Work::Visit`] entry (which
/// is finalized and consumed) or for a scan that has exhausted its
/// band (which is dead and must be removed). A scan that still has
/// room to advance is left in place and repositioned in-place via
/// [`PriorityQueue::move_entry`], exactly as the reference
/// implementation's `queue_move` does: popping it first would remove
/// it from the live window before that repositioning call could find
/// it, and reinserting it instead of moving it would blow the `3n + 1`
/// capacity bound (§4.F) since a scan can advance up to `n` times.
fn hq_just_inner(
    breaks: &[Break],
    params: &Params,
    visit_trace: &mut Option<Vec<i64>>,
) -> Result<Vec<usize>, JustifyError> {
    if params.set_width <= 0 {
        return Err(ProgrammingError::NonPositiveSetWidth(params.set_width).into());
    }
    if breaks.is_empty() {
        return Err(ProgrammingError::EmptyInput.into());
    }

    let n = breaks.len();
    let set_width = params.set_width;

    let mut rows = vec![ScratchRow::unvisited(); n + 1];
    let mut total_space: i64 = 0;
    for (i, b) in breaks.iter().enumerate() {
        if b.flags.is_space() {
            total_space += i64::from(b.x1) - i64::from(b.x0);
        }
        rows[i + 1].total_space = total_space;
    }
    rows[0].dist = Some(0);

    let mut queue = PriorityQueue::with_capacity(3 * n + 1);
    queue.insert_by_dist(Entry {
        dist: 0,
        work: Work::Visit(BreakRef::Start),
    });

    let mut reached_end = false;

    while let Some(Entry { dist, work }) = queue.peek().copied() {
        match work {
            Work::Visit(b) => {
                queue.pop_head();
                if let Some(trace) = visit_trace {
                    trace.push(dist);
                }
                if b == BreakRef::At(n - 1) {
                    reached_end = true;
                    break;
                }

                log::trace!("visit {:?}, dist {}, pred {:?}", b, dist, rows[row_idx(b)].pred);

                let x_prev = x_of(b, breaks);
                let min_dev_pt = find_min_dev_pt(b, breaks, set_width);

                if idx(min_dev_pt) > idx(b) {
                    let mdp = min_dev_pt.index().expect("min_dev_pt > b implies a real index");
                    let new_dist = dist + crate::penalty::dev2(x_prev, breaks, mdp, set_width);
                    queue.insert_by_dist(Entry {
                        dist: new_dist,
                        work: Work::LeftScan(b),
                    });
                    rows[row_idx(b)].nl_left = Some(mdp);
                }

                let next = idx(min_dev_pt) + 1;
                if next < n as i64 {
                    let next = next as usize;
                    let space = rows[row_idx(min_dev_pt)].total_space - rows[row_idx(b)].total_space;
                    let bound = i64::from(x_prev) + i64::from(set_width) + params.shrink_bound(space);
                    // The paragraph's final break is always a valid line
                    // end regardless of overshoot: a forced last line, like
                    // a forced last word, has nowhere else to go.
                    if next == n - 1 || i64::from(breaks[next].x0) <= bound {
                        let new_dist = dist + crate::penalty::dev2(x_prev, breaks, next, set_width);
                        queue.insert_by_dist(Entry {
                            dist: new_dist,
                            work: Work::RightScan(b),
                        });
                        rows[row_idx(b)].nl_right = Some(next);
                    }
                }
            }

            Work::LeftScan(p) => {
                let target = rows[row_idx(p)]
                    .nl_left
                    .expect("LeftScan entry scheduled without a cursor");
                let new_dist = dist + i64::from(breaks[target].penalty);
                relax(&mut rows, &mut queue, target, p, new_dist)?;

                let candidate = target as i64 - 1;
                if candidate > idx(p) {
                    let candidate = candidate as usize;
                    rows[row_idx(p)].nl_left = Some(candidate);
                    let x_prev = x_of(p, breaks);
                    let pred_dist = rows[row_idx(p)].dist.expect("p was already visited");
                    let new_dist = pred_dist + crate::penalty::dev2(x_prev, breaks, candidate, set_width);
                    queue.move_entry(dist, Work::LeftScan(p), new_dist)?;
                } else {
                    rows[row_idx(p)].nl_left = None;
                    queue.pop_head();
                }
            }

            Work::RightScan(p) => {
                let target = rows[row_idx(p)]
                    .nl_right
                    .expect("RightScan entry scheduled without a cursor");
                let new_dist = dist + i64::from(breaks[target].penalty);
                relax(&mut rows, &mut queue, target, p, new_dist)?;

                let candidate = target + 1;
                let space = rows[row_idx(BreakRef::At(target))].total_space - rows[row_idx(p)].total_space;
                let x_prev = x_of(p, breaks);
                let bound = i64::from(x_prev) + i64::from(set_width) + params.shrink_bound(space);
                if candidate < n && (candidate == n - 1 || i64::from(breaks[candidate].x0) <= bound) {
                    rows[row_idx(p)].nl_right = Some(candidate);
                    let pred_dist = rows[row_idx(p)].dist.expect("p was already visited");
                    let new_dist = pred_dist + crate::penalty::dev2(x_prev, breaks, candidate, set_width);
                    queue.move_entry(dist, Work::RightScan(p), new_dist)?;
                } else {
                    rows[row_idx(p)].nl_right = None;
                    queue.pop_head();
                }
            }
        }
    }

    if !reached_end {
        return Ok(Vec::new());
    }

    let mut result = Vec::new();
    let mut cur = BreakRef::At(n - 1);
    loop {
        match cur {
            BreakRef::At(i) => {
                result.push(i);
                cur = rows[row_idx(cur)].pred;
            }
            BreakRef::Start => break,
        }
    }
    result.reverse();
    Ok(result)
}

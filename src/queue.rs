//! The banded-expansion priority queue used by [`hq_just`](crate::hq_just).
//!
//! This is a linear array with a live window `[q_beg, q_end)`, exactly
//! as specified: total inserts across a call are `O(n)`, so the
//! `O(window)` linear search behind [`insert_by_dist`](PriorityQueue::insert_by_dist)
//! and [`move_entry`](PriorityQueue::move_entry) never dominates. A
//! binary heap would need a side table to support decrease-key by
//! `(break_idx, kind)` anyway; the array is simpler and, at this
//! scale, just as fast.

use crate::error::ProgrammingError;

/// A vertex in the break graph: either the virtual paragraph start, or
/// a real break by index.
///
/// This replaces the reference implementation's "scratch pointer
/// biased by one" trick (`s = scratch + 1`, so `s[-1]` is valid) with
/// an explicit sum type.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum BreakRef {
    /// The virtual break before the paragraph's first break, with
    /// `x0 = x1 = 0`.
    Start,
    /// A real break by index into the input slice.
    At(usize),
}

impl BreakRef {
    /// The break index this refers to, or `None` for [`BreakRef::Start`].
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            BreakRef::Start => None,
            BreakRef::At(i) => Some(i),
        }
    }
}

/// One piece of pending work in the banded expansion.
///
/// A [`Work::Visit`] means a break just had its shortest distance
/// finalized and is spawning its scans. A [`Work::LeftScan`]/
/// [`Work::RightScan`] carries the *scanning predecessor* `p` — not
/// the current target — because each scan's target cursor
/// (`nl_left`/`nl_right`) lives in `p`'s scratch row and advances
/// every time the scan is serviced.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Work {
    /// `b` has just had its `dist` finalized.
    Visit(BreakRef),
    /// Scan leftward (toward smaller indices) from predecessor `p`.
    LeftScan(BreakRef),
    /// Scan rightward (toward larger indices) from predecessor `p`.
    RightScan(BreakRef),
}

/// One entry in the [`PriorityQueue`].
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Entry {
    /// Ordering key: total distance (penalty) so far.
    pub dist: i64,
    /// The work this entry represents.
    pub work: Work,
}

/// A linear, `dist`-ordered priority queue with in-place decrease-key.
///
/// The queue keeps all live entries in `[q_beg, q_end)` of a single
/// `Vec`; popping advances `q_beg` rather than shifting the array, so
/// each pop is O(1) at the cost of one dead slot. Capacity `3n + 1`
/// (one [`Work::Visit`] and up to two scans per break) suffices for a
/// paragraph of `n` breaks.
#[derive(Debug)]
pub struct PriorityQueue {
    entries: Vec<Entry>,
    q_beg: usize,
}

impl PriorityQueue {
    /// Create an empty queue with room for `capacity` entries.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        PriorityQueue {
            entries: Vec::with_capacity(capacity),
            q_beg: 0,
        }
    }

    /// `true` if no entries remain in the live window.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.q_beg == self.entries.len()
    }

    /// The entry at the head of the queue (the smallest `dist` in the
    /// live window), without removing it.
    #[must_use]
    pub fn peek(&self) -> Option<&Entry> {
        self.entries.get(self.q_beg)
    }

    /// Insert `entry` so that the live window stays sorted by
    /// non-decreasing `dist`.
    ///
    /// New entries are placed immediately before the first existing
    /// entry with a strictly greater key: ties go after every
    /// equal-keyed entry already present, which is what gives the
    /// queue its stable "first discovery wins" tie-break behavior.
    /// Returns the index the entry was inserted at.
    pub fn insert_by_dist(&mut self, entry: Entry) -> usize {
        let ins_pt = self.entries[self.q_beg..]
            .iter()
            .position(|e| e.dist > entry.dist)
            .map_or(self.entries.len(), |offset| self.q_beg + offset);
        self.entries.insert(ins_pt, entry);
        ins_pt
    }

    /// Remove and return the head of the queue.
    pub fn pop_head(&mut self) -> Option<Entry> {
        if self.is_empty() {
            return None;
        }
        let head = self.entries[self.q_beg];
        self.q_beg += 1;
        Some(head)
    }

    /// Locate the unique live entry with the given `(old_dist, work)`
    /// key and move it to the position implied by `new_dist`,
    /// shifting the entries in between by one slot.
    ///
    /// Returns [`ProgrammingError::QueueEntryNotFound`] if no such
    /// entry exists in the live window — the same condition the
    /// reference implementation reported to stderr as `queue_move:
    /// not found!` and then silently ignored. Here it is surfaced
    /// instead of swallowed.
    pub fn move_entry(
        &mut self,
        old_dist: i64,
        work: Work,
        new_dist: i64,
    ) -> Result<(), ProgrammingError> {
        let pos = self.entries[self.q_beg..]
            .iter()
            .position(|e| e.dist == old_dist && e.work == work)
            .map(|offset| self.q_beg + offset)
            .ok_or_else(|| {
                let break_idx = work_break_idx(work);
                log::warn!("queue_move: entry for break {:?} not found", break_idx);
                ProgrammingError::QueueEntryNotFound { break_idx }
            })?;

        if pos > self.q_beg && self.entries[pos - 1].dist > new_dist {
            // Moves left: shift the smaller-keyed run right by one.
            let mut i = pos;
            while i > self.q_beg && self.entries[i - 1].dist > new_dist {
                self.entries[i] = self.entries[i - 1];
                i -= 1;
            }
            self.entries[i] = Entry { dist: new_dist, work };
        } else if pos + 1 < self.entries.len() && self.entries[pos + 1].dist < new_dist {
            // Moves right: shift the smaller-keyed run left by one.
            let mut i = pos;
            while i + 1 < self.entries.len() && self.entries[i + 1].dist < new_dist {
                self.entries[i] = self.entries[i + 1];
                i += 1;
            }
            self.entries[i] = Entry { dist: new_dist, work };
        } else {
            // Already in the right place: overwrite the key in place.
            // The reference C implementation leaves this case
            // implicit (neither loop runs, and the loop variable `i`
            // retains whatever value the `if`'s taken branch left it
            // at); we make it an explicit third arm instead.
            self.entries[pos].dist = new_dist;
        }

        Ok(())
    }

    /// Every entry currently in the live window, in queue order.
    /// Exposed for property testing (monotone-key invariants).
    #[must_use]
    pub fn live_entries(&self) -> &[Entry] {
        &self.entries[self.q_beg..]
    }
}

fn work_break_idx(work: Work) -> Option<usize> {
    match work {
        Work::Visit(b) | Work::LeftScan(b) | Work::RightScan(b) => b.index(),
    }
}

//! Sequence diff: greedy snake-seeking scan with bounded backtracking.
//!
//! Two cursors walk `src` and `dst` in lockstep. While they disagree, the
//! open mismatch region grows; on every step the region is searched for a
//! snake, i.e. the current value of one cursor appearing within the
//! region on the other side. The earliest hit closes the region, the
//! other cursor is rewound to the snake start, and the region is emitted
//! as deletes followed by inserts.
//!
//! Cost varies with similarity: O(n) for near-identical inputs, up to
//! O(n·m) for disjoint ones. [`DiffOptions::max_backtrack`] caps the
//! search window and trades output length for time.

use std::ops::Range;

use tracing::{debug, trace};

use crate::types::{DiffOptions, Hunk, Op, Patch};

// ── Scan ──────────────────────────────────────────────────────────────────

/// Which cursor is rewound when a snake closes the region.
enum Rewind {
    /// `src[src_pos]` was found at `dst[dst_start + step]`.
    Dst(usize),
    /// `dst[dst_pos]` was found at `src[src_start + step]`.
    Src(usize),
}

/// Walks both sequences and reports every non-empty mismatch region, left to
/// right, as a pair of (source range, result range).
fn scan<T, F, E>(src: &[T], dst: &[T], max_backtrack: Option<usize>, mut eq: F, mut emit: E)
where
    F: FnMut(&T, &T) -> bool,
    E: FnMut(Range<usize>, Range<usize>),
{
    let src_len = src.len();
    let dst_len = dst.len();
    let mut region = |src_range: Range<usize>, dst_range: Range<usize>| {
        if src_range.is_empty() && dst_range.is_empty() {
            return;
        }
        trace!(src = ?src_range, dst = ?dst_range, "mismatch region");
        emit(src_range, dst_range);
    };

    // Steps since the cursors last agreed. Never exceeds either cursor.
    let mut distance = 0usize;
    let mut src_pos = 0usize;
    let mut dst_pos = 0usize;

    loop {
        let mut src_start = src_pos - distance;
        let mut dst_start = dst_pos - distance;

        if src_pos >= src_len && dst_pos >= dst_len {
            region(src_start.min(src_len)..src_len, dst_start.min(dst_len)..dst_len);
            return;
        }

        if max_backtrack.is_some_and(|cap| distance > cap) {
            trace!(distance, "backtrack cap reached");
            region(
                src_start.min(src_len)..src_pos.min(src_len),
                dst_start.min(dst_len)..dst_pos.min(dst_len),
            );
            src_start = src_pos;
            dst_start = dst_pos;
            distance = 0;
        }

        let mut rewind = None;
        for step in 0..=distance {
            let dst_idx = dst_start + step;
            if src_pos < src_len && dst_idx < dst_len && eq(&src[src_pos], &dst[dst_idx]) {
                rewind = Some(Rewind::Dst(step));
                break;
            }
            let src_idx = src_start + step;
            if dst_pos < dst_len && src_idx < src_len && eq(&src[src_idx], &dst[dst_pos]) {
                rewind = Some(Rewind::Src(step));
                break;
            }
        }

        match rewind {
            Some(Rewind::Dst(step)) => {
                dst_pos = dst_start + step;
                region(src_start..src_pos, dst_start..dst_pos);
                distance = 0;
            }
            Some(Rewind::Src(step)) => {
                src_pos = src_start + step;
                region(src_start..src_pos, dst_start..dst_pos);
                distance = 0;
            }
            None => distance += 1,
        }

        src_pos += 1;
        dst_pos += 1;
    }
}

// ── Flat patches ──────────────────────────────────────────────────────────

/// Compute the patch turning `src` into `dst` using `==`.
///
/// ```
/// use seq_diff::{diff, Op};
///
/// let ops = diff(&[1, 2, 3, 4, 5], &[1, 2, 4, 5]);
/// assert_eq!(ops, vec![Op::Delete { index: 2 }]);
/// ```
pub fn diff<T>(src: &[T], dst: &[T]) -> Patch<T>
where
    T: PartialEq + Clone,
{
    diff_with(src, dst, &DiffOptions::default(), |a, b| a == b)
}

/// Like [`diff`], with a caller-supplied equality predicate.
pub fn diff_by<T, F>(src: &[T], dst: &[T], eq: F) -> Patch<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    diff_with(src, dst, &DiffOptions::default(), eq)
}

/// Like [`diff_by`], honoring `opts`.
pub fn diff_with<T, F>(src: &[T], dst: &[T], opts: &DiffOptions, eq: F) -> Patch<T>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut ops: Patch<T> = Vec::new();
    scan(src, dst, opts.max_backtrack, eq, |src_range, dst_range| {
        let start = src_range.start;
        ops.extend(src_range.map(|index| Op::Delete { index }));
        ops.extend(dst[dst_range].iter().enumerate().map(|(i, value)| Op::Insert {
            index: start + i,
            value: value.clone(),
        }));
    });
    debug!(
        src_len = src.len(),
        dst_len = dst.len(),
        max_backtrack = ?opts.max_backtrack,
        ops = ops.len(),
        "sequence diff"
    );
    ops
}

/// Diff where either side may be absent; absent is treated as empty.
pub fn diff_opt<T>(src: Option<&[T]>, dst: Option<&[T]>) -> Patch<T>
where
    T: PartialEq + Clone,
{
    diff(src.unwrap_or(&[]), dst.unwrap_or(&[]))
}

// ── Hunks ─────────────────────────────────────────────────────────────────

/// Region-grouped form of [`diff`].
///
/// Flattening the result with [`Hunk::ops`] yields exactly `diff(src, dst)`.
pub fn hunks<T>(src: &[T], dst: &[T]) -> Vec<Hunk<T>>
where
    T: PartialEq + Clone,
{
    hunks_with(src, dst, &DiffOptions::default(), |a, b| a == b)
}

/// Region-grouped form of [`diff_with`].
pub fn hunks_with<T, F>(src: &[T], dst: &[T], opts: &DiffOptions, eq: F) -> Vec<Hunk<T>>
where
    T: Clone,
    F: FnMut(&T, &T) -> bool,
{
    let mut out = Vec::new();
    scan(src, dst, opts.max_backtrack, eq, |src_range, dst_range| {
        out.push(Hunk {
            src_start: src_range.start,
            del_len: src_range.len(),
            dst_start: dst_range.start,
            ins: dst[dst_range].to_vec(),
        });
    });
    debug!(
        src_len = src.len(),
        dst_len = dst.len(),
        max_backtrack = ?opts.max_backtrack,
        hunks = out.len(),
        "sequence diff"
    );
    out
}

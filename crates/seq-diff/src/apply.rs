//! Replaying patches onto a source sequence.
//!
//! [`apply_hunks`] is exact for hunks produced by [`crate::hunks`].
//! [`apply`] first rebuilds hunks from a flat patch with [`group`]; the flat
//! index encoding is region-local, so one case cannot be told apart: an
//! insert run longer than its region's delete run, directly followed by an
//! insert-only region whose source offset continues that run. Such input is
//! read as a single region. Keep the hunks when exact replay matters.

use crate::types::{Hunk, Op, PatchError};

/// Rebuild mismatch regions from a flat patch.
///
/// A delete extends the current region while the region has no inserts yet
/// and the index is contiguous. An insert extends it while its index equals
/// `src_start` plus the inserts seen so far. Anything else opens a new
/// region, which must not start before the previous one ends.
pub fn group<T: Clone>(ops: &[Op<T>]) -> Result<Vec<Hunk<T>>, PatchError> {
    let mut out: Vec<Hunk<T>> = Vec::new();
    let mut current: Option<Hunk<T>> = None;
    // Result offset minus source offset after the closed regions.
    let mut shift: isize = 0;

    for op in ops {
        let index = op.index();
        let continues = current.as_ref().is_some_and(|h| match op {
            Op::Delete { .. } => h.ins.is_empty() && index == h.src_end(),
            Op::Insert { .. } => index == h.src_start + h.ins.len(),
        });

        if !continues {
            if let Some(prev) = current.take() {
                shift += prev.ins.len() as isize - prev.del_len as isize;
                out.push(prev);
            }
            if out.last().is_some_and(|prev| index < prev.src_end()) {
                return Err(PatchError::InvalidIndex(index));
            }
            let dst_start = usize::try_from(index as isize + shift)
                .map_err(|_| PatchError::InvalidIndex(index))?;
            current = Some(Hunk {
                src_start: index,
                del_len: 0,
                dst_start,
                ins: Vec::new(),
            });
        }

        if let Some(hunk) = current.as_mut() {
            match op {
                Op::Delete { .. } => hunk.del_len += 1,
                Op::Insert { value, .. } => hunk.ins.push(value.clone()),
            }
        }
    }

    out.extend(current);
    Ok(out)
}

/// Apply ordered, non-overlapping hunks to `src`.
pub fn apply_hunks<T: Clone>(src: &[T], hunks: &[Hunk<T>]) -> Result<Vec<T>, PatchError> {
    let mut out = Vec::with_capacity(src.len());
    let mut cursor = 0usize;
    for hunk in hunks {
        if hunk.src_start < cursor {
            return Err(PatchError::InvalidIndex(hunk.src_start));
        }
        let end = hunk.src_end();
        if end > src.len() {
            return Err(PatchError::InvalidIndex(hunk.src_start.max(src.len())));
        }
        out.extend_from_slice(&src[cursor..hunk.src_start]);
        out.extend(hunk.ins.iter().cloned());
        cursor = end;
    }
    out.extend_from_slice(&src[cursor..]);
    Ok(out)
}

/// Apply a flat patch to `src`.
///
/// ```
/// use seq_diff::{apply, diff};
///
/// let src = [1, 2, 3, 5, 6, 9, 10, 11, 12, 8, 14, 15];
/// let dst = [0, 1, 2, 3, 4, 7, 12, 8, 16, 17];
/// assert_eq!(apply(&src, &diff(&src, &dst)).unwrap(), dst);
/// ```
pub fn apply<T: Clone>(src: &[T], ops: &[Op<T>]) -> Result<Vec<T>, PatchError> {
    let hunks = group(ops)?;
    apply_hunks(src, &hunks)
}

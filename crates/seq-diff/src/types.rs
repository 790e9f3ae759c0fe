//! Core types: operations, hunks, options and errors.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ── Error ─────────────────────────────────────────────────────────────────

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum PatchError {
    #[error("INVALID_INDEX: {0}")]
    InvalidIndex(usize),
    #[error("INVALID_OP: {0}")]
    InvalidOp(String),
}

// ── Operations ────────────────────────────────────────────────────────────

/// A single positional edit.
///
/// Indices are region-local: the deletes of a mismatch region count up from
/// the region's source offset, and so do its inserts. See [`Hunk`] for the
/// grouped form and [`crate::apply`] for replay.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Op<T> {
    Delete { index: usize },
    Insert { index: usize, value: T },
}

impl<T> Op<T> {
    pub fn index(&self) -> usize {
        match self {
            Op::Delete { index } | Op::Insert { index, .. } => *index,
        }
    }

    pub fn is_delete(&self) -> bool {
        matches!(self, Op::Delete { .. })
    }

    pub fn is_insert(&self) -> bool {
        matches!(self, Op::Insert { .. })
    }

    /// The inserted value, if this is an insert.
    pub fn value(&self) -> Option<&T> {
        match self {
            Op::Insert { value, .. } => Some(value),
            Op::Delete { .. } => None,
        }
    }

    /// Converts the carried value, keeping the index.
    pub fn map<U, F>(self, f: F) -> Op<U>
    where
        F: FnOnce(T) -> U,
    {
        match self {
            Op::Delete { index } => Op::Delete { index },
            Op::Insert { index, value } => Op::Insert {
                index,
                value: f(value),
            },
        }
    }
}

/// Ordered list of operations; order is replay order.
pub type Patch<T> = Vec<Op<T>>;

// ── Hunks ─────────────────────────────────────────────────────────────────

/// One resolved mismatch region.
///
/// `del_len` source elements starting at `src_start` are replaced by `ins`,
/// which sits at `dst_start` in the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hunk<T> {
    pub src_start: usize,
    pub del_len: usize,
    pub dst_start: usize,
    pub ins: Vec<T>,
}

impl<T> Hunk<T> {
    pub fn src_end(&self) -> usize {
        self.src_start + self.del_len
    }

    pub fn dst_end(&self) -> usize {
        self.dst_start + self.ins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.del_len == 0 && self.ins.is_empty()
    }
}

impl<T: Clone> Hunk<T> {
    /// Flat operations of this region: all deletes, then all inserts.
    pub fn ops(&self) -> impl Iterator<Item = Op<T>> + '_ {
        let deletes = (0..self.del_len).map(move |i| Op::Delete {
            index: self.src_start + i,
        });
        let inserts = self.ins.iter().enumerate().map(move |(i, value)| Op::Insert {
            index: self.src_start + i,
            value: value.clone(),
        });
        deletes.chain(inserts)
    }
}

// ── Options ───────────────────────────────────────────────────────────────

/// Differ configuration.
///
/// Deserializes from a host config section; a missing `max_backtrack` means
/// unbounded.
///
/// ```
/// use seq_diff::DiffOptions;
///
/// let opts: DiffOptions = serde_json::from_str(r#"{"max_backtrack": 8}"#).unwrap();
/// assert_eq!(opts, DiffOptions::with_max_backtrack(8));
/// assert_eq!(DiffOptions::default().max_backtrack, None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct DiffOptions {
    /// Largest mismatch distance searched before the open region is flushed
    /// as a plain delete+insert block. `None` searches without limit.
    ///
    /// A cap bounds the scan to O(n·cap) at the cost of possibly longer
    /// output.
    pub max_backtrack: Option<usize>,
}

impl DiffOptions {
    pub fn unbounded() -> Self {
        Self { max_backtrack: None }
    }

    pub fn with_max_backtrack(cap: usize) -> Self {
        Self {
            max_backtrack: Some(cap),
        }
    }
}

//! seq-diff: positional edit scripts between two sequences.
//!
//! [`diff()`](fn@diff) walks the source and result sequences with a greedy,
//! snake-seeking scan and returns the deletes and inserts that turn one into
//! the other. Each mismatch region is emitted as its deletes followed by its
//! inserts, regions left to right.
//!
//! # Example
//!
//! ```
//! use seq_diff::{apply, diff, Op};
//!
//! let src = [1, 2, 4, 5];
//! let dst = [1, 2, 3, 4, 5];
//!
//! let ops = diff(&src, &dst);
//! assert_eq!(ops, vec![Op::Insert { index: 2, value: 3 }]);
//! assert_eq!(apply(&src, &ops).unwrap(), dst);
//! ```
//!
//! Modules:
//!
//! - [`diff`](mod@diff): the differ, flat and region-grouped output
//! - [`apply`](mod@apply): replay of hunks and flat patches
//! - [`codec::json`]: `serde_json` wire form
//! - [`types`]: `Op`, `Hunk`, `DiffOptions`, `PatchError`

pub mod apply;
pub mod codec;
pub mod diff;
pub mod types;

pub use apply::{apply, apply_hunks, group};
pub use codec::json::{from_json, from_json_patch, to_json, to_json_patch};
pub use diff::{diff, diff_by, diff_opt, diff_with, hunks, hunks_with};
pub use types::{DiffOptions, Hunk, Op, Patch, PatchError};

#![allow(dead_code)]

use rand::{Rng, SeedableRng};
use rand_xoshiro::Xoshiro256StarStar;
use seq_diff::Hunk;

/// Seeded generator for reproducible sequence pairs.
pub struct Fuzzer {
    pub seed: u64,
    rng: Xoshiro256StarStar,
}

impl Fuzzer {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            rng: Xoshiro256StarStar::seed_from_u64(seed),
        }
    }

    pub fn random_int(&mut self, min: usize, max: usize) -> usize {
        self.rng.gen_range(min..=max)
    }

    /// A sequence of up to `max_len` values drawn from `0..alphabet`.
    pub fn sequence(&mut self, max_len: usize, alphabet: u32) -> Vec<u32> {
        let len = self.random_int(0, max_len);
        (0..len).map(|_| self.rng.gen_range(0..alphabet)).collect()
    }

    /// `base` with a few random deletes, inserts and substitutions applied.
    pub fn mutate(&mut self, base: &[u32], edits: usize, alphabet: u32) -> Vec<u32> {
        let mut out = base.to_vec();
        for _ in 0..edits {
            let kind = self.random_int(0, 2);
            if out.is_empty() || kind == 0 {
                let at = self.random_int(0, out.len());
                let value = self.rng.gen_range(0..alphabet);
                out.insert(at, value);
            } else if kind == 1 {
                let at = self.random_int(0, out.len() - 1);
                out.remove(at);
            } else {
                let at = self.random_int(0, out.len() - 1);
                out[at] = self.rng.gen_range(0..alphabet);
            }
        }
        out
    }
}

pub fn seeds() -> [u64; 12] {
    [
        0x5eed_c0de_u64,
        0x0000_0000_0000_0001_u64,
        0x0000_0000_0000_00ff_u64,
        0x0000_0000_00c0_ffee_u64,
        0x0123_4567_89ab_cdef_u64,
        0x0000_0000_0000_1001_u64,
        0x1111_2222_3333_4444_u64,
        0x89ab_cdef_0123_4567_u64,
        0xfedc_ba98_7654_3210_u64,
        0x1357_9bdf_2468_ace0_u64,
        0x0f0f_f0f0_55aa_aa55_u64,
        0xa5a5_5a5a_dead_beef_u64,
    ]
}

/// Checks that hunks are non-empty, in bounds, ordered and consistent with
/// the running insert/delete balance.
pub fn assert_well_formed<T: PartialEq + std::fmt::Debug>(
    hunks: &[Hunk<T>],
    src_len: usize,
    dst: &[T],
    ctx: &str,
) {
    let mut src_floor = 0usize;
    let mut dst_floor = 0usize;
    let mut shift = 0isize;
    for h in hunks {
        assert!(!h.is_empty(), "empty hunk {ctx}");
        assert!(h.src_start >= src_floor, "src overlap {ctx}");
        assert!(h.dst_start >= dst_floor, "dst overlap {ctx}");
        assert!(h.src_end() <= src_len, "src out of bounds {ctx}");
        assert!(h.dst_end() <= dst.len(), "dst out of bounds {ctx}");
        assert_eq!(
            h.dst_start as isize,
            h.src_start as isize + shift,
            "dst_start drift {ctx}"
        );
        assert_eq!(&dst[h.dst_start..h.dst_end()], &h.ins[..], "ins mismatch {ctx}");
        shift += h.ins.len() as isize - h.del_len as isize;
        src_floor = h.src_end();
        dst_floor = h.dst_end();
    }
}

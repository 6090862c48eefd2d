//! Analytic memory-footprint model for the `nmod_mat` matrices the external
//! program allocates during key generation, signing, and verification.
//!
//! The model follows the FLINT layout: a fixed struct header (two pointers,
//! two dimension words, a three-word modulus context), one pointer per row,
//! and a contiguous buffer of one-word elements. Alignment padding and
//! allocator slack are not modelled.

use serde::{Deserialize, Serialize};

/// Widths, in bytes, of the two primitive fields the model depends on.
/// Elements are one machine word each, so `word_width` drives both the
/// header dimension fields and the per-element term.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixLayout {
    pub pointer_width: u64,
    pub word_width: u64,
}

impl Default for MatrixLayout {
    fn default() -> Self {
        Self {
            pointer_width: 8,
            word_width: 8,
        }
    }
}

impl MatrixLayout {
    /// Fixed per-matrix overhead: entries and rows pointers, the `r`/`c`
    /// fields, and the three-word nmod context (n, ninv, norm).
    pub fn base_overhead(&self) -> u64 {
        2 * self.pointer_width + 2 * self.word_width + 3 * self.word_width
    }

    /// Total bytes allocated for a matrix of the given shape.
    pub fn matrix_bytes(&self, shape: MatrixShape) -> u64 {
        let elements = self.word_width * shape.rows * shape.cols;
        let row_pointers = self.pointer_width * shape.rows;
        self.base_overhead() + elements + row_pointers
    }
}

/// Logical dimensions of one matrix structure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixShape {
    pub rows: u64,
    pub cols: u64,
}

impl MatrixShape {
    pub const fn new(rows: u64, cols: u64) -> Self {
        Self { rows, cols }
    }
}

/// Byte counts for the six matrices of one scheme instantiation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatrixFootprint {
    pub g1: u64,
    pub g2: u64,
    pub h_a: u64,
    pub g_star: u64,
    pub f: u64,
    pub signature: u64,
}

impl MatrixFootprint {
    /// The six entries in a fixed order, keyed by the names the scheme uses.
    pub fn named(&self) -> [(&'static str, u64); 6] {
        [
            ("G1", self.g1),
            ("G2", self.g2),
            ("H_A", self.h_a),
            ("G_star", self.g_star),
            ("F", self.f),
            ("signature", self.signature),
        ]
    }
}

/// Compute the footprint of all six matrices for code lengths `n1`, `n2` and
/// common dimension `k`, with combined length `n = n1 + n2`.
///
/// Precondition (not checked): `n1, n2, k >= 0` and `k <= n1 + n2`.
pub fn footprint(n1: u64, n2: u64, k: u64, layout: MatrixLayout) -> MatrixFootprint {
    let n = n1 + n2;

    let g1 = MatrixShape::new(k, n1); // generator matrix 1
    let g2 = MatrixShape::new(k, n2); // generator matrix 2
    let h_a = MatrixShape::new(n - k, n); // parity check matrix
    let g_star = MatrixShape::new(k, n); // permuted generator G*
    let f = MatrixShape::new(n - k, k); // public key F = H_A * G*^T
    let signature = MatrixShape::new(1, n);

    MatrixFootprint {
        g1: layout.matrix_bytes(g1),
        g2: layout.matrix_bytes(g2),
        h_a: layout.matrix_bytes(h_a),
        g_star: layout.matrix_bytes(g_star),
        f: layout.matrix_bytes(f),
        signature: layout.matrix_bytes(signature),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_overhead_is_56_at_default_widths() {
        assert_eq!(MatrixLayout::default().base_overhead(), 56);
    }

    #[test]
    fn reference_parameters_match_hand_computation() {
        let fp = footprint(40, 50, 15, MatrixLayout::default());

        // G1 = (15, 40), H_A = (75, 90); bytes = 56 + 8*r*c + 8*r.
        assert_eq!(fp.g1, 56 + 8 * 15 * 40 + 8 * 15);
        assert_eq!(fp.h_a, 56 + 8 * 75 * 90 + 8 * 75);
        assert_eq!(fp.g2, 56 + 8 * 15 * 50 + 8 * 15);
        assert_eq!(fp.g_star, 56 + 8 * 15 * 90 + 8 * 15);
        assert_eq!(fp.f, 56 + 8 * 75 * 15 + 8 * 75);
        assert_eq!(fp.signature, 56 + 8 * 90 + 8);
    }

    #[test]
    fn six_entries_each_at_least_base_overhead() {
        let layout = MatrixLayout::default();
        let fp = footprint(25, 50, 10, layout);
        let named = fp.named();
        assert_eq!(named.len(), 6);
        for (_, bytes) in named {
            assert!(bytes >= layout.base_overhead());
        }
    }

    #[test]
    fn non_decreasing_in_each_parameter() {
        let layout = MatrixLayout::default();
        let base = footprint(40, 50, 15, layout);
        let more_n1 = footprint(41, 50, 15, layout);
        let more_n2 = footprint(40, 51, 15, layout);
        let more_k = footprint(40, 50, 16, layout);

        for (a, b) in base.named().iter().zip(more_n1.named()) {
            assert!(b.1 >= a.1, "{} shrank when n1 grew", b.0);
        }
        for (a, b) in base.named().iter().zip(more_n2.named()) {
            assert!(b.1 >= a.1, "{} shrank when n2 grew", b.0);
        }
        for (a, b) in base.named().iter().zip(more_k.named()) {
            assert!(b.1 >= a.1, "{} shrank when k grew", b.0);
        }
    }

    #[test]
    fn custom_widths_flow_through() {
        let layout = MatrixLayout {
            pointer_width: 4,
            word_width: 8,
        };
        // base = 2*4 + 2*8 + 3*8 = 48; signature (1, n) = 48 + 8*n + 4.
        assert_eq!(layout.base_overhead(), 48);
        let fp = footprint(10, 10, 5, layout);
        assert_eq!(fp.signature, 48 + 8 * 20 + 4);
    }
}

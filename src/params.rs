use serde::{Deserialize, Serialize};

/// Parameters of one linear code component: length `n`, dimension `k`,
/// minimum distance `d`. Invariant: `n > 0` and `0 < k <= n`; the external
/// program enforces its own additional constraints (`n > k`, `n > d`).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CodeParameters {
    pub n: u32,
    pub k: u32,
    pub d: u32,
}

impl CodeParameters {
    pub const fn new(n: u32, k: u32, d: u32) -> Self {
        Self { n, k, d }
    }
}

/// Full configuration for one invocation of the external signature-scheme
/// executable. No cross-field invariant is enforced here; invalid
/// combinations are the external program's to reject.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ParameterSet {
    pub g1: CodeParameters,
    pub g2: CodeParameters,
    pub custom_message: bool,
    pub use_precomputed_matrix: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_parameters_construct() {
        let p = CodeParameters::new(40, 15, 6);
        assert_eq!(p.n, 40);
        assert_eq!(p.k, 15);
        assert_eq!(p.d, 6);
    }

    #[test]
    fn parameter_set_is_plain_value() {
        let set = ParameterSet {
            g1: CodeParameters::new(25, 10, 5),
            g2: CodeParameters::new(50, 10, 6),
            custom_message: false,
            use_precomputed_matrix: true,
        };
        let copy = set;
        assert_eq!(set, copy);
    }
}

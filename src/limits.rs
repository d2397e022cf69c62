//! Crate-wide numerical caps.
//!
//! The engine takes no environment or file configuration; these compile-time
//! caps are its only "configuration", kept in one place so every module
//! checks the same numbers.

/// Largest support window any [`crate::Pmf`](crate::Pmf) may have.
pub const MAX_SLOTS: i64 = 1_000_000;

/// Largest `n` accepted by [`crate::Pmf::fair_die`](crate::Pmf::fair_die).
pub const MAX_SIDES: i64 = 100_000;

/// Largest `n` for which `n!` fits the factorial cache (and thus the
/// largest `n` [`crate::Pmf::repeat_n_sum_k`](crate::Pmf::repeat_n_sum_k) accepts).
pub const MAX_FACTORIAL_N: i64 = 170;

/// Absolute tolerance for the "probabilities sum to 1" check at construction.
pub const SUM_TOLERANCE: f64 = 1e-8;

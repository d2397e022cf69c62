//! `repeat_n_sum_k`: the sum of the k best (or worst) of n i.i.d. draws.
//!
//! This is the hard operation the rest of the crate exists to support. A
//! naive implementation enumerates all `sides^n` orderings, which is
//! exponential in `n`. Instead we decompose over the *pivot* - the value
//! taken by the k-th-best (or k-th-worst) die - and weight each pivot's
//! contribution by a multinomial count of how the other `n - 1` dice land
//! relative to it.

use super::Pmf;
use crate::error::PmfError;
use crate::limits::{MAX_FACTORIAL_N, MAX_SLOTS};
use crate::factorial::multinomial;

/// Which order statistics `repeat_n_sum_k` sums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeepMode {
    /// Sum the k largest of n draws.
    #[default]
    KeepBest,
    /// Sum the k smallest of n draws.
    KeepWorst,
}

impl Pmf {
    /// The PMF of the sum of the `k` largest (or smallest, depending on
    /// `mode`) of `n` i.i.d. draws from `self`.
    ///
    /// Delegates to [`Pmf::repeat_sum`] when `k >= n`. Fails with
    /// [`PmfError::BadArgument`] if `n < 1` or `k < 1`, with
    /// [`PmfError::TooManySlots`] if `k * (self.slots() - 1) >= 1_000_000`,
    /// or with [`PmfError::FactorialOverflow`] if `n > 170`.
    pub fn repeat_n_sum_k(&self, n: i64, k: i64, mode: KeepMode) -> Result<Pmf, PmfError> {
        if n < 1 || k < 1 {
            return Err(PmfError::BadArgument(
                "repeat_n_sum_k requires n >= 1 and k >= 1",
            ));
        }
        if k >= n {
            return self.repeat_sum(n);
        }
        if n > MAX_FACTORIAL_N {
            return Err(PmfError::FactorialOverflow {
                n,
                max: MAX_FACTORIAL_N,
            });
        }
        let slots_minus_one = self.slots() as i64 - 1;
        let required = k * slots_minus_one;
        if required >= MAX_SLOTS {
            return Err(PmfError::TooManySlots {
                required: required + 1,
                cap: MAX_SLOTS,
            });
        }

        match mode {
            KeepMode::KeepBest => self.keep_best(n, k),
            KeepMode::KeepWorst => {
                let reflected = self.reflect();
                let best = reflected.keep_best(n, k)?;
                Ok(best.reflect())
            }
        }
    }

    /// Mirror the distribution of `X` to the distribution of `-X`.
    fn reflect(&self) -> Pmf {
        let new_offset = -self.max();
        let mut probs = self.probs().to_vec();
        probs.reverse();
        Pmf::from_parts(new_offset, probs)
    }

    /// `KeepBest` core: pivot decomposition over order statistics.
    ///
    /// For each pivot value `q` (the value of the k-th-best die), the other
    /// `n - 1` dice split into `kn` kept dice strictly above `q`, `dn`
    /// non-kept dice strictly below `q`, and the rest exactly at `q`. The
    /// `kn` draws above `q` contribute their own conditioned sum
    /// (`given_ge(q + 1)` repeated `kn` times); the `kn = 0` case is simply
    /// the point mass at `k * q`.
    fn keep_best(&self, n: i64, k: i64) -> Result<Pmf, PmfError> {
        let offset_out = k as i32 * self.offset();
        let slots_out = (k * (self.slots() as i64 - 1) + 1) as usize;
        let mut out = vec![0.0_f64; slots_out];

        for (idx, &p_pivot) in self.probs().iter().enumerate() {
            if p_pivot <= 0.0 {
                continue;
            }
            let q = self.offset() + idx as i32;
            let p_lt = self.p_lt(q);
            let p_eq = self.p_eq(q);
            let p_gt = self.p_gt(q);

            for kn in 0..k {
                if kn > 0 && p_gt <= 0.0 {
                    continue;
                }

                let mut weight = 0.0_f64;
                for dn in 0..=(n - k) {
                    let mn = n - kn - dn;
                    debug_assert!(mn >= 0);
                    if dn > 0 && p_lt <= 0.0 {
                        continue;
                    }
                    let coeff = multinomial(&[dn, mn, kn])?;
                    weight += p_gt.powi(kn as i32) * p_eq.powi(mn as i32) * p_lt.powi(dn as i32) * coeff;
                }
                if weight == 0.0 {
                    continue;
                }

                let shift = (k - kn) as i32 * q;
                if kn == 0 {
                    let slot = (shift - offset_out) as usize;
                    out[slot] += weight;
                } else {
                    let above = self.given_ge(q + 1)?;
                    let tail = above.repeat_sum(kn)?;
                    for (i, &p) in tail.probs().iter().enumerate() {
                        if p == 0.0 {
                            continue;
                        }
                        let value = shift + tail.offset() + i as i32;
                        let slot = (value - offset_out) as usize;
                        out[slot] += weight * p;
                    }
                }
            }
        }

        Ok(Pmf::from_parts(offset_out, out))
    }
}

#[cfg(test)]
mod tests {
    use crate::Pmf;
    use crate::pmf::KeepMode;

    #[test]
    fn keep_equal_to_n_matches_repeat_sum() {
        let d6 = Pmf::fair_die(6).unwrap();
        let kept = d6.repeat_n_sum_k(4, 4, KeepMode::KeepBest).unwrap();
        let summed = d6.repeat_sum(4).unwrap();
        assert_eq!(kept.min(), summed.min());
        assert_eq!(kept.max(), summed.max());
        for v in kept.min()..=kept.max() {
            assert!((kept.p_eq(v) - summed.p_eq(v)).abs() < 1e-9);
        }
    }

    #[test]
    fn four_d6_drop_lowest_mean() {
        let d6 = Pmf::fair_die(6).unwrap();
        let best3of4 = d6.repeat_n_sum_k(4, 3, KeepMode::KeepBest).unwrap();
        assert!((best3of4.expected() - 12.2446).abs() < 1e-3);
        let probs_sum: f64 = best3of4.to_map().values().sum();
        assert!((probs_sum - 1.0).abs() < 1e-6);
    }

    #[test]
    fn support_bounds_match_spec() {
        let d6 = Pmf::fair_die(6).unwrap();
        let best3of4 = d6.repeat_n_sum_k(4, 3, KeepMode::KeepBest).unwrap();
        assert_eq!(best3of4.min(), 3);
        assert_eq!(best3of4.max(), 18);
    }

    #[test]
    fn keep_worst_is_keep_best_reflected() {
        let d6 = Pmf::fair_die(6).unwrap();
        let worst = d6.repeat_n_sum_k(4, 3, KeepMode::KeepWorst).unwrap();
        // E[worst 3 of 4] + E[best 3 of 4] should equal 3 * E[worst1]+E[best1]...
        // simpler correctness check: worst-3-of-4 mean is below the flat sum/4*3 mean.
        let flat_three_mean = 3.0 * 3.5;
        assert!(worst.expected() < flat_three_mean);
        assert!(worst.min() >= 3);
        assert!(worst.max() <= 18);
    }

    #[test]
    fn keep_worst_reflection_identity() {
        // repeat_n_sum_k(P, n, k, KeepBest) reflected around zero equals
        // repeat_n_sum_k(P_reflected, n, k, KeepWorst), since reflecting P
        // turns "k best of P" into "k worst of -P" negated.
        let d6 = Pmf::fair_die(6).unwrap();
        let n = 3;
        let k = 2;
        let best = d6.repeat_n_sum_k(n, k, KeepMode::KeepBest).unwrap();

        let mut reflected_map = std::collections::HashMap::new();
        for (v, p) in d6.iter() {
            reflected_map.insert(-v, p);
        }
        let reflected = Pmf::from_sparse(&reflected_map).unwrap();
        let worst_of_reflected = reflected.repeat_n_sum_k(n, k, KeepMode::KeepWorst).unwrap();

        for v in best.min()..=best.max() {
            assert!((best.p_eq(v) - worst_of_reflected.p_eq(-v)).abs() < 1e-9);
        }
    }

    #[test]
    fn default_mode_is_keep_best() {
        assert_eq!(KeepMode::default(), KeepMode::KeepBest);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let d6 = Pmf::fair_die(6).unwrap();
        for (n, k) in [(4, 3), (5, 2), (6, 1), (3, 1)] {
            let kept = d6.repeat_n_sum_k(n, k, KeepMode::KeepBest).unwrap();
            let sum: f64 = kept.to_map().values().sum();
            assert!((sum - 1.0).abs() < 1e-6, "n={n} k={k} sum={sum}");
        }
    }
}

//! Conditioning on an inequality: `X | X >= t` and `X | X <= t`.

use super::Pmf;
use crate::error::PmfError;

impl Pmf {
    /// The conditional distribution of `X` given `X >= t`.
    ///
    /// Fails with [`PmfError::DivideByZero`] if `P(X >= t)` is zero, in
    /// particular if `t > self.max()`. Otherwise the new support starts at
    /// `max(t, self.min())`.
    pub fn given_ge(&self, t: i32) -> Result<Pmf, PmfError> {
        let p = self.p_ge(t);
        if p <= 0.0 {
            return Err(PmfError::DivideByZero);
        }
        // p > 0 guarantees t <= self.max(); only the low side needs clamping.
        let new_min = t.max(self.min());
        let start = (new_min - self.offset()) as usize;
        let out: Vec<f64> = self.probs()[start..].iter().map(|&x| x / p).collect();
        Ok(Pmf::from_parts(new_min, out))
    }

    /// The conditional distribution of `X` given `X <= t`.
    ///
    /// Fails with [`PmfError::DivideByZero`] if `P(X <= t)` is zero, in
    /// particular if `t < self.min()`. Otherwise the new support ends at
    /// `min(t, self.max())`.
    pub fn given_le(&self, t: i32) -> Result<Pmf, PmfError> {
        let p = self.p_le(t);
        if p <= 0.0 {
            return Err(PmfError::DivideByZero);
        }
        // p > 0 guarantees t >= self.min(); only the high side needs clamping.
        let new_max = t.min(self.max());
        let end = (new_max - self.offset()) as usize + 1;
        let out: Vec<f64> = self.probs()[..end].iter().map(|&x| x / p).collect();
        Ok(Pmf::from_parts(self.offset(), out))
    }
}

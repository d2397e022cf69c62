//! `repeat_sum`: the n-fold convolution of a PMF with itself, via binary
//! exponentiation so the cost is O(log n) convolutions instead of an O(n)
//! naive chain.

use super::Pmf;
use crate::error::PmfError;
use crate::limits::MAX_SLOTS;

impl Pmf {
    /// The PMF of `X_1 + ... + X_n`, `n` independent draws from `self`.
    ///
    /// Fails with [`PmfError::BadArgument`] if `n < 1`, or with
    /// [`PmfError::TooManySlots`] if the result would exceed the slot cap.
    pub fn repeat_sum(&self, n: i64) -> Result<Pmf, PmfError> {
        if n < 1 {
            return Err(PmfError::BadArgument("repeat_sum requires n >= 1"));
        }
        let span = n * (self.slots() as i64 - 1);
        if span > MAX_SLOTS {
            return Err(PmfError::TooManySlots {
                required: span + 1,
                cap: MAX_SLOTS,
            });
        }

        let mut power = self.clone();
        let mut result: Option<Pmf> = None;
        let mut remaining = n as u64;
        while remaining > 0 {
            if remaining & 1 == 1 {
                result = Some(match result {
                    Some(acc) => acc.add(&power),
                    None => power.clone(),
                });
            }
            remaining >>= 1;
            if remaining > 0 {
                power = power.add(&power);
            }
        }
        Ok(result.expect("n >= 1 guarantees at least one set bit"))
    }
}

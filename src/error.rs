//! Error taxonomy for every fallible operation in the crate.
//!
//! All failures are synchronous and leave no partial [`crate::Pmf`](crate::Pmf)
//! observable: a constructor or operation either returns `Ok` with a fully
//! valid result, or `Err` with nothing built.

/// Everything that can go wrong when constructing or combining [`Pmf`](crate::Pmf) values.
#[derive(Debug, Clone, Copy, PartialEq, thiserror::Error)]
pub enum PmfError {
    /// Requested support size is less than 1 or greater than 1,000,000.
    #[error("bad number of slots: {slots} (must be in 1..=1_000_000)")]
    BadSlots {
        /// The slot count that was rejected.
        slots: i64,
    },

    /// A single probability fell outside `[0, 1]`.
    #[error("bad probability {value} at index {index} (must be in [0, 1])")]
    BadProbability {
        /// The offending value.
        value: f64,
        /// Its position in the input sequence.
        index: usize,
    },

    /// User-supplied probabilities did not sum to 1 within tolerance.
    #[error("probabilities sum to {sum}, expected 1 +/- {tolerance:e}")]
    BadSum {
        /// The sum that was computed.
        sum: f64,
        /// The tolerance that was exceeded.
        tolerance: f64,
    },

    /// A non-integer or otherwise malformed argument was supplied.
    #[error("bad argument: {0}")]
    BadArgument(&'static str),

    /// An argument expected to be a [`Pmf`](crate::Pmf) was not.
    ///
    /// Reserved for the host-binding layer (out of scope for this crate); no
    /// operation here produces it, but the variant keeps the taxonomy
    /// complete for callers crossing an FFI boundary.
    #[error("type mismatch: expected a Pmf")]
    TypeMismatch,

    /// Conditioned on an event of probability zero.
    #[error("cannot condition on an event of probability zero")]
    DivideByZero,

    /// The requested operation would exceed the slot cap.
    #[error("operation would require {required} slots, exceeding the cap of {cap}")]
    TooManySlots {
        /// Slots the operation would have needed.
        required: i64,
        /// The cap that was exceeded.
        cap: i64,
    },

    /// `repeat_n_sum_k` was invoked with `n` above the factorial cache bound.
    #[error("n = {n} exceeds the factorial cache bound of {max}")]
    FactorialOverflow {
        /// The rejected `n`.
        n: i64,
        /// The largest `n` the cache supports.
        max: i64,
    },

    /// Allocation failed.
    #[error("out of memory")]
    OutOfMemory,
}

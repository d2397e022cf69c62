//! Exact discrete probability distributions over integer outcomes, built
//! around combining dice: summing, repeating, conditioning, and keeping the
//! best or worst k of n independent identically-distributed rolls.
//!
//! The engine is a single type, [`Pmf`], representing a probability mass
//! function with a contiguous integer support window. Every operation is a
//! pure function from one or two `Pmf`s to a fresh `Pmf` (or a scalar): no
//! I/O, no concurrency, no persistence, no random sampling.
//!
//! ```
//! use dicelib::Pmf;
//!
//! let d6 = Pmf::fair_die(6).unwrap();
//! assert_eq!(d6.expected(), 3.5);
//!
//! let two_d6 = d6.add(&d6);
//! assert!((two_d6.p_eq(7) - 6.0 / 36.0).abs() < 1e-12);
//! ```

pub mod error;
mod factorial;
mod limits;
mod pmf;

pub use error::PmfError;
pub use pmf::{KeepMode, Pmf};

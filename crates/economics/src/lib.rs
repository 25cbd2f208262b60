//! `krishiguru-economics` — cost / revenue / profit estimation.
//!
//! Pure, deterministic arithmetic over one crop's reference row and a land
//! size. No IO, no state, no rounding: display rounding belongs to the
//! presentation boundary so the five cost components never accumulate
//! rounding error.

pub mod engine;

pub use engine::{compute, CostModel, EconomicsResult};

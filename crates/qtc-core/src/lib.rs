//! QTc calculation and interpretation engine.
//!
//! The crate wires the validator, the formula engine, the interpreter and
//! the flag deriver behind [`evaluate`]. Everything is pure and synchronous;
//! identical inputs always give identical assessments.
//!
//! ```
//! use qtc_core::evaluate;
//! use qtc_model::RawInputs;
//!
//! let assessment = evaluate(&RawInputs::narrow(60.0, 400.0)).unwrap();
//! assert_eq!(assessment.result.rr_interval_seconds, 1.0);
//! ```

pub mod flags;
pub mod formulas;
pub mod interpret;
pub mod pipeline;
pub mod tier;

pub use flags::derive_flags;
pub use formulas::calculate;
pub use interpret::interpret;
pub use pipeline::{Calculator, evaluate, evaluate_with};
pub use tier::{QtcTier, TierReading, classify};

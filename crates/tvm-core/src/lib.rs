//! Closed-form time-value-of-money and equity valuation formulas.
//!
//! Every operation is a stateless pure function: it validates its inputs
//! against the formula's mathematical domain, then evaluates the standard
//! closed-form expression. Rejected inputs come back as a typed error, never
//! as a sentinel number.
//!
//! All arithmetic uses `rust_decimal::Decimal`. No `f64`.

pub mod annuity;
pub mod equity;
pub mod error;
pub mod time_value;
pub mod types;

pub use error::TvmError;
pub use types::*;

/// Standard result type for all tvm operations.
pub type TvmResult<T> = Result<T, TvmError>;

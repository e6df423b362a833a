pub mod annuity;
pub mod equity;
pub mod time_value;

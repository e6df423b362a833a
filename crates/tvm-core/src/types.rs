use rust_decimal::Decimal;

/// All monetary values. Wraps Decimal to prevent accidental f64 usage.
pub type Money = Decimal;

/// Rates expressed as decimals (0.05 = 5%). Never as percentages.
pub type Rate = Decimal;

/// Year fractions or counts
pub type Years = Decimal;

/// Compounding periods per year. Must be at least 1 for every compounding
/// formula; zero is rejected before any arithmetic.
pub type Frequency = u32;

//! Dividend-based equity valuation and holding-period return.
//!
//! The Gordon-family models (constant growth, no growth, perpetuity-style)
//! require the rate of return to strictly exceed the growth rate; equality
//! or inversion makes the valuation diverge and is rejected as a financial
//! impossibility rather than computed.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::TvmError;
use crate::types::{Money, Rate, Years};
use crate::TvmResult;

/// Intrinsic value per share under constant dividend growth (Gordon model).
///
/// V = D / (r - g)
pub fn dividend_discount_model(dividend: Money, nominal_rate: Rate, growth: Rate) -> TvmResult<Money> {
    if dividend < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "dividend".into(),
            reason: "Dividend must be non-negative.".into(),
        });
    }
    if nominal_rate <= growth {
        return Err(TvmError::FinancialImpossibility(
            "Required rate of return must exceed growth rate for a convergent valuation.".into(),
        ));
    }

    Ok(dividend / (nominal_rate - growth))
}

/// Intrinsic value from explicit year-by-year dividends plus a terminal value
/// at the end of the forecast horizon.
///
/// V = sum_i D_i / (1+r)^(i+1) + TV / (1+r)^N
///
/// An empty dividend slice values the share at the (undiscounted) terminal
/// value, since the horizon is zero periods long.
pub fn multi_stage_ddm_with_terminal_value(
    dividends: &[Money],
    nominal_rate: Rate,
    terminal_value: Money,
) -> TvmResult<Money> {
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Discount rate must be positive.".into(),
        });
    }
    if terminal_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "terminal_value".into(),
            reason: "Terminal value must be positive.".into(),
        });
    }
    if dividends.iter().any(|d| *d < Decimal::ZERO) {
        return Err(TvmError::InvalidInput {
            field: "dividends".into(),
            reason: "Dividends must be non-negative.".into(),
        });
    }

    let df_multiplier = Decimal::ONE / (Decimal::ONE + nominal_rate);
    let mut discount_factor = Decimal::ONE;
    let mut intrinsic_value = Decimal::ZERO;

    for dividend in dividends {
        discount_factor *= df_multiplier;
        intrinsic_value += dividend * discount_factor;
    }

    // discount_factor is now (1+r)^-N, the factor for the horizon end
    intrinsic_value += terminal_value * discount_factor;

    Ok(intrinsic_value)
}

/// Intrinsic value of a share paying a flat perpetual dividend.
///
/// V = D / r
pub fn ddm_no_growth(dividend: Money, nominal_rate: Rate) -> TvmResult<Money> {
    if dividend < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "dividend".into(),
            reason: "Dividend must be non-negative.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Required rate of return must be positive.".into(),
        });
    }

    Ok(dividend / nominal_rate)
}

/// Gordon model value after growing the dividend for `time` years.
///
/// V = D * (1+g)^t / (r - g)
pub fn ddm_constant_growth(
    dividend: Money,
    nominal_rate: Rate,
    growth: Rate,
    time: Years,
) -> TvmResult<Money> {
    if dividend < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "dividend".into(),
            reason: "Dividend must be non-negative.".into(),
        });
    }
    // Growth at or below -100% makes (1+g)^t undefined for fractional t.
    if growth <= Decimal::NEGATIVE_ONE {
        return Err(TvmError::InvalidInput {
            field: "growth".into(),
            reason: "Growth rate must be greater than -100%.".into(),
        });
    }
    if nominal_rate <= growth {
        return Err(TvmError::FinancialImpossibility(
            "Required rate of return must exceed growth rate for a convergent valuation.".into(),
        ));
    }
    if time <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be positive.".into(),
        });
    }

    let grown = dividend * (Decimal::ONE + growth).powd(time);
    Ok(grown / (nominal_rate - growth))
}

/// Total return over a holding period, price change plus dividend income.
///
/// HPR = (P1 - P0 + D * k) / P0, with k the number of dividends received
pub fn holding_period_return(
    initial_price: Money,
    final_price: Money,
    dividend: Money,
    times_received: u32,
) -> TvmResult<Rate> {
    if initial_price <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "initial_price".into(),
            reason: "Initial price must be positive.".into(),
        });
    }
    if final_price < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "final_price".into(),
            reason: "Final price must be non-negative.".into(),
        });
    }
    if dividend < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "dividend".into(),
            reason: "Dividend must be non-negative.".into(),
        });
    }

    let income = dividend * Decimal::from(times_received);
    Ok((final_price - initial_price + income) / initial_price)
}

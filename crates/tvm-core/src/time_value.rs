//! Single-cash-flow compounding formulas and rate conversions.
//!
//! The four single-cash-flow operations are algebraic rearrangements of the
//! same compounding identity FV = PV * (1 + r/m)^(t*m); each solves for a
//! different unknown. Validation is per-operation: the PV/FV pair accepts
//! zero amounts, the rate/years solvers require strictly positive inputs
//! because they divide by or take logs of them.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::TvmError;
use crate::types::{Frequency, Money, Rate, Years};
use crate::TvmResult;

/// Present value of a single cash flow with variable compounding.
///
/// PV = FV / (1 + r/m)^(t*m)
pub fn present_value_single_cashflow(
    future_value: Money,
    nominal_rate: Rate,
    time: Years,
    compounding_frequency: Frequency,
) -> TvmResult<Money> {
    if compounding_frequency == 0 {
        return Err(TvmError::InvalidInput {
            field: "compounding_frequency".into(),
            reason: "Compounding frequency must be greater than 0.".into(),
        });
    }
    if future_value < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "future_value".into(),
            reason: "Future value must be non-negative.".into(),
        });
    }
    if nominal_rate < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be non-negative.".into(),
        });
    }
    if time < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be non-negative.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let factor = (Decimal::ONE + nominal_rate / m).powd(time * m);
    Ok(future_value / factor)
}

/// Future value of a single cash flow with variable compounding.
///
/// FV = PV * (1 + r/m)^(t*m)
pub fn future_value_single_cashflow(
    present_value: Money,
    nominal_rate: Rate,
    time: Years,
    compounding_frequency: Frequency,
) -> TvmResult<Money> {
    if compounding_frequency == 0 {
        return Err(TvmError::InvalidInput {
            field: "compounding_frequency".into(),
            reason: "Compounding frequency must be greater than 0.".into(),
        });
    }
    if present_value < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "present_value".into(),
            reason: "Present value must be non-negative.".into(),
        });
    }
    if nominal_rate < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be non-negative.".into(),
        });
    }
    if time < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be non-negative.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let factor = (Decimal::ONE + nominal_rate / m).powd(time * m);
    Ok(present_value * factor)
}

/// Annual nominal rate implied by growing PV into FV over `time` years.
///
/// r = ((FV/PV)^(1/(t*m)) - 1) * m
pub fn interest_rate_single_cashflow(
    present_value: Money,
    future_value: Money,
    time: Years,
    compounding_frequency: Frequency,
) -> TvmResult<Rate> {
    if compounding_frequency == 0 {
        return Err(TvmError::InvalidInput {
            field: "compounding_frequency".into(),
            reason: "Compounding frequency must be greater than 0.".into(),
        });
    }
    if present_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "present_value".into(),
            reason: "Present value must be positive.".into(),
        });
    }
    if future_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "future_value".into(),
            reason: "Future value must be positive.".into(),
        });
    }
    if time <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let periods = time * m;
    let per_period = (future_value / present_value).powd(Decimal::ONE / periods) - Decimal::ONE;
    Ok(per_period * m)
}

/// Years needed for PV to reach FV at the given nominal rate.
///
/// t = ln(FV/PV) / ln(1 + r/m) / m
pub fn number_of_years_single_cashflow(
    present_value: Money,
    future_value: Money,
    nominal_rate: Rate,
    compounding_frequency: Frequency,
) -> TvmResult<Years> {
    if compounding_frequency == 0 {
        return Err(TvmError::InvalidInput {
            field: "compounding_frequency".into(),
            reason: "Compounding frequency must be greater than 0.".into(),
        });
    }
    if present_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "present_value".into(),
            reason: "Present value must be positive.".into(),
        });
    }
    if future_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "future_value".into(),
            reason: "Future value must be positive.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let periods = (future_value / present_value).ln() / (Decimal::ONE + nominal_rate / m).ln();
    Ok(periods / m)
}

/// Effective annual rate for a nominal rate compounded `m` times per year.
///
/// EAR = (1 + r/m)^m - 1
pub fn effective_annual_rate(
    nominal_rate: Rate,
    compounding_frequency: Frequency,
) -> TvmResult<Rate> {
    if compounding_frequency == 0 {
        return Err(TvmError::InvalidInput {
            field: "compounding_frequency".into(),
            reason: "Compounding frequency must be greater than 0.".into(),
        });
    }
    if nominal_rate < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be non-negative.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    Ok((Decimal::ONE + nominal_rate / m).powd(m) - Decimal::ONE)
}

/// Real interest rate via the Fisher effect.
///
/// real = (1 + nominal) / (1 + inflation) - 1
pub fn fisher_effect(nominal_rate: Rate, inflation_rate: Rate) -> TvmResult<Rate> {
    if nominal_rate < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be non-negative.".into(),
        });
    }
    if inflation_rate < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "inflation_rate".into(),
            reason: "Inflation rate must be non-negative.".into(),
        });
    }

    Ok((Decimal::ONE + nominal_rate) / (Decimal::ONE + inflation_rate) - Decimal::ONE)
}

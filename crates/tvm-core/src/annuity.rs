//! Level-payment streams: perpetuities and ordinary annuities.
//!
//! All annuity formulas work in per-period terms (i = r/m, n = t*m) and
//! require a strictly positive rate; the zero-rate degenerate cases are not
//! part of the supported domain. The year solvers additionally guard the
//! log argument so an annuity whose payment cannot cover periodic interest
//! is rejected rather than producing a domain error.

use rust_decimal::Decimal;
use rust_decimal::MathematicalOps;

use crate::error::TvmError;
use crate::types::{Frequency, Money, Rate, Years};
use crate::TvmResult;

/// Present value of a perpetuity paying `annual_payment` at each year end.
///
/// PV = C / r
pub fn present_value_perpetuity(annual_payment: Money, nominal_rate: Rate) -> TvmResult<Money> {
    if annual_payment < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "annual_payment".into(),
            reason: "Annual payment must be non-negative.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }

    Ok(annual_payment / nominal_rate)
}

/// Present value of a perpetuity whose first payment is received today.
///
/// PV = C / r + C
pub fn pv_perpetuity_starting_today(annual_payment: Money, nominal_rate: Rate) -> TvmResult<Money> {
    if annual_payment < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "annual_payment".into(),
            reason: "Annual payment must be non-negative.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }

    Ok(annual_payment / nominal_rate + annual_payment)
}

/// Present value of an ordinary annuity with variable compounding.
///
/// PV = C * (1 - (1+i)^-n) / i, with i = r/m and n = t*m
pub fn present_value_annuity(
    annual_payment: Money,
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
    if annual_payment < Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "annual_payment".into(),
            reason: "Annual payment must be non-negative.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }
    if time <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let i = nominal_rate / m;
    let factor = (Decimal::ONE + i).powd(time * m);
    Ok(annual_payment * (Decimal::ONE - Decimal::ONE / factor) / i)
}

/// Periodic cash payment of an annuity given its present value.
///
/// C = PV / [(1 - (1+i)^-n) / i]
pub fn cash_payment_annuity_pv(
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
    if present_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "present_value".into(),
            reason: "Present value must be positive.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }
    if time <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let i = nominal_rate / m;
    let factor = (Decimal::ONE + i).powd(time * m);
    let annuity_factor = (Decimal::ONE - Decimal::ONE / factor) / i;
    Ok(present_value / annuity_factor)
}

/// Periodic cash payment of an annuity given its future value.
///
/// C = FV / [((1+i)^n - 1) / i]
pub fn cash_payment_annuity_fv(
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
    if time <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let i = nominal_rate / m;
    let factor = (Decimal::ONE + i).powd(time * m);
    let annuity_factor = (factor - Decimal::ONE) / i;
    Ok(future_value / annuity_factor)
}

/// Years an annuity with the given payment takes to amortize `present_value`.
///
/// t = -ln(1 - PV*i/C) / ln(1+i) / m
pub fn number_of_years_annuity_pv(
    present_value: Money,
    annual_payment: Money,
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
    if annual_payment <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "annual_payment".into(),
            reason: "Annual payment must be positive.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let i = nominal_rate / m;
    // Log argument must stay positive: a payment at or below the periodic
    // interest on PV never amortizes the balance.
    let log_arg = Decimal::ONE - present_value * i / annual_payment;
    if log_arg <= Decimal::ZERO {
        return Err(TvmError::FinancialImpossibility(
            "Payment does not exceed periodic interest; the annuity never amortizes.".into(),
        ));
    }

    let periods = -log_arg.ln() / (Decimal::ONE + i).ln();
    Ok(periods / m)
}

/// Years an annuity with the given payment takes to accumulate `future_value`.
///
/// t = ln(1 + FV*i/C) / ln(1+i) / m
pub fn number_of_years_annuity_fv(
    future_value: Money,
    annual_payment: Money,
    nominal_rate: Rate,
    compounding_frequency: Frequency,
) -> TvmResult<Years> {
    if compounding_frequency == 0 {
        return Err(TvmError::InvalidInput {
            field: "compounding_frequency".into(),
            reason: "Compounding frequency must be greater than 0.".into(),
        });
    }
    if future_value <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "future_value".into(),
            reason: "Future value must be positive.".into(),
        });
    }
    if annual_payment <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "annual_payment".into(),
            reason: "Annual payment must be positive.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let i = nominal_rate / m;
    let periods = (Decimal::ONE + future_value * i / annual_payment).ln()
        / (Decimal::ONE + i).ln();
    Ok(periods / m)
}

/// Future value of an ordinary annuity with variable compounding.
///
/// FV = C * ((1+i)^n - 1) / i
pub fn future_value_annuity(
    annual_payment: Money,
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
    if annual_payment <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "annual_payment".into(),
            reason: "Annual payment must be positive.".into(),
        });
    }
    if nominal_rate <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "nominal_rate".into(),
            reason: "Nominal rate must be positive.".into(),
        });
    }
    if time <= Decimal::ZERO {
        return Err(TvmError::InvalidInput {
            field: "time".into(),
            reason: "Time must be positive.".into(),
        });
    }

    let m = Decimal::from(compounding_frequency);
    let i = nominal_rate / m;
    let factor = (Decimal::ONE + i).powd(time * m);
    Ok(annual_payment * (factor - Decimal::ONE) / i)
}

use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use tvm_core::time_value;

/// Arguments for discounting a single cash flow
#[derive(Args)]
pub struct PresentValueArgs {
    /// Future value of the cash flow
    #[arg(long)]
    pub future_value: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Time in years (fractional years allowed)
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for compounding a single cash flow
#[derive(Args)]
pub struct FutureValueArgs {
    /// Present value of the cash flow
    #[arg(long)]
    pub present_value: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Time in years (fractional years allowed)
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for solving the implied nominal rate
#[derive(Args)]
pub struct ImpliedRateArgs {
    /// Present value of the cash flow
    #[arg(long)]
    pub present_value: Decimal,

    /// Future value of the cash flow
    #[arg(long)]
    pub future_value: Decimal,

    /// Time in years
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for solving the number of years
#[derive(Args)]
pub struct YearsToGrowArgs {
    /// Present value of the cash flow
    #[arg(long)]
    pub present_value: Decimal,

    /// Future value of the cash flow
    #[arg(long)]
    pub future_value: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for the effective annual rate
#[derive(Args)]
pub struct EarArgs {
    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Compounding periods per year
    #[arg(long)]
    pub frequency: u32,
}

/// Arguments for the Fisher effect
#[derive(Args)]
pub struct FisherArgs {
    /// Nominal interest rate (e.g. 0.07 for 7%)
    #[arg(long)]
    pub nominal_rate: Decimal,

    /// Inflation rate (e.g. 0.02 for 2%)
    #[arg(long)]
    pub inflation_rate: Decimal,
}

pub fn run_present_value(args: PresentValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pv = time_value::present_value_single_cashflow(
        args.future_value,
        args.rate,
        args.time,
        args.frequency,
    )?;
    Ok(json!({
        "methodology": "Single cash flow discounting: PV = FV / (1 + r/m)^(t*m)",
        "inputs": {
            "future_value": args.future_value,
            "rate": args.rate,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "present_value": pv },
    }))
}

pub fn run_future_value(args: FutureValueArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fv = time_value::future_value_single_cashflow(
        args.present_value,
        args.rate,
        args.time,
        args.frequency,
    )?;
    Ok(json!({
        "methodology": "Single cash flow compounding: FV = PV * (1 + r/m)^(t*m)",
        "inputs": {
            "present_value": args.present_value,
            "rate": args.rate,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "future_value": fv },
    }))
}

pub fn run_implied_rate(args: ImpliedRateArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let rate = time_value::interest_rate_single_cashflow(
        args.present_value,
        args.future_value,
        args.time,
        args.frequency,
    )?;
    Ok(json!({
        "methodology": "Implied rate: r = ((FV/PV)^(1/(t*m)) - 1) * m",
        "inputs": {
            "present_value": args.present_value,
            "future_value": args.future_value,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "rate": rate },
    }))
}

pub fn run_years_to_grow(args: YearsToGrowArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let years = time_value::number_of_years_single_cashflow(
        args.present_value,
        args.future_value,
        args.rate,
        args.frequency,
    )?;
    Ok(json!({
        "methodology": "Years to grow: t = ln(FV/PV) / ln(1 + r/m) / m",
        "inputs": {
            "present_value": args.present_value,
            "future_value": args.future_value,
            "rate": args.rate,
            "frequency": args.frequency,
        },
        "result": { "years": years },
    }))
}

pub fn run_ear(args: EarArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let ear = time_value::effective_annual_rate(args.rate, args.frequency)?;
    Ok(json!({
        "methodology": "Effective annual rate: EAR = (1 + r/m)^m - 1",
        "inputs": {
            "rate": args.rate,
            "frequency": args.frequency,
        },
        "result": { "effective_annual_rate": ear },
    }))
}

pub fn run_fisher(args: FisherArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let real = time_value::fisher_effect(args.nominal_rate, args.inflation_rate)?;
    Ok(json!({
        "methodology": "Fisher effect: real = (1 + nominal) / (1 + inflation) - 1",
        "inputs": {
            "nominal_rate": args.nominal_rate,
            "inflation_rate": args.inflation_rate,
        },
        "result": { "real_rate": real },
    }))
}

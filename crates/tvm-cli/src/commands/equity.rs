use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use tvm_core::equity;

/// Arguments for the Gordon constant-growth model
#[derive(Args)]
pub struct DdmArgs {
    /// Dividend per share
    #[arg(long)]
    pub dividend: Decimal,

    /// Required rate of return (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: Decimal,

    /// Dividend growth rate (e.g. 0.02 for 2%)
    #[arg(long)]
    pub growth: Decimal,
}

/// Arguments for the multi-stage DDM with terminal value
#[derive(Args)]
pub struct MultiStageDdmArgs {
    /// Comma-separated dividends per share, one per year (e.g. 1.0,1.05,1.1)
    #[arg(long, value_delimiter = ',')]
    pub dividends: Vec<Decimal>,

    /// Annual discount rate (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: Decimal,

    /// Estimated share price at the end of the last year
    #[arg(long)]
    pub terminal_value: Decimal,
}

/// Arguments for the no-growth DDM
#[derive(Args)]
pub struct DdmNoGrowthArgs {
    /// Dividend per share
    #[arg(long)]
    pub dividend: Decimal,

    /// Required rate of return (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: Decimal,
}

/// Arguments for the constant-growth DDM over a horizon
#[derive(Args)]
pub struct DdmConstantGrowthArgs {
    /// Dividend per share
    #[arg(long)]
    pub dividend: Decimal,

    /// Required rate of return (e.g. 0.08 for 8%)
    #[arg(long)]
    pub rate: Decimal,

    /// Dividend growth rate (e.g. 0.02 for 2%)
    #[arg(long)]
    pub growth: Decimal,

    /// Growth horizon in years
    #[arg(long)]
    pub time: Decimal,
}

/// Arguments for holding period return
#[derive(Args)]
pub struct HprArgs {
    /// Purchase price of the asset
    #[arg(long)]
    pub initial_price: Decimal,

    /// Sale (or current) price of the asset
    #[arg(long)]
    pub final_price: Decimal,

    /// Dividend received per payment
    #[arg(long, default_value = "0")]
    pub dividend: Decimal,

    /// Number of dividend payments received during the holding period
    #[arg(long, default_value = "1")]
    pub times_received: u32,
}

pub fn run_ddm(args: DdmArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = equity::dividend_discount_model(args.dividend, args.rate, args.growth)?;
    Ok(json!({
        "methodology": "Gordon growth model: V = D / (r - g)",
        "inputs": {
            "dividend": args.dividend,
            "rate": args.rate,
            "growth": args.growth,
        },
        "result": { "intrinsic_value": value },
    }))
}

pub fn run_multi_stage_ddm(args: MultiStageDdmArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = equity::multi_stage_ddm_with_terminal_value(
        &args.dividends,
        args.rate,
        args.terminal_value,
    )?;
    Ok(json!({
        "methodology": "Multi-stage DDM: V = sum D_i/(1+r)^(i+1) + TV/(1+r)^N",
        "inputs": {
            "dividends": args.dividends,
            "rate": args.rate,
            "terminal_value": args.terminal_value,
        },
        "result": { "intrinsic_value": value },
    }))
}

pub fn run_ddm_no_growth(args: DdmNoGrowthArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let value = equity::ddm_no_growth(args.dividend, args.rate)?;
    Ok(json!({
        "methodology": "No-growth DDM: V = D / r",
        "inputs": {
            "dividend": args.dividend,
            "rate": args.rate,
        },
        "result": { "intrinsic_value": value },
    }))
}

pub fn run_ddm_constant_growth(
    args: DdmConstantGrowthArgs,
) -> Result<Value, Box<dyn std::error::Error>> {
    let value = equity::ddm_constant_growth(args.dividend, args.rate, args.growth, args.time)?;
    Ok(json!({
        "methodology": "Constant-growth DDM: V = D * (1+g)^t / (r - g)",
        "inputs": {
            "dividend": args.dividend,
            "rate": args.rate,
            "growth": args.growth,
            "time": args.time,
        },
        "result": { "intrinsic_value": value },
    }))
}

pub fn run_hpr(args: HprArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let hpr = equity::holding_period_return(
        args.initial_price,
        args.final_price,
        args.dividend,
        args.times_received,
    )?;
    Ok(json!({
        "methodology": "Holding period return: HPR = (P1 - P0 + D*k) / P0",
        "inputs": {
            "initial_price": args.initial_price,
            "final_price": args.final_price,
            "dividend": args.dividend,
            "times_received": args.times_received,
        },
        "result": { "holding_period_return": hpr },
    }))
}

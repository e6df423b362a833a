use clap::Args;
use rust_decimal::Decimal;
use serde_json::{json, Value};

use tvm_core::annuity;

/// Arguments for perpetuity valuation
#[derive(Args)]
pub struct PerpetuityArgs {
    /// Payment received each year
    #[arg(long)]
    pub payment: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// First payment is received today rather than at year end
    #[arg(long)]
    pub starting_today: bool,
}

/// Arguments for annuity present value
#[derive(Args)]
pub struct AnnuityPvArgs {
    /// Payment received each period
    #[arg(long)]
    pub payment: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Time in years
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for annuity future value
#[derive(Args)]
pub struct AnnuityFvArgs {
    /// Payment received each period
    #[arg(long)]
    pub payment: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Time in years
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for solving the payment from a present value
#[derive(Args)]
pub struct PaymentFromPvArgs {
    /// Present value of the annuity
    #[arg(long)]
    pub present_value: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Time in years
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for solving the payment from a future value
#[derive(Args)]
pub struct PaymentFromFvArgs {
    /// Future value of the annuity
    #[arg(long)]
    pub future_value: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Time in years
    #[arg(long)]
    pub time: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for solving the years from a present value
#[derive(Args)]
pub struct YearsFromPvArgs {
    /// Present value of the annuity
    #[arg(long)]
    pub present_value: Decimal,

    /// Payment received each period
    #[arg(long)]
    pub payment: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

/// Arguments for solving the years from a future value
#[derive(Args)]
pub struct YearsFromFvArgs {
    /// Future value of the annuity
    #[arg(long)]
    pub future_value: Decimal,

    /// Payment received each period
    #[arg(long)]
    pub payment: Decimal,

    /// Annual nominal rate (e.g. 0.05 for 5%)
    #[arg(long)]
    pub rate: Decimal,

    /// Compounding periods per year
    #[arg(long, default_value = "1")]
    pub frequency: u32,
}

pub fn run_perpetuity(args: PerpetuityArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let (pv, methodology) = if args.starting_today {
        (
            annuity::pv_perpetuity_starting_today(args.payment, args.rate)?,
            "Perpetuity starting today: PV = C/r + C",
        )
    } else {
        (
            annuity::present_value_perpetuity(args.payment, args.rate)?,
            "Ordinary perpetuity: PV = C/r",
        )
    };
    Ok(json!({
        "methodology": methodology,
        "inputs": {
            "payment": args.payment,
            "rate": args.rate,
            "starting_today": args.starting_today,
        },
        "result": { "present_value": pv },
    }))
}

pub fn run_annuity_pv(args: AnnuityPvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let pv = annuity::present_value_annuity(args.payment, args.rate, args.time, args.frequency)?;
    Ok(json!({
        "methodology": "Ordinary annuity: PV = C * (1 - (1+i)^-n) / i",
        "inputs": {
            "payment": args.payment,
            "rate": args.rate,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "present_value": pv },
    }))
}

pub fn run_annuity_fv(args: AnnuityFvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let fv = annuity::future_value_annuity(args.payment, args.rate, args.time, args.frequency)?;
    Ok(json!({
        "methodology": "Ordinary annuity: FV = C * ((1+i)^n - 1) / i",
        "inputs": {
            "payment": args.payment,
            "rate": args.rate,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "future_value": fv },
    }))
}

pub fn run_payment_from_pv(args: PaymentFromPvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment =
        annuity::cash_payment_annuity_pv(args.present_value, args.rate, args.time, args.frequency)?;
    Ok(json!({
        "methodology": "Annuity payment: C = PV / [(1 - (1+i)^-n) / i]",
        "inputs": {
            "present_value": args.present_value,
            "rate": args.rate,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "payment": payment },
    }))
}

pub fn run_payment_from_fv(args: PaymentFromFvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let payment =
        annuity::cash_payment_annuity_fv(args.future_value, args.rate, args.time, args.frequency)?;
    Ok(json!({
        "methodology": "Annuity payment: C = FV / [((1+i)^n - 1) / i]",
        "inputs": {
            "future_value": args.future_value,
            "rate": args.rate,
            "time": args.time,
            "frequency": args.frequency,
        },
        "result": { "payment": payment },
    }))
}

pub fn run_years_from_pv(args: YearsFromPvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let years = annuity::number_of_years_annuity_pv(
        args.present_value,
        args.payment,
        args.rate,
        args.frequency,
    )?;
    Ok(json!({
        "methodology": "Annuity horizon: t = -ln(1 - PV*i/C) / ln(1+i) / m",
        "inputs": {
            "present_value": args.present_value,
            "payment": args.payment,
            "rate": args.rate,
            "frequency": args.frequency,
        },
        "result": { "years": years },
    }))
}

pub fn run_years_from_fv(args: YearsFromFvArgs) -> Result<Value, Box<dyn std::error::Error>> {
    let years = annuity::number_of_years_annuity_fv(
        args.future_value,
        args.payment,
        args.rate,
        args.frequency,
    )?;
    Ok(json!({
        "methodology": "Annuity horizon: t = ln(1 + FV*i/C) / ln(1+i) / m",
        "inputs": {
            "future_value": args.future_value,
            "payment": args.payment,
            "rate": args.rate,
            "frequency": args.frequency,
        },
        "result": { "years": years },
    }))
}

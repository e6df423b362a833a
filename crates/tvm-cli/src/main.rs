mod commands;
mod output;

use clap::{Parser, Subcommand, ValueEnum};
use colored::Colorize;
use std::process;

use commands::annuity::{
    AnnuityFvArgs, AnnuityPvArgs, PaymentFromFvArgs, PaymentFromPvArgs, PerpetuityArgs,
    YearsFromFvArgs, YearsFromPvArgs,
};
use commands::equity::{DdmArgs, DdmConstantGrowthArgs, DdmNoGrowthArgs, HprArgs, MultiStageDdmArgs};
use commands::time_value::{
    EarArgs, FisherArgs, FutureValueArgs, ImpliedRateArgs, PresentValueArgs, YearsToGrowArgs,
};

/// Closed-form time-value-of-money and equity valuation calculations
#[derive(Parser)]
#[command(
    name = "tvm",
    version,
    about = "Closed-form time-value-of-money and equity valuation calculations",
    long_about = "A CLI for quick, validated financial computations with decimal precision. \
                  Covers single-cash-flow compounding, annuities, perpetuities, dividend \
                  discount models, the Fisher effect, and holding-period return."
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Output format
    #[arg(long, default_value = "json", global = true)]
    output: OutputFormat,
}

#[derive(Subcommand)]
enum Commands {
    /// Present value of a single future cash flow
    PresentValue(PresentValueArgs),
    /// Future value of a single present cash flow
    FutureValue(FutureValueArgs),
    /// Nominal rate implied by a PV growing into an FV
    ImpliedRate(ImpliedRateArgs),
    /// Years needed for a PV to reach an FV
    YearsToGrow(YearsToGrowArgs),
    /// Effective annual rate for a nominal rate and compounding frequency
    Ear(EarArgs),
    /// Real rate via the Fisher effect
    Fisher(FisherArgs),
    /// Present value of a perpetuity (ordinary or starting today)
    Perpetuity(PerpetuityArgs),
    /// Present value of an ordinary annuity
    AnnuityPv(AnnuityPvArgs),
    /// Future value of an ordinary annuity
    AnnuityFv(AnnuityFvArgs),
    /// Annuity payment implied by a present value
    PaymentFromPv(PaymentFromPvArgs),
    /// Annuity payment implied by a future value
    PaymentFromFv(PaymentFromFvArgs),
    /// Years for an annuity to amortize a present value
    YearsFromPv(YearsFromPvArgs),
    /// Years for an annuity to accumulate a future value
    YearsFromFv(YearsFromFvArgs),
    /// Gordon constant-growth dividend discount model
    Ddm(DdmArgs),
    /// Multi-stage DDM with explicit dividends and a terminal value
    MultiStageDdm(MultiStageDdmArgs),
    /// Dividend discount model with no growth
    DdmNoGrowth(DdmNoGrowthArgs),
    /// Gordon model after growing the dividend for a number of years
    DdmConstantGrowth(DdmConstantGrowthArgs),
    /// Holding period return including dividend income
    Hpr(HprArgs),
    /// Print version information
    Version,
}

#[derive(Debug, Clone, ValueEnum)]
pub enum OutputFormat {
    Json,
    Table,
    Minimal,
}

fn main() {
    let cli = Cli::parse();

    let result: Result<serde_json::Value, Box<dyn std::error::Error>> = match cli.command {
        Commands::PresentValue(args) => commands::time_value::run_present_value(args),
        Commands::FutureValue(args) => commands::time_value::run_future_value(args),
        Commands::ImpliedRate(args) => commands::time_value::run_implied_rate(args),
        Commands::YearsToGrow(args) => commands::time_value::run_years_to_grow(args),
        Commands::Ear(args) => commands::time_value::run_ear(args),
        Commands::Fisher(args) => commands::time_value::run_fisher(args),
        Commands::Perpetuity(args) => commands::annuity::run_perpetuity(args),
        Commands::AnnuityPv(args) => commands::annuity::run_annuity_pv(args),
        Commands::AnnuityFv(args) => commands::annuity::run_annuity_fv(args),
        Commands::PaymentFromPv(args) => commands::annuity::run_payment_from_pv(args),
        Commands::PaymentFromFv(args) => commands::annuity::run_payment_from_fv(args),
        Commands::YearsFromPv(args) => commands::annuity::run_years_from_pv(args),
        Commands::YearsFromFv(args) => commands::annuity::run_years_from_fv(args),
        Commands::Ddm(args) => commands::equity::run_ddm(args),
        Commands::MultiStageDdm(args) => commands::equity::run_multi_stage_ddm(args),
        Commands::DdmNoGrowth(args) => commands::equity::run_ddm_no_growth(args),
        Commands::DdmConstantGrowth(args) => commands::equity::run_ddm_constant_growth(args),
        Commands::Hpr(args) => commands::equity::run_hpr(args),
        Commands::Version => {
            println!("tvm {}", env!("CARGO_PKG_VERSION"));
            return;
        }
    };

    match result {
        Ok(value) => {
            output::format_output(&cli.output, &value);
            process::exit(0);
        }
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            process::exit(1);
        }
    }
}

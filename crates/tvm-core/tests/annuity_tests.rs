use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tvm_core::annuity;
use tvm_core::TvmError;

fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
    (a - b).abs() < eps
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_perpetuity_reference() {
    let pv = annuity::present_value_perpetuity(dec!(50.0), dec!(0.05)).unwrap();
    assert_eq!(pv, dec!(1000));
}

#[test]
fn test_perpetuity_due_reference() {
    let pv = annuity::pv_perpetuity_starting_today(dec!(50.0), dec!(0.05)).unwrap();
    assert_eq!(pv, dec!(1050));
}

#[test]
fn test_annuity_pv_reference() {
    let pv = annuity::present_value_annuity(dec!(50.0), dec!(0.05), dec!(10), 1).unwrap();
    assert!(approx_eq(pv, dec!(386.0867), dec!(0.001)), "got {pv}");
}

#[test]
fn test_annuity_fv_reference() {
    let fv = annuity::future_value_annuity(dec!(50.0), dec!(0.05), dec!(10), 1).unwrap();
    assert!(approx_eq(fv, dec!(628.894), dec!(0.001)), "got {fv}");
}

#[test]
fn test_payment_from_pv_reference() {
    let pmt = annuity::cash_payment_annuity_pv(dec!(400.0), dec!(0.05), dec!(10), 1).unwrap();
    assert!(approx_eq(pmt, dec!(51.8006), dec!(0.001)), "got {pmt}");
}

#[test]
fn test_payment_from_fv_reference() {
    let pmt = annuity::cash_payment_annuity_fv(dec!(500.0), dec!(0.05), dec!(10), 1).unwrap();
    assert!(approx_eq(pmt, dec!(39.7524), dec!(0.001)), "got {pmt}");
}

#[test]
fn test_years_from_pv_reference() {
    let t = annuity::number_of_years_annuity_pv(dec!(400.0), dec!(50.0), dec!(0.05), 1).unwrap();
    assert!(approx_eq(t, dec!(10.4699), dec!(0.001)), "got {t}");
}

#[test]
fn test_years_from_fv_reference() {
    let t = annuity::number_of_years_annuity_fv(dec!(500.0), dec!(50.0), dec!(0.05), 1).unwrap();
    assert!(approx_eq(t, dec!(8.3104), dec!(0.001)), "got {t}");
}

// ===========================================================================
// Algebraic laws
// ===========================================================================

#[test]
fn test_annuity_converges_to_perpetuity() {
    // A long-dated annuity approaches the perpetuity value C/r.
    let perpetuity = annuity::present_value_perpetuity(dec!(50.0), dec!(0.05)).unwrap();
    let long_annuity = annuity::present_value_annuity(dec!(50.0), dec!(0.05), dec!(400), 1).unwrap();
    assert!(
        approx_eq(long_annuity, perpetuity, dec!(0.001)),
        "annuity {long_annuity} should approach perpetuity {perpetuity}"
    );
    // And from below: a finite annuity is always worth less.
    assert!(long_annuity < perpetuity);
}

#[test]
fn test_payment_inverts_annuity_pv() {
    // Solving for the payment of an annuity worth PV, then revaluing that
    // payment stream, recovers PV.
    let pmt = annuity::cash_payment_annuity_pv(dec!(400.0), dec!(0.05), dec!(10), 1).unwrap();
    let pv = annuity::present_value_annuity(pmt, dec!(0.05), dec!(10), 1).unwrap();
    assert!(approx_eq(pv, dec!(400.0), dec!(0.000001)), "got {pv}");
}

#[test]
fn test_payment_inverts_annuity_fv() {
    let pmt = annuity::cash_payment_annuity_fv(dec!(500.0), dec!(0.05), dec!(10), 1).unwrap();
    let fv = annuity::future_value_annuity(pmt, dec!(0.05), dec!(10), 1).unwrap();
    assert!(approx_eq(fv, dec!(500.0), dec!(0.000001)), "got {fv}");
}

#[test]
fn test_years_inverts_annuity_fv() {
    let fv = annuity::future_value_annuity(dec!(50.0), dec!(0.06), dec!(8), 4).unwrap();
    let t = annuity::number_of_years_annuity_fv(fv, dec!(50.0), dec!(0.06), 4).unwrap();
    assert!(approx_eq(t, dec!(8.0), dec!(0.00001)), "got {t}");
}

#[test]
fn test_monthly_compounding_annuity() {
    // 200/month-equivalent payment at 6% nominal, monthly compounding, 5y:
    // i = 0.005, n = 60, PV = 200 * (1 - 1.005^-60) / 0.005
    let pv = annuity::present_value_annuity(dec!(200.0), dec!(0.06), dec!(5), 12).unwrap();
    assert!(approx_eq(pv, dec!(10345.11), dec!(0.01)), "got {pv}");
}

// ===========================================================================
// Rejection determinism
// ===========================================================================

#[test]
fn test_zero_frequency_always_rejected() {
    for _ in 0..3 {
        assert!(annuity::present_value_annuity(dec!(50), dec!(0.05), dec!(10), 0).is_err());
        assert!(annuity::future_value_annuity(dec!(50), dec!(0.05), dec!(10), 0).is_err());
    }
}

#[test]
fn test_non_positive_required_inputs_rejected() {
    assert!(annuity::present_value_perpetuity(dec!(-1), dec!(0.05)).is_err());
    assert!(annuity::pv_perpetuity_starting_today(dec!(50), dec!(0)).is_err());
    assert!(annuity::cash_payment_annuity_pv(dec!(0), dec!(0.05), dec!(10), 1).is_err());
    assert!(annuity::cash_payment_annuity_fv(dec!(500), dec!(0.05), dec!(0), 1).is_err());
    assert!(annuity::number_of_years_annuity_pv(dec!(400), dec!(0), dec!(0.05), 1).is_err());
    assert!(annuity::number_of_years_annuity_fv(dec!(0), dec!(50), dec!(0.05), 1).is_err());
    // The annuity FV takes a strictly positive payment, unlike the PV form
    // which accepts zero.
    assert!(annuity::future_value_annuity(dec!(0), dec!(0.05), dec!(10), 1).is_err());
    let zero_pv = annuity::present_value_annuity(dec!(0), dec!(0.05), dec!(10), 1).unwrap();
    assert_eq!(zero_pv, dec!(0));
}

#[test]
fn test_non_amortizing_annuity_rejected() {
    // Interest on 2000 at 5% is 100 per period; a 100 payment only services
    // interest and a smaller one falls behind. Both are impossible to solve.
    let at_interest =
        annuity::number_of_years_annuity_pv(dec!(2000), dec!(100), dec!(0.05), 1).unwrap_err();
    assert!(matches!(at_interest, TvmError::FinancialImpossibility(_)));
    let below_interest =
        annuity::number_of_years_annuity_pv(dec!(2000), dec!(50), dec!(0.05), 1).unwrap_err();
    assert!(matches!(below_interest, TvmError::FinancialImpossibility(_)));
}

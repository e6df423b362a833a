use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use tvm_core::equity;
use tvm_core::TvmError;

fn approx_eq(a: Decimal, b: Decimal, eps: Decimal) -> bool {
    (a - b).abs() < eps
}

// ===========================================================================
// Reference scenarios
// ===========================================================================

#[test]
fn test_gordon_model_reference() {
    let v = equity::dividend_discount_model(dec!(1.0), dec!(0.08), dec!(0.02)).unwrap();
    assert!(approx_eq(v, dec!(16.6667), dec!(0.001)), "got {v}");
}

#[test]
fn test_multi_stage_ddm_reference() {
    // Three explicit dividends, then a 50.0 terminal value at the horizon:
    // 1/1.08 + 1.05/1.08^2 + 1.10/1.08^3 + 50/1.08^3
    let dividends = [dec!(1.0), dec!(1.05), dec!(1.1)];
    let v = equity::multi_stage_ddm_with_terminal_value(&dividends, dec!(0.08), dec!(50.0))
        .unwrap();
    assert!(approx_eq(v, dec!(42.3910), dec!(0.001)), "got {v}");
}

#[test]
fn test_ddm_no_growth_reference() {
    let v = equity::ddm_no_growth(dec!(1.0), dec!(0.08)).unwrap();
    assert_eq!(v, dec!(12.5));
}

#[test]
fn test_ddm_constant_growth_reference() {
    let v = equity::ddm_constant_growth(dec!(1.0), dec!(0.08), dec!(0.02), dec!(5)).unwrap();
    assert!(approx_eq(v, dec!(18.4013), dec!(0.001)), "got {v}");
}

#[test]
fn test_holding_period_return_reference() {
    let r = equity::holding_period_return(dec!(50.0), dec!(60.0), dec!(2.0), 1).unwrap();
    assert_eq!(r, dec!(0.24));
}

// ===========================================================================
// Algebraic laws
// ===========================================================================

#[test]
fn test_zero_growth_reduces_to_no_growth_model() {
    for (d, r) in [
        (dec!(1.0), dec!(0.08)),
        (dec!(2.5), dec!(0.11)),
        (dec!(0.0), dec!(0.05)),
    ] {
        let gordon = equity::dividend_discount_model(d, r, Decimal::ZERO).unwrap();
        let flat = equity::ddm_no_growth(d, r).unwrap();
        assert_eq!(gordon, flat);
    }
}

#[test]
fn test_multi_stage_with_no_dividends_is_discounted_terminal_only() {
    // A zero-length horizon leaves the terminal value undiscounted.
    let v = equity::multi_stage_ddm_with_terminal_value(&[], dec!(0.08), dec!(50.0)).unwrap();
    assert_eq!(v, dec!(50.0));
}

#[test]
fn test_multi_stage_zero_dividends_discounts_terminal() {
    // All-zero dividends contribute nothing; only the terminal value matters.
    let dividends = [Decimal::ZERO, Decimal::ZERO];
    let v = equity::multi_stage_ddm_with_terminal_value(&dividends, dec!(0.10), dec!(121.0))
        .unwrap();
    // 121 / 1.1^2 = 100
    assert!(approx_eq(v, dec!(100.0), dec!(0.000001)), "got {v}");
}

#[test]
fn test_loss_making_holding_period() {
    // Price drop with no dividend income is a negative return.
    let r = equity::holding_period_return(dec!(80.0), dec!(60.0), dec!(0.0), 0).unwrap();
    assert_eq!(r, dec!(-0.25));
}

#[test]
fn test_declining_dividend_constant_growth() {
    // Negative growth is valid as long as it stays above -100%.
    let v = equity::ddm_constant_growth(dec!(2.0), dec!(0.08), dec!(-0.02), dec!(3)).unwrap();
    // 2 * 0.98^3 / 0.10 = 18.8238
    assert!(approx_eq(v, dec!(18.8238), dec!(0.001)), "got {v}");
}

// ===========================================================================
// Rejection determinism
// ===========================================================================

#[test]
fn test_divergent_valuations_rejected() {
    // r == g and r < g both diverge, for the plain and grown Gordon forms.
    assert!(matches!(
        equity::dividend_discount_model(dec!(1.0), dec!(0.05), dec!(0.05)).unwrap_err(),
        TvmError::FinancialImpossibility(_)
    ));
    assert!(matches!(
        equity::ddm_constant_growth(dec!(1.0), dec!(0.05), dec!(0.07), dec!(5)).unwrap_err(),
        TvmError::FinancialImpossibility(_)
    ));
}

#[test]
fn test_invalid_inputs_rejected() {
    assert!(equity::dividend_discount_model(dec!(-1.0), dec!(0.08), dec!(0.02)).is_err());
    assert!(equity::ddm_no_growth(dec!(1.0), dec!(0.0)).is_err());
    assert!(equity::ddm_constant_growth(dec!(1.0), dec!(0.08), dec!(-1.5), dec!(5)).is_err());
    assert!(equity::ddm_constant_growth(dec!(1.0), dec!(0.08), dec!(0.02), dec!(0)).is_err());
    assert!(equity::holding_period_return(dec!(0.0), dec!(60.0), dec!(2.0), 1).is_err());
    assert!(equity::holding_period_return(dec!(50.0), dec!(-1.0), dec!(2.0), 1).is_err());
}

#[test]
fn test_multi_stage_rejections() {
    let dividends = [dec!(1.0), dec!(1.05)];
    assert!(
        equity::multi_stage_ddm_with_terminal_value(&dividends, dec!(0.0), dec!(50.0)).is_err()
    );
    assert!(
        equity::multi_stage_ddm_with_terminal_value(&dividends, dec!(0.08), dec!(0.0)).is_err()
    );
    let bad = [dec!(1.0), dec!(-0.5)];
    assert!(equity::multi_stage_ddm_with_terminal_value(&bad, dec!(0.08), dec!(50.0)).is_err());
}

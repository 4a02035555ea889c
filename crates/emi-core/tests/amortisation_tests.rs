use emi_core::amortisation::{build_amortisation, AmortisationInput, AmortisationOutput};
use emi_core::EmiError;
use pretty_assertions::assert_eq;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

// ===========================================================================
// Amortisation engine tests
// ===========================================================================

/// Residual tolerated at full tenure from 96-bit rounding.
const DUST: Decimal = dec!(0.000001);

fn loan(
    principal: Decimal,
    annual_rate_pct: Decimal,
    tenure_months: u32,
    prepayment: Option<Decimal>,
) -> AmortisationInput {
    AmortisationInput {
        principal,
        annual_rate_pct,
        tenure_months,
        prepayment,
    }
}

fn run(input: &AmortisationInput) -> AmortisationOutput {
    build_amortisation(input).unwrap().result
}

/// Loans exercised by the property tests: small personal, mid-size, long
/// mortgage with prepayment, interest-free with prepayment, and the largest
/// accepted principal over the longest tenure.
fn property_grid() -> Vec<AmortisationInput> {
    vec![
        loan(dec!(100_000), dec!(12), 12, None),
        loan(dec!(250_000), dec!(9), 24, None),
        loan(dec!(7_500_000), dec!(8.5), 240, Some(dec!(100_000))),
        loan(dec!(1_000_000), Decimal::ZERO, 36, Some(dec!(250_000))),
        loan(dec!(1_000_000_000_000), dec!(1), 1200, None),
    ]
}

#[test]
fn test_standard_loan_known_answer() {
    let out = run(&loan(dec!(100_000), dec!(12), 12, None));

    let emi_diff = (out.installment - dec!(8884.88)).abs();
    assert!(emi_diff < dec!(0.01), "EMI {} not near 8884.88", out.installment);

    let interest_diff = (out.total_interest - dec!(6618.55)).abs();
    assert!(
        interest_diff < dec!(0.05),
        "Total interest {} not near 6618.55",
        out.total_interest
    );

    let paid_diff = (out.total_paid - dec!(106_618.55)).abs();
    assert!(
        paid_diff < dec!(0.05),
        "Total paid {} not near 106618.55",
        out.total_paid
    );

    assert_eq!(out.ledger.len(), 12);
}

#[test]
fn test_installment_within_annuity_bounds() {
    // For r > 0 and n > 1 the level payment sits strictly between straight-line
    // principal P/n and P/n plus a full month of interest on the principal.
    for input in property_grid() {
        if input.annual_rate_pct.is_zero() || input.tenure_months == 1 {
            continue;
        }
        let out = run(&input);
        let straight_line = input.principal / Decimal::from(input.tenure_months);
        let first_interest = input.principal * input.annual_rate_pct / dec!(12) / dec!(100);
        assert!(
            out.installment > straight_line,
            "{}: EMI {} below straight-line {}",
            input.principal,
            out.installment,
            straight_line
        );
        assert!(
            out.installment < straight_line + first_interest,
            "{}: EMI {} above P/n + P*r bound",
            input.principal,
            out.installment
        );
    }
}

#[test]
fn test_ledger_replays_from_inputs() {
    // Walk every ledger and re-derive each row from the prior balance.
    for input in property_grid() {
        let out = run(&input);
        let monthly_rate = input.annual_rate_pct / dec!(12) / dec!(100);
        let mut balance = input.principal;

        assert!(out.ledger.len() <= input.tenure_months as usize);
        for (i, entry) in out.ledger.iter().enumerate() {
            assert_eq!(entry.month, i as u32 + 1);
            assert_eq!(entry.interest_paid, balance * monthly_rate);
            assert_eq!(
                entry.installment_paid,
                entry.interest_paid + entry.principal_paid
            );
            assert!(entry.principal_paid >= Decimal::ZERO);
            assert!(entry.principal_paid <= balance);
            assert_eq!(
                entry.remaining_balance,
                balance - entry.principal_paid - entry.prepayment_applied
            );
            balance = entry.remaining_balance;
        }

        let last = out.ledger.last().unwrap();
        assert!(
            last.remaining_balance >= Decimal::ZERO && last.remaining_balance < DUST,
            "Loan {} left {} unsettled",
            input.principal,
            last.remaining_balance
        );
    }
}

#[test]
fn test_principal_fully_retired() {
    for input in property_grid() {
        let out = run(&input);
        let principal_sum: Decimal = out.ledger.iter().map(|e| e.principal_paid).sum();
        let prepay_sum: Decimal = out.ledger.iter().map(|e| e.prepayment_applied).sum();
        let retired = principal_sum + prepay_sum;
        let diff = (retired - input.principal).abs();
        assert!(
            diff < DUST,
            "Loan {}: retired {} of principal",
            input.principal,
            retired
        );
        let identity_diff = (out.total_paid - (out.total_interest + retired)).abs();
        assert!(
            identity_diff < DUST,
            "Loan {}: total paid {} drifts from interest + retired principal",
            input.principal,
            out.total_paid
        );
    }
}

#[test]
fn test_prepayment_saves_interest() {
    let baseline = run(&loan(dec!(100_000), dec!(12), 12, None));
    for prepayment in [dec!(5_000), dec!(20_000), dec!(50_000)] {
        let out = run(&loan(dec!(100_000), dec!(12), 12, Some(prepayment)));
        assert!(
            out.ledger.len() < baseline.ledger.len()
                || out.total_interest < baseline.total_interest,
            "Prepayment {} paid {} interest vs baseline {}",
            prepayment,
            out.total_interest,
            baseline.total_interest
        );
        assert!(out.total_paid < baseline.total_paid);
    }

    // Large enough prepayments also shorten the schedule outright.
    let out = run(&loan(dec!(100_000), dec!(12), 12, Some(dec!(20_000))));
    assert_eq!(out.ledger.len(), 10);
    let out = run(&loan(dec!(100_000), dec!(12), 12, Some(dec!(50_000))));
    assert_eq!(out.ledger.len(), 6);
}

#[test]
fn test_interest_free_loan_is_exact() {
    let out = run(&loan(dec!(500_000), Decimal::ZERO, 10, None));
    assert_eq!(out.installment, dec!(50_000));
    assert_eq!(out.total_interest, Decimal::ZERO);
    assert_eq!(out.total_paid, dec!(500_000));
    assert_eq!(out.ledger.len(), 10);
    assert_eq!(out.ledger[9].remaining_balance, Decimal::ZERO);
}

#[test]
fn test_prepayment_skipped_when_nothing_outstanding() {
    // A one-month loan has no balance left after its only installment, so the
    // prepayment never fires and never inflates the totals.
    let out = run(&loan(dec!(10_000), dec!(12), 1, Some(dec!(5_000))));
    assert_eq!(out.ledger.len(), 1);
    assert_eq!(out.ledger[0].prepayment_applied, Decimal::ZERO);
    let paid_diff = (out.total_paid - dec!(10_100)).abs();
    assert!(
        paid_diff < DUST,
        "Total paid {} should be principal plus one month of interest",
        out.total_paid
    );
}

#[test]
fn test_boundary_inputs_accepted() {
    // Each bound is inclusive.
    assert!(build_amortisation(&loan(dec!(1_000_000_000_000), dec!(7), 360, None)).is_ok());
    assert!(build_amortisation(&loan(dec!(100_000), dec!(100), 12, None)).is_ok());
    assert!(build_amortisation(&loan(dec!(100_000), dec!(8), 1200, None)).is_ok());
    assert!(build_amortisation(&loan(dec!(100_000), dec!(12), 12, Some(Decimal::ZERO))).is_ok());
    assert!(build_amortisation(&loan(dec!(0.01), dec!(12), 1, None)).is_ok());
}

#[test]
fn test_rejections_by_variant() {
    let err = build_amortisation(&loan(Decimal::ZERO, dec!(12), 12, None)).unwrap_err();
    assert!(matches!(err, EmiError::InvalidAmount { .. }), "{err:?}");

    let err = build_amortisation(&loan(dec!(1_000_000_000_001), dec!(12), 12, None)).unwrap_err();
    assert!(matches!(err, EmiError::InvalidAmount { .. }), "{err:?}");

    let err = build_amortisation(&loan(dec!(100_000), dec!(-1), 12, None)).unwrap_err();
    assert!(matches!(err, EmiError::InvalidRate { .. }), "{err:?}");

    let err = build_amortisation(&loan(dec!(100_000), dec!(101), 12, None)).unwrap_err();
    assert!(matches!(err, EmiError::InvalidRate { .. }), "{err:?}");

    let err = build_amortisation(&loan(dec!(100_000), dec!(12), 0, None)).unwrap_err();
    assert!(matches!(err, EmiError::InvalidTenure { .. }), "{err:?}");

    let err = build_amortisation(&loan(dec!(100_000), dec!(12), 1201, None)).unwrap_err();
    assert!(matches!(err, EmiError::InvalidTenure { .. }), "{err:?}");

    let err =
        build_amortisation(&loan(dec!(100_000), dec!(12), 12, Some(dec!(-0.01)))).unwrap_err();
    assert!(matches!(err, EmiError::InvalidPrepayment { .. }), "{err:?}");
}

#[test]
fn test_extreme_growth_is_an_error_not_a_panic() {
    let err = build_amortisation(&loan(dec!(100_000), dec!(100), 1200, None)).unwrap_err();
    assert!(matches!(err, EmiError::CalculationError { .. }), "{err:?}");
}

#[test]
fn test_envelope_json_shape() {
    // The bindings hand this JSON to JavaScript: money must arrive as strings,
    // ordinals as numbers.
    let result = build_amortisation(&loan(dec!(100_000), dec!(12), 12, None)).unwrap();
    let json = serde_json::to_string(&result).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["methodology"], "Level-Payment (EMI) Amortisation");
    assert!(value["result"]["installment"].is_string());
    assert!(value["result"]["ledger"][0]["interest_paid"].is_string());
    assert_eq!(value["result"]["ledger"][0]["month"], 1);
    assert_eq!(value["metadata"]["precision"], "rust_decimal_128bit");
}

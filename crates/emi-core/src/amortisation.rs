//! Level-payment (EMI) amortisation schedules for fixed-rate loans.
//!
//! Builds a month-by-month repayment ledger from principal, annual percentage
//! rate, and tenure, with support for a single lump-sum prepayment that
//! shortens the schedule. All math in `rust_decimal::Decimal`.

use rust_decimal::{Decimal, MathematicalOps};
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::time::Instant;

use crate::error::EmiError;
use crate::types::{with_metadata, ComputationOutput, Money, Rate};
use crate::EmiResult;

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Largest loan amount accepted (one trillion).
const MAX_PRINCIPAL: Decimal = dec!(1_000_000_000_000);

/// Largest annual rate accepted, in percent.
const MAX_ANNUAL_RATE_PCT: Decimal = dec!(100);

/// Longest tenure accepted: 100 years of monthly installments.
const MAX_TENURE_MONTHS: u32 = 1200;

/// Annual rates above this are accepted but flagged.
const HIGH_RATE_WARN_PCT: Decimal = dec!(50);

// ---------------------------------------------------------------------------
// Input types
// ---------------------------------------------------------------------------

/// Fixed-rate loan request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortisationInput {
    /// Amount disbursed at month zero.
    pub principal: Money,
    /// Nominal annual interest rate in percent (12 = 12% p.a.).
    pub annual_rate_pct: Decimal,
    /// Number of monthly installments.
    pub tenure_months: u32,
    /// Optional one-time extra principal payment. Applied after the first
    /// installment that leaves a balance outstanding.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prepayment: Option<Money>,
}

// ---------------------------------------------------------------------------
// Output types
// ---------------------------------------------------------------------------

/// One month of the repayment ledger.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerEntry {
    /// Month ordinal, starting at 1.
    pub month: u32,
    /// Interest plus scheduled principal charged this month.
    pub installment_paid: Money,
    /// Interest portion.
    pub interest_paid: Money,
    /// Scheduled principal portion (excludes any prepayment).
    pub principal_paid: Money,
    /// Balance after the installment and any prepayment.
    pub remaining_balance: Money,
    /// Prepayment consumed this month; non-zero in at most one entry.
    pub prepayment_applied: Money,
}

/// Full amortisation result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AmortisationOutput {
    /// Level monthly installment (the EMI).
    pub installment: Money,
    /// Installments paid plus any prepayment.
    pub total_paid: Money,
    /// Sum of interest portions.
    pub total_interest: Money,
    /// Month-by-month ledger; shorter than the tenure when the loan settles early.
    pub ledger: Vec<LedgerEntry>,
}

// ---------------------------------------------------------------------------
// Public API
// ---------------------------------------------------------------------------

/// Build the month-by-month amortisation schedule for a fixed-rate loan.
pub fn build_amortisation(
    input: &AmortisationInput,
) -> EmiResult<ComputationOutput<AmortisationOutput>> {
    let start = Instant::now();
    let mut warnings: Vec<String> = Vec::new();

    validate_input(input)?;

    let prepayment = input.prepayment.unwrap_or(Decimal::ZERO);
    if prepayment > Decimal::ZERO && prepayment >= input.principal {
        warnings.push(format!(
            "Prepayment {} covers the full principal; only the balance outstanding after the first installment is consumed",
            prepayment
        ));
    }
    if input.annual_rate_pct > HIGH_RATE_WARN_PCT {
        warnings.push(format!(
            "Annual rate {}% is unusually high; check the rate is a yearly percentage",
            input.annual_rate_pct
        ));
    }

    let monthly_rate = input.annual_rate_pct / dec!(12) / dec!(100);
    let installment = compute_installment(input.principal, monthly_rate, input.tenure_months)?;

    let mut ledger = Vec::with_capacity(input.tenure_months as usize);
    let mut balance = input.principal;
    let mut total_paid = Decimal::ZERO;
    let mut total_interest = Decimal::ZERO;
    let mut prepayment_done = prepayment.is_zero();

    for month in 1..=input.tenure_months {
        let interest_paid = balance * monthly_rate;

        // Scheduled principal, clamped so the final installment never
        // overshoots and a high-interest month never turns it negative.
        let mut principal_paid = installment - interest_paid;
        if principal_paid > balance {
            principal_paid = balance;
        }
        if principal_paid < Decimal::ZERO {
            principal_paid = Decimal::ZERO;
        }

        let installment_paid = interest_paid + principal_paid;
        balance -= principal_paid;

        // The single prepayment fires in the first month that still carries a
        // balance after its installment. The amount consumed is captured here
        // so it lands on this month's ledger row.
        let mut prepayment_applied = Decimal::ZERO;
        if !prepayment_done && balance > Decimal::ZERO {
            prepayment_applied = prepayment.min(balance);
            balance -= prepayment_applied;
            total_paid += prepayment_applied;
            prepayment_done = true;
        }

        total_paid += installment_paid;
        total_interest += interest_paid;

        ledger.push(LedgerEntry {
            month,
            installment_paid,
            interest_paid,
            principal_paid,
            remaining_balance: balance,
            prepayment_applied,
        });

        if balance <= Decimal::ZERO {
            break;
        }
    }

    let output = AmortisationOutput {
        installment,
        total_paid,
        total_interest,
        ledger,
    };

    let elapsed = start.elapsed().as_micros() as u64;
    Ok(with_metadata(
        "Level-Payment (EMI) Amortisation",
        &serde_json::json!({
            "principal": input.principal.to_string(),
            "annual_rate_pct": input.annual_rate_pct.to_string(),
            "tenure_months": input.tenure_months,
            "prepayment": prepayment.to_string(),
        }),
        warnings,
        elapsed,
        output,
    ))
}

// ---------------------------------------------------------------------------
// Validation
// ---------------------------------------------------------------------------

fn validate_input(input: &AmortisationInput) -> EmiResult<()> {
    if input.principal <= Decimal::ZERO || input.principal > MAX_PRINCIPAL {
        return Err(EmiError::InvalidAmount {
            principal: input.principal,
            max: MAX_PRINCIPAL,
        });
    }
    if input.annual_rate_pct < Decimal::ZERO || input.annual_rate_pct > MAX_ANNUAL_RATE_PCT {
        return Err(EmiError::InvalidRate {
            rate_pct: input.annual_rate_pct,
        });
    }
    if input.tenure_months == 0 || input.tenure_months > MAX_TENURE_MONTHS {
        return Err(EmiError::InvalidTenure {
            months: input.tenure_months,
            max: MAX_TENURE_MONTHS,
        });
    }
    if let Some(prepayment) = input.prepayment {
        if prepayment < Decimal::ZERO {
            return Err(EmiError::InvalidPrepayment { amount: prepayment });
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Internal helpers
// ---------------------------------------------------------------------------

/// Level monthly payment: P * r / (1 - (1+r)^-n), straight-line when r = 0.
///
/// Dividing first keeps the intermediate values small; `(1+r)^n` itself can
/// still exceed Decimal's range at extreme rate/tenure combinations, which
/// surfaces as a `CalculationError` rather than a panic.
fn compute_installment(principal: Money, monthly_rate: Rate, months: u32) -> EmiResult<Money> {
    if months == 0 {
        return Err(EmiError::CalculationError {
            reason: "cannot amortise over zero months".into(),
        });
    }
    if monthly_rate.is_zero() {
        return Ok(principal / Decimal::from(months));
    }

    let growth = (Decimal::ONE + monthly_rate)
        .checked_powu(u64::from(months))
        .ok_or_else(|| EmiError::CalculationError {
            reason: format!("(1 + {})^{} exceeds decimal range", monthly_rate, months),
        })?;

    let denom = Decimal::ONE - Decimal::ONE / growth;
    if denom <= Decimal::ZERO {
        return Err(EmiError::CalculationError {
            reason: format!(
                "annuity denominator collapsed to {} at monthly rate {}",
                denom, monthly_rate
            ),
        });
    }

    Ok(principal * monthly_rate / denom)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

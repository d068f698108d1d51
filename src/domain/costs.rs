// src/domain/costs.rs

use crate::config::{CostAssumptions, CostPolicy};
use crate::domain::brief::{MoneyLine, MoneyRange, MoneyRangeLine};
use crate::errors::ServerError;

/// Everything the estimator produces for one listing.
#[derive(Debug, Clone)]
pub struct CostEstimate {
    pub fixed: Vec<MoneyLine>,
    pub variable: Vec<MoneyRangeLine>,
    /// Fixed lines plus one midpoint line per variable band.
    pub combined: Vec<MoneyLine>,
    pub total: MoneyRange,
}

/// Project the monthly cost of owning at `price` under `policy`.
///
/// All dollar arithmetic truncates toward zero. Truncation, not rounding,
/// is the convention at every step so repeated runs agree to the dollar.
///
/// Preconditions: `price > 0` and `loan_term_years > 0`. Violations are
/// contract errors and surface immediately; nothing is clamped.
pub fn estimate_monthly_costs(price: i64, policy: &CostPolicy) -> Result<CostEstimate, ServerError> {
    if price <= 0 {
        return Err(ServerError::BadRequest(format!(
            "price must be positive, got {price}"
        )));
    }
    if policy.assumptions.loan_term_years == 0 {
        return Err(ServerError::BadRequest(
            "loan term must be at least one year".to_string(),
        ));
    }

    let mortgage = monthly_mortgage_payment(price, &policy.assumptions);
    let taxes = (price as f64 * policy.annual_tax_rate / 12.0) as i64;

    let fixed = vec![
        MoneyLine {
            label: "Mortgage".to_string(),
            monthly: mortgage,
        },
        MoneyLine {
            label: "Property taxes".to_string(),
            monthly: taxes,
        },
        // No HOA feed yet; the line stays visible at $0 so clients don't
        // mistake absence for "no HOA".
        MoneyLine {
            label: "HOA".to_string(),
            monthly: policy.monthly_hoa,
        },
    ];

    // Flat bands from policy, not derived from price. See config.rs.
    let variable = vec![
        MoneyRangeLine {
            label: "Home insurance".to_string(),
            low: policy.insurance_monthly.low,
            high: policy.insurance_monthly.high,
        },
        MoneyRangeLine {
            label: "Utilities".to_string(),
            low: policy.utilities_monthly.low,
            high: policy.utilities_monthly.high,
        },
    ];

    let mut combined = fixed.clone();
    for line in &variable {
        combined.push(MoneyLine {
            label: line.label.clone(),
            monthly: (line.low + line.high) / 2,
        });
    }

    let fixed_sum: i64 = fixed.iter().map(|l| l.monthly).sum();
    let total = MoneyRange {
        low: fixed_sum + variable.iter().map(|l| l.low).sum::<i64>(),
        high: fixed_sum + variable.iter().map(|l| l.high).sum::<i64>(),
    };

    Ok(CostEstimate {
        fixed,
        variable,
        combined,
        total,
    })
}

/// Standard fixed-rate level-payment amortization, truncated to whole
/// dollars. A zero-rate policy falls back to a straight principal split.
fn monthly_mortgage_payment(price: i64, assumptions: &CostAssumptions) -> i64 {
    let loan_amount = (price as f64 * (1.0 - assumptions.down_payment_percent / 100.0)) as i64;
    let monthly_rate = (assumptions.interest_rate_percent / 100.0) / 12.0;
    let n = i64::from(assumptions.loan_term_years) * 12;

    if monthly_rate <= 0.0 {
        return loan_amount / n;
    }

    let growth = (1.0 + monthly_rate).powi(n as i32);
    (loan_amount as f64 * monthly_rate * growth / (growth - 1.0)) as i64
}

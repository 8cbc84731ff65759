// src/calculators/affordability.rs
use crate::calculators::amortization::{monthly_rate, principal_for_payment, THIRTY_YEARS_MONTHS};

/// Share of gross monthly income that may go to housing.
pub const HOUSING_RATIO: f64 = 0.28;

/// Monthly rate assumed when no usable rate is given.
pub const FALLBACK_MONTHLY_RATE: f64 = 0.005;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordabilityInput {
    pub monthly_income: f64,
    pub monthly_debts: f64,
    pub down_payment: f64,
    /// Annual rate in percent; `None`, zero or NaN fall back to 0.5%/month.
    pub interest_rate: Option<f64>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AffordabilityResult {
    pub max_home_price: f64,
    pub max_monthly_payment: f64,
    pub down_payment: f64,
}

pub fn affordability(input: &AffordabilityInput) -> AffordabilityResult {
    let rate = input
        .interest_rate
        .map(monthly_rate)
        .filter(|r| *r != 0.0 && !r.is_nan())
        .unwrap_or(FALLBACK_MONTHLY_RATE);

    let max_monthly_payment = input.monthly_income * HOUSING_RATIO - input.monthly_debts;
    let max_loan = principal_for_payment(max_monthly_payment, rate, THIRTY_YEARS_MONTHS);

    AffordabilityResult {
        max_home_price: max_loan + input.down_payment,
        max_monthly_payment,
        down_payment: input.down_payment,
    }
}

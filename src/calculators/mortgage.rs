// src/calculators/mortgage.rs
use crate::calculators::amortization::{monthly_payment, monthly_rate};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageInput {
    pub home_price: f64,
    pub down_payment: f64,
    /// Annual rate in percent.
    pub interest_rate: f64,
    pub term_years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MortgageResult {
    pub monthly_payment: f64,
    pub principal: f64,
    pub total_interest: f64,
    pub total_payment: f64,
}

pub fn mortgage(input: &MortgageInput) -> MortgageResult {
    let principal = input.home_price - input.down_payment;
    let months = f64::from(input.term_years) * 12.0;
    let payment = monthly_payment(principal, monthly_rate(input.interest_rate), months);
    let total_payment = payment * months;

    MortgageResult {
        monthly_payment: payment,
        principal,
        total_interest: total_payment - principal,
        total_payment,
    }
}

// src/calculators/rent_vs_buy.rs
use crate::calculators::amortization::{monthly_payment, monthly_rate, THIRTY_YEARS_MONTHS};

/// Yearly taxes and upkeep as a share of the home price.
pub const OWNERSHIP_COST_RATIO: f64 = 0.01;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentVsBuyInput {
    pub monthly_rent: f64,
    pub home_price: f64,
    pub down_payment: f64,
    /// Annual rate in percent.
    pub interest_rate: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RentVsBuyResult {
    pub monthly_mortgage: f64,
    pub annual_rent_cost: f64,
    pub annual_ownership_cost: f64,
    pub break_even_years: f64,
}

pub fn rent_vs_buy(input: &RentVsBuyInput) -> RentVsBuyResult {
    let monthly_mortgage = monthly_payment(
        input.home_price - input.down_payment,
        monthly_rate(input.interest_rate),
        THIRTY_YEARS_MONTHS,
    );
    let annual_ownership_cost = monthly_mortgage * 12.0 + input.home_price * OWNERSHIP_COST_RATIO;
    let annual_rent_cost = input.monthly_rent * 12.0;
    let monthly_difference = (annual_rent_cost - annual_ownership_cost) / 12.0;

    RentVsBuyResult {
        monthly_mortgage,
        annual_rent_cost,
        annual_ownership_cost,
        break_even_years: (input.down_payment / monthly_difference).abs(),
    }
}

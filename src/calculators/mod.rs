// src/calculators/mod.rs
//
// Pure home-finance calculators. No validation is performed: NaN and
// infinities flow through exactly as the arithmetic produces them.

pub mod affordability;
pub mod amortization;
pub mod closing_cost;
pub mod form;
pub mod mortgage;
pub mod refinance;
pub mod rent_vs_buy;

pub use affordability::{affordability, AffordabilityInput, AffordabilityResult};
pub use closing_cost::{closing_costs, ClosingCostInput, ClosingCostResult};
pub use mortgage::{mortgage, MortgageInput, MortgageResult};
pub use refinance::{refinance, RefinanceInput, RefinanceResult};
pub use rent_vs_buy::{rent_vs_buy, RentVsBuyInput, RentVsBuyResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Calculator {
    Mortgage,
    Affordability,
    Refinance,
    RentVsBuy,
    ClosingCosts,
}

impl Calculator {
    pub const ALL: [Calculator; 5] = [
        Calculator::Mortgage,
        Calculator::Affordability,
        Calculator::Refinance,
        Calculator::RentVsBuy,
        Calculator::ClosingCosts,
    ];

    pub fn slug(self) -> &'static str {
        match self {
            Calculator::Mortgage => "mortgage",
            Calculator::Affordability => "affordability",
            Calculator::Refinance => "refinance",
            Calculator::RentVsBuy => "rent-vs-buy",
            Calculator::ClosingCosts => "closing-costs",
        }
    }

    pub fn from_slug(slug: &str) -> Option<Self> {
        Calculator::ALL.into_iter().find(|c| c.slug() == slug)
    }

    pub fn title(self) -> &'static str {
        match self {
            Calculator::Mortgage => "Mortgage Calculator",
            Calculator::Affordability => "Affordability Calculator",
            Calculator::Refinance => "Refinance Calculator",
            Calculator::RentVsBuy => "Rent vs Buy Calculator",
            Calculator::ClosingCosts => "Closing Cost Calculator",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Calculator::Mortgage => "Estimate your monthly payment and total interest.",
            Calculator::Affordability => "See how much home your income supports.",
            Calculator::Refinance => "Compare your current loan with a new rate.",
            Calculator::RentVsBuy => "Find out when owning beats renting.",
            Calculator::ClosingCosts => "Estimate the fees due at closing.",
        }
    }
}

/// Reads a form number, tolerating thousands separators, `$` and `%`.
pub fn parse_number(raw: &str) -> Option<f64> {
    let cleaned: String = raw
        .chars()
        .filter(|c| !matches!(c, ',' | '$' | '%' | ' '))
        .collect();
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse().ok()
}

#[cfg(test)]
pub(crate) fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected} ± {tolerance}, got {actual}"
    );
}

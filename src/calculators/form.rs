// src/calculators/form.rs
//
// Calculator inputs read from submitted form fields. A calculator only runs
// once every required field is present and numeric; optional fields fall
// back to their defaults.

use std::collections::HashMap;

use crate::calculators::{
    affordability, closing_costs, mortgage, parse_number, refinance, rent_vs_buy,
    AffordabilityInput, AffordabilityResult, Calculator, ClosingCostInput, ClosingCostResult,
    MortgageInput, MortgageResult, RefinanceInput, RefinanceResult, RentVsBuyInput,
    RentVsBuyResult,
};

/// Default loan term offered by the mortgage form.
pub const DEFAULT_TERM_YEARS: u32 = 30;

pub type Params = HashMap<String, String>;

fn number(params: &Params, key: &str) -> Option<f64> {
    params.get(key).and_then(|v| parse_number(v))
}

fn years(params: &Params, key: &str) -> Option<u32> {
    params.get(key).and_then(|v| v.trim().parse().ok())
}

impl MortgageInput {
    pub fn from_params(params: &Params) -> Option<Self> {
        Some(Self {
            home_price: number(params, "homePrice")?,
            down_payment: number(params, "downPayment")?,
            interest_rate: number(params, "interestRate")?,
            term_years: years(params, "loanTerm").unwrap_or(DEFAULT_TERM_YEARS),
        })
    }
}

impl AffordabilityInput {
    pub fn from_params(params: &Params) -> Option<Self> {
        Some(Self {
            monthly_income: number(params, "monthlyIncome")?,
            monthly_debts: number(params, "monthlyDebts").unwrap_or(0.0),
            down_payment: number(params, "downPayment")?,
            interest_rate: number(params, "interestRate"),
        })
    }
}

impl RefinanceInput {
    pub fn from_params(params: &Params) -> Option<Self> {
        Some(Self {
            current_balance: number(params, "currentBalance")?,
            current_rate: number(params, "currentRate")?,
            new_rate: number(params, "newRate")?,
            years_remaining: years(params, "remainingTerm")?,
            closing_costs: number(params, "closingCosts").unwrap_or(0.0),
        })
    }
}

impl RentVsBuyInput {
    pub fn from_params(params: &Params) -> Option<Self> {
        Some(Self {
            monthly_rent: number(params, "monthlyRent")?,
            home_price: number(params, "homePrice")?,
            down_payment: number(params, "downPayment")?,
            interest_rate: number(params, "interestRate")?,
        })
    }
}

impl ClosingCostInput {
    pub fn from_params(params: &Params) -> Option<Self> {
        Some(Self {
            home_price: number(params, "homePrice")?,
            loan_amount: number(params, "loanAmount")?,
        })
    }
}

/// A computed breakdown from one of the calculators.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    Mortgage(MortgageResult),
    Affordability(AffordabilityResult),
    Refinance(RefinanceResult),
    RentVsBuy(RentVsBuyResult),
    ClosingCosts(ClosingCostResult),
}

/// Runs `calc` when the form carries all of its required inputs.
pub fn evaluate(calc: Calculator, params: &Params) -> Option<Outcome> {
    match calc {
        Calculator::Mortgage => {
            MortgageInput::from_params(params).map(|i| Outcome::Mortgage(mortgage(&i)))
        }
        Calculator::Affordability => AffordabilityInput::from_params(params)
            .map(|i| Outcome::Affordability(affordability(&i))),
        Calculator::Refinance => {
            RefinanceInput::from_params(params).map(|i| Outcome::Refinance(refinance(&i)))
        }
        Calculator::RentVsBuy => {
            RentVsBuyInput::from_params(params).map(|i| Outcome::RentVsBuy(rent_vs_buy(&i)))
        }
        Calculator::ClosingCosts => ClosingCostInput::from_params(params)
            .map(|i| Outcome::ClosingCosts(closing_costs(&i))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn mortgage_defaults_to_thirty_years() {
        let input = MortgageInput::from_params(&params(&[
            ("homePrice", "500,000"),
            ("downPayment", "100000"),
            ("interestRate", "6"),
        ]))
        .unwrap();
        assert_eq!(input.term_years, 30);
        assert_eq!(input.home_price, 500_000.0);
    }

    #[test]
    fn missing_required_field_means_no_result() {
        assert!(ClosingCostInput::from_params(&params(&[("homePrice", "400000")])).is_none());
        assert!(RefinanceInput::from_params(&params(&[])).is_none());
    }

    #[test]
    fn optional_fields_default() {
        let a = AffordabilityInput::from_params(&params(&[
            ("monthlyIncome", "8000"),
            ("downPayment", "50000"),
        ]))
        .unwrap();
        assert_eq!(a.monthly_debts, 0.0);
        assert_eq!(a.interest_rate, None);
    }

    #[test]
    fn evaluate_dispatches_by_calculator() {
        let p = params(&[("homePrice", "400000"), ("loanAmount", "320000")]);
        match evaluate(Calculator::ClosingCosts, &p) {
            Some(Outcome::ClosingCosts(r)) => assert_eq!(r.appraisal, 400.0),
            other => panic!("unexpected {other:?}"),
        }
        assert!(evaluate(Calculator::Mortgage, &p).is_none());
    }

    #[test]
    fn huge_terms_compute_instead_of_overflowing() {
        let p = params(&[
            ("homePrice", "500000"),
            ("downPayment", "100000"),
            ("interestRate", "6"),
            ("loanTerm", "400000000"),
        ]);
        match evaluate(Calculator::Mortgage, &p) {
            Some(Outcome::Mortgage(r)) => assert!(r.monthly_payment.is_nan()),
            other => panic!("unexpected {other:?}"),
        }

        let p = params(&[
            ("currentBalance", "300000"),
            ("currentRate", "7.5"),
            ("newRate", "6"),
            ("remainingTerm", "4000000000"),
        ]);
        assert!(matches!(evaluate(Calculator::Refinance, &p), Some(Outcome::Refinance(_))));
    }
}

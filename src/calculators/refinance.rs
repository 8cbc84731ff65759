// src/calculators/refinance.rs
use crate::calculators::amortization::{monthly_payment, monthly_rate, THIRTY_YEARS_MONTHS};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinanceInput {
    pub current_balance: f64,
    /// Annual rate in percent.
    pub current_rate: f64,
    /// Annual rate in percent.
    pub new_rate: f64,
    pub years_remaining: u32,
    pub closing_costs: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RefinanceResult {
    pub current_payment: f64,
    pub new_payment: f64,
    pub monthly_savings: f64,
    /// Months of savings needed to recover the closing costs.
    pub break_even_months: f64,
    pub total_savings: f64,
}

/// The new loan always runs a full 30 years, regardless of the time left on
/// the current one.
pub fn refinance(input: &RefinanceInput) -> RefinanceResult {
    let remaining_months = f64::from(input.years_remaining) * 12.0;

    let current_payment = monthly_payment(
        input.current_balance,
        monthly_rate(input.current_rate),
        remaining_months,
    );
    let new_payment = monthly_payment(
        input.current_balance,
        monthly_rate(input.new_rate),
        THIRTY_YEARS_MONTHS,
    );
    let monthly_savings = current_payment - new_payment;

    RefinanceResult {
        current_payment,
        new_payment,
        monthly_savings,
        break_even_months: input.closing_costs / monthly_savings,
        total_savings: monthly_savings * remaining_months - input.closing_costs,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calculators::assert_close;

    fn sample() -> RefinanceInput {
        RefinanceInput {
            current_balance: 300_000.0,
            current_rate: 7.5,
            new_rate: 6.0,
            years_remaining: 25,
            closing_costs: 5_000.0,
        }
    }

    #[test]
    fn lower_rate_saves_monthly() {
        let r = refinance(&sample());
        assert_close(r.current_payment, 2216.97, 0.01);
        assert_close(r.new_payment, 1798.65, 0.01);
        assert_close(r.monthly_savings, 418.32, 0.01);
        assert_close(r.break_even_months, 11.95, 0.01);
        assert_close(r.total_savings, 120_496.59, 0.01);
    }

    #[test]
    fn no_savings_means_infinite_break_even() {
        let r = refinance(&RefinanceInput {
            current_rate: 6.0,
            years_remaining: 30,
            ..sample()
        });
        assert_eq!(r.monthly_savings, 0.0);
        assert!(r.break_even_months.is_infinite());
    }
}

// src/calculators/amortization.rs

/// Months in a 30-year loan, the fixed term used where no term is asked for.
pub const THIRTY_YEARS_MONTHS: f64 = 360.0;

/// Annual percentage (6.5) to monthly decimal rate (0.005416…).
pub fn monthly_rate(annual_pct: f64) -> f64 {
    annual_pct / 100.0 / 12.0
}

/// Level payment for `principal` over `months` at monthly rate `rate`:
/// `P·r·(1+r)^n / ((1+r)^n − 1)`, or `P / n` when `r` is zero.
pub fn monthly_payment(principal: f64, rate: f64, months: f64) -> f64 {
    if rate == 0.0 {
        return principal / months;
    }
    let growth = (1.0 + rate).powf(months);
    principal * rate * growth / (growth - 1.0)
}

/// Largest principal that `payment` per month retires over `months`.
pub fn principal_for_payment(payment: f64, rate: f64, months: f64) -> f64 {
    if rate == 0.0 {
        return payment * months;
    }
    let growth = (1.0 + rate).powf(months);
    payment * (growth - 1.0) / (rate * growth)
}

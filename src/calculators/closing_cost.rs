// src/calculators/closing_cost.rs

pub const ORIGINATION_RATE: f64 = 0.01;
pub const TITLE_INSURANCE_RATE: f64 = 0.005;
pub const INSURANCE_RATE: f64 = 0.0035;
pub const PROPERTY_TAX_RATE: f64 = 0.012;
pub const PREPAID_MONTHS: f64 = 6.0;
pub const APPRAISAL_FEE: f64 = 400.0;
pub const INSPECTION_FEE: f64 = 500.0;
pub const RECORDING_FEE: f64 = 200.0;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosingCostInput {
    pub home_price: f64,
    pub loan_amount: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClosingCostResult {
    pub origination_fee: f64,
    pub appraisal: f64,
    pub inspection: f64,
    pub title_insurance: f64,
    pub recording_fee: f64,
    pub prepaid_insurance: f64,
    pub prepaid_taxes: f64,
    pub total: f64,
}

pub fn closing_costs(input: &ClosingCostInput) -> ClosingCostResult {
    let origination_fee = input.loan_amount * ORIGINATION_RATE;
    let title_insurance = input.home_price * TITLE_INSURANCE_RATE;
    let prepaid_insurance = input.home_price * INSURANCE_RATE / 12.0 * PREPAID_MONTHS;
    let prepaid_taxes = input.home_price * PROPERTY_TAX_RATE / 12.0 * PREPAID_MONTHS;

    let total = origination_fee
        + APPRAISAL_FEE
        + INSPECTION_FEE
        + title_insurance
        + RECORDING_FEE
        + prepaid_insurance
        + prepaid_taxes;

    ClosingCostResult {
        origination_fee,
        appraisal: APPRAISAL_FEE,
        inspection: INSPECTION_FEE,
        title_insurance,
        recording_fee: RECORDING_FEE,
        prepaid_insurance,
        prepaid_taxes,
        total,
    }
}

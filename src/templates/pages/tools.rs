// templates/pages/tools.rs
use maud::{html, Markup};

use crate::calculators::form::{Outcome, Params};
use crate::calculators::Calculator;
use crate::templates::components::format::{currency, currency_cents};
use crate::templates::layouts::{site_layout, PageMeta};

struct Field {
    name: &'static str,
    label: &'static str,
    placeholder: &'static str,
    required: bool,
}

const fn field(name: &'static str, label: &'static str, placeholder: &'static str) -> Field {
    Field {
        name,
        label,
        placeholder,
        required: true,
    }
}

const fn optional(name: &'static str, label: &'static str, placeholder: &'static str) -> Field {
    Field {
        name,
        label,
        placeholder,
        required: false,
    }
}

fn fields(calc: Calculator) -> &'static [Field] {
    static MORTGAGE: [Field; 4] = [
        field("homePrice", "Home price ($)", "500,000"),
        field("downPayment", "Down payment ($)", "100,000"),
        field("interestRate", "Interest rate (%)", "6.5"),
        optional("loanTerm", "Loan term (years)", "30"),
    ];
    static AFFORDABILITY: [Field; 4] = [
        field("monthlyIncome", "Gross monthly income ($)", "8,000"),
        optional("monthlyDebts", "Monthly debts ($)", "500"),
        field("downPayment", "Down payment ($)", "50,000"),
        optional("interestRate", "Interest rate (%)", "6.5"),
    ];
    static REFINANCE: [Field; 5] = [
        field("currentBalance", "Current loan balance ($)", "300,000"),
        field("currentRate", "Current rate (%)", "7.5"),
        field("newRate", "New rate (%)", "6.0"),
        field("remainingTerm", "Years remaining", "25"),
        optional("closingCosts", "Closing costs ($)", "5,000"),
    ];
    static RENT_VS_BUY: [Field; 4] = [
        field("monthlyRent", "Monthly rent ($)", "2,000"),
        field("homePrice", "Home price ($)", "400,000"),
        field("downPayment", "Down payment ($)", "80,000"),
        field("interestRate", "Interest rate (%)", "6.5"),
    ];
    static CLOSING_COSTS: [Field; 2] = [
        field("homePrice", "Home price ($)", "400,000"),
        field("loanAmount", "Loan amount ($)", "320,000"),
    ];

    match calc {
        Calculator::Mortgage => &MORTGAGE,
        Calculator::Affordability => &AFFORDABILITY,
        Calculator::Refinance => &REFINANCE,
        Calculator::RentVsBuy => &RENT_VS_BUY,
        Calculator::ClosingCosts => &CLOSING_COSTS,
    }
}

pub fn tools_page() -> Markup {
    site_layout(
        &PageMeta {
            title: "Home Buying Tools | Real Estate Listings",
            description: Some("Free mortgage, affordability, refinance and closing cost calculators."),
            canonical: Some("/tools"),
            image: None,
        },
        html! {
            h1 { "Tools & Calculators" }
            div class="grid" {
                @for calc in Calculator::ALL {
                    a class="card" href={ "/tools/" (calc.slug()) } {
                        h2 { (calc.title()) }
                        p { (calc.summary()) }
                    }
                }
            }
        },
    )
}

/// A calculator form, echoing submitted values, followed by the result
/// breakdown when one was computed.
pub fn calculator_page(calc: Calculator, params: &Params, outcome: Option<&Outcome>) -> Markup {
    let title = format!("{} | Real Estate Listings", calc.title());
    let canonical = format!("/tools/{}", calc.slug());

    site_layout(
        &PageMeta {
            title: &title,
            description: Some(calc.summary()),
            canonical: Some(&canonical),
            image: None,
        },
        html! {
            h1 { (calc.title()) }
            p { (calc.summary()) }

            form class="calculator" method="get" action=(canonical) {
                @for f in fields(calc) {
                    label {
                        (f.label)
                        input type="text" inputmode="decimal" name=(f.name)
                            placeholder=(f.placeholder)
                            value=(params.get(f.name).map(String::as_str).unwrap_or_default())
                            required[f.required];
                    }
                }
                button class="btn" type="submit" { "Calculate" }
            }

            @if let Some(outcome) = outcome {
                section class="results" {
                    h2 { "Results" }
                    dl {
                        @for (label, value) in outcome_rows(outcome) {
                            dt { (label) }
                            dd { (value) }
                        }
                    }
                }
            }

            p class="disclaimer" {
                "Estimates only. Actual figures depend on your lender, taxes and insurance."
            }
        },
    )
}

fn months(value: f64) -> String {
    if value.is_finite() {
        format!("{} months", value.ceil())
    } else {
        "Never".to_string()
    }
}

fn years(value: f64) -> String {
    if value.is_finite() {
        format!("{value:.1} years")
    } else {
        "Never".to_string()
    }
}

fn outcome_rows(outcome: &Outcome) -> Vec<(&'static str, String)> {
    match outcome {
        Outcome::Mortgage(r) => vec![
            ("Monthly payment", currency_cents(r.monthly_payment)),
            ("Loan amount", currency(r.principal)),
            ("Total interest", currency(r.total_interest)),
            ("Total of payments", currency(r.total_payment)),
        ],
        Outcome::Affordability(r) => vec![
            ("Maximum home price", currency(r.max_home_price)),
            ("Maximum monthly payment", currency_cents(r.max_monthly_payment)),
            ("Down payment", currency(r.down_payment)),
        ],
        Outcome::Refinance(r) => vec![
            ("Current payment", currency_cents(r.current_payment)),
            ("New payment", currency_cents(r.new_payment)),
            ("Monthly savings", currency_cents(r.monthly_savings)),
            ("Break-even", months(r.break_even_months)),
            ("Total savings", currency(r.total_savings)),
        ],
        Outcome::RentVsBuy(r) => vec![
            ("Monthly mortgage", currency_cents(r.monthly_mortgage)),
            ("Annual rent cost", currency(r.annual_rent_cost)),
            ("Annual ownership cost", currency(r.annual_ownership_cost)),
            ("Break-even", years(r.break_even_years)),
        ],
        Outcome::ClosingCosts(r) => vec![
            ("Loan origination fee", currency(r.origination_fee)),
            ("Appraisal", currency(r.appraisal)),
            ("Home inspection", currency(r.inspection)),
            ("Title insurance", currency(r.title_insurance)),
            ("Recording fee", currency(r.recording_fee)),
            ("Prepaid insurance", currency(r.prepaid_insurance)),
            ("Prepaid property taxes", currency(r.prepaid_taxes)),
            ("Total closing costs", currency(r.total)),
        ],
    }
}

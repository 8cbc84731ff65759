use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app};
use crate::db::documents::SeedFile;

#[test]
fn tools_index_links_every_calculator() {
    let app = test_app(SeedFile::default());
    let body = body_string(handle(get("/tools"), &app).unwrap());
    for slug in ["mortgage", "affordability", "refinance", "rent-vs-buy", "closing-costs"] {
        assert!(body.contains(&format!("/tools/{slug}")), "missing {slug}");
    }
}

#[test]
fn blank_calculator_shows_only_the_form() {
    let app = test_app(SeedFile::default());
    let body = body_string(handle(get("/tools/mortgage"), &app).unwrap());
    assert!(body.contains("Mortgage Calculator"));
    assert!(!body.contains("Results"));
}

#[test]
fn mortgage_results_are_rendered() {
    let app = test_app(SeedFile::default());
    let body = body_string(
        handle(
            get("/tools/mortgage?homePrice=500%2C000&downPayment=100000&interestRate=6&loanTerm=30"),
            &app,
        )
        .unwrap(),
    );
    assert!(body.contains("Results"));
    assert!(body.contains("$2,398.20"));
    assert!(body.contains("$400,000"));
    assert!(body.contains(r#"value="500,000""#), "submitted value not echoed");
}

#[test]
fn closing_costs_total() {
    let app = test_app(SeedFile::default());
    let body = body_string(
        handle(get("/tools/closing-costs?homePrice=400000&loanAmount=320000"), &app).unwrap(),
    );
    assert!(body.contains("$3,200"));
    assert!(body.contains("$9,400"));
}

#[test]
fn unknown_calculator_is_not_found() {
    let app = test_app(SeedFile::default());
    let err = handle(get("/tools/tax-estimator"), &app).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

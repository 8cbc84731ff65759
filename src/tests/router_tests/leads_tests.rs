use crate::db::documents::SeedFile;
use crate::db::leads::list_leads;
use crate::router::handle;
use crate::tests::utils::{body_string, get, test_app, ADMIN_TOKEN};
use astra::Body;
use http::{Method, Request};

fn post_form(body: &'static str) -> astra::Request {
    Request::builder()
        .method(Method::POST)
        .uri("/leads")
        .header("Content-Type", "application/x-www-form-urlencoded")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn export_request(token: Option<&str>) -> astra::Request {
    let mut builder = Request::builder().method(Method::GET).uri("/admin/leads.xlsx");
    if let Some(token) = token {
        builder = builder.header("Authorization", format!("Bearer {token}"));
    }
    builder.body(Body::empty()).unwrap()
}

#[test]
fn valid_lead_is_stored_and_acknowledged() {
    let app = test_app(SeedFile::default());

    let resp = handle(
        post_form("kind=quick-contact&name=Sam+Rivera&email=sam%40example.com&message=Hi"),
        &app,
    )
    .expect("Handler failed");
    assert_eq!(resp.status(), 200);
    assert!(body_string(resp).contains("Thank you, Sam Rivera!"));

    let leads = list_leads(&app.db).unwrap();
    assert_eq!(leads.len(), 1);
    assert_eq!(leads[0].email, "sam@example.com");
    assert_eq!(leads[0].message.as_deref(), Some("Hi"));
}

#[test]
fn invalid_lead_is_a_bad_request() {
    let app = test_app(SeedFile::default());

    let err = handle(post_form("kind=quick-contact&name=Sam&email=nope"), &app).unwrap_err();
    assert_eq!(err.status_code(), 400);

    let err = handle(post_form("kind=carrier-pigeon&email=a%40b.co"), &app).unwrap_err();
    assert_eq!(err.status_code(), 400);

    assert!(list_leads(&app.db).unwrap().is_empty());
}

#[test]
fn lead_export_requires_the_admin_token() {
    let app = test_app(SeedFile::default());
    handle(post_form("kind=newsletter&email=news%40example.com"), &app).unwrap();

    let err = handle(export_request(None), &app).unwrap_err();
    assert_eq!(err.status_code(), 401);

    let err = handle(export_request(Some("wrong")), &app).unwrap_err();
    assert_eq!(err.status_code(), 401);

    let resp = handle(export_request(Some(ADMIN_TOKEN)), &app).unwrap();
    assert_eq!(resp.status(), 200);
    assert_eq!(
        resp.headers()["Content-Type"],
        "application/vnd.openxmlformats-officedocument.spreadsheetml.sheet"
    );
}

#[test]
fn lead_form_only_accepts_post() {
    let app = test_app(SeedFile::default());
    let err = handle(get("/leads"), &app).unwrap_err();
    assert_eq!(err.status_code(), 404);
}

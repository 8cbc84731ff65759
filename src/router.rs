use std::collections::HashMap;
use std::io::Read;

use astra::Request;
use chrono::Utc;
use tracing::{debug, info, warn};

use crate::app::AppContext;
use crate::calculators::form::evaluate;
use crate::calculators::Calculator;
use crate::content::PropertyFilters;
use crate::db::leads::{list_leads, save_lead};
use crate::errors::ServerError;
use crate::leads::Lead;
use crate::responses::{html_response, xlsx_response, ResultResp};
use crate::spreadsheets::leads_workbook;
use crate::templates::pages;

/// Number of featured items on the home page.
pub const FEATURED_LIMIT: usize = 3;

/// Largest accepted form body.
const MAX_FORM_BYTES: u64 = 64 * 1024;

pub fn handle(req: Request, app: &AppContext) -> ResultResp {
    let method = req.method().as_str().to_string();
    let path = req.uri().path().to_string();
    let query = req.uri().query().unwrap_or_default().to_string();

    debug!(%method, %path, "request");

    let segments: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();

    match (method.as_str(), segments.as_slice()) {
        ("GET", []) => home(app),

        ("GET", ["properties"]) => properties(app, &query),
        ("GET", ["properties", slug]) => property_detail(app, slug),

        ("GET", ["blog"]) => html_response(pages::blog_list_page(&app.content.list_blogs())),
        ("GET", ["blog", slug]) => blog_post(app, slug),

        ("GET", ["tools"]) => html_response(pages::tools_page()),
        ("GET", ["tools", slug]) => calculator(slug, &query),

        ("POST", ["leads"]) => submit_lead(req, app),
        ("GET", ["admin", "leads.xlsx"]) => export_leads(&req, app),

        _ => Err(ServerError::NotFound),
    }
}

fn home(app: &AppContext) -> ResultResp {
    let featured = app.content.list_featured_properties(FEATURED_LIMIT);
    let posts = app.content.list_featured_blogs(FEATURED_LIMIT);
    html_response(pages::home_page(&featured, &posts))
}

fn properties(app: &AppContext, query: &str) -> ResultResp {
    let pairs = parse_pairs(query);
    let filters = PropertyFilters::from_pairs(pairs.iter().map(|(k, v)| (k.as_str(), v.as_str())));
    let listings = app.content.list_properties(&filters);

    let canonical_query: String = url::form_urlencoded::Serializer::new(String::new())
        .extend_pairs(filters.canonical_pairs())
        .finish();
    let canonical = if canonical_query.is_empty() {
        app.url_for("/properties")
    } else {
        app.url_for(&format!("/properties?{canonical_query}"))
    };

    html_response(pages::properties_page(&filters, &listings, &canonical))
}

fn property_detail(app: &AppContext, slug: &str) -> ResultResp {
    let property = app
        .content
        .get_property_by_slug(slug)
        .ok_or(ServerError::NotFound)?;
    let canonical = app.url_for(&format!("/properties/{}", property.slug));
    html_response(pages::property_detail_page(&property, &canonical))
}

fn blog_post(app: &AppContext, slug: &str) -> ResultResp {
    let post = app
        .content
        .get_blog_by_slug(slug)
        .ok_or(ServerError::NotFound)?;
    let canonical = app.url_for(&format!("/blog/{}", post.slug));
    html_response(pages::blog_post_page(&post, &canonical))
}

fn calculator(slug: &str, query: &str) -> ResultResp {
    let calc = Calculator::from_slug(slug).ok_or(ServerError::NotFound)?;
    let params: HashMap<String, String> = parse_pairs(query).into_iter().collect();
    let outcome = evaluate(calc, &params);
    html_response(pages::calculator_page(calc, &params, outcome.as_ref()))
}

fn submit_lead(req: Request, app: &AppContext) -> ResultResp {
    let mut body = Vec::new();
    req.into_body()
        .reader()
        .take(MAX_FORM_BYTES + 1)
        .read_to_end(&mut body)
        .map_err(|e| ServerError::BadRequest(format!("unreadable form body: {e}")))?;
    if body.len() as u64 > MAX_FORM_BYTES {
        return Err(ServerError::BadRequest("form body too large".to_string()));
    }

    let mut lead = Lead::from_form(&body, Utc::now())?;
    let id = save_lead(&app.db, &lead)?;
    lead.id = Some(id);

    info!(id, kind = %lead.kind, "lead captured");
    html_response(pages::lead_thanks_page(&lead))
}

fn export_leads(req: &Request, app: &AppContext) -> ResultResp {
    // Export is off entirely unless a token is configured.
    let expected = app.admin_token.as_deref().ok_or(ServerError::NotFound)?;

    let presented = req
        .headers()
        .get("Authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim);

    match presented {
        Some(token) if tokens_match(token, expected) => {}
        Some(_) => {
            warn!("lead export refused: bad token");
            return Err(ServerError::Unauthorized("invalid token".to_string()));
        }
        None => return Err(ServerError::Unauthorized("bearer token required".to_string())),
    }

    let leads = list_leads(&app.db)?;
    let buffer = leads_workbook(&leads)?;
    info!(rows = leads.len(), "lead export");

    let filename = format!("leads_{}.xlsx", Utc::now().format("%Y%m%d"));
    xlsx_response(buffer, &filename)
}

/// Compares without short-circuiting on the first differing byte.
fn tokens_match(a: &str, b: &str) -> bool {
    a.len() == b.len()
        && a
            .bytes()
            .zip(b.bytes())
            .fold(0u8, |acc, (x, y)| acc | (x ^ y))
            == 0
}

fn parse_pairs(query: &str) -> Vec<(String, String)> {
    url::form_urlencoded::parse(query.as_bytes())
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn token_comparison() {
        assert!(tokens_match("s3cret", "s3cret"));
        assert!(!tokens_match("s3cret", "s3creT"));
        assert!(!tokens_match("s3cret", "s3cret!"));
    }

    #[test]
    fn query_pairs_are_decoded() {
        assert_eq!(
            parse_pairs("search=ocean+view&city=San%20Diego"),
            vec![
                ("search".to_string(), "ocean view".to_string()),
                ("city".to_string(), "San Diego".to_string())
            ]
        );
    }
}

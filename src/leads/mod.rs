// src/leads/mod.rs
//
// Lead-capture form submissions.

use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use crate::errors::ServerError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LeadKind {
    QuickContact,
    InformationRequest,
    Consultation,
    QuoteRequest,
    Newsletter,
}

impl LeadKind {
    pub const ALL: [LeadKind; 5] = [
        LeadKind::QuickContact,
        LeadKind::InformationRequest,
        LeadKind::Consultation,
        LeadKind::QuoteRequest,
        LeadKind::Newsletter,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            LeadKind::QuickContact => "quick-contact",
            LeadKind::InformationRequest => "information-request",
            LeadKind::Consultation => "consultation",
            LeadKind::QuoteRequest => "quote-request",
            LeadKind::Newsletter => "newsletter",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            LeadKind::QuickContact => "Quick Contact",
            LeadKind::InformationRequest => "Information Request",
            LeadKind::Consultation => "Consultation",
            LeadKind::QuoteRequest => "Quote Request",
            LeadKind::Newsletter => "Newsletter",
        }
    }

    /// Thank-you text shown after a successful submission.
    pub fn confirmation(self) -> &'static str {
        match self {
            LeadKind::QuickContact => "Thanks for reaching out. We'll get back to you shortly.",
            LeadKind::InformationRequest => {
                "Thanks! We'll send you more information about this property soon."
            }
            LeadKind::Consultation => {
                "Your consultation request is in. We'll confirm the time with you."
            }
            LeadKind::QuoteRequest => "Thanks! We'll prepare your quote and be in touch.",
            LeadKind::Newsletter => "You're subscribed. Watch your inbox for market updates.",
        }
    }
}

impl fmt::Display for LeadKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LeadKind {
    type Err = ServerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        LeadKind::ALL
            .into_iter()
            .find(|k| k.as_str() == s)
            .ok_or_else(|| ServerError::BadRequest(format!("unknown form '{s}'")))
    }
}

/// A submitted lead. Optional fields depend on the form kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Lead {
    pub id: Option<i64>,
    pub kind: LeadKind,
    pub name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
    pub interest: Option<String>,
    pub property: Option<String>,
    pub preferred_date: Option<String>,
    pub preferred_time: Option<String>,
    pub property_type: Option<String>,
    pub location: Option<String>,
    pub budget: Option<String>,
    pub timeframe: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Lead {
    /// Builds a lead from a url-encoded form body.
    pub fn from_form(body: &[u8], now: DateTime<Utc>) -> Result<Self, ServerError> {
        let fields: HashMap<String, String> = url::form_urlencoded::parse(body)
            .map(|(k, v)| (k.into_owned(), v.trim().to_string()))
            .collect();

        let field = |key: &str| fields.get(key).filter(|v| !v.is_empty()).cloned();

        let kind: LeadKind = field("kind")
            .ok_or_else(|| ServerError::BadRequest("form kind is required".to_string()))?
            .parse()?;

        let lead = Lead {
            id: None,
            kind,
            name: field("name").unwrap_or_default(),
            email: field("email").unwrap_or_default(),
            phone: field("phone"),
            message: field("message"),
            interest: field("interest"),
            property: field("property"),
            preferred_date: field("date"),
            preferred_time: field("time"),
            property_type: field("propertyType"),
            location: field("location"),
            budget: field("budget"),
            timeframe: field("timeframe"),
            created_at: now,
        };

        lead.validate()?;
        Ok(lead)
    }

    pub fn validate(&self) -> Result<(), ServerError> {
        if !is_valid_email(&self.email) {
            return Err(ServerError::BadRequest(
                "a valid email address is required".to_string(),
            ));
        }
        if self.kind != LeadKind::Newsletter && self.name.trim().is_empty() {
            return Err(ServerError::BadRequest("name is required".to_string()));
        }
        Ok(())
    }
}

/// `local@domain`, both parts non-empty.
pub fn is_valid_email(email: &str) -> bool {
    match email.trim().split_once('@') {
        Some((local, domain)) => !local.is_empty() && !domain.is_empty() && !domain.contains('@'),
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn now() -> DateTime<Utc> {
        Utc::now()
    }

    #[test]
    fn parses_consultation_form() {
        let body = b"kind=consultation&name=Ada+Lovelace&email=ada%40example.com&date=2025-06-01&time=10%3A30&message=";
        let lead = Lead::from_form(body, now()).unwrap();
        assert_eq!(lead.kind, LeadKind::Consultation);
        assert_eq!(lead.name, "Ada Lovelace");
        assert_eq!(lead.email, "ada@example.com");
        assert_eq!(lead.preferred_date.as_deref(), Some("2025-06-01"));
        assert_eq!(lead.preferred_time.as_deref(), Some("10:30"));
        assert_eq!(lead.message, None);
    }

    #[test]
    fn newsletter_needs_only_an_email() {
        let lead = Lead::from_form(b"kind=newsletter&email=a%40b.co", now()).unwrap();
        assert_eq!(lead.kind, LeadKind::Newsletter);
        assert!(lead.name.is_empty());
    }

    #[test]
    fn rejects_missing_name_bad_email_and_unknown_kind() {
        for body in [
            "kind=quick-contact&email=a%40b.co",
            "kind=quick-contact&name=Al&email=not-an-email",
            "kind=quick-contact&name=Al&email=%40b.co",
            "kind=spam&name=Al&email=a%40b.co",
            "name=Al&email=a%40b.co",
        ] {
            let err = Lead::from_form(body.as_bytes(), now()).unwrap_err();
            assert_eq!(err.status_code(), 400, "{body}");
        }
    }

    #[test]
    fn email_shape() {
        assert!(is_valid_email("x@y"));
        assert!(!is_valid_email("x@"));
        assert!(!is_valid_email("@y"));
        assert!(!is_valid_email("x@y@z"));
    }
}
